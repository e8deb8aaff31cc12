//! Resume content.

use advoca_model::{Education, Experience, ResumeProfile};

pub const PROFILE: ResumeProfile = ResumeProfile {
    name: "ROBERT A. SANCHEZ",
    headline: "Clinical Social Interviewer & Patient Advocate",
    phone: "347-290-3482",
    email: "robertp.sanchez@outlook.com",
    locality: "Bronx, NY 10462",
    summary: "Strategic Clinical Social Interviewer & Patient Advocate with \
              expertise in patient advocacy, stakeholder engagement, and \
              program development. Proven ability to advance health equity \
              through cultural humility and collaborative research \
              initiatives. Eager to leverage skills in cross-functional \
              collaboration and policy development to support \
              patient-centered care and community empowerment.",
};

pub const SKILLS_LEFT: &[&str] = &[
    "Patient Advocacy & Education",
    "Community & Stakeholder Engagement",
    "Cross-Functional Collaboration",
    "KPI Development & Data Analysis",
    "Collaborative mindset",
    "Meeting facilitation",
    "Policy Improvements",
];

pub const SKILLS_RIGHT: &[&str] = &[
    "Program Development & Strategic Planning",
    "Mixed-Methods Research & Evaluation",
    "Cultural Humility & Health Equity",
    "Operational management",
    "Policy development",
    "Outreach strategies",
    "Teamwork",
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "SENIOR CLINICAL INTERVIEWER & PATIENT ADVOCATE",
        organization: "Albert Einstein Medical College",
        location: "Bronx, NY",
        span: "October 2020 - Present",
        bullets: &[
            "Guide patients through kidney transplant evaluation, \
             coordinating multidisciplinary care and addressing social \
             determinants of health.",
            "Develop and facilitate living donation and post-transplant \
             support workshops, improving patient engagement and education.",
            "Liaise between clinical teams, social services, and community \
             partners to streamline referrals and resource access.",
            "Contribute to health literacy initiatives, performing chart \
             reviews and optimizing scheduling workflows.",
            "Administered interviews by following scripts and using \
             appropriate interviewing techniques and protocols.",
        ],
    },
    Experience {
        role: "PRINCIPLE LEAD, THE JENTOSY PROJECT",
        organization: "Kidney Forward",
        location: "Remote, United States",
        span: "January 2022 - Present",
        bullets: &[
            "Founded The Jentosy Project, a national initiative to expand \
             access to live kidney donation for Black and Brown patients.",
            "Designed and executed outreach strategies to increase donor \
             awareness and diversify the national kidney registry.",
            "Collaborated with transplant centers, community leaders, and \
             national advocacy groups to achieve project goals.",
        ],
    },
    Experience {
        role: "STEERING COMMITTEE MEMBER, ACCELERATOR TEAMS MODEL & STRATEGY",
        organization: "PCORI PRIMED Clinical Research Network",
        location: "United States",
        span: "November 2021 - Present",
        bullets: &[
            "Member of the Accelerator Steering Committee across nine \
             topic-specific workstreams (e.g., Disparities/Kidney Disease).",
            "Design and deploy patient engagement toolkits and trainings to \
             foster co-learning among researchers and community advocates.",
            "Embed intersectionality frameworks into engagement activities, \
             enhancing cultural competence and stakeholder representation.",
            "Report outcomes and secure Governance Board approvals for key \
             strategic initiatives.",
        ],
    },
    Experience {
        role: "COMMUNITY BOARD MEMBER, STRUCTURAL RACISM & KIDNEY OUTCOMES",
        organization: "Icahn School of Medicine at Mount Sinai",
        location: "New York, NY",
        span: "October 2018 - Present",
        bullets: &[
            "Advise on mixed-methods research exploring structural racism as \
             a \"third risk\" factor in APOL1-associated kidney disease.",
            "Co-design qualitative studies (photovoice, focus groups) and \
             longitudinal cohort analyses to quantify systemic barriers.",
            "Pilot a navigator-led intervention to mitigate effects of \
             structural racism on patient outcomes.",
            "Translate field insights into policy recommendations for \
             program refinement.",
            "Participated in community events as an ambassador for the \
             organization's mission and goals.",
        ],
    },
    Experience {
        role: "PROJECT LEAD, HEALTH EQUITY",
        organization: "WE at The World Health Equity",
        location: "New York, NY",
        span: "January 2020 - October 2021",
        bullets: &[
            "Developed and implemented strategies to reduce transplant \
             wait-times for Black and Brown communities by 35%.",
            "Built a national network of transplant physicians, nonprofit \
             leaders, and donors to amplify advocacy and fundraising.",
            "Established KPI frameworks to measure outreach effectiveness \
             and inform continuous program improvements.",
            "Organized virtual/in-person events (infairs, info sessions) to \
             increase donor awareness and community accountability.",
            "Successfully managed multiple programs simultaneously, ensuring \
             all deliverables were met on time and within budget.",
            "Provided technical guidance to team members throughout the \
             duration of a project.",
        ],
    },
    Experience {
        role: "BILINGUAL FACILITATOR",
        organization: "Housing Works",
        location: "New York, NY",
        span: "September 2017 - Dec",
        bullets: &[
            "Facilitated 200+ clinical support groups for 6,000+ \
             justice-involved individuals, covering mental health and \
             reentry topics.",
            "Designed and delivered soft-skills curriculum (anger \
             management, conflict resolution), achieving a 75% skill-uptake \
             rate.",
            "Placed over 1,000 participants in training programs and \
             employment sites, supporting successful community \
             reintegration.",
            "Organized and facilitated team meetings with effective \
             communication skills.",
            "Developed training materials to ensure participants were \
             prepared for upcoming events.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "M.P.S. IN PROFESSIONAL STUDIES",
        school: "New York Theological Seminary",
    },
    Education {
        degree: "B.S. IN BEHAVIORAL SCIENCE",
        school: "Mercy College, NY",
    },
    Education {
        degree: "CLINICAL SOCIAL WORK PRACTICES IN MSW COURSEWORK (MSW Pending)",
        school: "The Silberman School of Social Work",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Mental Health First Aid",
    "Motivational Interviewing",
    "Front End Software Engineering, Columbia University, 01/01/21",
];

pub const COURSEWORK: &str = "Clinical Social Work Practices (MSW \
                              coursework), The Silberman School of Social \
                              Work, 01/01/15, 01/01/16";

pub const REFERENCES: &str = "References available upon request.";

pub const LANGUAGES: &str = "English & Spanish";
