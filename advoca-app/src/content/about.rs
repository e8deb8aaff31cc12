//! About-section copy and advocacy pillar cards.

use advoca_model::Pillar;

pub const HEADLINE: &str = "Mission-Driven Kidney Health Advocate";

pub const LEAD_PARAGRAPHS: &[&str] = &[
    "I'm dedicated to a singular purpose: increasing living kidney donations \
     and amplifying the voices of underserved communities deeply affected by \
     rare kidney diseases like FSGS and IgA Nephropathy. As Co-Founder of \
     The Jentosy Project at Kidney Forward, I've led a national movement \
     designed to normalize conversations around living donation. By creating \
     culturally responsive outreach initiatives, coordinating impactful \
     storytelling events, and fostering strategic partnerships with \
     transplant centers, community leaders, and advocacy organizations, \
     we've significantly raised donor registrations in underserved \
     neighborhoods nationwide.",
    "In my current role at Albert Einstein Medical College, I guide \
     transplant candidates through each stage of their journey—from initial \
     evaluation to post-transplant support. My approach emphasizes \
     multidisciplinary collaboration, comprehensive attention to social \
     determinants of health, and personalized patient workshops designed to \
     improve long-term engagement and health outcomes. By consistently \
     translating frontline experiences into actionable \"field reports,\" I \
     help institutions refine programs and policies, ensuring patient needs \
     remain central to every decision.",
    "My approach to advocacy is built on four key pillars that guide every \
     initiative and partnership I undertake. These principles form the \
     foundation of my work in healthcare equity and community engagement:",
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "\u{1F91D}",
        title: "Deepening Advocacy Partnerships",
        summary: "Strengthening alliances with health-equity and \
                  rare-disease organizations to close resource gaps.",
    },
    Pillar {
        icon: "\u{1F30D}",
        title: "Geo-Targeted Community Engagement",
        summary: "Crafting bilingual materials and outreach tactics that \
                  resonate locally and foster lasting trust.",
    },
    Pillar {
        icon: "\u{1F465}",
        title: "Cross-Functional Collaboration",
        summary: "Bridging clinical teams, social workers, pharmacists, and \
                  educators—while upholding strict compliance standards.",
    },
    Pillar {
        icon: "\u{1F4CA}",
        title: "Data-Driven Impact Measurement",
        summary: "Embedding KPIs into every initiative to track progress and \
                  refine strategies in real time.",
    },
];

pub const CLOSING_PARAGRAPHS: &[&str] = &[
    "My advocacy journey began with co-founding Rehabilitation Through the \
     Arts (RTA), a transformative theater program that inspired the \
     acclaimed film \"Sing Sing.\" This early experience instilled in me a \
     deep understanding of how creative collaboration, cultural humility, \
     and resilience can dismantle barriers and spark meaningful change—\
     principles I continue to apply to every initiative I undertake.",
    "With a Bachelor's degree in Behavioral Science, a Master's in \
     Professional Studies, bilingual fluency in English and Spanish, and \
     over two decades of experience in grassroots and clinical advocacy, \
     I'm uniquely positioned to lead patient-centered outreach, cultivate \
     impactful community partnerships, and elevate the dialogue surrounding \
     living kidney donation on a national scale. My work intentionally \
     engages communities directly—through churches, barbershops, local \
     gatherings, sporting events, and even neighborhood nightspots—to \
     ensure conversations about kidney health happen where people feel most \
     comfortable and receptive. If you're seeking a dedicated Community \
     Advocate who combines clinical expertise with a visionary approach—\
     committed to making a measurable impact on kidney donor rates in \
     communities that need it most—let's connect and drive this vital \
     mission forward together.",
];
