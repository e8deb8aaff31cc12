//! Mission-section copy.

use advoca_model::MissionStatement;

pub const INTRO: &str = "Empowering individuals and communities through \
                         comprehensive healthcare advocacy and education.";

pub const STATEMENTS: &[MissionStatement] = &[
    MissionStatement {
        icon: "\u{1F3E5}",
        title: "Patient Advocacy",
        body: "When I was first diagnosed with FSGS, I had no idea what \
               those four letters would come to mean in my life. Focal \
               Segmental Glomerulosclerosis is a rare kidney disease that \
               causes scarring in parts of the kidneys' filtering units \
               (glomeruli). Over time, that damage can lead to kidney \
               failure. It disproportionately affects people of African, \
               Caribbean, and Hispanic descent—and research suggests that \
               genetics, environment, and social factors all play a role in \
               who gets this disease and how it progresses.\n\n\
               IgA Nephropathy is another rare kidney condition, sometimes \
               called Berger's disease, which occurs when an antibody called \
               immunoglobulin A builds up in the kidneys, causing \
               inflammation. This inflammation can eventually impair kidney \
               function, especially when left undiagnosed or untreated. Like \
               FSGS, it's often invisible until it's advanced, and it's not \
               widely understood in many communities of color.\n\n\
               At the time of my diagnosis, I didn't know what questions to \
               ask. I didn't see myself reflected in any of the materials. \
               And I certainly didn't feel like anyone was speaking directly \
               to people like me—Black, Puerto Rican, from the Bronx—trying \
               to make sense of a condition I had never even heard of.\n\n\
               That's why I became a patient advocate. Not because I had all \
               the answers, but because I knew what it felt like to have \
               none.\n\n\
               Being a patient advocate means using my lived experience to \
               help others navigate a healthcare system that often feels \
               cold, complex, or inaccessible. It means standing in the \
               gap—between patients and healthcare professionals, between \
               fear and understanding, between surviving and thriving.\n\n\
               It also means working with healthcare systems and \
               pharmaceutical companies, not just critiquing them. Because \
               in order to better understand diseases like FSGS and IgA \
               Nephropathy, we need research that reflects our communities. \
               We need clinical trials designed with equity in mind. We need \
               companies that listen to patient voices from the \
               beginning—not as an afterthought.\n\n\
               A real patient advocate doesn't just amplify stories—they \
               help shape systems. They push for culturally relevant \
               education, build bridges between science and lived \
               experience, and foster trust in communities that have long \
               been neglected.\n\n\
               For me, advocacy is personal. It's a commitment to making \
               sure that rare doesn't mean forgotten. Whether I'm mentoring \
               a newly diagnosed patient, developing outreach materials, or \
               collaborating on strategies for community education, I carry \
               this mission with me: people matter.\n\n\
               And when we treat people like they matter—when we educate, \
               empower, and uplift—we don't just change individual outcomes. \
               We shift entire systems. That's what being a patient advocate \
               means to me.",
    },
    MissionStatement {
        icon: "\u{1F465}",
        title: "Community Workshops",
        body: "I lead dynamic, community-rooted workshops that meet people \
               where they are—virtually and in person. Through The Jentosy \
               Project, We In The World, and Chromatic Black, I've \
               facilitated sessions in Atlanta, Washington D.C., and New \
               York City, connecting with communities across health, \
               housing, and justice spaces. These workshops aren't just \
               informational—they're transformational.\n\n\
               I've worked with organizations like STRIVE to support \
               fatherhood and reentry programs, and with Housing Works to \
               lead life-coaching and wellness sessions. My workshops \
               explore the complexities of kidney health, rare diseases like \
               FSGS and IgA Nephropathy, and the everyday challenges people \
               face in accessing quality care. Each session is built to \
               foster trust, spark real dialogue, and provide practical \
               tools for change.\n\n\
               Workshops have the power to unlock community leadership, \
               deepen understanding, and help people imagine new \
               possibilities for wellness and connection. They create space \
               for healing, learning, and mobilizing around solutions that \
               reflect people's lived realities.",
    },
    MissionStatement {
        icon: "\u{1F3A4}",
        title: "Public Speaking",
        body: "Public speaking is where I turn lived experience into \
               purpose-driven storytelling. I speak with clarity and \
               compassion about resilience, identity, and the path from \
               patient to advocate. As someone who's faced the complexities \
               of a rare kidney disease diagnosis firsthand, I understand \
               how vital it is to share honest, human stories that move \
               people to think—and act—differently.\n\n\
               I've given talks and keynotes for healthcare institutions, \
               advocacy groups, universities, and national nonprofits. \
               Whether the focus is on navigating rare conditions like FSGS \
               and IgA Nephropathy, building trust in care settings, or \
               empowering communities to advocate for themselves, I bring a \
               voice rooted in both personal experience and professional \
               practice.\n\n\
               My goal is to inform, inspire, and ignite connection. I help \
               audiences see the person behind the diagnosis, the family \
               behind the policy, and the community behind the data. \
               Speaking is not just about delivering information—it's about \
               opening hearts and minds to new ways of understanding and \
               engaging with the world around us.",
    },
];
