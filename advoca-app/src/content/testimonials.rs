//! Testimonial sequence for the rotating quote display.

use advoca_model::Testimonial;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Sarah Johnson",
        role: "Medical Director",
        organization: "Mount Sinai Hospital",
        quote: "Robert's dedication to health equity and patient advocacy has \
                transformed our approach to community engagement. His work \
                with The Jentosy Project has been instrumental in increasing \
                living donor awareness.",
        portrait: "testimonial-1.jpg",
    },
    Testimonial {
        name: "Maria Rodriguez",
        role: "Community Health Worker",
        organization: "Bronx Health Center",
        quote: "Working with Robert has been transformative for our \
                community. His cultural humility and deep understanding of \
                healthcare disparities have helped us reach and serve more \
                patients effectively.",
        portrait: "testimonial-2.jpg",
    },
    Testimonial {
        name: "James Wilson",
        role: "Patient Advocate",
        organization: "Kidney Forward",
        quote: "Robert's leadership in the kidney health community has been \
                invaluable. His innovative approaches to patient education \
                and support have made a real difference in countless lives.",
        portrait: "testimonial-3.jpg",
    },
];

pub const SHARE_TITLE: &str = "Share Your Story";
pub const SHARE_BODY: &str = "Have you been impacted by our work? We'd love \
                              to hear your story and potentially feature it \
                              here.";
pub const SHARE_CTA: &str = "Share Your Experience";
