//! Resource library listing.

use advoca_model::{Resource, ResourceCategory, ResourceKind};

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Understanding Kidney Health",
        description: "A comprehensive guide to kidney health, prevention, \
                      and early detection.",
        category: ResourceCategory::Education,
        kind: ResourceKind::Pdf,
        file: "resources/kidney-health-guide.pdf",
        thumbnail: "resources/thumb-1.jpg",
        date: "March 2024",
    },
    Resource {
        title: "Living Donation Process",
        description: "Step-by-step guide to the living donation process and \
                      what to expect.",
        category: ResourceCategory::Process,
        kind: ResourceKind::Pdf,
        file: "resources/donation-process.pdf",
        thumbnail: "resources/thumb-2.jpg",
        date: "February 2024",
    },
    Resource {
        title: "Community Engagement Strategies",
        description: "Best practices for engaging communities in health \
                      equity initiatives.",
        category: ResourceCategory::Advocacy,
        kind: ResourceKind::Article,
        file: "resources/community-engagement.html",
        thumbnail: "resources/thumb-3.jpg",
        date: "January 2024",
    },
];

pub const REQUEST_TITLE: &str = "Can't Find What You're Looking For?";
pub const REQUEST_BODY: &str = "Let us know what resources would be helpful \
                                for you, and we'll work on creating them.";
pub const REQUEST_CTA: &str = "Request Resource";
