//! About-section image carousel sequence.

use advoca_model::CarouselImage;

pub const IMAGES: &[CarouselImage] = &[
    CarouselImage {
        path: "robert-sanchez.webp",
        caption: "Robert Sanchez - Health Equity Advocate",
    },
    CarouselImage {
        path: "workshoping.webp",
        caption: "Leading Health Equity Workshop",
    },
    CarouselImage {
        path: "virtual-event.webp",
        caption: "Virtual Health Education Event",
    },
    CarouselImage {
        path: "speaking.webp",
        caption: "Public Speaking Engagement",
    },
    CarouselImage {
        path: "presenting.webp",
        caption: "Presenting at Health Conference",
    },
    CarouselImage {
        path: "meet-your-speaker.webp",
        caption: "Meet Your Speaker",
    },
    CarouselImage {
        path: "kidneytalk.webp",
        caption: "Kidney Health Discussion",
    },
    CarouselImage {
        path: "keeping-me-healthy.webp",
        caption: "Health and Wellness Focus",
    },
    CarouselImage {
        path: "jentosy-blanket.webp",
        caption: "The Jentosy Project Initiative",
    },
    CarouselImage {
        path: "jen-keller.webp",
        caption: "Collaboration with Jen Keller",
    },
    CarouselImage {
        path: "chw.webp",
        caption: "Community Health Worker Training",
    },
    CarouselImage {
        path: "attending-nephcure.webp",
        caption: "NephCure Event Participation",
    },
];
