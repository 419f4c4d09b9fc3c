//! Static site content: pricing, aftercare and contact details.

/// A design tier shown on the pricing flip cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTier {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub price_sek: u32,
    pub examples: [&'static str; 3],
    pub image: &'static str,
}

impl DesignTier {
    /// Icons are either an emoji or a root-relative image path.
    pub fn icon_is_image(&self) -> bool {
        self.icon.starts_with('/')
    }
}

pub const DESIGN_TIERS: [DesignTier; 4] = [
    DesignTier {
        id: "simple",
        name: "Simple",
        icon: "🌿",
        description: "Clean lines and delicate accents",
        details: "Perfect for a first henna or a quick treat",
        price_sek: 100,
        examples: ["Single finger vine", "Small palm motif", "Wrist band"],
        image: "/assets/gallery/traditional-diamond-hand-design.jpg",
    },
    DesignTier {
        id: "medium",
        name: "Medium",
        icon: "/assets/icons/medium.png",
        description: "Balanced patterns with more coverage",
        details: "Florals and mandalas with room to breathe",
        price_sek: 150,
        examples: ["Half-hand floral", "Mandala with fingertips", "Back-hand trail"],
        image: "/assets/gallery/medium-hand-art.jpg",
    },
    DesignTier {
        id: "intricate",
        name: "Intricate",
        icon: "/assets/icons/intricate.png",
        description: "Dense detail and layered motifs",
        details: "For celebrations that deserve a statement",
        price_sek: 350,
        examples: ["Full palm mandala", "Lace-style cuff", "Layered paisleys"],
        image: "/assets/gallery/intricate-hand-mandala.jpg",
    },
    DesignTier {
        id: "bridal",
        name: "Bridal",
        icon: "💍",
        description: "Both hands and feet, fully personalised",
        details: "Includes a design consultation and a trial motif",
        price_sek: 3500,
        examples: ["Hidden initials", "Storytelling panels", "Elbow-length coverage"],
        image: "/assets/gallery/full-arm-darkest-stain.jpg",
    },
];

/// Column headings of the price matrix, in order.
pub const PLACEMENTS: [&str; 6] = [
    "Palm",
    "Wrist",
    "Bangle",
    "Half Hand",
    "Three-Quarter",
    "Elbow",
];

/// One row of the price matrix; prices follow [`PLACEMENTS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRow {
    pub design: &'static str,
    pub prices_sek: [u32; 6],
}

pub const PRICE_MATRIX: [PriceRow; 3] = [
    PriceRow {
        design: "Simple",
        prices_sek: [100, 150, 200, 250, 300, 350],
    },
    PriceRow {
        design: "Medium",
        prices_sek: [150, 200, 250, 300, 350, 400],
    },
    PriceRow {
        design: "Intricate",
        prices_sek: [350, 400, 500, 650, 800, 1000],
    },
];

/// Formats a price the way the cards print it, e.g. `3,500 SEK`.
pub fn format_sek(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 8);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" SEK");
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareStep {
    pub title: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 4],
}

pub const CARE_STEPS: [CareStep; 4] = [
    CareStep {
        title: "First 24 Hours",
        description: "The foundation for a deep, rich stain",
        details: [
            "Keep the paste on for at least 6-8 hours (overnight is ideal)",
            "Gently scrape off the dried paste, never wash with water",
            "Apply a mixture of lemon juice and sugar to seal the design",
            "Avoid water contact for the first 24 hours",
        ],
    },
    CareStep {
        title: "Color Development",
        description: "Watch your henna darken beautifully",
        details: [
            "Initial color will be light orange",
            "Over 48-72 hours, it will deepen to rich mahogany",
            "Avoid excessive sweating during this period",
            "The palm develops the darkest stain",
        ],
    },
    CareStep {
        title: "Care & Maintenance",
        description: "Preserve your art for 2-3 weeks",
        details: [
            "Minimize water exposure on the design",
            "Apply natural oils (coconut, olive) to protect the stain",
            "Avoid chlorinated water and harsh soaps",
            "Exfoliation will fade the design faster",
        ],
    },
    CareStep {
        title: "Longevity Tips",
        description: "Make your henna last longer",
        details: [
            "Wear gloves when doing dishes or cleaning",
            "Apply oil before bathing to create a protective barrier",
            "Avoid scrubbing the area",
            "Natural fading is part of the beauty",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "How long does henna last?",
        answer: "Typically 2-3 weeks, depending on care and body placement. Hands and feet stain darkest and last longest.",
    },
    Faq {
        question: "Is your henna 100% natural?",
        answer: "Yes. I use only pure, natural henna powder with essential oils. No chemicals, no PPD, completely safe for skin.",
    },
    Faq {
        question: "Can I shower after getting henna?",
        answer: "Wait at least 24 hours before the first shower. After that, minimize water exposure and apply oil beforehand.",
    },
    Faq {
        question: "Why is my henna orange at first?",
        answer: "This is completely normal. Henna oxidizes over 48-72 hours, deepening from orange to brown to rich mahogany.",
    },
];

/// Accordion toggle: tapping the open entry closes it, any other replaces it.
pub fn toggle_expanded(expanded: Option<usize>, index: usize) -> Option<usize> {
    if expanded == Some(index) {
        None
    } else {
        Some(index)
    }
}

pub const WHATSAPP_NUMBER: &str = "918420153353";
pub const WHATSAPP_DISPLAY: &str = "+91 8420153353";
pub const CONTACT_EMAIL: &str = "guptasupriya333@gmail.com";
pub const INSTAGRAM_HANDLE: &str = "nordicsoulhenna";
pub const BOOKING_MESSAGE: &str = "Hi, I am interested in booking a henna appointment. Could you please provide more information about pricing and availability?";

/// `wa.me` deep link with a pre-filled message.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if message.is_empty() {
        format!("https://wa.me/{digits}")
    } else {
        format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
    }
}

pub fn mailto_link(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{address}?subject={}", urlencoding::encode(subject)),
        None => format!("mailto:{address}"),
    }
}

pub fn instagram_link(handle: &str) -> String {
    format!("https://instagram.com/{}", handle.trim_start_matches('@'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("+91 842-015", "Hi, henna?"),
            "https://wa.me/91842015?text=Hi%2C%20henna%3F"
        );
        assert_eq!(whatsapp_link("46700000000", ""), "https://wa.me/46700000000");
    }

    #[test]
    fn booking_link_matches_published_deep_link() {
        let link = whatsapp_link(WHATSAPP_NUMBER, BOOKING_MESSAGE);
        assert!(link.starts_with("https://wa.me/918420153353?text=Hi%2C%20I%20am%20interested"));
        assert!(link.ends_with("availability%3F"));
    }

    #[test]
    fn mailto_with_subject() {
        assert_eq!(mailto_link("a@b.se", None), "mailto:a@b.se");
        assert_eq!(
            mailto_link("a@b.se", Some("Bridal enquiry")),
            "mailto:a@b.se?subject=Bridal%20enquiry"
        );
    }

    #[test]
    fn at_most_one_faq_is_expanded() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
        assert_eq!(toggle_expanded(Some(2), 2), None);
        assert_eq!(toggle_expanded(Some(2), 0), Some(0));
    }

    #[test]
    fn prices_are_grouped_by_thousands() {
        assert_eq!(format_sek(100), "100 SEK");
        assert_eq!(format_sek(3500), "3,500 SEK");
        assert_eq!(format_sek(1234567), "1,234,567 SEK");
    }

    #[test]
    fn matrix_prices_grow_with_coverage() {
        for row in PRICE_MATRIX {
            assert!(row.prices_sek.windows(2).all(|w| w[0] < w[1]), "{}", row.design);
        }
        assert!(DESIGN_TIERS[1].icon_is_image());
        assert!(!DESIGN_TIERS[0].icon_is_image());
    }
}
