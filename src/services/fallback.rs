//! Built-in rows shown when the data service is unreachable or empty.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::{Category, PortfolioImage, Testimonial};

// 2024-06-01T00:00:00Z
const SEEDED_AT: i64 = 1_717_200_000;

fn seeded_at() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(SEEDED_AT, 0).unwrap_or_default()
}

fn image(
    order: i32,
    file: &str,
    title: &str,
    description: &str,
    description_key: Option<&str>,
    category: Category,
    tags: &[&str],
) -> PortfolioImage {
    PortfolioImage {
        id: format!("fallback-{order}"),
        title: title.into(),
        description: description.into(),
        description_key: description_key.map(String::from),
        image_url: format!("/assets/gallery/{file}.jpg"),
        thumbnail_url: Some(format!("/assets/gallery/thumbnails/{file}.jpg")),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        featured: order <= 3,
        display_order: order,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

pub fn fallback_images() -> Vec<PortfolioImage> {
    vec![
        image(
            1,
            "full-arm-darkest-stain",
            "Bridal Elegance",
            "Full bridal coverage with layered paisleys",
            Some("gallery.descriptions.bridalFullHand"),
            Category::Bridal,
            &["bridal", "full-arm", "traditional"],
        ),
        image(
            2,
            "intricate-hand-mandala",
            "Palm Mandala",
            "A festive mandala centred on the palm",
            Some("gallery.descriptions.festivalMandala"),
            Category::Festival,
            &["mandala", "palm"],
        ),
        image(
            3,
            "minimal-finger-lines",
            "Nordic Lines",
            "Fine-line finger details",
            Some("gallery.descriptions.minimalistFinger"),
            Category::Minimalist,
            &["fingers", "fine-line"],
        ),
        image(
            4,
            "traditional-diamond-hand-design",
            "Diamond Lattice",
            "Traditional diamond lattice across the back of the hand",
            None,
            Category::Bridal,
            &["back-hand", "lattice", "traditional"],
        ),
        image(
            5,
            "medium-hand-art",
            "Botanical Fusion",
            "Nordic vines woven into traditional motifs",
            Some("gallery.descriptions.fusionVines"),
            Category::Fusion,
            &["botanical", "vines"],
        ),
        image(
            6,
            "eid-celebration-cuff",
            "Celebration Cuff",
            "Lace-style cuff for Eid celebrations",
            None,
            Category::Festival,
            &["cuff", "lace"],
        ),
        image(
            7,
            "golden-hour-shoot",
            "Golden Hour",
            "Editorial henna styled for an outdoor shoot",
            None,
            Category::Photoshoot,
            &["editorial", "outdoor"],
        ),
        image(
            8,
            "stain-day-one",
            "Stain, Day One",
            "Fresh orange stain straight after removing the paste",
            None,
            Category::StainProgression,
            &["stain", "day-1"],
        ),
        image(
            9,
            "stain-day-three",
            "Stain, Day Three",
            "The same design after three days",
            Some("gallery.descriptions.stainDayThree"),
            Category::StainProgression,
            &["stain", "day-3"],
        ),
    ]
}

fn testimonial(
    order: i32,
    name: &str,
    initial: &str,
    text: &str,
    occasion: &str,
) -> Testimonial {
    Testimonial {
        id: order.to_string(),
        client_name: name.into(),
        client_initial: Some(initial.into()),
        testimonial_text: text.into(),
        occasion: occasion.into(),
        rating: 5,
        image_url: None,
        is_featured: true,
        display_order: order,
        is_published: true,
        created_at: seeded_at(),
    }
}

pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "Priya Sharma",
            "P.S.",
            "Supriya's henna artistry is absolutely breathtaking! The Nordic-inspired designs she created for my wedding were elegant and unique. Every guest complimented my henna.",
            "bridal",
        ),
        testimonial(
            2,
            "Emma Andersson",
            "E.A.",
            "As someone who loves minimalism, I was amazed by how Supriya blended traditional henna with Scandinavian aesthetics. The result was perfect for my festival celebration.",
            "festival",
        ),
        testimonial(
            3,
            "Aisha Patel",
            "A.P.",
            "The attention to detail in Supriya's work is incredible. My photoshoot henna designs were not only beautiful but also told a story. Highly recommend her services!",
            "photoshoot",
        ),
        testimonial(
            4,
            "Lisa Johansson",
            "L.J.",
            "Working with Supriya was a wonderful experience. Her fusion of Indian heritage with Nordic minimalism created something truly special for my private party.",
            "private party",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fallback_images_are_stored_and_unique() {
        let images = fallback_images();
        let ids: HashSet<_> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), images.len());
        assert!(images.iter().all(|i| i.category.is_stored()));
        assert!(images.windows(2).all(|w| w[0].display_order < w[1].display_order));
    }

    #[test]
    fn fallback_description_keys_resolve() {
        for image in fallback_images() {
            if let Some(key) = &image.description_key {
                assert!(crate::models::description_for_key(key).is_some(), "{key}");
            }
        }
    }
}
