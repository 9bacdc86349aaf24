//! Story catalog
//!
//! The static data behind the gallery grid and the home page's featured
//! events. Records are defined once at startup and never mutated; catalog
//! order is insertion order and every downstream view preserves it.

use serde::{Deserialize, Serialize};

/// Sentinel category that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub category: String,
}

/// A promoted event on the home page. Unlike gallery stories these link out
/// to an external registration page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedEvent {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub link: String,
}

fn story(
    id: u32,
    image: &str,
    title: &str,
    date: &str,
    category: &str,
    description: &str,
) -> StoryRecord {
    StoryRecord {
        id,
        image: image.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: Some(date.to_string()),
        category: category.to_string(),
    }
}

/// The gallery catalog, in display order.
pub fn gallery_stories() -> Vec<StoryRecord> {
    vec![
        story(
            1,
            "/images/1.webp",
            "Society Group Photo",
            "6 September 2025",
            "event",
            "The whole society in one frame at the opening of the academic year.",
        ),
        story(
            2,
            "/images/2.webp",
            "Orientation Morning Session",
            "6 September 2025",
            "event",
            "First-year students warming up before the welcome briefing.",
        ),
        story(
            3,
            "/images/3.webp",
            "Warm-up with the Mentor Team",
            "6 September 2025",
            "event",
            "Plenty of energy on display as the mentor team led the morning routine.",
        ),
        story(
            4,
            "/images/4.webp",
            "Faculty Welcome Talk",
            "6 September 2025",
            "event",
            "A short address from the software engineering faculty.",
        ),
        story(
            5,
            "/images/5.webp",
            "Freshers Group Photo",
            "6 September 2025",
            "event",
            "The newest members of the society, class of 2025.",
        ),
        story(
            6,
            "/images/6.webp",
            "Games",
            "6 September 2025",
            "event",
            "Prize-giving for the winners and everyone who took part.",
        ),
        story(
            7,
            "/images/7.webp",
            "Games",
            "7 September 2024",
            "event",
            "Team challenges on the second afternoon of orientation week.",
        ),
        story(
            8,
            "/images/8.webp",
            "Closing Ceremony",
            "7 September 2024",
            "event",
            "Capturing the energy of the closing session of orientation week.",
        ),
        story(
            9,
            "/images/9.webp",
            "Committee Handover",
            "7 September 2024",
            "event",
            "Outgoing and incoming committees together on stage.",
        ),
    ]
}

/// The three promoted events on the home page.
pub fn featured_events() -> Vec<FeaturedEvent> {
    vec![
        FeaturedEvent {
            id: 1,
            image: "/images/featured-bootcamp.webp".to_string(),
            title: "Rust Systems Bootcamp 2026".to_string(),
            date: "Applications close 30 July 2026".to_string(),
            description: "Sharpen your systems programming through an interactive \
                          bootcamp run with industry mentors."
                .to_string(),
            link: "https://bootcamp.example.org/rust".to_string(),
        },
        FeaturedEvent {
            id: 2,
            image: "/images/featured-cloud.webp".to_string(),
            title: "Cloud Study Jam".to_string(),
            date: "31 January – 23 February 2026".to_string(),
            description: "Hands-on sessions covering cloud fundamentals, with \
                          credits provided for every participant."
                .to_string(),
            link: "https://cloud.example.org/study-jam".to_string(),
        },
        FeaturedEvent {
            id: 3,
            image: "/images/featured-hackathon.webp".to_string(),
            title: "Winter Hackathon".to_string(),
            date: "Registration closes 31 January 2026".to_string(),
            description: "48 hours of building with teams from every department. \
                          Open to all experience levels."
                .to_string(),
            link: "https://hackathon.example.org/winter".to_string(),
        },
    ]
}

/// Filter chips shown above the gallery grid: `(category id, label)`.
pub fn category_filters() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL_CATEGORIES, "All"),
        ("event", "Events"),
        ("workshop", "Workshops"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gallery_ids_unique() {
        let stories = gallery_stories();
        let ids: HashSet<u32> = stories.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), stories.len());
    }

    #[test]
    fn test_gallery_order_is_stable() {
        let first = gallery_stories();
        let second = gallery_stories();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gallery_has_nine_event_records() {
        let stories = gallery_stories();
        assert_eq!(stories.len(), 9);
        assert!(stories.iter().all(|s| s.category == "event"));
    }

    #[test]
    fn test_exactly_two_games_records() {
        let stories = gallery_stories();
        let matches: Vec<&StoryRecord> = stories
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains("games")
                    || s.description.to_lowercase().contains("games")
            })
            .collect();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|s| s.title == "Games"));
    }

    #[test]
    fn test_category_filters_include_all_sentinel() {
        let filters = category_filters();
        assert_eq!(filters[0].0, ALL_CATEGORIES);
        assert!(filters.iter().any(|(id, _)| *id == "event"));
    }

    #[test]
    fn test_featured_events_link_out() {
        for event in featured_events() {
            assert!(event.link.starts_with("https://"));
        }
    }
}
