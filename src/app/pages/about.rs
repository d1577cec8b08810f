//! About page component.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

const CARDS: [(&str, &str); 3] = [
    (
        "Our Mission",
        "We believe that great user experiences start with beautiful, accessible, and customizable interfaces. Our Theme Switcher demonstrates how modern web applications can adapt to different user preferences while maintaining functionality and performance.",
    ),
    (
        "Technology Stack",
        "Built with Rust and Dioxus, compiled to WebAssembly. Styles are plain CSS keyed by theme, and the selected theme is remembered in your browser between visits.",
    ),
    (
        "Design Philosophy",
        "Clean, intuitive, and accessible design is at the core of everything we do. Each theme is carefully crafted to provide a unique experience while maintaining consistency and usability across all interactions.",
    ),
];

const TEAM: [(&str, &str); 3] = [
    ("Frontend Developer", "Frontend Architecture"),
    ("UI/UX Designer", "Theme Design & Animation"),
    ("Rust Engineer", "Type Safety & Performance"),
];

/// About page component.
#[component]
pub fn About() -> Element {
    let theme = use_theme().active();

    rsx! {
        div { class: theme.class("page"),
            section { class: theme.class("about-hero"),
                h1 { class: theme.class("page-title"), "About Us" }
                p { class: theme.class("page-subtitle"),
                    "Learn more about our mission and the team behind Theme Switcher."
                }
            }

            section { class: theme.class("about-content"),
                div { class: theme.class("about-grid"),
                    for (title, body) in CARDS {
                        div { key: "{title}", class: theme.class("about-card"),
                            h2 { class: theme.class("card-title"), "{title}" }
                            p { class: theme.class("card-content"), "{body}" }
                        }
                    }
                }
            }

            section { class: theme.class("team"),
                h2 { class: theme.class("section-title"), "Meet the Team" }
                div { class: theme.class("team-grid"),
                    for (name, role) in TEAM {
                        div { key: "{name}", class: theme.class("team-member"),
                            h3 { class: theme.class("member-name"), "{name}" }
                            p { class: theme.class("member-role"), "{role}" }
                        }
                    }
                }
            }
        }
    }
}
