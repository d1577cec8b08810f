//! Home page component.
//!
//! Shows featured products using a Dioxus resource that fetches once per mount.

use dioxus::prelude::*;

use crate::app::api::{HttpCatalog, ProductSource};
use crate::app::catalog::CatalogState;
use crate::app::theme::use_theme;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let theme = use_theme().active();

    let catalog = use_resource(|| async {
        CatalogState::from_result(HttpCatalog::default().fetch_products().await)
    });

    let state = catalog.read().clone().unwrap_or(CatalogState::Loading);

    rsx! {
        div { class: theme.class("page"),
            section { class: theme.class("hero"),
                h1 { class: theme.class("hero-title"), "Welcome to StyleSwitch" }
                p { class: theme.class("hero-subtitle"),
                    "Your one-stop shop for premium fashion, outdoor gear, and everyday essentials, all with a twist of personalization through themes!"
                }
            }

            section { class: theme.class("features"),
                h2 { class: theme.class("section-title"), "Featured Products" }
                div { class: theme.class("features-grid"),
                    if state.is_loading() {
                        div { class: theme.class("feature-card"), aria_busy: "true",
                            p { "Loading products..." }
                        }
                    }

                    if let Some(message) = state.error() {
                        div { class: theme.class("feature-card"),
                            p { "Error: {message}" }
                        }
                    }

                    for card in state.cards() {
                        div { key: "{card.id}", class: theme.class("feature-card"),
                            img { src: "{card.image}", alt: "{card.alt}" }
                            h3 { class: theme.class("feature-title"), "{card.title}" }
                            p { class: theme.class("feature-description"), "{card.description}" }
                            label { class: theme.class("product-price"), "{card.price}" }
                        }
                    }
                }
            }

            section { class: theme.class("cta"),
                h2 { class: theme.class("cta-title"), "Ready to Explore?" }
                p { class: theme.class("cta-text"),
                    "Navigate through our pages to see how the theme adapts across different content."
                }
            }
        }
    }
}
