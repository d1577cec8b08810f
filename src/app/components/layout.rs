//! Shell layout wrapping every route with navigation and footer.

use chrono::Datelike;
use dioxus::prelude::*;

use super::nav::Navigation;
use crate::app::styles::SITE_STYLES;
use crate::app::theme::use_theme;
use crate::app::Route;

/// Root layout. Carries the active theme and transition flag as classes on
/// the outer container so every child re-renders with the same theme.
#[component]
pub fn Shell() -> Element {
    let theme = use_theme();
    let current = theme.active();
    let year = chrono::Utc::now().year();

    let app_class = shell_class(&current.to_string(), theme.is_transitioning());

    rsx! {
        document::Title { "StyleSwitch" }
        document::Style { {SITE_STYLES} }

        div { class: "{app_class}",
            Navigation {}

            main { class: current.class("main"),
                Outlet::<Route> {}
            }

            footer { class: current.class("footer"),
                p { class: current.class("footer-text"),
                    "© {year} Multi-Theme Switcher App. All rights reserved."
                }
            }
        }
    }
}

fn shell_class(theme: &str, transitioning: bool) -> String {
    if transitioning {
        format!("app theme-{theme} theme-transitioning")
    } else {
        format!("app theme-{theme}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_class() {
        assert_eq!(shell_class("2", false), "app theme-2");
        assert_eq!(shell_class("3", true), "app theme-3 theme-transitioning");
    }
}
