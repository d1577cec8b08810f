//! Navigation bar with route links and the theme selector.

use dioxus::prelude::*;

use super::theme::ThemeSelect;
use crate::app::theme::use_theme;
use crate::app::Route;

/// Site navigation. The active link gets the themed `nav-link-active` classes.
#[component]
pub fn Navigation() -> Element {
    let theme = use_theme().active();

    let link_class = theme.class("nav-link");
    let active_class = theme.class("nav-link-active");

    rsx! {
        nav { class: theme.class("navigation"),
            div { class: theme.class("nav-container"),
                div { class: theme.class("nav-brand"),
                    Link { to: Route::Home {}, class: theme.class("brand-link"), "Theme Switcher" }
                }

                ul { class: theme.class("nav-menu"),
                    li { class: theme.class("nav-item"),
                        Link {
                            to: Route::Home {},
                            class: link_class.clone(),
                            active_class: active_class.clone(),
                            "Home"
                        }
                    }
                    li { class: theme.class("nav-item"),
                        Link {
                            to: Route::About {},
                            class: link_class.clone(),
                            active_class: active_class.clone(),
                            "About"
                        }
                    }
                    li { class: theme.class("nav-item"),
                        Link {
                            to: Route::Contact {},
                            class: link_class,
                            active_class: active_class,
                            "Contact"
                        }
                    }
                    li { class: theme.class("nav-item"),
                        ThemeSelect {}
                    }
                }
            }
        }
    }
}
