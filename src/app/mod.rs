//! Dioxus client application entry point.
//!
//! This module provides the root App component, the route table and the
//! client-side state it wires together.

use dioxus::prelude::*;

pub mod api;
pub mod catalog;
pub mod components;
pub mod contact;
pub mod pages;
pub mod storage;
pub mod styles;
pub mod theme;
pub mod timer;

use components::Shell;
use pages::{About, Contact, Home};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme state lives at the root so every route sees the same theme
    use_theme_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Contact {}.to_string(), "/contact");
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("/about".parse::<Route>().ok(), Some(Route::About {}));
        assert_eq!("/contact".parse::<Route>().ok(), Some(Route::Contact {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    }
}
