//! Theme selector for the three site themes.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, ThemeId};

/// Drop-down bound to the theme context. Selecting an option starts a
/// transition; the commit lands after the transition delay.
#[component]
pub fn ThemeSelect() -> Element {
    let mut theme = use_theme();
    let mut focused = use_signal(|| false);
    let current = theme.active();

    let wrapper_class = if focused() {
        format!("{} select-focused", current.class("theme-selector"))
    } else {
        current.class("theme-selector")
    };

    rsx! {
        div { class: current.class("header-content"),
            div { class: "{wrapper_class}",
                select {
                    id: "theme-select",
                    class: current.class("select"),
                    value: "{current}",
                    onchange: move |evt: FormEvent| {
                        match evt.value().parse::<ThemeId>() {
                            Ok(requested) => theme.request_change(requested),
                            Err(e) => tracing::debug!("Ignoring selection: {}", e),
                        }
                    },
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| focused.set(false),
                    for option_theme in ThemeId::ALL {
                        option {
                            key: "{option_theme}",
                            value: "{option_theme}",
                            selected: option_theme == current,
                            "{option_theme.label()}"
                        }
                    }
                }
            }
        }
    }
}
