//! Contact page component.
//!
//! Form state lives in a single signal; validation and the mailto handoff are
//! in [`crate::app::contact`].

use dioxus::prelude::*;

use crate::app::contact::{hand_off, ContactForm, RECIPIENT};
use crate::app::theme::use_theme;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/shannub556-marolix"),
    ("Portfolio", "https://shanmukhas-portfolio.netlify.app/"),
    ("LinkedIn", "https://www.linkedin.com/in/shanmukhabusappagari"),
];

/// Contact page component.
#[component]
pub fn Contact() -> Element {
    let theme = use_theme().active();
    let mut form = use_signal(ContactForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let link = form.write().submit();
        if let Some(link) = link {
            hand_off(&link);
        }
    };

    let current = form.read().clone();

    rsx! {
        div { class: theme.class("page"),
            section { class: theme.class("contact-hero"),
                h1 { class: theme.class("page-title"), "Contact Us" }
                p { class: theme.class("page-subtitle"),
                    "Get in touch with us for questions, feedback, or collaboration opportunities."
                }
            }

            section { class: theme.class("contact-content"),
                div { class: theme.class("contact-grid"),
                    div { class: theme.class("contact-info"),
                        h2 { class: theme.class("section-title"), "Get In Touch" }

                        div { class: theme.class("info-item"),
                            h3 { class: theme.class("info-label"), "Email" }
                            p { class: theme.class("info-value"), "{RECIPIENT}" }
                        }
                        div { class: theme.class("info-item"),
                            h3 { class: theme.class("info-label"), "Phone" }
                            p { class: theme.class("info-value"), "+91 9550685733" }
                        }
                        div { class: theme.class("info-item"),
                            h3 { class: theme.class("info-label"), "Address" }
                            p { class: theme.class("info-value"),
                                "Koramangala"
                                br {}
                                "Bengaluru, 560034"
                                br {}
                                "Karnataka, India"
                            }
                        }
                    }

                    div { class: theme.class("contact-form"),
                        h2 { class: theme.class("section-title"), "Send a Message" }
                        form {
                            class: theme.class("form"),
                            novalidate: true,
                            onsubmit: on_submit,

                            div { class: theme.class("form-group"),
                                label { r#for: "name", class: theme.class("form-label"), "Name" }
                                input {
                                    r#type: "text",
                                    id: "name",
                                    class: theme.class("form-input"),
                                    placeholder: "Your name",
                                    value: "{current.name}",
                                    oninput: move |evt| form.write().name = evt.value(),
                                }
                                if let Some(err) = &current.errors.name {
                                    p { class: "form-error", "{err}" }
                                }
                            }

                            div { class: theme.class("form-group"),
                                label { r#for: "email", class: theme.class("form-label"), "Email" }
                                input {
                                    r#type: "email",
                                    id: "email",
                                    class: theme.class("form-input"),
                                    placeholder: "your.email@example.com",
                                    value: "{current.email}",
                                    oninput: move |evt| form.write().email = evt.value(),
                                }
                                if let Some(err) = &current.errors.email {
                                    p { class: "form-error", "{err}" }
                                }
                            }

                            div { class: theme.class("form-group"),
                                label { r#for: "message", class: theme.class("form-label"), "Message" }
                                textarea {
                                    id: "message",
                                    rows: "5",
                                    class: theme.class("form-textarea"),
                                    placeholder: "Your message here...",
                                    value: "{current.message}",
                                    oninput: move |evt| form.write().message = evt.value(),
                                }
                                if let Some(err) = &current.errors.message {
                                    p { class: "form-error", "{err}" }
                                }
                            }

                            button { r#type: "submit", class: theme.class("form-button"), "Send Message" }
                        }
                    }
                }
            }

            section { class: theme.class("social"),
                h2 { class: theme.class("section-title"), "Follow Us" }
                div { class: theme.class("social-links"),
                    for (label, href) in SOCIAL_LINKS {
                        a {
                            key: "{label}",
                            href: "{href}",
                            class: theme.class("social-link"),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
