//! Contact form validation and mail-client handoff.

use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

/// Address that receives contact form messages.
pub const RECIPIENT: &str = "bussapagarishannu@gmail.com";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Per-field validation messages. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Contact form state: field values plus the errors from the last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
}

impl ContactForm {
    /// Check all fields against the current values.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.email = Some("Invalid email format".to_string());
        }

        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_string());
        }

        errors
    }

    /// Validate and, when valid, produce the mailto link and reset the form.
    ///
    /// Errors are recomputed on every call; on failure they are kept on the
    /// form and the field values are left untouched.
    pub fn submit(&mut self) -> Option<String> {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }

        let link = mailto_link(&self.name, &self.email, &self.message);
        *self = Self::default();
        Some(link)
    }
}

/// Build the `mailto:` URI carrying the sender's name, email and message.
pub fn mailto_link(name: &str, email: &str, message: &str) -> String {
    format!(
        "mailto:{}?subject=Message%20from%20{}&body={}%0A%0AFrom%3A%20{}",
        RECIPIENT,
        urlencoding::encode(name),
        urlencoding::encode(message),
        urlencoding::encode(email),
    )
}

/// Direct the user agent to the mail client.
pub fn hand_off(link: &str) {
    info!("Handing contact message to mail client");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(link) {
                tracing::warn!("Mail handoff failed: {:?}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(%link, "No user agent to hand off to");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            errors: FieldErrors::default(),
        }
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b.co", "first.last@example.com", "x+y@sub.domain.org"] {
            assert!(EMAIL_PATTERN.is_match(ok), "{ok}");
        }
        for bad in ["foo@bar", "foo", "@bar.com", "foo@.", "a b@c.d", "a@@b.c"] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_invalid_submit_reports_every_field() {
        let mut form = filled("", "foo@bar", "   ");
        assert_eq!(form.submit(), None);

        assert_eq!(form.errors.count(), 3);
        assert_eq!(form.errors.name.as_deref(), Some("Name is required"));
        assert_eq!(form.errors.email.as_deref(), Some("Invalid email format"));
        assert_eq!(form.errors.message.as_deref(), Some("Message is required"));
        // Values stay for the user to fix.
        assert_eq!(form.email, "foo@bar");
    }

    #[test]
    fn test_blank_email_is_required_error() {
        let form = filled("Ann", "  ", "Hi");
        assert_eq!(
            form.validate().email.as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn test_errors_recomputed_each_submit() {
        let mut form = filled("", "ann@example.com", "Hello");
        assert_eq!(form.submit(), None);
        assert_eq!(form.errors.count(), 1);

        form.name = "Ann".to_string();
        form.email = "broken".to_string();
        assert_eq!(form.submit(), None);
        assert_eq!(form.errors.name, None);
        assert_eq!(form.errors.email.as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn test_corrected_submit_hands_off_once_and_clears() {
        let mut form = filled("", "foo@bar", "");
        let mut handoffs = Vec::new();

        if let Some(link) = form.submit() {
            handoffs.push(link);
        }
        form.name = "Ann & Bob".to_string();
        form.email = "ann+bob@example.com".to_string();
        form.message = "Hello there!\nSee you?".to_string();
        if let Some(link) = form.submit() {
            handoffs.push(link);
        }

        assert_eq!(handoffs.len(), 1);
        assert_eq!(form, ContactForm::default());

        let link = &handoffs[0];
        assert!(link.starts_with("mailto:bussapagarishannu@gmail.com?"));
        assert!(link.contains("Ann%20%26%20Bob"));
        assert!(link.contains("ann%2Bbob%40example.com"));
        assert!(link.contains("Hello%20there%21%0ASee%20you%3F"));
    }

    #[test]
    fn test_mailto_query_decodes_to_input_values() {
        let link = mailto_link("Zoë", "zoe@example.com", "a=b&c");
        let parsed = url::Url::parse(&link).unwrap();
        assert_eq!(parsed.scheme(), "mailto");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("subject".to_string(), "Message from Zoë".to_string()));
        assert_eq!(
            pairs[1],
            ("body".to_string(), "a=b&c\n\nFrom: zoe@example.com".to_string())
        );
    }
}
