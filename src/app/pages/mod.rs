//! Page components, one per route.

mod about;
mod contact;
mod home;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
