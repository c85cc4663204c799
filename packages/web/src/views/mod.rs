mod home;
pub use home::Home;

mod pages;
pub use pages::{About, Contact, Translator};
