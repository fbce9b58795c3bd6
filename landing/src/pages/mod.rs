// Routed pages

mod auth_placeholder;
mod home;
mod not_found;

pub use auth_placeholder::AuthPlaceholderPage;
pub use home::LandingPage;
pub use not_found::NotFoundPage;
