pub mod admin;
mod contact;
mod error;
mod home;
mod not_found;
mod services;

pub use contact::ContactPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
