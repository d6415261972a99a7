pub mod auth;
pub mod toast;

pub use auth::{AuthProvider, use_auth};
pub use toast::{Toast, ToastProvider, use_toast};
