pub mod availability_checker;
pub mod layout;
pub mod location_search;
pub mod promo_popup;
pub mod require_admin;
pub mod scroll_animator;
pub mod service_form;
pub mod toast;

pub use availability_checker::AvailabilityChecker;
pub use location_search::LocationSearch;
pub use promo_popup::PromoPopup;
pub use require_admin::{RequireAdmin, Spinner};
pub use scroll_animator::ScrollAnimator;
pub use service_form::ServiceForm;
pub use toast::ToastContainer;
