//! Behaviour of the public site that sits between the pages and the API:
//! search and availability lookups, the promotional popup, and how backend
//! failures are presented.

pub mod errors;
pub mod popup;
pub mod search;

pub use errors::{ERROR_PATH, ErrorQuery, Failure, error_page_url};
