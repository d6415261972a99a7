mod use_fetch;
mod use_leads;
mod use_location_search;
mod use_services;
mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_cache};
pub use use_leads::use_leads;
pub use use_location_search::{use_availability_check, use_location_search};
pub use use_services::use_services;
pub use use_title::use_title;

/// Distinguishes "not loaded yet" from "loaded, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
