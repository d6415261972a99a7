//! Wire types and the HTTP client shared by the browser app, the reference
//! backend and the integration tests.

pub mod api_client;
pub mod requests;
pub mod responses;
pub mod tokens;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use api_client::{APIClient, ClientError, UnauthorizedHandler};
pub use reqwest::StatusCode;
pub use tokens::{MemoryTokenStore, TokenStore};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ServiceId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct LeadId(pub Uuid);

/// Settings key holding the promotional popup configuration.
pub const POPUP_CONFIG_KEY: &str = "popup_config";
