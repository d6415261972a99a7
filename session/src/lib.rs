//! Admin session: the authentication state machine, route guarding and the
//! handling of expired bearer tokens.
//!
//! The [`Session`] is an explicit object handed to whoever needs it; state
//! changes are published on an [`AuthSignal`] (a `watch` channel) that the
//! 401 interceptor shares, rather than through ambient globals.

mod auth;
mod expiry;
pub mod guard;
mod navigation;
mod signal;
mod state;

pub use auth::{Session, SessionError};
pub use expiry::SessionExpiry;
pub use navigation::{MemoryNavigator, Navigator};
pub use signal::AuthSignal;
pub use state::AuthState;

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "admin_token";
/// Prefix shared by every admin route.
pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
/// Where a successful login lands when no redirect was requested.
pub const DEFAULT_LANDING: &str = "/admin/dashboard";
/// Query parameter carrying the originally requested admin path.
pub const REDIRECT_PARAM: &str = "redirect";
