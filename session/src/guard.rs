//! Route guarding for the admin area.
//!
//! Two gates exist. [`admit`] runs before anything is rendered and only looks
//! at whether a token is stored at all. [`decide`] runs once the session state
//! is known and chooses between waiting, rendering and redirecting.

use crate::{ADMIN_PREFIX, AuthState, DEFAULT_LANDING, LOGIN_PATH, REDIRECT_PARAM};

/// Admin paths reachable without a session.
pub const PUBLIC_ADMIN_PATHS: &[&str] = &[LOGIN_PATH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The auth check has not settled; render nothing and do not redirect.
    Pending,
    Render,
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Proceed,
    Redirect(String),
}

pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn is_login_path(path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PUBLIC_ADMIN_PATHS.contains(&path)
}

fn is_public_path(path: &str) -> bool {
    !is_admin_path(path) || is_login_path(path)
}

/// Decide what a guarded view does for the given session state and path.
pub fn decide(state: &AuthState, path: &str) -> GuardDecision {
    match state {
        AuthState::Unknown => GuardDecision::Pending,
        AuthState::LoggedIn(_) => GuardDecision::Render,
        AuthState::LoggedOut if is_public_path(path) => GuardDecision::Render,
        AuthState::LoggedOut => GuardDecision::Redirect(login_redirect(path)),
    }
}

/// Route-level gate on token presence alone.
pub fn admit(path: &str, has_token: bool) -> Admission {
    if has_token || is_public_path(path) {
        Admission::Proceed
    } else {
        Admission::Redirect(login_redirect(path))
    }
}

/// The login location for someone who asked for `path`.
pub fn login_redirect(path: &str) -> String {
    if is_public_path(path) {
        return LOGIN_PATH.to_string();
    }
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", encode_param(path))
}

/// Where to go after a successful login, given the `redirect` query
/// parameter if one was supplied.
pub fn redirect_target(param: Option<&str>) -> String {
    let Some(target) = param else {
        return DEFAULT_LANDING.to_string();
    };
    let path = target.split(['?', '#']).next().unwrap_or_default();
    if is_admin_path(path) && !is_login_path(path) {
        target.to_string()
    } else {
        DEFAULT_LANDING.to_string()
    }
}

// Plain paths stay readable; anything unusual is form-encoded.
fn encode_param(value: &str) -> String {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/-_.~".contains(c))
    {
        value.to_string()
    } else {
        url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{UserId, responses::User};

    fn logged_in() -> AuthState {
        AuthState::LoggedIn(User {
            id: UserId(Default::default()),
            email: "a@b.com".into(),
            name: "Admin".into(),
        })
    }

    #[test]
    fn test_path_classification() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/dashboard"));
        assert!(!is_admin_path("/administrator"));
        assert!(!is_admin_path("/services"));

        assert!(is_login_path("/admin/login"));
        assert!(is_login_path("/admin/login/"));
        assert!(!is_login_path("/admin/leads"));
        assert!(!is_login_path("/"));
    }

    #[test]
    fn test_decide_waits_while_checking() {
        assert_eq!(
            decide(&AuthState::Unknown, "/admin/dashboard"),
            GuardDecision::Pending
        );
        assert_eq!(
            decide(&AuthState::Unknown, "/admin/login"),
            GuardDecision::Pending
        );
    }

    #[test]
    fn test_decide_logged_out() {
        assert_eq!(
            decide(&AuthState::LoggedOut, "/admin/dashboard"),
            GuardDecision::Redirect(
                "/admin/login?redirect=/admin/dashboard".into()
            )
        );
        // no redirect loop on the login page itself
        assert_eq!(
            decide(&AuthState::LoggedOut, "/admin/login"),
            GuardDecision::Render
        );
        assert_eq!(
            decide(&AuthState::LoggedOut, "/services"),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_decide_logged_in_always_renders() {
        for path in ["/admin/dashboard", "/admin/login", "/admin/leads", "/"] {
            assert_eq!(decide(&logged_in(), path), GuardDecision::Render);
        }
    }

    #[test]
    fn test_admit() {
        assert_eq!(
            admit("/admin/leads", false),
            Admission::Redirect("/admin/login?redirect=/admin/leads".into())
        );
        assert_eq!(admit("/admin/leads", true), Admission::Proceed);
        assert_eq!(admit("/admin/login", false), Admission::Proceed);
        assert_eq!(admit("/contact", false), Admission::Proceed);
    }

    #[test]
    fn test_login_redirect_encodes_unusual_paths() {
        assert_eq!(
            login_redirect("/admin/a b"),
            "/admin/login?redirect=%2Fadmin%2Fa+b"
        );
        assert_eq!(login_redirect("/admin/login"), "/admin/login");
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(None), "/admin/dashboard");
        assert_eq!(redirect_target(Some("/admin/leads")), "/admin/leads");
        assert_eq!(
            redirect_target(Some("/admin/leads?page=2")),
            "/admin/leads?page=2"
        );
        assert_eq!(redirect_target(Some("/services")), "/admin/dashboard");
        assert_eq!(
            redirect_target(Some("https://evil.example/admin")),
            "/admin/dashboard"
        );
        assert_eq!(redirect_target(Some("//admin/x")), "/admin/dashboard");
        assert_eq!(redirect_target(Some("/admin/login")), "/admin/dashboard");
        assert_eq!(redirect_target(Some("")), "/admin/dashboard");
    }
}
