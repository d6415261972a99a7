use payloads::responses::User;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// A check is in flight; gated views must not render yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(User),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn loading_auth_check(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut | Self::Unknown => None,
        }
    }
}
