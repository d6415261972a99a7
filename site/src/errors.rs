use payloads::{ClientError, StatusCode};

/// Route of the error page.
pub const ERROR_PATH: &str = "/error";

/// How a failed request is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The backend could not be reached or is overloaded. Callers fall back
    /// to defaults where they have one.
    Unavailable,
    /// The bearer token was refused. The request interceptor has already
    /// handled the redirect.
    Unauthorized,
    /// The backend rejected the input; shown inline.
    Invalid(String),
    /// Anything else; shown on the error page.
    Unexpected { status: u16, message: String },
}

impl Failure {
    pub fn classify(error: &ClientError) -> Self {
        match error {
            ClientError::Network(e) if e.is_decode() => Self::Unexpected {
                status: 502,
                message: "Unexpected response from the server".into(),
            },
            ClientError::Network(_) => Self::Unavailable,
            ClientError::APIError(status, body) => match *status {
                StatusCode::UNAUTHORIZED => Self::Unauthorized,
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Self::Invalid(strip_reason(body).to_string())
                }
                StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT => Self::Unavailable,
                status => Self::Unexpected {
                    status: status.as_u16(),
                    message: body.clone(),
                },
            },
        }
    }

    /// Text for an inline message.
    pub fn message(&self) -> String {
        match self {
            Self::Unavailable => "The service is temporarily unavailable. \
                                  Please try again shortly."
                .into(),
            Self::Unauthorized => {
                "Your session has expired. Please log in again.".into()
            }
            Self::Invalid(message) => message.clone(),
            Self::Unexpected { message, .. } if !message.is_empty() => {
                message.clone()
            }
            Self::Unexpected { .. } => "Something went wrong.".into(),
        }
    }

    /// Where to send the user, for failures that get the error page.
    pub fn error_page(&self) -> Option<String> {
        match self {
            Self::Unexpected { status, message } => {
                Some(error_page_url(*status, message))
            }
            _ => None,
        }
    }
}

// "Bad request: Postcode is required" -> "Postcode is required"
fn strip_reason(body: &str) -> &str {
    body.split_once(": ").map_or(body, |(_, detail)| detail)
}

/// The error page location for a status and message.
pub fn error_page_url(status: u16, message: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("status", &status.to_string())
        .append_pair("message", message)
        .finish();
    format!("{ERROR_PATH}?{query}")
}

/// Query parameters of the error page. Either may be missing or garbled, in
/// which case generic text is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorQuery {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ErrorQuery {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "status" => parsed.status = value.trim().parse().ok(),
                "message" if !value.trim().is_empty() => {
                    parsed.message = Some(value.into_owned())
                }
                _ => {}
            }
        }
        parsed
    }

    pub fn title(&self) -> String {
        match self.status {
            Some(404) => "Page not found".into(),
            Some(status) if status >= 500 => "Server error".into(),
            Some(status) => format!("Error {status}"),
            None => "Something went wrong".into(),
        }
    }

    pub fn description(&self) -> &str {
        self.message.as_deref().unwrap_or(
            "An unexpected error occurred. Please try again, or contact us \
             if the problem continues.",
        )
    }
}
