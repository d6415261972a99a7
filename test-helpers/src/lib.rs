use api::time::TimeSource;

pub mod mock;
use api::{Config, telemetry};
use payloads::{MemoryTokenStore, TokenStore, requests, responses};
use reqwest::StatusCode;
use rust_decimal::dec;
use std::sync::Arc;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const ADMIN_EMAIL: &str = "admin@homecare.test";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const TOKEN_TTL_HOURS: i64 = 12;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    /// Client sharing `tokens`; requests carry whatever token is stored.
    pub client: payloads::APIClient,
    pub tokens: Arc<MemoryTokenStore>,
    pub time_source: TimeSource,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A client with its own empty token store.
    pub fn anonymous_client(&self) -> payloads::APIClient {
        payloads::APIClient::new(self.address())
    }

    /// Log in as the administrator, storing the bearer token for
    /// `self.client`.
    pub async fn login_admin(&self) -> anyhow::Result<responses::User> {
        let response = self.client.login(&admin_credentials()).await?;
        let (Some(token), Some(user)) = (response.token, response.user) else {
            anyhow::bail!("login response is missing the token or user");
        };
        self.tokens.set(&token);
        Ok(user)
    }

    /// Submit the contact form as a member of the public.
    pub async fn submit_enquiry(
        &self,
        name: &str,
    ) -> anyhow::Result<payloads::LeadId> {
        let enquiry = requests::ContactEnquiry {
            name: name.to_string(),
            ..enquiry_a()
        };
        Ok(self.anonymous_client().submit_enquiry(&enquiry).await?)
    }

    /// Move the backend clock past the bearer token lifetime.
    pub fn expire_tokens(&self) {
        self.time_source
            .advance(jiff::Span::new().hours(TOKEN_TTL_HOURS).minutes(1));
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let time_source = TimeSource::new("2025-01-01T00:00:00Z".parse().unwrap());

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        admin_email: ADMIN_EMAIL.into(),
        admin_password: secrecy::SecretBox::new(Box::new(
            ADMIN_PASSWORD.to_string(),
        )),
        token_ttl_hours: TOKEN_TTL_HOURS,
    };

    let server = api::build(&mut config, time_source.clone()).unwrap();
    tokio::spawn(server);

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = payloads::APIClient::new(format!(
        "http://127.0.0.1:{}",
        config.port
    ))
    .with_tokens(tokens.clone());

    TestApp {
        port: config.port,
        client,
        tokens,
        time_source,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn admin_credentials() -> requests::LoginCredentials {
    requests::LoginCredentials {
        email: ADMIN_EMAIL.into(),
        password: ADMIN_PASSWORD.into(),
    }
}

pub fn service_details_a() -> requests::ServiceDetails {
    requests::ServiceDetails {
        name: "Dementia Care".into(),
        slug: "dementia-care".into(),
        summary: "Specialist support for people living with dementia".into(),
        description: "Consistent carers trained in dementia-friendly \
                      routines."
            .into(),
        hourly_rate: Some(dec!(79.50)),
        is_active: true,
    }
}

pub fn enquiry_a() -> requests::ContactEnquiry {
    requests::ContactEnquiry {
        name: "Margaret Nguyen".into(),
        email: "margaret@example.com".into(),
        phone: Some("0400 000 000".into()),
        postcode: Some("2042".into()),
        message: "Looking for weekday help for my father.".into(),
    }
}
