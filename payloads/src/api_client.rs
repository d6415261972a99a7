use crate::{LeadId, ServiceId, TokenStore, requests, responses, tokens};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::Arc;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Side channel invoked whenever a request comes back 401.
///
/// `token` is the bearer token the failed request carried, if any, so the
/// handler can tell a stale token apart from the one currently stored.
pub trait UnauthorizedHandler: Send + Sync {
    fn handle_unauthorized(&self, token: Option<&str>);
}

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    /// Source of the bearer token attached to every request.
    pub tokens: Arc<dyn TokenStore>,
    pub on_unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
}

/// Construction
impl APIClient {
    /// A client with an empty in-memory token store and no 401 handler.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            tokens: Arc::new(tokens::MemoryTokenStore::new()),
            on_unauthorized: None,
        }
    }

    pub fn with_tokens(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_unauthorized_handler(
        mut self,
        handler: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    /// Attach the bearer token, send, and run the 401 interceptor.
    async fn send(&self, request: reqwest::RequestBuilder) -> ReqwestResult {
        let token = self.tokens.get();
        let request = match &token {
            Some(token) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {token}"),
            ),
            None => request,
        };

        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED
            && let Some(handler) = &self.on_unauthorized
        {
            tracing::debug!(url = %response.url(), "request unauthorized");
            handler.handle_unauthorized(token.as_deref());
        }

        Ok(response)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)).json(body))
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.send(self.inner_client.put(self.format_url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.delete(self.format_url(path)))
            .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.post(self.format_url(path)))
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.send(self.inner_client.get(self.format_url(path)))
            .await
    }

    async fn query_get(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        self.send(self.inner_client.get(self.format_url(path)).query(query))
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::LoginResponse, ClientError> {
        let response = self.post("login", details).await?;
        ok_body(response).await
    }

    /// Revoke the current bearer token on the backend.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Identity behind the current bearer token.
    pub async fn me(&self) -> Result<responses::User, ClientError> {
        let response = self.empty_get("me").await?;
        ok_body(response).await
    }

    /// Every service listing, including inactive ones.
    pub async fn all_services(
        &self,
    ) -> Result<Vec<responses::Service>, ClientError> {
        let response = self.empty_get("all-services").await?;
        ok_body(response).await
    }

    pub async fn create_service(
        &self,
        details: &requests::ServiceDetails,
    ) -> Result<responses::Service, ClientError> {
        let response = self.post("services", details).await?;
        ok_body(response).await
    }

    pub async fn update_service(
        &self,
        service_id: &ServiceId,
        details: &requests::ServiceDetails,
    ) -> Result<responses::Service, ClientError> {
        let response =
            self.put(&format!("services/{service_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_service(
        &self,
        service_id: &ServiceId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("services/{service_id}")).await?;
        ok_empty(response).await
    }

    pub async fn search_locations(
        &self,
        search: &requests::LocationSearch,
    ) -> Result<Vec<responses::Location>, ClientError> {
        let response = self.query_get("locations/search", search).await?;
        ok_body(response).await
    }

    pub async fn check_availability(
        &self,
        details: &requests::CheckAvailability,
    ) -> Result<responses::Availability, ClientError> {
        let response = self.post("check-availability", details).await?;
        ok_body(response).await
    }

    /// Read a stored setting by key.
    pub async fn setting<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<responses::SettingValue<T>, ClientError> {
        let response =
            self.empty_get(&format!("settings/{key}/value")).await?;
        ok_body(response).await
    }

    pub async fn popup_config(
        &self,
    ) -> Result<responses::PopupConfig, ClientError> {
        let setting = self.setting(crate::POPUP_CONFIG_KEY).await?;
        Ok(setting.value)
    }

    /// Leave a contact enquiry from the public site.
    pub async fn submit_enquiry(
        &self,
        details: &requests::ContactEnquiry,
    ) -> Result<LeadId, ClientError> {
        let response = self.post("contacts", details).await?;
        ok_body(response).await
    }

    /// Contact enquiries, newest first. Requires a bearer token.
    pub async fn leads(&self) -> Result<Vec<responses::Lead>, ClientError> {
        let response = self.empty_get("contacts").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of an API error; `None` for transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
