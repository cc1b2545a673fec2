//! IQ Server API client implementation

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::api::{ApplicationApi, MembershipApi, OrganizationApi};
use super::models::{
    Application, ApplicationList, CreateApplicationRequest, CreateOrganizationRequest,
    Organization, OrganizationList,
};
use crate::config::ServerSettings;
use crate::error::{ApiError, Result};

/// Path segments of the v2 REST API root
const API_ROOT: [&str; 2] = ["api", "v2"];

/// IQ Server API client authenticating with HTTP Basic auth
pub struct IqClient {
    http: HttpClient,
    base_url: Url,
    username: String,
    password: String,
}

impl IqClient {
    /// Create a new client from resolved server settings
    pub fn new(server: &ServerSettings) -> Result<Self> {
        let base_url = Url::parse(&server.url).map_err(|e| {
            ApiError::Network(format!("Invalid server URL '{}': {}", server.url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Network(format!("Invalid server URL '{}'", server.url)).into());
        }

        if server.insecure {
            warn!("TLS certificate validation is disabled; do not use this against production");
        }

        let http = HttpClient::builder()
            .timeout(server.timeout)
            .danger_accept_invalid_certs(server.insecure)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            username: server.username.clone(),
            password: server.password.clone(),
        })
    }

    /// Build an API URL from path segments; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Network(format!("Invalid server URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(API_ROOT)
            .extend(segments);
        Ok(url)
    }

    /// Start an authenticated JSON request
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url.path());
        self.http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    /// Send a request and decode a JSON response body
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse response: {}. Body was: {}",
                e, body
            ))
            .into()
        })
    }

    /// Send a request whose response body is not needed
    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.send(builder).await?;
        if let Ok(body) = response.text().await
            && !body.is_empty()
        {
            debug!("Response body: {}", body);
        }
        Ok(())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(ApiError::from)?;
        Self::check_status(response).await
    }

    /// Map non-success statuses onto [`ApiError`]
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = if body.trim().is_empty() {
            status.to_string()
        } else {
            body.trim().to_string()
        };

        let err = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            StatusCode::CONFLICT => ApiError::Conflict(detail),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(detail),
            status if status.is_server_error() => ApiError::ServerError(detail),
            _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        };
        Err(err.into())
    }
}

#[async_trait]
impl OrganizationApi for IqClient {
    async fn list_organizations(&self) -> Result<OrganizationList> {
        let url = self.endpoint(&["organizations"])?;
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        let url = self.endpoint(&["organizations"])?;
        self.send_json(self.request(Method::POST, url).json(&request)).await
    }
}

#[async_trait]
impl ApplicationApi for IqClient {
    async fn create_application(&self, request: CreateApplicationRequest) -> Result<Application> {
        let url = self.endpoint(&["applications"])?;
        self.send_json(self.request(Method::POST, url).json(&request)).await
    }

    async fn find_applications(&self, public_id: &str) -> Result<ApplicationList> {
        let url = self.endpoint(&["applications"])?;
        let request = self.request(Method::GET, url).query(&[("publicId", public_id)]);
        self.send_json(request).await
    }

    async fn move_application(&self, application_id: &str, organization_id: &str) -> Result<()> {
        let url = self.endpoint(&[
            "applications",
            application_id,
            "move",
            "organization",
            organization_id,
        ])?;
        self.send_empty(self.request(Method::POST, url)).await
    }
}

#[async_trait]
impl MembershipApi for IqClient {
    async fn set_organization_role_member(
        &self,
        organization_id: &str,
        role_id: &str,
        member_name: &str,
    ) -> Result<()> {
        let url = self.endpoint(&[
            "roleMemberships",
            "organization",
            organization_id,
            "role",
            role_id,
            "user",
            member_name,
        ])?;
        self.send_empty(self.request(Method::PUT, url)).await
    }
}
