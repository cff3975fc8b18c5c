use crate::config::{Settings, DEFAULT_TIMEOUT};
use crate::error::ImggenError;
use crate::options::GenerationOptions;
use crate::request;
use crate::response;
use crate::types::{GenerationResult, ImageData};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

const GENERATIONS_PATH: &str = "images/generations";

fn timed_out_or(e: reqwest::Error, other: fn(reqwest::Error) -> ImggenError) -> ImggenError {
    if e.is_timeout() {
        ImggenError::RequestTimedOut(e)
    } else {
        other(e)
    }
}

/// A status code and body as received from the provider.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The client for the image generations endpoint.
///
/// It holds a `reqwest::Client` carrying the bearer token and the base URL all
/// requests are joined onto.
#[derive(Clone)]
pub struct ImggenClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ImggenClient {
    /// Creates a client from environment-derived [`Settings`].
    pub fn new(settings: &Settings) -> Result<Self, ImggenError> {
        Self::build(&settings.api_key, &settings.endpoint, settings.timeout)
    }

    /// Creates a client against a custom base URL with the default timeout.
    ///
    /// This is useful for testing or for OpenAI-compatible gateways.
    ///
    /// # Errors
    ///
    /// - `ImggenError::InvalidApiKey` if the key cannot be sent as a header.
    /// - `ImggenError::InvalidEndpoint` if `base_url` is not a valid URL.
    pub fn new_with_url(api_key: &str, base_url: &str) -> Result<Self, ImggenError> {
        Self::build(api_key, base_url, DEFAULT_TIMEOUT)
    }

    fn build(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, ImggenError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ImggenError::ClientBuild)?;

        // Without a trailing slash `join` would replace the last path segment.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;

        Ok(Self { client, base_url })
    }

    /// The full URL of the generations endpoint.
    pub fn generations_url(&self) -> Result<Url, ImggenError> {
        Ok(self.base_url.join(GENERATIONS_PATH)?)
    }

    /// Posts a serialized request body and returns the raw response.
    ///
    /// Non-success statuses are not errors here; they are returned as-is for
    /// [`response::interpret`] to handle.
    pub async fn send(&self, payload: String) -> Result<RawResponse, ImggenError> {
        let url = self.generations_url()?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| timed_out_or(e, ImggenError::RequestFailed))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| timed_out_or(e, ImggenError::ResponseReadFailed))?;
        tracing::debug!("response status {}, {} bytes", status, body.len());

        Ok(RawResponse { status, body })
    }

    /// Generates an image and returns the first result.
    ///
    /// # Returns
    ///
    /// The [`ImageData`] of the first generated image.
    ///
    /// # Errors
    ///
    /// - `ImggenError::ApiError` if the provider rejects the request.
    /// - Transport and parse errors as described on [`ImggenError`].
    pub async fn generate(
        &self,
        options: &GenerationOptions,
        prompt: &str,
    ) -> Result<ImageData, ImggenError> {
        let payload = request::build(options, prompt)?;
        let RawResponse { status, body } = self.send(payload).await?;

        match response::parse(status, &body)? {
            GenerationResult::Success(image) => Ok(image),
            GenerationResult::Failure(error) => Err(ImggenError::ApiError {
                status,
                error,
                body,
            }),
        }
    }
}
