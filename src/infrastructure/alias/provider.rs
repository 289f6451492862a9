//! External shortening provider alias strategy.
//!
//! Delegates alias creation to a TinyURL-style endpoint that answers
//! `GET <endpoint>?url=<target>` with a short URL in the response body.
//! The blocking HTTP call runs on the blocking thread pool and is bounded
//! twice: by the agent's global timeout and by an outer `tokio` timeout, so
//! a stuck provider can never hang a create request.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::domain::AliasGenerator;
use crate::error::AppError;
use crate::utils::codegen::is_url_safe_code;

/// Alias strategy backed by an external shortening provider.
pub struct HttpProviderAlias {
    endpoint: String,
    timeout: Duration,
    agent: Agent,
}

impl HttpProviderAlias {
    /// Creates a provider strategy for `endpoint` with the given timeout.
    ///
    /// `endpoint` is the provider's create URL without query parameters,
    /// e.g. `https://tinyurl.com/api-create.php`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            endpoint: endpoint.into(),
            timeout,
            agent,
        }
    }

    /// Performs the provider request (synchronous, called from `spawn_blocking`).
    fn request_sync(agent: Agent, request_url: String) -> Result<String, AppError> {
        let response = agent
            .get(&request_url)
            .call()
            .map_err(|e| AppError::generation_failed(format!("provider unreachable: {e}")))?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| AppError::generation_failed(format!("provider response unreadable: {e}")))
    }

    /// Extracts the alias from the short URL a provider returned.
    fn extract_code(short_url: &str) -> Result<String, AppError> {
        let parsed = Url::parse(short_url.trim())
            .map_err(|_| AppError::generation_failed("provider returned an invalid short URL"))?;

        let code = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();

        if !is_url_safe_code(&code) {
            return Err(AppError::generation_failed(
                "provider returned an unusable alias",
            ));
        }

        Ok(code)
    }
}

#[async_trait]
impl AliasGenerator for HttpProviderAlias {
    async fn generate(&self, original_url: &str) -> Result<String, AppError> {
        let request_url = Url::parse_with_params(&self.endpoint, &[("url", original_url)])
            .map_err(|e| AppError::generation_failed(format!("invalid provider endpoint: {e}")))?
            .to_string();

        let agent = self.agent.clone();
        let task = tokio::task::spawn_blocking(move || Self::request_sync(agent, request_url));

        let body = match tokio::time::timeout(self.timeout, task).await {
            Err(_) => {
                return Err(AppError::generation_failed("provider request timed out"));
            }
            Ok(Err(e)) => {
                return Err(AppError::generation_failed(format!(
                    "provider task failed: {e}"
                )));
            }
            Ok(Ok(result)) => result?,
        };

        let code = Self::extract_code(&body)?;
        debug!(code, "external provider issued alias");

        Ok(code)
    }

    fn name(&self) -> &'static str {
        "external-provider"
    }
}
