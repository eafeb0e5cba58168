use crate::constants::{DEFAULT_API_NAMESPACE, DEFAULT_MAX_AGE, header, method, status};
use crate::pipeline::{DEFAULT_STAGES, Pipeline, Stage};
use crate::util::is_http_token;
use serde::Deserialize;
use thiserror::Error;

/// Gatekeeper configuration. Missing fields in a configuration file fall back to
/// [`GatekeeperOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatekeeperOptions {
    /// Substring of the raw request path that marks the API namespace.
    pub api_namespace: String,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age: u64,
    pub credentials: bool,
    pub preflight_status: u16,
    pub stages: Vec<Stage>,
}

impl Default for GatekeeperOptions {
    fn default() -> Self {
        Self {
            api_namespace: DEFAULT_API_NAMESPACE.into(),
            allowed_methods: vec![method::GET.into(), method::POST.into(), method::OPTIONS.into()],
            allowed_headers: vec![
                header::AUTHORIZATION.into(),
                header::CONTENT_TYPE.into(),
                header::X_REQUESTED_WITH.into(),
            ],
            max_age: DEFAULT_MAX_AGE,
            credentials: true,
            preflight_status: status::OK,
            stages: DEFAULT_STAGES.to_vec(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the API namespace marker must not be empty")]
    EmptyApiNamespace,
    #[error("'{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("'{0}' is not a valid header name")]
    InvalidHeaderName(String),
    #[error("preflight status {0} is outside the 2xx range")]
    InvalidPreflightStatus(u16),
    #[error("the stage pipeline must not be empty")]
    EmptyPipeline,
    #[error("stage '{0}' appears more than once in the pipeline")]
    DuplicateStage(Stage),
    #[error("the pipeline must end with the pass_through stage")]
    PassThroughNotLast,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse gatekeeper configuration")]
    Parse(#[from] toml::de::Error),
    #[error("invalid gatekeeper configuration")]
    Invalid(#[from] ValidationError),
}

impl GatekeeperOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_namespace.trim().is_empty() {
            return Err(ValidationError::EmptyApiNamespace);
        }

        if let Some(invalid) = self
            .allowed_methods
            .iter()
            .find(|value| !is_http_token(value.trim()))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let Some(invalid) = self
            .allowed_headers
            .iter()
            .find(|value| !is_http_token(value.trim()))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        self.pipeline().map(|_| ())
    }

    pub fn pipeline(&self) -> Result<Pipeline, ValidationError> {
        Pipeline::new(self.stages.iter().copied())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
