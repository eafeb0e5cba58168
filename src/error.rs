use crate::constants::{FORBIDDEN_CODE, status};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two ways the gatekeeper turns a request away. Both end the request with a 403.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Direct access not allowed")]
    DirectAccessBlocked,
    #[error("Origin not allowed")]
    OriginForbidden { origin: String },
}

impl GateError {
    pub fn code(&self) -> &'static str {
        FORBIDDEN_CODE
    }

    pub fn status(&self) -> u16 {
        status::FORBIDDEN
    }

    pub fn origin(&self) -> Option<&str> {
        match self {
            GateError::DirectAccessBlocked => None,
            GateError::OriginForbidden { origin } => Some(origin),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_owned(),
            message: self.to_string(),
            data: ErrorData {
                status: self.status(),
                origin: self.origin().map(str::to_owned),
            },
        }
    }
}

/// JSON body written with every rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub data: ErrorData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl ErrorBody {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
