use crate::error::{ErrorBody, GateError};
use crate::headers::Headers;

/// Headers and status answering a preflight. The body is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub headers: Headers,
    pub status: u16,
}

/// A terminal 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub error: GateError,
}

impl Rejection {
    pub(crate) fn new(error: GateError) -> Self {
        Self { error }
    }

    pub fn status(&self) -> u16 {
        self.error.status()
    }

    pub fn body(&self) -> ErrorBody {
        self.error.body()
    }

    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        self.body().to_json()
    }
}

/// Outcome of [`Gatekeeper::check`](crate::Gatekeeper::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Originless request into the API namespace.
    Blocked(Rejection),
    /// `OPTIONS` request answered without reaching the handler.
    PreflightAccepted(PreflightResponse),
    /// Origin matched the allow-list; attach `headers` to the handler's response.
    Allowed { origin: String, headers: Headers },
    /// Origin present but not on the allow-list.
    Forbidden(Rejection),
    /// No origin outside the API namespace; run the handler untouched.
    PassThrough,
}

impl Decision {
    /// Status the gatekeeper imposes, `None` when the handler decides.
    pub fn status(&self) -> Option<u16> {
        match self {
            Decision::Blocked(rejection) | Decision::Forbidden(rejection) => {
                Some(rejection.status())
            }
            Decision::PreflightAccepted(response) => Some(response.status),
            Decision::Allowed { .. } | Decision::PassThrough => None,
        }
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Decision::PreflightAccepted(response) => Some(&response.headers),
            Decision::Allowed { headers, .. } => Some(headers),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Decision::Blocked(rejection) | Decision::Forbidden(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// `true` when the wrapped handler must not run.
    pub fn ends_response(&self) -> bool {
        matches!(
            self,
            Decision::Blocked(_) | Decision::PreflightAccepted(_) | Decision::Forbidden(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Decision::Blocked(_) => "blocked",
            Decision::PreflightAccepted(_) => "preflight_accepted",
            Decision::Allowed { .. } => "allowed",
            Decision::Forbidden(_) => "forbidden",
            Decision::PassThrough => "pass_through",
        }
    }
}
