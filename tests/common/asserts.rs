#![allow(dead_code)]

use origin_gatekeeper::{Decision, GateError, Headers, Rejection};

pub fn assert_allowed(decision: Decision) -> (String, Headers) {
    match decision {
        Decision::Allowed { origin, headers } => (origin, headers),
        other => panic!("expected allowed decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: Decision) -> (Headers, u16) {
    match decision {
        Decision::PreflightAccepted(response) => (response.headers, response.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_blocked(decision: Decision) -> Rejection {
    match decision {
        Decision::Blocked(rejection) => {
            assert_eq!(rejection.error, GateError::DirectAccessBlocked);
            rejection
        }
        other => panic!("expected blocked decision, got {:?}", other),
    }
}

pub fn assert_forbidden(decision: Decision) -> Rejection {
    match decision {
        Decision::Forbidden(rejection) => rejection,
        other => panic!("expected forbidden decision, got {:?}", other),
    }
}
