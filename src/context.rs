use crate::constants::method;

/// Whether an earlier stage of the host already settled authentication for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorAuth {
    #[default]
    Undecided,
    Decided,
}

#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Raw request target as received, query string included.
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub prior_auth: PriorAuth,
}

impl<'a> RequestContext<'a> {
    /// The `Origin` header, treating an empty value as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
