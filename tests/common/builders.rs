#![allow(dead_code)]

use origin_gatekeeper::constants::method;
use origin_gatekeeper::{
    AllowList, AllowListSource, Decision, Gatekeeper, GatekeeperOptions, PriorAuth,
    RequestContext, Stage,
};

#[derive(Default)]
pub struct GatekeeperBuilder {
    patterns: Vec<String>,
    api_namespace: Option<String>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    stages: Option<Vec<Stage>>,
}

impl GatekeeperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn api_namespace(mut self, value: impl Into<String>) -> Self {
        self.api_namespace = Some(value.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn stages<I>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = Stage>,
    {
        self.stages = Some(stages.into_iter().collect());
        self
    }

    pub fn options(&self) -> GatekeeperOptions {
        let defaults = GatekeeperOptions::default();
        GatekeeperOptions {
            api_namespace: self
                .api_namespace
                .clone()
                .unwrap_or(defaults.api_namespace.clone()),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            stages: self.stages.clone().unwrap_or(defaults.stages.clone()),
            ..defaults
        }
    }

    pub fn build(self) -> Gatekeeper<AllowList> {
        let options = self.options();
        Gatekeeper::new(options, AllowList::from_patterns(&self.patterns))
            .expect("valid gatekeeper configuration")
    }

    pub fn build_with<S: AllowListSource>(self, source: S) -> Gatekeeper<S> {
        Gatekeeper::new(self.options(), source).expect("valid gatekeeper configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    prior_auth: PriorAuth,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: "/".into(),
            origin: None,
            prior_auth: PriorAuth::Undecided,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn prior_auth(mut self, prior_auth: PriorAuth) -> Self {
        self.prior_auth = prior_auth;
        self
    }

    pub fn check<S: AllowListSource>(self, gatekeeper: &Gatekeeper<S>) -> Decision {
        let RequestBuilder {
            method,
            path,
            origin,
            prior_auth,
        } = self;
        let ctx = RequestContext {
            method: &method,
            path: &path,
            origin: origin.as_deref(),
            prior_auth,
        };
        gatekeeper.check(&ctx)
    }
}

pub fn gatekeeper() -> GatekeeperBuilder {
    GatekeeperBuilder::new()
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn get() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn post() -> RequestBuilder {
    RequestBuilder::new(method::POST)
}

pub fn preflight() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
