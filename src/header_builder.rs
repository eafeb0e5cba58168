use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::GatekeeperOptions;
use crate::util::join_header_values;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a GatekeeperOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a GatekeeperOptions) -> Self {
        Self { options }
    }

    /// Methods, headers and max-age answered to an `OPTIONS` request.
    pub(crate) fn build_preflight_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(3);
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_max_age_header());
        headers
    }

    /// Headers attached to a response whose origin matched the allow-list.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(5);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_credentials_header());
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = join_header_values(&self.options.allowed_methods) {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = join_header_values(&self.options.allowed_headers) {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
