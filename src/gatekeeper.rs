use crate::context::{PriorAuth, RequestContext};
use crate::error::GateError;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{GatekeeperOptions, ValidationError};
use crate::pipeline::{Pipeline, Stage, StageOutcome};
use crate::result::{Decision, PreflightResponse, Rejection};
use crate::store::AllowListSource;

/// Per-request origin gate in front of an API namespace.
///
/// Stateless apart from the configured options; the allow-list is read from `source`
/// once per decision at most.
pub struct Gatekeeper<S> {
    options: GatekeeperOptions,
    pipeline: Pipeline,
    source: S,
}

/// Headers accumulated while walking the pipeline.
#[derive(Default)]
struct Evaluation {
    headers: HeaderCollection,
    allowed_origin: Option<String>,
}

impl<S> Gatekeeper<S>
where
    S: AllowListSource,
{
    pub fn new(options: GatekeeperOptions, source: S) -> Result<Self, ValidationError> {
        options.validate()?;
        let pipeline = options.pipeline()?;
        Ok(Self {
            options,
            pipeline,
            source,
        })
    }

    pub fn options(&self) -> &GatekeeperOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[tracing::instrument(
        level = "debug",
        name = "gatekeeper::check",
        skip_all,
        fields(method = %request.method, path = %request.path)
    )]
    pub fn check(&self, request: &RequestContext<'_>) -> Decision {
        let builder = HeaderBuilder::new(&self.options);
        let mut evaluation = Evaluation::default();

        for stage in self.pipeline.stages() {
            let outcome = match stage {
                Stage::AuthGuard => self.guard_api_namespace(request),
                Stage::Preflight => self.answer_preflight(request, &builder, &mut evaluation),
                Stage::OriginValidation => self.validate_origin(request, &builder, &mut evaluation),
                Stage::PassThrough => {
                    StageOutcome::Terminate(Self::pass_through(std::mem::take(&mut evaluation)))
                }
            };

            if let StageOutcome::Terminate(decision) = outcome {
                tracing::debug!(stage = %stage, decision = decision.kind(), "request decided");
                return decision;
            }
        }

        // Pipeline::new guarantees PassThrough is last, so the loop always returns.
        Decision::PassThrough
    }

    fn guard_api_namespace(&self, request: &RequestContext<'_>) -> StageOutcome {
        if request.prior_auth == PriorAuth::Decided {
            return StageOutcome::Continue;
        }

        if request.origin().is_none() && request.path.contains(self.options.api_namespace.as_str())
        {
            tracing::debug!("rejecting originless request to the API namespace");
            return StageOutcome::Terminate(Decision::Blocked(Rejection::new(
                GateError::DirectAccessBlocked,
            )));
        }

        StageOutcome::Continue
    }

    fn answer_preflight(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
        evaluation: &mut Evaluation,
    ) -> StageOutcome {
        if !request.is_preflight() {
            return StageOutcome::Continue;
        }

        let mut headers = std::mem::take(&mut evaluation.headers);
        headers.extend(builder.build_preflight_headers());

        StageOutcome::Terminate(Decision::PreflightAccepted(PreflightResponse {
            headers: headers.into_headers(),
            status: self.options.preflight_status,
        }))
    }

    fn validate_origin(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
        evaluation: &mut Evaluation,
    ) -> StageOutcome {
        let Some(origin) = request.origin() else {
            return StageOutcome::Continue;
        };

        let allow_list = self.source.snapshot();
        match allow_list.find_match(origin) {
            Some(pattern) => {
                tracing::debug!(origin, pattern = %pattern, "origin allowed");
                evaluation.headers.extend(builder.build_origin_headers(origin));
                evaluation.allowed_origin = Some(origin.to_owned());
                StageOutcome::Continue
            }
            None => {
                tracing::debug!(origin, patterns = allow_list.len(), "origin not allowed");
                StageOutcome::Terminate(Decision::Forbidden(Rejection::new(
                    GateError::OriginForbidden {
                        origin: origin.to_owned(),
                    },
                )))
            }
        }
    }

    fn pass_through(evaluation: Evaluation) -> Decision {
        match evaluation.allowed_origin {
            Some(origin) => Decision::Allowed {
                origin,
                headers: evaluation.headers.into_headers(),
            },
            None => Decision::PassThrough,
        }
    }
}

#[cfg(test)]
#[path = "gatekeeper_test.rs"]
mod gatekeeper_test;
