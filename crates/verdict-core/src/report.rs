//! The single failure-reporting seam used by every assertion helper.

use std::panic::Location;
use std::sync::OnceLock;

use crate::errors::{AssertionFailure, ErrorInfo, VerdictError};
use crate::json::to_canonical_json_bytes;
use crate::policy::{ReportFormat, ReportPolicy};

/// Surfaces an assertion failure to the surrounding test harness.
///
/// Implementations must diverge: the assertion that triggered the report has
/// no meaningful way to continue.
pub trait Reporter: Send + Sync {
    /// Signals the failure. Never returns.
    fn report(&self, failure: AssertionFailure) -> !;
}

/// Default reporter: renders the failure according to its policy and panics,
/// which the Rust test harness records as a failed test.
#[derive(Debug, Clone, Default)]
pub struct PanicReporter {
    policy: ReportPolicy,
}

impl PanicReporter {
    /// Creates a reporter rendering with the given policy.
    pub fn new(policy: ReportPolicy) -> Self {
        Self { policy }
    }

    /// Policy applied when rendering.
    pub fn policy(&self) -> &ReportPolicy {
        &self.policy
    }
}

impl Reporter for PanicReporter {
    fn report(&self, failure: AssertionFailure) -> ! {
        if self.policy.log_failures {
            tracing::debug!(
                code = failure.code(),
                location = failure.info().context.get("location").map(String::as_str),
                "assertion failed"
            );
        }
        let rendered = render(&failure, &self.policy);
        panic!("{rendered}")
    }
}

/// Renders a failure as text or JSON according to `policy`.
///
/// The text form always starts with the bare message.
pub fn render(failure: &AssertionFailure, policy: &ReportPolicy) -> String {
    match policy.format {
        ReportFormat::Text => {
            let info = failure.info();
            let mut out = info.message.clone();
            if policy.include_context {
                for (key, value) in &info.context {
                    out.push_str(&format!("\n  {key}: {value}"));
                }
            }
            if policy.include_hint {
                if let Some(hint) = &info.hint {
                    out.push_str(&format!("\n  hint: {hint}"));
                }
            }
            out
        }
        ReportFormat::Json => match to_canonical_json_bytes(failure.info()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode failure as json");
                failure.message().to_string()
            }
        },
    }
}

static REPORTER: OnceLock<Box<dyn Reporter>> = OnceLock::new();

/// Installs the process-wide reporter.
///
/// Succeeds once, and only before the first failure has been reported; the
/// default reporter is installed lazily on first use.
pub fn install_reporter(reporter: Box<dyn Reporter>) -> Result<(), VerdictError> {
    REPORTER.set(reporter).map_err(|_| {
        VerdictError::Reporter(
            ErrorInfo::new(
                "verdict.reporter.installed",
                "a reporter has already been installed",
            )
            .with_hint("install the reporter before the first assertion failure"),
        )
    })
}

fn default_policy() -> ReportPolicy {
    ReportPolicy::discover().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to the default report policy");
        ReportPolicy::default()
    })
}

fn reporter() -> &'static dyn Reporter {
    REPORTER
        .get_or_init(|| Box::new(PanicReporter::new(default_policy())))
        .as_ref()
}

/// Hands `failure` to the installed reporter, recording the caller location.
#[track_caller]
pub fn raise_assertion_error(failure: AssertionFailure) -> ! {
    let location = Location::caller();
    reporter().report(failure.with_context("location", location.to_string()))
}

/// Raises the failure carried by `outcome`, if any.
#[track_caller]
pub fn enforce(outcome: Result<(), AssertionFailure>) {
    if let Err(failure) = outcome {
        raise_assertion_error(failure)
    }
}
