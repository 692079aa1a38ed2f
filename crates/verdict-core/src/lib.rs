#![deny(missing_docs)]
#![doc = "Failure types, the reporter seam and report policy shared by verdict crates."]

pub mod errors;
pub mod json;
pub mod policy;
pub mod report;

pub use errors::{AssertionFailure, ErrorInfo, VerdictError};
pub use json::{from_json_slice, to_canonical_json_bytes};
pub use policy::{ReportFormat, ReportPolicy, CONFIG_ENV};
pub use report::{
    enforce, install_reporter, raise_assertion_error, render, PanicReporter, Reporter,
};
