//! Structured failure and error types shared across verdict crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AssertionFailure`] and [`VerdictError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, addresses, caller location, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// The single failure kind produced by every assertion helper.
///
/// `Display` renders only the message so that the message template stays the
/// visible contract; code and context travel alongside for reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", .info.message)]
pub struct AssertionFailure {
    info: ErrorInfo,
}

impl AssertionFailure {
    /// Creates a failure with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            info: ErrorInfo::new(code, message),
        }
    }

    /// Adds a context entry to the failure.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info = self.info.with_context(key, value);
        self
    }

    /// Sets a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.info = self.info.with_hint(hint);
        self
    }

    /// Stable code identifying the violated predicate.
    pub fn code(&self) -> &str {
        &self.info.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        &self.info.message
    }

    /// Returns a reference to the structured payload.
    pub fn info(&self) -> &ErrorInfo {
        &self.info
    }

    /// Consumes the failure and returns its payload.
    pub fn into_info(self) -> ErrorInfo {
        self.info
    }
}

impl From<ErrorInfo> for AssertionFailure {
    fn from(info: ErrorInfo) -> Self {
        Self { info }
    }
}

/// Errors raised by the ambient surfaces around the assertion helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum VerdictError {
    /// Report policy loading and parsing errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Reporter installation errors.
    #[error("reporter error: {0}")]
    Reporter(ErrorInfo),
    /// Attribute access errors raised by descriptors.
    #[error("attribute error: {0}")]
    Attribute(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl VerdictError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            VerdictError::Config(info)
            | VerdictError::Reporter(info)
            | VerdictError::Attribute(info)
            | VerdictError::Serde(info) => info,
        }
    }
}
