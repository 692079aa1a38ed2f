//! Capturing errors raised by a callable.
//!
//! A callable raises by returning `Err` or by panicking. Returned errors are
//! matched by downcasting; panics are caught with `catch_unwind`, so these
//! helpers require the default `panic = "unwind"` strategy.
//!
//! A captured panic still runs the process panic hook first, so the default
//! hook prints its "panicked at" report to stderr even when the panic is the
//! expected one. Install a quieter hook with `std::panic::set_hook` if that
//! output is unwanted.

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use regex::Regex;
use thiserror::Error;
use verdict_core::{raise_assertion_error, AssertionFailure};

/// Boxed error as produced by [`Outcome::into_error`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Error standing in for a panic whose payload was a plain message.
///
/// Use it as the expected type to capture ordinary `panic!` calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What a callable under test returns.
pub trait Outcome {
    /// The raised error, if the callable returned one.
    fn into_error(self) -> Option<BoxError>;
}

impl Outcome for () {
    fn into_error(self) -> Option<BoxError> {
        None
    }
}

impl<T, X: Into<BoxError>> Outcome for Result<T, X> {
    fn into_error(self) -> Option<BoxError> {
        self.err().map(Into::into)
    }
}

/// How the captured error left the callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Returned as `Err`.
    Returned,
    /// Raised as a panic.
    Panicked,
}

/// Capture handle describing the error raised by the callable.
pub struct ExceptionInfo<E> {
    value: Box<E>,
    origin: Origin,
    message: String,
}

impl<E: Error + 'static> ExceptionInfo<E> {
    fn new(value: Box<E>, origin: Origin) -> Self {
        let message = value.to_string();
        Self {
            value,
            origin,
            message,
        }
    }

    /// The captured error.
    pub fn value(&self) -> &E {
        &self.value
    }

    /// Consumes the handle and returns the captured error.
    pub fn into_value(self) -> E {
        *self.value
    }

    /// Name of the expected error type.
    pub fn type_name(&self) -> &'static str {
        type_name::<E>()
    }

    /// The error's `Display` output.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the error was returned or panicked.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Whether `pattern` matches anywhere in [`ExceptionInfo::message`].
    pub fn matches(&self, pattern: &str) -> Result<bool, AssertionFailure> {
        Ok(compile(pattern)?.is_match(&self.message))
    }
}

impl<E: fmt::Debug> fmt::Debug for ExceptionInfo<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionInfo")
            .field("type", &type_name::<E>())
            .field("value", &self.value)
            .field("origin", &self.origin)
            .finish()
    }
}

fn compile(pattern: &str) -> Result<Regex, AssertionFailure> {
    Regex::new(pattern).map_err(|err| {
        AssertionFailure::new(
            "verdict.raises.invalid_pattern",
            format!("invalid pattern {pattern:?}: {err}"),
        )
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Some((*message).to_string());
    }
    payload.downcast_ref::<String>().cloned()
}

fn capture<E: Error + 'static>(
    err: BoxError,
    origin: Origin,
) -> Result<ExceptionInfo<E>, AssertionFailure> {
    match err.downcast::<E>() {
        Ok(value) => Ok(ExceptionInfo::new(value, origin)),
        Err(other) => Err(AssertionFailure::new(
            "verdict.raises.unexpected",
            format!("{other:?} raised instead of {}: {other}", type_name::<E>()),
        )),
    }
}

/// Invokes `func` and checks that it raises an `E`.
///
/// A panic that is neither an `E` nor, when `E` is [`Panic`], a plain message
/// is resumed rather than reported.
pub fn check_raises<E, F, O>(func: F) -> Result<ExceptionInfo<E>, AssertionFailure>
where
    E: Error + Send + Sync + 'static,
    F: FnOnce() -> O,
    O: Outcome,
{
    match panic::catch_unwind(AssertUnwindSafe(func)) {
        Ok(outcome) => match outcome.into_error() {
            Some(err) => capture(err, Origin::Returned),
            None => Err(AssertionFailure::new(
                "verdict.raises.did_not_raise",
                format!("DID NOT RAISE {}", type_name::<E>()),
            )),
        },
        Err(payload) => {
            let payload = match payload.downcast::<E>() {
                Ok(value) => return Ok(ExceptionInfo::new(value, Origin::Panicked)),
                Err(payload) => payload,
            };
            if let Some(message) = panic_message(payload.as_ref()) {
                let stand_in: Box<dyn Any> = Box::new(Panic { message });
                if let Ok(value) = stand_in.downcast::<E>() {
                    return Ok(ExceptionInfo::new(value, Origin::Panicked));
                }
            }
            tracing::debug!(expected = type_name::<E>(), "resuming unexpected panic");
            panic::resume_unwind(payload)
        }
    }
}

/// Like [`check_raises`], and the error message must contain a match for the
/// regular expression `pattern`.
pub fn check_raises_message<E, F, O>(
    pattern: &str,
    func: F,
) -> Result<ExceptionInfo<E>, AssertionFailure>
where
    E: Error + Send + Sync + 'static,
    F: FnOnce() -> O,
    O: Outcome,
{
    let regex = compile(pattern)?;
    let info = check_raises::<E, F, O>(func)?;
    if !regex.is_match(info.message()) {
        return Err(AssertionFailure::new(
            "verdict.raises.pattern",
            format!(
                "Regex pattern did not match.\n Regex: {pattern:?}\n Input: {:?}",
                info.message()
            ),
        ));
    }
    Ok(info)
}

/// Asserts that `func` raises an `E` and returns the capture handle.
#[track_caller]
pub fn assert_raises<E, F, O>(func: F) -> ExceptionInfo<E>
where
    E: Error + Send + Sync + 'static,
    F: FnOnce() -> O,
    O: Outcome,
{
    match check_raises(func) {
        Ok(info) => info,
        Err(failure) => raise_assertion_error(failure),
    }
}

/// Asserts that `func` raises an `E` whose message matches `pattern`.
#[track_caller]
pub fn assert_raises_message<E, F, O>(pattern: &str, func: F) -> ExceptionInfo<E>
where
    E: Error + Send + Sync + 'static,
    F: FnOnce() -> O,
    O: Outcome,
{
    match check_raises_message(pattern, func) {
        Ok(info) => info,
        Err(failure) => raise_assertion_error(failure),
    }
}
