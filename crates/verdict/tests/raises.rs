use std::fmt;
use std::num::ParseIntError;
use std::panic;

use verdict::{
    assert_raises, assert_raises_message, check_raises, check_raises_message, AssertionFailure,
    Origin, Panic,
};

#[derive(Debug)]
struct Overdrawn {
    balance: i64,
}

impl fmt::Display for Overdrawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance {} is below zero", self.balance)
    }
}

impl std::error::Error for Overdrawn {}

fn withdraw(balance: i64, amount: i64) -> Result<i64, Overdrawn> {
    let left = balance - amount;
    if left < 0 {
        return Err(Overdrawn { balance: left });
    }
    Ok(left)
}

fn explode(message: &str) {
    panic!("{message}");
}

fn explode_static() {
    panic!("static");
}

fn raise<T: std::any::Any + Send + 'static>(payload: T) {
    panic::panic_any(payload);
}

#[test]
fn returned_error_is_captured() -> Result<(), AssertionFailure> {
    let info = check_raises::<ParseIntError, _, _>(|| "x1".parse::<i32>())?;
    assert_eq!(info.origin(), Origin::Returned);
    assert_eq!(info.message(), "invalid digit found in string");
    assert!(info.type_name().ends_with("ParseIntError"));
    Ok(())
}

#[test]
fn closure_captures_arguments() {
    let info = assert_raises::<Overdrawn, _, _>(move || withdraw(10, 25));
    assert_eq!(info.value().balance, -15);
    assert_eq!(info.into_value().balance, -15);
}

#[test]
fn normal_return_fails() {
    let failure = check_raises::<Overdrawn, _, _>(|| withdraw(10, 5)).unwrap_err();
    assert_eq!(failure.code(), "verdict.raises.did_not_raise");
    assert!(failure.message().starts_with("DID NOT RAISE"));
    assert!(failure.message().ends_with("Overdrawn"));

    let failure = check_raises::<Panic, _, _>(|| ()).unwrap_err();
    assert!(failure.message().starts_with("DID NOT RAISE"));
}

#[test]
fn different_error_fails() {
    let failure = check_raises::<Overdrawn, _, _>(|| "x".parse::<u8>()).unwrap_err();
    assert_eq!(failure.code(), "verdict.raises.unexpected");
    assert!(failure.message().contains("raised instead of"));
    assert!(failure.message().contains("invalid digit found in string"));
}

#[test]
fn message_panics_are_captured_as_panic() -> Result<(), AssertionFailure> {
    let info = check_raises::<Panic, _, _>(|| explode(&format!("boom {}", 7)))?;
    assert_eq!(info.origin(), Origin::Panicked);
    assert_eq!(info.value().message(), "boom 7");

    let info = check_raises::<Panic, _, _>(explode_static)?;
    assert_eq!(info.message(), "static");
    Ok(())
}

#[test]
fn typed_panic_payloads_are_captured() {
    let info = assert_raises::<Overdrawn, _, _>(|| raise(Overdrawn { balance: -1 }));
    assert_eq!(info.origin(), Origin::Panicked);
    assert_eq!(info.message(), "balance -1 is below zero");
}

#[test]
fn unrelated_panics_propagate() {
    let outcome = panic::catch_unwind(|| {
        let _ = check_raises::<Overdrawn, _, _>(|| raise(42_u32));
    });
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
}

#[test]
fn message_pattern_searches_display() -> Result<(), AssertionFailure> {
    let info = check_raises_message::<Overdrawn, _, _>(r"below \w+", || withdraw(0, 1))?;
    assert!(info.matches("^balance -1")?);
    assert!(!info.matches("above")?);

    let failure =
        check_raises_message::<Overdrawn, _, _>("^ok$", || withdraw(0, 1)).unwrap_err();
    assert_eq!(
        failure.message(),
        "Regex pattern did not match.\n Regex: \"^ok$\"\n Input: \"balance -1 is below zero\""
    );
    Ok(())
}

#[test]
fn invalid_pattern_fails_before_calling() {
    let mut called = false;
    let failure = check_raises_message::<Overdrawn, _, _>("(", || {
        called = true;
        withdraw(0, 1)
    })
    .unwrap_err();
    assert_eq!(failure.code(), "verdict.raises.invalid_pattern");
    assert!(!called);
}

#[test]
#[should_panic(expected = "DID NOT RAISE")]
fn assert_raises_panics_when_nothing_raised() {
    assert_raises::<ParseIntError, _, _>(|| "12".parse::<i32>());
}

#[test]
#[should_panic(expected = "Regex pattern did not match")]
fn assert_raises_message_panics_on_mismatch() {
    assert_raises_message::<Panic, _, _>("expected", || explode("something else"));
}

#[test]
fn captured_panics_still_reach_the_panic_hook() -> Result<(), AssertionFailure> {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let outcome = check_raises::<Panic, _, _>(|| explode("quiet"));
    panic::set_hook(previous);

    assert_eq!(outcome?.message(), "quiet");
    assert!(seen.load(Ordering::SeqCst) >= 1);
    Ok(())
}
