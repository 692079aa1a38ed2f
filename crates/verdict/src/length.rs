use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use serde_json::Value;
use verdict_core::{enforce, AssertionFailure};

/// Values with a length. Strings count chars, not bytes.
///
/// `None` means the value has no length at all (a JSON number, say).
pub trait Length {
    /// Number of elements, if the value has a length.
    fn length(&self) -> Option<usize>;
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> Option<usize> {
        (**self).length()
    }
}

impl Length for str {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Length for String {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

macro_rules! impl_len {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Length for $ty {
                fn length(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )*
    };
}

impl_len!(
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [K, V, S] HashMap<K, V, S>,
);

impl Length for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            Value::String(text) => Some(text.chars().count()),
            _ => None,
        }
    }
}

/// Checks that `actual` has exactly `expected` elements.
pub fn check_length<A: Length + Debug>(expected: usize, actual: A) -> Result<(), AssertionFailure> {
    match actual.length() {
        Some(length) if length == expected => Ok(()),
        Some(length) => Err(AssertionFailure::new(
            "verdict.length",
            format!("{actual:?} has a length of {length}, not {expected}"),
        )
        .with_context("expected", expected.to_string())
        .with_context("actual", length.to_string())),
        None => Err(AssertionFailure::new(
            "verdict.length.unsized",
            format!("{actual:?} has no length"),
        )),
    }
}

/// Asserts that `actual` has exactly `expected` elements.
#[track_caller]
pub fn assert_length<A: Length + Debug>(expected: usize, actual: A) {
    enforce(check_length(expected, actual));
}
