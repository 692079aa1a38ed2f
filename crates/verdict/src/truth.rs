use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use serde_json::Value;
use verdict_core::{enforce, AssertionFailure};

/// Truthiness: `false`, zero, empty strings and collections, `None` and
/// JSON `null` are falsy; everything else is truthy.
pub trait Truthy {
    /// Whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

macro_rules! impl_number {
    ($zero:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

macro_rules! impl_non_empty {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    !self.is_empty()
                }
            }
        )*
    };
}

impl_non_empty!(
    [] str,
    [] String,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [K, V, S] HashMap<K, V, S>,
);

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

/// Checks that `value` is truthy.
pub fn check_true<V: Truthy + Debug>(value: V) -> Result<(), AssertionFailure> {
    if !value.is_truthy() {
        return Err(AssertionFailure::new(
            "verdict.true",
            format!("{value:?} is Falsy"),
        ));
    }
    Ok(())
}

/// Checks that `value` is falsy.
pub fn check_false<V: Truthy + Debug>(value: V) -> Result<(), AssertionFailure> {
    if value.is_truthy() {
        return Err(AssertionFailure::new(
            "verdict.false",
            format!("{value:?} is Truthy"),
        ));
    }
    Ok(())
}

/// Asserts that `value` is truthy.
#[track_caller]
pub fn assert_true<V: Truthy + Debug>(value: V) {
    enforce(check_true(value));
}

/// Asserts that `value` is falsy.
#[track_caller]
pub fn assert_false<V: Truthy + Debug>(value: V) {
    enforce(check_false(value));
}
