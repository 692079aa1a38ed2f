use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use serde_json::Value;
use verdict_core::{enforce, AssertionFailure};

/// Container-like values supporting an "item in container" test.
///
/// Maps test their keys, strings test substrings.
pub trait Container<T: ?Sized> {
    /// Whether `item` is in the container.
    fn holds(&self, item: &T) -> bool;
}

impl<T: ?Sized, C: Container<T> + ?Sized> Container<T> for &C {
    fn holds(&self, item: &T) -> bool {
        (**self).holds(item)
    }
}

impl<T: PartialEq> Container<T> for [T] {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> Container<T> for [T; N] {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> Container<T> for Vec<T> {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> Container<T> for VecDeque<T> {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container<T> for HashSet<T, S> {
    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<K: Ord, V> Container<K> for BTreeMap<K, V> {
    fn holds(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Container<K> for HashMap<K, V, S> {
    fn holds(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl Container<str> for str {
    fn holds(&self, item: &str) -> bool {
        self.contains(item)
    }
}

impl Container<char> for str {
    fn holds(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

impl Container<str> for String {
    fn holds(&self, item: &str) -> bool {
        self.contains(item)
    }
}

impl Container<char> for String {
    fn holds(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

/// Arrays test elements, objects test keys, strings test substrings.
impl Container<Value> for Value {
    fn holds(&self, item: &Value) -> bool {
        match (self, item) {
            (Value::Array(items), _) => items.contains(item),
            (Value::Object(map), Value::String(key)) => map.contains_key(key.as_str()),
            (Value::String(text), Value::String(needle)) => text.contains(needle.as_str()),
            _ => false,
        }
    }
}

impl Container<str> for Value {
    fn holds(&self, item: &str) -> bool {
        match self {
            Value::Array(items) => items.iter().any(|v| v.as_str() == Some(item)),
            Value::Object(map) => map.contains_key(item),
            Value::String(text) => text.contains(item),
            _ => false,
        }
    }
}

/// Checks that `expected` is in `actual`.
pub fn check_in<T, C>(expected: &T, actual: C) -> Result<(), AssertionFailure>
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    if !actual.holds(expected) {
        return Err(AssertionFailure::new(
            "verdict.in",
            format!("{expected:?} is not in {actual:?}"),
        ));
    }
    Ok(())
}

/// Checks that `expected` is not in `actual`.
pub fn check_not_in<T, C>(expected: &T, actual: C) -> Result<(), AssertionFailure>
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    if actual.holds(expected) {
        return Err(AssertionFailure::new(
            "verdict.not_in",
            format!("{expected:?} is in {actual:?}"),
        ));
    }
    Ok(())
}

/// Same predicate as [`check_not_in`].
pub fn check_is_not_in<T, C>(expected: &T, actual: C) -> Result<(), AssertionFailure>
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    check_not_in(expected, actual)
}

/// Asserts that `expected` is in `actual`.
#[track_caller]
pub fn assert_in<T, C>(expected: &T, actual: C)
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    enforce(check_in(expected, actual));
}

/// Asserts that `expected` is not in `actual`.
#[track_caller]
pub fn assert_not_in<T, C>(expected: &T, actual: C)
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    enforce(check_not_in(expected, actual));
}

/// Asserts that `expected` is not in `actual`.
#[track_caller]
pub fn assert_is_not_in<T, C>(expected: &T, actual: C)
where
    T: ?Sized + Debug,
    C: Container<T> + Debug,
{
    enforce(check_is_not_in(expected, actual));
}
