//! Capability queries over [`Introspect`] values.

use verdict_core::{enforce, AssertionFailure};
use verdict_inspect::{Capability, Introspect};

fn require<V: Introspect>(
    value: &V,
    capability: Capability,
    code: &str,
    describe: &str,
) -> Result<(), AssertionFailure> {
    if !value.capabilities().contains(capability) {
        return Err(AssertionFailure::new(code, format!("{value:?} {describe}")));
    }
    Ok(())
}

fn forbid<V: Introspect>(
    value: &V,
    capability: Capability,
    code: &str,
    describe: &str,
) -> Result<(), AssertionFailure> {
    if value.capabilities().contains(capability) {
        return Err(AssertionFailure::new(code, format!("{value:?} {describe}")));
    }
    Ok(())
}

/// Checks that `value` is a function returning a future.
pub fn check_is_coroutine_function<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::CoroutineFunction,
        "verdict.is_coroutine_function",
        "is not a coroutine function",
    )
}

/// Checks that `value` is not a function returning a future.
pub fn check_is_not_coroutine_function<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::CoroutineFunction,
        "verdict.is_not_coroutine_function",
        "is a coroutine function",
    )
}

/// Checks that `value` is a pending future.
pub fn check_is_coroutine<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::Coroutine,
        "verdict.is_coroutine",
        "is not a coroutine",
    )
}

/// Checks that `value` is not a pending future.
pub fn check_is_not_coroutine<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::Coroutine,
        "verdict.is_not_coroutine",
        "is a coroutine",
    )
}

/// Checks that `value` is an async callable: a coroutine function or an
/// async generator function.
pub fn check_is_async_function<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    let capabilities = value.capabilities();
    if !capabilities.contains(Capability::CoroutineFunction)
        && !capabilities.contains(Capability::AsyncGeneratorFunction)
    {
        return Err(AssertionFailure::new(
            "verdict.is_async_function",
            format!("{value:?} is not async"),
        ));
    }
    Ok(())
}

/// Checks that `value` is a function returning a stream.
pub fn check_is_async_generator_function<V: Introspect>(
    value: V,
) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::AsyncGeneratorFunction,
        "verdict.is_async_generator_function",
        "is not an async generator function",
    )
}

/// Checks that `value` is a function returning an iterator.
pub fn check_is_generator_function<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::GeneratorFunction,
        "verdict.is_generator_function",
        "is not a generator function",
    )
}

/// Checks that `value` is not a function returning an iterator.
pub fn check_is_not_generator_function<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::GeneratorFunction,
        "verdict.is_not_generator_function",
        "is a generator function",
    )
}

/// Checks that `value` is a generator object.
pub fn check_is_generator_object<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::Generator,
        "verdict.is_generator_object",
        "is not a generator",
    )
}

/// Checks that `value` is not a generator object.
pub fn check_is_not_generator_object<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::Generator,
        "verdict.is_not_generator_object",
        "is a generator",
    )
}

/// Checks that `value` is a descriptor, with or without a setter.
pub fn check_is_descriptor<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::Descriptor,
        "verdict.is_descriptor",
        "is not a descriptor",
    )
}

/// Checks that `value` is not a descriptor.
pub fn check_is_not_descriptor<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::Descriptor,
        "verdict.is_not_descriptor",
        "is a descriptor",
    )
}

/// Checks that `value` is a descriptor with a setter.
pub fn check_is_data_descriptor<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::DataDescriptor,
        "verdict.is_data_descriptor",
        "is not a data descriptor",
    )
}

/// Checks that `value` is an iterator.
pub fn check_is_iterator<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::Iterator,
        "verdict.is_iterator",
        "is not an iterator",
    )
}

/// Checks that `value` is not an iterator.
pub fn check_is_not_iterator<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    forbid(
        &value,
        Capability::Iterator,
        "verdict.is_not_iterator",
        "is an iterator",
    )
}

/// Checks that `value` can be iterated.
pub fn check_is_iterable<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(
        &value,
        Capability::Iterable,
        "verdict.is_iterable",
        "is not iterable",
    )
}

/// Checks that `value` exposes the attribute `attr`.
pub fn check_has_attr<V: Introspect>(value: V, attr: &str) -> Result<(), AssertionFailure> {
    if !value.has_attr(attr) {
        return Err(AssertionFailure::new(
            "verdict.has_attr",
            format!("{value:?} does not have the attribute {attr}"),
        )
        .with_context("attribute", attr));
    }
    Ok(())
}

/// Checks that `value` is a file descriptor number.
pub fn check_is_file_descriptor<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    if value.file_descriptor().is_none() {
        return Err(AssertionFailure::new(
            "verdict.is_file_descriptor",
            format!("{value:?} is not a file descriptor"),
        ));
    }
    Ok(())
}

/// Checks that `value` is a byte stream object.
pub fn check_is_io<V: Introspect>(value: V) -> Result<(), AssertionFailure> {
    require(&value, Capability::Io, "verdict.is_io", "is not an IO object")
}

/// Asserts that `value` is a coroutine function.
#[track_caller]
pub fn assert_is_coroutine_function<V: Introspect>(value: V) {
    enforce(check_is_coroutine_function(value));
}

/// Asserts that `value` is not a coroutine function.
#[track_caller]
pub fn assert_is_not_coroutine_function<V: Introspect>(value: V) {
    enforce(check_is_not_coroutine_function(value));
}

/// Asserts that `value` is a coroutine.
#[track_caller]
pub fn assert_is_coroutine<V: Introspect>(value: V) {
    enforce(check_is_coroutine(value));
}

/// Asserts that `value` is not a coroutine.
#[track_caller]
pub fn assert_is_not_coroutine<V: Introspect>(value: V) {
    enforce(check_is_not_coroutine(value));
}

/// Asserts that `value` is an async callable.
#[track_caller]
pub fn assert_is_async_function<V: Introspect>(value: V) {
    enforce(check_is_async_function(value));
}

/// Asserts that `value` is an async generator function.
#[track_caller]
pub fn assert_is_async_generator_function<V: Introspect>(value: V) {
    enforce(check_is_async_generator_function(value));
}

/// Asserts that `value` is a generator function.
#[track_caller]
pub fn assert_is_generator_function<V: Introspect>(value: V) {
    enforce(check_is_generator_function(value));
}

/// Asserts that `value` is not a generator function.
#[track_caller]
pub fn assert_is_not_generator_function<V: Introspect>(value: V) {
    enforce(check_is_not_generator_function(value));
}

/// Asserts that `value` is a generator object.
#[track_caller]
pub fn assert_is_generator_object<V: Introspect>(value: V) {
    enforce(check_is_generator_object(value));
}

/// Asserts that `value` is not a generator object.
#[track_caller]
pub fn assert_is_not_generator_object<V: Introspect>(value: V) {
    enforce(check_is_not_generator_object(value));
}

/// Asserts that `value` is a descriptor.
#[track_caller]
pub fn assert_is_descriptor<V: Introspect>(value: V) {
    enforce(check_is_descriptor(value));
}

/// Asserts that `value` is not a descriptor.
#[track_caller]
pub fn assert_is_not_descriptor<V: Introspect>(value: V) {
    enforce(check_is_not_descriptor(value));
}

/// Asserts that `value` is a data descriptor.
#[track_caller]
pub fn assert_is_data_descriptor<V: Introspect>(value: V) {
    enforce(check_is_data_descriptor(value));
}

/// Misspelled alias of [`assert_is_descriptor`].
#[deprecated(note = "use `assert_is_descriptor`")]
#[track_caller]
pub fn assert_is_discriptor<V: Introspect>(value: V) {
    enforce(check_is_descriptor(value));
}

/// Misspelled alias of [`assert_is_not_descriptor`].
#[deprecated(note = "use `assert_is_not_descriptor`")]
#[track_caller]
pub fn assert_is_not_discriptor<V: Introspect>(value: V) {
    enforce(check_is_not_descriptor(value));
}

/// Asserts that `value` is an iterator.
#[track_caller]
pub fn assert_is_iterator<V: Introspect>(value: V) {
    enforce(check_is_iterator(value));
}

/// Asserts that `value` is not an iterator.
#[track_caller]
pub fn assert_is_not_iterator<V: Introspect>(value: V) {
    enforce(check_is_not_iterator(value));
}

/// Asserts that `value` is iterable.
#[track_caller]
pub fn assert_is_iterable<V: Introspect>(value: V) {
    enforce(check_is_iterable(value));
}

/// Asserts that `value` exposes the attribute `attr`.
#[track_caller]
pub fn assert_has_attr<V: Introspect>(value: V, attr: &str) {
    enforce(check_has_attr(value, attr));
}

/// Asserts that `value` is a file descriptor.
#[track_caller]
pub fn assert_is_file_descriptor<V: Introspect>(value: V) {
    enforce(check_is_file_descriptor(value));
}

/// Asserts that `value` is an IO object.
#[track_caller]
pub fn assert_is_io<V: Introspect>(value: V) {
    enforce(check_is_io(value));
}
