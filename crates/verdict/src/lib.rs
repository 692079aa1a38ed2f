#![deny(missing_docs)]
#![doc = "Assertion helpers with descriptive failure messages. Every `assert_*` helper has a `check_*` twin returning the failure instead of reporting it.\n\nMessages embed operands through their `Debug` output, so strings appear quoted: `assert_equal(\"a\", \"b\")` reports `\"a\" and \"b\" are not equal`."]

mod aggregate;
mod equality;
mod introspection;
mod length;
mod membership;
mod nullability;
mod ordering;
pub mod raises;
mod tolerance;
mod truth;
mod types;

pub use aggregate::{
    assert_all_none, assert_all_not_none, assert_any_not_none, check_all_none,
    check_all_not_none, check_any_not_none,
};
pub use equality::{
    assert_equal, assert_is, assert_is_not, assert_not_equal, check_equal, check_is,
    check_is_not, check_not_equal,
};
#[allow(deprecated)]
pub use introspection::{assert_is_discriptor, assert_is_not_discriptor};
pub use introspection::{
    assert_has_attr, assert_is_async_function, assert_is_async_generator_function,
    assert_is_coroutine, assert_is_coroutine_function, assert_is_data_descriptor,
    assert_is_descriptor, assert_is_file_descriptor, assert_is_generator_function,
    assert_is_generator_object, assert_is_io, assert_is_iterable, assert_is_iterator,
    assert_is_not_coroutine, assert_is_not_coroutine_function, assert_is_not_descriptor,
    assert_is_not_generator_function, assert_is_not_generator_object, assert_is_not_iterator,
    check_has_attr, check_is_async_function, check_is_async_generator_function,
    check_is_coroutine, check_is_coroutine_function, check_is_data_descriptor,
    check_is_descriptor, check_is_file_descriptor, check_is_generator_function,
    check_is_generator_object, check_is_io, check_is_iterable, check_is_iterator,
    check_is_not_coroutine, check_is_not_coroutine_function, check_is_not_descriptor,
    check_is_not_generator_function, check_is_not_generator_object, check_is_not_iterator,
};
pub use length::{assert_length, check_length, Length};
pub use membership::{
    assert_in, assert_is_not_in, assert_not_in, check_in, check_is_not_in, check_not_in,
    Container,
};
pub use nullability::{assert_is_none, assert_is_not_none, check_is_none, check_is_not_none, Nullable};
pub use ordering::{
    assert_greater_than, assert_greater_than_or_equal, assert_less_than,
    assert_less_than_or_equal, check_greater_than, check_greater_than_or_equal,
    check_less_than, check_less_than_or_equal,
};
pub use raises::{
    assert_raises, assert_raises_message, check_raises, check_raises_message, ExceptionInfo,
    Origin, Outcome, Panic,
};
pub use tolerance::{
    assert_almost_equal, assert_almost_equal_places, check_almost_equal,
    check_almost_equal_places, round_to_places, AsFloat, DEFAULT_PLACES,
};
pub use truth::{assert_false, assert_true, check_false, check_true, Truthy};
pub use types::{
    assert_is_instance, assert_is_not_instance, assert_is_subclass, assert_not_is_subclass,
    check_is_instance, check_is_not_instance, check_is_subclass, check_not_is_subclass,
};

pub use verdict_core::{
    enforce, install_reporter, raise_assertion_error, AssertionFailure, ErrorInfo,
    PanicReporter, ReportFormat, ReportPolicy, Reporter, VerdictError,
};
pub use verdict_inspect::{
    Async, AsyncGenerator, Callable, Capabilities, Capability, Class, Descriptor, Generator,
    Introspect, Plain, Probe,
};
