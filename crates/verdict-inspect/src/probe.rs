//! Introspectable stand-ins built from compile-time evidence.

use std::any::type_name;
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::io;

use futures_core::Stream;

use crate::callable::{Async, AsyncGenerator, Callable, FunctionKind, Generator, Plain};
use crate::capability::{Capabilities, Capability};
use crate::class::Class;
use crate::introspect::Introspect;

/// Introspectable stand-in for a value whose category is known at compile time.
///
/// Constructors take the value itself only as evidence: the trait bounds
/// decide which capabilities get recorded, nothing is called or polled.
#[derive(Clone, PartialEq)]
pub struct Probe {
    repr: String,
    class: Class,
    capabilities: Capabilities,
    attrs: BTreeSet<String>,
}

impl Probe {
    fn new(repr: String, class: Class, capabilities: Capabilities) -> Self {
        Self {
            repr,
            class,
            capabilities,
            attrs: BTreeSet::new(),
        }
    }

    fn callable<K: FunctionKind>(label: &str, name: String, arity: usize) -> Self {
        Self::new(
            format!("<{label} {name}/{arity}>"),
            Class::builtin("function"),
            K::capability().into(),
        )
    }

    /// A plain value with no special capabilities.
    pub fn value<T: fmt::Debug + 'static>(value: &T) -> Self {
        Self::new(format!("{value:?}"), Class::of::<T>(), Capabilities::new())
    }

    /// An instance of a declared class.
    pub fn instance(class: &Class, repr: impl Into<String>) -> Self {
        Self::new(repr.into(), class.clone(), Capabilities::new())
    }

    /// A plain function.
    pub fn function<A, F>(name: impl Into<String>, _func: &F) -> Self
    where
        F: Callable<A, Plain>,
    {
        Self::callable::<Plain>("function", name.into(), F::arity())
    }

    /// A function returning a future.
    pub fn coroutine_function<A, F>(name: impl Into<String>, _func: &F) -> Self
    where
        F: Callable<A, Async>,
    {
        Self::callable::<Async>("coroutine function", name.into(), F::arity())
    }

    /// A function returning an iterator.
    pub fn generator_function<A, F>(name: impl Into<String>, _func: &F) -> Self
    where
        F: Callable<A, Generator>,
    {
        Self::callable::<Generator>("generator function", name.into(), F::arity())
    }

    /// A function returning a stream.
    pub fn async_generator_function<A, F>(name: impl Into<String>, _func: &F) -> Self
    where
        F: Callable<A, AsyncGenerator>,
    {
        Self::callable::<AsyncGenerator>("async generator function", name.into(), F::arity())
    }

    /// A future that has not been awaited.
    pub fn coroutine<F: Future + ?Sized>(_future: &F) -> Self {
        Self::new(
            format!("<coroutine {}>", type_name::<F>()),
            Class::builtin("coroutine"),
            Capability::Coroutine.into(),
        )
    }

    /// A lazily produced sequence, as returned by a generator function.
    pub fn generator<I: Iterator + ?Sized>(_iter: &I) -> Self {
        Self::new(
            format!("<generator {}>", type_name::<I>()),
            Class::builtin("generator"),
            Capability::Generator.into(),
        )
    }

    /// A stream, as returned by an async generator function.
    pub fn async_generator<S: Stream + ?Sized>(_stream: &S) -> Self {
        Self::new(
            format!("<async generator {}>", type_name::<S>()),
            Class::builtin("async_generator"),
            Capability::AsyncGenerator.into(),
        )
    }

    /// An iterator that is not a generator.
    pub fn iterator<I: Iterator + ?Sized>(_iter: &I) -> Self {
        Self::new(
            format!("<iterator {}>", type_name::<I>()),
            Class::builtin("iterator"),
            Capability::Iterator.into(),
        )
    }

    /// A collection that can be iterated by reference.
    pub fn iterable<C>(collection: &C) -> Self
    where
        C: fmt::Debug + 'static,
        for<'a> &'a C: IntoIterator,
    {
        Self::new(
            format!("{collection:?}"),
            Class::of::<C>(),
            Capability::Iterable.into(),
        )
    }

    /// A readable byte stream.
    pub fn reader<R: io::Read + ?Sized>(_reader: &R) -> Self {
        Self::new(
            format!("<reader {}>", type_name::<R>()),
            Class::builtin("io"),
            Capability::Io.into(),
        )
    }

    /// A writable byte stream.
    pub fn writer<W: io::Write + ?Sized>(_writer: &W) -> Self {
        Self::new(
            format!("<writer {}>", type_name::<W>()),
            Class::builtin("io"),
            Capability::Io.into(),
        )
    }

    /// Records an attribute name.
    pub fn with_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.insert(name.into());
        self
    }

    /// Records several attribute names.
    pub fn with_attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attrs.extend(names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl Introspect for Probe {
    fn class(&self) -> Class {
        self.class.clone()
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities.clone()
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains(name)
    }
}
