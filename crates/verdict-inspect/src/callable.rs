//! Compile-time evidence of what a callable returns.
//!
//! A closure or `fn` item implements [`Callable<A, K>`] for every kind `K`
//! its return type satisfies: an `async fn` is both [`Plain`] and [`Async`].
//! Callers pick the kind they want to record when building a
//! [`Probe`](crate::Probe).

use std::future::Future;

use futures_core::Stream;

use crate::capability::Capability;

/// Denotes the kind of a callable, allowing [`Callable`] to be implemented
/// separately per return shape.
pub trait FunctionKind {
    /// Capability recorded for callables of this kind.
    fn capability() -> Capability;
}

/// Marker for callables returning anything.
#[non_exhaustive]
pub struct Plain;

impl FunctionKind for Plain {
    #[inline]
    fn capability() -> Capability {
        Capability::Function
    }
}

/// Marker for callables returning a [`Future`].
#[non_exhaustive]
pub struct Async;

impl FunctionKind for Async {
    #[inline]
    fn capability() -> Capability {
        Capability::CoroutineFunction
    }
}

/// Marker for callables returning an [`Iterator`].
#[non_exhaustive]
pub struct Generator;

impl FunctionKind for Generator {
    #[inline]
    fn capability() -> Capability {
        Capability::GeneratorFunction
    }
}

/// Marker for callables returning a [`Stream`].
#[non_exhaustive]
pub struct AsyncGenerator;

impl FunctionKind for AsyncGenerator {
    #[inline]
    fn capability() -> Capability {
        Capability::AsyncGeneratorFunction
    }
}

/// Implemented by `Fn` callables of up to four arguments.
pub trait Callable<A, K: FunctionKind> {
    /// Number of arguments the callable takes.
    fn arity() -> usize;
}

macro_rules! impl_callable {
    ($count:expr $(, $ty:ident)*) => {
        impl<T, U, $($ty,)*> Callable<($($ty,)*), Plain> for T
        where
            T: Fn($($ty,)*) -> U,
        {
            fn arity() -> usize {
                $count
            }
        }

        impl<T, U, $($ty,)*> Callable<($($ty,)*), Async> for T
        where
            T: Fn($($ty,)*) -> U,
            U: Future,
        {
            fn arity() -> usize {
                $count
            }
        }

        impl<T, U, $($ty,)*> Callable<($($ty,)*), Generator> for T
        where
            T: Fn($($ty,)*) -> U,
            U: Iterator,
        {
            fn arity() -> usize {
                $count
            }
        }

        impl<T, U, $($ty,)*> Callable<($($ty,)*), AsyncGenerator> for T
        where
            T: Fn($($ty,)*) -> U,
            U: Stream,
        {
            fn arity() -> usize {
                $count
            }
        }
    };
}

impl_callable!(0);
impl_callable!(1, A1);
impl_callable!(2, A1, A2);
impl_callable!(3, A1, A2, A3);
impl_callable!(4, A1, A2, A3, A4);
