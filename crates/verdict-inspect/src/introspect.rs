//! The capability query trait and its std implementations.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor};
use std::net::TcpStream;

use serde_json::Value;

use crate::capability::{Capabilities, Capability};
use crate::class::Class;

/// Capability queries answered by a value at runtime.
pub trait Introspect: fmt::Debug {
    /// The class the value is an instance of.
    fn class(&self) -> Class;

    /// Runtime categories the value belongs to.
    fn capabilities(&self) -> Capabilities {
        Capabilities::new()
    }

    /// Whether the value exposes an attribute called `name`.
    fn has_attr(&self, name: &str) -> bool {
        let _ = name;
        false
    }

    /// The value as a file descriptor number, when it is one.
    fn file_descriptor(&self) -> Option<i64> {
        None
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn class(&self) -> Class {
        (**self).class()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn has_attr(&self, name: &str) -> bool {
        (**self).has_attr(name)
    }

    fn file_descriptor(&self) -> Option<i64> {
        (**self).file_descriptor()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn class(&self) -> Class {
        (**self).class()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn has_attr(&self, name: &str) -> bool {
        (**self).has_attr(name)
    }

    fn file_descriptor(&self) -> Option<i64> {
        (**self).file_descriptor()
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Introspect for $ty {
                fn class(&self) -> Class {
                    Class::of::<$ty>()
                }
            }
        )*
    };
}

impl_scalar!(bool, char, f32, f64, ());

// Non-negative integers are valid descriptor numbers.
macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Introspect for $ty {
                fn class(&self) -> Class {
                    Class::of::<$ty>()
                }

                fn file_descriptor(&self) -> Option<i64> {
                    i64::try_from(*self).ok().filter(|fd| *fd >= 0)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn iterable() -> Capabilities {
    Capability::Iterable.into()
}

impl Introspect for str {
    fn class(&self) -> Class {
        Class::of::<str>()
    }

    fn capabilities(&self) -> Capabilities {
        iterable()
    }
}

impl Introspect for String {
    fn class(&self) -> Class {
        Class::of::<String>()
    }

    fn capabilities(&self) -> Capabilities {
        iterable()
    }
}

macro_rules! impl_collection {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Introspect for $ty {
                fn class(&self) -> Class {
                    Class::of::<$ty>()
                }

                fn capabilities(&self) -> Capabilities {
                    iterable()
                }
            }
        )*
    };
}

impl_collection!(
    [T: fmt::Debug + 'static] [T],
    [T: fmt::Debug + 'static, const N: usize] [T; N],
    [T: fmt::Debug + 'static] Vec<T>,
    [T: fmt::Debug + 'static] VecDeque<T>,
    [T: fmt::Debug + 'static] BTreeSet<T>,
    [T: fmt::Debug + 'static, S: 'static] HashSet<T, S>,
    [K: fmt::Debug + 'static, V: fmt::Debug + 'static] BTreeMap<K, V>,
    [K: fmt::Debug + 'static, V: fmt::Debug + 'static, S: 'static] HashMap<K, V, S>,
);

macro_rules! impl_io {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Introspect for $ty {
                fn class(&self) -> Class {
                    Class::of::<$ty>()
                }

                fn capabilities(&self) -> Capabilities {
                    Capability::Io.into()
                }
            }
        )*
    };
}

impl_io!(
    [] File,
    [] TcpStream,
    [] io::Stdin,
    [] io::Stdout,
    [] io::Stderr,
    [] io::Empty,
    [] io::Sink,
    [T: fmt::Debug + 'static] Cursor<T>,
    [R: fmt::Debug + 'static] BufReader<R>,
    [W: io::Write + fmt::Debug + 'static] BufWriter<W>,
);

/// JSON values follow JSON semantics: arrays, objects and strings are
/// iterable, object keys are attributes, non-negative integers are
/// descriptor numbers.
impl Introspect for Value {
    fn class(&self) -> Class {
        Class::of::<Value>()
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Value::Array(_) | Value::Object(_) | Value::String(_) => iterable(),
            _ => Capabilities::new(),
        }
    }

    fn has_attr(&self, name: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(name))
    }

    fn file_descriptor(&self) -> Option<i64> {
        self.as_i64().filter(|fd| *fd >= 0)
    }
}

impl Introspect for Class {
    fn class(&self) -> Class {
        Class::builtin("type")
    }

    fn has_attr(&self, name: &str) -> bool {
        name == "name" || name == "bases"
    }
}
