//! Named accessors with optional setters.

use std::any::type_name;
use std::fmt;

use verdict_core::errors::{ErrorInfo, VerdictError};

use crate::capability::{Capabilities, Capability};
use crate::class::Class;
use crate::introspect::Introspect;

/// Named accessor over a field of `T`, with a getter and an optional setter.
pub struct Descriptor<T, V> {
    name: String,
    getter: fn(&T) -> V,
    setter: Option<fn(&mut T, V)>,
}

impl<T, V> Descriptor<T, V> {
    /// Read-only descriptor.
    pub fn getter(name: impl Into<String>, getter: fn(&T) -> V) -> Self {
        Self {
            name: name.into(),
            getter,
            setter: None,
        }
    }

    /// Adds a setter, turning the descriptor into a data descriptor.
    pub fn with_setter(mut self, setter: fn(&mut T, V)) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a setter is present.
    pub fn is_data(&self) -> bool {
        self.setter.is_some()
    }

    /// Reads the attribute from `target`.
    pub fn get(&self, target: &T) -> V {
        (self.getter)(target)
    }

    /// Writes the attribute on `target`.
    pub fn set(&self, target: &mut T, value: V) -> Result<(), VerdictError> {
        let setter = self.setter.ok_or_else(|| {
            VerdictError::Attribute(
                ErrorInfo::new(
                    "verdict.attribute.read_only",
                    format!("attribute '{}' is read-only", self.name),
                )
                .with_context("owner", type_name::<T>()),
            )
        })?;
        setter(target, value);
        Ok(())
    }
}

impl<T, V> Clone for Descriptor<T, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            getter: self.getter,
            setter: self.setter,
        }
    }
}

impl<T, V> fmt::Debug for Descriptor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<attribute '{}' of '{}' objects>",
            self.name,
            type_name::<T>()
        )
    }
}

impl<T, V> Introspect for Descriptor<T, V> {
    fn class(&self) -> Class {
        Class::builtin("descriptor")
    }

    fn capabilities(&self) -> Capabilities {
        if self.is_data() {
            Capability::DataDescriptor.into()
        } else {
            Capability::Descriptor.into()
        }
    }
}
