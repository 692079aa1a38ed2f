//! Capability flags and their implication-closed set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Runtime category a value can report through [`crate::Introspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// A plain callable.
    Function,
    /// A callable returning a future.
    CoroutineFunction,
    /// A callable returning an iterator.
    GeneratorFunction,
    /// A callable returning a stream.
    AsyncGeneratorFunction,
    /// A pending future.
    Coroutine,
    /// A lazily produced sequence.
    Generator,
    /// A lazily produced asynchronous sequence.
    AsyncGenerator,
    /// A named accessor with a getter.
    Descriptor,
    /// A descriptor that also has a setter.
    DataDescriptor,
    /// Something that yields items when advanced.
    Iterator,
    /// Something that can produce an iterator.
    Iterable,
    /// A byte stream object.
    Io,
}

impl Capability {
    fn implied(self) -> &'static [Capability] {
        match self {
            Capability::Generator => &[Capability::Iterator, Capability::Iterable],
            Capability::Iterator => &[Capability::Iterable],
            Capability::DataDescriptor => &[Capability::Descriptor],
            _ => &[],
        }
    }
}

/// Set of capabilities, closed under implication: a generator is an
/// iterator, an iterator is iterable, a data descriptor is a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability together with everything it implies.
    pub fn insert(&mut self, capability: Capability) {
        self.0.insert(capability);
        for implied in capability.implied() {
            self.insert(*implied);
        }
    }

    /// Builder form of [`Capabilities::insert`].
    pub fn with(mut self, capability: Capability) -> Self {
        self.insert(capability);
        self
    }

    /// Membership test.
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Whether no capability is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut caps = Self::new();
        for capability in iter {
            caps.insert(capability);
        }
        caps
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        Self::new().with(capability)
    }
}
