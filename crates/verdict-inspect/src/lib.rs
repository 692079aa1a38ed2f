#![deny(missing_docs)]
#![doc = "Runtime classes and capability queries used by verdict's type and introspection assertions."]

pub mod callable;
pub mod capability;
pub mod class;
pub mod descriptor;
pub mod introspect;
pub mod probe;

pub use callable::{Async, AsyncGenerator, Callable, FunctionKind, Generator, Plain};
pub use capability::{Capabilities, Capability};
pub use class::Class;
pub use descriptor::Descriptor;
pub use introspect::Introspect;
pub use probe::Probe;
