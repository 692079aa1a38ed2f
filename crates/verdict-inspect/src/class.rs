//! Runtime class descriptors and subclass relationships.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ClassId {
    Object,
    Builtin(&'static str),
    Native(TypeId),
    Declared(u64),
}

static NEXT_DECLARED: AtomicU64 = AtomicU64::new(1);

struct ClassInner {
    name: String,
    id: ClassId,
    bases: Vec<Class>,
}

/// Runtime class descriptor used by instance-of and subclass-of checks.
///
/// Classes compare by identity, not by name: two declarations named `Dog`
/// are distinct classes. Every class ultimately derives from
/// [`Class::object`].
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    fn from_parts(name: String, id: ClassId, bases: Vec<Class>) -> Self {
        Self(Arc::new(ClassInner { name, id, bases }))
    }

    /// The root class every other class derives from.
    pub fn object() -> Self {
        Self::from_parts("object".to_string(), ClassId::Object, Vec::new())
    }

    /// A built-in category such as `function` or `generator`, identified by name.
    pub fn builtin(name: &'static str) -> Self {
        Self::from_parts(name.to_string(), ClassId::Builtin(name), vec![Self::object()])
    }

    /// The class of the Rust type `T`, identified by its `TypeId`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_parts(
            type_name::<T>().to_string(),
            ClassId::Native(TypeId::of::<T>()),
            vec![Self::object()],
        )
    }

    /// Declares a new class deriving from `bases`, or from `object` when empty.
    pub fn declare(name: impl Into<String>, bases: &[Class]) -> Self {
        let id = ClassId::Declared(NEXT_DECLARED.fetch_add(1, Ordering::Relaxed));
        let bases = if bases.is_empty() {
            vec![Self::object()]
        } else {
            bases.to_vec()
        };
        Self::from_parts(name.into(), id, bases)
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Direct bases, in declaration order.
    pub fn bases(&self) -> &[Class] {
        &self.0.bases
    }

    /// Whether this class describes the Rust type `T`.
    pub fn describes<T: ?Sized + 'static>(&self) -> bool {
        self.0.id == ClassId::Native(TypeId::of::<T>())
    }

    /// Reflexive, transitive subclass test.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self == other || self.bases().iter().any(|base| base.is_subclass_of(other))
    }

    /// The class followed by its ancestors, depth-first, each listed once.
    /// `object` always comes last.
    pub fn mro(&self) -> Vec<Class> {
        fn walk(class: &Class, out: &mut Vec<Class>) {
            if class.0.id == ClassId::Object || out.contains(class) {
                return;
            }
            out.push(class.clone());
            for base in class.bases() {
                walk(base, out);
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out.push(Self::object());
        out
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.name())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
