//! Type descriptor resolution.
//!
//! Turns a (possibly nested) [`TypeDesc`] into a [`ResolvedType`]. Pointers
//! are erased, arrays become homogeneous sequences, and references are
//! followed through the host to the referenced entry's name. A reference the
//! host cannot resolve degrades to `int` instead of failing.

use std::fmt;

use tlbgen_core::{ElemDesc, MetadataHost, RefHandle, TypeDesc, vt};

/// Primitive target types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    None,
    Int,
    Float,
    Str,
    Bool,
    Any,
}

impl Primitive {
    /// Map a variant type code. Unknown codes map to `Any`.
    pub fn from_code(code: u16) -> Self {
        match code {
            vt::EMPTY | vt::VOID => Self::None,
            vt::I2 | vt::I4 | vt::ERROR | vt::HRESULT => Self::Int,
            vt::I1..=vt::UINT => Self::Int,
            vt::R4 | vt::R8 | vt::CY | vt::DATE => Self::Float,
            vt::BSTR => Self::Str,
            vt::BOOL => Self::Bool,
            vt::DISPATCH | vt::VARIANT | vt::UNKNOWN => Self::Any,
            _ => Self::Any,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Any => "Any",
        }
    }
}

/// Canonical semantic type of a parameter, return value, or property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Primitive(Primitive),
    /// Name of a user-defined entry (enum or interface).
    UserDefined(String),
    /// Homogeneous sequence of the inner type.
    Sequence(Box<ResolvedType>),
    /// Fixed composite, used for a declared return plus output parameters.
    Tuple(Vec<ResolvedType>),
}

impl ResolvedType {
    pub const ANY: Self = Self::Primitive(Primitive::Any);
    pub const INT: Self = Self::Primitive(Primitive::Int);
    pub const NONE: Self = Self::Primitive(Primitive::None);

    pub fn named(name: impl Into<String>) -> Self {
        Self::UserDefined(name.into())
    }

    pub fn sequence(inner: ResolvedType) -> Self {
        Self::Sequence(Box::new(inner))
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::UserDefined(name) => f.write_str(name),
            Self::Sequence(inner) => write!(f, "Tuple[{inner}, ...]"),
            Self::Tuple(items) => {
                f.write_str("Tuple[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Resolves type descriptors against one metadata host.
pub struct Resolver<'h> {
    host: &'h dyn MetadataHost,
}

impl<'h> Resolver<'h> {
    pub fn new(host: &'h dyn MetadataHost) -> Self {
        Self { host }
    }

    pub fn resolve(&self, desc: &TypeDesc) -> ResolvedType {
        match desc {
            TypeDesc::Primitive(code) => ResolvedType::Primitive(Primitive::from_code(*code)),
            TypeDesc::Pointer(inner) => self.resolve(inner),
            TypeDesc::Array(inner) => ResolvedType::sequence(self.resolve(inner)),
            TypeDesc::Reference(handle) => self.resolve_reference(*handle),
        }
    }

    /// Resolve the type wrapped by an element descriptor. Flags and default
    /// value do not affect the type.
    pub fn resolve_elem(&self, elem: &ElemDesc) -> ResolvedType {
        self.resolve(&elem.ty)
    }

    fn resolve_reference(&self, handle: RefHandle) -> ResolvedType {
        let name = self
            .host
            .resolve_reference(handle)
            .and_then(|index| self.host.entry_name(index));

        match name {
            Ok(name) => ResolvedType::UserDefined(name),
            Err(err) => {
                tracing::debug!(handle, %err, "unresolved type reference, falling back to int");
                ResolvedType::INT
            }
        }
    }
}
