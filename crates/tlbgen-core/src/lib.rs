#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for automation type-library metadata.
//!
//! Two layers:
//! - **Descriptor layer**: tagged type/element descriptors and the per-slot
//!   records a metadata host hands out (`TypeDesc`, `ElemDesc`, `Function`, ...)
//! - **Host layer**: the [`MetadataHost`] trait, plus [`TypeLibrary`], a
//!   serialized snapshot (JSON or binary) that implements it

use serde::{Deserialize, Serialize};

mod host;
pub mod snapshot;

pub use host::{HostError, HostResult, MetadataHost};
pub use snapshot::{SnapshotError, TypeLibrary};

// ============================================================================
// Entry and Invocation Kinds
// ============================================================================

/// Opaque handle to another entry, resolved through [`MetadataHost::resolve_reference`].
pub type RefHandle = u32;

/// Kind of a top-level type-library entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Enum,
    Record,
    Module,
    Interface,
    Dispatch,
    Coclass,
    Alias,
    Union,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Module => "module",
            Self::Interface => "interface",
            Self::Dispatch => "dispatch",
            Self::Coclass => "coclass",
            Self::Alias => "alias",
            Self::Union => "union",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a dispatch member is invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvokeKind {
    /// Plain method call.
    #[default]
    Func,
    PropertyGet,
    PropertyPut,
    PropertyPutRef,
}

// ============================================================================
// Type Descriptors
// ============================================================================

/// Variant type codes understood by the resolver.
pub mod vt {
    pub const EMPTY: u16 = 0;
    pub const I2: u16 = 2;
    pub const I4: u16 = 3;
    pub const R4: u16 = 4;
    pub const R8: u16 = 5;
    pub const CY: u16 = 6;
    pub const DATE: u16 = 7;
    pub const BSTR: u16 = 8;
    pub const DISPATCH: u16 = 9;
    pub const ERROR: u16 = 10;
    pub const BOOL: u16 = 11;
    pub const VARIANT: u16 = 12;
    pub const UNKNOWN: u16 = 13;
    pub const I1: u16 = 16;
    pub const UI1: u16 = 17;
    pub const UI2: u16 = 18;
    pub const UI4: u16 = 19;
    pub const I8: u16 = 20;
    pub const UI8: u16 = 21;
    pub const INT: u16 = 22;
    pub const UINT: u16 = 23;
    pub const VOID: u16 = 24;
    pub const HRESULT: u16 = 25;
}

/// A possibly nested type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDesc {
    /// Bare variant type code (see [`vt`]).
    Primitive(u16),
    /// Pointer to the inner type.
    Pointer(Box<TypeDesc>),
    /// Safe array (or fixed array) of the inner type.
    Array(Box<TypeDesc>),
    /// Reference to a user-defined entry (enum, interface, ...).
    Reference(RefHandle),
}

impl TypeDesc {
    pub fn pointer(inner: TypeDesc) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn array(inner: TypeDesc) -> Self {
        Self::Array(Box::new(inner))
    }
}

/// Parameter flag bits (`PARAMFLAG_*`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamFlags(pub u16);

impl ParamFlags {
    pub const NONE: Self = Self(0);
    pub const IN: Self = Self(0x1);
    pub const OUT: Self = Self(0x2);
    pub const OPT: Self = Self(0x10);
    pub const HAS_DEFAULT: Self = Self(0x20);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// A literal value attached to a constant or a parameter default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Empty,
}

impl ConstValue {
    /// The value as a 32-bit integer, if it is one.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

/// Element descriptor: a type plus the flags and default that travel with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElemDesc {
    pub ty: TypeDesc,
    #[serde(default)]
    pub flags: ParamFlags,
    #[serde(default)]
    pub default: Option<ConstValue>,
}

impl ElemDesc {
    pub fn new(ty: TypeDesc) -> Self {
        Self {
            ty,
            flags: ParamFlags::NONE,
            default: None,
        }
    }

    pub fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }
}

// ============================================================================
// Host Records
// ============================================================================

/// One enumeration member as read from the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant {
    pub name: String,
    pub value: ConstValue,
}

/// One variable-backed member of an interface.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub elem: ElemDesc,
}

/// One parameter of a function. Hosts may not know every parameter name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: Option<String>,
    pub elem: ElemDesc,
}

/// One callable member of an interface.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub invoke: InvokeKind,
    pub params: Vec<Param>,
    pub ret: TypeDesc,
}
