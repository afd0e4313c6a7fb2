//! JSON deserialization for snapshot documents.
//!
//! Type descriptors are written either as a bare variant code (`3`) or as an
//! externally tagged object (`{"pointer": {"reference": 7}}`). Member values
//! are arbitrary JSON; anything that is not a number survives as a non-integer
//! [`ConstValue`] so the extractor can skip it.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::SnapshotError;
use super::types::{Entry, FunctionRecord, MemberRecord, TypeLibrary, VariableRecord};
use crate::{
    ConstValue, ElemDesc, EntryKind, InvokeKind, Param, ParamFlags, RefHandle, TypeDesc, vt,
};

impl TypeLibrary {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawTypeLibrary = serde_json::from_str(json).map_err(SnapshotError::Json)?;
        Ok(raw.into())
    }
}

/// Raw snapshot document.
#[derive(Debug, Deserialize)]
struct RawTypeLibrary {
    name: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
    #[serde(default)]
    references: IndexMap<RefHandle, usize>,
}

impl From<RawTypeLibrary> for TypeLibrary {
    fn from(raw: RawTypeLibrary) -> Self {
        Self {
            name: raw.name,
            entries: raw.entries.into_iter().map(Into::into).collect(),
            references: raw.references,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    kind: EntryKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    members: Vec<RawMember>,
    #[serde(default)]
    variables: Vec<RawVariable>,
    #[serde(default)]
    functions: Vec<RawFunction>,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            kind: raw.kind,
            name: raw.name,
            members: raw.members.into_iter().map(Into::into).collect(),
            variables: raw.variables.into_iter().map(Into::into).collect(),
            functions: raw.functions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMember {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Value,
}

impl From<RawMember> for MemberRecord {
    fn from(raw: RawMember) -> Self {
        Self {
            name: raw.name,
            value: const_value(raw.value),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawVariable {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    ty: RawTypeDesc,
    #[serde(default)]
    flags: u16,
}

impl From<RawVariable> for VariableRecord {
    fn from(raw: RawVariable) -> Self {
        Self {
            name: raw.name,
            elem: ElemDesc::new(raw.ty.into()).with_flags(ParamFlags(raw.flags)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawParam {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    ty: RawTypeDesc,
    #[serde(default)]
    flags: u16,
    #[serde(default)]
    default: Option<Value>,
}

impl From<RawParam> for Param {
    fn from(raw: RawParam) -> Self {
        Self {
            name: raw.name,
            elem: ElemDesc {
                ty: raw.ty.into(),
                flags: ParamFlags(raw.flags),
                default: raw.default.map(const_value),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFunction {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    invoke: InvokeKind,
    #[serde(default)]
    params: Vec<RawParam>,
    #[serde(default)]
    returns: Option<RawTypeDesc>,
}

impl From<RawFunction> for FunctionRecord {
    fn from(raw: RawFunction) -> Self {
        Self {
            name: raw.name,
            invoke: raw.invoke,
            params: raw.params.into_iter().map(Into::into).collect(),
            ret: raw
                .returns
                .map(Into::into)
                .unwrap_or(TypeDesc::Primitive(vt::VOID)),
        }
    }
}

/// Type descriptor as written in JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTypeDesc {
    Code(u16),
    Tagged(RawTaggedDesc),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawTaggedDesc {
    Primitive(u16),
    Pointer(Box<RawTypeDesc>),
    Array(Box<RawTypeDesc>),
    Reference(RefHandle),
}

impl From<RawTypeDesc> for TypeDesc {
    fn from(raw: RawTypeDesc) -> Self {
        match raw {
            RawTypeDesc::Code(code) | RawTypeDesc::Tagged(RawTaggedDesc::Primitive(code)) => {
                TypeDesc::Primitive(code)
            }
            RawTypeDesc::Tagged(RawTaggedDesc::Pointer(inner)) => {
                TypeDesc::Pointer(Box::new((*inner).into()))
            }
            RawTypeDesc::Tagged(RawTaggedDesc::Array(inner)) => {
                TypeDesc::Array(Box::new((*inner).into()))
            }
            RawTypeDesc::Tagged(RawTaggedDesc::Reference(handle)) => TypeDesc::Reference(handle),
        }
    }
}

fn const_value(value: Value) -> ConstValue {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(ConstValue::Int)
            .or_else(|| n.as_f64().map(ConstValue::Float))
            .unwrap_or(ConstValue::Empty),
        Value::Bool(b) => ConstValue::Bool(b),
        Value::String(s) => ConstValue::Text(s),
        Value::Null | Value::Array(_) | Value::Object(_) => ConstValue::Empty,
    }
}
