//! Test fixtures: an in-memory type library builder.
//!
//! Every entry gets a reference handle equal to its index, so
//! `TypeDesc::Reference(n)` names the n-th entry added.

use tlbgen_core::snapshot::{Entry, FunctionRecord, MemberRecord, VariableRecord};
use tlbgen_core::{
    ConstValue, ElemDesc, EntryKind, InvokeKind, Param, ParamFlags, TypeDesc, TypeLibrary, vt,
};

pub fn int() -> TypeDesc {
    TypeDesc::Primitive(vt::I4)
}

pub fn string() -> TypeDesc {
    TypeDesc::Primitive(vt::BSTR)
}

pub fn double() -> TypeDesc {
    TypeDesc::Primitive(vt::R8)
}

pub fn void() -> TypeDesc {
    TypeDesc::Primitive(vt::VOID)
}

pub fn reference(index: u32) -> TypeDesc {
    TypeDesc::Reference(index)
}

pub fn param(name: &str, ty: TypeDesc) -> Param {
    Param {
        name: Some(name.to_string()),
        elem: ElemDesc::new(ty),
    }
}

pub fn out_param(name: &str, ty: TypeDesc) -> Param {
    Param {
        name: Some(name.to_string()),
        elem: ElemDesc::new(TypeDesc::pointer(ty)).with_flags(ParamFlags::OUT),
    }
}

pub fn in_out_param(name: &str, ty: TypeDesc) -> Param {
    Param {
        name: Some(name.to_string()),
        elem: ElemDesc::new(TypeDesc::pointer(ty))
            .with_flags(ParamFlags::IN.union(ParamFlags::OUT)),
    }
}

#[derive(Default)]
pub struct LibraryBuilder {
    entries: Vec<Entry>,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enumeration(mut self, name: &str, members: &[(&str, i64)]) -> Self {
        let mut entry = Entry::new(EntryKind::Enum, name);
        entry.members = members
            .iter()
            .map(|(member, value)| MemberRecord {
                name: Some(member.to_string()),
                value: ConstValue::Int(*value),
            })
            .collect();
        self.entries.push(entry);
        self
    }

    pub fn dispatch(
        mut self,
        name: &str,
        build: impl FnOnce(InterfaceFixture) -> InterfaceFixture,
    ) -> Self {
        let fixture = build(InterfaceFixture {
            entry: Entry::new(EntryKind::Dispatch, name),
        });
        self.entries.push(fixture.entry);
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> TypeLibrary {
        let references = (0..self.entries.len()).map(|i| (i as u32, i)).collect();
        TypeLibrary {
            name: "test".to_string(),
            entries: self.entries,
            references,
        }
    }
}

pub struct InterfaceFixture {
    entry: Entry,
}

impl InterfaceFixture {
    pub fn variable(mut self, name: &str, ty: TypeDesc) -> Self {
        self.entry.variables.push(VariableRecord {
            name: Some(name.to_string()),
            elem: ElemDesc::new(ty),
        });
        self
    }

    pub fn get(self, name: &str, params: Vec<Param>, ret: TypeDesc) -> Self {
        self.function(name, InvokeKind::PropertyGet, params, ret)
    }

    pub fn put(self, name: &str, params: Vec<Param>) -> Self {
        self.function(name, InvokeKind::PropertyPut, params, void())
    }

    pub fn put_ref(self, name: &str, params: Vec<Param>) -> Self {
        self.function(name, InvokeKind::PropertyPutRef, params, void())
    }

    pub fn method(self, name: &str, params: Vec<Param>, ret: TypeDesc) -> Self {
        self.function(name, InvokeKind::Func, params, ret)
    }

    pub fn function(
        mut self,
        name: &str,
        invoke: InvokeKind,
        params: Vec<Param>,
        ret: TypeDesc,
    ) -> Self {
        self.entry.functions.push(FunctionRecord {
            name: Some(name.to_string()),
            invoke,
            params,
            ret,
        });
        self
    }
}
