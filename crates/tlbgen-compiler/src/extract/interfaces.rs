//! Dispatch interface extraction.
//!
//! Properties come from two places: variables (always read-write) and
//! property accessor functions. Accessors that take arguments are indexed
//! properties; their getter and setter halves are collected by name during
//! the scan and turned into accessor methods once every function was seen.

use indexmap::IndexMap;
use tlbgen_core::{Function, HostResult, InvokeKind, MetadataHost, Param, ParamFlags};

use super::ExtractStats;
use crate::resolve::{ResolvedType, Resolver};

/// Simple (non-indexed) property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: ResolvedType,
    pub has_setter: bool,
}

/// One index argument of an indexed property accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexParam {
    pub name: String,
    pub ty: ResolvedType,
}

/// Property accessor that takes index arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedPropertyDescriptor {
    pub name: String,
    pub getter_params: Option<Vec<IndexParam>>,
    /// Index parameters followed by the value parameter.
    pub setter_params: Option<Vec<IndexParam>>,
    pub ty: ResolvedType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamDirection {
    In,
    /// Written by the callee only; moves into the return tuple.
    Out,
    /// Read and written; stays an (optional) argument and joins the return tuple.
    InOut,
}

impl ParamDirection {
    fn from_flags(flags: ParamFlags) -> Self {
        match (flags.contains(ParamFlags::IN), flags.contains(ParamFlags::OUT)) {
            (_, false) => Self::In,
            (false, true) => Self::Out,
            (true, true) => Self::InOut,
        }
    }

    pub fn is_output(self) -> bool {
        matches!(self, Self::Out | Self::InOut)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodParam {
    pub name: String,
    pub ty: ResolvedType,
    pub direction: ParamDirection,
    /// Rendered with a default in the stub.
    pub optional: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    /// Parameters in declaration order, including output-only ones.
    pub params: Vec<MethodParam>,
    pub return_type: ResolvedType,
}

impl MethodDescriptor {
    /// Parameters the caller passes: everything except output-only ones.
    pub fn inputs(&self) -> impl Iterator<Item = &MethodParam> {
        self.params
            .iter()
            .filter(|p| p.direction != ParamDirection::Out)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub name: String,
    pub properties: IndexMap<String, PropertyDescriptor>,
    pub indexed_properties: IndexMap<String, IndexedPropertyDescriptor>,
    /// Plain methods in host order, then indexed accessors.
    pub methods: Vec<MethodDescriptor>,
}

/// Read the dispatch interface at `index`.
pub fn extract_interface(
    resolver: &Resolver<'_>,
    host: &dyn MetadataHost,
    index: usize,
    stats: &mut ExtractStats,
) -> HostResult<InterfaceDescriptor> {
    let name = host.entry_name(index)?;
    let variables = host.interface_variables(index)?;
    let functions = host.interface_functions(index)?;

    let mut builder = InterfaceBuilder::new(resolver);

    for slot in variables {
        match slot {
            Ok(variable) => {
                let ty = resolver.resolve_elem(&variable.elem);
                builder.properties.insert(
                    variable.name.clone(),
                    PropertyDescriptor {
                        name: variable.name,
                        ty,
                        has_setter: true,
                    },
                );
            }
            Err(err) => {
                tracing::debug!(interface = %name, %err, "skipping unreadable variable");
                stats.skipped_members += 1;
            }
        }
    }

    for slot in functions {
        match slot {
            Ok(function) => builder.add_function(function),
            Err(err) => {
                tracing::debug!(interface = %name, %err, "skipping unreadable function");
                stats.skipped_members += 1;
            }
        }
    }

    Ok(builder.finish(name))
}

/// Both halves of an indexed property, filled in as accessors are seen.
#[derive(Default)]
struct PendingIndexed {
    getter: Option<(Vec<IndexParam>, ResolvedType)>,
    setter: Option<Vec<IndexParam>>,
}

struct InterfaceBuilder<'r, 'h> {
    resolver: &'r Resolver<'h>,
    properties: IndexMap<String, PropertyDescriptor>,
    indexed: IndexMap<String, PendingIndexed>,
    methods: Vec<MethodDescriptor>,
}

impl<'r, 'h> InterfaceBuilder<'r, 'h> {
    fn new(resolver: &'r Resolver<'h>) -> Self {
        Self {
            resolver,
            properties: IndexMap::new(),
            indexed: IndexMap::new(),
            methods: Vec::new(),
        }
    }

    fn add_function(&mut self, function: Function) {
        match function.invoke {
            InvokeKind::PropertyGet => self.add_getter(function),
            InvokeKind::PropertyPut | InvokeKind::PropertyPutRef => self.add_setter(function),
            InvokeKind::Func => self.add_method(function),
        }
    }

    fn add_getter(&mut self, function: Function) {
        let ty = self.resolver.resolve(&function.ret);

        if function.params.is_empty() {
            self.properties
                .entry(function.name.clone())
                .and_modify(|p| p.ty = ty.clone())
                .or_insert(PropertyDescriptor {
                    name: function.name,
                    ty,
                    has_setter: false,
                });
            return;
        }

        let params = self.index_params(&function.params);
        self.indexed.entry(function.name).or_default().getter = Some((params, ty));
    }

    fn add_setter(&mut self, function: Function) {
        if function.params.len() > 1 {
            let params = self.index_params(&function.params);
            self.indexed.entry(function.name).or_default().setter = Some(params);
            return;
        }

        if let Some(existing) = self.properties.get_mut(&function.name) {
            existing.has_setter = true;
            return;
        }

        let ty = function
            .params
            .last()
            .map(|p| self.resolver.resolve_elem(&p.elem))
            .unwrap_or(ResolvedType::ANY);
        self.properties.insert(
            function.name.clone(),
            PropertyDescriptor {
                name: function.name,
                ty,
                has_setter: true,
            },
        );
    }

    fn add_method(&mut self, function: Function) {
        let declared = self.resolver.resolve(&function.ret);

        let params: Vec<MethodParam> = function
            .params
            .iter()
            .enumerate()
            .map(|(k, param)| {
                let direction = ParamDirection::from_flags(param.elem.flags);
                let optional = direction == ParamDirection::InOut
                    || param.elem.flags.contains(ParamFlags::OPT)
                    || param.elem.flags.contains(ParamFlags::HAS_DEFAULT)
                    || param.elem.default.is_some();
                MethodParam {
                    name: param_name(param, k),
                    ty: self.resolver.resolve_elem(&param.elem),
                    direction,
                    optional,
                }
            })
            .collect();

        let outputs: Vec<ResolvedType> = params
            .iter()
            .filter(|p| p.direction.is_output())
            .map(|p| p.ty.clone())
            .collect();

        let return_type = if outputs.is_empty() {
            declared
        } else {
            let mut items = Vec::with_capacity(outputs.len() + 1);
            items.push(declared);
            items.extend(outputs);
            ResolvedType::Tuple(items)
        };

        self.methods.push(MethodDescriptor {
            name: function.name,
            params,
            return_type,
        });
    }

    fn index_params(&self, params: &[Param]) -> Vec<IndexParam> {
        params
            .iter()
            .enumerate()
            .map(|(k, param)| IndexParam {
                name: param_name(param, k),
                ty: self.resolver.resolve_elem(&param.elem),
            })
            .collect()
    }

    fn finish(mut self, name: String) -> InterfaceDescriptor {
        let mut indexed_properties = IndexMap::with_capacity(self.indexed.len());

        for (prop, pending) in self.indexed {
            let ty = match (&pending.getter, &pending.setter) {
                (Some((_, ty)), _) => ty.clone(),
                (None, Some(params)) => params
                    .last()
                    .map(|p| p.ty.clone())
                    .unwrap_or(ResolvedType::ANY),
                (None, None) => ResolvedType::ANY,
            };

            if let Some((params, _)) = &pending.getter {
                self.methods.push(MethodDescriptor {
                    name: prop.clone(),
                    params: params.iter().map(accessor_param).collect(),
                    return_type: ty.clone(),
                });
            }
            if let Some(params) = &pending.setter {
                self.methods.push(MethodDescriptor {
                    name: format!("Set{prop}"),
                    params: params.iter().map(accessor_param).collect(),
                    return_type: ResolvedType::NONE,
                });
            }

            indexed_properties.insert(
                prop.clone(),
                IndexedPropertyDescriptor {
                    name: prop,
                    getter_params: pending.getter.map(|(params, _)| params),
                    setter_params: pending.setter,
                    ty,
                },
            );
        }

        InterfaceDescriptor {
            name,
            properties: self.properties,
            indexed_properties,
            methods: self.methods,
        }
    }
}

fn param_name(param: &Param, k: usize) -> String {
    match param.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("arg{k}"),
    }
}

fn accessor_param(param: &IndexParam) -> MethodParam {
    MethodParam {
        name: param.name.clone(),
        ty: param.ty.clone(),
        direction: ParamDirection::In,
        optional: false,
    }
}
