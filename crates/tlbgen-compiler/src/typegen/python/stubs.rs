//! `.pyi` stub emission for dispatch interfaces.
//!
//! The body is rendered first; the import block is built afterwards from the
//! typing names and aliases the body actually used.

use std::collections::{BTreeSet, HashSet};

use crate::alias::{AliasMap, DisplayType};
use crate::extract::{InterfaceDescriptor, Library, MethodDescriptor};
use crate::resolve::{Primitive, ResolvedType};

use super::Config;
use super::naming::{UniqueNames, safe_identifier, safe_param_name};

/// Counts of what the stub module declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StubStats {
    pub enums: usize,
    pub interfaces: usize,
    pub properties: usize,
    pub methods: usize,
}

/// Stub module emitter.
pub struct StubEmitter<'a> {
    library: &'a Library,
    aliases: &'a AliasMap,
    config: &'a Config,

    /// Raw enumeration names
    enum_names: HashSet<&'a str>,
    /// `typing` names referenced by the body
    typing: BTreeSet<&'static str>,
    /// Aliases referenced by the body
    used_aliases: BTreeSet<String>,
    stats: StubStats,
    /// Output buffer (body only)
    output: String,
}

impl<'a> StubEmitter<'a> {
    pub fn new(library: &'a Library, aliases: &'a AliasMap, config: &'a Config) -> Self {
        Self {
            library,
            aliases,
            config,
            enum_names: library.enums.iter().map(|e| e.name.as_str()).collect(),
            typing: BTreeSet::new(),
            used_aliases: BTreeSet::new(),
            stats: StubStats::default(),
            output: String::new(),
        }
    }

    /// Render the stub module.
    pub fn emit(mut self) -> (String, StubStats) {
        self.stats.enums = self.enum_names.len();
        self.emit_enum_aliases();
        self.emit_constants_class();

        let library = self.library;
        let mut interfaces: Vec<&InterfaceDescriptor> = library.interfaces.iter().collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        for iface in interfaces {
            self.emit_interface(iface);
        }

        let mut document = self.render_header();
        document.push_str(&self.output);

        tracing::info!(
            interfaces = self.stats.interfaces,
            properties = self.stats.properties,
            methods = self.stats.methods,
            aliases = self.used_aliases.len(),
            "emitted stub module"
        );

        // Ensure exactly one trailing newline
        document.truncate(document.trim_end().len());
        document.push('\n');
        (document, self.stats)
    }

    fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn render_header(&self) -> String {
        let mut header = String::new();
        let mut push = |line: &str| {
            header.push_str(line);
            header.push('\n');
        };

        push(&format!(
            "# Auto-generated from a type library by {}.",
            self.config.generator
        ));
        push("# DO NOT EDIT - regenerate instead.");
        push("#");
        push("# Interface and enum types come straight from the type library;");
        push(&format!(
            "# enum types are linked to the `{}` aliases.",
            self.config.constants_module
        ));
        push("");

        let mut imports = Vec::new();
        if !self.typing.is_empty() {
            let names: Vec<&str> = self.typing.iter().copied().collect();
            imports.push(format!("from typing import {}", names.join(", ")));
        }
        if !self.library.interfaces.is_empty() {
            imports.push(format!(
                "from {} import {}",
                self.config.base_module, self.config.base_class
            ));
        }
        if !self.used_aliases.is_empty() {
            let names: Vec<&str> = self.used_aliases.iter().map(String::as_str).collect();
            imports.push(format!(
                "from {} import {}",
                self.config.constants_module,
                names.join(", ")
            ));
        }
        if !imports.is_empty() {
            for import in &imports {
                push(import);
            }
            push("");
        }
        push("");
        header
    }

    fn emit_enum_aliases(&mut self) {
        if !self.config.emit_enum_aliases || self.enum_names.is_empty() {
            return;
        }

        let names: BTreeSet<&str> = self.enum_names.iter().copied().collect();
        self.line("# Enum types (type library names as aliases to int)");
        for name in names {
            self.line(&format!("{} = int", safe_identifier(name)));
        }
        self.line("");
        self.line("");
    }

    fn emit_constants_class(&mut self) {
        let library = self.library;
        if library.enums.is_empty() {
            return;
        }

        let mut enums: Vec<_> = library.enums.iter().collect();
        enums.sort_by(|a, b| a.name.cmp(&b.name));

        let mut seen = HashSet::new();
        self.line("class constants:");
        self.line("    \"\"\"Constants from the type library.\"\"\"");
        for e in enums {
            self.line(&format!("    # {}", e.name));
            let mut members: Vec<_> = e.members.iter().collect();
            members.sort_by_key(|m| m.value);
            for member in members {
                let name = safe_identifier(&member.name);
                if seen.insert(name.clone()) {
                    self.line(&format!("    {name}: int"));
                }
            }
        }
        self.line("");
        self.line("");
    }

    fn emit_interface(&mut self, iface: &InterfaceDescriptor) {
        self.line(&format!(
            "class {}({}):",
            safe_identifier(&iface.name),
            self.config.base_class
        ));

        let mut properties: Vec<_> = iface.properties.values().collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        for prop in &properties {
            let name = safe_identifier(&prop.name);
            let ty = self.render_type(&prop.ty);
            self.line("    @property");
            self.line(&format!("    def {name}(self) -> {ty}: ..."));
            if prop.has_setter {
                self.line(&format!("    @{name}.setter"));
                self.line(&format!("    def {name}(self, value: {ty}) -> None: ..."));
            }
        }

        let mut methods: Vec<_> = iface.methods.iter().collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        for method in &methods {
            self.emit_method(method);
        }

        if properties.is_empty() && methods.is_empty() {
            self.line("    ...");
        }
        self.line("");
        self.line("");

        self.stats.interfaces += 1;
        self.stats.properties += properties.len();
        self.stats.methods += methods.len();
    }

    fn emit_method(&mut self, method: &MethodDescriptor) {
        let mut names = UniqueNames::new();
        names.reserve("self");

        let mut params = vec!["self".to_string()];
        // Once a parameter has a default, every later one needs one too.
        let mut defaulted = false;
        for param in method.inputs() {
            let name = names.claim(&safe_param_name(&param.name));
            let ty = self.render_type(&param.ty);
            defaulted |= param.optional;
            if defaulted {
                params.push(format!("{name}: {ty} = ..."));
            } else {
                params.push(format!("{name}: {ty}"));
            }
        }

        let ret = self.render_type(&method.return_type);
        self.line(&format!(
            "    def {}({}) -> {ret}: ...",
            safe_identifier(&method.name),
            params.join(", ")
        ));
    }

    /// Translate, record what the result references, and render it.
    fn render_type(&mut self, ty: &ResolvedType) -> String {
        let display = self.localize(self.aliases.translate(ty));

        display.walk(&mut |t| match t {
            DisplayType::Primitive(Primitive::Any) => {
                self.typing.insert("Any");
            }
            DisplayType::Sequence(_) | DisplayType::Tuple(_) => {
                self.typing.insert("Tuple");
            }
            _ => {}
        });
        for alias in display.aliases() {
            self.used_aliases.insert(alias.to_string());
        }

        display.to_string()
    }

    /// Escape unaliased names the way their declarations are escaped, or
    /// replace enumeration names with `int` when enum aliases are off.
    fn localize(&self, ty: DisplayType) -> DisplayType {
        match ty {
            DisplayType::Named(name)
                if !self.config.emit_enum_aliases && self.enum_names.contains(name.as_str()) =>
            {
                DisplayType::Primitive(Primitive::Int)
            }
            DisplayType::Named(name) => DisplayType::Named(safe_identifier(&name)),
            DisplayType::Sequence(inner) => DisplayType::Sequence(Box::new(self.localize(*inner))),
            DisplayType::Tuple(items) => {
                DisplayType::Tuple(items.into_iter().map(|t| self.localize(t)).collect())
            }
            other => other,
        }
    }
}

/// Render the stub module for `library`.
pub fn emit_stubs(library: &Library, aliases: &AliasMap, config: &Config) -> (String, StubStats) {
    StubEmitter::new(library, aliases, config).emit()
}
