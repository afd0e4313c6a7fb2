//! Configuration types for Python emission.

/// Configuration for Python emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Module the stubs import curated aliases from
    pub(crate) constants_module: String,
    /// Base class of every interface stub
    pub(crate) base_class: String,
    /// Module the base class is imported from
    pub(crate) base_module: String,
    /// Generator name written into file headers
    pub(crate) generator: String,
    /// Whether to declare raw enum names as `int` aliases in the stubs
    pub(crate) emit_enum_aliases: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constants_module: "constants".to_string(),
            base_class: "DispatchBaseClass".to_string(),
            base_module: "win32com.client".to_string(),
            generator: "tlbgen".to_string(),
            emit_enum_aliases: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module the stubs import curated aliases from.
    pub fn constants_module(mut self, value: impl Into<String>) -> Self {
        self.constants_module = value.into();
        self
    }

    /// Set the interface base class.
    pub fn base_class(mut self, value: impl Into<String>) -> Self {
        self.base_class = value.into();
        self
    }

    /// Set the module the base class is imported from.
    pub fn base_module(mut self, value: impl Into<String>) -> Self {
        self.base_module = value.into();
        self
    }

    /// Set the generator name written into headers.
    pub fn generator(mut self, value: impl Into<String>) -> Self {
        self.generator = value.into();
        self
    }

    /// Set whether raw enum names are declared as `int` aliases. When off,
    /// unaliased enum types render as plain `int`.
    pub fn emit_enum_aliases(mut self, value: bool) -> Self {
        self.emit_enum_aliases = value;
        self
    }

    /// Module the stubs import curated aliases from.
    pub fn constants_module_name(&self) -> &str {
        &self.constants_module
    }
}
