//! Python emission: a constants module of `IntEnum` classes and a `.pyi`
//! stub module for the dispatch interfaces.

mod config;
mod constants;
mod naming;
mod stubs;


pub use config::Config;
pub use constants::{ConstantsEmitter, ConstantsSummary, CuratedClass, emit_constants};
pub use naming::{UniqueNames, is_keyword, safe_identifier, safe_param_name};
pub use stubs::{StubEmitter, StubStats, emit_stubs};
