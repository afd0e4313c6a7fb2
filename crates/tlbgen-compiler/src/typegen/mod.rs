//! Source generation from extracted type libraries.

pub mod python;
