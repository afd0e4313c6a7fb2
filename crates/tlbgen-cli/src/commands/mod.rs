pub mod common;
pub mod constants;
pub mod enums;
pub mod generate;
pub mod stubs;
