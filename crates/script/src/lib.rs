//! GMAT script assembly.
//!
//! A [`ScriptBuilder`] owns an append-only script buffer and a registry of
//! declared formations. Each append renders one block from the configured
//! templates and returns the text it added; [`ScriptBuilder::save`] writes
//! the whole buffer out.

pub mod builder;
pub mod render;
pub mod scenario;

mod error;

pub use builder::{Formation, ScriptBuilder};
pub use error::ScriptError;
pub use gmat_core::{
    DEFAULT_FORMATION, DEFAULT_REPORT_PATH, DEFAULT_SCRIPT_PATH, DEFAULT_TIME_AMOUNT,
    DEFAULT_TIME_UNIT, KeplerianElements,
};
pub use scenario::build_scenario;
