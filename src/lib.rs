//! GMAT script generation.
//!
//! The library is a thin façade over the workspace crates so front-ends
//! (the bundled CLI, notebooks, other tools) share one entry point.

pub use gmat_config as config;
pub use gmat_core as common;
pub use gmat_export as export;
pub use gmat_script as script;

pub use gmat_script::{Formation, ScriptBuilder, ScriptError, build_scenario};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
