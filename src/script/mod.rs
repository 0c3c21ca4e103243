//! Script layer: operation lines in, alarm-logging script out.
//!
//! It owns:
//! - OperationBlock parsing ("Op115: CIO4012-4019, W4021")
//! - build (operations -> GeneratedScript with per-line diagnostics)

pub mod build;
pub mod ops;

pub use build::{GeneratedScript, OperationDiagnostic, auto_var, build, build_script, product_var};
pub use ops::{OperationBlock, parse_operations};
