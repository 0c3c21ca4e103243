//! Alarm-logging script generator for PLC machines.
//!
//! The core is two pure functions: [`addr::expand`] turns address notation
//! such as `CIO4012-4019, W4021, 4030` into typed words, and
//! [`script::build`] templates those words into the alarm script, one
//! section per `OpName: addresses` line. [`config`] and [`output`] are the
//! thin layers the command-line tool puts around them.

pub mod addr;
pub mod config;
pub mod output;
pub mod render;
pub mod script;

pub type Result<T> = anyhow::Result<T>;

pub use addr::{AddressToken, AddressType, Expansion, expand};
pub use script::{GeneratedScript, OperationDiagnostic, build, build_script};
