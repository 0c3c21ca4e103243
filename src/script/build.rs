//! Script assembly: header + one alarm check per address, per operation.

use crate::addr::{AddressType, expand};
use crate::addr::expand::invalid_entries_message;
use crate::render::{render_alarm_check, render_header, wrap_operation};
use crate::script::parse_operations;
use tracing::debug;

/// Rejected address entries of one operation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDiagnostic {
    pub operation: String,
    pub invalid: Vec<String>,
}

impl OperationDiagnostic {
    pub fn message(&self) -> String {
        invalid_entries_message(&self.invalid).unwrap_or_default()
    }
}

/// Generated document plus the address entries that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedScript {
    pub text: String,
    /// One entry per operation line that had invalid addresses, in line order.
    pub diagnostics: Vec<OperationDiagnostic>,
}

impl GeneratedScript {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn product_var(machine_name: &str, op_name: &str) -> String {
    format!("{}_{}Product", machine_name, op_name)
}

pub fn auto_var(machine_name: &str, op_name: &str) -> String {
    format!("{}_{}AutoNonAuto", machine_name, op_name)
}

/// Build the alarm script for every well-formed line of `operations`.
///
/// Pure: identical inputs always give identical output. Names are used
/// verbatim in identifiers, without sanitization.
pub fn build(machine_name: &str, operations: &str, default_type: AddressType) -> GeneratedScript {
    let mut text = String::new();
    let mut diagnostics = Vec::new();

    for op in parse_operations(operations) {
        let expansion = expand(&op.raw_address_spec, default_type);
        debug!(
            operation = %op.name,
            addresses = expansion.tokens.len(),
            invalid = expansion.invalid.len(),
            "expanded operation"
        );

        let mut script = render_header(
            &op.name,
            &product_var(machine_name, &op.name),
            &auto_var(machine_name, &op.name),
        );
        for token in &expansion.tokens {
            script.push_str("\n\n");
            script.push_str(&render_alarm_check(machine_name, token));
        }
        text.push_str(&wrap_operation(&script));

        if !expansion.invalid.is_empty() {
            diagnostics.push(OperationDiagnostic {
                operation: op.name,
                invalid: expansion.invalid,
            });
        }
    }

    GeneratedScript {
        text: text.trim().to_string(),
        diagnostics,
    }
}

/// Same as [`build`], discarding diagnostics.
pub fn build_script(machine_name: &str, operations: &str, default_type: AddressType) -> String {
    build(machine_name, operations, default_type).text
}
