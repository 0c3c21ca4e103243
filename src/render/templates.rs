//! Fixed script fragments.
//!
//! Templates are assembled line by line with `concat!` so trailing
//! whitespace survives editors and formatters byte for byte.

use crate::addr::AddressToken;
use crate::render::render;

/// Line placed before and after every operation section.
pub const SEPARATOR: &str = concat!(
    "{",
    "-------------------------------------------------------------",
    "--------------------------------------------------------------",
    "}"
);

const HEADER: &str = concat!(
    "SQL_VariableOpNumber = \"__OP_NAME__\";\n",
    "SQL_VariableProduct = __PRODUCT_VAR__;  {Product INT from this OP}\n",
    "SQL_VariableAutoNonAuto = __AUTO_VAR__;  {PLC Auto Non/Auto Mode to SQL}",
);

const ALARM_CHECK: &str = concat!(
    "IF __WORD_VAR__ <> 0 THEN\n",
    "  SQL_Variable_AlarmWordNumber = \"__ADDRESS__\";  {Alarms Word address in PLC}\n",
    "  SQL_Variable_AlarmBitsInDecimal = __WORD_VAR__;  {Gets alarm Value from a PLC Word}\n",
    "\n",
    "   {Below will Insert all this info to dbo.EPBMachinAlarms Data Table Using Bindlist \"EPBMachineAlarmsBindlist\"}",
    "                                            \n",
    "  SQLInsert(SQL_ProductionData_ConnID, \"EPBMachineAlarms\", \"EPBMachineAlarmsBindlist\");  {Will write to Database only if alarm register not = to zero}\n",
    "ENDIF;",
);

/// Per-operation header naming the op and its product / mode tags.
pub fn render_header(op_name: &str, product_var: &str, auto_var: &str) -> String {
    render(
        HEADER,
        &[
            ("OP_NAME", op_name),
            ("PRODUCT_VAR", product_var),
            ("AUTO_VAR", auto_var),
        ],
    )
}

/// Conditional insert block for one alarm word, e.g. `AS33_CIO_4012`.
pub fn render_alarm_check(machine_name: &str, token: &AddressToken) -> String {
    let word_var = format!("{}_{}_{}", machine_name, token.kind, token.number);
    let address = token.to_string();
    render(
        ALARM_CHECK,
        &[("WORD_VAR", &word_var), ("ADDRESS", &address)],
    )
}

/// Surround one operation's script with separators and blank lines.
pub fn wrap_operation(script: &str) -> String {
    let mut out = String::with_capacity(script.len() + 2 * SEPARATOR.len() + 6);
    out.push_str(SEPARATOR);
    out.push_str("\n\n");
    out.push_str(script);
    out.push_str("\n\n");
    out.push_str(SEPARATOR);
    out.push_str("\n\n");
    out
}
