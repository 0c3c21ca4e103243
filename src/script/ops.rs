use tracing::debug;

/// One `OpName: AddressSpec` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationBlock {
    pub name: String,
    pub raw_address_spec: String,
}

impl OperationBlock {
    /// Split a line on its colon. Lines without exactly one colon are rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(':');
        let (name, spec) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(spec), None) => (name, spec),
            _ => return None,
        };
        Some(Self {
            name: name.trim().to_string(),
            raw_address_spec: spec.trim().to_string(),
        })
    }
}

/// Parse the multi-line operation text, keeping line order.
///
/// Runs of newlines separate lines; malformed lines are dropped silently.
pub fn parse_operations(text: &str) -> Vec<OperationBlock> {
    text.trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let block = OperationBlock::parse(line);
            if block.is_none() {
                debug!(line, "skipping operation line without exactly one ':'");
            }
            block
        })
        .collect()
}
