use crate::graph_building::domain::GraphView;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the grouped graph output contract
///
/// `{"groupBy", "groups": [{id, name, versions, paths, deps, parents,
/// nameCopies, versionCopies}], "warnings": [{recordIndex, missingPath}]}`
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, view: &GraphView) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(view).context("Failed to serialize graph to JSON")?;
        output.push('\n');
        Ok(output)
    }
}
