use crate::graph_building::domain::GraphView;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter producing the human-readable diagnostic dump
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, view: &GraphView) -> Result<String> {
        let mut output = String::new();

        let grouping = view.group_by().map_or("custom key", |key| key.as_str());
        writeln!(
            output,
            "# {} group(s), {} edge(s), grouped by {}",
            view.len(),
            view.edge_count(),
            grouping
        )?;
        output.push('\n');
        output.push_str(&view.dump());

        let duplicated: Vec<String> = view
            .duplicated_groups()
            .map(|g| format!("{} ({} copies)", g.name(), g.version_copies()))
            .collect();
        if !duplicated.is_empty() {
            writeln!(output, "\n# Duplicate installs")?;
            for line in duplicated {
                writeln!(output, "  {}", line)?;
            }
        }

        if !view.warnings().is_empty() {
            writeln!(output, "\n# Dangling dependencies")?;
            for warning in view.warnings() {
                writeln!(output, "  {}", warning)?;
            }
        }

        Ok(output)
    }
}
