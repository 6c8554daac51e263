use crate::graph_building::domain::GraphView;
use crate::shared::Result;

/// GraphFormatter port for turning a grouped graph into text
///
/// Implementations decide the output representation (JSON contract,
/// diagnostic dump, ...). They never mutate the view.
pub trait GraphFormatter {
    /// Formats the grouped graph
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &GraphView) -> Result<String>;
}
