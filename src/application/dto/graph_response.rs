use crate::graph_building::domain::GraphView;

/// GraphResponse - Internal response DTO from the graph building use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The grouped, read-only graph
    pub view: GraphView,
    /// Number of input records the view was built from
    pub record_count: usize,
    /// Strict mode was requested and dangling dependencies were found
    /// Used to determine the exit code
    pub has_strict_violations: bool,
}

impl GraphResponse {
    pub fn new(view: GraphView, record_count: usize, has_strict_violations: bool) -> Self {
        Self {
            view,
            record_count,
            has_strict_violations,
        }
    }
}
