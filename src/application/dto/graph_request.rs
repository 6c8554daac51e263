use crate::graph_building::domain::GroupKey;
use crate::ports::outbound::InventorySource;

/// GraphRequest - Internal request DTO for the graph building use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Where to read the package inventory from
    pub source: InventorySource,
    /// How records collapse into groups
    pub group_by: GroupKey,
    /// Whether dangling dependencies should fail the run
    pub strict: bool,
}

impl GraphRequest {
    pub fn new(source: InventorySource, group_by: GroupKey, strict: bool) -> Self {
        Self {
            source,
            group_by,
            strict,
        }
    }
}
