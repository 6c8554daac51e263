use crate::graph_building::domain::{
    DanglingDependencyWarning, NodeIndex, PackageRecord, ResolvedGraph,
};
use crate::shared::error::GraphError;
use crate::shared::GraphResult;
use std::collections::HashMap;

/// DependencyResolver service linking records into a resolved arena
///
/// This service contains pure business logic with no I/O. Unknown
/// dependency paths never fail the resolution; they are collected as
/// [`DanglingDependencyWarning`]s and the edge is left out.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves every record's dependency paths into arena references
    ///
    /// # Arguments
    /// * `records` - Normalized records in input order
    ///
    /// # Errors
    /// Returns `GraphError::DuplicatePath` if two records share a path.
    pub fn resolve(records: Vec<PackageRecord>) -> GraphResult<ResolvedGraph> {
        let index = Self::build_identity_index(&records)?;

        let mut warnings = Vec::new();
        let forward: Vec<Vec<NodeIndex>> = records
            .iter()
            .enumerate()
            .map(|(record_index, record)| {
                record
                    .dependency_paths()
                    .iter()
                    .filter_map(|dep_path| match index.get(dep_path.as_str()) {
                        Some(target) => Some(*target),
                        None => {
                            warnings.push(DanglingDependencyWarning::new(
                                record_index,
                                dep_path.as_str(),
                            ));
                            None
                        }
                    })
                    .collect()
            })
            .collect();
        drop(index);

        Ok(ResolvedGraph::from_forward_edges(records, forward, warnings))
    }

    /// Maps each identity path to the arena index of its record
    fn build_identity_index(records: &[PackageRecord]) -> GraphResult<HashMap<&str, NodeIndex>> {
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let path = record.path().as_str();
            if let Some(first) = index.insert(path, NodeIndex::new(position)) {
                return Err(GraphError::DuplicatePath {
                    path: path.to_string(),
                    first_index: first.index(),
                    second_index: position,
                });
            }
        }

        Ok(index)
    }
}
