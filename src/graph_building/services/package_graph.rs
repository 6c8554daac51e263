use super::{DependencyResolver, GroupAggregator, PackageNormalizer};
use crate::graph_building::domain::{
    DanglingDependencyWarning, GraphView, GroupKey, PackageRecord, RawDescriptor, ResolvedGraph,
};
use crate::shared::GraphResult;

/// Linked set of packages built from one inventory batch
///
/// Normalization and resolution run once; every grouped view is then
/// aggregated from the same resolved arena.
#[derive(Debug, Clone)]
pub struct PackageGraph {
    resolved: ResolvedGraph,
}

impl PackageGraph {
    /// Normalizes and resolves a batch of raw descriptors
    ///
    /// # Errors
    /// Returns the first `Validation` or `DuplicatePath` error; dangling
    /// dependencies are kept as warnings.
    pub fn from_descriptors(descriptors: &[RawDescriptor]) -> GraphResult<Self> {
        let records = PackageNormalizer::normalize_all(descriptors)?;
        Self::from_records(records)
    }

    /// Resolves already-normalized records
    pub fn from_records(records: Vec<PackageRecord>) -> GraphResult<Self> {
        Ok(Self {
            resolved: DependencyResolver::resolve(records)?,
        })
    }

    pub fn resolved(&self) -> &ResolvedGraph {
        &self.resolved
    }

    pub fn warnings(&self) -> &[DanglingDependencyWarning] {
        self.resolved.warnings()
    }

    pub fn group_by(&self, key: GroupKey) -> GraphView {
        GroupAggregator::aggregate(&self.resolved, key)
    }

    pub fn packages_by_name(&self) -> GraphView {
        self.group_by(GroupKey::Name)
    }

    pub fn packages_by_version(&self) -> GraphView {
        self.group_by(GroupKey::NameVersion)
    }

    pub fn packages_by_path(&self) -> GraphView {
        self.group_by(GroupKey::Path)
    }
}

/// Single-shot pipeline: normalize, resolve, aggregate
pub fn build_package_graph(descriptors: &[RawDescriptor], key: GroupKey) -> GraphResult<GraphView> {
    Ok(PackageGraph::from_descriptors(descriptors)?.group_by(key))
}
