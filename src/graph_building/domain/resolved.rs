use super::{DanglingDependencyWarning, PackageRecord};
use indexmap::IndexSet;

/// Stable index of a node in the resolved arena
///
/// Equal to the position of the record in the input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A package record with its resolved forward and reverse references
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    record: PackageRecord,
    deps: Vec<NodeIndex>,
    parents: Vec<NodeIndex>,
}

impl ResolvedNode {
    pub fn record(&self) -> &PackageRecord {
        &self.record
    }

    /// Forward references in declaration order. Authoritative for edges.
    pub fn deps(&self) -> &[NodeIndex] {
        &self.deps
    }

    /// Nodes depending on this one, derived by inverting `deps`
    pub fn parents(&self) -> &[NodeIndex] {
        &self.parents
    }
}

/// Arena of resolved nodes addressed by [`NodeIndex`]
///
/// Built once by the dependency resolver; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    nodes: Vec<ResolvedNode>,
    warnings: Vec<DanglingDependencyWarning>,
}

impl ResolvedGraph {
    /// Assembles the arena from records and their forward adjacency.
    ///
    /// `forward[i]` lists the targets of record `i`. Parent lists are derived
    /// here in a separate pass, so callers only ever produce one direction.
    /// `forward` must have one entry per record and every target must index
    /// into `records`; only the resolver builds arenas.
    pub(crate) fn from_forward_edges(
        records: Vec<PackageRecord>,
        forward: Vec<Vec<NodeIndex>>,
        warnings: Vec<DanglingDependencyWarning>,
    ) -> Self {
        debug_assert_eq!(records.len(), forward.len());

        let mut parents: Vec<IndexSet<NodeIndex>> = vec![IndexSet::new(); records.len()];
        for (from, targets) in forward.iter().enumerate() {
            for target in targets {
                parents[target.index()].insert(NodeIndex(from));
            }
        }

        let nodes = records
            .into_iter()
            .zip(forward)
            .zip(parents)
            .map(|((record, deps), parents)| ResolvedNode {
                record,
                deps,
                parents: parents.into_iter().collect(),
            })
            .collect();

        Self { nodes, warnings }
    }

    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&ResolvedNode> {
        self.nodes.get(index.index())
    }

    pub fn warnings(&self) -> &[DanglingDependencyWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of forward references across all nodes
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.deps.len()).sum()
    }
}
