use crate::graph_building::domain::{
    GraphView, GroupId, GroupKey, GroupNode, NodeIndex, PackageRecord, ResolvedGraph,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Group under construction; frozen into a [`GroupNode`] at the end
struct GroupDraft<'a> {
    name: &'a str,
    versions: IndexSet<&'a str>,
    paths: IndexSet<&'a str>,
    members: Vec<NodeIndex>,
    deps: IndexSet<GroupId>,
    parents: IndexSet<GroupId>,
}

/// GroupAggregator service collapsing resolved records into group nodes
///
/// Deterministic two-pass algorithm over the resolved arena:
/// pass 1 forms groups in first-seen key order and tallies copy counters,
/// pass 2 derives group edges and statistics. The grouped graph may contain
/// cycles and self-loops even when the raw graph has none.
pub struct GroupAggregator;

impl GroupAggregator {
    /// Aggregates with one of the built-in grouping keys
    pub fn aggregate(resolved: &ResolvedGraph, key: GroupKey) -> GraphView {
        let groups = Self::collect_groups(resolved, |record| key.key_for(record));
        GraphView::new(Some(key), groups, resolved.warnings().to_vec())
    }

    /// Aggregates with an arbitrary pure selector
    pub fn aggregate_with<F>(resolved: &ResolvedGraph, selector: F) -> GraphView
    where
        F: Fn(&PackageRecord) -> String,
    {
        let groups = Self::collect_groups(resolved, selector);
        GraphView::new(None, groups, resolved.warnings().to_vec())
    }

    fn collect_groups<F>(resolved: &ResolvedGraph, selector: F) -> Vec<GroupNode>
    where
        F: Fn(&PackageRecord) -> String,
    {
        let mut drafts: IndexMap<String, GroupDraft<'_>> = IndexMap::new();
        // arena index -> owning group, the per-path lookup used by pass 2
        let mut owners: Vec<GroupId> = Vec::with_capacity(resolved.len());
        let mut version_counts: HashMap<(&str, &str), usize> = HashMap::new();

        // pass 1: group formation
        for (position, node) in resolved.nodes().iter().enumerate() {
            let record = node.record();
            let entry = drafts.entry(selector(record));
            let id = GroupId::new(entry.index());
            let draft = entry.or_insert_with(|| GroupDraft {
                name: record.name(),
                versions: IndexSet::new(),
                paths: IndexSet::new(),
                members: Vec::new(),
                deps: IndexSet::new(),
                parents: IndexSet::new(),
            });

            draft.versions.insert(record.version());
            draft.paths.insert(record.path().as_str());
            draft.members.push(NodeIndex::new(position));
            owners.push(id);

            *version_counts
                .entry((record.name(), record.version()))
                .or_insert(0) += 1;
        }

        let mut drafts: Vec<GroupDraft<'_>> = drafts.into_values().collect();

        // pass 2: forward edges, then parents by inverting them
        for draft in &mut drafts {
            for member in &draft.members {
                let Some(node) = resolved.node(*member) else {
                    continue;
                };
                for dep in node.deps() {
                    draft.deps.insert(owners[dep.index()]);
                }
            }
        }

        let edges: Vec<(GroupId, GroupId)> = drafts
            .iter()
            .enumerate()
            .flat_map(|(from, draft)| draft.deps.iter().map(move |to| (GroupId::new(from), *to)))
            .collect();
        for (from, to) in edges {
            drafts[to.index()].parents.insert(from);
        }

        let mut name_counts: HashMap<&str, usize> = HashMap::new();
        for draft in &drafts {
            *name_counts.entry(draft.name).or_insert(0) += 1;
        }

        drafts
            .iter()
            .enumerate()
            .map(|(id, draft)| {
                let version_copies = Self::version_copies(draft, resolved, &version_counts);
                GroupNode::new(
                    GroupId::new(id),
                    draft.name.to_string(),
                    draft.versions.iter().map(|v| v.to_string()).collect(),
                    draft.paths.iter().map(|p| p.to_string()).collect(),
                    draft.deps.iter().copied().collect(),
                    draft.parents.iter().copied().collect(),
                    name_counts.get(draft.name).copied().unwrap_or(1),
                    version_copies,
                )
            })
            .collect()
    }

    /// Max raw-record count over the group's `name@version` pairs.
    ///
    /// With the built-in keys every member shares the group's label, so this
    /// is the max over the group's versions. Custom selectors may merge
    /// records with other names; their own pairs are used then.
    fn version_copies(
        draft: &GroupDraft<'_>,
        resolved: &ResolvedGraph,
        version_counts: &HashMap<(&str, &str), usize>,
    ) -> usize {
        let by_label = draft
            .versions
            .iter()
            .filter_map(|version| version_counts.get(&(draft.name, *version)).copied());
        let by_member = draft
            .members
            .iter()
            .filter_map(|member| resolved.node(*member))
            .filter_map(|node| {
                let record = node.record();
                version_counts
                    .get(&(record.name(), record.version()))
                    .copied()
            });

        by_label.chain(by_member).max().unwrap_or(1)
    }
}
