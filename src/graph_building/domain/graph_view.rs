use super::{DanglingDependencyWarning, GroupId, GroupKey, GroupNode, RawDescriptor};
use serde::Serialize;
use std::fmt::Write;

/// Read-only result of a graph build: ordered group nodes plus warnings
///
/// Groups are stored in id order, so `groups()[i].id() == i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    group_by: Option<GroupKey>,
    groups: Vec<GroupNode>,
    warnings: Vec<DanglingDependencyWarning>,
}

impl GraphView {
    pub(crate) fn new(
        group_by: Option<GroupKey>,
        groups: Vec<GroupNode>,
        warnings: Vec<DanglingDependencyWarning>,
    ) -> Self {
        Self {
            group_by,
            groups,
            warnings,
        }
    }

    /// The built-in key used, or `None` for a custom selector
    pub fn group_by(&self) -> Option<GroupKey> {
        self.group_by
    }

    pub fn groups(&self) -> &[GroupNode] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupNode> {
        self.groups.get(id.index())
    }

    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GroupNode> + 'a {
        self.groups.iter().filter(move |g| g.name() == name)
    }

    pub fn warnings(&self) -> &[DanglingDependencyWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All edges as `(from, to)` pairs, ordered by source id then insertion
    pub fn edges(&self) -> impl Iterator<Item = (GroupId, GroupId)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.deps().iter().map(move |dep| (g.id(), *dep)))
    }

    pub fn edge_count(&self) -> usize {
        self.groups.iter().map(|g| g.deps().len()).sum()
    }

    /// Groups whose exact `name@version` is installed more than once
    pub fn duplicated_groups(&self) -> impl Iterator<Item = &GroupNode> {
        self.groups.iter().filter(|g| g.is_duplicated())
    }

    /// Re-emits the view as an inventory with absolute dependency paths.
    ///
    /// One descriptor per collapsed path, carrying the group's first version
    /// and the paths of every dependency group. Exact for path-keyed views;
    /// for coarser keys the per-path edge detail is already merged away.
    /// Dangling references were dropped during resolution, so the view's
    /// warnings are not carried over.
    pub fn to_descriptors(&self) -> Vec<RawDescriptor> {
        let mut descriptors = Vec::new();
        for group in &self.groups {
            let version = group.versions().first().cloned().unwrap_or_default();
            let dependencies: Vec<String> = group
                .deps()
                .iter()
                .filter_map(|id| self.group(*id))
                .flat_map(|dep| dep.paths().iter().cloned())
                .collect();

            for path in group.paths() {
                descriptors.push(RawDescriptor {
                    path: Some(path.clone()),
                    name: Some(group.name().to_string()),
                    version: Some(version.clone()),
                    dependencies: Some(dependencies.clone()),
                });
            }
        }
        descriptors
    }

    /// Plain-text diagnostic dump of every group and its edges
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let _ = writeln!(
                out,
                "[{}] {} versions: {} (name copies: {}, version copies: {})",
                group.id(),
                group.name(),
                group.versions().join(", "),
                group.name_copies(),
                group.version_copies()
            );
            for path in group.paths() {
                let _ = writeln!(out, "    path: {}", path);
            }
            for dep in group.deps() {
                let name = self.group(*dep).map(GroupNode::name).unwrap_or("?");
                let _ = writeln!(out, "    -> [{}] {}", dep, name);
            }
            for parent in group.parents() {
                let name = self.group(*parent).map(GroupNode::name).unwrap_or("?");
                let _ = writeln!(out, "    <- [{}] {}", parent, name);
            }
        }
        out
    }
}
