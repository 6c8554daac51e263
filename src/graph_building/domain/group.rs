use super::PackageRecord;
use serde::{Deserialize, Serialize};

/// Grouping key selecting how records collapse into group nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    /// One group per package name
    Name,
    /// One group per `name@version`
    #[serde(rename = "version")]
    NameVersion,
    /// One group per install path (no collapsing)
    Path,
}

impl GroupKey {
    /// Computes the grouping key of a record
    ///
    /// The name-and-version key is length-prefixed, since both parts may
    /// contain any character including `@`.
    pub fn key_for(self, record: &PackageRecord) -> String {
        match self {
            GroupKey::Name => record.name().to_string(),
            GroupKey::NameVersion => {
                format!("{}:{}@{}", record.name().len(), record.name(), record.version())
            }
            GroupKey::Path => record.path().as_str().to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupKey::Name => "name",
            GroupKey::NameVersion => "version",
            GroupKey::Path => "path",
        }
    }
}

impl std::str::FromStr for GroupKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "package" => Ok(GroupKey::Name),
            "version" | "name-version" | "nameversion" => Ok(GroupKey::NameVersion),
            "path" => Ok(GroupKey::Path),
            _ => Err(format!(
                "Invalid grouping: {}. Please specify 'name', 'version' or 'path'",
                s
            )),
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable group identifier, assigned in first-seen order of the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(usize);

impl GroupId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicated node standing for every record that shares a grouping key
///
/// All sequences are in insertion order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    id: GroupId,
    name: String,
    versions: Vec<String>,
    paths: Vec<String>,
    deps: Vec<GroupId>,
    parents: Vec<GroupId>,
    name_copies: usize,
    version_copies: usize,
}

impl GroupNode {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: GroupId,
        name: String,
        versions: Vec<String>,
        paths: Vec<String>,
        deps: Vec<GroupId>,
        parents: Vec<GroupId>,
        name_copies: usize,
        version_copies: usize,
    ) -> Self {
        Self {
            id,
            name,
            versions,
            paths,
            deps,
            parents,
            name_copies,
            version_copies,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn deps(&self) -> &[GroupId] {
        &self.deps
    }

    pub fn parents(&self) -> &[GroupId] {
        &self.parents
    }

    /// Number of distinct groups sharing this group's name
    pub fn name_copies(&self) -> usize {
        self.name_copies
    }

    /// Largest number of raw records sharing one of this group's `name@version` pairs
    pub fn version_copies(&self) -> usize {
        self.version_copies
    }

    pub fn has_self_loop(&self) -> bool {
        self.deps.contains(&self.id)
    }

    /// The same `name@version` is installed more than once
    pub fn is_duplicated(&self) -> bool {
        self.version_copies > 1
    }

    /// More than one version of this package is present
    pub fn has_version_skew(&self) -> bool {
        self.versions.len() > 1 || self.name_copies > 1
    }

    /// Multi-line label: name, versions, and the copy count when duplicated
    pub fn label(&self) -> String {
        let mut label = format!("{}\n{}", self.name, self.versions.join(", "));
        if self.is_duplicated() {
            label.push_str(&format!("\n{} copies", self.version_copies));
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_building::domain::{IdentityPath, PackageName, Version};
    use std::str::FromStr;

    fn record() -> PackageRecord {
        PackageRecord::new(
            IdentityPath::new("/app/node_modules/debug".to_string()).unwrap(),
            PackageName::new("debug".to_string()).unwrap(),
            Version::new("2.6.9".to_string()).unwrap(),
            vec![],
        )
    }

    fn group(versions: &[&str], name_copies: usize, version_copies: usize) -> GroupNode {
        GroupNode::new(
            GroupId::new(0),
            "debug".to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
            vec!["/a".to_string()],
            vec![],
            vec![],
            name_copies,
            version_copies,
        )
    }

    #[test]
    fn test_key_for_each_grouping() {
        let pkg = record();
        assert_eq!(GroupKey::Name.key_for(&pkg), "debug");
        assert_eq!(GroupKey::NameVersion.key_for(&pkg), "5:debug@2.6.9");
        assert_eq!(GroupKey::Path.key_for(&pkg), "/app/node_modules/debug");
    }

    #[test]
    fn test_name_version_key_does_not_collide_on_at_sign() {
        let make = |name: &str, version: &str| {
            PackageRecord::new(
                IdentityPath::new("/x".to_string()).unwrap(),
                PackageName::new(name.to_string()).unwrap(),
                Version::new(version.to_string()).unwrap(),
                vec![],
            )
        };
        let left = make("a@b", "c");
        let right = make("a", "b@c");

        assert_eq!(left.name_version(), right.name_version());
        assert_ne!(
            GroupKey::NameVersion.key_for(&left),
            GroupKey::NameVersion.key_for(&right)
        );
    }

    #[test]
    fn test_group_key_from_str() {
        assert_eq!(GroupKey::from_str("name").unwrap(), GroupKey::Name);
        assert_eq!(GroupKey::from_str("Package").unwrap(), GroupKey::Name);
        assert_eq!(GroupKey::from_str("VERSION").unwrap(), GroupKey::NameVersion);
        assert_eq!(GroupKey::from_str("path").unwrap(), GroupKey::Path);
    }

    #[test]
    fn test_group_key_from_str_invalid() {
        let err = GroupKey::from_str("license").unwrap_err();
        assert!(err.contains("Invalid grouping"));
        assert!(err.contains("license"));
    }

    #[test]
    fn test_group_key_serde_names() {
        assert_eq!(serde_json::to_string(&GroupKey::NameVersion).unwrap(), "\"version\"");
        let key: GroupKey = serde_json::from_str("\"path\"").unwrap();
        assert_eq!(key, GroupKey::Path);
    }

    #[test]
    fn test_flags() {
        let single = group(&["1.0.0"], 1, 1);
        assert!(!single.is_duplicated());
        assert!(!single.has_version_skew());

        let skewed = group(&["1.0.0", "2.0.0"], 1, 1);
        assert!(skewed.has_version_skew());

        let duplicated = group(&["1.0.0"], 1, 3);
        assert!(duplicated.is_duplicated());
    }

    #[test]
    fn test_label() {
        assert_eq!(group(&["1.0.0"], 1, 1).label(), "debug\n1.0.0");
        assert_eq!(group(&["1.0.0"], 1, 2).label(), "debug\n1.0.0\n2 copies");
    }

    #[test]
    fn test_group_node_serializes_contract_fields() {
        let json = serde_json::to_value(group(&["1.0.0"], 1, 2)).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["nameCopies"], 1);
        assert_eq!(json["versionCopies"], 2);
        assert!(json["deps"].as_array().unwrap().is_empty());
    }
}
