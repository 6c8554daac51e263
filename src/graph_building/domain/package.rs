use super::IdentityPath;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// A single field of a descriptor failed validation.
///
/// Carries only the reason; the normalizer attaches the record index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidField(String);

impl InvalidField {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Raw package descriptor as delivered by the inventory source
///
/// Every field is optional so that a missing field can be reported
/// together with the index of the offending record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDescriptor {
    pub path: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Option<Vec<String>>,
}

impl RawDescriptor {
    /// Creates a fully populated descriptor
    pub fn new<I, S>(path: &str, name: &str, version: &str, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: Some(path.to_string()),
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            dependencies: Some(dependencies.into_iter().map(Into::into).collect()),
        }
    }
}

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self, InvalidField> {
        if name.is_empty() {
            return Err(InvalidField::new("package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(InvalidField::new(format!(
                "package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version
///
/// Versions are compared as plain strings; no semantic ordering is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self, InvalidField> {
        if version.len() > MAX_VERSION_LENGTH {
            return Err(InvalidField::new(format!(
                "package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            )));
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized package record
///
/// Dependency references have already been resolved into absolute
/// identity paths, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    path: IdentityPath,
    name: PackageName,
    version: Version,
    dependency_paths: Vec<IdentityPath>,
}

impl PackageRecord {
    pub fn new(
        path: IdentityPath,
        name: PackageName,
        version: Version,
        dependency_paths: Vec<IdentityPath>,
    ) -> Self {
        Self {
            path,
            name,
            version,
            dependency_paths,
        }
    }

    pub fn path(&self) -> &IdentityPath {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn dependency_paths(&self) -> &[IdentityPath] {
        &self.dependency_paths
    }

    /// `name@version`, the key for exact-copy counting
    pub fn name_version(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl std::fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Package{{{} @ {}, path: {}}}",
            self.name, self.version, self.path
        )
    }
}
