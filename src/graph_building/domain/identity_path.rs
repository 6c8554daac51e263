use super::package::InvalidField;
use serde::{Deserialize, Serialize};

/// Maximum length for identity paths (security limit)
const MAX_PATH_LENGTH: usize = 4096;

/// NewType wrapper for an absolute identity path
///
/// Paths are opaque identity strings: two records are the same install only
/// when their path strings are byte-equal. Nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityPath(String);

impl IdentityPath {
    pub fn new(path: String) -> Result<Self, InvalidField> {
        if path.is_empty() {
            return Err(InvalidField::new("path cannot be empty"));
        }

        if path.len() > MAX_PATH_LENGTH {
            return Err(InvalidField::new(format!(
                "path is too long ({} bytes). Maximum allowed: {} bytes",
                path.len(),
                MAX_PATH_LENGTH
            )));
        }

        if !path.starts_with('/') {
            return Err(InvalidField::new(format!(
                "path '{}' is not absolute",
                path
            )));
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a dependency reference against this path.
    ///
    /// Resolution is lexical and URL-like: the reference is joined onto the
    /// directory part of this path (`./b` against `/a` is `/b`, against `/a/`
    /// it is `/a/b`), `.` and `..` segments are folded, and an absolute
    /// reference replaces the base entirely. `..` never climbs above `/`.
    pub fn resolve(&self, reference: &str) -> IdentityPath {
        let mut segments: Vec<&str> = Vec::new();

        if !reference.starts_with('/') {
            let mut base: Vec<&str> = self.0.split('/').collect();
            // the last segment names the entry itself, not its directory
            base.pop();
            push_segments(&mut segments, base);
        }
        push_segments(&mut segments, reference.split('/'));

        IdentityPath(format!("/{}", segments.join("/")))
    }
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, parts: impl IntoIterator<Item = &'a str>) {
    for part in parts {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
}

impl std::fmt::Display for IdentityPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
