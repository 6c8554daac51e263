use serde::Serialize;

/// A dependency reference that matched no identity path in the batch
///
/// Non-fatal: the build succeeds and the edge is simply omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingDependencyWarning {
    /// Index of the declaring record in the input batch
    pub record_index: usize,
    /// The resolved path that could not be found
    pub missing_path: String,
}

impl DanglingDependencyWarning {
    pub fn new(record_index: usize, missing_path: impl Into<String>) -> Self {
        Self {
            record_index,
            missing_path: missing_path.into(),
        }
    }
}

impl std::fmt::Display for DanglingDependencyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "package at index {} depends on unknown path '{}'",
            self.record_index, self.missing_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_serializes_camel_case() {
        let warning = DanglingDependencyWarning::new(0, "/missing");
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["recordIndex"], 0);
        assert_eq!(json["missingPath"], "/missing");
    }

    #[test]
    fn test_warning_display() {
        let warning = DanglingDependencyWarning::new(3, "/x");
        assert_eq!(
            warning.to_string(),
            "package at index 3 depends on unknown path '/x'"
        );
    }
}
