use crate::graph_building::domain::{
    IdentityPath, InvalidField, PackageName, PackageRecord, RawDescriptor, Version,
};
use crate::shared::error::GraphError;
use crate::shared::GraphResult;

/// PackageNormalizer service validating raw descriptors
///
/// Turns one raw descriptor into a [`PackageRecord`], resolving each relative
/// dependency reference against the descriptor's own path.
pub struct PackageNormalizer;

impl PackageNormalizer {
    /// Normalizes the descriptor found at `index` in the input batch
    ///
    /// # Errors
    /// Returns `GraphError::Validation` carrying `index` if a field is
    /// missing or fails validation.
    pub fn normalize(index: usize, raw: &RawDescriptor) -> GraphResult<PackageRecord> {
        let invalid = |e: InvalidField| GraphError::Validation {
            index,
            reason: e.to_string(),
        };

        let path = Self::required(index, "path", raw.path.as_ref())?;
        let name = Self::required(index, "name", raw.name.as_ref())?;
        let version = Self::required(index, "version", raw.version.as_ref())?;
        let dependencies = Self::required(index, "dependencies", raw.dependencies.as_ref())?;

        let path = IdentityPath::new(path.clone()).map_err(invalid)?;
        let name = PackageName::new(name.clone()).map_err(invalid)?;
        let version = Version::new(version.clone()).map_err(invalid)?;

        let dependency_paths = dependencies.iter().map(|dep| path.resolve(dep)).collect();

        Ok(PackageRecord::new(path, name, version, dependency_paths))
    }

    /// Normalizes a whole batch, stopping at the first invalid descriptor
    pub fn normalize_all(descriptors: &[RawDescriptor]) -> GraphResult<Vec<PackageRecord>> {
        descriptors
            .iter()
            .enumerate()
            .map(|(index, raw)| Self::normalize(index, raw))
            .collect()
    }

    fn required<'a, T>(index: usize, field: &str, value: Option<&'a T>) -> GraphResult<&'a T> {
        value.ok_or_else(|| GraphError::Validation {
            index,
            reason: format!("missing required field '{}'", field),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_dependencies_in_order() {
        let raw = RawDescriptor::new(
            "/app/node_modules/express",
            "express",
            "4.16.0",
            ["./debug", "./express/node_modules/qs", "/abs/ms"],
        );

        let record = PackageNormalizer::normalize(0, &raw).unwrap();

        assert_eq!(record.name(), "express");
        assert_eq!(record.version(), "4.16.0");
        let deps: Vec<&str> = record.dependency_paths().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            deps,
            vec![
                "/app/node_modules/debug",
                "/app/node_modules/express/node_modules/qs",
                "/abs/ms"
            ]
        );
    }

    #[test]
    fn test_normalize_missing_field_reports_index() {
        let raw = RawDescriptor {
            path: Some("/a".to_string()),
            name: Some("X".to_string()),
            version: None,
            dependencies: Some(vec![]),
        };

        let err = PackageNormalizer::normalize(7, &raw).unwrap_err();
        match err {
            GraphError::Validation { index, reason } => {
                assert_eq!(index, 7);
                assert!(reason.contains("'version'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_missing_dependencies() {
        let raw = RawDescriptor {
            dependencies: None,
            ..RawDescriptor::new("/a", "X", "1", Vec::<String>::new())
        };

        let err = PackageNormalizer::normalize(0, &raw).unwrap_err();
        assert!(err.to_string().contains("'dependencies'"));
    }

    #[test]
    fn test_normalize_relative_path_rejected() {
        let raw = RawDescriptor::new("a", "X", "1", Vec::<String>::new());
        let err = PackageNormalizer::normalize(2, &raw).unwrap_err();
        assert_eq!(err.record_index(), Some(2));
        assert!(err.to_string().contains("not absolute"));
    }

    #[test]
    fn test_normalize_empty_name_rejected() {
        let raw = RawDescriptor::new("/a", "", "1", Vec::<String>::new());
        assert!(PackageNormalizer::normalize(0, &raw).is_err());
    }

    #[test]
    fn test_normalize_all_stops_at_first_error() {
        let descriptors = vec![
            RawDescriptor::new("/a", "X", "1", Vec::<String>::new()),
            RawDescriptor::default(),
            RawDescriptor::new("b", "Y", "1", Vec::<String>::new()),
        ];

        let err = PackageNormalizer::normalize_all(&descriptors).unwrap_err();
        assert_eq!(err.record_index(), Some(1));
        assert!(err.to_string().contains("'path'"));
    }

    #[test]
    fn test_normalize_all_empty() {
        assert!(PackageNormalizer::normalize_all(&[]).unwrap().is_empty());
    }
}
