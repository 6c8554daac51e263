use crate::graph_building::domain::RawDescriptor;
use crate::shared::error::GraphError;
use crate::shared::GraphResult;
use serde_json::Value;
use std::path::Path;

/// InventoryParser service turning an inventory document into raw descriptors
///
/// Accepts either a top-level JSON array of package objects or an object
/// with a `packages` array. Field shapes are checked per element so that a
/// wrongly typed field is reported with the index of its record.
pub struct InventoryParser;

impl InventoryParser {
    /// Parses the inventory document
    ///
    /// # Arguments
    /// * `content` - Raw JSON text
    /// * `source` - Where the content came from, for error messages
    pub fn parse(content: &str, source: &Path) -> GraphResult<Vec<RawDescriptor>> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| GraphError::InventoryParseError {
                path: source.to_path_buf(),
                details: e.to_string(),
            })?;

        let packages = match &document {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("packages") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(GraphError::InventoryParseError {
                        path: source.to_path_buf(),
                        details: "expecting packages property".to_string(),
                    })
                }
            },
            _ => {
                return Err(GraphError::InventoryParseError {
                    path: source.to_path_buf(),
                    details: "expecting an array of packages".to_string(),
                })
            }
        };

        packages
            .iter()
            .enumerate()
            .map(|(index, item)| Self::parse_descriptor(index, item))
            .collect()
    }

    /// Converts one JSON element, leaving absent fields as `None`
    pub fn parse_descriptor(index: usize, item: &Value) -> GraphResult<RawDescriptor> {
        let Value::Object(fields) = item else {
            return Err(GraphError::Validation {
                index,
                reason: "package descriptor must be an object".to_string(),
            });
        };

        let string_field = |field: &str| -> GraphResult<Option<String>> {
            match fields.get(field) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(_) => Err(GraphError::Validation {
                    index,
                    reason: format!("field '{}' must be a string", field),
                }),
            }
        };

        let dependencies = match fields.get("dependencies") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .map(|dep| match dep {
                        Value::String(s) => Ok(s.clone()),
                        _ => Err(GraphError::Validation {
                            index,
                            reason: "field 'dependencies' must contain only strings".to_string(),
                        }),
                    })
                    .collect::<GraphResult<Vec<_>>>()?,
            ),
            Some(_) => {
                return Err(GraphError::Validation {
                    index,
                    reason: "field 'dependencies' must be an array".to_string(),
                })
            }
        };

        Ok(RawDescriptor {
            path: string_field("path")?,
            name: string_field("name")?,
            version: string_field("version")?,
            dependencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> &'static Path {
        Path::new("inventory.json")
    }

    #[test]
    fn test_parse_top_level_array() {
        let content = r#"[
            {"path": "/a", "name": "X", "version": "1", "dependencies": ["./b"]},
            {"path": "/b", "name": "Y", "version": "1", "dependencies": []}
        ]"#;

        let descriptors = InventoryParser::parse(content, source()).unwrap();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0], RawDescriptor::new("/a", "X", "1", ["./b"]));
    }

    #[test]
    fn test_parse_packages_property() {
        let content = r#"{"id": "abc", "packages": [
            {"path": "/a", "name": "X", "version": "1", "dependencies": [], "main": "index.js"}
        ]}"#;

        let descriptors = InventoryParser::parse(content, source()).unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name.as_deref(), Some("X"));
    }

    #[test]
    fn test_parse_object_without_packages() {
        let err = InventoryParser::parse(r#"{"id": "abc"}"#, source()).unwrap_err();
        assert!(err.to_string().contains("expecting packages property"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = InventoryParser::parse("not json [", source()).unwrap_err();
        assert!(matches!(err, GraphError::InventoryParseError { .. }));
        assert!(err.to_string().contains("inventory.json"));
    }

    #[test]
    fn test_parse_scalar_document() {
        assert!(InventoryParser::parse("42", source()).is_err());
    }

    #[test]
    fn test_parse_missing_fields_become_none() {
        let descriptors =
            InventoryParser::parse(r#"[{"path": "/a", "name": null}]"#, source()).unwrap();
        assert_eq!(descriptors[0].path.as_deref(), Some("/a"));
        assert!(descriptors[0].name.is_none());
        assert!(descriptors[0].version.is_none());
        assert!(descriptors[0].dependencies.is_none());
    }

    #[test]
    fn test_parse_wrong_field_type_reports_index() {
        let content = r#"[
            {"path": "/a", "name": "X", "version": "1", "dependencies": []},
            {"path": "/b", "name": "Y", "version": 2, "dependencies": []}
        ]"#;

        let err = InventoryParser::parse(content, source()).unwrap_err();
        assert_eq!(err.record_index(), Some(1));
        assert!(err.to_string().contains("'version' must be a string"));
    }

    #[test]
    fn test_parse_non_string_dependency() {
        let content = r#"[{"path": "/a", "name": "X", "version": "1", "dependencies": [1]}]"#;
        let err = InventoryParser::parse(content, source()).unwrap_err();
        assert!(err.to_string().contains("only strings"));
    }

    #[test]
    fn test_parse_non_object_element() {
        let err = InventoryParser::parse(r#"["/a"]"#, source()).unwrap_err();
        assert_eq!(err.record_index(), Some(0));
        assert!(err.to_string().contains("must be an object"));
    }
}
