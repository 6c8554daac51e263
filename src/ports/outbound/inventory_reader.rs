use crate::graph_building::domain::RawDescriptor;
use crate::graph_building::services::InventoryParser;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Where the package inventory is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    Stdin,
    File(PathBuf),
}

impl InventorySource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InventorySource::Stdin,
            Some(path) => InventorySource::File(PathBuf::from(path)),
        }
    }

    /// Path used in messages; `<stdin>` for standard input
    pub fn display_path(&self) -> &Path {
        match self {
            InventorySource::Stdin => Path::new("<stdin>"),
            InventorySource::File(path) => path,
        }
    }
}

/// InventoryReader port for acquiring the raw package inventory
///
/// This port abstracts how the inventory document is obtained
/// (file, stdin, another process). Parsing is shared by all implementations.
pub trait InventoryReader {
    /// Reads the raw inventory document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory file does not exist or is not a regular file
    /// - The content cannot be read or exceeds the size limit
    fn read_inventory(&self, source: &InventorySource) -> Result<String>;

    /// Reads and parses the inventory into raw descriptors
    fn read_and_parse_inventory(&self, source: &InventorySource) -> Result<Vec<RawDescriptor>> {
        let content = self.read_inventory(source)?;
        Ok(InventoryParser::parse(&content, source.display_path())?)
    }
}
