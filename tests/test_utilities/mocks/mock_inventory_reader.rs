use package_graph::prelude::*;

/// Mock InventoryReader for testing
pub struct MockInventoryReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockInventoryReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, _source: &InventorySource) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock inventory read failure");
        }
        Ok(self.content.clone())
    }
}
