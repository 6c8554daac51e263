use crate::application::dto::{GraphRequest, GraphResponse};
use crate::shared::Result;

/// PackageGraphPort - Inbound port for the graph building use case
///
/// This port is the application's public API for front ends (CLI, server, ...).
pub trait PackageGraphPort {
    /// Builds the grouped package graph described by the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory cannot be read or parsed
    /// - A descriptor fails validation
    /// - Two descriptors share an identity path
    fn build_graph(&self, request: GraphRequest) -> Result<GraphResponse>;
}
