//! package-graph - dependency graph builder for package inventories
//!
//! This library turns a flat inventory of installed packages (install path,
//! name, version, relative dependency references) into a linked dependency
//! graph, then collapses it into a grouped view by name, by name and version,
//! or by install path. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_building`): Normalizer, resolver and group aggregator
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use package_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case =
//!     BuildPackageGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! // Execute
//! let request = GraphRequest::new(
//!     InventorySource::from_arg(Some("packages.json")),
//!     GroupKey::Name,
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response.view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The pure pipeline is also available without any I/O:
//!
//! ```
//! use package_graph::prelude::*;
//!
//! let inventory = vec![
//!     RawDescriptor::new("/a", "X", "1", ["./b"]),
//!     RawDescriptor::new("/b", "Y", "1", Vec::<String>::new()),
//! ];
//! let view = build_package_graph(&inventory, GroupKey::Name).unwrap();
//! assert_eq!(view.len(), 2);
//! assert_eq!(view.edge_count(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_building;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::use_cases::BuildPackageGraphUseCase;
    pub use crate::ports::inbound::PackageGraphPort;
    pub use crate::ports::outbound::{
        GraphFormatter, InventoryReader, InventorySource, OutputPresenter, ProgressReporter,
    };
    pub use crate::graph_building::domain::{
        DanglingDependencyWarning, GraphView, GroupId, GroupKey, GroupNode, NodeIndex,
        PackageRecord, RawDescriptor, ResolvedGraph,
    };
    pub use crate::graph_building::services::{
        build_package_graph, DependencyResolver, GroupAggregator, InventoryParser, PackageGraph,
        PackageNormalizer,
    };
    pub use crate::shared::error::{ExitCode, GraphError};
    pub use crate::shared::{GraphResult, Result};
}
