mod dependency_resolver;
mod group_aggregator;
mod inventory_parser;
mod package_graph;
mod package_normalizer;

pub use dependency_resolver::DependencyResolver;
pub use group_aggregator::GroupAggregator;
pub use inventory_parser::InventoryParser;
pub use package_graph::{build_package_graph, PackageGraph};
pub use package_normalizer::PackageNormalizer;
