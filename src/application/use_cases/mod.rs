/// Use cases module containing application business logic orchestration
mod build_package_graph;

pub use build_package_graph::BuildPackageGraphUseCase;
