pub mod graph_view;
pub mod group;
pub mod identity_path;
pub mod package;
pub mod resolved;
pub mod warning;

pub use graph_view::GraphView;
pub use group::{GroupId, GroupKey, GroupNode};
pub use identity_path::IdentityPath;
pub use package::{InvalidField, PackageName, PackageRecord, RawDescriptor, Version};
pub use resolved::{NodeIndex, ResolvedGraph, ResolvedNode};
pub use warning::DanglingDependencyWarning;
