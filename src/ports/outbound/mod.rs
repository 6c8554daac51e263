/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the outside world: inventory sources, formatters, output
/// destinations and the console.
pub mod graph_formatter;
pub mod inventory_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use graph_formatter::GraphFormatter;
pub use inventory_reader::{InventoryReader, InventorySource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
