use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Destination of the formatted graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Maps the `--output` argument; no argument or `-` means stdout
    pub fn from_output(output: Option<&str>) -> Self {
        match output {
            None | Some("-") => PresenterType::Stdout,
            Some(path) => PresenterType::File(PathBuf::from(path)),
        }
    }
}

/// Factory for creating output presenters
///
/// Selects the infrastructure adapter for the requested destination.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the specified destination
    ///
    /// # Examples
    /// ```
    /// use package_graph::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::from_output(None));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
