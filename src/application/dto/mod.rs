/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the graph building core isolated.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::GraphRequest;
pub use graph_response::GraphResponse;
pub use output_format::OutputFormat;
