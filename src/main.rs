mod cli;

use clap::Parser;
use cli::Args;
use package_graph::adapters::outbound::console::StderrProgressReporter;
use package_graph::adapters::outbound::filesystem::FileSystemReader;
use package_graph::application::dto::{GraphRequest, OutputFormat};
use package_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use package_graph::application::use_cases::BuildPackageGraphUseCase;
use package_graph::config::{self, ConfigFile};
use package_graph::graph_building::domain::GroupKey;
use package_graph::ports::outbound::InventorySource;
use package_graph::shared::error::{ExitCode, GraphError};
use package_graph::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and must exit cleanly
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file under the CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    group_by: GroupKey,
    format: OutputFormat,
    strict: bool,
}

impl Settings {
    /// CLI flags win over the config file, which wins over the defaults
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        Self {
            group_by: args
                .group_by
                .or_else(|| config.and_then(ConfigFile::group_key))
                .unwrap_or(GroupKey::Name),
            format: args
                .format
                .or_else(|| config.and_then(ConfigFile::output_format))
                .unwrap_or(OutputFormat::Json),
            strict: args.strict || config.and_then(|c| c.strict).unwrap_or(false),
        }
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => Ok(Some(config::load_config_from_path(Path::new(path))?)),
        None => config::discover_config(Path::new(".")),
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let inventory_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildPackageGraphUseCase::new(inventory_reader, progress_reporter);

    // Create request
    let request = GraphRequest::new(
        InventorySource::from_arg(args.input.as_deref()),
        settings.group_by,
        settings.strict,
    );

    // Execute use case
    let response = use_case.execute(request)?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.view)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.as_deref()));
    presenter.present(&formatted_output)?;

    if response.has_strict_violations {
        let error = GraphError::DanglingDependencies {
            count: response.view.warnings().len(),
        };
        eprintln!("\n❌ {}", error);
        return Ok(ExitCode::DanglingDependenciesDetected);
    }

    Ok(ExitCode::Success)
}
