use clap::Parser;

use package_graph::application::dto::OutputFormat;
use package_graph::graph_building::domain::GroupKey;

/// Build a grouped dependency graph from a package inventory
#[derive(Parser, Debug)]
#[command(name = "package-graph")]
#[command(version)]
#[command(
    about = "Build a grouped dependency graph from a package inventory",
    long_about = None
)]
pub struct Args {
    /// Inventory JSON file ("-" or omitted reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Grouping key: name, version or path [default: name]
    #[arg(short, long, value_name = "KEY")]
    pub group_by: Option<GroupKey>,

    /// Output format: json or text [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to package-graph.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Exit with code 1 when any dependency reference is dangling
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("package-graph").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert!(args.input.is_none());
        assert!(args.group_by.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "-i",
            "packages.json",
            "-g",
            "path",
            "-f",
            "text",
            "-o",
            "graph.txt",
            "-c",
            "custom.yml",
            "--strict",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some("packages.json"));
        assert_eq!(args.group_by, Some(GroupKey::Path));
        assert_eq!(args.format, Some(OutputFormat::Text));
        assert_eq!(args.output.as_deref(), Some("graph.txt"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
        assert!(args.strict);
    }

    #[test]
    fn test_long_group_by_aliases() {
        let args = parse(&["--group-by", "name-version"]).unwrap();
        assert_eq!(args.group_by, Some(GroupKey::NameVersion));
    }

    #[test]
    fn test_invalid_group_by_rejected() {
        let err = parse(&["--group-by", "license"]).unwrap_err();
        assert!(err.to_string().contains("Invalid grouping"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = parse(&["--format", "markdown"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }
}
