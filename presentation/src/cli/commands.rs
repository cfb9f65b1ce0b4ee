//! CLI command definitions

use agent_tools_application::SpecSource;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for openapi-agent-tools
#[derive(Parser, Debug)]
#[command(name = "openapi-agent-tools")]
#[command(author, version, about = "Generate and validate LLM agent tools from OpenAPI specifications")]
#[command(long_about = r#"
OpenAPI Agent Tools turns every GET, POST, PATCH and DELETE operation of an
OpenAPI document into a tool definition an LLM agent can call, and repairs
existing tool files so the agent accepts them.

Configuration files are loaded from (in priority order):
1. OPENAPI_AGENT_TOOLS_* environment variables
2. --config <path>                 Explicit config file
3. ./openapi-agent-tools.toml      Project-level config
4. ~/.config/openapi-agent-tools/config.toml   Global config

Example:
  openapi-agent-tools generate --url https://petstore3.swagger.io/api/v3/openapi.json
  openapi-agent-tools generate --file api.yaml --base-url https://api.example.com -o tools.json --validate
  openapi-agent-tools validate tools.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate tools from an OpenAPI spec
    Generate(GenerateArgs),
    /// Validate and fix existing tools
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
pub struct GenerateArgs {
    /// URL to OpenAPI specification
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Path to OpenAPI specification file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Base URL for API endpoints
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output file path for generated tools (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also validate and fix tools after generation (`-v` is verbosity)
    #[arg(long)]
    pub validate: bool,
}

impl GenerateArgs {
    /// The spec source selected by `--url` or `--file`
    pub fn source(&self) -> Option<SpecSource> {
        match (&self.url, &self.file) {
            (Some(url), _) => Some(SpecSource::Url(url.clone())),
            (None, Some(file)) => Some(SpecSource::File(file.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input JSON file containing tools
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file path for fixed tools (default: <input>_fixed.<ext>)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_url() {
        let cli = Cli::try_parse_from([
            "openapi-agent-tools",
            "generate",
            "--url",
            "https://example.com/openapi.json",
            "--validate",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.validate);
        assert_eq!(
            args.source(),
            Some(SpecSource::Url("https://example.com/openapi.json".to_string()))
        );
    }

    #[test]
    fn test_generate_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["openapi-agent-tools", "generate"]).is_err());
        assert!(
            Cli::try_parse_from([
                "openapi-agent-tools",
                "generate",
                "--url",
                "http://a/spec.json",
                "--file",
                "spec.json",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_validate_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "openapi-agent-tools",
            "validate",
            "tools.json",
            "-o",
            "out.json",
            "-vv",
            "--no-config",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.input_file, PathBuf::from("tools.json"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_short_v_on_generate_is_verbosity() {
        let cli = Cli::try_parse_from([
            "openapi-agent-tools",
            "generate",
            "--file",
            "spec.yaml",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(!args.validate);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["openapi-agent-tools"]).is_err());
    }
}
