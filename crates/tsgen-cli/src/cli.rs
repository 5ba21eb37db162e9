//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tsgen_core::GeneratorConfig;

/// tsgen - TypeScript SDK generator for the Go backend.
///
/// Reads the backend's struct declarations and HTTP handlers and writes a
/// matching TypeScript declaration file and API client. Run without a
/// subcommand to generate with the settings from `tsgen.toml` or the
/// built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "tsgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

impl Cli {
    /// Returns the subcommand, `generate` with defaults when none was given.
    #[must_use]
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the declaration file and the API client.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # From the backend directory, with defaults
    /// tsgen generate
    ///
    /// # Custom locations
    /// tsgen generate --source cmd/api/main.go \
    ///     --types-out ../app/src/api/types.ts \
    ///     --client-out ../app/src/api/client.ts
    /// ```
    Generate(GenerateArgs),

    /// Print the extracted records, endpoints and diagnostics.
    ///
    /// # Examples
    ///
    /// ```bash
    /// tsgen inspect --format json
    /// ```
    Inspect {
        /// Go source file to read
        #[arg(long)]
        source: Option<PathBuf>,

        /// Configuration file (default: ./tsgen.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options of the `generate` command. Each overrides the configuration.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Go source file to read
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output path of the TypeScript declarations
    #[arg(long = "types-out")]
    pub types_out: Option<PathBuf>,

    /// Output path of the API client
    #[arg(long = "client-out")]
    pub client_out: Option<PathBuf>,

    /// Default base URL of the generated client
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Configuration file (default: ./tsgen.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Applies the given flags on top of `config`.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(path) = &self.types_out {
            config.types_output.clone_from(path);
        }
        if let Some(path) = &self.client_out {
            config.client_output.clone_from(path);
        }
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_generate() {
        let cli = Cli::try_parse_from(["tsgen"]).unwrap();
        assert_eq!(cli.format, "pretty");
        assert!(matches!(
            cli.command_or_default(),
            Commands::Generate(args) if args == GenerateArgs::default()
        ));
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "tsgen",
            "generate",
            "--source",
            "api/main.go",
            "--types-out",
            "out/types.ts",
            "--client-out",
            "out/client.ts",
            "--base-url",
            "https://api.example.com",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);

        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let mut config = GeneratorConfig::default();
        args.apply(&mut config);

        assert_eq!(config.source, PathBuf::from("api/main.go"));
        assert_eq!(config.types_output, PathBuf::from("out/types.ts"));
        assert_eq!(config.client_output, PathBuf::from("out/client.ts"));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_empty_args_keep_config() {
        let mut config = GeneratorConfig::default();
        GenerateArgs::default().apply(&mut config);
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_inspect_with_global_format() {
        let cli = Cli::try_parse_from(["tsgen", "inspect", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Some(Commands::Inspect { .. })));
    }

    #[test]
    fn test_completions_requires_shell() {
        assert!(Cli::try_parse_from(["tsgen", "completions"]).is_err());
        assert!(Cli::try_parse_from(["tsgen", "completions", "zsh"]).is_ok());
    }
}
