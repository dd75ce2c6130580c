//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Browse SVG and image assets grouped by folder
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: gallery.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "gallery.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan folders or files and list assets grouped by directory
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },

    /// Print the intrinsic dimensions of SVG files
    #[command(visible_alias = "d")]
    Dims {
        #[command(flatten)]
        args: DimsArgs,
    },
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Folders and image files to show. If omitted, scans the current directory.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Include every recognised image format, not only SVG
    #[arg(short, long)]
    pub all: bool,

    /// Additional directory name to skip (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Directory-walk worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Dims command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DimsArgs {
    /// SVG files to inspect. Use `-` to read paths from stdin.
    #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by all commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    /// Output options of the selected command.
    pub const fn output(&self) -> &OutputArgs {
        match self {
            Self::Scan { args } => &args.output,
            Self::Dims { args } => &args.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::parse_from([
            "svg-gallery", "scan", "icons", "-a", "-x", "dist", "-x", "build", "-j", "2", "--json",
        ]);
        let Commands::Scan { args } = &cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.paths, vec![PathBuf::from("icons")]);
        assert!(args.all);
        assert_eq!(args.exclude, vec!["dist", "build"]);
        assert_eq!(args.threads, Some(2));
        assert!(cli.command.output().json);
        assert_eq!(cli.config, PathBuf::from("gallery.toml"));
    }

    #[test]
    fn test_parse_scan_defaults() {
        let cli = Cli::parse_from(["svg-gallery", "scan"]);
        let Commands::Scan { args } = &cli.command else {
            panic!("expected scan");
        };
        assert!(args.paths.is_empty());
        assert!(!args.all);
        assert!(args.threads.is_none());
        assert!(!args.output.json);
    }

    #[test]
    fn test_parse_dims_requires_files() {
        assert!(Cli::try_parse_from(["svg-gallery", "dims"]).is_err());

        let cli = Cli::parse_from(["svg-gallery", "-C", "x.toml", "dims", "a.svg", "-p", "-V"]);
        let Commands::Dims { args } = &cli.command else {
            panic!("expected dims");
        };
        assert_eq!(args.files, vec![PathBuf::from("a.svg")]);
        assert!(args.output.pretty);
        assert!(args.output.verbose);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
