//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};

/// Convert HTML markup into a vecty Go component.
#[derive(Debug, Parser)]
#[command(name = "html2vecty")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Markup file to convert (`-` or omitted reads standard input)
    pub input: Option<Utf8PathBuf>,

    /// Output file (defaults to `<input>_gen.go`, or `generated.go` for stdin)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Go package name of the generated file
    #[arg(short, long, default_value = "main")]
    pub package: String,

    /// Component type name (defaults to the input file name in PascalCase)
    #[arg(short, long)]
    pub component: Option<String>,

    /// Print the generated file to stdout instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the input path, or `None` when reading standard input.
    pub fn input_path(&self) -> Option<&Utf8PathBuf> {
        self.input.as_ref().filter(|path| path.as_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["html2vecty"]);
        assert!(args.input_path().is_none());
        assert!(args.output.is_none());
        assert_eq!(args.package, "main");
        assert!(args.component.is_none());
        assert!(!args.stdout);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = Args::parse_from(["html2vecty", "-"]);
        assert!(args.input.is_some());
        assert!(args.input_path().is_none());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from([
            "html2vecty",
            "-o",
            "out.go",
            "-p",
            "views",
            "-c",
            "Card",
            "card.html",
        ]);
        assert_eq!(args.input_path().map(|p| p.as_str()), Some("card.html"));
        assert_eq!(args.output.as_deref().map(|p| p.as_str()), Some("out.go"));
        assert_eq!(args.package, "views");
        assert_eq!(args.component.as_deref(), Some("Card"));
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::parse_from(["html2vecty", "-vv", "page.html"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Args::try_parse_from(["html2vecty", "--stdout", "-o", "x.go"]);
        assert!(result.is_err());
    }
}
