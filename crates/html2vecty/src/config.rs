//! Run configuration resolved from the command line.

use crate::cli::Args;
use camino::{Utf8Path, Utf8PathBuf};
use vecty_codegen::{component_name_from_path, ComponentOptions};

/// Output file used when reading standard input.
const STDIN_OUTPUT: &str = "generated.go";

/// Suffix appended to the input path, minus its extension.
const OUTPUT_SUFFIX: &str = "_gen.go";

/// Where the markup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(Utf8PathBuf),
}

impl InputSource {
    /// Returns a display name for logs and diagnostics.
    pub fn name(&self) -> &str {
        match self {
            InputSource::Stdin => "<stdin>",
            InputSource::File(path) => path.as_str(),
        }
    }
}

/// Where the generated file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(Utf8PathBuf),
}

impl OutputTarget {
    /// Returns a display name for logs and diagnostics.
    pub fn name(&self) -> &str {
        match self {
            OutputTarget::Stdout => "<stdout>",
            OutputTarget::File(path) => path.as_str(),
        }
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub output: OutputTarget,
    pub options: ComponentOptions,
}

impl Config {
    /// Resolves defaults for everything the arguments leave out.
    pub fn from_args(args: &Args) -> Self {
        let input = match args.input_path() {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        };

        let output = if args.stdout {
            OutputTarget::Stdout
        } else {
            let path = match (&args.output, &input) {
                (Some(path), _) => path.clone(),
                (None, InputSource::File(path)) => default_output_path(path),
                (None, InputSource::Stdin) => Utf8PathBuf::from(STDIN_OUTPUT),
            };
            OutputTarget::File(path)
        };

        let component = match (&args.component, &input) {
            (Some(name), _) => name.clone(),
            (None, InputSource::File(path)) => component_name_from_path(path),
            (None, InputSource::Stdin) => ComponentOptions::default().component,
        };

        Self {
            input,
            output,
            options: ComponentOptions {
                package: args.package.clone(),
                component,
            },
        }
    }
}

/// Returns `<input without extension>_gen.go` next to the input.
fn default_output_path(input: &Utf8Path) -> Utf8PathBuf {
    let base = input.with_extension("");
    Utf8PathBuf::from(format!("{base}{OUTPUT_SUFFIX}"))
}
