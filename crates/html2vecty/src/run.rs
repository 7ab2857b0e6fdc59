//! One conversion run: read, convert, render, write.

use crate::config::{Config, InputSource, OutputTarget};
use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};
use vecty_codegen::{convert, generate_component};

/// Converts the configured input and writes the component file.
///
/// Nothing is written unless the conversion succeeds.
pub fn run(config: &Config) -> Result<(), CliError> {
    tracing::info!(
        input = config.input.name(),
        output = config.output.name(),
        "gen"
    );

    let markup = read_input(&config.input)?;
    let conversion = match convert(&markup) {
        Ok(conversion) => conversion,
        Err(error) => return Err(CliError::convert(config.input.name(), markup, error)),
    };

    let file = generate_component(&conversion, &config.options);
    tracing::debug!(
        component = %config.options.component,
        handlers = conversion.state.handlers().len(),
        bytes = file.len(),
        "rendered component"
    );

    write_output(&config.output, &file)
}

fn read_input(input: &InputSource) -> Result<String, CliError> {
    let result = match input {
        InputSource::Stdin => {
            let mut markup = String::new();
            io::stdin().read_to_string(&mut markup).map(|_| markup)
        }
        InputSource::File(path) => fs::read_to_string(path),
    };
    result.map_err(|source| CliError::Read {
        path: input.name().to_string(),
        source,
    })
}

fn write_output(output: &OutputTarget, file: &str) -> Result<(), CliError> {
    let result = match output {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(file.as_bytes())
                .and_then(|()| stdout.flush())
        }
        OutputTarget::File(path) => fs::write(path, file),
    };
    result.map_err(|source| CliError::Write {
        path: output.name().to_string(),
        source,
    })
}
