//! hbrender CLI Library
//!
//! This crate provides the command-line interface for hbrender. It parses the
//! `--template` and `--vars` flags, drives the render pipeline from
//! `hbrender-core`, and writes the result to standard output.
//!
//! # Examples
//!
//! The CLI binary (`hbrender`) can be used in several ways:
//!
//! ```bash
//! # Render with variables from a YAML file
//! hbrender --template nginx.conf.hbs --vars production.yml > nginx.conf
//!
//! # JSON works too
//! hbrender -t motd.hbs -v motd.json
//!
//! # No variables at all
//! hbrender --template static.hbs
//!
//! # Fail on undefined variables, and do not HTML-escape output
//! hbrender --template app.env.hbs --vars app.yml --strict --no-escape
//! ```

use std::io::Write;

use hbrender_core::engine::HandlebarsEngine;
use hbrender_core::error::{Error, Result};
use hbrender_core::render::render_files;
use log::debug;

use crate::cli_args::Args;

pub mod cli_args;

/// Validates `args` and renders the template into memory.
///
/// Nothing is written anywhere, so a failure leaves standard output untouched.
///
/// # Errors
///
/// Returns an error if configuration, reading, decoding, parsing or executing
/// fails.
pub fn execute(args: &Args) -> Result<Vec<u8>> {
    let config = args.to_config()?;
    debug!("Template path: `{}`", config.template_path);
    debug!("Variables path: `{}`", config.variables_path);

    let mut engine = HandlebarsEngine::new(config.options);
    render_files(&mut engine, &config)
}

/// Formats `error` as the diagnostic printed on standard error.
///
/// Engine messages are kept verbatim apart from trailing whitespace, so a
/// multi-line parse excerpt does not end in a blank line.
#[must_use]
pub fn fatal_message(error: &Error) -> String {
    format!("fatal: {}", error.to_string().trim_end())
}

/// Writes the rendered bytes verbatim and flushes.
///
/// # Errors
///
/// Returns [`Error::Stdio`] if the writer fails.
pub fn write_output<W: Write>(out: &mut W, rendered: &[u8]) -> Result<()> {
    out.write_all(rendered)
        .and_then(|()| out.flush())
        .map_err(Error::Stdio)
}
