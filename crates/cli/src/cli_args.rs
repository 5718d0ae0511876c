//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and turns it into
//! a validated [`RenderConfig`] using the `clap` crate.

use clap::Parser;
use hbrender_core::config::RenderConfig;
use hbrender_core::engine::EngineOptions;
use hbrender_core::error::Result;

/// Command-line arguments for the hbrender CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use hbrender_cli::cli_args::Args;
///
/// let args = Args::parse_from(["hbrender", "--template", "app.conf.hbs"]);
/// assert_eq!(args.template.as_deref(), Some("app.conf.hbs"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "hbrender",
    version,
    about = "Render a Handlebars template with variables from a JSON or YAML file"
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Handlebars template file.
    #[arg(long, short = 't', value_name = "PATH")]
    pub template: Option<String>,

    /// JSON or YAML file with variables.
    ///
    /// If not provided, defaults to `/dev/null`, which renders with no variables.
    #[arg(long, short = 'v', value_name = "PATH")]
    pub vars: Option<String>,

    /// Fail when the template references a variable that is not defined,
    /// instead of rendering it as an empty string.
    #[arg(long, action)]
    pub strict: bool,

    /// Do not HTML-escape the output of `{{expression}}`.
    #[arg(long, action)]
    pub no_escape: bool,
}

impl Args {
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            strict: self.strict,
            escape_html: !self.no_escape,
        }
    }

    /// Validates the arguments into a render configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no template was given.
    pub fn to_config(&self) -> Result<RenderConfig> {
        RenderConfig::new(&self.template, &self.vars, self.engine_options())
    }
}
