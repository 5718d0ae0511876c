//! Render configuration resolved once at startup.
//!
//! This module validates the template and variables paths and expands shell
//! shorthand like `~` in them.

use crate::engine::EngineOptions;
use crate::error::{Error, Result};
use crate::file_handling::NULL_DEVICE;

/// Default variables path: no variables file at all.
pub const DEFAULT_VARIABLES_PATH: &str = NULL_DEVICE;

pub const MISSING_TEMPLATE_MESSAGE: &str = "template file must be specified";

/// Immutable inputs of a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub template_path: String,
    pub variables_path: String,
    pub options: EngineOptions,
}

impl RenderConfig {
    /// Builds a configuration from optional path arguments.
    ///
    /// A missing variables path falls back to [`DEFAULT_VARIABLES_PATH`].
    /// Shell expansions like `~` are resolved in both paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the template path is missing or
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hbrender_core::config::{RenderConfig, DEFAULT_VARIABLES_PATH};
    /// use hbrender_core::engine::EngineOptions;
    ///
    /// let config = RenderConfig::new(
    ///     &Some("site.conf.hbs".to_string()),
    ///     &None,
    ///     EngineOptions::default(),
    /// )?;
    /// assert_eq!(config.variables_path, DEFAULT_VARIABLES_PATH);
    ///
    /// assert!(RenderConfig::new(&None, &None, EngineOptions::default()).is_err());
    /// # Ok::<(), hbrender_core::error::Error>(())
    /// ```
    pub fn new(
        template_path_arg: &Option<String>,
        variables_path_arg: &Option<String>,
        options: EngineOptions,
    ) -> Result<Self> {
        let template_path = match template_path_arg {
            Some(template_path) if !template_path.is_empty() => expand_path(template_path),
            _ => return Err(Error::configuration(MISSING_TEMPLATE_MESSAGE)),
        };

        Ok(Self {
            template_path,
            variables_path: get_variables_path(variables_path_arg),
            options,
        })
    }
}

/// Resolves the variables file path, defaulting to [`DEFAULT_VARIABLES_PATH`].
pub fn get_variables_path(variables_path_arg: &Option<String>) -> String {
    match variables_path_arg {
        Some(variables_path) if !variables_path.is_empty() => expand_path(variables_path),
        _ => DEFAULT_VARIABLES_PATH.to_string(),
    }
}

fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
