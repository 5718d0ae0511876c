//! Reading the template and variables files.
//!
//! This module owns the file-backed half of the pipeline: reading the raw
//! template bytes and turning a YAML or JSON variables file into a
//! [`VariableContext`], including the "no variables" defaults.

use std::fs;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::variables::VariableContext;

/// Path that stands for "no variables file".
///
/// Loading it yields an empty context without touching the filesystem.
#[cfg(not(windows))]
pub const NULL_DEVICE: &str = "/dev/null";
#[cfg(windows)]
pub const NULL_DEVICE: &str = "NUL";

fn read_file(file_description: &str, path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::file_access(file_description, path, e))
}

#[must_use]
pub fn is_null_device(path: &str) -> bool {
    path == NULL_DEVICE
}

/// Reads the raw bytes of a template file.
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the file cannot be opened or read.
pub fn read_template(template_path: &str) -> Result<Vec<u8>> {
    let template = read_file("template", template_path)?;
    debug!(
        "Read {} bytes of template from `{}`",
        template.len(),
        template_path
    );

    Ok(template)
}

/// Decodes YAML or JSON bytes into a variable context.
///
/// JSON is accepted because it is valid YAML. Empty input, comment-only input
/// and an explicit `null` document all decode to an empty context.
///
/// # Arguments
///
/// * `bytes` - The raw document
/// * `source` - Name of the document used in error messages
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not valid YAML/JSON
/// - The input holds more than one YAML document
/// - The top-level value is not a mapping
pub fn decode_variables(bytes: &[u8], source: &str) -> Result<VariableContext> {
    let mut documents = serde_yaml::Deserializer::from_slice(bytes);

    let Some(document) = documents.next() else {
        return Ok(VariableContext::new());
    };

    let value = serde_yaml::Value::deserialize(document)
        .map_err(|e| Error::yaml_error(source, e))?;

    if documents.next().is_some() {
        return Err(Error::MultipleDocuments {
            path: source.to_string(),
        });
    }

    VariableContext::from_yaml(value, source)
}

/// Loads the variables file at `variables_path`.
///
/// # Returns
///
/// The decoded variables, or an empty context for [`NULL_DEVICE`].
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The contents cannot be decoded (see [`decode_variables`])
///
/// # Examples
///
/// ```
/// use hbrender_core::file_handling::{load_variables, NULL_DEVICE};
///
/// let variables = load_variables(NULL_DEVICE)?;
/// assert!(variables.is_empty());
/// # Ok::<(), hbrender_core::error::Error>(())
/// ```
pub fn load_variables(variables_path: &str) -> Result<VariableContext> {
    if is_null_device(variables_path) {
        debug!("No variables file given, using an empty context");
        return Ok(VariableContext::new());
    }

    let bytes = read_file("variables", variables_path)?;
    let variables = decode_variables(&bytes, variables_path)?;
    debug!(
        "Loaded {} top-level variables from `{}`",
        variables.len(),
        variables_path
    );

    Ok(variables)
}
