//! Rendering a template against its variables.

use log::info;

use crate::config::RenderConfig;
use crate::engine::TemplateEngine;
use crate::error::Result;
use crate::file_handling::{load_variables, read_template};
use crate::variables::VariableContext;

/// Parses `template` and executes it against `variables`.
///
/// The output is exactly what the engine produced: no trimming and no newline
/// normalization. Missing variables are left to the engine, which renders
/// them as empty strings unless it runs in strict mode.
///
/// # Errors
///
/// Returns an error if:
/// - The template bytes are not valid UTF-8
/// - The engine rejects the template syntax
/// - The engine fails while executing the template
///
/// # Examples
///
/// ```
/// use hbrender_core::engine::HandlebarsEngine;
/// use hbrender_core::render::render_template;
/// use hbrender_core::variables::{Value, VariableContext};
///
/// let variables: VariableContext = [("name".to_string(), Value::from("World"))]
///     .into_iter()
///     .collect();
/// let mut engine = HandlebarsEngine::default();
///
/// let rendered = render_template(&mut engine, b"Hello, {{name}}!", &variables)?;
/// assert_eq!(rendered, b"Hello, World!");
/// # Ok::<(), hbrender_core::error::Error>(())
/// ```
pub fn render_template<E: TemplateEngine>(
    engine: &mut E,
    template: &[u8],
    variables: &VariableContext,
) -> Result<Vec<u8>> {
    let source = std::str::from_utf8(template)?;
    let parsed = engine.parse(source)?;
    let rendered = engine.execute(&parsed, variables)?;

    Ok(rendered.into_bytes())
}

/// Runs the file-backed pipeline described by `config`.
///
/// Reads the template, then loads the variables, then renders. The first
/// failing step ends the run.
///
/// # Errors
///
/// Returns any error from [`read_template`], [`load_variables`] or
/// [`render_template`].
pub fn render_files<E: TemplateEngine>(engine: &mut E, config: &RenderConfig) -> Result<Vec<u8>> {
    let template = read_template(&config.template_path)?;
    let variables = load_variables(&config.variables_path)?;

    let rendered = render_template(engine, &template, &variables)?;
    info!(
        "Rendered `{}` with {} variables into {} bytes",
        config.template_path,
        variables.len(),
        rendered.len()
    );

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineOptions, HandlebarsEngine};
    use crate::error::{Error, ErrorKind};
    use crate::variables::Value;

    /// Engine stand-in that echoes the source and records what it was given.
    #[derive(Default)]
    struct EchoEngine {
        parsed_sources: Vec<String>,
    }

    impl TemplateEngine for EchoEngine {
        type Parsed = String;

        fn parse(&mut self, source: &str) -> Result<String> {
            self.parsed_sources.push(source.to_string());
            Ok(source.to_string())
        }

        fn execute(&self, parsed: &String, variables: &VariableContext) -> Result<String> {
            Ok(format!("{parsed}|{}", variables.len()))
        }
    }

    fn flag(value: bool) -> VariableContext {
        [("flag".to_string(), Value::from(value))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_render_goes_through_engine_once() {
        let mut engine = EchoEngine::default();
        let rendered = render_template(&mut engine, b"source", &flag(true)).unwrap();

        assert_eq!(rendered, b"source|1");
        assert_eq!(engine.parsed_sources, vec!["source".to_string()]);
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let mut engine = HandlebarsEngine::default();
        let template = "server {\n  listen 80;\r\n}\n\n  \t";
        let rendered = render_template(&mut engine, template.as_bytes(), &VariableContext::new())
            .unwrap();
        assert_eq!(rendered, template.as_bytes());
    }

    #[test]
    fn test_if_else_follows_flag() {
        let template = b"{{#if flag}}Y{{else}}N{{/if}}";
        let mut engine = HandlebarsEngine::default();

        assert_eq!(render_template(&mut engine, template, &flag(true)).unwrap(), b"Y");
        assert_eq!(render_template(&mut engine, template, &flag(false)).unwrap(), b"N");
        assert_eq!(
            render_template(&mut engine, template, &VariableContext::new()).unwrap(),
            b"N"
        );
    }

    #[test]
    fn test_undefined_variable_is_empty() {
        let mut engine = HandlebarsEngine::default();
        let rendered =
            render_template(&mut engine, b"[{{undefined}}]", &VariableContext::new()).unwrap();
        assert_eq!(rendered, b"[]");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut engine = HandlebarsEngine::default();
        let result = render_template(&mut engine, &[0x66, 0xff, 0x6f], &VariableContext::new());
        let error = result.unwrap_err();
        assert!(matches!(error, Error::TemplateEncoding(_)));
        assert_eq!(error.kind(), ErrorKind::TemplateParse);
    }

    #[test]
    fn test_parse_error_is_prefixed() {
        let mut engine = HandlebarsEngine::default();
        let result = render_template(&mut engine, b"{{#each items}}", &VariableContext::new());
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TemplateParse);
        assert!(error.to_string().starts_with("parse template file: "));
    }

    #[test]
    fn test_execution_error_is_prefixed() {
        let mut engine = HandlebarsEngine::new(EngineOptions {
            strict: true,
            ..EngineOptions::default()
        });
        let result = render_template(&mut engine, b"{{missing}}", &VariableContext::new());
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TemplateExecution);
        assert!(error.to_string().starts_with("execute template: "));
    }
}
