//! Template engine capability and its Handlebars implementation.
//!
//! The orchestrator only depends on [`TemplateEngine`], so the grammar behind
//! it can be swapped without touching the pipeline.

use handlebars::Handlebars;

use crate::error::Result;
use crate::variables::VariableContext;

/// Parse and execute primitives of a template language.
pub trait TemplateEngine {
    /// Engine-owned handle to a parsed template.
    type Parsed;

    /// Parses template source into a reusable form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Parse`] if the syntax is invalid.
    fn parse(&mut self, source: &str) -> Result<Self::Parsed>;

    /// Executes a parsed template against `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Render`] if evaluation fails.
    fn execute(&self, parsed: &Self::Parsed, variables: &VariableContext) -> Result<String>;
}

/// Switches applied to the Handlebars registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Fail on a missing variable instead of rendering it as an empty string.
    pub strict: bool,
    /// HTML-escape `{{expression}}` output. `{{{expression}}}` is never escaped.
    pub escape_html: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict: false,
            escape_html: true,
        }
    }
}

/// Name of a template registered in a [`HandlebarsEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    name: String,
}

pub struct HandlebarsEngine {
    handlebars: Handlebars<'static>,
    parsed_count: usize,
}

impl HandlebarsEngine {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(options.strict);
        handlebars.set_dev_mode(false);

        if !options.escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        Self {
            handlebars,
            parsed_count: 0,
        }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl TemplateEngine for HandlebarsEngine {
    type Parsed = ParsedTemplate;

    fn parse(&mut self, source: &str) -> Result<ParsedTemplate> {
        let name = if self.parsed_count == 0 {
            "template".to_string()
        } else {
            format!("template-{}", self.parsed_count)
        };

        self.handlebars.register_template_string(&name, source)?;
        self.parsed_count += 1;

        Ok(ParsedTemplate { name })
    }

    fn execute(&self, parsed: &ParsedTemplate, variables: &VariableContext) -> Result<String> {
        Ok(self.handlebars.render(&parsed.name, variables)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::variables::Value;

    fn variables(pairs: &[(&str, Value)]) -> VariableContext {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    fn render_with(
        engine: &mut HandlebarsEngine,
        source: &str,
        context: &VariableContext,
    ) -> Result<String> {
        let parsed = engine.parse(source)?;
        engine.execute(&parsed, context)
    }

    #[test]
    fn test_basic_interpolation() {
        let mut engine = HandlebarsEngine::default();
        let context = variables(&[("name", Value::from("World"))]);

        let result = render_with(&mut engine, "Hello, {{name}}!", &context).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_parsed_template_is_reusable() {
        let mut engine = HandlebarsEngine::default();
        let parsed = engine.parse("[{{value}}]").unwrap();

        let first = engine
            .execute(&parsed, &variables(&[("value", Value::from("a"))]))
            .unwrap();
        let second = engine
            .execute(&parsed, &variables(&[("value", Value::from(2_i64))]))
            .unwrap();

        assert_eq!(first, "[a]");
        assert_eq!(second, "[2]");
    }

    #[test]
    fn test_templates_do_not_overwrite_each_other() {
        let mut engine = HandlebarsEngine::default();
        let first = engine.parse("first").unwrap();
        let second = engine.parse("second").unwrap();
        let context = VariableContext::new();

        assert_ne!(first, second);
        assert_eq!(engine.execute(&first, &context).unwrap(), "first");
        assert_eq!(engine.execute(&second, &context).unwrap(), "second");
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        let mut engine = HandlebarsEngine::default();
        let result = render_with(&mut engine, "a{{missing}}b", &VariableContext::new()).unwrap();
        assert_eq!(result, "ab");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let mut engine = HandlebarsEngine::new(EngineOptions {
            strict: true,
            ..EngineOptions::default()
        });
        let error =
            render_with(&mut engine, "a{{missing}}b", &VariableContext::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TemplateExecution);
    }

    #[test]
    fn test_html_escaping_defaults_on() {
        let mut engine = HandlebarsEngine::default();
        let context = variables(&[("title", Value::from("Tom & Jerry <3>"))]);

        let escaped = render_with(&mut engine, "{{title}}", &context).unwrap();
        let raw = render_with(&mut engine, "{{{title}}}", &context).unwrap();

        assert_eq!(escaped, "Tom &amp; Jerry &lt;3&gt;");
        assert_eq!(raw, "Tom & Jerry <3>");
    }

    #[test]
    fn test_html_escaping_covers_equals_and_backtick() {
        let mut engine = HandlebarsEngine::default();
        let context = variables(&[("expr", Value::from("a=b`c'd"))]);

        let escaped = render_with(&mut engine, "{{expr}}", &context).unwrap();
        assert_eq!(escaped, "a&#x3D;b&#x60;c&#x27;d");
    }

    #[test]
    fn test_html_escaping_can_be_disabled() {
        let mut engine = HandlebarsEngine::new(EngineOptions {
            escape_html: false,
            ..EngineOptions::default()
        });
        let context = variables(&[("url", Value::from("a?b=1&c=<2>"))]);

        let result = render_with(&mut engine, "{{url}}", &context).unwrap();
        assert_eq!(result, "a?b=1&c=<2>");
    }

    #[test]
    fn test_each_over_sequence_and_nested_lookup() {
        let mut engine = HandlebarsEngine::default();
        let mut server = crate::variables::Mapping::new();
        server.insert("host".to_string(), Value::from("db.local"));
        let context = variables(&[
            (
                "ports",
                Value::Sequence(vec![Value::from(80_i64), Value::from(443_i64)]),
            ),
            ("server", Value::Mapping(server)),
        ]);

        let result = render_with(
            &mut engine,
            "{{server.host}}:{{#each ports}}{{this}};{{/each}}",
            &context,
        )
        .unwrap();
        assert_eq!(result, "db.local:80;443;");
    }

    #[test]
    fn test_invalid_syntax_is_parse_error() {
        let mut engine = HandlebarsEngine::default();
        let result = engine.parse("{{#if flag}}unterminated");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_unknown_helper_is_execution_error() {
        let mut engine = HandlebarsEngine::default();
        let result = render_with(&mut engine, "{{no_such_helper 1}}", &VariableContext::new());
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
