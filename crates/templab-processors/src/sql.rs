//! SQL processor
//!
//! Interpolated data becomes a bound parameter (`@param_0`, `@param_1`, ...)
//! collected on the processor, so values never end up in the query text.
//!
//! | Specifier      | Argument           | Result                                      |
//! |----------------|--------------------|---------------------------------------------|
//! | `raw`          | any                | default text, unescaped                     |
//! | `(AND)`/`(OR)` | template sequence  | parenthesized expressions joined by the operator |
//! | `,`            | template sequence  | elements joined by `, `                     |
//! | `pretty`       | data               | default text, indented to the placeholder   |
//! | `inline`       | data               | SQL literal                                 |
//! | none           | data               | bound parameter                             |

use std::cell::RefCell;
use std::fmt;

use templab_core::template::seq::append_operator_to_expressions;
use templab_core::template::{classify_default, joiner, CustomValue, ScalarFormatter};
use templab_core::{
    FormatArg, Processor, RenderOptions, Renderable, Template, TemplateEngine, TemplateError,
    Value,
};
use tracing::trace;

const RAW: &str = "raw";
const PRETTY: &str = "pretty";
const INLINE: &str = "inline";
const AND: &str = "(AND)";
const OR: &str = "(OR)";
const COMMA: &str = ",";

/// A value bound to a query parameter
///
/// Pass one directly as an argument (`Value::custom(SqlParam::typed(..))`)
/// to control the declared SQL type.
#[derive(Debug, Clone)]
pub struct SqlParam {
    pub value: Value,
    pub sql_type: Option<String>,
}

impl SqlParam {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            sql_type: None,
        }
    }

    pub fn typed(value: impl Into<Value>, sql_type: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            sql_type: Some(sql_type.into()),
        }
    }

    /// Reuse an existing parameter or wrap a plain value
    pub fn wrap(value: &Value) -> Self {
        match value.downcast_ref::<SqlParam>() {
            Some(param) => param.clone(),
            None => Self::new(value.clone()),
        }
    }

    /// SQL literal for the value
    pub fn to_literal(&self) -> Result<String, TemplateError> {
        match &self.value {
            Value::Null => Ok("NULL".to_string()),
            Value::Str(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
            Value::Int(i) => Ok(i.to_string()),
            Value::UInt(u) => Ok(u.to_string()),
            Value::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
            other => Err(TemplateError::UnsupportedValue {
                kind: other.kind(),
                context: "SQL literal".to_string(),
            }),
        }
    }
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ScalarFormatter::default().format(&FormatArg::from(self.value.clone())) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "<{}>", self.value.kind()),
        }
    }
}

impl CustomValue for SqlParam {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn kind(&self) -> &'static str {
        "sql parameter"
    }
}

/// Processor that turns data into bound parameters
///
/// Parameters accumulate across renders until taken.
#[derive(Debug, Default)]
pub struct SqlProcessor {
    parameters: RefCell<Vec<(String, SqlParam)>>,
}

impl SqlProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters bound so far, in placeholder order
    pub fn parameters(&self) -> Vec<(String, SqlParam)> {
        self.parameters.borrow().clone()
    }

    /// Remove and return the bound parameters
    pub fn take_parameters(&self) -> Vec<(String, SqlParam)> {
        self.parameters.take()
    }

    pub fn into_parameters(self) -> Vec<(String, SqlParam)> {
        self.parameters.into_inner()
    }

    fn bind(&self, param: SqlParam) -> String {
        let mut parameters = self.parameters.borrow_mut();
        let name = format!("param_{}", parameters.len());
        trace!(name = %name, kind = param.value.kind(), "binding sql parameter");
        let placeholder = format!("@{}", name);
        parameters.push((name, param));
        placeholder
    }
}

impl Processor for SqlProcessor {
    fn classify(&self, arg: FormatArg) -> Renderable {
        if arg.has_format_specifier(&[RAW]) {
            return Renderable::data(arg);
        }

        let operator = if arg.has_format_specifier(&[AND]) {
            Some(" AND")
        } else if arg.has_format_specifier(&[OR]) {
            Some(" OR")
        } else {
            None
        };
        let comma = arg.has_format_specifier(&[COMMA]);

        match arg.value {
            Value::Templates(templates) => {
                let templates = templates.into_iter().flatten();
                match operator {
                    Some(operator) => Renderable::templates(
                        append_operator_to_expressions(templates, &Template::literal(operator)),
                        None,
                    ),
                    None if comma => Renderable::templates(
                        templates,
                        Some(joiner(|parts, _ambient| parts.join(", "))),
                    ),
                    None => Renderable::templates(templates, None),
                }
            }
            value => {
                let arg = FormatArg::new(value, arg.format_specifier);
                if matches!(arg.value, Value::Template(_)) {
                    classify_default(arg)
                } else if arg.has_format_specifier(&[PRETTY]) {
                    Renderable::conforming_data(arg)
                } else {
                    Renderable::data(arg)
                }
            }
        }
    }

    fn format_scalar(
        &self,
        arg: &FormatArg,
        scalar: &ScalarFormatter,
    ) -> Result<String, TemplateError> {
        if let Some(rest) = arg.match_format_specifier(&[RAW, PRETTY]) {
            return scalar.format(&rest);
        }

        let param = SqlParam::wrap(&arg.value);
        if arg.has_format_specifier(&[INLINE]) {
            return param.to_literal();
        }

        Ok(self.bind(param))
    }
}

/// Rendered query text with its bound parameters
#[derive(Debug, Clone)]
pub struct SqlQuery {
    pub text: String,
    pub parameters: Vec<(String, SqlParam)>,
}

/// Render a query with a fresh [`SqlProcessor`]
pub fn render_query(
    root: impl Into<Value>,
    options: RenderOptions,
) -> templab_core::Result<SqlQuery> {
    let engine = TemplateEngine::with_options(options, SqlProcessor::new())?;
    let text = engine.render(root)?;

    Ok(SqlQuery {
        text,
        parameters: engine.into_processor().into_parameters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(SqlParam::new(Value::Null).to_literal().unwrap(), "NULL");
        assert_eq!(SqlParam::new("O'Brien").to_literal().unwrap(), "'O''Brien'");
        assert_eq!(SqlParam::new(-7).to_literal().unwrap(), "-7");
        assert_eq!(SqlParam::new(7u64).to_literal().unwrap(), "7");
        assert_eq!(SqlParam::new(false).to_literal().unwrap(), "FALSE");
    }

    #[test]
    fn test_unsupported_literal() {
        let err = SqlParam::new(1.5).to_literal().unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnsupportedValue { kind: "float", .. }
        ));
    }

    #[test]
    fn test_wrap_reuses_existing_parameter() {
        let value = Value::custom(SqlParam::typed(5, "bigint"));
        let param = SqlParam::wrap(&value);
        assert_eq!(param.sql_type.as_deref(), Some("bigint"));
        assert!(matches!(param.value, Value::Int(5)));

        let plain = SqlParam::wrap(&Value::Int(5));
        assert_eq!(plain.sql_type, None);
    }

    #[test]
    fn test_display_uses_default_text() {
        assert_eq!(SqlParam::new("x").to_string(), "x");
        assert_eq!(SqlParam::new(Value::Null).to_string(), "");
    }

    #[test]
    fn test_bind_numbers_in_order() {
        let processor = SqlProcessor::new();
        assert_eq!(processor.bind(SqlParam::new(1)), "@param_0");
        assert_eq!(processor.bind(SqlParam::new(2)), "@param_1");

        let names: Vec<_> = processor
            .take_parameters()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["param_0", "param_1"]);
        assert!(processor.parameters().is_empty());
    }
}
