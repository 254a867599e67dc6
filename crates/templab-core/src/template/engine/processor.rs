//! Extension points consumed by the engine
//!
//! A [`Processor`] decides what each placeholder argument becomes and how
//! terminal values turn into text. Domain processors (HTML escaping, SQL
//! parameter binding) implement the trait, handle the specifiers they care
//! about and defer to [`classify_default`] / [`ScalarFormatter::format`] for
//! everything else.

use std::borrow::Cow;

use super::renderable::Renderable;
use super::scalar::ScalarFormatter;
use crate::template::error::TemplateError;
use crate::template::{FormatArg, Value};

/// Hooks a domain processor overrides
///
/// Every method has a default, so an empty `impl` behaves like
/// [`DefaultProcessor`].
///
/// # Example
///
/// ```
/// use templab_core::template::ScalarFormatter;
/// use templab_core::{template, FormatArg, Processor, TemplateEngine, TemplateError};
///
/// /// Quotes every argument unless the placeholder says `bare`
/// struct Quoting;
///
/// impl Processor for Quoting {
///     fn format_scalar(
///         &self,
///         arg: &FormatArg,
///         scalar: &ScalarFormatter,
///     ) -> Result<String, TemplateError> {
///         match arg.match_format_specifier(&["bare"]) {
///             Some(rest) => scalar.format(&rest),
///             None => Ok(format!("\"{}\"", scalar.format(arg)?)),
///         }
///     }
/// }
///
/// let engine = TemplateEngine::with_processor(Quoting);
/// let rendered = engine.render(template!("{} = {:bare}", "key", "value")).unwrap();
/// assert_eq!(rendered, "\"key\" = value");
/// ```
pub trait Processor {
    /// Decide what a placeholder argument renders as
    fn classify(&self, arg: FormatArg) -> Renderable {
        classify_default(arg)
    }

    /// Turn a terminal value into text
    ///
    /// `scalar` is the engine's locale-aware default formatter.
    fn format_scalar(
        &self,
        arg: &FormatArg,
        scalar: &ScalarFormatter,
    ) -> Result<String, TemplateError> {
        scalar.format(arg)
    }

    /// Rewrite a template's format string before it is normalized
    fn preprocess_template<'t>(&self, format: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(format)
    }
}

/// Templates stay templates, sequences become composites, anything else is data
pub fn classify_default(arg: FormatArg) -> Renderable {
    match arg.value {
        Value::Template(template) => Renderable::template(template),
        Value::Templates(templates) => Renderable::templates(templates, None),
        value => Renderable::data(FormatArg::new(value, arg.format_specifier)),
    }
}

/// Processor with no overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProcessor;

impl Processor for DefaultProcessor {}

impl<P: Processor + ?Sized> Processor for &P {
    fn classify(&self, arg: FormatArg) -> Renderable {
        (**self).classify(arg)
    }

    fn format_scalar(
        &self,
        arg: &FormatArg,
        scalar: &ScalarFormatter,
    ) -> Result<String, TemplateError> {
        (**self).format_scalar(arg, scalar)
    }

    fn preprocess_template<'t>(&self, format: &'t str) -> Cow<'t, str> {
        (**self).preprocess_template(format)
    }
}
