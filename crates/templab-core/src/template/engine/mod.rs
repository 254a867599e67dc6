//! Template engine implementation
//!
//! Rendering a template:
//!
//! 1. run the processor's preprocessing hook on the format string
//! 2. normalize its indentation against the ambient indentation
//! 3. replace each placeholder with a unique token
//! 4. for each token, in placeholder order, classify its argument, locate the
//!    token in the *current* text and either delete its line (blank
//!    argument alone on a line) or splice in the argument rendered under the
//!    indentation found at the token
//!
//! Tokens are located again after every splice because earlier replacements
//! shift offsets and can move a token onto a different line.

mod indent;
mod locate;
mod processor;
mod renderable;
mod scalar;
mod tokenize;

use tracing::{debug, trace};

use crate::config::RenderOptions;
use crate::error::Result as TemplabResult;
use crate::template::error::TemplateError;
use crate::template::{FormatArg, Template, Value};

use locate::locate;
use tokenize::{tokenize, Tokenized};

pub use processor::{classify_default, DefaultProcessor, Processor};
pub use renderable::{joiner, Joiner, Renderable};
pub use scalar::ScalarFormatter;

/// Renders template trees, re-indenting nested fragments to their insertion point
#[derive(Debug, Clone)]
pub struct TemplateEngine<P = DefaultProcessor> {
    options: RenderOptions,
    scalar: ScalarFormatter,
    processor: P,
}

impl TemplateEngine {
    /// Engine with default options and no processor overrides
    pub fn new() -> Self {
        Self::with_processor(DefaultProcessor)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Processor> TemplateEngine<P> {
    /// Engine with default options
    pub fn with_processor(processor: P) -> Self {
        let options = RenderOptions::default();
        Self {
            scalar: ScalarFormatter::new(options.locale.clone()),
            options,
            processor,
        }
    }

    /// Engine with explicit options, which are validated first
    pub fn with_options(options: RenderOptions, processor: P) -> TemplabResult<Self> {
        options.validate()?;
        Ok(Self {
            scalar: ScalarFormatter::new(options.locale.clone()),
            options,
            processor,
        })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_processor(self) -> P {
        self.processor
    }

    /// Render a template tree to text
    ///
    /// The root is treated as the single argument of a `{}` template, so a
    /// template renders as itself, a sequence of templates renders joined by
    /// line breaks, and an empty sequence renders as an empty string.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed format string, placeholder/argument
    /// mismatch or value the processor cannot format. No partial output is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use templab_core::{template, Newline, RenderOptions, TemplateEngine};
    /// use templab_core::template::DefaultProcessor;
    ///
    /// let options = RenderOptions::default().with_newline(Newline::Lf);
    /// let engine = TemplateEngine::with_options(options, DefaultProcessor).unwrap();
    ///
    /// let body = vec![template!("a();"), template!("b();")];
    /// let rendered = engine.render(template!("fn f() {{\n    {}\n}}", body)).unwrap();
    /// assert_eq!(rendered, "fn f() {\n    a();\n    b();\n}");
    /// ```
    pub fn render(&self, root: impl Into<Value>) -> Result<String, TemplateError> {
        debug!(
            tab_width = self.options.tab_width,
            newline = ?self.options.newline,
            "rendering template tree"
        );
        let root = Template::new("{}", vec![root.into()]);
        self.render_renderable(Renderable::Template(root), "")
    }

    /// Render one renderable under `ambient` indentation
    pub fn render_renderable(
        &self,
        renderable: Renderable,
        ambient: &str,
    ) -> Result<String, TemplateError> {
        match renderable {
            Renderable::Blank => Ok(String::new()),
            Renderable::Data {
                arg,
                conform_to_ambient_indentation,
            } => self.render_data(&arg, conform_to_ambient_indentation, ambient),
            Renderable::Template(template) => self.render_template(template, ambient),
            Renderable::Composite { children, joiner } => {
                let rendered = children
                    .into_iter()
                    .filter(|child| !child.is_blank())
                    .map(|child| self.render_renderable(child, ambient))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(match joiner {
                    Some(joiner) => (*joiner)(&rendered, ambient),
                    None => rendered.join(&format!("{}{}", self.newline(), ambient)),
                })
            }
        }
    }

    fn newline(&self) -> &'static str {
        self.options.newline.as_str()
    }

    fn render_data(
        &self,
        arg: &FormatArg,
        conform_to_ambient_indentation: bool,
        ambient: &str,
    ) -> Result<String, TemplateError> {
        let content = self.processor.format_scalar(arg, &self.scalar)?;

        if conform_to_ambient_indentation {
            Ok(indent::normalize(
                &content,
                self.options.tab_width,
                ambient,
                self.newline(),
            ))
        } else {
            Ok(content)
        }
    }

    fn render_template(&self, template: Template, ambient: &str) -> Result<String, TemplateError> {
        let (format, arguments) = template.into_parts();
        let format = self.processor.preprocess_template(&format);
        let format = indent::normalize(&format, self.options.tab_width, ambient, self.newline());

        let Tokenized {
            mut text,
            replacements,
        } = tokenize(&format, arguments)?;
        trace!(placeholders = replacements.len(), "tokenized template");

        for (token, arg) in replacements {
            let renderable = self.processor.classify(arg);
            let location = locate(&text, &token)
                .ok_or_else(|| TemplateError::TokenNotFound { token: token.clone() })?;

            if location.occupies_entire_line && renderable.is_blank() {
                trace!(span = ?location.line_replace, "removing line of blank placeholder");
                text.replace_range(location.line_replace, "");
                continue;
            }

            let nested_ambient = if location.is_first_line {
                format!("{}{}", ambient, location.indentation)
            } else {
                location.indentation
            };
            trace!(
                ambient_width = nested_ambient.len(),
                first_line = location.is_first_line,
                "splicing placeholder"
            );

            let replacement = self.render_renderable(renderable, &nested_ambient)?;
            text.replace_range(location.found, &replacement);
        }

        Ok(text)
    }
}

/// Convenience function to render with a default engine
pub fn render(root: impl Into<Value>) -> Result<String, TemplateError> {
    TemplateEngine::new().render(root)
}

#[cfg(test)]
mod tests;
