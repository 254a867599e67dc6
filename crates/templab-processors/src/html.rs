//! HTML processor
//!
//! Data is HTML-escaped unless the placeholder says `raw`. `pretty` makes
//! multi-line data follow the indentation of its placeholder. The two
//! combine as `raw:pretty`; anything after them reaches the default
//! formatter (`{:raw:F2}`).

use templab_core::template::{classify_default, ScalarFormatter};
use templab_core::{FormatArg, Processor, Renderable, TemplateError};

const RAW: &str = "raw";
const PRETTY: &str = "pretty";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlProcessor;

impl Processor for HtmlProcessor {
    fn classify(&self, arg: FormatArg) -> Renderable {
        let raw = arg.match_format_specifier(&[RAW]);
        let pretty = raw
            .as_ref()
            .unwrap_or(&arg)
            .has_format_specifier(&[PRETTY]);

        // The full specifier is kept so formatting can see `raw` again.
        if pretty {
            Renderable::conforming_data(arg)
        } else if raw.is_some() {
            Renderable::data(arg)
        } else {
            classify_default(arg)
        }
    }

    fn format_scalar(
        &self,
        arg: &FormatArg,
        scalar: &ScalarFormatter,
    ) -> Result<String, TemplateError> {
        let (escape, rest) = match arg.match_format_specifier(&[RAW]) {
            Some(rest) => (false, rest),
            None => (true, arg.clone()),
        };
        let rest = match rest.strip_format_specifier(&[PRETTY]) {
            Ok(rest) | Err(rest) => rest,
        };

        let text = scalar.format(&rest)?;
        if escape {
            Ok(html_escape::encode_quoted_attribute(&text).into_owned())
        } else {
            Ok(text)
        }
    }
}
