//! Shared test helpers for template engine tests

use std::borrow::Cow;

use crate::config::{Newline, RenderOptions};
use crate::template::engine::{DefaultProcessor, Processor, Renderable, TemplateEngine};
use crate::template::{FormatArg, Value};

/// Engine that joins lines with `\n` regardless of platform
pub(super) fn lf_engine() -> TemplateEngine {
    TemplateEngine::with_options(
        RenderOptions::default().with_newline(Newline::Lf),
        DefaultProcessor,
    )
    .unwrap()
}

/// Render with [`lf_engine`], panicking on error
pub(super) fn render_lf(root: impl Into<Value>) -> String {
    lf_engine().render(root).unwrap()
}

/// Processor exercising every hook:
///
/// - `pretty` → indentation-conforming data
/// - `empty` → composite without children
/// - `data` → forces templates through the scalar formatter
/// - `%%` in format strings → `{}`
#[derive(Debug, Default)]
pub(super) struct HookProcessor;

impl Processor for HookProcessor {
    fn classify(&self, arg: FormatArg) -> Renderable {
        if let Some(rest) = arg.match_format_specifier(&["pretty"]) {
            return Renderable::conforming_data(rest);
        }
        if arg.has_format_specifier(&["empty"]) {
            return Renderable::Composite {
                children: Vec::new(),
                joiner: None,
            };
        }
        if let Some(rest) = arg.match_format_specifier(&["data"]) {
            return Renderable::data(rest);
        }
        crate::template::classify_default(arg)
    }

    fn preprocess_template<'t>(&self, format: &'t str) -> Cow<'t, str> {
        if format.contains("%%") {
            Cow::Owned(format.replace("%%", "{}"))
        } else {
            Cow::Borrowed(format)
        }
    }
}

pub(super) fn hook_engine() -> TemplateEngine<HookProcessor> {
    TemplateEngine::with_options(
        RenderOptions::default().with_newline(Newline::Lf),
        HookProcessor,
    )
    .unwrap()
}
