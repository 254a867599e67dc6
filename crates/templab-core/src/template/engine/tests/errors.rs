//! Error propagation and option validation

use super::helpers::{hook_engine, render_lf};
use crate::config::RenderOptions;
use crate::error::TemplabError;
use crate::template;
use crate::template::engine::{DefaultProcessor, TemplateEngine};
use crate::template::TemplateError;

#[test]
fn test_missing_argument() {
    let err = lf_render_err(template!("{} {}", 1));
    assert_eq!(err, TemplateError::MissingArgument { index: 1, count: 1 });
}

#[test]
fn test_explicit_index_out_of_range() {
    let err = lf_render_err(template!("{3}", 1));
    assert_eq!(err, TemplateError::MissingArgument { index: 3, count: 1 });
}

#[test]
fn test_unused_argument() {
    let err = lf_render_err(template!("{}", 1, 2));
    assert_eq!(err, TemplateError::UnusedArgument { index: 1 });
}

#[test]
fn test_malformed_syntax() {
    let err = lf_render_err(template!("{"));
    assert!(matches!(err, TemplateError::MalformedSyntax { offset: 0, .. }));
    assert!(err.to_string().contains("offset 0"));

    let err = lf_render_err(template!("a }"));
    assert!(matches!(err, TemplateError::MalformedSyntax { offset: 2, .. }));
}

#[test]
fn test_invalid_format_specifier() {
    let err = lf_render_err(template!("{:Q}", 1));
    assert_eq!(
        err,
        TemplateError::InvalidFormatSpecifier {
            specifier: "Q".to_string(),
            kind: "int",
        }
    );
}

#[test]
fn test_template_as_data_reports_its_own_errors() {
    let err = hook_engine()
        .render(template!("{:data}", template!("{}")))
        .unwrap_err();
    assert_eq!(err, TemplateError::MissingArgument { index: 0, count: 0 });
}

#[test]
fn test_nested_error_propagates() {
    let inner = template!("{}");
    let err = lf_render_err(template!("\n    a\n        {}", inner));
    assert_eq!(err, TemplateError::MissingArgument { index: 0, count: 0 });
}

#[test]
fn test_error_in_sequence_element_propagates() {
    let items = vec![template!("ok"), template!("{:F2}", "text"), template!("{:Q}", 1)];
    assert!(matches!(
        lf_render_err(items),
        TemplateError::InvalidFormatSpecifier { kind: "int", .. }
    ));
}

#[test]
fn test_wrapped_error_display() {
    let err = TemplabError::from(TemplateError::UnusedArgument { index: 2 });
    assert_eq!(
        err.to_string(),
        "TEMPLATE_ERROR: Argument 2 is not referenced by any placeholder"
    );
}

#[test]
fn test_zero_tab_width_rejected_by_engine() {
    let result =
        TemplateEngine::with_options(RenderOptions::default().with_tab_width(0), DefaultProcessor);
    assert!(matches!(
        result,
        Err(TemplabError::ConfigInvalidValue { ref field, .. }) if field == "tab_width"
    ));
}

#[test]
fn test_successful_render_after_error() {
    assert!(crate::template::render(template!("{}")).is_err());
    assert_eq!(render_lf(template!("{}", 1)), "1");
}

fn lf_render_err(root: impl Into<crate::template::Value>) -> TemplateError {
    super::helpers::lf_engine().render(root).unwrap_err()
}
