//! Helpers for building template sequences

use super::{Template, Value};

/// Fold templates into one, placing `separator` between neighbours
///
/// An empty input yields an empty template.
pub fn join_by<I>(templates: I, separator: &Template) -> Template
where
    I: IntoIterator<Item = Template>,
{
    let mut iter = templates.into_iter();
    let Some(first) = iter.next() else {
        return Template::literal("");
    };

    iter.fold(first, |accumulated, next| {
        Template::new(
            "{}{}{}",
            vec![
                Value::Template(accumulated),
                Value::Template(separator.clone()),
                Value::Template(next),
            ],
        )
    })
}

/// Append `suffix` to every template except the last
pub fn append_to_each<I>(templates: I, suffix: &Template) -> Vec<Template>
where
    I: IntoIterator<Item = Template>,
{
    let templates: Vec<Template> = templates.into_iter().collect();
    let last = templates.len().saturating_sub(1);

    templates
        .into_iter()
        .enumerate()
        .map(|(i, template)| {
            if i == last {
                template
            } else {
                Template::new(
                    "{}{}",
                    vec![Value::Template(template), Value::Template(suffix.clone())],
                )
            }
        })
        .collect()
}

/// Join boolean expressions with an operator, e.g. ` AND`
///
/// With more than one expression each is parenthesized first, so the
/// operator binds the way the caller expects.
pub fn append_operator_to_expressions<I>(expressions: I, operator: &Template) -> Vec<Template>
where
    I: IntoIterator<Item = Template>,
{
    let expressions: Vec<Template> = expressions.into_iter().collect();
    let expressions = if expressions.len() > 1 {
        expressions
            .into_iter()
            .map(|expression| Template::new("({})", vec![Value::Template(expression)]))
            .collect()
    } else {
        expressions
    };

    append_to_each(expressions, operator)
}
