//! Default text for terminal values
//!
//! Numbers accept the standard single-letter specifiers with an optional
//! precision (`F2`, `N0`, `D5`, `X8`, `P1`); dates accept a strftime
//! pattern. Separators and default date patterns come from the [`Locale`].
//! Templates flatten to their text with arguments substituted in place.

use chrono::format::{Item, StrftimeItems};
use std::fmt::{Display, Write};

use super::tokenize::{tokenize, Tokenized};
use crate::config::consts;
use crate::config::Locale;
use crate::template::error::TemplateError;
use crate::template::{FormatArg, Template, Value};

/// Locale-aware default formatter handed to processors
#[derive(Debug, Clone)]
pub struct ScalarFormatter {
    locale: Locale,
}

/// Parsed numeric specifier: letter plus optional precision
struct NumericSpec {
    letter: char,
    precision: Option<usize>,
}

impl NumericSpec {
    fn parse(specifier: &str) -> Option<Self> {
        let mut chars = specifier.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic)?;
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(digits.parse().ok()?)
        } else {
            return None;
        };
        Some(Self { letter, precision })
    }

    fn precision_or_default(&self) -> usize {
        self.precision.unwrap_or(consts::scalar::DEFAULT_PRECISION)
    }
}

impl ScalarFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Format a terminal value using its specifier
    pub fn format(&self, arg: &FormatArg) -> Result<String, TemplateError> {
        let specifier = arg.trimmed_specifier();

        match &arg.value {
            Value::Null => Ok(String::new()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Str(s) => Ok(s.clone()),
            Value::Custom(custom) => Ok(custom.to_string()),
            Value::Int(i) => self.format_integer(i128::from(*i), *i as u64, specifier, "int"),
            Value::UInt(u) => self.format_integer(i128::from(*u), *u, specifier, "uint"),
            Value::Float(f) => self.format_float(*f, specifier),
            Value::Date(date) => {
                let pattern = specifier.unwrap_or(&self.locale.date_format);
                format_date(
                    date.format_with_items(strftime_items(pattern, "date")?.iter()),
                    pattern,
                    "date",
                )
            }
            Value::DateTime(datetime) => {
                let pattern = specifier.unwrap_or(&self.locale.datetime_format);
                format_date(
                    datetime.format_with_items(strftime_items(pattern, "datetime")?.iter()),
                    pattern,
                    "datetime",
                )
            }
            Value::Template(template) => self.flatten(template),
            Value::Templates(templates) => Ok(templates
                .iter()
                .flatten()
                .map(|template| self.flatten(template))
                .collect::<Result<Vec<_>, _>>()?
                .join("\n")),
        }
    }

    /// Default string form of a template: each placeholder replaced by the
    /// scalar text of its argument, with no re-indentation
    fn flatten(&self, template: &Template) -> Result<String, TemplateError> {
        let Tokenized {
            mut text,
            replacements,
        } = tokenize(template.format(), template.arguments().to_vec())?;

        for (token, arg) in replacements {
            let replacement = self.format(&arg)?;
            let found = text
                .find(&token)
                .ok_or_else(|| TemplateError::TokenNotFound { token: token.clone() })?;
            text.replace_range(found..found + token.len(), &replacement);
        }

        Ok(text)
    }

    /// `hex_bits` is the two's complement bit pattern used by `X`
    fn format_integer(
        &self,
        value: i128,
        hex_bits: u64,
        specifier: Option<&str>,
        kind: &'static str,
    ) -> Result<String, TemplateError> {
        let Some(specifier) = specifier else {
            return Ok(value.to_string());
        };
        let invalid = || invalid_specifier(specifier, kind);
        let spec = NumericSpec::parse(specifier).ok_or_else(invalid)?;

        match spec.letter {
            'D' | 'd' => {
                let digits = spec.precision.unwrap_or(0);
                let sign = if value < 0 { "-" } else { "" };
                Ok(format!("{}{:0>digits$}", sign, value.unsigned_abs()))
            }
            'X' => Ok(format!("{:0>width$X}", hex_bits, width = spec.precision.unwrap_or(0))),
            'x' => Ok(format!("{:0>width$x}", hex_bits, width = spec.precision.unwrap_or(0))),
            'F' | 'f' | 'N' | 'n' | 'P' | 'p' => self.format_float(value as f64, Some(specifier)),
            _ => Err(invalid()),
        }
    }

    fn format_float(&self, value: f64, specifier: Option<&str>) -> Result<String, TemplateError> {
        let Some(specifier) = specifier else {
            return Ok(self.shortest(value));
        };
        if !value.is_finite() {
            return Ok(value.to_string());
        }

        let spec = NumericSpec::parse(specifier)
            .ok_or_else(|| invalid_specifier(specifier, "float"))?;
        let precision = spec.precision_or_default();

        match spec.letter {
            'F' | 'f' => Ok(self.localize(&format!("{:.*}", precision, value), false)),
            'N' | 'n' => Ok(self.localize(&format!("{:.*}", precision, value), true)),
            'P' | 'p' => Ok(format!(
                "{} %",
                self.localize(&format!("{:.*}", precision, value * 100.0), true)
            )),
            _ => Err(invalid_specifier(specifier, "float")),
        }
    }

    /// Shortest round-trip text, switching to exponent form (`1E+21`,
    /// `1.5E-07`) when the decimal exponent is at least 15 or at most -5
    fn shortest(&self, value: f64) -> String {
        if !value.is_finite() || value == 0.0 {
            return self.localize(&value.to_string(), false);
        }

        let scientific = format!("{:e}", value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return self.localize(&value.to_string(), false);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return self.localize(&value.to_string(), false);
        };

        if (-4..15).contains(&exponent) {
            return self.localize(&value.to_string(), false);
        }

        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{}{:02}",
            self.localize(mantissa, false),
            sign,
            exponent.unsigned_abs()
        )
    }

    /// Swap in the locale's decimal separator and optionally group the
    /// integer digits
    fn localize(&self, plain: &str, group: bool) -> String {
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(plain.len() + integer.len() / 3);
        out.push_str(sign);
        if group && integer.bytes().all(|b| b.is_ascii_digit()) {
            out.push_str(&group_digits(integer, self.locale.group_separator));
        } else {
            out.push_str(integer);
        }
        if let Some(fraction) = fraction {
            out.push(self.locale.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for ScalarFormatter {
    fn default() -> Self {
        Self::new(Locale::invariant())
    }
}

fn invalid_specifier(specifier: &str, kind: &'static str) -> TemplateError {
    TemplateError::InvalidFormatSpecifier {
        specifier: specifier.to_string(),
        kind,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

fn strftime_items<'p>(pattern: &'p str, kind: &'static str) -> Result<Vec<Item<'p>>, TemplateError> {
    let items: Vec<Item<'p>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid_specifier(pattern, kind));
    }
    Ok(items)
}

/// Chrono reports fields the value lacks (e.g. `%H` on a date) as a
/// formatting error rather than at parse time
fn format_date(
    formatted: impl Display,
    pattern: &str,
    kind: &'static str,
) -> Result<String, TemplateError> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| invalid_specifier(pattern, kind))?;
    Ok(out)
}
