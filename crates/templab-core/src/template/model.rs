//! Template and argument model

use super::value::Value;

/// A format string paired with the values for its placeholders
///
/// The format string uses the placeholder grammar of `format!`: `{}` for the
/// next argument, `{N}` for argument `N`, `{:spec}` / `{N:spec}` to attach a
/// format specifier, and `{{` / `}}` for literal braces. Placeholders are
/// checked against the arguments when the template is rendered, not here.
#[derive(Debug, Clone)]
pub struct Template {
    format: String,
    arguments: Vec<Value>,
}

impl Template {
    pub fn new(format: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            format: format.into(),
            arguments,
        }
    }

    /// Template without placeholders
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Value>) {
        (self.format, self.arguments)
    }
}

/// Build a [`Template`] from a format string and arguments
///
/// Each argument is converted with `Value::from`.
///
/// ```
/// use templab_core::template;
///
/// let names = vec![template!("a"), template!("b")];
/// let t = template!("list:\n    {}", names);
/// assert_eq!(t.arguments().len(), 1);
/// ```
#[macro_export]
macro_rules! template {
    ($format:expr $(,)?) => {
        $crate::template::Template::new($format, ::std::vec::Vec::new())
    };
    ($format:expr, $($arg:expr),+ $(,)?) => {
        $crate::template::Template::new(
            $format,
            ::std::vec![$($crate::template::Value::from($arg)),+],
        )
    };
}

/// A value together with the format specifier written at its placeholder
#[derive(Debug, Clone)]
pub struct FormatArg {
    pub value: Value,
    pub format_specifier: Option<String>,
}

impl FormatArg {
    pub fn new(value: Value, format_specifier: Option<String>) -> Self {
        Self {
            value,
            format_specifier,
        }
    }

    /// Check the specifier against each keyword in turn
    pub fn has_format_specifier(&self, keywords: &[&str]) -> bool {
        self.match_format_specifier(keywords).is_some()
    }

    /// Match the specifier against `keywords` (case-insensitive, trimmed)
    ///
    /// A keyword matches when the specifier equals it or starts with
    /// `keyword:`. The returned argument carries whatever follows the colon,
    /// or no specifier on an exact match. Keywords are tried in order and the
    /// first match wins.
    pub fn match_format_specifier(&self, keywords: &[&str]) -> Option<FormatArg> {
        let specifier = self.format_specifier.as_deref()?.trim();
        if specifier.is_empty() {
            return None;
        }

        keywords.iter().find_map(|keyword| {
            if specifier.eq_ignore_ascii_case(keyword) {
                return Some(FormatArg::new(self.value.clone(), None));
            }

            let name = specifier.get(..keyword.len())?;
            let rest = specifier.get(keyword.len()..)?.strip_prefix(':')?;
            name.eq_ignore_ascii_case(keyword)
                .then(|| FormatArg::new(self.value.clone(), Some(rest.to_string())))
        })
    }

    /// Like [`FormatArg::match_format_specifier`], but hands back `self` when
    /// nothing matches
    pub fn strip_format_specifier(self, keywords: &[&str]) -> Result<FormatArg, FormatArg> {
        match self.match_format_specifier(keywords) {
            Some(rest) => Ok(rest),
            None => Err(self),
        }
    }

    /// Specifier with surrounding whitespace removed, `None` when blank
    pub fn trimmed_specifier(&self) -> Option<&str> {
        self.format_specifier
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl From<Value> for FormatArg {
    fn from(value: Value) -> Self {
        Self::new(value, None)
    }
}
