use serde::{Deserialize, Serialize};

use super::consts;
use crate::error::{Result, TemplabError};

/// Construction-time options for the rendering engine
///
/// Usually left at defaults; can be loaded from a TOML table such as:
///
/// ```toml
/// tab_width = 8
/// newline = "lf"
///
/// [locale]
/// decimal_separator = ","
/// group_separator = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub newline: Newline,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: consts::indent::DEFAULT_TAB_WIDTH,
            newline: Newline::default(),
            locale: Locale::default(),
        }
    }
}

fn default_tab_width() -> usize {
    consts::indent::DEFAULT_TAB_WIDTH
}

impl RenderOptions {
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Reject option combinations the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(TemplabError::ConfigInvalidValue {
                field: "tab_width".to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(content).map_err(|e| TemplabError::ConfigParseError(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplabError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_toml_str(&content)
    }

    /// Serialize options back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TemplabError::ConfigParseError(e.to_string()))
    }
}

/// Line separator used when rejoining normalized lines and between sequence elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    Lf,
    CrLf,
    /// Platform separator (`\r\n` on Windows, `\n` elsewhere)
    #[default]
    Native,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
            Newline::Native if cfg!(windows) => "\r\n",
            Newline::Native => "\n",
        }
    }
}

/// Culture settings consulted by the default scalar formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
    /// strftime pattern for dates without an explicit specifier
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for date-times without an explicit specifier
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

impl Locale {
    /// Culture-invariant settings
    pub fn invariant() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_group_separator() -> char {
    ','
}

fn default_date_format() -> String {
    consts::scalar::INVARIANT_DATE_FORMAT.to_string()
}

fn default_datetime_format() -> String {
    consts::scalar::INVARIANT_DATETIME_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.tab_width, 4);
        assert_eq!(options.newline, Newline::Native);
        assert_eq!(options.locale, Locale::invariant());
    }

    #[test]
    fn test_from_toml_partial() {
        let options = RenderOptions::from_toml_str(
            r#"
            tab_width = 8

            [locale]
            decimal_separator = ","
            "#,
        )
        .unwrap();
        assert_eq!(options.tab_width, 8);
        assert_eq!(options.newline, Newline::Native);
        assert_eq!(options.locale.decimal_separator, ',');
        assert_eq!(options.locale.group_separator, ',');
        assert_eq!(options.locale.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_from_toml_newline() {
        let options = RenderOptions::from_toml_str(r#"newline = "crlf""#).unwrap();
        assert_eq!(options.newline, Newline::CrLf);
        assert_eq!(options.newline.as_str(), "\r\n");
    }

    #[test]
    fn test_zero_tab_width_rejected() {
        let err = RenderOptions::from_toml_str("tab_width = 0").unwrap_err();
        assert!(matches!(
            err,
            TemplabError::ConfigInvalidValue { ref field, .. } if field == "tab_width"
        ));
        assert!(err.to_string().starts_with("CONFIG_INVALID_VALUE"));
    }

    #[test]
    fn test_unparseable_toml() {
        let err = RenderOptions::from_toml_str("tab_width = \"four\"").unwrap_err();
        assert!(matches!(err, TemplabError::ConfigParseError(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let options = RenderOptions::default()
            .with_tab_width(2)
            .with_newline(Newline::Lf);
        let text = options.to_toml_string().unwrap();
        assert_eq!(RenderOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("templab.toml");
        std::fs::write(&path, "newline = \"lf\"\n").unwrap();

        let options = RenderOptions::from_file(&path).unwrap();
        assert_eq!(options.newline, Newline::Lf);

        let missing = RenderOptions::from_file(temp.path().join("missing.toml"));
        assert!(matches!(missing, Err(TemplabError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_from_file_unreadable_content_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("templab.toml");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let err = RenderOptions::from_file(&path).unwrap_err();
        assert!(matches!(err, TemplabError::IoError(_)));
        assert!(err.to_string().starts_with("IO_ERROR"));
    }
}
