//! Template module - indentation-aware template rendering
//!
//! A [`Template`] is a format string plus its arguments. Arguments may be
//! plain values, nested templates or sequences of templates; rendering
//! flattens the tree into one string and re-indents every nested fragment so
//! it lines up with the placeholder it replaced.
//!
//! ## Syntax
//!
//! - Next argument: `{}`
//! - Explicit argument: `{0}`
//! - Format specifier: `{:raw}` or `{1:F2}`
//! - Literal braces: `{{` and `}}`
//!
//! ## Example
//!
//! ```
//! use templab_core::{template, template::render};
//!
//! let statements = vec![template!("Write('one');"), template!("Write('two');")];
//! let program = template!(
//!     "
//!     procedure PrintNumbers()
//!     begin
//!         {}
//!     end;",
//!     statements
//! );
//!
//! let rendered = render(program).unwrap();
//! # let rendered = rendered.replace("\r\n", "\n");
//! assert_eq!(
//!     rendered,
//!     "procedure PrintNumbers()\nbegin\n    Write('one');\n    Write('two');\nend;"
//! );
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod seq;
pub mod value;

pub use engine::{
    classify_default, joiner, render, DefaultProcessor, Joiner, Processor, Renderable,
    ScalarFormatter, TemplateEngine,
};
pub use error::TemplateError;
pub use model::{FormatArg, Template};
pub use value::{CustomValue, Value};
