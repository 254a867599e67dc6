// Core modules
pub mod config;
pub mod error;
pub mod template;

// Re-export commonly used types
pub use config::{Locale, Newline, RenderOptions};
pub use error::{Result, TemplabError};
pub use template::{
    FormatArg, Processor, Renderable, Template, TemplateEngine, TemplateError, Value,
};
