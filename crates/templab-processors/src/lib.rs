//! Domain processors for templab
//!
//! - [`HtmlProcessor`]: escapes interpolated data for HTML output
//! - [`SqlProcessor`]: binds interpolated data as query parameters

pub mod html;
pub mod sql;

pub use html::HtmlProcessor;
pub use sql::{render_query, SqlParam, SqlProcessor, SqlQuery};
