pub mod consts;
pub mod model;

pub use model::{Locale, Newline, RenderOptions};
