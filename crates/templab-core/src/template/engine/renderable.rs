//! Intermediate representation of a classified placeholder argument

use std::fmt;
use std::sync::Arc;

use crate::template::{FormatArg, Template};

/// Combines rendered sequence elements; receives the ambient indentation
pub type Joiner = Arc<dyn Fn(&[String], &str) -> String + Send + Sync>;

/// Wrap a closure as a [`Joiner`]
pub fn joiner(f: impl Fn(&[String], &str) -> String + Send + Sync + 'static) -> Joiner {
    Arc::new(f)
}

/// What a placeholder renders as
#[derive(Clone)]
pub enum Renderable {
    /// Renders to nothing; a placeholder alone on its line takes the line with it
    Blank,
    /// Terminal value formatted by the processor
    Data {
        arg: FormatArg,
        /// Re-indent multi-line output to the insertion point
        conform_to_ambient_indentation: bool,
    },
    /// Nested template rendered under the ambient indentation
    Template(Template),
    /// Sequence rendered element by element and joined
    Composite {
        children: Vec<Renderable>,
        /// `None` joins with a line break followed by the ambient indentation
        joiner: Option<Joiner>,
    },
}

impl Renderable {
    /// `None` becomes [`Renderable::Blank`]
    pub fn template(template: impl Into<Option<Template>>) -> Self {
        match template.into() {
            Some(template) => Renderable::Template(template),
            None => Renderable::Blank,
        }
    }

    /// Composite over the present templates; absent ones are dropped and an
    /// empty result is [`Renderable::Blank`]
    pub fn templates<I, T>(templates: I, joiner: Option<Joiner>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Template>>,
    {
        let children: Vec<Renderable> = templates
            .into_iter()
            .filter_map(Into::<Option<Template>>::into)
            .map(Renderable::Template)
            .collect();

        if children.is_empty() {
            return Renderable::Blank;
        }

        Renderable::Composite { children, joiner }
    }

    pub fn data(arg: FormatArg) -> Self {
        Renderable::Data {
            arg,
            conform_to_ambient_indentation: false,
        }
    }

    /// Data whose multi-line output is re-indented to the insertion point
    pub fn conforming_data(arg: FormatArg) -> Self {
        Renderable::Data {
            arg,
            conform_to_ambient_indentation: true,
        }
    }

    /// Blank, or a composite with nothing but blanks inside
    pub fn is_blank(&self) -> bool {
        match self {
            Renderable::Blank => true,
            Renderable::Composite { children, .. } => children.iter().all(Renderable::is_blank),
            Renderable::Data { .. } | Renderable::Template(_) => false,
        }
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderable::Blank => f.write_str("Blank"),
            Renderable::Data {
                arg,
                conform_to_ambient_indentation,
            } => f
                .debug_struct("Data")
                .field("arg", arg)
                .field(
                    "conform_to_ambient_indentation",
                    conform_to_ambient_indentation,
                )
                .finish(),
            Renderable::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Renderable::Composite { children, joiner } => f
                .debug_struct("Composite")
                .field("children", children)
                .field("custom_joiner", &joiner.is_some())
                .finish(),
        }
    }
}
