//! Argument values substituted into templates

use chrono::{NaiveDate, NaiveDateTime};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Template;

/// Host value that renders through `Display`
///
/// Processors can recover the concrete type with [`CustomValue::as_any`].
pub trait CustomValue: fmt::Display + fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    /// Short name used in error messages
    fn kind(&self) -> &'static str {
        "custom"
    }
}

/// A value bound to a placeholder
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Nested template, rendered in place of the placeholder
    Template(Template),
    /// Sequence of templates; `None` entries are dropped before rendering
    Templates(Vec<Option<Template>>),
    Custom(Arc<dyn CustomValue>),
}

impl Value {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Template(_) => "template",
            Value::Templates(_) => "templates",
            Value::Custom(custom) => custom.kind(),
        }
    }

    pub fn custom(value: impl CustomValue) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Downcast a `Custom` payload
    pub fn downcast_ref<T: CustomValue>(&self) -> Option<&T> {
        match self {
            Value::Custom(custom) => custom.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => UInt,
    u16 => UInt,
    u32 => UInt,
    u64 => UInt,
    f32 => Float,
    f64 => Float,
    String => Str,
    &str => Str,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    Template => Template,
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<Vec<Template>> for Value {
    fn from(templates: Vec<Template>) -> Self {
        Value::Templates(templates.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Template>>> for Value {
    fn from(templates: Vec<Option<Template>>) -> Self {
        Value::Templates(templates)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Arc<dyn CustomValue>> for Value {
    fn from(value: Arc<dyn CustomValue>) -> Self {
        Value::Custom(value)
    }
}
