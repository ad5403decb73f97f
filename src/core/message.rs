//! Entry message parts

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single message part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Value {
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Ordered message parts of an entry.
///
/// Formatted emissions produce a single string part. When rendered, a space
/// separates two adjacent parts only if neither of them is a string, so
/// `["retry ", 3, 5]` renders as `retry 3 5` and `["a", "b"]` as `ab`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    parts: Vec<Value>,
}

impl Message {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Message made of a single pre-formatted string.
    pub fn formatted(args: fmt::Arguments<'_>) -> Self {
        let text = match args.as_str() {
            Some(s) => s.to_string(),
            None => fmt::format(args),
        };
        Self {
            parts: vec![Value::String(text)],
        }
    }

    #[must_use]
    pub fn with(mut self, part: impl Into<Value>) -> Self {
        self.parts.push(part.into());
        self
    }

    pub fn push(&mut self, part: impl Into<Value>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[Value] {
        &self.parts
    }

    pub fn first(&self) -> Option<&Value> {
        self.parts.first()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&Value> = None;
        for part in &self.parts {
            if let Some(p) = prev {
                if !p.is_string() && !part.is_string() {
                    f.write_str(" ")?;
                }
            }
            write!(f, "{}", part)?;
            prev = Some(part);
        }
        Ok(())
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::new().with(s)
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::new().with(s)
    }
}

impl From<Value> for Message {
    fn from(v: Value) -> Self {
        Message { parts: vec![v] }
    }
}

impl From<Vec<Value>> for Message {
    fn from(parts: Vec<Value>) -> Self {
        Message { parts }
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for Message {
    fn from(parts: [V; N]) -> Self {
        Message {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Message::formatted(args)
    }
}

impl<V: Into<Value>> FromIterator<V> for Message {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Message {
            parts: iter.into_iter().map(Into::into).collect(),
        }
    }
}
