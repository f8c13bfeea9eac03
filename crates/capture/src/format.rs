// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console argument values and message formatting.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One argument of a console call.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleArg {
    /// Plain value rendered with its string form
    Text(String),
    /// An error value, rendered as `"<name>: <message>"`
    Error { name: String, message: String },
    /// Structured value; objects and arrays render as JSON
    Value(Value),
    /// A value that could not be serialized, kept as its Debug rendering
    Opaque(String),
}

impl ConsoleArg {
    /// Any displayable value
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// An error with an explicit name, e.g. `("TypeError", "x is undefined")`
    pub fn named_error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            name: name.into(),
            message: message.into(),
        }
    }

    /// An error value named after its type.
    pub fn error<E: std::error::Error>(err: &E) -> Self {
        Self::named_error(short_type_name::<E>(), err.to_string())
    }

    /// A structured value. Falls back to the Debug rendering when the value
    /// cannot be represented as JSON (e.g. maps with non-string keys).
    pub fn object<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Self::Value(v),
            Err(err) => {
                tracing::trace!(error = %err, "console argument is not serializable");
                Self::Opaque(format!("{:?}", value))
            }
        }
    }

    /// Render this argument the way it appears in a formatted message.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) | Self::Opaque(s) => s.clone(),
            Self::Error { name, message } => format!("{}: {}", name, message),
            Self::Value(Value::String(s)) => s.clone(),
            // Display for Value is compact JSON.
            Self::Value(v) => v.to_string(),
        }
    }
}

impl fmt::Display for ConsoleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for ConsoleArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConsoleArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ConsoleArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Value> for ConsoleArg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<fmt::Arguments<'_>> for ConsoleArg {
    fn from(value: fmt::Arguments<'_>) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! text_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ConsoleArg {
            fn from(value: $ty) -> Self {
                Self::Text(value.to_string())
            }
        })*
    };
}

text_from!(bool, char, i32, i64, u32, u64, usize, f64);

/// Join rendered arguments with single spaces.
pub fn format_message(args: &[ConsoleArg]) -> String {
    args.iter()
        .map(ConsoleArg::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last path segment of a type name, without generic parameters.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
