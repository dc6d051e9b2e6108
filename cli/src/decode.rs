//! Multi-document YAML decoding.

use crate::error::DecodeError;
use res::Document;
use serde::Deserialize;
use serde_yaml::Value;
use std::io::Read;

/// Iterator over the mapping documents of a YAML stream.
///
/// Empty documents (`---` with nothing after it) are skipped. The first
/// error ends the iteration.
pub struct Documents<'de> {
    inner: serde_yaml::Deserializer<'de>,
    failed: bool,
}

impl<'de> Documents<'de> {
    pub fn from_reader<R: Read + 'de>(reader: R) -> Self {
        Self {
            inner: serde_yaml::Deserializer::from_reader(reader),
            failed: false,
        }
    }
}

impl Iterator for Documents<'_> {
    type Item = Result<Document, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let doc = self.inner.next()?;
            let decoded = match Value::deserialize(doc) {
                Ok(Value::Null) => continue,
                Ok(Value::Mapping(mapping)) => Ok(mapping),
                Ok(other) => Err(DecodeError::NotAMapping(describe(&other))),
                Err(e) => Err(e.into()),
            };
            self.failed = decoded.is_err();
            return Some(decoded);
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
