//! @ai:module:intent Input records consumed by report generators
//! @ai:module:layer domain
//! @ai:module:public_api Record, parse_records, load_records
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// @ai:intent One row of report input with the fields generators consume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// Any other input fields, kept for callers but never rendered
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// @ai:intent Create a record with no extra fields
    /// @ai:effects pure
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// @ai:intent Attach an extra field that generators will ignore
    /// @ai:effects pure
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// @ai:intent Validate a JSON value as a record
    /// @ai:pre index is the position of value in its input sequence
    /// @ai:post Ok result has the integer id and string name of value
    /// @ai:example (0, {"id":1,"name":"A"}) -> Ok(Record { id: 1, name: "A" })
    /// @ai:example (2, {"name":"A"}) -> Err(MalformedRecord { index: 2 })
    /// @ai:effects pure
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| malformed(index, "expected an object"))?;

        let id = match object.get("id") {
            Some(id) => match id.as_i64() {
                Some(id) => id,
                None if id.is_u64() => {
                    return Err(malformed(index, "field `id` is out of range"))
                }
                None => return Err(malformed(index, "field `id` must be an integer")),
            },
            None => return Err(malformed(index, "missing field `id`")),
        };

        let name = match object.get("name") {
            Some(name) => name
                .as_str()
                .ok_or_else(|| malformed(index, "field `name` must be a string"))?
                .to_string(),
            None => return Err(malformed(index, "missing field `name`")),
        };

        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self { id, name, extra })
    }
}

fn malformed(index: usize, reason: &str) -> Error {
    Error::MalformedRecord {
        index,
        reason: reason.to_string(),
    }
}

/// @ai:intent Parse a JSON array of records, preserving input order
/// @ai:pre input is JSON text
/// @ai:post result has one record per array element, same order
/// @ai:effects pure
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(input)?;

    let items = value
        .as_array()
        .ok_or_else(|| malformed(0, "expected a JSON array of records"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| Record::from_value(index, item))
        .collect()
}

/// @ai:intent Load records from a JSON file
/// @ai:effects fs:read
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(&content)
}
