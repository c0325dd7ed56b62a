//! Sparse projection of records onto a client-selected attribute list.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{Attribute, AttributeSchema};
use crate::value::FieldValue;

/// A record reduced to the requested attributes, in request order.
///
/// The identifier is read regardless of the requested attributes so callers
/// can correlate shaped output with its source record. It is not part of the
/// serialized attributes unless it was requested.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedRecord {
    identifier: Option<FieldValue>,
    attributes: Vec<(&'static str, FieldValue)>,
}

impl ShapedRecord {
    pub fn identifier(&self) -> Option<&FieldValue> {
        self.identifier.as_ref()
    }

    /// Looks up an attribute by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attribute names in output order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.attributes.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Serialize for ShapedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Resolves a comma-separated field list against `schema`.
///
/// Blank input selects every attribute. Unknown names are dropped and
/// repeated names keep their first position.
pub fn resolve_fields<'a, R>(fields: &str, schema: &'a AttributeSchema<R>) -> Vec<&'a Attribute<R>> {
    if fields.trim().is_empty() {
        return schema.attributes().collect();
    }

    let mut resolved: Vec<&Attribute<R>> = Vec::new();
    for token in fields.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match schema.resolve(token) {
            Some(attribute) => {
                if !resolved.iter().any(|a| a.name == attribute.name) {
                    resolved.push(attribute);
                }
            }
            None => tracing::debug!(token, "Ignoring unknown field"),
        }
    }
    resolved
}

fn project<R>(
    record: &R,
    attributes: &[&Attribute<R>],
    identifier: Option<&Attribute<R>>,
) -> ShapedRecord {
    ShapedRecord {
        identifier: identifier.map(|attribute| attribute.read(record)),
        attributes: attributes
            .iter()
            .map(|attribute| (attribute.name, attribute.read(record)))
            .collect(),
    }
}

/// Shapes one record to the attributes named in `fields`.
pub fn shape<R>(record: &R, fields: &str, schema: &AttributeSchema<R>) -> ShapedRecord {
    let attributes = resolve_fields(fields, schema);
    project(record, &attributes, schema.identifier())
}

/// Shapes every record, preserving input order. The field list is resolved once.
pub fn shape_all<R>(records: &[R], fields: &str, schema: &AttributeSchema<R>) -> Vec<ShapedRecord> {
    let attributes = resolve_fields(fields, schema);
    let identifier = schema.identifier();
    records
        .iter()
        .map(|record| project(record, &attributes, identifier))
        .collect()
}
