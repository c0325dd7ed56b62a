//! Per-type attribute tables and the process-wide schema registry.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::value::FieldValue;

/// Reads one attribute out of a record.
pub type Getter<R> = fn(&R) -> FieldValue;

/// A named, readable attribute of record type `R`.
pub struct Attribute<R> {
    /// Declared attribute name, as it appears in shaped output.
    pub name: &'static str,
    /// Accessor for the attribute value.
    pub get: Getter<R>,
}

impl<R> Attribute<R> {
    pub const fn new(name: &'static str, get: Getter<R>) -> Self {
        Self { name, get }
    }

    pub fn read(&self, record: &R) -> FieldValue {
        (self.get)(record)
    }
}

impl<R> Clone for Attribute<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Attribute<R> {}

impl<R> fmt::Debug for Attribute<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute").field("name", &self.name).finish()
    }
}

/// Capability implemented by every record type that can be ordered and shaped.
///
/// Implementors list their attributes once; the table is cached per type
/// by [`schema_for`].
pub trait Record: Sized + 'static {
    /// Attribute always carried alongside a shaped record.
    const ID_ATTRIBUTE: &'static str = "Id";

    /// Attribute used when a client ordering expression resolves to nothing.
    const DEFAULT_ORDER: &'static str;

    /// The readable attributes of this type, in declaration order.
    fn attributes() -> Vec<Attribute<Self>>;
}

/// Immutable lookup table of a record type's attributes.
///
/// Names resolve case-insensitively. When the attribute table declares a
/// name twice, the first declaration wins.
pub struct AttributeSchema<R> {
    attributes: Vec<Attribute<R>>,
    by_name: HashMap<String, usize>,
    id_index: Option<usize>,
}

impl<R: Record> AttributeSchema<R> {
    /// Builds the schema from `R::attributes()`.
    pub fn build() -> Self {
        let attributes = R::attributes();
        let mut by_name = HashMap::with_capacity(attributes.len());
        for (index, attr) in attributes.iter().enumerate() {
            by_name.entry(attr.name.to_lowercase()).or_insert(index);
        }
        let id_index = by_name.get(&R::ID_ATTRIBUTE.to_lowercase()).copied();
        Self {
            attributes,
            by_name,
            id_index,
        }
    }
}

impl<R> AttributeSchema<R> {
    /// Resolves `name` case-insensitively. Surrounding whitespace is ignored.
    pub fn resolve(&self, name: &str) -> Option<&Attribute<R>> {
        self.position(name).map(|index| &self.attributes[index])
    }

    /// Index of the attribute called `name` in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.by_name.get(&key).copied()
    }

    /// Attributes in declaration order, without duplicate names.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute<R>> {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(index, attr)| self.by_name.get(&attr.name.to_lowercase()) == Some(index))
            .map(|(_, attr)| attr)
    }

    /// Declared attribute names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.attributes().map(|attr| attr.name).collect()
    }

    /// The identifier attribute, if the record type declares one.
    pub fn identifier(&self) -> Option<&Attribute<R>> {
        self.id_index.map(|index| &self.attributes[index])
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<R> fmt::Debug for AttributeSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSchema")
            .field("attributes", &self.attributes)
            .field("id_index", &self.id_index)
            .finish()
    }
}

type Registry = DashMap<TypeId, Arc<dyn Any + Send + Sync>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(DashMap::new)
}

/// Returns the cached schema for `R`, building it on first use.
///
/// Racing first calls may each build a schema; the first one stored is
/// kept and handed to every caller.
pub fn schema_for<R: Record>() -> Arc<AttributeSchema<R>> {
    let key = TypeId::of::<R>();
    let cached = registry().get(&key).map(|entry| Arc::clone(entry.value()));
    if let Some(schema) = cached.and_then(|any| any.downcast::<AttributeSchema<R>>().ok()) {
        return schema;
    }

    let built: Arc<dyn Any + Send + Sync> = Arc::new(AttributeSchema::<R>::build());
    let stored = Arc::clone(registry().entry(key).or_insert(built).value());
    tracing::debug!(
        record = std::any::type_name::<R>(),
        "Registered attribute schema"
    );
    match stored.downcast::<AttributeSchema<R>>() {
        Ok(schema) => schema,
        Err(_) => Arc::new(AttributeSchema::build()),
    }
}

/// Builds and caches the schema for `R` ahead of the first request.
pub fn warm<R: Record>() {
    let _ = schema_for::<R>();
}
