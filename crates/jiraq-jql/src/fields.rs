//! Field capability metadata
//!
//! The single source of truth for remote field names and legal operators
//! per entity type. Each queryable type declares a static table of
//! [`FieldSpec`]s; the [`FieldRegistry`] builds a lookup table from it
//! lazily, once per type, and caches it for the lifetime of the process.
//!
//! Capability flags are the sole validation mechanism: the compiler
//! rejects an operator the field does not support before any network
//! round trip, and there is no secondary check at the remote boundary.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Operators a field is allowed to participate in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `=`, `!=`, `>`, `<`, `>=`, `<=` against a literal
    Comparable,
    /// Usable in `ORDER BY` clauses
    Sortable,
    /// Text search via `~`
    Contains,
    /// Membership via `in` / `not in`
    Include,
    /// Historical value check via `was`
    Was,
    /// Historical membership via `was in`
    WasInclude,
    /// Change detection via `changed`
    Changed,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comparable => "Comparable",
            Self::Sortable => "Sortable",
            Self::Contains => "Contains",
            Self::Include => "Include",
            Self::Was => "Was",
            Self::WasInclude => "WasInclude",
            Self::Changed => "Changed",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared metadata for one queryable property of an entity type
///
/// These are the entries a type lists in [`Queryable::field_specs`]; the
/// registry turns them into [`FieldDescriptor`]s keyed by property name.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Property name on the local record type
    pub property: &'static str,
    /// Name the remote query language knows the field by
    pub remote_name: &'static str,
    /// Operators the remote service accepts for this field
    pub capabilities: &'static [Capability],
}

impl FieldSpec {
    pub const fn new(property: &'static str, remote_name: &'static str) -> Self {
        Self {
            property,
            remote_name,
            capabilities: &[],
        }
    }

    pub const fn with(mut self, capabilities: &'static [Capability]) -> Self {
        self.capabilities = capabilities;
        self
    }
}

/// Resolved metadata for one queryable property
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Name the remote query language knows the field by
    pub remote_name: &'static str,
    /// Operators the remote service accepts for this field
    capabilities: &'static [Capability],
}

impl FieldDescriptor {
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.capabilities
    }
}

/// Types whose instances can be searched remotely
///
/// Implementations declare the entity's queryable properties; everything
/// else (descriptor construction, caching, lookup) is handled by the
/// registry.
pub trait Queryable {
    /// Entity name used in logs and error messages
    fn entity_name() -> &'static str;

    /// Declared per-property metadata, scanned once on first compilation
    fn field_specs() -> &'static [FieldSpec];
}

/// Immutable per-type lookup table built from a type's field specs
#[derive(Debug)]
pub struct FieldTable {
    entity_name: &'static str,
    by_property: HashMap<&'static str, FieldDescriptor>,
}

impl FieldTable {
    fn build<T: Queryable>() -> Self {
        let mut by_property = HashMap::new();
        for spec in T::field_specs() {
            by_property.insert(
                spec.property,
                FieldDescriptor {
                    remote_name: spec.remote_name,
                    capabilities: spec.capabilities,
                },
            );
        }
        Self {
            entity_name: T::entity_name(),
            by_property,
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Look up a property's descriptor; `None` triggers the compiler's
    /// raw-name fallback (custom fields have no declared entry).
    pub fn descriptor(&self, property: &str) -> Option<&FieldDescriptor> {
        self.by_property.get(property)
    }

    pub fn len(&self) -> usize {
        self.by_property.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_property.is_empty()
    }
}

/// Process-lifetime cache of field tables, keyed by entity type
///
/// Populated at most once per type and never mutated afterwards, so
/// concurrent reads from multiple compiling threads are safe.
static TABLES: Lazy<RwLock<HashMap<TypeId, Arc<FieldTable>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Lazily-built, type-keyed registry of [`FieldTable`]s
pub struct FieldRegistry;

impl FieldRegistry {
    /// Get (building on first use) the field table for an entity type
    pub fn table_for<T: Queryable + 'static>() -> Arc<FieldTable> {
        let key = TypeId::of::<T>();
        if let Some(table) = TABLES.read().get(&key) {
            return Arc::clone(table);
        }
        let mut tables = TABLES.write();
        // Another thread may have built it between the read and the write lock
        Arc::clone(
            tables
                .entry(key)
                .or_insert_with(|| Arc::new(FieldTable::build::<T>())),
        )
    }
}
