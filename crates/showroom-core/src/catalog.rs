use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A vehicle or trim-grade record exposed by the catalog provider.
///
/// The engine treats entities as immutable snapshots: it reads `id`, `name`,
/// `price`, and the attribute bag, and never writes any of them. `attributes`
/// stays an open JSON object because each catalog ships its own key set; the
/// active [`crate::schema::AttributeSchema`] decides which keys matter and how
/// to type them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableEntity {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ComparableEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute insertion, mainly for fixtures and tests.
    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// An extracted, comparable value.
///
/// The source of truth for comparison is always this tagged form, never a
/// formatted display string. `Missing` is produced when an entity's bag lacks
/// the requested attribute; it compares equal to itself, so two entities that
/// both omit an attribute do not count as differing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Missing,
}

impl FieldValue {
    /// Lifts a JSON attribute value into the tagged union.
    ///
    /// Numbers that JSON cannot represent as `f64` (and any non-scalar value)
    /// degrade to their display string, which keeps extraction total.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(Value::Bool(b)) => FieldValue::Flag(*b),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => FieldValue::Number(f),
                None => FieldValue::Text(n.to_string()),
            },
            Some(other) => FieldValue::Text(other.to_string()),
        }
    }

    /// Default human-readable rendition, used when a field declares no
    /// `format` function of its own.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Missing => "—".to_string(),
        }
    }
}

/// An ordered catalog snapshot with O(1) id lookup.
///
/// Provider order is preserved; selection and window logic re-order entities
/// only through [`crate::view::sort_entities`], never in place here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: Vec<ComparableEntity>,
    by_id: FxHashMap<String, usize>,
}

impl Catalog {
    pub fn new(entities: Vec<ComparableEntity>) -> Self {
        let mut by_id = FxHashMap::default();
        for (idx, entity) in entities.iter().enumerate() {
            // First occurrence wins; a provider snapshot with a repeated id is
            // malformed and the duplicate row becomes unreachable by id.
            by_id.entry(entity.id.clone()).or_insert(idx);
        }
        Self { entities, by_id }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ComparableEntity> {
        self.by_id.get(id).map(|&idx| &self.entities[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComparableEntity> {
        self.entities.iter()
    }

    /// Resolves a list of ids into entities, silently skipping ids absent
    /// from this snapshot. Selections can outlive a catalog refresh, so an
    /// unknown id is stale data rather than an error.
    pub fn resolve<'a>(&'a self, ids: impl IntoIterator<Item = &'a str>) -> Vec<&'a ComparableEntity> {
        ids.into_iter().filter_map(|id| self.get(id)).collect()
    }
}
