use indexmap::IndexMap;

use crate::catalog::{ComparableEntity, FieldValue};
use crate::error::{Error, Result};

/// How a field pulls its value out of an entity.
///
/// Most fields read straight from the attribute bag; `Name` and `Price` read
/// the typed entity columns; `Custom` exists for derived values (e.g. a
/// computed price-per-seat) without widening the entity model.
#[derive(Debug, Clone)]
pub enum Extractor {
    Name,
    Price,
    Attr(String),
    Custom(fn(&ComparableEntity) -> FieldValue),
}

impl Extractor {
    pub fn extract(&self, entity: &ComparableEntity) -> FieldValue {
        match self {
            Extractor::Name => FieldValue::Text(entity.name.clone()),
            Extractor::Price => FieldValue::Number(entity.price),
            Extractor::Attr(key) => FieldValue::from_json(entity.attributes.get(key)),
            Extractor::Custom(f) => f(entity),
        }
    }
}

pub type FormatFn = fn(&FieldValue) -> String;

/// One comparable row in a section.
#[derive(Debug, Clone)]
pub struct Field {
    pub label: String,
    pub extract: Extractor,
    /// Marks the field as a headline row kept by the `highlights` view mode.
    pub highlight: bool,
    pub format: Option<FormatFn>,
}

impl Field {
    pub fn new(label: impl Into<String>, extract: Extractor) -> Self {
        Self {
            label: label.into(),
            extract,
            highlight: false,
            format: None,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn with_format(mut self, format: FormatFn) -> Self {
        self.format = Some(format);
        self
    }

    pub fn value_of(&self, entity: &ComparableEntity) -> FieldValue {
        self.extract.extract(entity)
    }

    /// Formatted rendition for display. Comparison never goes through this;
    /// diffing always compares the raw extracted [`FieldValue`].
    pub fn display_value(&self, entity: &ComparableEntity) -> String {
        let value = self.value_of(entity);
        match self.format {
            Some(f) => f(&value),
            None => value.display(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// An ordered set of sections declaring what is comparable for one surface.
///
/// Adding a field here is the whole cost of extending a comparison screen;
/// selection, windowing, diffing, and filtering are schema-agnostic.
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub id: String,
    pub sections: Vec<Section>,
}

impl AttributeSchema {
    pub fn new(id: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            sections,
        }
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// Named schema registry shared by all comparison surfaces.
///
/// Registration order is preserved so hosting screens can enumerate schemas
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, AttributeSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in production schemas.
    pub fn default_showroom() -> Self {
        let mut reg = Self::new();
        // Registration order mirrors the order the surfaces shipped in.
        reg.register(crate::schemas::grade::schema())
            .expect("builtin grade schema registers once");
        reg.register(crate::schemas::vehicle::schema())
            .expect("builtin vehicle schema registers once");
        reg
    }

    pub fn register(&mut self, schema: AttributeSchema) -> Result<()> {
        if self.schemas.contains_key(&schema.id) {
            return Err(Error::DuplicateSchema {
                schema_id: schema.id,
            });
        }
        self.schemas.insert(schema.id.clone(), schema);
        Ok(())
    }

    pub fn get(&self, schema_id: &str) -> Result<&AttributeSchema> {
        self.schemas
            .get(schema_id)
            .ok_or_else(|| Error::UnknownSchema {
                schema_id: schema_id.to_string(),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}
