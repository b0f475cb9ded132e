#![forbid(unsafe_code)]

//! Headless vehicle-comparison engine.
//!
//! One engine backs every "compare vehicles/grades" surface of the catalog
//! frontend: a bounded, ordered selection of entity ids; a schema-driven
//! attribute diff; view-mode filtering; and a windowed view over the sorted
//! selection. Surfaces differ only in the [`AttributeSchema`] they supply and
//! in how they render the resulting sections.
//!
//! Design goals:
//! - every operation is total (navigation clamps, over-limit toggles no-op)
//! - pure, synchronous state transitions; no I/O, no background work
//! - full recomputation per change (at most a handful of entities compared)

pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod schema;
pub mod schemas;
pub mod selection;
pub mod surface;
pub mod view;
pub mod window;

pub use catalog::{Catalog, ComparableEntity, FieldValue};
pub use config::{LayoutClass, SurfaceConfig};
pub use diff::has_difference;
pub use error::{Error, Result};
pub use schema::{AttributeSchema, Extractor, Field, Section, SchemaRegistry};
pub use selection::{SelectionEvent, SelectionSet, ToggleOutcome};
pub use surface::{ComparisonSurface, SelectionListener};
pub use view::{SortKey, ViewMode, filter_sections, sort_entities};
pub use window::WindowState;

/// Site-wide entry point: the schema registry plus default surface config.
///
/// Hosting apps typically build one `Engine` at startup, register any custom
/// schemas next to the built-ins, and open a [`ComparisonSurface`] per
/// comparison screen.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: SchemaRegistry,
    site_config: SurfaceConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            registry: SchemaRegistry::default_showroom(),
            site_config: SurfaceConfig::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the site-wide defaults newly opened surfaces start from.
    pub fn with_site_config(mut self, config: SurfaceConfig) -> Self {
        self.site_config = config;
        self
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn register_schema(&mut self, schema: AttributeSchema) -> Result<()> {
        self.registry.register(schema)
    }

    /// Opens a surface over `catalog` using the named schema and the
    /// site-wide config. This is the only engine seam that can fail: the
    /// schema id must have been registered.
    pub fn open_surface(&self, schema_id: &str, catalog: Catalog) -> Result<ComparisonSurface> {
        let schema = self.registry.get(schema_id)?.clone();
        Ok(ComparisonSurface::open(
            catalog,
            schema,
            self.site_config.clone(),
        ))
    }

    /// Opens a surface sized for the given layout class instead of the
    /// site-wide defaults.
    pub fn open_surface_for_layout(
        &self,
        schema_id: &str,
        catalog: Catalog,
        layout: LayoutClass,
    ) -> Result<ComparisonSurface> {
        let schema = self.registry.get(schema_id)?.clone();
        let mut config = SurfaceConfig::for_layout(layout);
        config.min_selected = self.site_config.min_selected;
        Ok(ComparisonSurface::open(catalog, schema, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_opens_surfaces_for_registered_schemas_only() {
        let engine = Engine::new();
        assert!(engine.open_surface("grade", Catalog::default()).is_ok());
        assert!(engine.open_surface("vehicle", Catalog::default()).is_ok());
        assert!(matches!(
            engine.open_surface("motorcycle", Catalog::default()),
            Err(Error::UnknownSchema { .. })
        ));
    }

    #[test]
    fn layout_specific_surfaces_pick_up_the_class_parameters() {
        let engine = Engine::new();
        let surface = engine
            .open_surface_for_layout("grade", Catalog::default(), LayoutClass::Narrow)
            .unwrap();
        assert_eq!(surface.config().max_selected, 3);
        assert_eq!(surface.config().window_size, 1);
    }
}
