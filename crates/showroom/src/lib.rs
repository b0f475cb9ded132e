#![forbid(unsafe_code)]

//! `showroom` is the headless comparison engine behind the vehicle-catalog
//! comparison surfaces (grade comparison, cross-model comparison, and the
//! grade overlay).
//!
//! This crate re-exports the whole engine from `showroom-core` and adds the
//! small conveniences a hosting app wants at startup: decoding a provider's
//! JSON payload into a [`Catalog`] and opening a ready-to-use surface in one
//! call.

pub use showroom_core::*;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Engine(#[from] showroom_core::Error),

    #[error("Invalid catalog payload: {message}")]
    InvalidCatalog { message: String },
}

pub type HostResult<T> = std::result::Result<T, HostError>;

/// Decodes a catalog provider's JSON payload (an array of entities) into a
/// [`Catalog`] snapshot.
pub fn catalog_from_json(payload: serde_json::Value) -> HostResult<Catalog> {
    let entities: Vec<ComparableEntity> =
        serde_json::from_value(payload).map_err(|e| HostError::InvalidCatalog {
            message: e.to_string(),
        })?;
    Ok(Catalog::new(entities))
}

/// One-call setup for a hosting screen: built-in schemas, layout-sized
/// bounds, optional persisted seed selection.
pub fn open_comparison<S: AsRef<str>>(
    schema_id: &str,
    catalog: Catalog,
    layout: LayoutClass,
    seed: Option<&[S]>,
) -> HostResult<ComparisonSurface> {
    let engine = Engine::new();
    let mut surface = engine.open_surface_for_layout(schema_id, catalog, layout)?;
    if let Some(ids) = seed {
        surface.set_from_external(ids.iter().map(|s| s.as_ref()));
    }
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!([
            { "id": "le", "name": "LE", "price": 32500.0,
              "attributes": { "engineType": "Hybrid" } },
            { "id": "xle", "name": "XLE", "price": 35500.0,
              "attributes": { "engineType": "Petrol" } }
        ])
    }

    #[test]
    fn decodes_a_provider_payload_into_a_catalog() {
        let catalog = catalog_from_json(payload()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("xle").unwrap().name, "XLE");
    }

    #[test]
    fn rejects_a_malformed_payload() {
        let err = catalog_from_json(json!({ "not": "an array" }));
        assert!(matches!(err, Err(HostError::InvalidCatalog { .. })));
    }

    #[test]
    fn opens_a_seeded_comparison_in_one_call() {
        let catalog = catalog_from_json(payload()).unwrap();
        let surface =
            open_comparison("grade", catalog, LayoutClass::Wide, Some(&["xle", "gone"])).unwrap();
        assert_eq!(surface.current_selection(), vec!["xle"]);
    }

    #[test]
    fn unknown_schema_ids_surface_the_engine_error() {
        let err = open_comparison::<&str>("boat", Catalog::default(), LayoutClass::Wide, None);
        assert!(matches!(err, Err(HostError::Engine(_))));
    }
}
