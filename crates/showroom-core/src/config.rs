use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::view::{SortKey, ViewMode};

/// Device/layout class supplied by the hosting screen.
///
/// Narrow layouts get fewer comparison columns and a one-column window; wide
/// layouts get the full table. The numbers are the observed production
/// parameters, overridable per surface via [`SurfaceConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutClass {
    Narrow,
    Wide,
}

impl LayoutClass {
    pub fn max_selected(&self) -> usize {
        match self {
            LayoutClass::Narrow => 3,
            LayoutClass::Wide => 4,
        }
    }

    pub fn window_size(&self) -> usize {
        match self {
            LayoutClass::Narrow => 1,
            LayoutClass::Wide => 3,
        }
    }
}

/// Per-surface configuration, serde-round-trippable so hosting apps can keep
/// it in their own JSON settings blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceConfig {
    /// Advisory floor; the engine never blocks deselection below it, but a
    /// hosting screen may read it to disable its own controls.
    pub min_selected: usize,
    pub max_selected: usize,
    pub window_size: usize,
    pub sort_by: SortKey,
    pub mode: ViewMode,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::for_layout(LayoutClass::Wide)
    }
}

impl SurfaceConfig {
    pub fn for_layout(layout: LayoutClass) -> Self {
        Self {
            min_selected: 0,
            max_selected: layout.max_selected(),
            window_size: layout.window_size(),
            sort_by: SortKey::default(),
            mode: ViewMode::default(),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }

    pub fn to_value(&self) -> Value {
        // Serialization of this plain struct cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layout_classes_carry_the_production_parameters() {
        let narrow = SurfaceConfig::for_layout(LayoutClass::Narrow);
        assert_eq!(narrow.max_selected, 3);
        assert_eq!(narrow.window_size, 1);

        let wide = SurfaceConfig::for_layout(LayoutClass::Wide);
        assert_eq!(wide.max_selected, 4);
        assert_eq!(wide.window_size, 3);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = SurfaceConfig {
            min_selected: 1,
            max_selected: 3,
            window_size: 2,
            sort_by: SortKey::Price,
            mode: ViewMode::Differences,
        };
        let back = SurfaceConfig::from_value(cfg.to_value()).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = SurfaceConfig::from_value(json!({ "sortBy": "price" })).unwrap();
        assert_eq!(cfg.sort_by, SortKey::Price);
        assert_eq!(cfg.max_selected, 4);
        assert_eq!(cfg.mode, ViewMode::All);
    }

    #[test]
    fn malformed_json_is_reported_not_panicked() {
        let err = SurfaceConfig::from_value(json!({ "sortBy": "horsepower" }));
        assert!(matches!(err, Err(Error::InvalidConfig { .. })));
    }
}
