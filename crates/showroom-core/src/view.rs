use serde::{Deserialize, Serialize};

use crate::catalog::ComparableEntity;
use crate::diff::has_difference;
use crate::schema::{AttributeSchema, Section};

/// Which rows of the schema a surface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Highlights,
    Differences,
}

/// Column ordering of the compared entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
}

/// Stable ascending sort of the compared entities.
///
/// `sort_by` on slices is stable, so entities comparing equal keep their
/// selection-insertion order. Prices are plain floats from catalog data;
/// `total_cmp` keeps the sort total even if a NaN price slips in.
pub fn sort_entities<'a>(
    entities: &[&'a ComparableEntity],
    sort_by: SortKey,
) -> Vec<&'a ComparableEntity> {
    let mut sorted = entities.to_vec();
    match sort_by {
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
    sorted
}

/// Projects the schema down to the rows the active view mode keeps.
///
/// - `All` returns the schema's sections unchanged.
/// - `Highlights` keeps fields flagged as highlights.
/// - `Differences` keeps fields whose values vary across `visible_entities`
///   (the windowed subset, not the whole selection).
///
/// Sections left with no fields are dropped; section and field order is
/// preserved throughout.
pub fn filter_sections(
    schema: &AttributeSchema,
    mode: ViewMode,
    visible_entities: &[&ComparableEntity],
) -> Vec<Section> {
    match mode {
        ViewMode::All => schema.sections.clone(),
        ViewMode::Highlights => retain_fields(schema, |field| field.highlight),
        ViewMode::Differences => {
            retain_fields(schema, |field| has_difference(field, visible_entities))
        }
    }
}

fn retain_fields(
    schema: &AttributeSchema,
    mut keep: impl FnMut(&crate::schema::Field) -> bool,
) -> Vec<Section> {
    schema
        .sections
        .iter()
        .filter_map(|section| {
            let fields: Vec<_> = section.fields.iter().filter(|f| keep(f)).cloned().collect();
            if fields.is_empty() {
                None
            } else {
                Some(Section {
                    title: section.title.clone(),
                    fields,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Extractor, Field};
    use serde_json::json;

    fn schema() -> AttributeSchema {
        AttributeSchema::new(
            "test",
            vec![
                Section::new(
                    "Overview",
                    vec![
                        Field::new("Name", Extractor::Name).highlighted(),
                        Field::new("MSRP", Extractor::Price).highlighted(),
                    ],
                ),
                Section::new(
                    "Powertrain",
                    vec![Field::new(
                        "Engine Type",
                        Extractor::Attr("engineType".to_string()),
                    )],
                ),
            ],
        )
    }

    fn fleet() -> Vec<ComparableEntity> {
        vec![
            ComparableEntity::new("a", "A", 30000.0).with_attr("engineType", json!("Hybrid")),
            ComparableEntity::new("b", "B", 31000.0).with_attr("engineType", json!("Hybrid")),
            ComparableEntity::new("c", "C", 32000.0).with_attr("engineType", json!("Petrol")),
        ]
    }

    #[test]
    fn all_mode_returns_the_schema_unchanged() {
        let schema = schema();
        let fleet = fleet();
        let visible: Vec<&ComparableEntity> = fleet.iter().collect();
        let sections = filter_sections(&schema, ViewMode::All, &visible);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].fields.len(), 2);
        assert_eq!(sections[1].fields.len(), 1);
    }

    #[test]
    fn highlights_are_a_subset_of_all_and_drop_empty_sections() {
        let schema = schema();
        let fleet = fleet();
        let visible: Vec<&ComparableEntity> = fleet.iter().collect();

        let all = filter_sections(&schema, ViewMode::All, &visible);
        let highlights = filter_sections(&schema, ViewMode::Highlights, &visible);

        // "Powertrain" has no highlighted fields and disappears entirely.
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].title, "Overview");

        let all_labels: Vec<&str> = all
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.label.as_str()))
            .collect();
        for section in &highlights {
            for field in &section.fields {
                assert!(all_labels.contains(&field.label.as_str()));
            }
        }
    }

    #[test]
    fn differences_mode_is_window_scoped() {
        let schema = schema();
        let fleet = fleet();

        let trio: Vec<&ComparableEntity> = fleet.iter().collect();
        let sections = filter_sections(&schema, ViewMode::Differences, &trio);
        let labels: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.label.as_str()))
            .collect();
        assert!(labels.contains(&"Engine Type"));

        // Narrow the window to the two hybrids: the field drops out.
        let pair: Vec<&ComparableEntity> = fleet[..2].iter().collect();
        let sections = filter_sections(&schema, ViewMode::Differences, &pair);
        let labels: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.label.as_str()))
            .collect();
        assert!(!labels.contains(&"Engine Type"));
    }

    #[test]
    fn sort_by_price_orders_ascending() {
        let le = ComparableEntity::new("le", "LE", 32500.0);
        let xle = ComparableEntity::new("xle", "XLE", 35500.0);
        let sorted = sort_entities(&[&xle, &le], SortKey::Price);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["LE", "XLE"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let a = ComparableEntity::new("a", "Base", 30000.0);
        let b = ComparableEntity::new("b", "Base", 30000.0);
        let c = ComparableEntity::new("c", "Base", 30000.0);

        let once = sort_entities(&[&b, &a, &c], SortKey::Name);
        let twice = sort_entities(&once, SortKey::Name);
        let ids: Vec<&str> = once.iter().map(|e| e.id.as_str()).collect();
        let ids_again: Vec<&str> = twice.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(ids, ids_again);
    }
}
