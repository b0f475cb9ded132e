//! Full-vehicle comparison schema, used by the cross-model comparison table.

use crate::catalog::FieldValue;
use crate::schema::{AttributeSchema, Extractor, Field, Section};

use super::{fmt_currency, fmt_mpg};

fn attr(key: &str) -> Extractor {
    Extractor::Attr(key.to_string())
}

fn fmt_towing(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => format!("{} lbs", super::group_thousands(n.round() as i64)),
        other => other.display(),
    }
}

pub fn schema() -> AttributeSchema {
    AttributeSchema::new(
        "vehicle",
        vec![
            Section::new(
                "Overview",
                vec![
                    Field::new("Model", Extractor::Name).highlighted(),
                    Field::new("Starting MSRP", Extractor::Price)
                        .highlighted()
                        .with_format(fmt_currency),
                    Field::new("Body Style", attr("bodyStyle")).highlighted(),
                    Field::new("Seating Capacity", attr("seats")).highlighted(),
                ],
            ),
            Section::new(
                "Performance",
                vec![
                    Field::new("Engine Type", attr("engineType")),
                    Field::new("Horsepower", attr("horsepower")),
                    Field::new("Drivetrain", attr("drivetrain")),
                ],
            ),
            Section::new(
                "Efficiency",
                vec![
                    Field::new("City MPG", attr("mpgCity")).with_format(fmt_mpg),
                    Field::new("Highway MPG", attr("mpgHighway")).with_format(fmt_mpg),
                    Field::new("Fuel Tank", attr("fuelTank")),
                ],
            ),
            Section::new(
                "Capability",
                vec![
                    Field::new("Towing Capacity", attr("towingCapacity")).with_format(fmt_towing),
                    Field::new("Cargo Volume", attr("cargoVolume")),
                    Field::new("Ground Clearance", attr("groundClearance")),
                ],
            ),
        ],
    )
}
