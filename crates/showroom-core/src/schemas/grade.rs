//! Trim-grade comparison schema, used by the grade-comparison section and
//! the grade-comparison overlay.

use crate::schema::{AttributeSchema, Extractor, Field, Section};

use super::{fmt_currency, fmt_mpg};

fn attr(key: &str) -> Extractor {
    Extractor::Attr(key.to_string())
}

pub fn schema() -> AttributeSchema {
    AttributeSchema::new(
        "grade",
        vec![
            Section::new(
                "Overview",
                vec![
                    Field::new("Grade", Extractor::Name).highlighted(),
                    Field::new("MSRP", Extractor::Price)
                        .highlighted()
                        .with_format(fmt_currency),
                ],
            ),
            Section::new(
                "Powertrain",
                vec![
                    Field::new("Engine Type", attr("engineType")).highlighted(),
                    Field::new("Horsepower", attr("horsepower")),
                    Field::new("Transmission", attr("transmission")),
                    Field::new("Drivetrain", attr("drivetrain")),
                    Field::new("Combined MPG", attr("mpgCombined")).with_format(fmt_mpg),
                ],
            ),
            Section::new(
                "Comfort & Convenience",
                vec![
                    Field::new("Seating Material", attr("seatingMaterial")),
                    Field::new("Heated Front Seats", attr("heatedSeats")),
                    Field::new("Moonroof", attr("moonroof")),
                    Field::new("Smart Key", attr("smartKey")),
                ],
            ),
            Section::new(
                "Audio & Connectivity",
                vec![
                    Field::new("Display Size", attr("displaySize")),
                    Field::new("Speakers", attr("speakers")),
                    Field::new("Wireless Charging", attr("wirelessCharging")),
                ],
            ),
            Section::new(
                "Safety",
                vec![
                    Field::new("Blind Spot Monitor", attr("blindSpotMonitor")),
                    Field::new("Parking Assist", attr("parkingAssist")),
                    Field::new("Airbags", attr("airbags")),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_fields_are_the_highlights() {
        let schema = schema();
        let highlighted: Vec<&str> = schema
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter(|f| f.highlight)
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Grade", "MSRP", "Engine Type"]);
    }
}
