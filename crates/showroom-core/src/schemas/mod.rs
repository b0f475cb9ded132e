//! Built-in attribute schemas for the two production comparison surfaces.
//!
//! Each module declares one schema as plain data; nothing outside these files
//! changes when a field is added, removed, or re-ordered.

pub mod grade;
pub mod vehicle;

use crate::catalog::FieldValue;

/// Groups a whole number into thousands: `12000` -> `"12,000"`.
pub(crate) fn group_thousands(whole: i64) -> String {
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shared currency formatter: whole-dollar USD with thousands separators.
pub(crate) fn fmt_currency(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => format!("${}", group_thousands(n.round() as i64)),
        other => other.display(),
    }
}

/// Shared fuel-economy formatter.
pub(crate) fn fmt_mpg(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => format!("{n} MPG"),
        other => other.display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_inserts_thousands_separators() {
        assert_eq!(fmt_currency(&FieldValue::Number(32500.0)), "$32,500");
        assert_eq!(fmt_currency(&FieldValue::Number(950.0)), "$950");
        assert_eq!(fmt_currency(&FieldValue::Number(1250000.0)), "$1,250,000");
        assert_eq!(fmt_currency(&FieldValue::Missing), "—");
    }
}
