use rustc_hash::FxHashSet;

use crate::catalog::{ComparableEntity, FieldValue};
use crate::schema::Field;

/// Normalized comparison key for a [`FieldValue`].
///
/// Diffing needs `Eq + Hash` over values that include `f64`, so numbers are
/// keyed by their bit pattern after collapsing `-0.0` into `0.0` and all NaN
/// payloads into one canonical NaN. Text compares exactly as extracted;
/// formatting never participates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey {
    Text(String),
    Number(u64),
    Flag(bool),
    Missing,
}

fn normalize(value: &FieldValue) -> ValueKey {
    match value {
        FieldValue::Text(s) => ValueKey::Text(s.clone()),
        FieldValue::Number(n) => {
            let canonical = if n.is_nan() {
                f64::NAN
            } else if *n == 0.0 {
                0.0
            } else {
                *n
            };
            ValueKey::Number(canonical.to_bits())
        }
        FieldValue::Flag(b) => ValueKey::Flag(*b),
        FieldValue::Missing => ValueKey::Missing,
    }
}

/// Whether `field`'s value varies across `entities`.
///
/// Pure and permutation-invariant; `false` whenever fewer than two entities
/// are compared. The caller decides the scope (this engine feeds it the
/// currently visible window, not the full selection).
pub fn has_difference(field: &Field, entities: &[&ComparableEntity]) -> bool {
    if entities.len() <= 1 {
        return false;
    }
    let mut seen = FxHashSet::default();
    for entity in entities {
        seen.insert(normalize(&field.value_of(entity)));
        if seen.len() > 1 {
            return true;
        }
    }
    false
}
