//! Pair table validation: names and token identifiers.

use lumen_contrast::ContrastPair;
use std::collections::HashSet;

pub(crate) fn validate_pairs(errors: &mut Vec<String>, pairs: &[ContrastPair]) {
    let mut seen = HashSet::new();
    for (i, pair) in pairs.iter().enumerate() {
        if pair.name.trim().is_empty() {
            errors.push(format!("pairs[{i}].name is empty"));
        } else if !seen.insert(pair.name.as_str()) {
            errors.push(format!("duplicate pair name '{}'", pair.name));
        }
        if pair.foreground.trim().is_empty() {
            errors.push(format!("pairs[{i}].foreground is empty"));
        }
        if pair.background.trim().is_empty() {
            errors.push(format!("pairs[{i}].background is empty"));
        }
    }
}
