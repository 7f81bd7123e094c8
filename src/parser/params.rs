//! Declared parameter list decomposition: `a: 1, b, c: red`.

use crate::model::Parameter;

/// Split a raw parameter list on commas, then each piece on its first colon.
///
/// Separators are not nesting-aware: a comma inside a default value splits
/// it in two.
pub fn parse(raw: &str) -> Vec<Parameter> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .map(|part| {
            let part = part.trim();
            match part.split_once(':') {
                Some((name, default)) => Parameter {
                    name: name.trim().to_string(),
                    default_value: Some(default.trim().to_string()),
                },
                None => Parameter {
                    name: part.to_string(),
                    default_value: None,
                },
            }
        })
        .collect()
}
