//! Canonical recipe hashing.
//!
//! A recipe hash identifies a configuration independent of key order or
//! whitespace in the source JSON:
//!
//! ```text
//! recipe_hash = hex(BLAKE3(canonical_json(recipe)))
//! ```
//!
//! Canonical JSON sorts object keys, drops insignificant whitespace and prints
//! numbers in their shortest round-trip form.

use serde::Serialize;

use crate::error::SpecError;
use crate::recipe::{HeightmapRecipe, NoiseParams};

/// Computes the canonical BLAKE3 hash of a heightmap recipe.
///
/// # Example
/// ```
/// use isleforge_spec::HeightmapRecipe;
/// use isleforge_spec::hash::recipe_hash;
///
/// let hash = recipe_hash(&HeightmapRecipe::dense(64)).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn recipe_hash(recipe: &HeightmapRecipe) -> Result<String, SpecError> {
    serializable_hash(recipe)
}

/// Computes the canonical BLAKE3 hash of a noise parameter set.
pub fn noise_params_hash(params: &NoiseParams) -> Result<String, SpecError> {
    serializable_hash(params)
}

fn serializable_hash<T: Serialize>(value: &T) -> Result<String, SpecError> {
    let value = serde_json::to_value(value)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    blake3_hash(canonicalize_json(value).as_bytes())
}

/// Renders a JSON value in canonical form.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Null => out.push_str("null"),
        serde_json::Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        serde_json::Value::Number(n) => out.push_str(&format_number(n)),
        serde_json::Value::String(s) => write_string(s, out),
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                "0".to_string()
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", f as i64)
            } else {
                // Display for f64 is already the shortest round-trip form.
                format!("{}", f)
            }
        }
        _ => "null".to_string(),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
