// src/transform/fields.rs
//
// Per-field cleaning rules. Every function here is total: any input string
// maps to an output, nothing fails.

/// `1` when `value` equals `target` ignoring case, else `0`.
pub fn flag(value: Option<&str>, target: &str) -> u8 {
    match value {
        Some(v) if v.eq_ignore_ascii_case(target) => 1,
        _ => 0,
    }
}

/// Drop every `.`, then turn every `-` into `_`.
pub fn clean_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// Turn every `.` into `_`; the literal `unknown` (after the rewrite) becomes
/// missing.
pub fn clean_education(raw: Option<&str>) -> Option<String> {
    let cleaned = raw?.replace('.', "_");
    if cleaned == "unknown" {
        None
    } else {
        Some(cleaned)
    }
}
