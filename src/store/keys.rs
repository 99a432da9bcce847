//! Storage key scheme
//!
//! Keys are shared between the index, capsule and progress repositories and
//! must stay stable: existing installs already have data under them.

/// Key holding the ordered list of index entries.
pub const INDEX_KEY: &str = "pc_capsules_index";

/// Key holding the full capsule record for `id`.
pub fn capsule_key(id: &str) -> String {
    format!("pc_cap_{}", id)
}

/// Key holding the progress record for capsule `id`.
pub fn progress_key(id: &str) -> String {
    format!("pc_progress_{}", id)
}
