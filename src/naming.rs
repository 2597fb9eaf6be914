//! Display names derived from the company name.
//!
//! ## Initials
//!
//! The header and footer show a two-letter mark built from the company name:
//! - `"Destiny's Tranfer LLC"` → `"DT"` (first letters of the first two words)
//! - `"Acme"` → `"AC"` (single word: its first two letters)
//! - `""` / `"   "` → `"DT"` (fallback mark)

/// Mark shown when the company name is blank.
pub const FALLBACK_INITIALS: &str = "DT";

/// Two-letter uppercase mark for a company name.
pub fn company_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => FALLBACK_INITIALS.to_string(),
        [single] => single.chars().take(2).flat_map(char::to_uppercase).collect(),
        many => many
            .iter()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect(),
    }
}
