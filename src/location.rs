//! URL fragment state and parsing helpers.
//!
//! Fragments keep their leading `#`, e.g. `#/page/2` or `#/show/42`.
//! Both route patterns use a 7-character prefix before the argument.

/// Length of `#/page/` and `#/show/`.
pub const ROUTE_PREFIX_LEN: usize = 7;

/// Normalize user input into a fragment: `""` and `"#"` become empty,
/// everything else gets exactly one leading `#`.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("#{}", trimmed)
    }
}

/// The part of a fragment after the fixed route prefix.
pub fn route_argument(fragment: &str) -> &str {
    fragment.get(ROUTE_PREFIX_LEN..).unwrap_or("")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    hash: String,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Store a new fragment. Returns `true` when it differs from the
    /// current one, i.e. when a fragment-change event would fire.
    pub fn set_hash(&mut self, input: &str) -> bool {
        let next = normalize(input);
        if next == self.hash {
            return false;
        }
        self.hash = next;
        true
    }
}
