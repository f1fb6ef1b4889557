//! Name filter built from a comma-separated list of substrings.

/// Case-insensitive substring filter. All tokens must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    tokens: Vec<String>,
}

impl NameFilter {
    /// Parse `"a, B,c"` into the lowercased, trimmed tokens `a`, `b`, `c`.
    /// An empty string yields a filter that accepts everything.
    pub fn parse(filter: &str) -> Self {
        if filter.is_empty() {
            return Self::default();
        }
        let tokens = filter
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        self.tokens.iter().all(|token| name.contains(token.as_str()))
    }
}
