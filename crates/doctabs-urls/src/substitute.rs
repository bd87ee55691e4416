//! Ordered literal substitution over a code string.

/// Collects literal find/replace pairs and applies them in one pass.
///
/// Pairs are applied in insertion order; the whole pass borrows its input and
/// returns a new string, so it can be used as a pure code filter. For the
/// handful of placeholder patterns involved here, sequential replacement is
/// efficient enough that a pattern-matching dependency is not warranted.
///
/// # Example
///
/// ```
/// use doctabs_urls::Substitutions;
///
/// let mut subs = Substitutions::new();
/// subs.add("http://localhost:8001", "https://api.shop.dev");
/// assert_eq!(
///     subs.apply("GET http://localhost:8001/api/products"),
///     "GET https://api.shop.dev/api/products"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    /// Create an empty substitution set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair: every occurrence of `from` becomes `to`.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.pairs.push((from.into(), to.into()));
    }

    /// Apply all pairs to `code`, in insertion order.
    #[must_use]
    pub fn apply(&self, code: &str) -> String {
        let mut out = code.to_owned();
        for (from, to) in &self.pairs {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }

    /// Whether any pairs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_identity() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("unchanged"), "unchanged");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_single_pair() {
        let mut subs = Substitutions::new();
        subs.add("world", "universe");
        assert_eq!(subs.apply("hello world"), "hello universe");
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let mut subs = Substitutions::new();
        subs.add("a", "b");
        assert_eq!(subs.apply("a a a"), "b b b");
    }

    #[test]
    fn test_missing_pattern_ignored() {
        let mut subs = Substitutions::new();
        subs.add("foo", "bar");
        assert_eq!(subs.apply("hello"), "hello");
    }

    #[test]
    fn test_insertion_order() {
        let mut subs = Substitutions::new();
        subs.add("a", "bb");
        subs.add("bb", "c");
        assert_eq!(subs.apply("aaa"), "ccc");
    }

    #[test]
    fn test_input_not_mutated() {
        let mut subs = Substitutions::new();
        subs.add("x", "y");
        let input = "x marks the spot";
        let _ = subs.apply(input);
        assert_eq!(input, "x marks the spot");
    }
}
