//! Case folding shared by queries and labels.

/// A string folded per the configured case rule, one `char` per original `char`.
///
/// Folding never changes the char count, so indexes into a `Normalized`
/// label are valid char offsets into the original label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Normalized(Vec<char>);

impl Normalized {
    pub(crate) fn new(s: &str, case_sensitive: bool) -> Self {
        if case_sensitive {
            return Self(s.chars().collect());
        }
        Self(
            s.chars()
                .map(|c| c.to_lowercase().next().unwrap_or(c))
                .collect(),
        )
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn starts_with(&self, prefix: &Normalized) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Char offset of the first occurrence of `needle`.
    pub(crate) fn find(&self, needle: &Normalized) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.0
            .windows(needle.len())
            .position(|window| window == needle.chars())
    }
}
