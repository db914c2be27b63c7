/// The three backticks that open and close every recognized code fence.
pub const FENCE: &str = "```";

/// Name of the language extracted when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "rust";

/// The language whose fenced code blocks are extracted.
///
/// A block opens on a line made of three backticks followed by one of the
/// language's fence markers, optionally followed by a comma and an attribute
/// string:
///
/// ````markdown
/// ```rust,ignore
/// fn main() {}
/// ```
/// ````
///
/// Markers are compared ASCII case-insensitively, so `Rust` and `RUST` open
/// a `rust` block. Everything after the first comma is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage {
    name: String,
    fence_markers: Vec<String>,
}

impl TargetLanguage {
    /// Creates a target language matched only by its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            fence_markers: vec![name.clone()],
            name,
        }
    }

    /// Creates a target language matched by its name or any of `markers`.
    ///
    /// # Example
    ///
    /// ```
    /// use extract_code_blocks::TargetLanguage;
    ///
    /// let lang = TargetLanguage::with_markers("rust", ["rs"]);
    /// assert_eq!(lang.match_opening("```rs,no_run"), Some("no_run"));
    /// assert_eq!(lang.match_opening("```RUST"), Some(""));
    /// ```
    pub fn with_markers<I, S>(name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut language = Self::new(name);
        for marker in markers {
            let marker = marker.into();
            if !language.matches_tag(&marker) {
                language.fence_markers.push(marker);
            }
        }
        language
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute string if `line` opens a block in this language.
    ///
    /// The attributes are the text after the first comma, or `""` when the
    /// tag ends the line. A line whose tag merely starts with a marker
    /// (`rustacean`) does not match.
    pub fn match_opening<'l>(&self, line: &'l str) -> Option<&'l str> {
        let info = line.strip_prefix(FENCE)?;
        let (tag, attributes) = match info.split_once(',') {
            Some((tag, attributes)) => (tag, attributes),
            None => (info, ""),
        };

        self.matches_tag(tag).then_some(attributes)
    }

    fn matches_tag(&self, tag: &str) -> bool {
        self.fence_markers
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(tag))
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_plain_opening() {
        let lang = TargetLanguage::default();
        assert_eq!(lang.match_opening("```rust"), Some(""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let lang = TargetLanguage::default();
        assert_eq!(lang.match_opening("```Rust"), Some(""));
        assert_eq!(lang.match_opening("```RUST,ignore"), Some("ignore"));
    }

    #[test]
    fn test_attributes_after_first_comma() {
        let lang = TargetLanguage::default();
        assert_eq!(lang.match_opening("```rust,ignore"), Some("ignore"));
        assert_eq!(
            lang.match_opening("```rust,no_run,edition2021"),
            Some("no_run,edition2021")
        );
        assert_eq!(lang.match_opening("```rust,"), Some(""));
        // Attributes are carried verbatim, case and spacing included
        assert_eq!(lang.match_opening("```rust, Should_Panic "), Some(" Should_Panic "));
    }

    #[test]
    fn test_other_tags_do_not_match() {
        let lang = TargetLanguage::default();
        assert_eq!(lang.match_opening("```rustacean"), None);
        assert_eq!(lang.match_opening("```javascript"), None);
        assert_eq!(lang.match_opening("```"), None);
        assert_eq!(lang.match_opening("```rust "), None);
        assert_eq!(lang.match_opening(" ```rust"), None);
        assert_eq!(lang.match_opening("~~~rust"), None);
        assert_eq!(lang.match_opening("rust"), None);
    }

    #[test]
    fn test_extra_markers() {
        let lang = TargetLanguage::with_markers("rust", ["rs", "RUST"]);
        assert_eq!(lang, TargetLanguage::with_markers("rust", ["rs"]));
        assert_eq!(lang.match_opening("```rs"), Some(""));
        assert_eq!(lang.match_opening("```rust,ignore"), Some("ignore"));
        assert_eq!(lang.match_opening("```rsx"), None);
    }

    #[test]
    fn test_custom_language() {
        let lang = TargetLanguage::new("c");
        assert_eq!(lang.name(), "c");
        assert_eq!(lang.match_opening("```C,propagate"), Some("propagate"));
        assert_eq!(lang.match_opening("```rust"), None);
    }
}
