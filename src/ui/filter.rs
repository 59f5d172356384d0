//! Text filter for list views
//!
//! Comma-separated terms, matched case-insensitively as substrings. A term
//! starting with '-' excludes lines containing it. With no include terms
//! every line not excluded passes; an empty filter passes everything.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFilter {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl TextFilter {
    pub fn parse(input: &str) -> Self {
        let mut filter = Self::default();
        for term in input.split(',') {
            let term = term.trim();
            if let Some(excluded) = term.strip_prefix('-') {
                if !excluded.is_empty() {
                    filter.excludes.push(excluded.to_lowercase());
                }
            } else if !term.is_empty() {
                filter.includes.push(term.to_lowercase());
            }
        }
        filter
    }

    pub fn is_active(&self) -> bool {
        !self.includes.is_empty() || !self.excludes.is_empty()
    }

    pub fn passes(&self, text: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        let text = text.to_lowercase();
        if self.excludes.iter().any(|term| text.contains(term.as_str())) {
            return false;
        }
        self.includes.is_empty() || self.includes.iter().any(|term| text.contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = TextFilter::parse("  ");
        assert!(!filter.is_active());
        assert!(filter.passes("anything"));
        assert!(filter.passes(""));
    }

    #[test]
    fn test_include_terms_are_ored_and_case_insensitive() {
        let filter = TextFilter::parse("error, Texture");
        assert!(filter.passes("ERROR: window"));
        assert!(filter.passes("loaded texture Track.png"));
        assert!(!filter.passes("actor created"));
    }

    #[test]
    fn test_exclude_terms() {
        let filter = TextFilter::parse("-resize");
        assert!(filter.passes("actor created"));
        assert!(!filter.passes("Window resized to 800x600"));

        let filter = TextFilter::parse("window,-resize");
        assert!(filter.passes("Window::new OK"));
        assert!(!filter.passes("Window resized"));
    }

    #[test]
    fn test_lone_dash_is_ignored() {
        assert!(!TextFilter::parse("-").is_active());
    }
}
