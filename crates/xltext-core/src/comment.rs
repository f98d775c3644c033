//! Cell comments (notes)
//!
//! ```rust
//! use xltext_core::{CellComment, Worksheet};
//!
//! let mut sheet = Worksheet::new("Review");
//! sheet.set_comment("B2", CellComment::new("QA", "Comment: check totals")).unwrap();
//! assert!(sheet.comment_at(1, 1).is_some());
//! ```

/// A cell comment/note as decoded from the source
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellComment {
    /// Author of the comment
    pub author: String,
    /// Comment text content, line breaks preserved
    pub text: String,
}

impl CellComment {
    /// Create a new comment with the given author and text
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Create a comment with just text (empty author)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }

    /// Check if this comment has an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only() {
        let comment = CellComment::text_only("Just text");
        assert_eq!(comment.text, "Just text");
        assert!(!comment.has_author());
        assert!(CellComment::new("Ana", "x").has_author());
    }
}
