//! Book value object.

use serde::{Deserialize, Serialize};

/// One book as seen by callers of the store.
///
/// `title` is the lookup key for find/update/delete. Construction performs no
/// validation: empty and duplicate titles are structurally allowed.
///
/// `==` and `Hash` compare all three fields, so a fetched book equals what was
/// inserted only when description and author match too. Use
/// [`Book::same_title`] to ask whether two values address the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    /// Used as a category or genre label in practice.
    pub description: String,
    pub author: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    /// Returns whether `other` addresses the same stored row.
    pub fn same_title(&self, other: &Book) -> bool {
        self.title == other.title
    }
}

#[cfg(test)]
mod tests {
    use super::Book;

    #[test]
    fn new_keeps_field_order() {
        let book = Book::new("Carolinas liv", "Deckare", "Carolina");
        assert_eq!(book.title, "Carolinas liv");
        assert_eq!(book.description, "Deckare");
        assert_eq!(book.author, "Carolina");
    }

    #[test]
    fn identity_is_by_title() {
        let original = Book::new("A", "genre1", "author1");
        let mut edited = original.clone();
        edited.description = "genre2".to_string();

        assert!(original.same_title(&edited));
        assert_ne!(original, edited);
        assert!(!original.same_title(&Book::new("B", "genre1", "author1")));
    }

    #[test]
    fn empty_fields_are_accepted() {
        let book = Book::new("", "", "");
        assert!(book.title.is_empty());
    }
}
