use bookshelf_core::Book;
use serde_json::json;

#[test]
fn book_serializes_with_plain_field_names() {
    let book = Book::new("Hassans liv", "Deckare", "Hassan");

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Hassans liv",
            "description": "Deckare",
            "author": "Hassan",
        })
    );
}

#[test]
fn book_deserializes_from_external_json() {
    let book: Book = serde_json::from_str(
        r#"{"title":"Shamims liv","description":"Drama","author":"Shamim"}"#,
    )
    .unwrap();
    assert_eq!(book, Book::new("Shamims liv", "Drama", "Shamim"));
}
