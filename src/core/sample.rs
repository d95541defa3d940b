use crate::domain::model::{Contact, ContactBook};

/// Builds a fresh two-contact book for demonstrating flavor removal.
pub fn sample_contacts() -> ContactBook {
    let mut book = ContactBook::new();
    book.insert(
        "Jon Snow",
        Contact::new("Jon", "jon_snow@thewall.we", &["chocolate", "vanilla"]),
    );
    book.insert(
        "Freddie Mercury",
        Contact::new(
            "Freddie",
            "freddie@mercury.com",
            &["strawberry", "cookie dough", "mint chip"],
        ),
    );
    book
}
