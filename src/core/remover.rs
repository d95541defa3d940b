use crate::domain::model::ContactBook;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;

/// Removes every `flavor_to_remove` entry from the favorite flavors of the
/// contact keyed by `target_contact_name` and hands the book back.
///
/// A missing contact or flavor leaves the book untouched. Only an absent
/// book is an error.
pub fn remove_flavor(
    contacts: Option<ContactBook>,
    target_contact_name: &str,
    flavor_to_remove: &str,
) -> Result<ContactBook> {
    let mut contacts = require_argument("contacts", contacts)?;
    remove_flavor_in_place(&mut contacts, target_contact_name, flavor_to_remove);
    Ok(contacts)
}

/// In-place variant of [`remove_flavor`]. Returns the number of entries removed.
pub fn remove_flavor_in_place(
    contacts: &mut ContactBook,
    target_contact_name: &str,
    flavor_to_remove: &str,
) -> usize {
    let mut removed = 0;
    let mut matched = false;

    for (full_name, contact) in contacts.iter_mut() {
        if full_name == target_contact_name {
            matched = true;
            removed += contact.remove_flavor(flavor_to_remove);
            tracing::debug!(
                "Matched contact '{}', remaining flavors: {:?}",
                full_name,
                contact.favorite_flavors
            );
        }
    }

    if !matched {
        tracing::info!("No contact named '{}', book unchanged", target_contact_name);
    } else {
        tracing::info!(
            "Removed {} '{}' entr{} from '{}'",
            removed,
            flavor_to_remove,
            if removed == 1 { "y" } else { "ies" },
            target_contact_name
        );
    }

    removed
}

/// Drops "strawberry" from Freddie Mercury's favorites.
pub fn remove_strawberry(mut contacts: ContactBook) -> ContactBook {
    remove_flavor_in_place(&mut contacts, "Freddie Mercury", "strawberry");
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::sample_contacts;
    use crate::domain::model::Contact;
    use crate::utils::error::ContactError;

    #[test]
    fn test_absent_book_is_invalid_argument() {
        let result = remove_flavor(None, "Freddie Mercury", "strawberry");
        assert!(matches!(result, Err(ContactError::InvalidArgument { .. })));
    }

    #[test]
    fn test_in_place_reports_removed_count() {
        let mut book = sample_contacts();
        assert_eq!(remove_flavor_in_place(&mut book, "Freddie Mercury", "strawberry"), 1);
        assert_eq!(remove_flavor_in_place(&mut book, "Freddie Mercury", "strawberry"), 0);
    }

    #[test]
    fn test_key_match_is_exact() {
        let mut book = sample_contacts();
        let original = book.clone();

        assert_eq!(remove_flavor_in_place(&mut book, "freddie mercury", "strawberry"), 0);
        assert_eq!(remove_flavor_in_place(&mut book, "Freddie", "strawberry"), 0);
        assert_eq!(book, original);
    }

    #[test]
    fn test_other_fields_untouched() {
        let mut book = ContactBook::new();
        book.insert(
            "Freddie Mercury",
            Contact::new("Freddie", "freddie@mercury.com", &["strawberry", "mint chip"]),
        );

        let book = remove_strawberry(book);
        let freddie = book.get("Freddie Mercury").unwrap();
        assert_eq!(freddie.name, "Freddie");
        assert_eq!(freddie.email, "freddie@mercury.com");
        assert_eq!(freddie.favorite_flavors, vec!["mint chip"]);
    }
}
