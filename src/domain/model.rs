use serde::{Deserialize, Serialize};
use std::collections::btree_map::{Iter, IterMut};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub favorite_flavors: Vec<String>,
}

impl Contact {
    pub fn new(name: &str, email: &str, favorite_flavors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            favorite_flavors: favorite_flavors.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Removes every occurrence of `flavor` and returns how many were dropped.
    pub fn remove_flavor(&mut self, flavor: &str) -> usize {
        let before = self.favorite_flavors.len();
        self.favorite_flavors.retain(|f| f != flavor);
        before - self.favorite_flavors.len()
    }
}

/// Contacts keyed by full name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, full_name: &str, contact: Contact) -> Option<Contact> {
        self.contacts.insert(full_name.to_string(), contact)
    }

    pub fn get(&self, full_name: &str) -> Option<&Contact> {
        self.contacts.get(full_name)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Contact> {
        self.contacts.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, Contact> {
        self.contacts.iter_mut()
    }
}
