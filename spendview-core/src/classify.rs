//! Substring classification of account names.
//!
//! No fuzzy matching needed; plain case-insensitive containment against
//! two fixed lists covers every name the analyzer cares about.

use crate::Category;

/// Known merchant substrings. Checked before contacts; list order is the
/// match precedence.
pub const DEFAULT_MERCHANTS: &[&str] = &[
    "swiggy", "zomato", "amazon", "irctc", "flipkart", "bigbasket", "reliance", "myntra",
];

/// Known personal contact substrings.
pub const DEFAULT_CONTACTS: &[&str] = &["rahul", "neha", "arjun", "sneha", "vikram"];

/// Immutable classification configuration. Inject alternate lists in
/// tests instead of touching process-wide state.
#[derive(Debug, Clone)]
pub struct Classifier {
    merchants: Vec<String>,
    contacts: Vec<String>,
}

impl Classifier {
    /// Build from explicit lists. Entries are lowercased once here so
    /// `classify` only lowercases the name.
    pub fn new<M, C>(merchants: M, contacts: C) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Classifier {
            merchants: merchants
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            contacts: contacts
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Built-in lists plus user-supplied extensions.
    pub fn with_extra(merchants: &[String], contacts: &[String]) -> Self {
        Classifier::new(
            DEFAULT_MERCHANTS
                .iter()
                .map(|s| s.to_string())
                .chain(merchants.iter().cloned()),
            DEFAULT_CONTACTS
                .iter()
                .map(|s| s.to_string())
                .chain(contacts.iter().cloned()),
        )
    }

    /// Classify an account name. Merchants win over contacts, first
    /// containment wins within a list, no match means `Stranger`.
    /// Total function: empty input is just a `Stranger`.
    pub fn classify(&self, account_name: &str) -> Category {
        let name = account_name.to_lowercase();
        if self.merchants.iter().any(|m| name.contains(m.as_str())) {
            return Category::Merchant;
        }
        if self.contacts.iter().any(|c| name.contains(c.as_str())) {
            return Category::Friend;
        }
        Category::Stranger
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(DEFAULT_MERCHANTS, DEFAULT_CONTACTS)
    }
}
