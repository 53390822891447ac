//! Cache Queries
//!
//! Lookups and live filters over the locally cached server data.

use crate::models::{Person, Product, Uid};

/// First person with the given identifier
pub fn find_by_uid<'a>(people: &'a [Person], uid: &Uid) -> Option<&'a Person> {
    people.iter().find(|p| &p.uid == uid)
}

/// Products belonging to one category, in cache order
pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}

/// Case-insensitive substring match over name and phone.
/// An empty term matches everyone.
pub fn person_matches(person: &Person, term: &str) -> bool {
    let term = term.to_lowercase();
    person.name.to_lowercase().contains(&term)
        || person.phone_str().to_lowercase().contains(&term)
}

pub fn filter_people(people: &[Person], term: &str) -> Vec<Person> {
    people
        .iter()
        .filter(|p| person_matches(p, term))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over model names
pub fn filter_models<'a>(products: &[&'a Product], term: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .copied()
        .filter(|p| p.model.to_lowercase().contains(&term))
        .collect()
}
