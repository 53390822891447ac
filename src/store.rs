//! Local Data Cache
//!
//! Customers, guarantors and products fetched once per page load, held in a
//! Leptos reactive store for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache;
use crate::models::{Person, PrecreationData, Product, ProductCategory, Uid};

/// Cached server data for the account creation page
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub customers: Vec<Person>,
    pub guarantors: Vec<Person>,
    pub product_categories: Vec<ProductCategory>,
    pub products: Vec<Product>,
}

impl AppState {
    pub fn from_precreation(data: PrecreationData) -> Self {
        Self {
            customers: data.customers,
            guarantors: data.guarantors,
            product_categories: data.product_categories,
            products: data.products,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cache with freshly fetched data
pub fn store_load(store: &AppStore, data: PrecreationData) {
    let state = AppState::from_precreation(data);
    *store.customers().write() = state.customers;
    *store.guarantors().write() = state.guarantors;
    *store.product_categories().write() = state.product_categories;
    *store.products().write() = state.products;
}

/// Append a newly created customer
pub fn store_add_customer(store: &AppStore, customer: Person) {
    store.customers().write().push(customer);
}

/// Append a newly created guarantor
pub fn store_add_guarantor(store: &AppStore, guarantor: Person) {
    store.guarantors().write().push(guarantor);
}

/// Look a customer up by id (tracked)
pub fn store_find_customer(store: &AppStore, uid: &Uid) -> Option<Person> {
    store.customers().with(|list| cache::find_by_uid(list, uid).cloned())
}

/// Look a guarantor up by id (tracked)
pub fn store_find_guarantor(store: &AppStore, uid: &Uid) -> Option<Person> {
    store.guarantors().with(|list| cache::find_by_uid(list, uid).cloned())
}

/// Models of one category, narrowed by the live model filter (tracked)
pub fn store_models(store: &AppStore, category: &str, filter: &str) -> Vec<Product> {
    store.products().with(|products| {
        let in_category = cache::products_in_category(products, category);
        cache::filter_models(&in_category, filter)
            .into_iter()
            .cloned()
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CustomerBody, ServerReply};

    fn person(uid: &str, name: &str) -> Person {
        Person {
            uid: Uid::new(uid),
            name: name.to_string(),
            phone: Some("+8801700000000".to_string()),
            address: Some("Mirpur".to_string()),
            occupation: None,
        }
    }

    fn product(category: &str, model: &str) -> Product {
        Product {
            category: category.to_string(),
            model: model.to_string(),
        }
    }

    /// The owner must outlive the store or its fields are disposed
    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::default()))
    }

    #[test]
    fn test_empty_store_tolerates_lookups() {
        let (_owner, store) = new_store();
        assert!(store_find_customer(&store, &Uid::new("1")).is_none());
        assert!(store_find_guarantor(&store, &Uid::new("1")).is_none());
        assert!(store_models(&store, "Television", "").is_empty());
    }

    #[test]
    fn test_customer_creation_reply_appends_to_cache() {
        let (_owner, store) = new_store();
        store_load(
            &store,
            PrecreationData {
                customers: vec![person("1000001", "Karim")],
                ..PrecreationData::default()
            },
        );

        let json = r#"{"status":"success","message":"Customer created","customer":{"uid":"C42","name":"Jane Doe","phone":"+8801700000001","address":"Banani"}}"#;
        let reply: ServerReply<CustomerBody> = serde_json::from_str(json).unwrap();
        let created = reply.into_result().unwrap().body.customer;

        let before = store.customers().with_untracked(|c| c.len());
        store_add_customer(&store, created);
        assert_eq!(store.customers().with_untracked(|c| c.len()), before + 1);
        assert_eq!(
            store_find_customer(&store, &Uid::new("C42")).unwrap().name,
            "Jane Doe"
        );
    }

    #[test]
    fn test_guarantors_are_append_only() {
        let (_owner, store) = new_store();
        store_add_guarantor(&store, person("5000001", "Rafiq"));
        store_add_guarantor(&store, person("5000001", "Rafiq again"));
        assert_eq!(store.guarantors().with_untracked(|g| g.len()), 2);
        assert_eq!(
            store_find_guarantor(&store, &Uid::new("5000001")).unwrap().name,
            "Rafiq"
        );
    }

    #[test]
    fn test_models_follow_category_and_filter() {
        let (_owner, store) = new_store();
        store_load(
            &store,
            PrecreationData {
                products: vec![
                    product("Television", "Walton 32 LED"),
                    product("Refrigerator", "Walton WFC-3F5"),
                    product("Television", "Sony Bravia 43"),
                ],
                ..PrecreationData::default()
            },
        );

        assert_eq!(store_models(&store, "Television", "").len(), 2);
        let walton: Vec<_> = store_models(&store, "Television", "walton")
            .into_iter()
            .map(|p| p.model)
            .collect();
        assert_eq!(walton, vec!["Walton 32 LED".to_string()]);
    }
}
