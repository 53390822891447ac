//! Person Details Panel
//!
//! Read-only card for the selected customer or guarantor.

use leptos::prelude::*;

use crate::models::Person;

/// Display strings for the details card; missing values become `-`
#[derive(Debug, Clone, PartialEq)]
pub struct DetailFields {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub occupation: String,
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

impl From<&Person> for DetailFields {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            phone: or_dash(person.phone.as_deref()),
            address: or_dash(person.address.as_deref()),
            occupation: or_dash(person.occupation.as_deref()),
        }
    }
}

/// Details card; hidden while nothing (or an unknown id) is selected
#[component]
pub fn PersonDetails(
    #[prop(into)] person: Signal<Option<Person>>,
) -> impl IntoView {
    let fields = move || person.get().as_ref().map(DetailFields::from);

    view! {
        <div class=move || if fields().is_some() { "person-details" } else { "person-details hidden" }>
            {move || fields().map(|f| view! {
                <div class="detail-row"><span class="detail-label">"Name"</span><span class="detail-name">{f.name}</span></div>
                <div class="detail-row"><span class="detail-label">"Phone"</span><span>{f.phone}</span></div>
                <div class="detail-row"><span class="detail-label">"Address"</span><span>{f.address}</span></div>
                <div class="detail-row"><span class="detail-label">"Occupation"</span><span>{f.occupation}</span></div>
            })}
        </div>
    }
}
