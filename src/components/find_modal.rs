//! Find Modal Component
//!
//! Searchable list of cached customers or guarantors. Picking an entry
//! writes its id into the selection the modal was opened for.

use leptos::prelude::*;

use crate::cache;
use crate::components::modal::Modal;
use crate::context::use_account_context;
use crate::models::{FindTarget, Person};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FindModal() -> impl IntoView {
    let ctx = use_account_context();
    let store = use_app_store();
    let (search, set_search) = signal(String::new());

    // Fresh search each time the modal opens
    Effect::new(move |_| {
        if ctx.find_modal.is_open() {
            let _ = ctx.find_target.get();
            set_search.set(String::new());
        }
    });

    let title = move || {
        ctx.find_target
            .get()
            .map(FindTarget::title)
            .unwrap_or("Find")
            .to_string()
    };

    let entries = move || -> Vec<Person> {
        let term = search.get();
        match ctx.find_target.get() {
            Some(FindTarget::Customer) => store.customers().with(|list| cache::filter_people(list, &term)),
            Some(FindTarget::Guarantor(_)) => store.guarantors().with(|list| cache::filter_people(list, &term)),
            None => Vec::new(),
        }
    };

    view! {
        <Modal handle=ctx.find_modal title=Signal::derive(title)>
            <input
                type="text"
                class="search-input"
                placeholder="Search by name or phone..."
                autocomplete="off"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <div class="person-list">
                <For
                    each=entries
                    key=|person| person.uid.clone()
                    children=move |person| {
                        let uid = person.uid.clone();
                        view! {
                            <div
                                class="person-list-item"
                                on:click=move |_| {
                                    if let Some(target) = ctx.find_target.get_untracked() {
                                        ctx.select(target, uid.clone());
                                    }
                                }
                            >
                                <div class="person-avatar"></div>
                                <div>
                                    <div class="person-name">{person.name.clone()}</div>
                                    <div class="person-phone">{person.phone_str().to_string()}</div>
                                    <div class="person-uid">{format!("UID: {}", person.uid)}</div>
                                </div>
                            </div>
                        }
                    }
                />
                <Show when=move || entries().is_empty()>
                    <div class="person-list-empty">"No matches"</div>
                </Show>
            </div>
        </Modal>
    }
}
