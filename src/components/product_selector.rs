//! Product Selector Component
//!
//! Category dropdown, live model filter and clickable model list.

use leptos::prelude::*;

use crate::store::{store_models, use_app_store, AppStateStoreFields};

#[component]
pub fn ProductSelector(
    /// Selected category value
    category: RwSignal<String>,
    /// Selected model label (empty = none)
    selected_model: RwSignal<String>,
    /// Live model filter text
    model_filter: RwSignal<String>,
) -> impl IntoView {
    let store = use_app_store();

    let models = move || store_models(&store, &category.get(), &model_filter.get());

    view! {
        <div class="product-selector">
            <label class="form-field">
                <span class="form-label">"Product Category"</span>
                <select
                    name="productCategory"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        selected_model.set(String::new());
                        model_filter.set(String::new());
                    }
                >
                    <option value="">"Select Category"</option>
                    <For
                        each=move || store.product_categories().get()
                        key=|c| c.value.clone()
                        children=move |c| view! { <option value=c.value.clone()>{c.name.clone()}</option> }
                    />
                </select>
            </label>

            <input
                type="text"
                class="model-filter"
                placeholder="Filter models..."
                prop:value=move || model_filter.get()
                on:input=move |ev| model_filter.set(event_target_value(&ev))
            />

            <div class="model-list">
                <For
                    each=models
                    key=|p| p.model.clone()
                    children=move |product| {
                        let model = product.model.clone();
                        let model_for_click = model.clone();
                        let is_selected = move || selected_model.get() == model;
                        view! {
                            <div
                                class=move || if is_selected() { "model-item selected" } else { "model-item" }
                                on:click=move |_| selected_model.set(model_for_click.clone())
                            >
                                {product.model.clone()}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !selected_model.get().is_empty()>
                <div class="selected-model">
                    <span class="form-label">"Selected Model: "</span>
                    <span class="selected-model-name">{move || selected_model.get()}</span>
                </div>
            </Show>
        </div>
    }
}
