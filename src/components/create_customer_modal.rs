//! Create Customer Modal
//!
//! Form for registering a new customer; on success the customer joins the
//! cache and becomes the account's selected customer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::field::{Field, SelectField};
use crate::components::modal::Modal;
use crate::components::submit::{submit_form, SubmitButton};
use crate::config::AppConfig;
use crate::context::use_account_context;
use crate::forms::NewCustomer;
use crate::models::{GUARDIAN_TYPES, OCCUPATIONS};
use crate::store::{store_add_customer, use_app_store};
use crate::toast::use_toaster;

#[component]
pub fn CreateCustomerModal() -> impl IntoView {
    let ctx = use_account_context();
    let store = use_app_store();
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let occupation = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let guardian_type = RwSignal::new(String::new());
    let guardian_name = RwSignal::new(String::new());
    let location_mark = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset = move || {
        for field in [name, phone, address, occupation, age, guardian_type, guardian_name, location_mark] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = NewCustomer {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            occupation: occupation.get_untracked(),
            age: age.get_untracked(),
            guardian_type: guardian_type.get_untracked(),
            guardian_name: guardian_name.get_untracked(),
            location_mark: location_mark.get_untracked(),
        };
        let config = config.clone();

        spawn_local(async move {
            let created = submit_form(
                payload,
                busy,
                toaster,
                "An error occurred while creating the customer.",
                |p| async move { api::create_customer(&config, &p).await },
            )
            .await;

            if let Some(customer) = created {
                web_sys::console::log_1(&format!("[CUSTOMER] Created {}", customer.uid).into());
                let uid = customer.uid.clone();
                store_add_customer(&store, customer);
                reset();
                ctx.customer_modal.close();
                ctx.customer_uid.set(Some(uid));
            }
        });
    };

    view! {
        <Modal handle=ctx.customer_modal title="Create Customer".to_string()>
            <form class="modal-form" on:submit=on_submit>
                <Field label="Name" name="name" value=name />
                <Field label="Phone" name="phone" value=phone input_type="tel" placeholder="+880XXXXXXXXXX" />
                <Field label="Address" name="address" value=address />
                <SelectField label="Occupation" name="occupation" value=occupation options=OCCUPATIONS />
                <Field label="Age" name="age" value=age input_type="number" />
                <SelectField label="Guardian Type" name="guardianType" value=guardian_type options=GUARDIAN_TYPES />
                <Field label="Guardian Name" name="guardianName" value=guardian_name />
                <Field label="Location Mark" name="locationMark" value=location_mark />
                <div class="modal-actions">
                    <SubmitButton busy=busy idle_label="Create" busy_label="Creating..." />
                </div>
            </form>
        </Modal>
    }
}
