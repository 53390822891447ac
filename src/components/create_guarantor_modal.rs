//! Create Guarantor Modal
//!
//! Form for registering a new guarantor into the slot the modal was opened
//! for.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::field::Field;
use crate::components::modal::Modal;
use crate::components::submit::{submit_form, SubmitButton};
use crate::config::AppConfig;
use crate::context::use_account_context;
use crate::forms::NewGuarantor;
use crate::store::{store_add_guarantor, use_app_store};
use crate::toast::use_toaster;

#[component]
pub fn CreateGuarantorModal() -> impl IntoView {
    let ctx = use_account_context();
    let store = use_app_store();
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let occupation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let title = move || match ctx.guarantor_slot.get() {
        Some(slot) => format!("Create {}", slot.label()),
        None => "Create Guarantor".to_string(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(slot) = ctx.guarantor_slot.get_untracked() else {
            toaster.show("Guarantor type not specified!");
            return;
        };
        let payload = NewGuarantor {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            occupation: occupation.get_untracked(),
        };
        let config = config.clone();

        spawn_local(async move {
            let created = submit_form(
                payload,
                busy,
                toaster,
                "An error occurred while creating the guarantor.",
                |p| async move { api::create_guarantor(&config, &p).await },
            )
            .await;

            if let Some(guarantor) = created {
                web_sys::console::log_1(
                    &format!("[GUARANTOR] Created {} as {}", guarantor.uid, slot.label()).into(),
                );
                let uid = guarantor.uid.clone();
                store_add_guarantor(&store, guarantor);
                ctx.guarantor_selection(slot).set(Some(uid));
                for field in [name, phone, address, occupation] {
                    field.set(String::new());
                }
                ctx.close_create_guarantor();
            }
        });
    };

    view! {
        <Modal
            handle=ctx.guarantor_modal
            title=Signal::derive(title)
            on_close=Callback::new(move |_: ()| ctx.guarantor_slot.set(None))
        >
            <form class="modal-form" on:submit=on_submit>
                <Field label="Name" name="name" value=name />
                <Field label="Phone" name="phone" value=phone input_type="tel" placeholder="+880XXXXXXXXXX" />
                <Field label="Address" name="address" value=address />
                <Field label="Occupation" name="occupation" value=occupation />
                <div class="modal-actions">
                    <SubmitButton busy=busy idle_label="Create" busy_label="Creating..." />
                </div>
            </form>
        </Modal>
    }
}
