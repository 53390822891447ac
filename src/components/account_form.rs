//! Account Form Component
//!
//! The account draft: number and sale date, customer and guarantor
//! selections, product, and contract terms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::field::Field;
use crate::components::person_details::PersonDetails;
use crate::components::product_selector::ProductSelector;
use crate::components::submit::{submit_form, SubmitButton};
use crate::config::AppConfig;
use crate::context::{use_account_context, AccountContext};
use crate::format::today_iso;
use crate::forms::AccountDraft;
use crate::models::{FindTarget, GuarantorSlot, Uid};
use crate::store::{store_find_customer, store_find_guarantor, use_app_store};
use crate::toast::use_toaster;

fn uid_text(uid: Option<Uid>) -> String {
    uid.map(|u| u.as_str().to_string()).unwrap_or_default()
}

/// Selected guarantor's card with find/new buttons for one slot
#[component]
fn GuarantorPicker(slot: GuarantorSlot) -> impl IntoView {
    let ctx = use_account_context();
    let store = use_app_store();
    let selection = ctx.guarantor_selection(slot);
    let person = Signal::derive(move || selection.get().and_then(|uid| store_find_guarantor(&store, &uid)));

    view! {
        <div class="guarantor-picker">
            <h3 class="picker-title">{slot.label()}</h3>
            <div class="picker-actions">
                <button type="button" on:click=move |_| ctx.open_find(FindTarget::Guarantor(slot))>"Find"</button>
                <button type="button" on:click=move |_| ctx.open_create_guarantor(slot)>"New"</button>
            </div>
            <PersonDetails person=person />
        </div>
    }
}

/// Input signals of the account draft
#[derive(Clone, Copy)]
struct DraftFields {
    account_number: RwSignal<String>,
    sale_date: RwSignal<String>,
    category: RwSignal<String>,
    selected_model: RwSignal<String>,
    model_filter: RwSignal<String>,
    cash_value: RwSignal<String>,
    hire_value: RwSignal<String>,
    down_payment: RwSignal<String>,
    monthly_payment: RwSignal<String>,
    length: RwSignal<String>,
}

impl DraftFields {
    fn new() -> Self {
        Self {
            account_number: RwSignal::new(String::new()),
            sale_date: RwSignal::new(today_iso()),
            category: RwSignal::new(String::new()),
            selected_model: RwSignal::new(String::new()),
            model_filter: RwSignal::new(String::new()),
            cash_value: RwSignal::new(String::new()),
            hire_value: RwSignal::new(String::new()),
            down_payment: RwSignal::new(String::new()),
            monthly_payment: RwSignal::new(String::new()),
            length: RwSignal::new(String::new()),
        }
    }

    fn collect(&self, ctx: &AccountContext) -> AccountDraft {
        AccountDraft {
            account_number: self.account_number.get_untracked(),
            sale_date: self.sale_date.get_untracked(),
            customer_uid: uid_text(ctx.customer_uid.get_untracked()),
            first_guarantor_uid: uid_text(ctx.first_guarantor_uid.get_untracked()),
            second_guarantor_uid: uid_text(ctx.second_guarantor_uid.get_untracked()),
            product_category: self.category.get_untracked(),
            selected_model: self.selected_model.get_untracked(),
            cash_value: self.cash_value.get_untracked(),
            hire_value: self.hire_value.get_untracked(),
            down_payment: self.down_payment.get_untracked(),
            monthly_payment: self.monthly_payment.get_untracked(),
            length: self.length.get_untracked(),
        }
    }

    /// Blank draft with today's sale date, and no selections
    fn reset(&self, ctx: &AccountContext) {
        for field in [
            self.account_number,
            self.category,
            self.selected_model,
            self.model_filter,
            self.cash_value,
            self.hire_value,
            self.down_payment,
            self.monthly_payment,
            self.length,
        ] {
            field.set(String::new());
        }
        ctx.clear_selections();
        self.sale_date.set(today_iso());
    }
}

#[component]
pub fn AccountForm() -> impl IntoView {
    let ctx = use_account_context();
    let store = use_app_store();
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();

    let fields = DraftFields::new();
    let DraftFields {
        account_number,
        sale_date,
        category,
        selected_model,
        model_filter,
        cash_value,
        hire_value,
        down_payment,
        monthly_payment,
        length,
    } = fields;
    let busy = RwSignal::new(false);

    let customer = Signal::derive(move || {
        ctx.customer_uid.get().and_then(|uid| store_find_customer(&store, &uid))
    });

    let submit = move |_: ()| {
        let draft = fields.collect(&ctx);
        let config = config.clone();
        spawn_local(async move {
            let created = submit_form(
                draft,
                busy,
                toaster,
                "An error occurred while creating the account.",
                |d| async move { api::create_account(&config, &d).await },
            )
            .await;
            if created.is_some() {
                fields.reset(&ctx);
            }
        });
    };

    view! {
        <div class="account-form">
            <section class="form-section">
                <h2 class="section-title">"Account"</h2>
                <Field label="Account Number" name="accountNumber" value=account_number />
                <Field label="Sale Date" name="saleDate" value=sale_date input_type="date" />
            </section>

            <section class="form-section">
                <h2 class="section-title">"Customer"</h2>
                <div class="picker-actions">
                    <button type="button" on:click=move |_| ctx.open_find(FindTarget::Customer)>"Find Customer"</button>
                    <button type="button" on:click=move |_| ctx.customer_modal.open()>"New Customer"</button>
                </div>
                <PersonDetails person=customer />
            </section>

            <section class="form-section">
                <h2 class="section-title">"Guarantors"</h2>
                <GuarantorPicker slot=GuarantorSlot::First />
                <GuarantorPicker slot=GuarantorSlot::Second />
            </section>

            <section class="form-section">
                <h2 class="section-title">"Product"</h2>
                <ProductSelector category=category selected_model=selected_model model_filter=model_filter />
            </section>

            <section class="form-section">
                <h2 class="section-title">"Contract Terms"</h2>
                <Field label="Cash Value" name="cashValue" value=cash_value input_type="number" />
                <Field label="Hire Value" name="hireValue" value=hire_value input_type="number" />
                <Field label="Down Payment" name="downPayment" value=down_payment input_type="number" />
                <Field label="Monthly Payment" name="monthlyPayment" value=monthly_payment input_type="number" />
                <Field label="Length (months)" name="length" value=length input_type="number" />
            </section>

            <SubmitButton
                busy=busy
                idle_label="Create Account"
                busy_label="Submitting..."
                class="create-account-btn"
                on_click=Callback::new(submit)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_uid_submits_as_empty() {
        assert_eq!(uid_text(None), "");
        assert_eq!(uid_text(Some(Uid::new("5000003"))), "5000003");
    }

    #[test]
    fn test_reset_clears_draft_filter_and_selections() {
        let owner = Owner::new();
        owner.set();
        let ctx = AccountContext::new();
        let fields = DraftFields::new();

        fields.account_number.set("A-1001".into());
        fields.sale_date.set("2020-01-01".into());
        fields.category.set("Television".into());
        fields.selected_model.set("Walton 32 LED".into());
        fields.model_filter.set("walton".into());
        fields.cash_value.set("30000".into());
        ctx.select(FindTarget::Customer, Uid::new("1000001"));
        ctx.select(FindTarget::Guarantor(GuarantorSlot::Second), Uid::new("5000002"));

        let draft = fields.collect(&ctx);
        assert_eq!(draft.customer_uid, "1000001");
        assert_eq!(draft.first_guarantor_uid, "");
        assert_eq!(draft.selected_model, "Walton 32 LED");

        fields.reset(&ctx);
        assert_eq!(fields.model_filter.get_untracked(), "");
        assert_eq!(fields.selected_model.get_untracked(), "");
        assert_eq!(fields.category.get_untracked(), "");
        assert_eq!(fields.account_number.get_untracked(), "");
        assert_eq!(fields.sale_date.get_untracked(), today_iso());

        let cleared = fields.collect(&ctx);
        assert_eq!(cleared.customer_uid, "");
        assert_eq!(cleared.second_guarantor_uid, "");
    }
}
