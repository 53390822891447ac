//! Page Roots
//!
//! Mounts the right app into whichever page root the server rendered, and
//! wires the server-rendered page chrome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{AccountForm, CreateCustomerModal, CreateGuarantorModal, FindModal, PaymentPanel, PaymentSeed};
use crate::config::AppConfig;
use crate::context::AccountContext;
use crate::store::{store_load, AppState};
use crate::toast::{ToastHost, Toaster};
use crate::{navbar, sections};

const ACCOUNT_CREATE_ROOT: &str = "accountCreateRoot";
const PAYMENT_PANEL_ROOT: &str = "paymentPanelRoot";

fn find_root(id: &str) -> Option<web_sys::HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Entry point: page chrome first, then whichever app the page hosts
pub fn mount() {
    navbar::wire_mobile_menu();
    sections::wire_sections();

    if let Some(root) = find_root(ACCOUNT_CREATE_ROOT) {
        let config = AppConfig::from_root(&root);
        web_sys::console::log_1(&"[APP] Mounting account creation page".into());
        leptos::mount::mount_to(root, move || view! { <AccountCreateApp config=config /> }).forget();
    }

    if let Some(root) = find_root(PAYMENT_PANEL_ROOT) {
        let config = AppConfig::from_root(&root);
        let seed = PaymentSeed::parse(
            root.get_attribute("data-account-number"),
            root.get_attribute("data-cash-balance"),
            root.get_attribute("data-payments"),
        );
        match seed {
            Ok(seed) => {
                web_sys::console::log_1(&format!("[APP] Mounting payment panel for {}", seed.account_number).into());
                leptos::mount::mount_to(root, move || view! { <AccountDetailsApp config=config seed=seed /> }).forget();
            }
            Err(e) => web_sys::console::error_1(&format!("[APP] Payment panel not mounted: {}", e).into()),
        }
    }
}

/// Account creation page: cache, modals and the account form
#[component]
pub fn AccountCreateApp(config: AppConfig) -> impl IntoView {
    let toaster = Toaster::new(config.toast_duration_ms);
    let store = Store::new(AppState::default());
    let ctx = AccountContext::new();

    provide_context(config.clone());
    provide_context(toaster);
    provide_context(store);
    provide_context(ctx);

    // Load the cache once per page
    spawn_local(async move {
        match api::fetch_precreation_data(&config).await {
            Ok(data) => {
                web_sys::console::log_1(
                    &format!(
                        "[CACHE] Loaded {} customers, {} guarantors, {} products",
                        data.customers.len(),
                        data.guarantors.len(),
                        data.products.len()
                    )
                    .into(),
                );
                store_load(&store, data);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CACHE] Error fetching initial data: {}", e).into());
                toaster.show("Failed to fetch initial data. Please try again.");
            }
        }
    });

    view! {
        <div class="account-create-app">
            <AccountForm />
            <FindModal />
            <CreateCustomerModal />
            <CreateGuarantorModal />
            <ToastHost />
        </div>
    }
}

/// Account details page: payment panel
#[component]
pub fn AccountDetailsApp(config: AppConfig, seed: PaymentSeed) -> impl IntoView {
    provide_context(Toaster::new(config.toast_duration_ms));
    provide_context(config);

    view! {
        <PaymentPanel seed=seed />
        <ToastHost />
    }
}
