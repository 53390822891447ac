//! UI Components
//!
//! Leptos components for the account creation and account details pages.

mod modal;
mod field;
mod submit;
mod person_details;
mod find_modal;
mod create_customer_modal;
mod create_guarantor_modal;
mod product_selector;
mod account_form;
mod payment_panel;

pub use modal::ModalHandle;
pub use find_modal::FindModal;
pub use create_customer_modal::CreateCustomerModal;
pub use create_guarantor_modal::CreateGuarantorModal;
pub use account_form::AccountForm;
pub use payment_panel::{PaymentPanel, PaymentSeed};
