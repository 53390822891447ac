//! Payment Panel Component
//!
//! Cash balance, payments table and the payment modal for one account on
//! the account details page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::field::Field;
use crate::components::modal::{Modal, ModalHandle};
use crate::components::submit::{submit_form, SubmitButton};
use crate::config::AppConfig;
use crate::format::{format_amount, today_iso, PaymentRow};
use crate::forms::NewPayment;
use crate::models::PaymentRecord;
use crate::toast::use_toaster;

/// Initial panel data, read from the mount root's `data-*` attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSeed {
    pub account_number: String,
    pub cash_balance: Option<i64>,
    pub payments: Vec<PaymentRecord>,
}

impl PaymentSeed {
    /// Build from raw attribute values.
    ///
    /// The account number is mandatory; a malformed balance or payments
    /// list is an error rather than a silent zero.
    pub fn parse(
        account_number: Option<String>,
        cash_balance: Option<String>,
        payments: Option<String>,
    ) -> Result<Self, String> {
        let account_number = account_number
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| "missing data-account-number".to_string())?;

        let cash_balance = match cash_balance.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|e| format!("bad data-cash-balance {:?}: {}", raw, e))?,
            ),
        };

        let payments = match payments.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw).map_err(|e| format!("bad data-payments: {}", e))?,
        };

        Ok(Self {
            account_number,
            cash_balance,
            payments,
        })
    }
}

/// Balance and payment history shown by the panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentLedger {
    pub cash_balance: Option<i64>,
    pub payments: Vec<PaymentRecord>,
}

impl PaymentLedger {
    /// Take a payment the server recorded; its `cashBalance`, when present,
    /// replaces the shown balance
    pub fn record(&mut self, record: PaymentRecord) {
        if let Some(balance) = record.cash_balance {
            self.cash_balance = Some(balance);
        }
        self.payments.push(record);
    }

    pub fn balance_text(&self) -> String {
        self.cash_balance
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn rows(&self) -> Vec<PaymentRow> {
        self.payments.iter().map(PaymentRow::from).collect()
    }
}

#[component]
pub fn PaymentPanel(seed: PaymentSeed) -> impl IntoView {
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();
    let account_number = seed.account_number.clone();

    let ledger = RwSignal::new(PaymentLedger {
        cash_balance: seed.cash_balance,
        payments: seed.payments,
    });
    let modal = ModalHandle::new();

    let amount = RwSignal::new(String::new());
    let receipt_id = RwSignal::new(String::new());
    let date = RwSignal::new(today_iso());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = NewPayment {
            amount: amount.get_untracked(),
            receipt_id: receipt_id.get_untracked(),
            date: date.get_untracked(),
        };
        let config = config.clone();
        let account_number = account_number.clone();

        spawn_local(async move {
            let recorded = submit_form(
                payload,
                busy,
                toaster,
                "An error occurred while making the payment.",
                |p| async move { api::make_payment(&config, &account_number, &p).await },
            )
            .await;

            if let Some(record) = recorded {
                ledger.update(|l| l.record(record));
                amount.set(String::new());
                receipt_id.set(String::new());
                date.set(today_iso());
                modal.close();
            }
        });
    };

    view! {
        <div class="payment-panel">
            <div class="balance-row">
                <span class="balance-label">"Cash Balance"</span>
                <span class="cash-balance">
                    {move || ledger.with(PaymentLedger::balance_text)}
                </span>
                <button type="button" class="make-payment-btn" on:click=move |_| modal.open()>
                    "Make Payment"
                </button>
            </div>

            <table class="payments-table">
                <thead>
                    <tr><th>"Date"</th><th>"Receipt"</th><th>"Amount"</th></tr>
                </thead>
                <tbody>
                    {move || ledger.with(PaymentLedger::rows)
                        .into_iter()
                        .map(|row| view! {
                            <tr><td>{row.date}</td><td>{row.receipt_id}</td><td>{row.amount}</td></tr>
                        })
                        .collect_view()}
                </tbody>
            </table>

            <Modal handle=modal title=format!("Payment for {}", seed.account_number) extra_class="payment-modal">
                <form class="modal-form" on:submit=on_submit>
                    <Field label="Amount" name="amount" value=amount input_type="number" />
                    <Field label="Receipt ID" name="receiptId" value=receipt_id />
                    <Field label="Date" name="date" value=date input_type="date" />
                    <div class="modal-actions">
                        <SubmitButton busy=busy idle_label="Submit Payment" busy_label="Submitting..." />
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_attributes() {
        let seed = PaymentSeed::parse(
            Some("A-1001".into()),
            Some("12000".into()),
            Some(r#"[{"paymentDate":"2025-01-15","receiptId":"R-1","paymentAmount":3000}]"#.into()),
        )
        .unwrap();
        assert_eq!(seed.account_number, "A-1001");
        assert_eq!(seed.cash_balance, Some(12000));
        assert_eq!(seed.payments.len(), 1);
        assert_eq!(seed.payments[0].cash_balance, None);
    }

    #[test]
    fn test_seed_defaults_optional_attributes() {
        let seed = PaymentSeed::parse(Some("A-7".into()), None, Some("  ".into())).unwrap();
        assert_eq!(seed.cash_balance, None);
        assert!(seed.payments.is_empty());
    }

    #[test]
    fn test_recorded_payment_updates_balance_and_appends_row() {
        let mut ledger = PaymentLedger {
            cash_balance: Some(4000),
            payments: Vec::new(),
        };
        let reply = r#"{"status":"success","message":"Payment recorded","data":{"paymentDate":"2025-01-15","receiptId":"R-9","paymentAmount":3000,"cashBalance":1000}}"#;
        let reply: crate::api::ServerReply<crate::api::PaymentBody> = serde_json::from_str(reply).unwrap();
        ledger.record(reply.into_result().unwrap().body.data);

        assert_eq!(ledger.balance_text(), "1000");
        assert_eq!(
            ledger.rows(),
            vec![PaymentRow {
                date: "15 Jan 2025".to_string(),
                receipt_id: "R-9".to_string(),
                amount: "3000".to_string(),
            }]
        );
    }

    #[test]
    fn test_payment_without_balance_keeps_previous_balance() {
        let mut ledger = PaymentLedger {
            cash_balance: Some(4000),
            payments: Vec::new(),
        };
        ledger.record(PaymentRecord {
            payment_date: "2025-02-15".into(),
            receipt_id: "R-10".into(),
            payment_amount: 500,
            cash_balance: None,
        });
        assert_eq!(ledger.balance_text(), "4000");
        assert_eq!(ledger.payments.len(), 1);
        assert_eq!(PaymentLedger::default().balance_text(), "-");
    }

    #[test]
    fn test_seed_rejects_bad_input() {
        assert!(PaymentSeed::parse(None, None, None).is_err());
        assert!(PaymentSeed::parse(Some("".into()), None, None).is_err());
        assert!(PaymentSeed::parse(Some("A-7".into()), Some("lots".into()), None).is_err());
        assert!(PaymentSeed::parse(Some("A-7".into()), None, Some("{".into())).is_err());
    }
}
