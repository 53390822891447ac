//! Form Submission
//!
//! Shared validate → busy → send → report cycle used by every create form,
//! plus the submit button that reflects it.

use std::future::Future;

use leptos::prelude::*;

use crate::api::Accepted;
use crate::error::ApiError;
use crate::forms::FormPayload;
use crate::toast::Notify;

/// Log (where appropriate) and toast a failed submission
pub fn report_error(notifier: &impl Notify, err: &ApiError, fallback: &str) {
    match err {
        ApiError::MissingField(_) => {}
        ApiError::Server(_) => leptos::logging::warn!("[FORM] {}", err),
        _ => leptos::logging::error!("[FORM] {}", err),
    }
    if let Some(message) = err.toast_message(fallback) {
        notifier.notify(message);
    }
}

/// Run one submission.
///
/// Validation failures stop before `send` is called. `busy` is raised for
/// the duration of the request and always lowered afterwards. Returns the
/// accepted payload on success.
pub async fn submit_form<P, T, F, Fut, N>(
    payload: P,
    busy: RwSignal<bool>,
    notifier: N,
    fallback: &str,
    send: F,
) -> Option<T>
where
    P: FormPayload,
    N: Notify,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<Accepted<T>, ApiError>>,
{
    if let Err(err) = payload.validate() {
        report_error(&notifier, &err, fallback);
        return None;
    }

    busy.set(true);
    let result = send(payload).await;
    busy.set(false);

    match result {
        Ok(accepted) => {
            notifier.notify(format!("Success: {}", accepted.message));
            Some(accepted.body)
        }
        Err(err) => {
            report_error(&notifier, &err, fallback);
            None
        }
    }
}

/// Submit button that disables itself and swaps to a busy label
#[component]
pub fn SubmitButton(
    busy: RwSignal<bool>,
    idle_label: &'static str,
    busy_label: &'static str,
    #[prop(optional)] class: &'static str,
    /// Plain button with a click handler instead of a form submit
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let button_type = if on_click.is_some() { "button" } else { "submit" };
    view! {
        <button
            type=button_type
            class=format!("submit-btn {}", class)
            disabled=move || busy.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {move || if busy.get() { busy_label } else { idle_label }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::forms::{AccountDraft, NewPayment};

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notify for Recorder {
        fn notify(&self, message: String) {
            self.0.borrow_mut().push(message);
        }
    }

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    fn complete_draft() -> AccountDraft {
        AccountDraft {
            account_number: "A-1001".into(),
            sale_date: "2025-01-15".into(),
            customer_uid: "1000001".into(),
            first_guarantor_uid: "5000001".into(),
            second_guarantor_uid: "5000002".into(),
            product_category: "Television".into(),
            selected_model: "Walton 32 LED".into(),
            cash_value: "30000".into(),
            hire_value: "36000".into(),
            down_payment: "6000".into(),
            monthly_payment: "2500".into(),
            length: "12".into(),
        }
    }

    fn payment() -> NewPayment {
        NewPayment {
            amount: "3000".into(),
            receipt_id: "R-1".into(),
            date: "2025-01-15".into(),
        }
    }

    #[test]
    fn test_missing_field_never_reaches_send() {
        let owner = Owner::new();
        owner.set();
        let busy = RwSignal::new(false);
        let recorder = Recorder::default();
        let sent = Rc::new(Cell::new(false));

        let draft = AccountDraft {
            cash_value: String::new(),
            ..complete_draft()
        };
        let sent_flag = sent.clone();
        let result: Option<()> = block_on(submit_form(draft, busy, recorder.clone(), "fallback", |_| async move {
            sent_flag.set(true);
            Ok(Accepted { message: "Account created".into(), body: () })
        }));

        assert!(result.is_none());
        assert!(!sent.get());
        assert!(!busy.get_untracked());
        assert_eq!(recorder.messages(), vec![r#"Please fill in the "cashValue" field."#.to_string()]);
    }

    #[test]
    fn test_busy_is_raised_during_send_and_lowered_after_errors() {
        let owner = Owner::new();
        owner.set();
        let busy = RwSignal::new(false);

        for err in [
            ApiError::Server("Receipt already used".into()),
            ApiError::Transport("offline".into()),
        ] {
            let recorder = Recorder::default();
            let result: Option<()> = block_on(submit_form(payment(), busy, recorder.clone(), "fallback", |_| {
                let during = busy.get_untracked();
                async move {
                    assert!(during);
                    Err(err)
                }
            }));
            assert!(result.is_none());
            assert!(!busy.get_untracked());
            assert_eq!(recorder.messages().len(), 1);
        }
    }

    #[test]
    fn test_failures_are_reported_by_kind() {
        let owner = Owner::new();
        owner.set();
        let busy = RwSignal::new(false);

        let server = Recorder::default();
        let _: Option<()> = block_on(submit_form(payment(), busy, server.clone(), "fallback", |_| async {
            Err(ApiError::Server("Receipt already used".into()))
        }));
        assert_eq!(server.messages(), vec!["Error: Receipt already used".to_string()]);

        let transport = Recorder::default();
        let _: Option<()> = block_on(submit_form(
            payment(),
            busy,
            transport.clone(),
            "An error occurred while making the payment.",
            |_| async { Err(ApiError::Decode("bad json".into())) },
        ));
        assert_eq!(
            transport.messages(),
            vec!["An error occurred while making the payment.".to_string()]
        );

        let csrf = Recorder::default();
        let _: Option<()> = block_on(submit_form(payment(), busy, csrf.clone(), "fallback", |_| async {
            Err(ApiError::MissingCsrfToken)
        }));
        assert!(csrf.messages().is_empty());
    }

    #[test]
    fn test_success_returns_body_and_announces_message() {
        let owner = Owner::new();
        owner.set();
        let busy = RwSignal::new(false);
        let recorder = Recorder::default();

        let result = block_on(submit_form(complete_draft(), busy, recorder.clone(), "fallback", |draft| async move {
            Ok(Accepted {
                message: "Account created".into(),
                body: draft.account_number,
            })
        }));

        assert_eq!(result.as_deref(), Some("A-1001"));
        assert!(!busy.get_untracked());
        assert_eq!(recorder.messages(), vec!["Success: Account created".to_string()]);
    }
}
