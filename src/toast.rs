//! Toast Notifications
//!
//! Short-lived, self-dismissing message overlays. Every call gets its own
//! overlay and its own timer; nothing is queued, merged or remembered.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Length of the CSS leave animation
const LEAVE_ANIMATION_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub leaving: bool,
}

/// Toasts currently on screen
#[derive(Clone, Debug, Default)]
pub struct ToastList {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message,
            leaving: false,
        });
        id
    }

    pub fn mark_leaving(&mut self, id: u32) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn get(&self, id: u32) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for raising toasts, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    list: RwSignal<ToastList>,
    default_duration_ms: u32,
}

impl Toaster {
    pub fn new(default_duration_ms: u32) -> Self {
        Self {
            list: RwSignal::new(ToastList::default()),
            default_duration_ms,
        }
    }

    /// Show a toast for the configured default duration
    pub fn show(&self, message: impl Into<String>) {
        self.show_for(message, self.default_duration_ms);
    }

    pub fn show_for(&self, message: impl Into<String>, duration_ms: u32) {
        let id = self.list.write().push(message.into());
        let list = self.list;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            list.update(|l| l.mark_leaving(id));
            TimeoutFuture::new(LEAVE_ANIMATION_MS).await;
            list.update(|l| l.remove(id));
        });
    }
}

/// Where form workflows report their outcome
pub trait Notify {
    fn notify(&self, message: String);
}

impl Notify for Toaster {
    fn notify(&self, message: String) {
        self.show(message);
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Overlay container rendering every live toast
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let list = toaster.list;

    view! {
        <div class="toast-container">
            <For
                each=move || list.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = move || {
                        let leaving = list.with(|l| l.get(id).map(|t| t.leaving).unwrap_or(true));
                        if leaving { "toast toast-leave" } else { "toast toast-enter" }
                    };
                    view! {
                        <div class=class role="status">{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
