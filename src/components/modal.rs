//! Modal Component
//!
//! Overlay dialog shell. Each modal is either closed or open; an explicit
//! close, a click on the backdrop or the Escape key closes it.

use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close,
    OutsideClick,
    Escape,
}

impl ModalState {
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Open => ModalState::Open,
            ModalEvent::Close | ModalEvent::OutsideClick | ModalEvent::Escape => ModalState::Closed,
        }
    }
}

/// Open/closed state of one modal
#[derive(Clone, Copy)]
pub struct ModalHandle {
    state: RwSignal<ModalState>,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::Closed),
        }
    }

    pub fn send(&self, event: ModalEvent) {
        self.state.update(|s| *s = s.apply(event));
    }

    pub fn open(&self) {
        self.send(ModalEvent::Open);
    }

    pub fn close(&self) {
        self.send(ModalEvent::Close);
    }

    /// Tracked
    pub fn is_open(&self) -> bool {
        self.state.get() == ModalState::Open
    }

    pub fn is_open_untracked(&self) -> bool {
        self.state.get_untracked() == ModalState::Open
    }
}

impl Default for ModalHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal shell with title bar and close button
///
/// Children are rendered once and stay mounted while closed, so form input
/// survives closing and reopening.
#[component]
pub fn Modal(
    handle: ModalHandle,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] extra_class: String,
    /// Runs after the modal closes by any means
    #[prop(optional, into)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let close_with = move |event: ModalEvent| {
        if handle.is_open_untracked() {
            handle.send(event);
            if let Some(cb) = on_close {
                cb.run(());
            }
        }
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_with(ModalEvent::Escape);
        }
    });
    on_cleanup(move || keydown.remove());

    let class = move || {
        let base = if handle.is_open() { "modal open" } else { "modal" };
        if extra_class.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", base, extra_class)
        }
    };

    view! {
        <div
            class=class
            on:click=move |ev| {
                // Only clicks on the backdrop itself, not bubbled from content
                if ev.target() == ev.current_target() {
                    close_with(ModalEvent::OutsideClick);
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button type="button" class="modal-close" on:click=move |_| close_with(ModalEvent::Close)>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
