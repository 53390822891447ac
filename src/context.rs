//! Page Context
//!
//! Shared state of the account creation page, provided via the Leptos
//! Context API: modal handles and the customer/guarantor selections.

use leptos::prelude::*;

use crate::components::ModalHandle;
use crate::models::{FindTarget, GuarantorSlot, Uid};

/// Account-creation-page signals provided via context
#[derive(Clone, Copy)]
pub struct AccountContext {
    pub find_modal: ModalHandle,
    pub customer_modal: ModalHandle,
    pub guarantor_modal: ModalHandle,
    /// What the find modal is currently selecting for
    pub find_target: RwSignal<Option<FindTarget>>,
    /// Slot the create-guarantor modal fills (None = not opened for a slot)
    pub guarantor_slot: RwSignal<Option<GuarantorSlot>>,
    pub customer_uid: RwSignal<Option<Uid>>,
    pub first_guarantor_uid: RwSignal<Option<Uid>>,
    pub second_guarantor_uid: RwSignal<Option<Uid>>,
}

impl AccountContext {
    pub fn new() -> Self {
        Self {
            find_modal: ModalHandle::new(),
            customer_modal: ModalHandle::new(),
            guarantor_modal: ModalHandle::new(),
            find_target: RwSignal::new(None),
            guarantor_slot: RwSignal::new(None),
            customer_uid: RwSignal::new(None),
            first_guarantor_uid: RwSignal::new(None),
            second_guarantor_uid: RwSignal::new(None),
        }
    }

    /// Selection field a find target writes into
    pub fn selection(&self, target: FindTarget) -> RwSignal<Option<Uid>> {
        match target {
            FindTarget::Customer => self.customer_uid,
            FindTarget::Guarantor(slot) => self.guarantor_selection(slot),
        }
    }

    pub fn guarantor_selection(&self, slot: GuarantorSlot) -> RwSignal<Option<Uid>> {
        match slot {
            GuarantorSlot::First => self.first_guarantor_uid,
            GuarantorSlot::Second => self.second_guarantor_uid,
        }
    }

    pub fn open_find(&self, target: FindTarget) {
        self.find_target.set(Some(target));
        self.find_modal.open();
    }

    /// Record a picked customer/guarantor and close the find modal
    pub fn select(&self, target: FindTarget, uid: Uid) {
        self.selection(target).set(Some(uid));
        self.find_modal.close();
    }

    pub fn open_create_guarantor(&self, slot: GuarantorSlot) {
        self.guarantor_slot.set(Some(slot));
        self.guarantor_modal.open();
    }

    pub fn close_create_guarantor(&self) {
        self.guarantor_modal.close();
        self.guarantor_slot.set(None);
    }

    pub fn clear_selections(&self) {
        self.customer_uid.set(None);
        self.first_guarantor_uid.set(None);
        self.second_guarantor_uid.set(None);
    }
}

impl Default for AccountContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_account_context() -> AccountContext {
    expect_context::<AccountContext>()
}
