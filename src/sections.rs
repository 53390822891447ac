//! Collapsible Sections
//!
//! Show/hide toggles for the server-rendered sections of the account
//! details page. A section `<id>` pairs with an icon `<id>Icon` that swaps
//! between `fa-plus` and `fa-minus`.

use leptos::prelude::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Sections opened on load
pub const DETAIL_SECTIONS: &[&str] = &[
    "customerInfo",
    "guarantorDetails",
    "contractTerms",
    "productDetails",
    "paymentSchedule",
];

/// Class state of one section and its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub hidden: bool,
    pub plus: bool,
    pub minus: bool,
}

impl SectionState {
    /// Every class flips, so two toggles are a no-op
    pub fn toggled(self) -> Self {
        Self {
            hidden: !self.hidden,
            plus: !self.plus,
            minus: !self.minus,
        }
    }

    fn read(section: &Element, icon: Option<&Element>) -> Self {
        let has = |el: Option<&Element>, class: &str| el.map(|e| e.class_list().contains(class)).unwrap_or(false);
        Self {
            hidden: section.class_list().contains("hidden"),
            plus: has(icon, "fa-plus"),
            minus: has(icon, "fa-minus"),
        }
    }

    fn write(self, section: &Element, icon: Option<&Element>) {
        let _ = section.class_list().toggle_with_force("hidden", self.hidden);
        if let Some(icon) = icon {
            let _ = icon.class_list().toggle_with_force("fa-plus", self.plus);
            let _ = icon.class_list().toggle_with_force("fa-minus", self.minus);
        }
    }
}

/// Flip one section; `None` when the page has no such section
pub fn toggle_section(doc: &Document, id: &str) -> Option<SectionState> {
    let section = doc.get_element_by_id(id)?;
    let icon = doc.get_element_by_id(&format!("{}Icon", id));
    let state = SectionState::read(&section, icon.as_ref()).toggled();
    state.write(&section, icon.as_ref());
    Some(state)
}

/// Open every detail section and hook up `data-section-toggle` headers
pub fn wire_sections() {
    let doc = document();
    for id in DETAIL_SECTIONS {
        toggle_section(&doc, id);
    }

    let Ok(headers) = doc.query_selector_all("[data-section-toggle]") else {
        return;
    };
    for i in 0..headers.length() {
        let Some(header) = headers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(id) = header.get_attribute("data-section-toggle") else {
            continue;
        };
        let cb = Closure::<dyn FnMut()>::new(move || {
            if toggle_section(&document(), &id).is_none() {
                web_sys::console::warn_1(&format!("[SECTIONS] No section #{}", id).into());
            }
        });
        let _ = header.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_any_state() {
        for bits in 0..8u8 {
            let state = SectionState {
                hidden: bits & 1 != 0,
                plus: bits & 2 != 0,
                minus: bits & 4 != 0,
            };
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_toggle_opens_a_collapsed_section() {
        let collapsed = SectionState { hidden: true, plus: true, minus: false };
        let opened = collapsed.toggled();
        assert!(!opened.hidden);
        assert!(opened.minus);
        assert!(!opened.plus);
    }
}
