//! Mobile Navbar
//!
//! Slide-in menu on small screens: the menu button opens it, the close
//! button or a click on the overlay dismisses it.

use leptos::prelude::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

fn set_menu_open(menu: &Element, overlay: &Element, open: bool) {
    let _ = menu.class_list().toggle_with_force("active", open);
    let _ = overlay.class_list().toggle_with_force("active", open);
}

fn on_click(target: &Element, menu: &Element, overlay: &Element, open: bool) {
    let (menu, overlay) = (menu.clone(), overlay.clone());
    let cb = Closure::<dyn FnMut()>::new(move || set_menu_open(&menu, &overlay, open));
    let _ = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Wire the navbar if the page has one
pub fn wire_mobile_menu() {
    let doc = document();
    let by_id = |id: &str| doc.get_element_by_id(id);
    let (Some(button), Some(close), Some(menu), Some(overlay)) = (
        by_id("mobileMenuButton"),
        by_id("closeMobileMenu"),
        by_id("mobileMenu"),
        by_id("overlay"),
    ) else {
        return;
    };

    on_click(&button, &menu, &overlay, true);
    on_click(&close, &menu, &overlay, false);
    on_click(&overlay, &menu, &overlay, false);
}
