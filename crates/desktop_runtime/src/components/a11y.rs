//! DOM focus helpers for the shell.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Focuses an element by id and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return false;
        };
        let _ = element.focus();
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Focuses an element by id on the next frame, after the pending render has landed.
pub(crate) fn focus_element_by_id_deferred(id: String) {
    #[cfg(target_arch = "wasm32")]
    leptos::request_animation_frame(move || {
        if !focus_element_by_id(&id) {
            leptos::logging::log!("focus target `{id}` is not mounted");
        }
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = focus_element_by_id(&id);
}
