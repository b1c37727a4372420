//! Responsive breakpoint tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! One min-width threshold divides desktop and mobile rendering, evaluated
//! continuously through a media-query listener so the shell reacts to
//! viewport resizes, not just the width at mount.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Minimum viewport width rendered with the desktop layout.
pub const DESKTOP_MIN_WIDTH_PX: u32 = 1000;

/// The media query string for the desktop breakpoint.
pub fn desktop_media_query() -> String {
    format!("(min-width: {DESKTOP_MIN_WIDTH_PX}px)")
}

/// Signal tracking whether the viewport is at desktop width.
///
/// Subscribes to the breakpoint's `MediaQueryList`; updates after the
/// calling component is disposed are discarded. Defaults to desktop on the
/// server and in non-browser environments.
pub fn use_is_desktop() -> RwSignal<bool> {
    let is_desktop = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let mql = web_sys::window()
            .and_then(|w| w.match_media(&desktop_media_query()).ok().flatten());
        if let Some(mql) = mql {
            is_desktop.set(mql.matches());

            let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| {
                    let _ = is_desktop.try_set(ev.matches());
                },
            );
            mql.set_onchange(Some(on_change.as_ref().unchecked_ref()));
            on_change.forget();
        }
    }

    is_desktop
}
