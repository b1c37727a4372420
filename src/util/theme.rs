//! Theme mode application and persistence.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class. Requires a browser environment;
//! the session store remains the source of truth for the current mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::session::ThemeMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "relay_theme_mode";

/// Read the theme preference from localStorage.
///
/// Falls back to the system preference when nothing usable is stored.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return ThemeMode::Light,
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ThemeMode::from_storage_value(&raw) {
                    return mode;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if mode.is_dark() {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Switch to the opposite mode, apply it, and persist the new preference.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.storage_value());
            }
        }
    }
    next
}
