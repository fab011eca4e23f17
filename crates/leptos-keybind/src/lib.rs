//! Leptos Global Key Bindings
//!
//! Window-level keydown listener tied to the lifetime of the component that
//! binds it. The listener is added once when the component is created and
//! removed when its reactive owner is cleaned up.

use leptos::prelude::*;

/// Keys the bindings care about, decoded from `KeyboardEvent.key`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    /// Any other key, carrying the raw `key` value
    Other(String),
}

impl Key {
    /// Decode a `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self::from_key_name(&ev.key())
    }
}

/// Bind a keydown handler on `window` for the current owner's lifetime.
///
/// Call this from a component body: components run once per mount, so the
/// listener is registered exactly once and is removed in `on_cleanup` when
/// the component unmounts. The handler receives the decoded key and the raw
/// event.
pub fn bind_global_keydown<F>(on_key: F)
where
    F: Fn(Key, &web_sys::KeyboardEvent) + 'static,
{
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let key = Key::from_event(&ev);
        on_key(key, &ev);
    });
    log::debug!("[KEYS] keydown listener bound");

    on_cleanup(move || {
        handle.remove();
        log::debug!("[KEYS] keydown listener removed");
    });
}
