use crate::config::TICK_MS;
use crate::utils::{parse_field, resolve_shortcut, Shortcut};
use gloo_timers::callback::Interval;
use log::warn;
use std::ops::RangeInclusive;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

/// State and callbacks for one clamped numeric input field.
#[derive(Clone)]
pub struct ClampedInput {
    /// The current text content of the input field.
    pub text: String,
    /// The parsed value, always inside the field's range.
    pub value: u32,
    /// `oninput`: keep the typed text and re-derive the value from it.
    pub on_text_input: Callback<InputEvent>,
    /// `onchange`: rewrite the text to the clamped value.
    pub on_commit: Callback<Event>,
}

#[hook]
pub fn use_clamped_input(initial_value: u32, range: RangeInclusive<u32>) -> ClampedInput {
    let value_handle = use_state(|| initial_value);
    let text_handle = use_state(|| initial_value.to_string());

    let on_text_input = {
        let value_setter = value_handle.clone();
        let text_setter = text_handle.clone();
        let range = range.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            value_setter.set(parse_field(&text, &range));
            text_setter.set(text);
        })
    };

    let on_commit = {
        let value_setter = value_handle.clone();
        let text_setter = text_handle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let clamped = parse_field(&input.value(), &range);
            value_setter.set(clamped);
            text_setter.set(clamped.to_string());
        })
    };

    ClampedInput {
        text: (*text_handle).clone(),
        value: *value_handle,
        on_text_input,
        on_commit,
    }
}

/// Emit `on_tick` every [`TICK_MS`] while `active` is true. The interval is
/// dropped (and cancelled) as soon as `active` turns false or the component
/// unmounts.
#[hook]
pub fn use_ticker(active: bool, on_tick: Callback<()>) {
    use_effect_with(active, move |active| {
        let interval = active.then(|| Interval::new(TICK_MS, move || on_tick.emit(())));
        move || drop(interval)
    });
}

/// Listen for keyboard shortcuts on the whole document.
#[hook]
pub fn use_keyboard_shortcuts(on_shortcut: Callback<Shortcut>) {
    use_effect_with((), move |_| {
        let document = gloo_utils::document();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            let tag = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.tag_name());
            let ctrl_or_meta = e.ctrl_key() || e.meta_key();
            if let Some(shortcut) = resolve_shortcut(&e.code(), ctrl_or_meta, tag.as_deref()) {
                if shortcut != Shortcut::Lap {
                    // keep Space from scrolling and Ctrl+R from reloading
                    e.prevent_default();
                }
                on_shortcut.emit(shortcut);
            }
        });

        if let Err(e) = document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            warn!("Could not register keyboard shortcuts: {:?}", e);
        }

        move || {
            if let Err(e) = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                warn!("Could not remove keyboard shortcuts: {:?}", e);
            }
            drop(listener);
        }
    });
}
