//! Browser-side completion alerts: a desktop notification and a short beep.

use crate::config::{ALERT_SOUND, NOTIFICATION_ICON};
use log::{debug, info, warn};
use online_stopwatch::{CompletionNotifier, Language, Translator};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, Notification, NotificationOptions, NotificationPermission};

/// Alerts in whatever language the page currently shows.
pub struct BrowserNotifier {
    language: Rc<Cell<Language>>,
}

impl BrowserNotifier {
    pub fn new(language: Rc<Cell<Language>>) -> Self {
        Self { language }
    }
}

impl CompletionNotifier for BrowserNotifier {
    fn notify_finished(&self) {
        let t = Translator::new(self.language.get());
        let title = t.get_text("timer_done_title");
        if let Err(e) = show_notification(title, t.get_text("timer_done_body")) {
            warn!("Timer notification failed: {:?}", e);
        }
        if let Err(e) = play_alert_sound() {
            warn!("Timer sound failed: {:?}", e);
        }
    }
}

fn notifications_supported() -> bool {
    let window = gloo_utils::window();
    js_sys::Reflect::has(&window, &JsValue::from_str("Notification")).unwrap_or(false)
}

fn show_notification(title: &str, body: &str) -> Result<(), JsValue> {
    if !notifications_supported() || Notification::permission() != NotificationPermission::Granted {
        debug!("Notifications not granted, skipping");
        return Ok(());
    }
    let options = NotificationOptions::new();
    options.set_body(body);
    options.set_icon(NOTIFICATION_ICON);
    Notification::new_with_options(title, &options)?;
    Ok(())
}

fn play_alert_sound() -> Result<(), JsValue> {
    let audio = HtmlAudioElement::new_with_src(ALERT_SOUND)?;
    let playback = audio.play()?;
    wasm_bindgen_futures::spawn_local(async move {
        // autoplay policies may refuse; nothing to do about it
        if let Err(e) = JsFuture::from(playback).await {
            debug!("Alert sound rejected: {:?}", e);
        }
    });
    Ok(())
}

/// Ask once for notification permission if the user has not decided yet.
pub fn request_notification_permission() {
    if !notifications_supported() || Notification::permission() != NotificationPermission::Default {
        return;
    }
    match Notification::request_permission() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(answer) => info!("Notification permission: {:?}", answer.as_string()),
                Err(e) => warn!("Notification permission request failed: {:?}", e),
            }
        }),
        Err(e) => warn!("Notification permission request failed: {:?}", e),
    }
}
