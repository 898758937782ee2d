//! Main module for the online stopwatch & timer using Yew.
//! Owns the composition root and wires components, ticks and shortcuts to it.

use log::{info, warn};
use online_stopwatch::store::Preferences;
use online_stopwatch::{
    CountdownConfig, Language, Mode, Theme, ThemeColor, Translator, WallClock, Workspace,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod notify;
mod utils;

use components::{
    ClockFace, ColorPicker, ControlButtons, LanguageSelect, LapList, ModeTabs, PageTitle,
    TimeInputs,
};
use hooks::{use_keyboard_shortcuts, use_ticker};
use notify::{request_notification_permission, BrowserNotifier};
use utils::{ButtonPhase, Shortcut};

type AppWorkspace = Workspace<WallClock>;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Callback that mutates the workspace and then re-renders.
fn workspace_callback<E: 'static>(
    workspace: &Rc<RefCell<AppWorkspace>>,
    redraw: &UseForceUpdateHandle,
    action: impl Fn(&mut AppWorkspace) + 'static,
) -> Callback<E> {
    let workspace = workspace.clone();
    let redraw = redraw.clone();
    Callback::from(move |_: E| {
        action(&mut workspace.borrow_mut());
        redraw.force_update();
    })
}

/// Reflect the language on `<html lang>`, the tab title and the meta
/// description.
fn apply_document_language(language: Language) {
    let document = gloo_utils::document();
    let t = Translator::new(language);
    if let Some(root) = document.document_element() {
        if let Err(e) = root.set_attribute("lang", language.code()) {
            warn!("Could not set document language: {:?}", e);
        }
    }
    document.set_title(t.get_text("title"));
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        if let Err(e) = meta.set_attribute("content", t.get_text("subtitle")) {
            warn!("Could not set meta description: {:?}", e);
        }
    }
}

fn panel_style(theme: &Theme, visible: bool) -> String {
    format!(
        "{} display: {};",
        theme.container_style(),
        if visible { "block" } else { "none" }
    )
}

// ──────────────────────────────────────────────────────────────────────────────

/// Composition root: one stopwatch, one countdown, shared theme and language.
#[function_component(App)]
fn app() -> Html {
    let prefs = use_memo((), |_| Preferences::browser_or_memory());
    let language = use_state(|| prefs.language());
    let theme = use_state(|| Theme::new(prefs.theme_color()));
    let picker_open = use_state(|| false);
    let redraw = use_force_update();

    // The notifier outlives renders, so it reads the language through a cell.
    let alert_language = {
        let initial = *language;
        use_memo((), move |_| Cell::new(initial))
    };
    let workspace = {
        let alert_language = alert_language.clone();
        use_mut_ref(move || {
            AppWorkspace::new(WallClock, Box::new(BrowserNotifier::new(alert_language)))
        })
    };
    {
        let alert_language = alert_language.clone();
        use_effect_with(*language, move |lang| {
            apply_document_language(*lang);
            alert_language.set(*lang);
            || ()
        });
    }

    use_effect_with((), |_| {
        request_notification_permission();
        info!("Online stopwatch started");
        info!("Shortcuts: Space start/pause, Ctrl+R reset, L lap (while running)");
        || ()
    });

    // Snapshot for this render
    let (mode, sw_display, sw_phase, laps, cd_display, cd_phase, cd_config) = {
        let ws = workspace.borrow();
        (
            ws.mode(),
            ws.stopwatch.tick(),
            ButtonPhase::from(ws.stopwatch.state()),
            Rc::new(ws.stopwatch.laps().to_vec()),
            ws.countdown.display(),
            ButtonPhase::from(ws.countdown.state()),
            ws.countdown.config(),
        )
    };

    // Periodic ticks only while something runs
    let on_stopwatch_tick = {
        let redraw = redraw.clone();
        Callback::from(move |_| redraw.force_update())
    };
    use_ticker(sw_phase == ButtonPhase::Running, on_stopwatch_tick);
    use_ticker(
        cd_phase == ButtonPhase::Running,
        workspace_callback(&workspace, &redraw, |ws| {
            ws.countdown.tick();
        }),
    );

    use_keyboard_shortcuts({
        let workspace = workspace.clone();
        let redraw = redraw.clone();
        Callback::from(move |shortcut: Shortcut| {
            {
                let mut ws = workspace.borrow_mut();
                match shortcut {
                    Shortcut::Toggle => {
                        ws.toggle_active();
                    }
                    Shortcut::Reset => ws.reset_active(),
                    Shortcut::Lap => {
                        ws.lap_active();
                    }
                }
            }
            redraw.force_update();
        })
    });

    let on_mode = {
        let workspace = workspace.clone();
        let redraw = redraw.clone();
        Callback::from(move |mode: Mode| {
            workspace.borrow_mut().switch_to(mode);
            redraw.force_update();
        })
    };

    let on_config = {
        let workspace = workspace.clone();
        let redraw = redraw.clone();
        Callback::from(move |config: CountdownConfig| {
            let mut ws = workspace.borrow_mut();
            if ws.countdown.config() != config {
                ws.countdown.set_config(config);
                redraw.force_update();
            }
        })
    };

    let on_language = {
        let prefs = prefs.clone();
        let language = language.clone();
        Callback::from(move |lang: Language| {
            prefs.set_language(lang);
            language.set(lang);
        })
    };

    let on_pick = {
        let prefs = prefs.clone();
        let theme = theme.clone();
        Callback::from(move |color: ThemeColor| {
            prefs.set_theme_color(&color);
            theme.set(Theme::new(color));
        })
    };

    let open_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: MouseEvent| picker_open.set(true))
    };
    let close_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: ()| picker_open.set(false))
    };

    let t = Translator::new(*language);

    html! {
        <ContextProvider<Theme> context={(*theme).clone()}>
            <div class="app">
                <header class="header">
                    <PageTitle language={*language} />
                    <p class="subtitle">{ t.get_text("subtitle") }</p>
                    <LanguageSelect language={*language} on_change={on_language} />
                </header>

                <ModeTabs mode={mode} language={*language} on_select={on_mode} />

                <div class="stopwatch" id="stopwatchContainer"
                    style={panel_style(&theme, mode == Mode::Stopwatch)}>
                    <ClockFace display={sw_display} id="display" />
                    <ControlButtons
                        phase={sw_phase}
                        language={*language}
                        on_start={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| { ws.stopwatch.start(); })}
                        on_pause={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| { ws.stopwatch.pause(); })}
                        on_reset={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| ws.stopwatch.reset())}
                        on_lap={Some(workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| { ws.stopwatch.lap(); }))}
                        on_settings={open_picker.clone()}
                    />
                    <LapList laps={laps} language={*language} />
                </div>

                <div class="timer" id="timerContainer"
                    style={panel_style(&theme, mode == Mode::Timer)}>
                    <TimeInputs
                        config={cd_config}
                        disabled={cd_phase == ButtonPhase::Running}
                        language={*language}
                        on_change={on_config}
                    />
                    <ClockFace display={cd_display} id="timerDisplay" />
                    <ControlButtons
                        phase={cd_phase}
                        language={*language}
                        on_start={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| { ws.countdown.start(); })}
                        on_pause={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| ws.countdown.pause())}
                        on_reset={workspace_callback::<MouseEvent>(&workspace, &redraw, |ws| ws.countdown.reset())}
                        on_settings={open_picker}
                    />
                </div>

                <p class="shortcuts">{ t.get_text("shortcuts") }</p>

                if *picker_open {
                    <ColorPicker
                        current={theme.color.clone()}
                        language={*language}
                        on_pick={on_pick}
                        on_close={close_picker}
                    />
                }
            </div>
        </ContextProvider<Theme>>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
