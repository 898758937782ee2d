//! Yew view components for the stopwatch and timer panels.
//!
//! Components here only render what they are given and report user actions
//! through callbacks; the state machines live in the app's `Workspace`.

use crate::config::{HOURS_RANGE, MINUTES_RANGE, SECONDS_RANGE};
use crate::hooks::{use_clamped_input, ClampedInput};
use crate::utils::ButtonPhase;
use online_stopwatch::i18n::{title_layout, TitleLayout};
use online_stopwatch::theme::PALETTE;
use online_stopwatch::{
    ClockDisplay, CountdownConfig, Language, LapRecord, Mode, Theme, ThemeColor, Translator,
};
use std::rc::Rc;
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClockFaceProps {
    pub display: ClockDisplay,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(ClockFace)]
pub fn clock_face(props: &ClockFaceProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    html! {
        <div class="display" id={props.id.clone()} style={theme.display_style()}>
            <span class="time-main">{ props.display.main.clone() }</span>
            <span class="time-ms">{ format!(".{}", props.display.fractional) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlButtonsProps {
    pub phase: ButtonPhase,
    pub language: Language,
    pub on_start: Callback<MouseEvent>,
    pub on_pause: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
    pub on_settings: Callback<MouseEvent>,
    /// Shown only for the stopwatch.
    #[prop_or_default]
    pub on_lap: Option<Callback<MouseEvent>>,
}

#[function_component(ControlButtons)]
pub fn control_buttons(props: &ControlButtonsProps) -> Html {
    let t = Translator::new(props.language);
    html! {
        <div class="controls">
            <button class="btn btn-start"
                disabled={props.phase.start_disabled()}
                onclick={props.on_start.clone()}>
                { t.get_text(props.phase.start_label_key()) }
            </button>
            <button class="btn btn-pause"
                disabled={props.phase.pause_disabled()}
                onclick={props.on_pause.clone()}>
                { t.get_text("pause") }
            </button>
            if let Some(on_lap) = props.on_lap.clone() {
                <button class="btn btn-lap"
                    disabled={props.phase.pause_disabled()}
                    onclick={on_lap}>
                    { t.get_text("lap") }
                </button>
            }
            <button class="btn btn-reset" onclick={props.on_reset.clone()}>
                { t.get_text("reset") }
            </button>
            <button class="btn btn-settings" title={t.get_text("settings").to_string()}
                onclick={props.on_settings.clone()}>
                { "⚙" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: Rc<Vec<LapRecord>>,
    pub language: Language,
}

/// Recorded laps, newest at the bottom and kept scrolled into view.
#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let list_ref = use_node_ref();
    {
        let list_ref = list_ref.clone();
        use_effect_with(props.laps.len(), move |_| {
            if let Some(list) = list_ref.cast::<Element>() {
                list.set_scroll_top(list.scroll_height());
            }
            || ()
        });
    }

    let label = Translator::new(props.language).get_text("lap");
    html! {
        <ul class="lap-list" id="lapList" ref={list_ref} style={theme.lap_list_style()}>
            { props.laps.iter().map(|lap| {
                let time = lap.display();
                html! {
                    <li key={lap.index.to_string()}>
                        <span>{ format!("{} {}", label, lap.index) }</span>
                        <span class="lap-time">
                            { time.main.clone() }
                            <span class="lap-ms">{ format!(".{}", time.fractional) }</span>
                        </span>
                    </li>
                }
            }).collect::<Html>() }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeInputsProps {
    pub config: CountdownConfig,
    /// Locked while the countdown runs.
    pub disabled: bool,
    pub language: Language,
    pub on_change: Callback<CountdownConfig>,
}

#[function_component(TimeInputs)]
pub fn time_inputs(props: &TimeInputsProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let t = Translator::new(props.language);
    let hours = use_clamped_input(props.config.hours(), HOURS_RANGE);
    let minutes = use_clamped_input(props.config.minutes(), MINUTES_RANGE);
    let seconds = use_clamped_input(props.config.seconds(), SECONDS_RANGE);

    {
        let on_change = props.on_change.clone();
        use_effect_with((hours.value, minutes.value, seconds.value), move |&(h, m, s)| {
            on_change.emit(CountdownConfig::new(h, m, s));
            || ()
        });
    }

    let field = |id: &'static str, label_key: &'static str, input: &ClampedInput, max: u32| {
        html! {
            <div class="time-input">
                <input type="number" id={id} min="0" max={max.to_string()}
                    value={input.text.clone()}
                    disabled={props.disabled}
                    style={theme.display_style()}
                    oninput={input.on_text_input.clone()}
                    onchange={input.on_commit.clone()} />
                <label for={id}>{ t.get_text(label_key) }</label>
            </div>
        }
    };

    html! {
        <div class="time-inputs">
            { field("hoursInput", "hours", &hours, *HOURS_RANGE.end()) }
            { field("minutesInput", "minutes", &minutes, *MINUTES_RANGE.end()) }
            { field("secondsInput", "seconds", &seconds, *SECONDS_RANGE.end()) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModeTabsProps {
    pub mode: Mode,
    pub language: Language,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeTabs)]
pub fn mode_tabs(props: &ModeTabsProps) -> Html {
    let t = Translator::new(props.language);
    let tab = |mode: Mode, id: &'static str, key: &'static str| {
        let on_select = props.on_select.clone();
        html! {
            <button id={id}
                class={classes!("mode-btn", (props.mode == mode).then_some("active"))}
                onclick={Callback::from(move |_| on_select.emit(mode))}>
                { t.get_text(key) }
            </button>
        }
    };
    html! {
        <div class="mode-tabs">
            { tab(Mode::Stopwatch, "stopwatchMode", "stopwatch") }
            { tab(Mode::Timer, "timerMode", "timer") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSelectProps {
    pub language: Language,
    pub on_change: Callback<Language>,
}

#[function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(Language::from_code(&select.value()));
        })
    };
    html! {
        <select id="languageSelect" class="language-select" {onchange}>
            { Language::ALL.iter().map(|lang| html! {
                <option value={lang.code()} selected={*lang == props.language}>
                    { lang.native_name() }
                </option>
            }).collect::<Html>() }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageTitleProps {
    pub language: Language,
}

#[function_component(PageTitle)]
pub fn page_title(props: &PageTitleProps) -> Html {
    let title = Translator::new(props.language).get_text("title");
    match title_layout(title, props.language) {
        TitleLayout::Stacked { first, up, down, last, long_words } => html! {
            <h1 class="title">
                <span class="title-word">{ first }</span>
                <div class={classes!("vertical-stack", long_words.then_some("long-words"))}>
                    <span class="up-text">{ up }</span>
                    <span class="down-text">{ down }</span>
                </div>
                <span class="title-word">{ last }</span>
            </h1>
        },
        TitleLayout::Plain(text) => html! { <h1 class="title">{ text }</h1> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ColorPickerProps {
    pub current: ThemeColor,
    pub language: Language,
    pub on_pick: Callback<ThemeColor>,
    pub on_close: Callback<()>,
}

/// Modal palette. Clicking the backdrop or the close button dismisses it.
#[function_component(ColorPicker)]
pub fn color_picker(props: &ColorPickerProps) -> Html {
    let t = Translator::new(props.language);
    let backdrop_ref = use_node_ref();

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked = e.target_dyn_into::<Element>();
            let backdrop = backdrop_ref.cast::<Element>();
            if let (Some(clicked), Some(backdrop)) = (clicked, backdrop) {
                if clicked == backdrop {
                    on_close.emit(());
                }
            }
        })
    };

    html! {
        <div id="colorPicker" class="color-picker" ref={backdrop_ref} onclick={on_backdrop}>
            <div class="color-picker-content">
                <div class="color-picker-header">{ t.get_text("color_picker_title") }</div>
                <div class="color-grid">
                    { PALETTE.iter().filter_map(|hex| ThemeColor::parse(hex)).map(|color| {
                        let selected = color == props.current;
                        let style = format!("background-color: {}", color);
                        let on_pick = props.on_pick.clone();
                        let picked = color.clone();
                        html! {
                            <div key={color.as_str().to_string()}
                                class={classes!("color-option", selected.then_some("selected"))}
                                data-color={color.to_string()}
                                {style}
                                onclick={Callback::from(move |_| on_pick.emit(picked.clone()))}>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
                <button class="color-picker-close"
                    onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    { t.get_text("close") }
                </button>
            </div>
        </div>
    }
}
