//! Language selection and translated UI text.
//!
//! Lookup order is fixed: the requested language, then [`DEFAULT_LANGUAGE`],
//! then the raw key itself.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: Language = Language::Ko;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
    Ja,
    Zh,
    Es,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Ko,
        Language::En,
        Language::Ja,
        Language::Zh,
        Language::Es,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Es => "es",
        }
    }

    /// Unknown or empty codes map to [`DEFAULT_LANGUAGE`].
    pub fn from_code(code: &str) -> Self {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Label shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ko => "한국어",
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::Es => "Español",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

type Table = HashMap<&'static str, &'static str>;

static TRANSLATIONS: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut tables = HashMap::with_capacity(Language::ALL.len());
    tables.insert(
        Language::Ko,
        Table::from([
            ("title", "온라인 스톱 워치 타이머"),
            ("subtitle", "정확한 시간 측정을 위한 무료 온라인 스톱워치와 타이머"),
            ("stopwatch", "스톱워치"),
            ("timer", "타이머"),
            ("start", "시작"),
            ("pause", "일시정지"),
            ("reset", "리셋"),
            ("running", "실행 중"),
            ("continue", "계속"),
            ("lap", "랩"),
            ("hours", "시간"),
            ("minutes", "분"),
            ("seconds", "초"),
            ("settings", "설정"),
            ("color_picker_title", "색상 선택"),
            ("close", "닫기"),
            ("language", "언어"),
            ("timer_done_title", "타이머 완료!"),
            ("timer_done_body", "설정한 시간이 완료되었습니다."),
            ("shortcuts", "스페이스바: 시작/일시정지 · Ctrl+R: 리셋 · L: 랩"),
        ]),
    );
    tables.insert(
        Language::En,
        Table::from([
            ("title", "Online Stop Watch Timer"),
            ("subtitle", "A free online stopwatch and timer for precise timing"),
            ("stopwatch", "Stopwatch"),
            ("timer", "Timer"),
            ("start", "Start"),
            ("pause", "Pause"),
            ("reset", "Reset"),
            ("running", "Running"),
            ("continue", "Continue"),
            ("lap", "Lap"),
            ("hours", "Hours"),
            ("minutes", "Minutes"),
            ("seconds", "Seconds"),
            ("settings", "Settings"),
            ("color_picker_title", "Choose a color"),
            ("close", "Close"),
            ("language", "Language"),
            ("timer_done_title", "Timer finished!"),
            ("timer_done_body", "The time you set has elapsed."),
            ("shortcuts", "Space: start/pause · Ctrl+R: reset · L: lap"),
        ]),
    );
    tables.insert(
        Language::Ja,
        Table::from([
            ("title", "オンライン ストップウォッチ"),
            ("subtitle", "正確な時間計測のための無料オンラインストップウォッチとタイマー"),
            ("stopwatch", "ストップウォッチ"),
            ("timer", "タイマー"),
            ("start", "スタート"),
            ("pause", "一時停止"),
            ("reset", "リセット"),
            ("running", "実行中"),
            ("continue", "再開"),
            ("lap", "ラップ"),
            ("hours", "時間"),
            ("minutes", "分"),
            ("seconds", "秒"),
            ("settings", "設定"),
            ("color_picker_title", "色を選択"),
            ("close", "閉じる"),
            ("language", "言語"),
            ("timer_done_title", "タイマー終了!"),
            ("timer_done_body", "設定した時間が経過しました。"),
            ("shortcuts", "スペース: スタート/一時停止 · Ctrl+R: リセット · L: ラップ"),
        ]),
    );
    tables.insert(
        Language::Zh,
        Table::from([
            ("title", "在线秒表"),
            ("subtitle", "用于精确计时的免费在线秒表和计时器"),
            ("stopwatch", "秒表"),
            ("timer", "计时器"),
            ("start", "开始"),
            ("pause", "暂停"),
            ("reset", "重置"),
            ("running", "运行中"),
            ("continue", "继续"),
            ("lap", "计次"),
            ("hours", "小时"),
            ("minutes", "分钟"),
            ("seconds", "秒"),
            ("settings", "设置"),
            ("color_picker_title", "选择颜色"),
            ("close", "关闭"),
            ("language", "语言"),
            ("timer_done_title", "计时结束!"),
            ("timer_done_body", "设定的时间已到。"),
            ("shortcuts", "空格: 开始/暂停 · Ctrl+R: 重置 · L: 计次"),
        ]),
    );
    tables.insert(
        Language::Es,
        Table::from([
            ("title", "Cronómetro y Temporizador Online"),
            ("subtitle", "Cronómetro y temporizador online gratuitos para medir el tiempo con precisión"),
            ("stopwatch", "Cronómetro"),
            ("timer", "Temporizador"),
            ("start", "Iniciar"),
            ("pause", "Pausar"),
            ("reset", "Reiniciar"),
            ("running", "En marcha"),
            ("continue", "Continuar"),
            ("lap", "Vuelta"),
            ("hours", "Horas"),
            ("minutes", "Minutos"),
            ("seconds", "Segundos"),
            ("settings", "Ajustes"),
            ("color_picker_title", "Elige un color"),
            ("close", "Cerrar"),
            ("language", "Idioma"),
            ("timer_done_title", "¡Temporizador terminado!"),
            ("timer_done_body", "El tiempo configurado ha terminado."),
            ("shortcuts", "Espacio: iniciar/pausar · Ctrl+R: reiniciar · L: vuelta"),
        ]),
    );
    tables
});

fn resolve<'a>(requested: Option<&Table>, fallback: Option<&Table>, key: &'a str) -> &'a str {
    let found = requested
        .and_then(|table| table.get(key))
        .or_else(|| fallback.and_then(|table| table.get(key)));
    match found {
        Some(&text) => text,
        None => key,
    }
}

/// Text lookup bound to one language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn get_text<'a>(&self, key: &'a str) -> &'a str {
        resolve(
            TRANSLATIONS.get(&self.language),
            TRANSLATIONS.get(&DEFAULT_LANGUAGE),
            key,
        )
    }
}

/// How the page heading is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitleLayout {
    /// Titles of four or more words: first word, the next two stacked, then
    /// the fourth. Words past the fourth are not shown.
    Stacked {
        first: String,
        up: String,
        down: String,
        last: String,
        long_words: bool,
    },
    Plain(String),
}

pub fn title_layout(title: &str, language: Language) -> TitleLayout {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() < 4 {
        return TitleLayout::Plain(title.to_string());
    }
    TitleLayout::Stacked {
        first: words[0].to_string(),
        up: words[1].to_string(),
        down: words[2].to_string(),
        last: words[3].to_string(),
        long_words: language == Language::Es,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip_and_default() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::Ko);
        assert_eq!(Language::from_code(""), Language::Ko);
    }

    #[test]
    fn test_every_language_has_button_labels() {
        for lang in Language::ALL {
            let table = TRANSLATIONS.get(&lang).unwrap();
            for key in [
                "start",
                "pause",
                "reset",
                "running",
                "continue",
                "lap",
                "title",
                "shortcuts",
            ] {
                assert!(table.contains_key(key), "{:?} missing {}", lang, key);
            }
        }
    }

    #[test]
    fn test_get_text_uses_requested_language() {
        assert_eq!(Translator::new(Language::En).get_text("continue"), "Continue");
        assert_eq!(Translator::new(Language::Ko).get_text("lap"), "랩");
    }

    #[test]
    fn test_missing_key_falls_back_to_default_language() {
        let partial = Table::from([("start", "Go")]);
        let fallback = TRANSLATIONS.get(&DEFAULT_LANGUAGE);
        assert_eq!(resolve(Some(&partial), fallback, "start"), "Go");
        assert_eq!(resolve(Some(&partial), fallback, "lap"), "랩");
    }

    #[test]
    fn test_shortcut_hint_is_localized() {
        let korean = Translator::new(Language::Ko).get_text("shortcuts");
        for lang in [Language::En, Language::Ja, Language::Zh, Language::Es] {
            assert_ne!(Translator::new(lang).get_text("shortcuts"), korean, "{:?}", lang);
        }
    }

    #[test]
    fn test_unknown_key_returns_raw_key() {
        assert_eq!(Translator::new(Language::Es).get_text("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_resolve_order() {
        let requested = Table::from([("a", "requested")]);
        let fallback = Table::from([("a", "fallback"), ("b", "fallback-b")]);
        assert_eq!(resolve(Some(&requested), Some(&fallback), "a"), "requested");
        assert_eq!(resolve(Some(&requested), Some(&fallback), "b"), "fallback-b");
        assert_eq!(resolve(None, Some(&fallback), "a"), "fallback");
        assert_eq!(resolve(None, None, "c"), "c");
    }

    #[test]
    fn test_title_layout() {
        match title_layout("Cronómetro y Temporizador Online", Language::Es) {
            TitleLayout::Stacked { first, up, down, last, long_words } => {
                assert_eq!((first.as_str(), up.as_str(), down.as_str(), last.as_str()),
                           ("Cronómetro", "y", "Temporizador", "Online"));
                assert!(long_words);
            }
            other => panic!("unexpected layout {:?}", other),
        }
        assert_eq!(title_layout("在线秒表", Language::Zh), TitleLayout::Plain("在线秒表".to_string()));
    }
}
