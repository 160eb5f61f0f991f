//! Response shapes from the Kanji Alive `/api/public/kanji/{character}`
//! endpoint, and their conversion into [`KanjiDetails`].

use std::sync::LazyLock;

use kanjigo_core::details::{ExampleWord, KanjiDetails, Radical, Reading, StrokeOrder};
use regex::Regex;
use serde::Deserialize;

/// Full-width parenthesised reading in an example, e.g. `学生（がくせい）`.
static EXAMPLE_READING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（(.*)）").expect("valid regex"));

#[derive(Debug, Clone, Deserialize)]
pub struct KanjiAliveResponse {
    #[serde(default)]
    pub kanji: Option<KanjiDetail>,
    #[serde(default)]
    pub radical: Option<RadicalInfo>,
    #[serde(default)]
    pub examples: Vec<ExampleInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KanjiDetail {
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub meaning: Option<EnglishText>,
    #[serde(default)]
    pub strokes: Option<StrokeInfo>,
    #[serde(default)]
    pub onyomi: Option<ReadingInfo>,
    #[serde(default)]
    pub kunyomi: Option<ReadingInfo>,
    #[serde(default)]
    pub video: Option<VideoInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnglishText {
    #[serde(default)]
    pub english: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StrokeInfo {
    #[serde(default)]
    pub count: Option<u32>,
}

/// On'yomi come in katakana, kun'yomi in hiragana.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingInfo {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub katakana: Option<String>,
    #[serde(default)]
    pub hiragana: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub mp4: Option<String>,
    #[serde(default)]
    pub webm: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RadicalInfo {
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub strokes: Option<u32>,
    #[serde(default)]
    pub meaning: Option<EnglishText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExampleInfo {
    #[serde(default)]
    pub japanese: Option<String>,
    #[serde(default)]
    pub meaning: Option<EnglishText>,
}

impl KanjiAliveResponse {
    /// The nested `kanji.meaning.english` value, if present.
    pub fn english_meaning(&self) -> Option<&str> {
        self.kanji
            .as_ref()?
            .meaning
            .as_ref()?
            .english
            .as_deref()
    }

    /// Convert into [`KanjiDetails`], or `None` when the document carries no
    /// `kanji` section.
    pub fn into_details(self, requested: &str) -> Option<KanjiDetails> {
        let kanji = self.kanji?;
        let video = kanji.video.unwrap_or_default();

        Some(KanjiDetails {
            character: kanji.character.unwrap_or_else(|| requested.to_string()),
            meaning: kanji.meaning.and_then(|m| m.english),
            strokes: kanji.strokes.and_then(|s| s.count),
            onyomi: kanji
                .onyomi
                .map(|r| Reading {
                    romaji: r.romaji,
                    kana: r.katakana,
                })
                .unwrap_or_default(),
            kunyomi: kanji
                .kunyomi
                .map(|r| Reading {
                    romaji: r.romaji,
                    kana: r.hiragana,
                })
                .unwrap_or_default(),
            radical: self.radical.map(|r| Radical {
                character: r.character,
                strokes: r.strokes,
                meaning: r.meaning.and_then(|m| m.english),
            }),
            stroke_order: StrokeOrder {
                image: video.poster,
                video_mp4: video.mp4,
                video_webm: video.webm,
            },
            words: self.examples.iter().filter_map(example_word).collect(),
        })
    }
}

/// Split an example like `人類学（じんるいがく）` into word and reading.
///
/// Examples without a word part are skipped.
fn example_word(example: &ExampleInfo) -> Option<ExampleWord> {
    let japanese = example.japanese.as_deref().unwrap_or_default();
    let word = EXAMPLE_READING_RE
        .replace(japanese, "")
        .trim_matches('*')
        .to_string();
    if word.is_empty() {
        return None;
    }
    let reading = EXAMPLE_READING_RE
        .captures(japanese)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Some(ExampleWord {
        word,
        reading,
        meaning: example
            .meaning
            .as_ref()
            .and_then(|m| m.english.clone())
            .unwrap_or_default(),
    })
}
