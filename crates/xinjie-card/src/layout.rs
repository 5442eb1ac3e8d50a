use xinjie_config::card::CardConfig;

use crate::lexicon::{PhoneticLookup, PinyinLookup, StaticDictionary, TranslationLookup};
use crate::svg::{Element, SvgDocument, Text};
use crate::wrap::{max_chars_per_line, strip_quotes, wrap_text};

const TITLE_FONT: &str = "KaiTi";
const HAN_FONT: &str = "SimSun";
const LATIN_FONT: &str = "'Times New Roman'";
const JAPANESE_FONT: &str = "'MS Mincho'";
const ELLIPSIS: char = '…';

/// Everything printed on one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub word: String,
    pub phonetic_reading: String,
    pub translation_primary: String,
    pub translation_secondary: String,
    pub body_text: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

/// Body lines with their baselines
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLayout {
    pub lines: Vec<(String, f32)>,
    pub font_size: f32,
    /// Lines dropped by the bottom guard
    pub truncated: usize,
}

/// Card Layout Engine
pub struct CardRenderer {
    config: CardConfig,
    phonetics: Box<dyn PhoneticLookup>,
    dictionary: Box<dyn TranslationLookup>,
}

impl CardRenderer {
    /// Renderer with pinyin readings and the built-in dictionary
    pub fn new(config: CardConfig) -> Self {
        Self::with_lookups(
            config,
            Box::new(PinyinLookup),
            Box::new(StaticDictionary::with_defaults()),
        )
    }

    pub fn with_lookups(
        config: CardConfig,
        phonetics: Box<dyn PhoneticLookup>,
        dictionary: Box<dyn TranslationLookup>,
    ) -> Self {
        Self {
            config,
            phonetics,
            dictionary,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn model(&self, word: &str, interpretation: &str) -> CardModel {
        let (translation_primary, translation_secondary) = self.dictionary.translations(word);

        CardModel {
            word: word.to_string(),
            phonetic_reading: self.phonetics.reading(word),
            translation_primary,
            translation_secondary,
            body_text: strip_quotes(interpretation).to_string(),
            canvas_width: self.config.width,
            canvas_height: self.config.height,
        }
    }

    /// Render the card as an SVG string
    pub fn render(&self, word: &str, interpretation: &str) -> String {
        self.layout(&self.model(word, interpretation)).to_string()
    }

    pub fn layout(&self, card: &CardModel) -> SvgDocument {
        let config = &self.config;
        let center = card.canvas_width / 2.0;
        let margin = config.margin;

        let mut doc = SvgDocument::new(card.canvas_width, card.canvas_height);

        doc.push(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: card.canvas_width,
            height: card.canvas_height,
            fill: config.background.clone(),
        });

        // Chrome
        doc.push(self.text(
            &config.title,
            margin * 1.5,
            config.title_font_size,
            TITLE_FONT,
            &config.ink,
        ));
        doc.push(Element::Line {
            x1: margin,
            y1: margin * 2.0,
            x2: card.canvas_width - margin,
            y2: margin * 2.0,
            stroke: config.ink.clone(),
            stroke_width: 0.5,
        });

        // Word block
        let word_y = margin * 3.5;
        doc.push(self.text(
            &card.word,
            word_y,
            config.word_font_size,
            HAN_FONT,
            &config.ink,
        ));
        doc.push(self.text(
            &card.phonetic_reading,
            word_y + 30.0,
            config.detail_font_size,
            LATIN_FONT,
            &config.muted,
        ));
        doc.push(self.text(
            &card.translation_primary,
            word_y + 60.0,
            config.detail_font_size,
            LATIN_FONT,
            &config.muted,
        ));
        doc.push(self.text(
            &card.translation_secondary,
            word_y + 90.0,
            config.detail_font_size,
            JAPANESE_FONT,
            &config.muted,
        ));

        let body = self.layout_body(&card.body_text);
        if body.truncated > 0 {
            tracing::debug!(dropped = body.truncated, "card body truncated at bottom margin");
        }

        let bottom = card.canvas_height - margin;
        for (line, y) in body.lines {
            debug_assert!(y <= bottom, "body line placed below the bottom margin");
            doc.push(Element::Text(Text {
                content: line,
                x: center,
                y,
                font_size: body.font_size,
                font_family: HAN_FONT,
                fill: config.ink.clone(),
            }));
        }

        doc
    }

    /// Wrap the body and place it between mid-canvas and the bottom margin.
    ///
    /// Spacing is compressed to `reserved / (N + 1)` when the preferred line
    /// height would not fit, with the font scaled along. Lines whose
    /// baseline would still pass the bottom margin are dropped.
    pub fn layout_body(&self, text: &str) -> BodyLayout {
        let config = &self.config;
        let max_chars = max_chars_per_line(config.width, config.margin, config.body_font_size);
        let lines = wrap_text(strip_quotes(text), max_chars);

        let top = config.height / 2.0;
        let bottom = config.height - config.margin;
        let reserved = (bottom - top).max(0.0);

        let count = lines.len();
        let overflows = count > 1 && top + (count - 1) as f32 * config.line_height > bottom;

        let (spacing, font_size) = if overflows {
            let spacing = (reserved / (count + 1) as f32).max(config.min_line_spacing);
            let font_size = (config.body_font_size * spacing / config.line_height)
                .clamp(config.min_font_size.min(config.body_font_size), config.body_font_size);
            (spacing, font_size)
        } else {
            (config.line_height, config.body_font_size)
        };

        let mut placed: Vec<(String, f32)> = Vec::with_capacity(count);
        for (i, line) in lines.into_iter().enumerate() {
            let y = top + i as f32 * spacing;
            if y > bottom {
                break;
            }
            placed.push((line, y));
        }

        let truncated = count - placed.len();
        if truncated > 0 {
            if let Some((last, _)) = placed.last_mut() {
                last.pop();
                last.push(ELLIPSIS);
            }
        }

        BodyLayout {
            lines: placed,
            font_size,
            truncated,
        }
    }

    fn text(
        &self,
        content: &str,
        y: f32,
        font_size: f32,
        font_family: &'static str,
        fill: &str,
    ) -> Element {
        Element::Text(Text {
            content: content.to_string(),
            x: self.config.width / 2.0,
            y,
            font_size,
            font_family,
            fill: fill.to_string(),
        })
    }
}
