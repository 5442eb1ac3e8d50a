use std::collections::HashMap;

use pinyin::ToPinyin;

/// Pronunciation of a word
pub trait PhoneticLookup: Send + Sync {
    /// Reading for `word`; the word itself when no reading is known
    fn reading(&self, word: &str) -> String;
}

/// Word translations shown under the reading
pub trait TranslationLookup: Send + Sync {
    /// (English, Japanese) pair; both echo `word` when untranslated
    fn translations(&self, word: &str) -> (String, String);
}

/// Tone-marked Hanyu Pinyin
pub struct PinyinLookup;

impl PhoneticLookup for PinyinLookup {
    fn reading(&self, word: &str) -> String {
        let mut syllables = Vec::new();
        let mut verbatim = String::new();

        for c in word.chars() {
            match c.to_pinyin() {
                Some(p) => {
                    if !verbatim.trim().is_empty() {
                        syllables.push(verbatim.trim().to_string());
                    }
                    verbatim.clear();
                    syllables.push(p.with_tone().to_string());
                }
                None => verbatim.push(c),
            }
        }

        if syllables.is_empty() {
            return word.to_string();
        }
        if !verbatim.trim().is_empty() {
            syllables.push(verbatim.trim().to_string());
        }

        syllables.join(" ")
    }
}

/// Small built-in dictionary of workplace vocabulary
pub struct StaticDictionary {
    entries: HashMap<&'static str, (&'static str, &'static str)>,
}

impl StaticDictionary {
    pub fn with_defaults() -> Self {
        let entries = HashMap::from([
            ("出人头地", ("stand out from the crowd", "頭角を現す")),
            ("委婉", ("tactful", "婉曲")),
            ("效率", ("efficiency", "効率")),
            ("会议", ("meeting", "会議")),
            ("加班", ("overtime", "残業")),
            ("团建", ("team building", "チームビルディング")),
        ]);

        Self { entries }
    }
}

impl TranslationLookup for StaticDictionary {
    fn translations(&self, word: &str) -> (String, String) {
        match self.entries.get(word) {
            Some((en, ja)) => (en.to_string(), ja.to_string()),
            None => (word.to_string(), word.to_string()),
        }
    }
}
