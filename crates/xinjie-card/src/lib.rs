pub mod layout;
pub mod lexicon;
pub mod svg;
pub mod wrap;

pub use layout::{CardModel, CardRenderer};
pub use lexicon::{PhoneticLookup, PinyinLookup, StaticDictionary, TranslationLookup};
pub use svg::SvgDocument;
