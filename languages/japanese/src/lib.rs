pub mod kana;
pub mod lexicon;
pub mod loader;
pub mod reader;

pub use lexicon::{Lexicon, LexiconError};
pub use loader::LexiconLoader;
pub use reader::{JapaneseReader, Segment};
