/// Derives phonetic readings for phrase text
pub trait ReadingProvider: Send + Sync {
    /// Hiragana reading of `text`, `None` when the text cannot be read
    fn derive_reading(&self, text: &str) -> Option<String>;
}
