use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default transcript cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Collapse newlines and whitespace runs into single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptPreprocessor;
impl Preprocessor for TranscriptPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        let p = TranscriptPreprocessor;
        assert_eq!(p.process("  hello \n\n world \r\n"), "hello world");
    }

    #[test]
    fn empty_input_stays_empty() {
        let p = TranscriptPreprocessor;
        assert_eq!(p.process("   \n "), "");
    }

    #[test]
    fn applies_nfkc() {
        let p = TranscriptPreprocessor;
        // full-width latin normalizes to ascii
        assert_eq!(p.process("Ｈｅｌｌｏ"), "Hello");
    }
}
