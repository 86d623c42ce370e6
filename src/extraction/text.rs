//! 文本清洗工具

use crate::error::Result;
use regex::Regex;

/// 文本清洗器
///
/// 去除 ANSI/终端转义序列并压缩空白字符。
pub struct TextCleaner {
    ansi: Regex,
    whitespace: Regex,
}

impl TextCleaner {
    /// 编译清洗模式
    pub fn compile() -> Result<Self> {
        Ok(Self {
            ansi: Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// 去除 ANSI 序列、压缩空白并裁剪首尾
    pub fn clean(&self, text: &str) -> String {
        let stripped = self.ansi.replace_all(text, "");
        self.whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

/// 按字符数截断，保持 UTF-8 边界
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 宽容解码：丢弃非法 UTF-8 序列而不是报错
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\u{FFFD}', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_ansi_and_collapses_whitespace() {
        let cleaner = TextCleaner::compile().unwrap();
        let input = "\x1B[31mΦ  =  0.78\x1B[0m\n\tcoherence   locked";
        assert_eq!(cleaner.clean(input), "Φ = 0.78 coherence locked");
    }

    #[test]
    fn test_clean_trims_edges() {
        let cleaner = TextCleaner::compile().unwrap();
        assert_eq!(cleaner.clean("   E=mc^2   "), "E=mc^2");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("ΦΛΓΞ", 2), "ΦΛ");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_decode_lossy_drops_invalid_bytes() {
        let bytes = b"valid \xFF\xFE text";
        assert_eq!(decode_lossy(bytes), "valid  text");
    }
}
