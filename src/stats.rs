use std::fmt;

/// テキストの統計情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Unicodeコードポイント数
    pub character_count: usize,
    /// UTF-8でのバイト数
    pub byte_count: usize,
    /// 改行で区切った行数（改行の数 + 1）
    pub line_count: usize,
}

/// 文字列から統計情報を求める
pub fn compute_stats(s: &str) -> TextStats {
    TextStats {
        character_count: s.chars().count(),
        byte_count: s.len(),
        line_count: s.matches('\n').count() + 1,
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} 文字 / {} バイト / {} 行",
            self.character_count, self.byte_count, self.line_count
        )
    }
}
