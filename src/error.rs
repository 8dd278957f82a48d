use crate::codec::Operation;
use std::string::FromUtf8Error;
use thiserror::Error;

/// 変換処理のエラー
#[derive(Error, Debug)]
pub enum CodecError {
    /// 入力が空（空白のみを含む）
    #[error("{}", empty_message(.operation))]
    Empty { operation: Operation },

    /// Base64として不正な形式
    #[error("Base64形式が不正です: {issue} (入力: {input:?})")]
    InvalidFormat { input: String, issue: FormatIssue },

    /// 文字種は正しいがバイト列に復元できない
    #[error("Base64デコードに失敗しました: {0}")]
    Decode(#[from] base64::DecodeError),

    /// デコード結果がUTF-8テキストではない
    #[error("デコード結果が有効なUTF-8テキストではありません: {0}")]
    Encoding(#[from] FromUtf8Error),
}

fn empty_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Encode => "エンコードするテキストを入力してください",
        Operation::Decode => "デコードするBase64テキストを入力してください",
    }
}

/// 形式チェックで見つかった具体的な問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    /// 空白を除くと何も残らない
    Empty,
    /// アルファベット外の文字（位置は空白除去後の文字インデックス）
    InvalidCharacter { character: char, position: usize },
    /// 末尾以外に現れた `=`
    MisplacedPadding { position: usize },
    /// 3個以上の `=`
    TooMuchPadding { count: usize },
    /// 文字種は正しいが、再エンコードしても元に戻らない
    NotCanonical,
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatIssue::Empty => write!(f, "入力が空です"),
            FormatIssue::InvalidCharacter {
                character,
                position,
            } => write!(f, "{position}文字目に使用できない文字 {character:?} があります"),
            FormatIssue::MisplacedPadding { position } => {
                write!(f, "{position}文字目のパディング '=' の後にデータが続いています")
            }
            FormatIssue::TooMuchPadding { count } => {
                write!(f, "パディング '=' が多すぎます（{count}個、最大2個）")
            }
            FormatIssue::NotCanonical => write!(f, "長さまたはパディングが正しくありません"),
        }
    }
}
