//! Base64形式の判定
//!
//! 判定は2段階で行う。
//! 1. 文字種のチェック: `[A-Za-z0-9+/]*` の後に `=` が0〜2個
//! 2. 往復チェック: デコードして再エンコードした結果が入力と一致すること
//!
//! 2段階目で長さが4の倍数でないものやパディングの過不足を弾く。

use crate::error::FormatIssue;
use base64::{Engine as _, engine::general_purpose};

/// パディングとして許される `=` の最大数
const MAX_PADDING: usize = 2;

/// 空白文字（スペース、タブ、改行など）をすべて取り除く
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_base64_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

/// 空白除去済みの文字列が文字種の規則に従っているか確認
///
/// 位置は空白除去後の文字インデックス。
pub fn check_alphabet(cleaned: &str) -> Result<(), FormatIssue> {
    let mut padding_start = None;
    let mut padding_count = 0usize;

    for (position, character) in cleaned.chars().enumerate() {
        if character == '=' {
            padding_start.get_or_insert(position);
            padding_count += 1;
        } else if is_base64_alphabet(character) {
            if let Some(start) = padding_start {
                return Err(FormatIssue::MisplacedPadding { position: start });
            }
        } else {
            return Err(FormatIssue::InvalidCharacter {
                character,
                position,
            });
        }
    }

    if padding_count > MAX_PADDING {
        return Err(FormatIssue::TooMuchPadding {
            count: padding_count,
        });
    }

    Ok(())
}

/// デコード→再エンコードで元の文字列に戻るか
fn round_trips(cleaned: &str) -> bool {
    match general_purpose::STANDARD.decode(cleaned) {
        Ok(bytes) => general_purpose::STANDARD.encode(bytes) == cleaned,
        Err(_) => false,
    }
}

/// 形式を検証し、問題があればその理由を返す
///
/// 成功時は空白除去済みの文字列を返す。
pub fn check_format(s: &str) -> Result<String, FormatIssue> {
    let cleaned = strip_whitespace(s);
    if cleaned.is_empty() {
        return Err(FormatIssue::Empty);
    }

    check_alphabet(&cleaned)?;

    if !round_trips(&cleaned) {
        return Err(FormatIssue::NotCanonical);
    }

    Ok(cleaned)
}

/// 文字列が有効なBase64かどうか
///
/// 空文字列（空白のみを含む場合も）は有効とみなさない。
/// この関数は失敗せず、常に真偽値を返す。
pub fn is_valid_base64(s: &str) -> bool {
    check_format(s).is_ok()
}
