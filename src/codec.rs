use crate::error::CodecError;
use crate::validator::{check_format, strip_whitespace};
use base64::{Engine as _, engine::general_purpose};
use tracing::debug;

/// 直近に実行した変換の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
}

/// バイト列を標準Base64（RFC 4648、`=` パディングあり）に変換
pub fn base64_encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// テキストをBase64にエンコード
///
/// テキストはUTF-8のバイト列としてエンコードされる。前後の空白は
/// 空判定にだけ使い、エンコード対象からは取り除かない。
pub fn encode(text: &str) -> Result<String, CodecError> {
    if text.trim().is_empty() {
        return Err(CodecError::Empty {
            operation: Operation::Encode,
        });
    }

    let bytes = text.as_bytes();
    debug!(
        chars = text.chars().count(),
        bytes = bytes.len(),
        "エンコード開始"
    );

    let encoded = base64_encode(bytes);
    debug!(length = encoded.len(), "エンコード完了");

    Ok(encoded)
}

/// Base64をテキストにデコード
///
/// 入力中の空白は整形用とみなして取り除いてからデコードする。
pub fn decode(input: &str) -> Result<String, CodecError> {
    if input.trim().is_empty() {
        return Err(CodecError::Empty {
            operation: Operation::Decode,
        });
    }

    let cleaned = check_format(input).map_err(|issue| CodecError::InvalidFormat {
        input: strip_whitespace(input),
        issue,
    })?;
    debug!(
        raw = input.len(),
        cleaned = cleaned.len(),
        "形式チェック完了"
    );

    // 形式チェック済みなので、ここでの失敗はデコード処理自体の異常
    let bytes = general_purpose::STANDARD.decode(&cleaned)?;
    debug!(bytes = bytes.len(), "Base64デコード完了");

    let text = String::from_utf8(bytes)?;
    debug!(chars = text.chars().count(), "UTF-8変換完了");

    Ok(text)
}

/// エンコード結果を指定桁で折り返す
///
/// `width` が0なら折り返さない。デコード時に空白は無視されるので、
/// 折り返した結果もそのままデコードできる。
pub fn wrap_base64(encoded: &str, width: usize) -> String {
    if width == 0 || encoded.len() <= width {
        return encoded.to_string();
    }

    // Base64はASCIIのみなのでバイト単位で分割してよい
    encoded
        .as_bytes()
        .chunks(width)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
