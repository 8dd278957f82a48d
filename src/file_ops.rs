use crate::codec::Operation;
use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// エンコード結果のファイルに付ける拡張子
const ENCODED_EXTENSION: &str = "b64";

/// 出力ファイルのパスを決定
///
/// 明示的な出力先があればそれを使う。入力ファイルがある場合、
/// エンコードでは `.b64` を付け、デコードでは `.b64` を外す。
/// 入力ファイルが無ければ設定のファイル名を使う。
pub fn determine_output_path(
    input: Option<&Path>,
    output: &Option<PathBuf>,
    operation: Operation,
    config: &Config,
) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }

    let Some(input) = input else {
        let name = match operation {
            Operation::Encode => &config.encoded_file_name,
            Operation::Decode => &config.decoded_file_name,
        };
        return Ok(PathBuf::from(name));
    };

    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("無効なファイル名: {}", input.display()))?;

    let mut path = input.to_path_buf();
    match operation {
        Operation::Encode => {
            // エンコードの場合: .b64 拡張子の追加
            path.set_file_name(format!("{file_name}.{ENCODED_EXTENSION}"));
        }
        Operation::Decode => {
            // デコードの場合: .b64 拡張子の除去（無ければ .txt を付ける）
            if input.extension().and_then(|s| s.to_str()) == Some(ENCODED_EXTENSION) {
                let stem = input
                    .file_stem()
                    .ok_or_else(|| anyhow!("無効なファイル名: {}", input.display()))?;
                path.set_file_name(stem);
            } else {
                path.set_file_name(format!("{file_name}.txt"));
            }
        }
    }
    Ok(path)
}

/// テキストファイルを読み込み
pub fn read_text_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("ファイル読み込みに失敗: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        "ファイル読み込み完了"
    );

    Ok(content)
}

/// テキストをUTF-8でファイルに書き込み
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(anyhow!("保存する内容がありません"));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("出力ディレクトリの作成に失敗: {}", parent.display()))?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("出力ファイルの書き込みに失敗: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        "ファイル書き込み完了"
    );

    Ok(())
}
