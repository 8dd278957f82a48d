use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// 設定ファイルの構造
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 設定ファイルのバージョン
    pub version: String,
    /// 詳細出力をデフォルトで有効にするか
    pub default_verbose: bool,
    /// エンコード結果を折り返す桁数（0なら折り返さない）
    pub wrap_width: usize,
    /// エンコード結果を保存するときのファイル名
    pub encoded_file_name: String,
    /// デコード結果を保存するときのファイル名
    pub decoded_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            default_verbose: false,
            wrap_width: 0,
            encoded_file_name: "encoded.txt".to_string(),
            decoded_file_name: "decoded.txt".to_string(),
        }
    }
}

/// 設定ファイルを読み込み
///
/// ファイルが存在しなければデフォルト設定を返す。
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => get_default_config_path()?,
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("設定ファイルの読み取りに失敗: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("設定ファイルの解析に失敗: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "設定ファイルを読み込みました");

    Ok(config)
}

/// デフォルトの設定ファイルパスを取得
pub fn get_default_config_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("設定ディレクトリが見つかりません"))?;

    let app_config_dir = config_dir.join("textb64");
    Ok(app_config_dir.join("config.toml"))
}

/// 設定を書き込み
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    // ディレクトリを作成
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("設定ディレクトリの作成に失敗: {}", parent.display()))?;
    }

    let toml_content =
        toml::to_string_pretty(config).context("設定ファイルの生成に失敗しました")?;

    fs::write(path, toml_content)
        .with_context(|| format!("設定ファイルの書き込みに失敗: {}", path.display()))?;

    Ok(())
}

/// デフォルト設定で設定ファイルを作成
pub fn create_config_file(path: &Path) -> Result<()> {
    save_config(path, &Config::default())
}

/// 設定ファイルを削除
pub fn delete_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("設定ファイルの削除に失敗: {}", path.display()))?;
    }
    Ok(())
}
