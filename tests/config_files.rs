//! 設定ファイルと入出力ファイルの読み書き

use std::path::PathBuf;
use tempfile::TempDir;
use textb64::{
    Config, Operation, Session,
    config::{create_config_file, delete_config_file, load_config, save_config},
    decode, determine_output_path, encode, read_text_file, write_text_file,
};

#[test]
fn test_missing_config_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let config = load_config(Some(dir.path().join("none.toml").as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_create_save_load_delete() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_config_file(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_config(Some(path.as_path())).unwrap(), Config::default());

    let config = Config {
        wrap_width: 76,
        encoded_file_name: "out.b64".to_string(),
        ..Config::default()
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(Some(path.as_path())).unwrap(), config);

    delete_config_file(&path).unwrap();
    assert!(!path.exists());
    // 存在しないファイルの削除はエラーにしない
    delete_config_file(&path).unwrap();
}

#[test]
fn test_broken_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "wrap_width = \"wide\"").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("config.toml"));
}

#[test]
fn test_encode_file_then_decode_it_back() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    write_text_file(&input, "José 🚀\n二行目\n").unwrap();

    let text = read_text_file(&input).unwrap();
    let config = Config::default();
    let encoded_path =
        determine_output_path(Some(input.as_path()), &None, Operation::Encode, &config).unwrap();
    assert_eq!(encoded_path, dir.path().join("notes.txt.b64"));
    write_text_file(&encoded_path, &encode(&text).unwrap()).unwrap();

    let encoded = read_text_file(&encoded_path).unwrap();
    let decoded_path =
        determine_output_path(Some(encoded_path.as_path()), &None, Operation::Decode, &config)
            .unwrap();
    assert_eq!(decoded_path, input);
    assert_eq!(decode(&encoded).unwrap(), "José 🚀\n二行目\n");
}

#[test]
fn test_session_output_saved_under_configured_name() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();

    let mut session = Session::new();
    session.input = "SGVsbG8=".to_string();
    session.decode().unwrap();

    let name = session.download_file_name(&config).unwrap();
    let path: PathBuf = dir.path().join(name);
    write_text_file(&path, &session.output).unwrap();

    assert_eq!(path.file_name().unwrap(), "decoded.txt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello");
}

#[test]
fn test_empty_content_is_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    assert!(write_text_file(&path, "").is_err());
    assert!(!path.exists());
}

#[test]
fn test_reading_missing_file_names_it() {
    let dir = TempDir::new().unwrap();
    let err = read_text_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}
