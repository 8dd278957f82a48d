use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textb64::{
    Config, Operation, compute_stats,
    config::{create_config_file, delete_config_file, get_default_config_path, load_config},
    decode, determine_output_path, encode, is_valid_base64, read_text_file, wrap_base64,
    write_text_file,
};

/// テキストとBase64を相互変換するツール
#[derive(Parser)]
#[command(name = "textb64")]
#[command(about = "テキスト⇔Base64 変換ツール（UTF-8対応）")]
#[command(version)]
struct Cli {
    /// 詳細出力
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 設定ファイルのパス
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// テキストをBase64にエンコード
    Encode {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// 指定桁で折り返す（0で折り返さない）
        #[arg(long)]
        wrap: Option<usize>,
    },
    /// Base64をテキストにデコード
    Decode {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// 入力が有効なBase64か判定（無効なら終了コード1）
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// 文字数・バイト数・行数を表示
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
    /// 設定ファイルの操作
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct InputArgs {
    /// 入力テキスト（省略時は --file または標準入力）
    text: Option<String>,

    /// 入力ファイル
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct OutputArgs {
    /// 出力ファイル
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 出力先を自動で決めてファイルに保存
    #[arg(short, long, conflicts_with = "output")]
    save: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// デフォルト設定で設定ファイルを作成
    Init,
    /// 現在の設定を表示
    Show,
    /// 設定ファイルのパスを表示
    Path,
    /// 設定ファイルを削除
    Delete,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("エラー: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.default_verbose;

    init_tracing(verbose);

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    execute(
        cli.command,
        cli.config.as_deref(),
        &config,
        verbose,
        &mut stdin,
        &mut stdout,
    )
}

/// RUST_LOG が優先。未設定なら詳細出力の有無でレベルを決める
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();
}

/// サブコマンドを実行
///
/// `check` で入力がBase64でなかった場合だけ `false` を返す。
fn execute(
    command: Commands,
    config_path: Option<&Path>,
    config: &Config,
    verbose: bool,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Commands::Encode {
            input,
            output,
            wrap,
        } => {
            let text = input.read(stdin)?;
            let encoded = encode(&text)?;
            let width = wrap.unwrap_or(config.wrap_width);
            let result = wrap_base64(&encoded, width);
            if verbose {
                eprintln!("入力: {}", compute_stats(&text));
                eprintln!("出力: {}", compute_stats(&result));
            }
            emit(&result, &input, &output, Operation::Encode, config, out)?;
        }
        Commands::Decode { input, output } => {
            let text = input.read(stdin)?;
            let decoded = decode(&text)?;
            if verbose {
                eprintln!("入力: {}", compute_stats(&text));
                eprintln!("出力: {}", compute_stats(&decoded));
            }
            emit(&decoded, &input, &output, Operation::Decode, config, out)?;
        }
        Commands::Check { input } => {
            let text = input.read(stdin)?;
            let valid = is_valid_base64(&text);
            if valid {
                writeln!(out, "有効なBase64です")?;
            } else {
                writeln!(out, "Base64ではありません")?;
            }
            return Ok(valid);
        }
        Commands::Stats { input } => {
            let text = input.read(stdin)?;
            let stats = compute_stats(&text);
            writeln!(out, "文字数: {}", stats.character_count)?;
            writeln!(out, "バイト数: {}", stats.byte_count)?;
            writeln!(out, "行数: {}", stats.line_count)?;
        }
        Commands::Config { action } => run_config_action(action, config_path, config, out)?,
    }
    Ok(true)
}

impl InputArgs {
    /// 引数・ファイル・標準入力の順で入力を取得
    fn read(&self, stdin: &mut impl Read) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return read_text_file(path);
        }

        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("標準入力の読み込みに失敗しました")?;
        Ok(buffer)
    }
}

/// 結果を標準出力かファイルに出す
fn emit(
    content: &str,
    input: &InputArgs,
    output: &OutputArgs,
    operation: Operation,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    if output.output.is_none() && !output.save {
        writeln!(out, "{content}")?;
        return Ok(());
    }

    let path = determine_output_path(input.file.as_deref(), &output.output, operation, config)?;
    write_text_file(&path, content)?;
    eprintln!("保存しました: {}", path.display());
    Ok(())
}

fn run_config_action(
    action: ConfigAction,
    path: Option<&Path>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_default_config_path()?,
    };

    match action {
        ConfigAction::Init => {
            if path.exists() {
                writeln!(out, "設定ファイルは既に存在します: {}", path.display())?;
            } else {
                create_config_file(&path)?;
                writeln!(out, "設定ファイルを作成しました: {}", path.display())?;
            }
        }
        ConfigAction::Show => {
            let content =
                toml::to_string_pretty(config).context("設定の表示に失敗しました")?;
            write!(out, "{content}")?;
        }
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Delete => {
            delete_config_file(&path)?;
            writeln!(out, "設定ファイルを削除しました: {}", path.display())?;
        }
    }
    Ok(())
}
