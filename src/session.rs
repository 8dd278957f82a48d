use crate::codec::{Operation, decode, encode};
use crate::config::Config;
use crate::error::CodecError;
use crate::stats::{TextStats, compute_stats};
use crate::validator::is_valid_base64;
use tracing::debug;

/// 変換画面の状態（入力・出力・エラー・直近の操作）
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// 入力テキスト
    pub input: String,
    /// 出力テキスト
    pub output: String,
    error: Option<String>,
    last_operation: Option<Operation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力をエンコードして出力に設定
    pub fn encode(&mut self) -> Result<(), CodecError> {
        self.run(Operation::Encode)
    }

    /// 入力をデコードして出力に設定
    pub fn decode(&mut self) -> Result<(), CodecError> {
        self.run(Operation::Decode)
    }

    fn run(&mut self, operation: Operation) -> Result<(), CodecError> {
        self.error = None;

        let result = match operation {
            Operation::Encode => encode(&self.input),
            Operation::Decode => decode(&self.input),
        };

        match result {
            Ok(output) => {
                self.output = output;
                self.last_operation = Some(operation);
                Ok(())
            }
            Err(e) => {
                // 出力は失敗前のまま残す
                debug!(?operation, error = %e, "変換に失敗");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 入力と出力を入れ替える
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.input, &mut self.output);
        self.last_operation = None;
        self.error = None;
    }

    /// 入れ替えられる内容があるか
    pub fn can_swap(&self) -> bool {
        !self.input.is_empty() || !self.output.is_empty()
    }

    /// すべてクリア
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.error = None;
        self.last_operation = None;
    }

    /// 入力がBase64に見えるか（画面上のヒント用）
    pub fn input_is_base64(&self) -> bool {
        !self.input.is_empty() && is_valid_base64(&self.input)
    }

    pub fn input_stats(&self) -> TextStats {
        compute_stats(&self.input)
    }

    pub fn output_stats(&self) -> TextStats {
        compute_stats(&self.output)
    }

    /// 直近のエラーメッセージ
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 変換以外の操作を行ったときに前回のエラー表示を消す
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn last_operation(&self) -> Option<Operation> {
        self.last_operation
    }

    /// 出力を保存するときのファイル名
    ///
    /// 出力が空なら `None`。直前がエンコードでなければデコード結果の名前を使う。
    pub fn download_file_name<'a>(&self, config: &'a Config) -> Option<&'a str> {
        if self.output.is_empty() {
            return None;
        }
        match self.last_operation {
            Some(Operation::Encode) => Some(config.encoded_file_name.as_str()),
            Some(Operation::Decode) | None => Some(config.decoded_file_name.as_str()),
        }
    }
}
