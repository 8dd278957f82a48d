pub mod codec;
pub mod config;
pub mod error;
pub mod file_ops;
pub mod session;
pub mod stats;
pub mod validator;

// 公開API
pub use codec::{Operation, base64_encode, decode, encode, wrap_base64};
pub use config::{Config, load_config};
pub use error::{CodecError, FormatIssue};
pub use file_ops::{determine_output_path, read_text_file, write_text_file};
pub use session::Session;
pub use stats::{TextStats, compute_stats};
pub use validator::{check_format, is_valid_base64, strip_whitespace};
