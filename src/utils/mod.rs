pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{APP_DIR_NAME, DATA_DIR_ENV, resolve_data_dir};
pub use paths::{MAX_HISTORY_FILE_BYTES, format_path_with_tilde, validate_file_size};
pub use terminal::{sanitize_line, truncate_chars};
pub use timestamps::format_timestamp_millis;
