mod format;
mod time_parser;
mod url_validator;

pub use format::{format_datetime, format_datetime_at, format_relative, format_relative_at, truncate_url};
pub use time_parser::parse_filter_date;
pub use url_validator::{UrlValidationError, validate_custom_code, validate_long_url};
