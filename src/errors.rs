use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortdashError {
    /// Transport-level failure: DNS, connect, timeout, TLS
    Network(String),
    /// Server answered with a non-2xx status
    ApiStatus { status: u16, message: String },
    /// Body was empty or did not match the documented shape
    MalformedResponse(String),
    /// Client-side validation failed; no request was issued
    Validation(String),
    /// Configuration file or environment problem
    Config(String),
    /// Date or date-range input could not be parsed
    DateParse(String),
    /// Terminal or filesystem I/O failure
    Io(String),
}

impl ShortdashError {
    /// Stable error code for scripting and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            ShortdashError::Network(_) => "E001",
            ShortdashError::ApiStatus { .. } => "E002",
            ShortdashError::MalformedResponse(_) => "E003",
            ShortdashError::Validation(_) => "E004",
            ShortdashError::Config(_) => "E005",
            ShortdashError::DateParse(_) => "E006",
            ShortdashError::Io(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ShortdashError::Network(_) => "Network Error",
            ShortdashError::ApiStatus { .. } => "API Error",
            ShortdashError::MalformedResponse(_) => "Malformed Response",
            ShortdashError::Validation(_) => "Validation Error",
            ShortdashError::Config(_) => "Configuration Error",
            ShortdashError::DateParse(_) => "Date Parse Error",
            ShortdashError::Io(_) => "I/O Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ShortdashError::Network(msg)
            | ShortdashError::MalformedResponse(msg)
            | ShortdashError::Validation(msg)
            | ShortdashError::Config(msg)
            | ShortdashError::DateParse(msg)
            | ShortdashError::Io(msg) => msg.clone(),
            ShortdashError::ApiStatus { status, message } => {
                format!("HTTP {}: {}", status, message)
            }
        }
    }

    /// Compact single-line format for status bars and inline panels
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Colored format for one-shot CLI output
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }
}

impl fmt::Display for ShortdashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortdashError {}

// Convenience constructors
impl ShortdashError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        ShortdashError::Network(msg.into())
    }

    pub fn api_status<T: Into<String>>(status: u16, message: T) -> Self {
        ShortdashError::ApiStatus {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_response<T: Into<String>>(msg: T) -> Self {
        ShortdashError::MalformedResponse(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortdashError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortdashError::Config(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ShortdashError::DateParse(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        ShortdashError::Io(msg.into())
    }
}

impl From<std::io::Error> for ShortdashError {
    fn from(err: std::io::Error) -> Self {
        ShortdashError::Io(err.to_string())
    }
}
