use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("Backend returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Missing connection settings abort the page instead of rendering inline.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Settings(_))
    }

    /// Text fit for a page: the backend's own `message` when it sent one,
    /// otherwise the status line. Raw bodies stay in the logs.
    pub fn display_message(&self) -> String {
        match self {
            Error::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_hides_body() {
        let err = Error::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
            body: "<html>stack trace</html>".to_string(),
        };

        assert_eq!(err.display_message(), "Backend returned 502 Bad Gateway");
        assert!(!err.to_string().contains("stack trace"));
    }

    #[test]
    fn backend_message_wins_when_present() {
        let err = Error::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("relation \"public.vendors\" does not exist".to_string()),
            body: r#"{"code":"42P01","message":"relation \"public.vendors\" does not exist"}"#
                .to_string(),
        };

        assert_eq!(err.display_message(), r#"relation "public.vendors" does not exist"#);
    }
}
