use thiserror::Error;

/// Errors raised while configuring the client or talking to the completion
/// service.
///
/// `Configuration` is fatal at startup. The remaining variants are recovered
/// at the presentation boundary, where they collapse into a single fallback
/// sentence shown to the user.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
