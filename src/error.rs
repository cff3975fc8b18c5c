use crate::types::{ApiErrorDetail, Model, OptionField};

/// Represents the possible errors that can occur while generating an image.
#[derive(Debug, thiserror::Error)]
pub enum ImggenError {
    /// No prompt was given on the command line.
    #[error("Prompt is required.")]
    MissingPrompt,
    /// `IMGGEN_API_KEY` is absent or empty.
    #[error("IMGGEN_API_KEY was not set.")]
    MissingApiKey,
    /// The `-model` flag names a model outside the supported set.
    #[error("Model '{0}' is not supported.")]
    UnsupportedModel(String),
    /// A size, style or quality value is not allowed for the chosen model.
    #[error("{field} '{value}' is not supported for model '{model}'.")]
    UnsupportedOption {
        field: OptionField,
        value: String,
        model: Model,
    },
    /// `IMGGEN_TIMEOUT` is not a positive whole number of seconds.
    #[error("IMGGEN_TIMEOUT must be a positive number of seconds, got '{0}'.")]
    InvalidTimeout(String),
    #[error("Failed to create a request. Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Failed to create a request. The API key is not a valid header value.")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Failed to create a request: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to send a request. Maybe the IMGGEN_API_ENDPOINT is invalid. ({0})")]
    RequestFailed(#[source] reqwest::Error),
    /// No response arrived within the configured timeout.
    #[error("The request timed out. Set IMGGEN_TIMEOUT to wait longer. ({0})")]
    RequestTimedOut(#[source] reqwest::Error),
    #[error("Failed to read response. ({0})")]
    ResponseReadFailed(#[source] reqwest::Error),
    /// The provider answered with a body that is not the expected JSON shape.
    #[error("Failed to parse response, body is as follows:\n{body}")]
    ResponseParseFailed {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The provider answered 200 but returned an empty `data` array.
    #[error("Response contained no images, body is as follows:\n{body}")]
    EmptyResponse { body: String },
    /// The provider returned a well-formed error payload.
    #[error("{}", .error.message)]
    ApiError {
        /// The HTTP status code of the response.
        status: u16,
        /// The parsed `error` object.
        error: ApiErrorDetail,
        /// The raw response body.
        body: String,
    },
}

/// Broad classes of failure, which decide how an error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad invocation: missing prompt or key, unsupported option.
    Usage,
    /// The request could not be built, sent or read.
    Transport,
    /// The provider's body could not be understood.
    Parse,
    /// The provider rejected the request.
    Provider,
}

impl ImggenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImggenError::MissingPrompt
            | ImggenError::MissingApiKey
            | ImggenError::UnsupportedModel(_)
            | ImggenError::UnsupportedOption { .. }
            | ImggenError::InvalidTimeout(_) => ErrorKind::Usage,
            ImggenError::InvalidEndpoint(_)
            | ImggenError::InvalidApiKey(_)
            | ImggenError::ClientBuild(_)
            | ImggenError::Serialize(_)
            | ImggenError::RequestFailed(_)
            | ImggenError::RequestTimedOut(_)
            | ImggenError::ResponseReadFailed(_) => ErrorKind::Transport,
            ImggenError::ResponseParseFailed { .. } | ImggenError::EmptyResponse { .. } => {
                ErrorKind::Parse
            }
            ImggenError::ApiError { .. } => ErrorKind::Provider,
        }
    }

    /// Whether the usage banner is printed ahead of this error.
    pub fn shows_usage(&self) -> bool {
        matches!(self.kind(), ErrorKind::Usage | ErrorKind::Provider)
    }
}
