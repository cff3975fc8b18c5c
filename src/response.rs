//! Turning a provider response into what the user sees.

use crate::error::ImggenError;
use crate::types::{ErrorResponse, GenerationResponse, GenerationResult, OutputFormat};
use std::io::{self, Write};

/// The terminal result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to write to stdout.
    pub stdout: String,
    /// Process exit status.
    pub exit_code: u8,
    /// Whether usage help is printed (to stderr) before `stdout`.
    pub show_usage: bool,
}

impl Outcome {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            exit_code: 0,
            show_usage: false,
        }
    }

    /// Reports a fatal error in the `Error:` block format.
    pub fn from_error(error: &ImggenError) -> Self {
        Self {
            stdout: error_block(&error.to_string()),
            exit_code: 1,
            show_usage: error.shows_usage(),
        }
    }

    /// Writes `stdout` to `out`, adding a final newline if it lacks one.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.stdout.as_bytes())?;
        if !self.stdout.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

fn error_block(message: &str) -> String {
    format!("\nError:\n\n  {}\n", message)
}

/// Parses a response body according to its status code.
///
/// A `200` is read as a [`GenerationResponse`] and yields its first image; any
/// other status is read as an [`ErrorResponse`].
///
/// # Errors
///
/// - `ImggenError::ResponseParseFailed` if the body does not match the shape
///   expected for the status.
/// - `ImggenError::EmptyResponse` if a successful response has no images.
pub fn parse(status: u16, body: &str) -> Result<GenerationResult, ImggenError> {
    let parse_failed = |source| ImggenError::ResponseParseFailed {
        source,
        body: body.to_string(),
    };

    if status != 200 {
        let response: ErrorResponse = serde_json::from_str(body).map_err(parse_failed)?;
        return Ok(GenerationResult::Failure(response.error));
    }

    let response: GenerationResponse = serde_json::from_str(body).map_err(parse_failed)?;
    if response.data.len() > 1 {
        tracing::debug!("{} images returned, showing the first", response.data.len());
    }
    response
        .data
        .into_iter()
        .next()
        .map(GenerationResult::Success)
        .ok_or_else(|| ImggenError::EmptyResponse {
            body: body.to_string(),
        })
}

/// Decides what to print and which exit status to use for a response.
pub fn interpret(status: u16, body: &str, output: OutputFormat) -> Outcome {
    let result = match parse(status, body) {
        Ok(result) => result,
        Err(e) => return Outcome::from_error(&e),
    };

    match (result, output) {
        (GenerationResult::Success(_), OutputFormat::Json) => Outcome::success(body.to_string()),
        (GenerationResult::Success(image), OutputFormat::List) => {
            if image.url.is_none() && image.b64_json.is_some() {
                tracing::debug!("response carries base64 image data instead of a URL");
            }
            Outcome::success(format!(
                "Image URL:\n {}\n\nRevised Prompt:\n {}\n",
                image.url.unwrap_or_default(),
                image.revised_prompt.unwrap_or_default()
            ))
        }
        (GenerationResult::Failure(_), OutputFormat::Json) => Outcome {
            stdout: body.to_string(),
            exit_code: 1,
            show_usage: false,
        },
        (GenerationResult::Failure(error), OutputFormat::List) => Outcome {
            stdout: error_block(&error.message),
            exit_code: 1,
            show_usage: true,
        },
    }
}
