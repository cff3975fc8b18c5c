//! A command-line client for OpenAI-compatible image generation APIs.
//!
//! `imggen` sends one prompt to `POST {endpoint}/images/generations` and
//! prints the resulting image URL, or the raw JSON response.
//!
//! ## Features
//! - Validation of model, size, style and quality against what each model supports.
//! - Model-specific request payloads with proper JSON escaping.
//! - Structured handling of provider error responses.
//! - `list` (human-readable) and `json` (raw) output formats.
//!
//! The whole pipeline is available as [`run`], which takes the parsed
//! arguments and an environment lookup and returns an [`Outcome`] to print.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod request;
pub mod response;
pub mod types;

pub use cli::Cli;
pub use client::{ImggenClient, RawResponse};
pub use config::Settings;
pub use error::{ErrorKind, ImggenError};
pub use options::{validate, GenerationOptions};
pub use response::{interpret, Outcome};
pub use types::{
    ApiErrorDetail, GenerationRequest, GenerationResponse, GenerationResult, ImageData, Model,
    OptionField, OutputFormat,
};

/// Runs one invocation: checks the prompt and options, reads the settings
/// through `env`, sends the request and interprets the response.
///
/// Every failure is turned into an [`Outcome`] with exit code 1. Nothing is
/// sent unless the prompt, the options and the API key are all valid.
///
/// # Example
///
/// ```no_run
/// # use imggen::Cli;
/// # #[tokio::main]
/// # async fn main() {
/// let cli = Cli::parse_args(["imggen", "-model", "dall-e-3", "a red fox"]).unwrap();
/// let outcome = imggen::run(&cli, |name| std::env::var(name).ok()).await;
/// print!("{}", outcome.stdout);
/// # }
/// ```
pub async fn run<F>(cli: &Cli, env: F) -> Outcome
where
    F: Fn(&str) -> Option<String>,
{
    match try_run(cli, env).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!("invocation failed: {:?}", e);
            Outcome::from_error(&e)
        }
    }
}

async fn try_run<F>(cli: &Cli, env: F) -> Result<Outcome, ImggenError>
where
    F: Fn(&str) -> Option<String>,
{
    let prompt = match cli.prompt.as_deref() {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => return Err(ImggenError::MissingPrompt),
    };
    if !cli.rest.is_empty() {
        tracing::debug!("ignoring extra arguments: {:?}", cli.rest);
    }

    let options =
        GenerationOptions::new(&cli.model, &cli.size, &cli.style, &cli.quality, &cli.output)?;
    let settings = Settings::from_lookup(env)?;

    let payload = request::build(&options, prompt)?;
    let client = ImggenClient::new(&settings)?;
    let RawResponse { status, body } = client.send(payload).await?;

    Ok(interpret(status, &body, options.output))
}
