//! Command-line arguments.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const ENV_HELP: &str = "\
Environment Variables:

  IMGGEN_API_KEY: The API key to use for image generation.

  IMGGEN_API_ENDPOINT: (Optional) The url to send request. Default to https://api.openai.com/v1

  IMGGEN_TIMEOUT: (Optional) Request timeout in seconds. Default to 60";

/// Flags that may be written with a single dash, e.g. `-model dall-e-3`.
const LONG_FLAGS: [&str; 7] = ["model", "size", "style", "quality", "output", "help", "version"];

/// Flags that consume the following argument unless written as `-flag=value`.
const VALUE_FLAGS: [&str; 5] = ["model", "size", "style", "quality", "output"];

/// Generate an image from a text prompt and print its URL.
#[derive(Parser, Debug)]
#[command(name = "imggen", version, about, after_help = ENV_HELP)]
pub struct Cli {
    /// The model to use for image generation.
    /// Options: 'dall-e-2', 'dall-e-3'
    #[arg(long, default_value = "dall-e-2", verbatim_doc_comment)]
    pub model: String,

    /// Size of the image to generate.
    /// Options for dall-e-2: '256x256', '512x512', '1024x1024'
    /// Options for dall-e-3: '1024x1024', '1792x1024', '1024x1792'
    #[arg(long, default_value = "1024x1024", verbatim_doc_comment)]
    pub size: String,

    /// Style of the image to generate. Only supported for model 'dall-e-3'.
    /// Options: 'vivid', 'natural'
    #[arg(long, default_value = "vivid", verbatim_doc_comment)]
    pub style: String,

    /// Quality of the image to generate. Only supported for model 'dall-e-3'.
    /// Options: 'standard', 'hd'
    #[arg(long, default_value = "standard", verbatim_doc_comment)]
    pub quality: String,

    /// Output format.
    /// Options: 'list', 'json'
    #[arg(long, default_value = "list", verbatim_doc_comment)]
    pub output: String,

    /// The prompt describing the image to generate.
    pub prompt: Option<String>,

    /// Anything after the prompt; ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parses arguments, accepting `-flag` as well as `--flag` for the long
    /// options.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }

    /// The exit status after a failed parse: help and version requests
    /// succeed, anything else is a usage error.
    pub fn exit_code(error: &clap::Error) -> u8 {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        }
    }

    /// The rendered help text.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

/// Rewrites `-flag` to `--flag` for the long options and ends flag parsing at
/// the first positional argument by inserting `--` ahead of it, so anything
/// after the prompt is never read as a flag.
fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(|arg| -> OsString { arg.into() });
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    for arg in args.by_ref() {
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }
        let text = arg.to_str().map(str::to_owned).unwrap_or_default();
        if text == "--" {
            normalized.push(arg);
            break;
        }
        if text.len() < 2 || !text.starts_with('-') {
            normalized.push(OsString::from("--"));
            normalized.push(arg);
            break;
        }

        let flag = text.strip_prefix("--").unwrap_or(&text[1..]);
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        expects_value = !inline_value && VALUE_FLAGS.contains(&name);

        if !text.starts_with("--") && LONG_FLAGS.contains(&name) {
            normalized.push(OsString::from(format!("-{}", text)));
        } else {
            normalized.push(arg);
        }
    }

    normalized.extend(args);
    normalized
}
