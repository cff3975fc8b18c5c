use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The image models accepted by the generations endpoint.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Model {
    #[serde(rename = "dall-e-2")]
    DallE2,
    #[serde(rename = "dall-e-3")]
    DallE3,
}

impl Model {
    /// Every supported model, in the order they are listed in help output.
    pub const ALL: [Model; 2] = [Model::DallE2, Model::DallE3];

    /// The model name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Model::DallE2 => "dall-e-2",
            Model::DallE3 => "dall-e-3",
        }
    }

    /// Whether the provider accepts `style` and `quality` for this model.
    pub fn accepts_style_and_quality(self) -> bool {
        matches!(self, Model::DallE3)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = crate::ImggenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| crate::ImggenError::UnsupportedModel(s.to_string()))
    }
}

/// How the result is written to stdout.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable image URL and revised prompt.
    #[default]
    List,
    /// The provider's response body, verbatim.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::List => "list",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option whose allowed values depend on the model.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OptionField {
    Size,
    Style,
    Quality,
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionField::Size => "Size",
            OptionField::Style => "Style",
            OptionField::Quality => "Quality",
        })
    }
}

/// The body of a `POST /images/generations` request.
///
/// `style` and `quality` are left out of the JSON entirely when `None`, since
/// the provider rejects them for `dall-e-2`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct GenerationRequest<'a> {
    pub model: Model,
    pub prompt: &'a str,
    pub size: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<&'a str>,
}

/// A successful response from the generations endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct GenerationResponse {
    /// The Unix timestamp of when the images were created.
    #[serde(default)]
    pub created: u64,
    /// The generated images. Only the first one is surfaced.
    pub data: Vec<ImageData>,
}

/// A single generated image.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageData {
    /// A link to the generated image, when the response format is `url`.
    #[serde(default)]
    pub url: Option<String>,
    /// The prompt the provider actually used. Only `dall-e-3` rewrites prompts.
    #[serde(default)]
    pub revised_prompt: Option<String>,
    /// The image itself, when the response format is `b64_json`.
    #[serde(default)]
    pub b64_json: Option<String>,
}

/// The envelope of an error response.
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: ApiErrorDetail,
}

/// The provider's description of a rejected request.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
}

/// The interpreted outcome of a generations call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// The first image of a successful response.
    Success(ImageData),
    /// The error payload of a rejected request.
    Failure(ApiErrorDetail),
}
