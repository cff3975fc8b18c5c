//! Validation of the generation options against what each model supports.

use crate::error::ImggenError;
use crate::types::{Model, OptionField, OutputFormat};

/// The values a model accepts for each model-dependent option.
struct ModelSupport {
    sizes: &'static [&'static str],
    styles: &'static [&'static str],
    qualities: &'static [&'static str],
}

static DALL_E_2: ModelSupport = ModelSupport {
    sizes: &["256x256", "512x512", "1024x1024"],
    styles: &["vivid"],
    qualities: &["standard"],
};

static DALL_E_3: ModelSupport = ModelSupport {
    sizes: &["1024x1024", "1792x1024", "1024x1792"],
    styles: &["vivid", "natural"],
    qualities: &["standard", "hd"],
};

fn support(model: Model) -> &'static ModelSupport {
    match model {
        Model::DallE2 => &DALL_E_2,
        Model::DallE3 => &DALL_E_3,
    }
}

impl Model {
    pub fn supported_sizes(self) -> &'static [&'static str] {
        support(self).sizes
    }

    pub fn supported_styles(self) -> &'static [&'static str] {
        support(self).styles
    }

    pub fn supported_qualities(self) -> &'static [&'static str] {
        support(self).qualities
    }

    /// The allowed values for `field` under this model.
    pub fn supported(self, field: OptionField) -> &'static [&'static str] {
        match field {
            OptionField::Size => self.supported_sizes(),
            OptionField::Style => self.supported_styles(),
            OptionField::Quality => self.supported_qualities(),
        }
    }
}

impl OutputFormat {
    /// Parses an `-output` value, falling back to [`OutputFormat::List`] with a
    /// warning when the value is not recognized.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "list" => OutputFormat::List,
            "json" => OutputFormat::Json,
            other => {
                tracing::warn!(
                    "Output format '{}' is not supported, falling back to '{}'.",
                    other,
                    OutputFormat::List
                );
                OutputFormat::List
            }
        }
    }
}

/// The options of one generation, checked against the model's allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub model: Model,
    pub size: String,
    pub style: String,
    pub quality: String,
    pub output: OutputFormat,
}

impl GenerationOptions {
    /// Builds options from raw flag values and validates them.
    ///
    /// # Errors
    ///
    /// - `ImggenError::UnsupportedModel` if `model` is not a known model.
    /// - `ImggenError::UnsupportedOption` if size, style or quality is not
    ///   allowed for that model.
    ///
    /// An unknown `output` is never an error; see [`OutputFormat::parse_or_default`].
    pub fn new(
        model: &str,
        size: &str,
        style: &str,
        quality: &str,
        output: &str,
    ) -> Result<Self, ImggenError> {
        let options = Self {
            model: model.parse()?,
            size: size.to_string(),
            style: style.to_string(),
            quality: quality.to_string(),
            output: OutputFormat::parse_or_default(output),
        };
        validate(&options)?;
        Ok(options)
    }

    fn value(&self, field: OptionField) -> &str {
        match field {
            OptionField::Size => &self.size,
            OptionField::Style => &self.style,
            OptionField::Quality => &self.quality,
        }
    }
}

/// Checks size, style and quality against the allow-lists of the model, in
/// that order, and reports the first value that is not allowed.
pub fn validate(options: &GenerationOptions) -> Result<(), ImggenError> {
    for field in [OptionField::Size, OptionField::Style, OptionField::Quality] {
        let value = options.value(field);
        if !options.model.supported(field).contains(&value) {
            return Err(ImggenError::UnsupportedOption {
                field,
                value: value.to_string(),
                model: options.model,
            });
        }
    }
    Ok(())
}
