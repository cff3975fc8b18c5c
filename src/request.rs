use crate::error::ImggenError;
use crate::options::GenerationOptions;
use crate::types::GenerationRequest;

impl<'a> GenerationRequest<'a> {
    /// Shapes the payload for the chosen model. `style` and `quality` are only
    /// carried for models that accept them.
    pub fn new(options: &'a GenerationOptions, prompt: &'a str) -> Self {
        let extended = options.model.accepts_style_and_quality();
        Self {
            model: options.model,
            prompt,
            size: &options.size,
            style: extended.then_some(options.style.as_str()),
            quality: extended.then_some(options.quality.as_str()),
        }
    }
}

/// Serializes the request body for `POST /images/generations`.
pub fn build(options: &GenerationOptions, prompt: &str) -> Result<String, ImggenError> {
    let request = GenerationRequest::new(options, prompt);
    serde_json::to_string(&request).map_err(ImggenError::Serialize)
}
