use imggen::request::build;
use imggen::{GenerationOptions, GenerationRequest, Model, OutputFormat};
use serde_json::{json, Value};

fn options(model: Model, size: &str, style: &str, quality: &str) -> GenerationOptions {
    GenerationOptions {
        model,
        size: size.to_string(),
        style: style.to_string(),
        quality: quality.to_string(),
        output: OutputFormat::List,
    }
}

fn payload(options: &GenerationOptions, prompt: &str) -> Value {
    serde_json::from_str(&build(options, prompt).unwrap()).unwrap()
}

#[test]
fn test_dall_e_3_carries_style_and_quality() {
    let opts = options(Model::DallE3, "1024x1024", "vivid", "hd");
    assert_eq!(
        payload(&opts, "p"),
        json!({
            "model": "dall-e-3",
            "prompt": "p",
            "size": "1024x1024",
            "style": "vivid",
            "quality": "hd"
        })
    );
}

#[test]
fn test_dall_e_2_drops_style_and_quality() {
    // Deliberately not dall-e-2 values: they are dropped regardless.
    let opts = options(Model::DallE2, "256x256", "natural", "hd");
    let body = payload(&opts, "p");
    assert_eq!(
        body,
        json!({
            "model": "dall-e-2",
            "prompt": "p",
            "size": "256x256"
        })
    );
    assert!(body.get("style").is_none());
    assert!(body.get("quality").is_none());
}

#[test]
fn test_prompt_is_escaped() {
    let prompt = "a \"quoted\" sign\\path\nsecond line\t\u{1}";
    let opts = options(Model::DallE3, "1024x1792", "natural", "standard");
    let body = payload(&opts, prompt);
    assert_eq!(body["prompt"], prompt);
}

#[test]
fn test_request_struct_shape() {
    let opts = options(Model::DallE2, "512x512", "vivid", "standard");
    let request = GenerationRequest::new(&opts, "a cat");
    assert_eq!(request.model, Model::DallE2);
    assert_eq!(request.size, "512x512");
    assert_eq!(request.style, None);
    assert_eq!(request.quality, None);

    let opts = options(Model::DallE3, "1792x1024", "natural", "hd");
    let request = GenerationRequest::new(&opts, "a cat");
    assert_eq!(request.style, Some("natural"));
    assert_eq!(request.quality, Some("hd"));
}
