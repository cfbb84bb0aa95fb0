//! Gemini API client for topics, briefs, and logo images.
//!
//! Thin HTTP wrapper over the Generative Language API. A trend request is a
//! single grounded `generateContent` call; a concept request is two sequential
//! calls, a schema-constrained `generateContent` for the brief followed by an
//! image `predict` whose prompt depends on the generated name. Response
//! parsing lives in free functions so it can be tested without a network.

use super::types::{ConceptBrief, ConceptResult, ProviderError};
use super::ConceptProvider;
use crate::config::ProviderConfig;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    topic_model: String,
    concept_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            topic_model: config.topic_model.clone(),
            concept_model: config.concept_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    /// Build a client with the credential taken from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when the variable is unset,
    /// which callers treat as a startup failure.
    pub fn from_env(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ProviderError::MissingApiKey { var: API_KEY_ENV.to_string() })?;
        Self::new(api_key, config)
    }

    async fn post(&self, model: &str, verb: &str, body: serde_json::Value) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:{}", self.api_base, model, verb);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if status != 200 {
            tracing::warn!(status, model, "provider returned non-success status");
            return Err(ProviderError::Status { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ConceptProvider for GeminiClient {
    async fn fetch_trending_topic(&self, range_phrase: &str) -> Result<String, ProviderError> {
        let body = json!({
            "contents": [{"parts": [{"text": topic_prompt(range_phrase)}]}],
            "tools": [{"google_search": {}}],
        });
        let text = self.post(&self.topic_model, "generateContent", body).await?;
        parse_topic_response(&text)
    }

    async fn fetch_concept(&self, topic: &str) -> Result<ConceptResult, ProviderError> {
        let body = json!({
            "contents": [{"parts": [{"text": concept_prompt(topic)}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": concept_schema(),
            },
        });
        let text = self.post(&self.concept_model, "generateContent", body).await?;
        let brief = parse_concept_response(&text)?;

        // The logo prompt depends on the generated name, so the image call
        // cannot start before the brief call finishes.
        let body = json!({
            "instances": [{"prompt": logo_prompt(&brief.name, topic)}],
            "parameters": {"sampleCount": 1, "aspectRatio": "1:1"},
        });
        let text = self.post(&self.image_model, "predict", body).await?;
        let logo_png = parse_logo_response(&text)?;

        Ok(ConceptResult { brief, logo_png })
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

fn topic_prompt(range_phrase: &str) -> String {
    format!(
        "Based on Google search trends over {range_phrase}, what is one of the most \
         popular and rapidly growing search topics related to software needs, business \
         problems, or \"how to build an app for X\"? Provide only the single topic as a \
         concise phrase, without any preamble or explanation. For example: \"AI-powered \
         personal finance tracker\" or \"Collaborative whiteboard tool for remote teams\"."
    )
}

fn concept_prompt(topic: &str) -> String {
    format!(
        "Generate a complete SaaS business concept based on the trending topic: \
         \"{topic}\". Fill out all fields of the provided JSON schema. Do not include \
         advertisements."
    )
}

fn logo_prompt(name: &str, topic: &str) -> String {
    format!(
        "Generate a single, clean, abstract, minimalist vector logomark for a tech \
         company named \"{name}\".\n\
         - Topic: {topic}\n\
         - Style: Modern, geometric, simple.\n\
         - Background: Solid white background.\n\
         - NO words, letters, or text.\n\
         - NO complex illustrations.\n\
         - NO shadows or gradients.\n\
         - Single, centered object."
    )
}

/// JSON response schema for the structured brief call. Mirrors the strict
/// serde shape in [`super::types`], so anything the model produces outside it
/// fails closed on our side as well.
fn concept_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {"type": "STRING", "description": "A creative and catchy name for the SaaS product."},
            "motive": {"type": "STRING", "description": "A short, inspiring company motive or mission statement."},
            "brandIdentity": {
                "type": "OBJECT",
                "properties": {
                    "colorPalette": {
                        "type": "ARRAY",
                        "description": "An array of 3-5 color objects, each with a 'name' and its 'hex' code.",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": {"type": "STRING"},
                                "hex": {"type": "STRING"},
                            },
                            "required": ["name", "hex"],
                        },
                    },
                    "typography": {
                        "type": "OBJECT",
                        "properties": {
                            "fontFamily": {"type": "STRING", "description": "A suitable font family name."},
                            "description": {"type": "STRING", "description": "A brief description of the typography style."},
                        },
                        "required": ["fontFamily", "description"],
                    },
                    "style": {"type": "STRING", "description": "A short description of the overall brand style."},
                },
                "required": ["colorPalette", "typography", "style"],
            },
            "brief": {"type": "STRING", "description": "A concise summary of the SaaS product, its features, and target audience."},
        },
        "required": ["name", "motive", "brandIdentity", "brief"],
    })
}

// =============================================================================
// WIRE TYPES
// =============================================================================

// Responses carry plenty of metadata we never read, so these stay permissive;
// strictness applies to the brief payload itself.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn response_text(json: &str) -> Result<String, ProviderError> {
    let response: GenerateResponse =
        serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
    let text: String = response
        .candidates
        .first()
        .map(|c| c.content.parts.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    Ok(text)
}

fn parse_topic_response(json: &str) -> Result<String, ProviderError> {
    let topic: String = response_text(json)?
        .trim()
        .chars()
        .filter(|&c| c != '"')
        .collect();
    if topic.is_empty() {
        return Err(ProviderError::EmptyTopic);
    }
    Ok(topic)
}

fn parse_concept_response(json: &str) -> Result<ConceptBrief, ProviderError> {
    let payload = response_text(json)?;
    let brief: ConceptBrief =
        serde_json::from_str(payload.trim()).map_err(|e| ProviderError::Parse(e.to_string()))?;
    brief.validate()?;
    Ok(brief)
}

fn parse_logo_response(json: &str) -> Result<Vec<u8>, ProviderError> {
    let response: PredictResponse =
        serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
    let encoded = response
        .predictions
        .into_iter()
        .find_map(|p| p.bytes_base64_encoded)
        .ok_or(ProviderError::NoImages)?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ProviderError::Parse(format!("logo payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::tests::brief_json;

    fn generate_response(text: &str) -> String {
        serde_json::to_string(&json!({
            "candidates": [{
                "content": {"parts": [{"text": text}], "role": "model"},
                "finishReason": "STOP"
            }],
            "modelVersion": "test"
        }))
        .unwrap()
    }

    #[test]
    fn topic_is_trimmed_and_unquoted() {
        let json = generate_response("  \"AI-powered personal finance tracker\"\n");
        assert_eq!(
            parse_topic_response(&json).unwrap(),
            "AI-powered personal finance tracker"
        );
    }

    #[test]
    fn empty_topic_fails() {
        let json = generate_response("  \"\"  ");
        assert!(matches!(parse_topic_response(&json), Err(ProviderError::EmptyTopic)));

        let no_candidates = r#"{"candidates": []}"#;
        assert!(matches!(parse_topic_response(no_candidates), Err(ProviderError::EmptyTopic)));
    }

    #[test]
    fn concept_response_parses_strict_payload() {
        let json = generate_response(brief_json());
        let brief = parse_concept_response(&json).unwrap();
        assert_eq!(brief.name, "Fintra");
    }

    #[test]
    fn concept_response_fails_closed_on_extra_field() {
        let payload = brief_json().replacen("\"name\"", "\"sponsored\": true, \"name\"", 1);
        let json = generate_response(&payload);
        assert!(matches!(parse_concept_response(&json), Err(ProviderError::Parse(_))));
    }

    #[test]
    fn logo_response_decodes_first_image() {
        let payload = base64::engine::general_purpose::STANDARD.encode(b"png-bytes");
        let json = format!(r#"{{"predictions": [{{"bytesBase64Encoded": "{payload}"}}]}}"#);
        assert_eq!(parse_logo_response(&json).unwrap(), b"png-bytes");
    }

    #[test]
    fn zero_images_fail() {
        assert!(matches!(
            parse_logo_response(r#"{"predictions": []}"#),
            Err(ProviderError::NoImages)
        ));
        assert!(matches!(
            parse_logo_response(r#"{"predictions": [{"mimeType": "image/png"}]}"#),
            Err(ProviderError::NoImages)
        ));
    }
}
