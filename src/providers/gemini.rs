use crate::{
    analyst::TextGenerator,
    attachment::Attachment,
    config::GeminiConfig,
    error::AppError,
    models::gemini::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData,
        Part, SystemInstruction,
    },
};
use reqwest::Client;
use std::time::Duration;

/// Call Gemini Generate Content API
/// Note: Model name is part of the URL path
pub async fn generate_content(
    client: &Client,
    config: &GeminiConfig,
    request: GenerateContentRequest,
) -> Result<GenerateContentResponse, AppError> {
    // Gemini API format: /v1beta/models/{model}:generateContent
    let url = format!("{}/models/{}:generateContent", config.base_url, config.model);

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(config.timeout_seconds))
        .query(&[("key", &config.api_key)])
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamError {
            status,
            message: error_text,
        });
    }

    Ok(response.json().await?)
}

/// Gemini-backed implementation of the analyst's generator seam.
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(http: Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        instruction: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, AppError> {
        let request = build_request(prompt, instruction, attachment);
        let response = generate_content(&self.http, &self.config, request).await?;

        // An empty candidate list degrades the same way an empty response
        // body did in the original client.
        Ok(response.first_text().unwrap_or_else(|| "{}".to_string()))
    }
}

/// Assemble the generateContent payload: inline attachment bytes first,
/// then the free text, with the instruction as a system-level directive
/// and a JSON-shaped response requested.
fn build_request(
    prompt: &str,
    instruction: &str,
    attachment: Option<&Attachment>,
) -> GenerateContentRequest {
    let mut parts = Vec::new();
    if let Some(attachment) = attachment {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: attachment.mime_type.clone(),
                data: attachment.data.clone(),
            },
        });
    }
    parts.push(Part::Text {
        text: prompt.to_string(),
    });

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
        system_instruction: Some(SystemInstruction {
            parts: vec![Part::Text {
                text: instruction.to_string(),
            }],
        }),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        }),
    }
}
