//! AI legal-act analysis gateway.
//!
//! Builds a locale-specific instruction and a prompt from user text plus an
//! optional attachment, delegates to a remote text generator, and parses the
//! structured result with strict fallback behavior: a remote failure yields a
//! fixed "service unavailable" payload and a malformed response degrades to a
//! raw-text payload. The caller always gets something to render.

use crate::attachment::Attachment;
use crate::error::AppError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// English instruction template. The four response keys and the risk
/// vocabulary are part of the frontend contract and must not change.
const INSTRUCTION_EN: &str = "You are an experienced attorney. Analyze the provided text or document. Your task is to provide a clear explanation in English.\nThe response must be in JSON format with the following keys:\n- plain_english: A detailed but simple explanation in English.\n- risk_level: Strictly one of the following values: 'High', 'Medium', 'Low'.\n- key_risk: A short description of the main legal risk in English.\n- engineer_note: A brief additional note in English.";

/// Serbian instruction template. The risk tokens stay English.
const INSTRUCTION_SR: &str = "Ti si iskusni advokat. Analiziraj priloženi tekst ili dokument. Tvoj zadatak je da pružiš jasno objašnjenje na srpskom jeziku.\nOdgovor mora biti u JSON formatu sa sledećim ključevima:\n- plain_english: Detaljno ali jednostavno objašnjenje na srpskom jeziku.\n- risk_level: Isključivo jedna od sledećih vrednosti: 'High', 'Medium', 'Low' (zadrži ove engleske termine).\n- key_risk: Kratak opis glavnog pravnog rizika na srpskom jeziku.\n- engineer_note: Kratka dodatna napomena na srpskom jeziku.";

/// Fixed instruction template for a locale.
pub fn instruction_for(locale: Locale) -> &'static str {
    match locale {
        Locale::En => INSTRUCTION_EN,
        Locale::Sr => INSTRUCTION_SR,
    }
}

/// Risk level vocabulary. `Info` marks a raw-output degradation and
/// `Unknown` a service failure; the remote model only ever returns the
/// first three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Info,
    Unknown,
}

impl RiskLevel {
    /// Map a model-supplied token onto the closed vocabulary. Anything
    /// outside {High, Medium, Low} becomes `Info` so a good explanation is
    /// not thrown away over a stray token.
    pub fn from_token(token: &str) -> RiskLevel {
        match token.trim().to_lowercase().as_str() {
            "high" => RiskLevel::High,
            "medium" => RiskLevel::Medium,
            "low" => RiskLevel::Low,
            _ => RiskLevel::Info,
        }
    }
}

/// Free text plus an optional single attachment to analyze.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl AnalysisRequest {
    /// True when there is nothing to analyze. Callers must not invoke the
    /// gateway in this state.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachment.is_none()
    }
}

/// Structured analysis summary. Field names match the frontend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub plain_english: String,
    pub risk_level: RiskLevel,
    pub key_risk: String,
    pub engineer_note: String,
}

impl AnalysisResult {
    /// Fixed payload for any remote failure (connectivity, quota, service
    /// error). Never varies, so the frontend can rely on it.
    pub fn service_unavailable() -> AnalysisResult {
        AnalysisResult {
            plain_english: "Service currently unavailable due to connectivity or API limits."
                .to_string(),
            risk_level: RiskLevel::Unknown,
            key_risk: "API Connection Error".to_string(),
            engineer_note: "Please try again later.".to_string(),
        }
    }

    /// Degraded payload carrying the unparsable response verbatim.
    pub fn raw_output(raw: impl Into<String>) -> AnalysisResult {
        AnalysisResult {
            plain_english: raw.into(),
            risk_level: RiskLevel::Info,
            key_risk: "Analysis".to_string(),
            engineer_note: "Raw output.".to_string(),
        }
    }
}

/// Narrow seam over the remote generative service: submit a prompt with an
/// instruction and optional attachment, receive raw response text or fail.
/// Substituted with a canned double in tests.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        instruction: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, AppError>;
}

/// Analyze user-supplied text and/or a document.
///
/// Errors only on the empty-request precondition; every remote or parse
/// failure is absorbed into a fallback [`AnalysisResult`].
pub async fn analyze(
    generator: &dyn TextGenerator,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AppError> {
    if request.is_empty() {
        return Err(AppError::EmptyRequest(
            "Provide text or an attachment to analyze".to_string(),
        ));
    }

    let instruction = instruction_for(request.language);

    let raw = match generator
        .generate(&request.text, instruction, request.attachment.as_ref())
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "Analysis call failed, returning fallback result");
            return Ok(AnalysisResult::service_unavailable());
        }
    };

    Ok(parse_analysis(&raw))
}

/// Parse the remote response, degrading to a raw-text result on failure.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    #[derive(Deserialize)]
    struct RawAnalysis {
        plain_english: String,
        risk_level: String,
        key_risk: String,
        engineer_note: String,
    }

    let stripped = strip_code_fences(raw);

    match serde_json::from_str::<RawAnalysis>(&stripped) {
        Ok(parsed) => AnalysisResult {
            plain_english: parsed.plain_english,
            risk_level: RiskLevel::from_token(&parsed.risk_level),
            key_risk: parsed.key_risk,
            engineer_note: parsed.engineer_note,
        },
        Err(err) => {
            tracing::debug!(error = %err, "Response was not the expected structure, passing through raw");
            AnalysisResult::raw_output(raw)
        }
    }
}

/// Remove any Markdown code-fence markup the model wrapped its JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedGenerator {
        response: Result<String, ()>,
    }

    #[async_trait::async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _instruction: &str,
            _attachment: Option<&Attachment>,
        ) -> Result<String, AppError> {
            self.response
                .clone()
                .map_err(|_| AppError::InternalError("forced failure".to_string()))
        }
    }

    struct PanickingGenerator;

    #[async_trait::async_trait]
    impl TextGenerator for PanickingGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _instruction: &str,
            _attachment: Option<&Attachment>,
        ) -> Result<String, AppError> {
            panic!("generator must not be invoked for an empty request");
        }
    }

    const STRUCTURED: &str = r#"{"plain_english": "This clause limits liability.", "risk_level": "Medium", "key_risk": "Liability cap", "engineer_note": "Review section 7."}"#;

    #[tokio::test]
    async fn test_analyze_parses_structured_response() {
        let generator = CannedGenerator {
            response: Ok(STRUCTURED.to_string()),
        };
        let request = AnalysisRequest {
            text: "Limitation of liability...".to_string(),
            ..Default::default()
        };

        let result = analyze(&generator, &request).await.unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.key_risk, "Liability cap");
    }

    #[tokio::test]
    async fn test_analyze_strips_code_fences() {
        let generator = CannedGenerator {
            response: Ok(format!("```json\n{}\n```", STRUCTURED)),
        };
        let request = AnalysisRequest {
            text: "some clause".to_string(),
            ..Default::default()
        };

        let result = analyze(&generator, &request).await.unwrap();
        assert_eq!(result.plain_english, "This clause limits liability.");
    }

    #[tokio::test]
    async fn test_analyze_remote_failure_yields_fixed_fallback() {
        let generator = CannedGenerator { response: Err(()) };
        let request = AnalysisRequest {
            text: "anything".to_string(),
            ..Default::default()
        };

        let result = analyze(&generator, &request).await.unwrap();
        assert_eq!(result, AnalysisResult::service_unavailable());
        assert_eq!(result.risk_level, RiskLevel::Unknown);
        assert_eq!(result.key_risk, "API Connection Error");
    }

    #[tokio::test]
    async fn test_analyze_unparsable_response_degrades_to_raw() {
        let generator = CannedGenerator {
            response: Ok("The model wrote prose instead of JSON.".to_string()),
        };
        let request = AnalysisRequest {
            text: "clause".to_string(),
            ..Default::default()
        };

        let result = analyze(&generator, &request).await.unwrap();
        assert_eq!(result.risk_level, RiskLevel::Info);
        assert_eq!(result.plain_english, "The model wrote prose instead of JSON.");
        assert_eq!(result.engineer_note, "Raw output.");
    }

    #[tokio::test]
    async fn test_analyze_empty_request_never_calls_generator() {
        let request = AnalysisRequest {
            text: "   \n\t ".to_string(),
            ..Default::default()
        };

        let result = analyze(&PanickingGenerator, &request).await;
        assert!(matches!(result, Err(AppError::EmptyRequest(_))));
    }

    #[tokio::test]
    async fn test_attachment_alone_satisfies_precondition() {
        let generator = CannedGenerator {
            response: Ok(STRUCTURED.to_string()),
        };
        let request = AnalysisRequest {
            text: String::new(),
            language: Locale::Sr,
            attachment: Some(Attachment {
                name: Some("ugovor.pdf".to_string()),
                mime_type: "application/pdf".to_string(),
                data: "JVBERi0=".to_string(),
            }),
        };

        assert!(analyze(&generator, &request).await.is_ok());
    }

    #[test]
    fn test_risk_token_mapping() {
        assert_eq!(RiskLevel::from_token("High"), RiskLevel::High);
        assert_eq!(RiskLevel::from_token("  low "), RiskLevel::Low);
        assert_eq!(RiskLevel::from_token("Catastrophic"), RiskLevel::Info);
    }

    #[test]
    fn test_parse_valid_json_with_unknown_risk_token() {
        let raw = r#"{"plain_english": "ok", "risk_level": "Severe", "key_risk": "x", "engineer_note": "y"}"#;
        let result = parse_analysis(raw);
        assert_eq!(result.risk_level, RiskLevel::Info);
        assert_eq!(result.plain_english, "ok");
    }

    #[test]
    fn test_strip_code_fences_plain_passthrough() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_instruction_templates_mandate_keys() {
        for locale in [Locale::En, Locale::Sr] {
            let instruction = instruction_for(locale);
            for key in ["plain_english", "risk_level", "key_risk", "engineer_note"] {
                assert!(instruction.contains(key), "{} missing in {}", key, locale);
            }
            assert!(instruction.contains("'High', 'Medium', 'Low'"));
        }
    }

    #[test]
    fn test_analysis_result_serde_round_trip() {
        let result = AnalysisResult::service_unavailable();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"risk_level\":\"Unknown\""));
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
