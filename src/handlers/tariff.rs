use crate::{
    locale::Locale,
    metrics,
    tariff::{self, FeeStructure, CRIMINAL_TIERS, NON_ASSESSABLE_CATEGORIES},
};
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

/// Query parameters for table listings
#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub lang: Locale,
}

#[derive(Debug, Serialize)]
pub struct CriminalTierEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub fees: FeeStructure,
}

#[derive(Debug, Serialize)]
pub struct CriminalTiersResponse {
    pub tiers: Vec<CriminalTierEntry>,
}

/// GET /api/v1/tariff/criminal - the fixed six-tier table
///
/// Example: GET /api/v1/tariff/criminal?lang=sr
pub async fn list_criminal_tiers(
    Query(params): Query<LocaleParams>,
) -> Json<CriminalTiersResponse> {
    let tiers = CRIMINAL_TIERS
        .iter()
        .map(|tier| CriminalTierEntry {
            id: tier.id,
            label: tier.label(params.lang),
            fees: tier.fees,
        })
        .collect();

    Json(CriminalTiersResponse { tiers })
}

#[derive(Debug, Serialize)]
pub struct NonAssessableEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub base: u64,
}

#[derive(Debug, Serialize)]
pub struct NonAssessableResponse {
    pub categories: Vec<NonAssessableEntry>,
}

/// GET /api/v1/tariff/non-assessable - fixed-base category table
pub async fn list_non_assessable_categories(
    Query(params): Query<LocaleParams>,
) -> Json<NonAssessableResponse> {
    let categories = NON_ASSESSABLE_CATEGORIES
        .iter()
        .map(|cat| NonAssessableEntry {
            id: cat.id,
            label: cat.label(params.lang),
            base: cat.base,
        })
        .collect();

    Json(NonAssessableResponse { categories })
}

/// One of the three mutually exclusive procedure categories.
#[derive(Debug, Deserialize)]
#[serde(tag = "procedure", rename_all = "snake_case")]
pub enum QuoteRequest {
    Criminal { tier_id: String },
    NonAssessable { category_id: String },
    Assessable { value: f64 },
}

impl QuoteRequest {
    fn procedure_name(&self) -> &'static str {
        match self {
            Self::Criminal { .. } => "criminal",
            Self::NonAssessable { .. } => "non_assessable",
            Self::Assessable { .. } => "assessable",
        }
    }
}

/// POST /api/v1/tariff/quote
///
/// Always answers 200 with a fee structure; lookup misses and out-of-range
/// values produce the zero structure rather than an error, so the page can
/// render a quote on every state change.
pub async fn handle_quote(Json(request): Json<QuoteRequest>) -> Json<FeeStructure> {
    metrics::record_quote(request.procedure_name());

    let quote = match &request {
        QuoteRequest::Criminal { tier_id } => tariff::criminal_fee(tier_id),
        QuoteRequest::NonAssessable { category_id } => tariff::non_assessable_fee(category_id),
        QuoteRequest::Assessable { value } => tariff::assessable_fee(*value),
    };

    tracing::debug!(
        procedure = request.procedure_name(),
        submission = quote.submission,
        zero = quote.is_zero(),
        "Computed fee quote"
    );

    Json(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_criminal_tiers_localized() {
        let Json(en) = list_criminal_tiers(Query(LocaleParams { lang: Locale::En })).await;
        let Json(sr) = list_criminal_tiers(Query(LocaleParams { lang: Locale::Sr })).await;

        assert_eq!(en.tiers.len(), 6);
        assert_eq!(sr.tiers.len(), 6);
        assert_ne!(en.tiers[0].label, sr.tiers[0].label);
        // Locale only changes labels, never amounts
        for (a, b) in en.tiers.iter().zip(sr.tiers.iter()) {
            assert_eq!(a.fees, b.fees);
        }
    }

    #[tokio::test]
    async fn test_quote_criminal_known_tier() {
        let request = QuoteRequest::Criminal {
            tier_id: "opt3".to_string(),
        };
        let Json(quote) = handle_quote(Json(request)).await;
        assert_eq!(quote.submission, 50_000);
        assert_eq!(quote.appeal, 100_000);
    }

    #[tokio::test]
    async fn test_quote_unknown_ids_yield_zero() {
        let Json(quote) = handle_quote(Json(QuoteRequest::Criminal {
            tier_id: "missing".to_string(),
        }))
        .await;
        assert!(quote.is_zero());

        let Json(quote) = handle_quote(Json(QuoteRequest::NonAssessable {
            category_id: "missing".to_string(),
        }))
        .await;
        assert!(quote.is_zero());
    }

    #[test]
    fn test_quote_request_wire_format() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"procedure": "non_assessable", "category_id": "stecaj"}"#,
        )
        .unwrap();
        assert!(matches!(request, QuoteRequest::NonAssessable { .. }));

        let request: QuoteRequest =
            serde_json::from_str(r#"{"procedure": "assessable", "value": 120000}"#).unwrap();
        assert!(matches!(request, QuoteRequest::Assessable { .. }));
    }
}
