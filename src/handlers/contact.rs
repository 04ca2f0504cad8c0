use crate::{handlers::AppState, metrics};
use axum::{extract::State, Json};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Contact-form payload. Deliberately unvalidated: the service only
/// composes a mail hand-off, it does not deliver anything.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub mailto: String,
}

/// POST /api/v1/contact - compose a `mailto:` URL for the office inbox
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Json<ContactResponse> {
    let config = state.config.load();

    metrics::record_contact_inquiry();
    tracing::info!(name = %form.name, "Composed contact inquiry");

    Json(ContactResponse {
        mailto: compose_mailto(&config.contact.recipient, &form),
    })
}

fn compose_mailto(recipient: &str, form: &ContactForm) -> String {
    let subject = format!("Novi Upit sa Sajta: {}", form.name);
    let body = format!(
        "Ime i Prezime: {}\nTelefon: {}\nEmail: {}\nAdresa: {}\n\nOpis Predmeta:\n{}",
        form.name, form.phone, form.email, form.address, form.summary
    );

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(&subject, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC)
    )
}
