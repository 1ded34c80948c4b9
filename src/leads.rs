//! Lead normalization and validation.
//!
//! Pure functions over the wire request; the handler turns a rejection into
//! a 400 before anything is stored or forwarded.

use crate::models::{Lead, LeadRequest};
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

/// Same pattern the page's form validation uses.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

pub const DEFAULT_MESSAGE: &str = "Consulta desde la web";
pub const WEB_FORM_SOURCE: &str = "formulario-web";

pub fn normalize(request: &LeadRequest) -> Result<Lead, String> {
    let name = request.name.trim();
    let email = request.email.trim();
    let phone = request.phone.trim();

    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err("name, email and phone are required".to_string());
    }
    // Bots tend to paste a URL into the name field.
    if name.to_lowercase().starts_with("http") {
        return Err("Invalid name".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email".to_string());
    }

    let message = match request.message.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DEFAULT_MESSAGE.to_string(),
    };
    let source = match request.source.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => WEB_FORM_SOURCE.to_string(),
    };

    Ok(Lead {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message,
        source,
        created_at: Local::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, phone: &str) -> LeadRequest {
        LeadRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: None,
            source: None,
        }
    }

    #[test]
    fn accepts_and_trims_a_valid_lead() {
        let lead = normalize(&request("  Ana Pérez ", " ana@example.com ", " 999888777 "))
            .expect("valid lead");
        assert_eq!(lead.name, "Ana Pérez");
        assert_eq!(lead.email, "ana@example.com");
        assert_eq!(lead.phone, "999888777");
        assert_eq!(lead.message, DEFAULT_MESSAGE);
        assert_eq!(lead.source, WEB_FORM_SOURCE);
        assert!(!lead.created_at.is_empty());
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(normalize(&request("", "ana@example.com", "999888777")).is_err());
        assert!(normalize(&request("Ana", "", "999888777")).is_err());
        assert!(normalize(&request("Ana", "ana@example.com", "   ")).is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["ana", "ana@", "@example.com", "ana@example", "a na@example.com"] {
            assert!(normalize(&request("Ana", email, "999888777")).is_err(), "{email}");
        }
    }

    #[test]
    fn rejects_link_names() {
        assert!(normalize(&request("http://spam.example", "a@b.co", "999888777")).is_err());
        assert!(normalize(&request("HTTPS://spam", "a@b.co", "999888777")).is_err());
    }

    #[test]
    fn keeps_caller_supplied_message_and_source() {
        let mut req = request("Ana", "ana@example.com", "999888777");
        req.message = Some(" Necesito un pozo de tierra ".to_string());
        req.source = Some("campaña-redes".to_string());
        let lead = normalize(&req).expect("valid lead");
        assert_eq!(lead.message, "Necesito un pozo de tierra");
        assert_eq!(lead.source, "campaña-redes");
    }

    #[test]
    fn blank_message_falls_back_to_placeholder() {
        let mut req = request("Ana", "ana@example.com", "999888777");
        req.message = Some("   ".to_string());
        let lead = normalize(&req).expect("valid lead");
        assert_eq!(lead.message, DEFAULT_MESSAGE);
    }
}
