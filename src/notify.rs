//! Optional Telegram notification for new leads.
//!
//! Configured entirely from the environment; when either variable is missing
//! the notifier is simply absent. Delivery is fire-and-forget: a failure is
//! logged and never affects the lead submission.

use crate::models::Lead;
use std::env;
use std::time::Duration;
use tracing::warn;

pub struct TelegramNotifier {
    url: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn from_env() -> Option<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN").ok().filter(|t| !t.is_empty())?;
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok().filter(|c| !c.is_empty())?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .ok()?;

        Some(Self {
            url: format!("https://api.telegram.org/bot{token}/sendMessage"),
            chat_id,
            client,
        })
    }

    pub async fn send(&self, lead: &Lead) {
        let text = format!(
            "Nuevo lead:\nNombre: {}\nEmail: {}\nTel: {}\nMensaje: {}\nOrigen: {}",
            lead.name, lead.email, lead.phone, lead.message, lead.source
        );
        let body = serde_json::json!({ "chat_id": self.chat_id, "text": text });

        match self.client.post(&self.url).json(&body).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!("telegram notification rejected: {}", response.status());
            }
            Ok(_) => {}
            Err(err) => warn!("telegram notification failed: {err}"),
        }
    }
}
