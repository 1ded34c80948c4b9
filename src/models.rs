use serde::{Deserialize, Serialize};

/// A prospective-customer contact record accepted through the web form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub source: String,
    pub created_at: String,
}

/// Everything the site persists between restarts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteData {
    pub leads: Vec<Lead>,
}

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

fn default_use_ai() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// Interest percentages for the four services, as shown on the dashboard
/// bar chart. Values are always within `[5, 100]` when served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    pub itse: u8,
    pub pozo: u8,
    pub mant: u8,
    pub inc: u8,
}
