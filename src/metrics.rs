//! Service-interest metrics for the dashboard bar chart.
//!
//! With no leads on file the chart shows a fixed baseline; once leads exist,
//! each bar reflects the share of leads whose message mentions that service.
//! Either way every served value stays within `[5, 100]` so bars never
//! collapse or overflow.

use crate::chat::{mentions_any, SERVICE_KEYS};
use crate::models::{Lead, ServiceMetrics};

pub const BASELINE: ServiceMetrics = ServiceMetrics {
    itse: 80,
    pozo: 65,
    mant: 90,
    inc: 50,
};

pub const MIN_HEIGHT: u8 = 5;
pub const MAX_HEIGHT: u8 = 100;

pub fn clamp_height(value: u8) -> u8 {
    value.clamp(MIN_HEIGHT, MAX_HEIGHT)
}

pub fn service_interest(leads: &[Lead]) -> ServiceMetrics {
    if leads.is_empty() {
        return BASELINE;
    }

    let total = leads.len() as u64;
    let mut shares = [0u8; 4];
    for (slot, (_, keys)) in shares.iter_mut().zip(SERVICE_KEYS) {
        let matching = leads
            .iter()
            .filter(|lead| mentions_any(&lead.message, keys))
            .count() as u64;
        *slot = clamp_height((matching * 100 / total) as u8);
    }

    ServiceMetrics {
        itse: shares[0],
        pozo: shares[1],
        mant: shares[2],
        inc: shares[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_with_message(message: &str) -> Lead {
        Lead {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "999888777".to_string(),
            message: message.to_string(),
            source: "formulario-web".to_string(),
            created_at: "2026-01-05T10:00:00-05:00".to_string(),
        }
    }

    #[test]
    fn clamp_is_identity_inside_the_range() {
        assert_eq!(clamp_height(5), 5);
        assert_eq!(clamp_height(50), 50);
        assert_eq!(clamp_height(100), 100);
    }

    #[test]
    fn clamp_saturates_outside_the_range() {
        assert_eq!(clamp_height(0), 5);
        assert_eq!(clamp_height(4), 5);
        assert_eq!(clamp_height(101), 100);
        assert_eq!(clamp_height(u8::MAX), 100);
    }

    #[test]
    fn no_leads_serves_the_baseline() {
        assert_eq!(service_interest(&[]), BASELINE);
    }

    #[test]
    fn shares_follow_the_messages() {
        let leads = vec![
            lead_with_message("necesito certificado itse"),
            lead_with_message("itse para mi local"),
            lead_with_message("cotización de pozo de tierra"),
            lead_with_message("hola"),
        ];
        let metrics = service_interest(&leads);
        assert_eq!(metrics.itse, 50);
        assert_eq!(metrics.pozo, 25);
        // No mentions still render as a visible bar.
        assert_eq!(metrics.mant, MIN_HEIGHT);
        assert_eq!(metrics.inc, MIN_HEIGHT);
    }

    #[test]
    fn every_served_value_is_in_render_range() {
        let leads = vec![lead_with_message("alarma de incendios")];
        let metrics = service_interest(&leads);
        for value in [metrics.itse, metrics.pozo, metrics.mant, metrics.inc] {
            assert!((MIN_HEIGHT..=MAX_HEIGHT).contains(&value));
        }
    }
}
