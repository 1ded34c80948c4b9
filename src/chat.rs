//! Rule-based chat replies for the site widget.
//!
//! Replies are keyed on the four service families the company offers.
//! Matching is keyword-based and case-insensitive; anything unmatched gets a
//! generic ask-for-contact-details reply.

const ITSE_KEYS: &[&str] = &["itse", "licencia", "inspección", "inspeccion"];
const POZO_KEYS: &[&str] = &["pozo", "tierra", "puesta a tierra"];
const MANT_KEYS: &[&str] = &["mantenimiento", "preventivo", "correctivo"];
const INC_KEYS: &[&str] = &["incendio", "incendios", "alarma", "detección", "detector"];

const ITSE_REPLY: &str = "ITSE: pago municipal aprox. S/ 218 y gestión desde S/ 300 (referencial). \
     Para precisión: rubro y área en m². ¿Agendamos visita técnica sin costo?";
const POZO_REPLY: &str = "Pozo de tierra: S/ 1,500 – 2,500 (referencial, depende del terreno). \
     Podemos medir resistencia y proponer solución. ¿Dirección para visita?";
const MANT_REPLY: &str = "Mantenimiento: plan a medida (preventivo/correctivo). \
     Cuéntame tamaño del local y equipos críticos para estimar.";
const INC_REPLY: &str = "Contra incendios: diseño, detección y alarma según normativa. \
     Costo depende del área y riesgo. ¿Qué tipo de propiedad es?";
const DEFAULT_REPLY: &str =
    "Gracias. Déjanos nombre y número para coordinar una visita técnica.";

/// The keyword families, in dashboard order. Shared with the metrics
/// computation so chat and chart agree on what counts as interest.
pub const SERVICE_KEYS: [(&str, &[&str]); 4] = [
    ("itse", ITSE_KEYS),
    ("pozo", POZO_KEYS),
    ("mant", MANT_KEYS),
    ("inc", INC_KEYS),
];

pub fn mentions_any(text: &str, keys: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keys.iter().any(|key| lower.contains(key))
}

pub fn rule_based_reply(text: &str) -> &'static str {
    if mentions_any(text, ITSE_KEYS) {
        ITSE_REPLY
    } else if mentions_any(text, POZO_KEYS) {
        POZO_REPLY
    } else if mentions_any(text, MANT_KEYS) {
        MANT_REPLY
    } else if mentions_any(text, INC_KEYS) {
        INC_REPLY
    } else {
        DEFAULT_REPLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_route_to_their_service() {
        assert_eq!(rule_based_reply("necesito el certificado ITSE"), ITSE_REPLY);
        assert_eq!(rule_based_reply("cotizar puesta a tierra"), POZO_REPLY);
        assert_eq!(rule_based_reply("mantenimiento preventivo anual"), MANT_REPLY);
        assert_eq!(rule_based_reply("alarma contra incendios"), INC_REPLY);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(rule_based_reply("POZO DE TIERRA"), POZO_REPLY);
        assert_eq!(rule_based_reply("Inspección del local"), ITSE_REPLY);
    }

    #[test]
    fn itse_wins_when_several_services_match() {
        assert_eq!(
            rule_based_reply("licencia itse y pozo de tierra"),
            ITSE_REPLY
        );
    }

    #[test]
    fn unknown_text_gets_generic_reply() {
        assert_eq!(rule_based_reply("hola, buenos días"), DEFAULT_REPLY);
        assert_eq!(rule_based_reply(""), DEFAULT_REPLY);
    }
}
