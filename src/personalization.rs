//! Personalization records and their pricing.
//!
//! Selections reach the store in two vocabularies: the structured record the
//! backend stores ([`CanonicalPersonalization`]) and the older flat form the
//! option sheets produce ([`LegacyPersonalization`]). [`Personalization`] keeps
//! the two apart, and [`Personalization::into_canonical`] is the only migration path.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeddyChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowerChoice {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPersonalization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub teddy: Option<TeddyChoice>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flowers: Option<FlowerChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapping_paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_toys: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub felt_design: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyPersonalization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapping_paper: Option<String>,
    #[serde(rename = "wrappingPaper", default, skip_serializing_if = "Option::is_none")]
    pub wrapping_paper_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub felt_design: Option<String>,
    #[serde(rename = "feltDesign", default, skip_serializing_if = "Option::is_none")]
    pub felt_design_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub massage: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub teddy: Option<String>,
    #[serde(rename = "teddyType", default, skip_serializing_if = "Option::is_none")]
    pub teddy_type: Option<String>,
    #[serde(rename = "teddyColor", default, skip_serializing_if = "Option::is_none")]
    pub teddy_color: Option<String>,
    #[serde(
        rename = "flowersCount",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub flowers_count: Option<String>,
    #[serde(rename = "flowersColor", default, skip_serializing_if = "Option::is_none")]
    pub flowers_color: Option<String>,
    #[serde(rename = "softToys", default, skip_serializing_if = "Option::is_none")]
    pub soft_toys_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_toys: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Personalization {
    Legacy(LegacyPersonalization),
    Canonical(CanonicalPersonalization),
}

impl Personalization {
    /// Classifies a raw record. Records stamped with a `customization_id` or
    /// carrying a structured `teddy` object are canonical; everything else is
    /// read as legacy. Legacy keys present on a canonical record fill the gaps
    /// the canonical keys leave.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = &value else {
            return None;
        };
        if map.is_empty() {
            return None;
        }

        let is_canonical = map.contains_key("customization_id")
            || map.get("teddy").is_some_and(Value::is_object);
        let legacy = serde_json::from_value::<LegacyPersonalization>(value.clone())
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "unreadable legacy personalization keys");
                LegacyPersonalization::default()
            });

        if !is_canonical {
            return Some(Personalization::Legacy(legacy));
        }

        let mut canonical = serde_json::from_value::<CanonicalPersonalization>(value)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "unreadable canonical personalization keys");
                CanonicalPersonalization::default()
            });
        canonical.fill_gaps_from(convert_to_new_format(&legacy));
        Some(Personalization::Canonical(canonical))
    }

    pub fn into_canonical(self) -> CanonicalPersonalization {
        match self {
            Personalization::Legacy(legacy) => convert_to_new_format(&legacy),
            Personalization::Canonical(canonical) => canonical,
        }
    }

    /// Migrates to canonical, stamps an id if the record has none and prices it.
    /// Returns `None` when nothing was actually selected.
    pub fn normalize(self) -> Option<CanonicalPersonalization> {
        let mut canonical = self.into_canonical();
        if !has_personalization(&canonical) {
            return None;
        }
        if canonical.customization_id.is_none() {
            canonical.customization_id = Some(generate_customization_id());
        }
        canonical.extra_cost = Some(calculate_extra_cost(&canonical));
        Some(canonical)
    }
}

impl From<LegacyPersonalization> for Personalization {
    fn from(value: LegacyPersonalization) -> Self {
        Personalization::Legacy(value)
    }
}

impl From<CanonicalPersonalization> for Personalization {
    fn from(value: CanonicalPersonalization) -> Self {
        Personalization::Canonical(value)
    }
}

impl CanonicalPersonalization {
    /// Identity of the selections, ignoring the generated id and the derived cost.
    pub fn fingerprint(&self) -> String {
        let selections = CanonicalPersonalization {
            customization_id: None,
            extra_cost: None,
            ..self.clone()
        };
        serde_json::to_string(&selections).unwrap_or_default()
    }

    pub fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }

    fn fill_gaps_from(&mut self, other: CanonicalPersonalization) {
        fill(&mut self.occasion, other.occasion);
        fill(&mut self.teddy, other.teddy);
        fill(&mut self.flowers, other.flowers);
        fill(&mut self.wrapping_paper, other.wrapping_paper);
        fill(&mut self.soft_toys, other.soft_toys);
        fill(&mut self.felt_design, other.felt_design);
        fill(&mut self.custom_message, other.custom_message);
    }
}

fn fill<T>(slot: &mut Option<T>, candidate: Option<T>) {
    if slot.is_none() {
        *slot = candidate;
    }
}

pub fn generate_customization_id() -> String {
    format!("CUST-{}", Utc::now().timestamp_millis())
}

pub fn convert_to_new_format(legacy: &LegacyPersonalization) -> CanonicalPersonalization {
    let mut canonical = CanonicalPersonalization {
        customization_id: Some(generate_customization_id()),
        occasion: present(&legacy.occasion),
        wrapping_paper: present(&legacy.wrapping_paper)
            .or_else(|| present(&legacy.wrapping_paper_legacy)),
        felt_design: present(&legacy.felt_design).or_else(|| present(&legacy.felt_design_legacy)),
        custom_message: present(&legacy.custom_message).or_else(|| present(&legacy.massage)),
        soft_toys: present(&legacy.soft_toys_legacy).or_else(|| present(&legacy.soft_toys)),
        ..Default::default()
    };

    let teddy = present(&legacy.teddy);
    let teddy_type = present(&legacy.teddy_type);
    let teddy_color = present(&legacy.teddy_color);
    if teddy.is_some() || teddy_type.is_some() || teddy_color.is_some() {
        canonical.teddy = Some(TeddyChoice {
            included: Some(matches!(teddy.as_deref(), Some("With") | Some("Yes"))),
            kind: teddy_type,
            color: teddy_color,
        });
    }

    let flowers_count = present(&legacy.flowers_count);
    let flowers_color = present(&legacy.flowers_color);
    if flowers_count.is_some() || flowers_color.is_some() {
        canonical.flowers = Some(FlowerChoice {
            count: flowers_count.as_deref().and_then(parse_leading_int),
            color: flowers_color,
        });
    }

    canonical.extra_cost = Some(calculate_extra_cost(&canonical));
    canonical
}

pub fn convert_to_legacy_format(canonical: &CanonicalPersonalization) -> LegacyPersonalization {
    let mut legacy = LegacyPersonalization {
        occasion: present(&canonical.occasion),
        wrapping_paper_legacy: present(&canonical.wrapping_paper),
        felt_design_legacy: present(&canonical.felt_design),
        massage: present(&canonical.custom_message),
        soft_toys_legacy: present(&canonical.soft_toys),
        ..Default::default()
    };

    if let Some(teddy) = &canonical.teddy {
        let with = if teddy.included.unwrap_or(false) { "With" } else { "Without" };
        legacy.teddy = Some(with.to_string());
        legacy.teddy_type = teddy.kind.clone();
        legacy.teddy_color = teddy.color.clone();
    }

    if let Some(flowers) = &canonical.flowers {
        legacy.flowers_count = flowers.count.map(|count| count.to_string());
        legacy.flowers_color = flowers.color.clone();
    }

    legacy
}

pub fn calculate_extra_cost(details: &CanonicalPersonalization) -> f64 {
    let mut extra_cost = 0.0;

    extra_cost += match details.occasion.as_deref() {
        Some("Graduation") => 5.0,
        Some("Birthday") => 3.0,
        Some("Valentine") => 8.0,
        Some("Mini") => 2.0,
        _ => 0.0,
    };

    if let Some(teddy) = details.teddy.as_ref().filter(|t| t.included.unwrap_or(false)) {
        extra_cost += 15.0;
        extra_cost += match teddy.kind.as_deref() {
            Some("handmade") => 5.0,
            Some("fluffy") => 10.0,
            _ => 0.0,
        };
    }

    // the count itself is the surcharge, there is no per-stem price
    if let Some(count) = details.flowers.as_ref().and_then(|f| f.count) {
        extra_cost += f64::from(count);
    }

    extra_cost += match details.wrapping_paper.as_deref() {
        Some("Premium") => 3.0,
        Some("Gift Box") => 5.0,
        _ => 0.0,
    };

    if details.soft_toys.as_deref() == Some("Yes") {
        extra_cost += 8.0;
    }

    if details.felt_design.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        extra_cost += 5.0;
    }

    extra_cost
}

pub fn has_personalization(details: &CanonicalPersonalization) -> bool {
    is_set(&details.occasion)
        || details.teddy.as_ref().is_some_and(|t| t.included.unwrap_or(false))
        || details.flowers.as_ref().and_then(|f| f.count).is_some_and(|c| c != 0)
        || is_set(&details.wrapping_paper)
        || is_set(&details.soft_toys)
        || is_set(&details.felt_design)
        || is_set(&details.custom_message)
}

pub fn get_personalization_summary(details: &CanonicalPersonalization) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(occasion) = present(&details.occasion) {
        parts.push(format!("Occasion: {occasion}"));
    }

    if let Some(teddy) = details.teddy.as_ref().filter(|t| t.included.unwrap_or(false)) {
        let mut text = String::from("Teddy: ");
        if let Some(kind) = present(&teddy.kind) {
            text.push_str(&kind);
        }
        if let Some(color) = present(&teddy.color) {
            text.push_str(&format!(" ({color})"));
        }
        parts.push(text.trim_end().to_string());
    }

    if let Some(flowers) = details.flowers.as_ref() {
        if let Some(count) = flowers.count.filter(|c| *c != 0) {
            let mut text = format!("Flowers: {count}");
            if let Some(color) = present(&flowers.color) {
                text.push_str(&format!(" ({color})"));
            }
            parts.push(text);
        }
    }

    if let Some(wrapping) = present(&details.wrapping_paper) {
        parts.push(format!("Wrapping: {wrapping}"));
    }

    if details.soft_toys.as_deref() == Some("Yes") {
        parts.push("Soft Toys: Yes".to_string());
    }

    if let Some(design) = details.felt_design.as_deref().filter(|d| !d.trim().is_empty()) {
        parts.push(format!("Custom Design: {design}"));
    }

    if let Some(message) = details.custom_message.as_deref().filter(|m| !m.trim().is_empty()) {
        parts.push(format!("Message: {message}"));
    }

    if parts.is_empty() {
        "No personalization".to_string()
    } else {
        parts.join(", ")
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Reads the leading integer of a string ("12 roses" -> 12), the way form
/// inputs report counts.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .skip_while(|c| *c == '+')
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Counts arrive as numbers or as form text such as `"5"` or `"12 roses"`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.as_deref().and_then(parse_leading_int))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_parse_matches_form_input() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int(" 7 roses"), Some(7));
        assert_eq!(parse_leading_int("roses"), None);
        assert_eq!(parse_leading_int("-3"), None);
    }

    #[test]
    fn flower_count_accepts_text() {
        let flowers: FlowerChoice =
            serde_json::from_value(serde_json::json!({ "count": "5", "color": "Red" })).unwrap();
        assert_eq!(flowers.count, Some(5));
        assert_eq!(flowers.color.as_deref(), Some("Red"));

        let unreadable: FlowerChoice =
            serde_json::from_value(serde_json::json!({ "count": "many", "color": "Red" })).unwrap();
        assert_eq!(unreadable.count, None);
        assert_eq!(unreadable.color.as_deref(), Some("Red"));
    }

    #[test]
    fn fingerprint_ignores_generated_fields() {
        let a = CanonicalPersonalization {
            customization_id: Some("CUST-1".into()),
            occasion: Some("Birthday".into()),
            extra_cost: Some(3.0),
            ..Default::default()
        };
        let b = CanonicalPersonalization {
            customization_id: Some("CUST-2".into()),
            ..a.clone()
        };
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
