use serde::{Serialize, Serializer};

pub const UNIT_PREFIX: &str = "Unit ";
pub const HPD: &str = "HPD";

/// Monthly rent as it comes out of normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rent {
    /// Not-for-market unit, excluded from every rent based view
    Hpd,
    Amount(f64),
    /// Missing or unparsable rent
    Unpriced,
}

impl Rent {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Rent::Amount(value) => Some(*value),
            _ => None,
        }
    }

    /// Price used by the range filter: anything without an amount counts as 0.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount().unwrap_or(0.0)
    }
}

impl Serialize for Rent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rent::Hpd => serializer.serialize_str(HPD),
            Rent::Amount(value) => serializer.serialize_f64(*value),
            Rent::Unpriced => serializer.serialize_none(),
        }
    }
}

// Canonical unit record, serialized with the camelCase keys the page scripts use.
// Re-normalizing the serialized form yields the same Unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub building: String,
    pub bed_bath: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,

    pub rent: Rent,
    pub formatted_rent: String,
    pub outdoor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    pub images: Vec<String>,
    pub description: Vec<String>,
    pub is_leased: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<f64>,
}

impl Unit {
    /// HPD units are marked in either the rent or the type text.
    pub fn is_hpd(&self) -> bool {
        self.rent == Rent::Hpd
            || self
                .unit_type
                .as_deref()
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(HPD))
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Format an amount as US currency: `$4,200.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format a whole dollar amount for slider labels: `$4,200`.
pub fn format_whole_dollars(amount: u32) -> String {
    format!("${}", group_thousands(amount as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Strip everything but digits and decimal points, then read the longest
/// leading decimal number, so "$4,200.00/mo" reads as 4200 and "1.2.3" as 1.2.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in cleaned.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    let candidate = &cleaned[..end];
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    candidate.trim_end_matches('.').parse::<f64>().ok()
}
