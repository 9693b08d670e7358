use serde::Serialize;

/// Value a dropdown reports when nothing is selected.
pub const MATCH_ALL: &str = "all";

/// Inclusive rent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceWindow {
    pub min: u32,
    pub max: u32,
}

impl PriceWindow {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }
}

/// The active predicate set. `None` puts a predicate in its match-all state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub building: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<f64>,
    pub outdoor: Option<String>,
    pub price: Option<PriceWindow>,
}

impl FilterCriteria {
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into()).filter(|b: &String| !b.is_empty());
        self
    }

    /// Dropdown value for bedrooms; "all" (or empty) is inert.
    pub fn with_bedrooms(mut self, value: &str) -> Self {
        self.bedrooms = selection(value);
        self
    }

    /// Dropdown value for bathrooms. A value that is not a number can never
    /// equal a unit's count, so it excludes everything.
    pub fn with_bathrooms(mut self, value: &str) -> Self {
        self.bathrooms = selection(value).map(|v| v.parse::<f64>().unwrap_or(f64::NAN));
        self
    }

    pub fn with_outdoor(mut self, value: &str) -> Self {
        self.outdoor = selection(value).map(|v| v.to_lowercase());
        self
    }

    pub fn with_price(mut self, min: u32, max: u32) -> Self {
        self.price = Some(PriceWindow { min, max });
        self
    }
}

fn selection(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(MATCH_ALL) {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_inert() {
        let criteria = FilterCriteria::match_all()
            .with_bedrooms("all")
            .with_bathrooms("ALL")
            .with_outdoor("")
            .with_building("");
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_selections_parse() {
        let criteria = FilterCriteria::match_all()
            .with_bedrooms("2")
            .with_bathrooms("1.5")
            .with_outdoor("Balcony")
            .with_building("3")
            .with_price(3000, 4000);
        assert_eq!(criteria.bedrooms.as_deref(), Some("2"));
        assert_eq!(criteria.bathrooms, Some(1.5));
        assert_eq!(criteria.outdoor.as_deref(), Some("balcony"));
        assert_eq!(criteria.building.as_deref(), Some("3"));
        assert!(criteria.price.unwrap().contains(4000.0));
        assert!(!criteria.price.unwrap().contains(4000.01));
    }

    #[test]
    fn test_unparsable_bathroom_selection() {
        let criteria = FilterCriteria::match_all().with_bathrooms("many");
        assert!(criteria.bathrooms.unwrap().is_nan());
    }
}
