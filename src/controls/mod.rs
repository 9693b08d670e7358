pub mod dropdown;
pub mod price_range;

pub use dropdown::*;
pub use price_range::*;

use crate::config::WidgetConfig;
use crate::filter::criteria::FilterCriteria;
use serde::{Deserialize, Serialize};

/// The three dropdown filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Bedrooms,
    Bathrooms,
    Outdoor,
}

impl std::str::FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bedrooms" | "bedroom" => Ok(FilterKind::Bedrooms),
            "bathrooms" | "bathroom" => Ok(FilterKind::Bathrooms),
            "outdoor" => Ok(FilterKind::Outdoor),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

/// Filter control state. Controls only describe the selection; they never
/// touch the unit collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    pub bedrooms: Dropdown,
    pub bathrooms: Dropdown,
    pub outdoor: Dropdown,
    pub price: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsView {
    pub bedrooms: DropdownView,
    pub bathrooms: DropdownView,
    pub outdoor: DropdownView,
    pub price: PriceLabels,
    pub min_price: u32,
    pub max_price: u32,
}

impl FilterControls {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            bedrooms: Dropdown::from_config(&config.filters.bedrooms),
            bathrooms: Dropdown::from_config(&config.filters.bathrooms),
            outdoor: Dropdown::from_config(&config.filters.outdoor),
            price: PriceRange::new(config.price),
        }
    }

    pub fn dropdown(&self, kind: FilterKind) -> &Dropdown {
        match kind {
            FilterKind::Bedrooms => &self.bedrooms,
            FilterKind::Bathrooms => &self.bathrooms,
            FilterKind::Outdoor => &self.outdoor,
        }
    }

    pub fn dropdown_mut(&mut self, kind: FilterKind) -> &mut Dropdown {
        match kind {
            FilterKind::Bedrooms => &mut self.bedrooms,
            FilterKind::Bathrooms => &mut self.bathrooms,
            FilterKind::Outdoor => &mut self.outdoor,
        }
    }

    /// Clicking a dropdown header: every other list closes, this one toggles.
    pub fn toggle_dropdown(&mut self, kind: FilterKind) {
        let was_open = self.dropdown(kind).is_open();
        self.close_all();
        if !was_open {
            self.dropdown_mut(kind).toggle();
        }
    }

    /// Click outside any dropdown.
    pub fn close_all(&mut self) {
        self.bedrooms.close();
        self.bathrooms.close();
        self.outdoor.close();
    }

    /// Every dropdown back to its first option, price back to the full domain.
    pub fn reset(&mut self) {
        self.bedrooms.reset();
        self.bathrooms.reset();
        self.outdoor.reset();
        self.price.reset();
    }

    pub fn criteria(&self, building: Option<&str>) -> FilterCriteria {
        let mut criteria = FilterCriteria::match_all()
            .with_bedrooms(self.bedrooms.selected_value())
            .with_bathrooms(self.bathrooms.selected_value())
            .with_outdoor(self.outdoor.selected_value())
            .with_price(self.price.min(), self.price.max());
        if let Some(building) = building {
            criteria = criteria.with_building(building);
        }
        criteria
    }

    pub fn render(&self) -> ControlsView {
        ControlsView {
            bedrooms: self.bedrooms.render(),
            bathrooms: self.bathrooms.render(),
            outdoor: self.outdoor.render(),
            price: self.price.labels(),
            min_price: self.price.min(),
            max_price: self.price.max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_closes_others() {
        let mut controls = FilterControls::new(&WidgetConfig::default());
        controls.toggle_dropdown(FilterKind::Bedrooms);
        assert!(controls.bedrooms.is_open());

        controls.toggle_dropdown(FilterKind::Outdoor);
        assert!(!controls.bedrooms.is_open());
        assert!(controls.outdoor.is_open());

        controls.toggle_dropdown(FilterKind::Outdoor);
        assert!(!controls.outdoor.is_open());
    }

    #[test]
    fn test_criteria_from_selection() {
        let mut controls = FilterControls::new(&WidgetConfig::default());
        controls.bedrooms.select_value("2");
        controls.outdoor.select_value("balcony");
        controls.price.set_min(3000);

        let criteria = controls.criteria(Some("1"));
        assert_eq!(criteria.building.as_deref(), Some("1"));
        assert_eq!(criteria.bedrooms.as_deref(), Some("2"));
        assert_eq!(criteria.bathrooms, None);
        assert_eq!(criteria.outdoor.as_deref(), Some("balcony"));
        assert_eq!(criteria.price.map(|p| (p.min, p.max)), Some((3000, 5500)));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let config = WidgetConfig::default();
        let mut controls = FilterControls::new(&config);
        controls.bathrooms.select(2);
        controls.price.set_max(4000);
        controls.reset();
        assert_eq!(controls, FilterControls::new(&config));
    }

    #[test]
    fn test_filter_kind_parse() {
        assert_eq!("Bedrooms".parse::<FilterKind>(), Ok(FilterKind::Bedrooms));
        assert_eq!("outdoor".parse::<FilterKind>(), Ok(FilterKind::Outdoor));
        assert!("garage".parse::<FilterKind>().is_err());
    }
}
