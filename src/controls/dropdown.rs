use crate::config::OptionConfig;
use crate::filter::criteria::MATCH_ALL;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl From<&OptionConfig> for DropdownOption {
    fn from(option: &OptionConfig) -> Self {
        Self {
            label: option.label.clone(),
            value: option.value.clone(),
        }
    }
}

/// Headless select box: the options, which one is selected, and whether the
/// option list is showing. Rendering is a pure function of this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    options: Vec<DropdownOption>,
    selected_index: usize,
    open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub selected_label: String,
    pub open: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl Dropdown {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            options,
            selected_index: 0,
            open: false,
        }
    }

    pub fn from_config(options: &[OptionConfig]) -> Self {
        Self::new(options.iter().map(DropdownOption::from).collect())
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the selected option; an empty dropdown reads as match-all.
    pub fn selected_value(&self) -> &str {
        self.options
            .get(self.selected_index)
            .map(|o| o.value.as_str())
            .unwrap_or(MATCH_ALL)
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected_index)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    /// Select by position. Closes the list. Returns whether the selection
    /// changed; an index past the end is ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            log::warn!(
                "Dropdown option {} out of range ({} options)",
                index,
                self.options.len()
            );
            return false;
        }
        self.open = false;
        let changed = self.selected_index != index;
        self.selected_index = index;
        changed
    }

    /// Select the first option carrying `value` (case-insensitive).
    pub fn select_value(&mut self, value: &str) -> bool {
        match self
            .options
            .iter()
            .position(|o| o.value.eq_ignore_ascii_case(value))
        {
            Some(index) => self.select(index),
            None => {
                log::warn!("No dropdown option with value '{}'", value);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn render(&self) -> DropdownView {
        DropdownView {
            selected_label: self.selected_label().to_string(),
            open: self.open,
            options: self
                .options
                .iter()
                .enumerate()
                .map(|(index, o)| OptionView {
                    index,
                    label: o.label.clone(),
                    value: o.value.clone(),
                    selected: index == self.selected_index,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bedrooms() -> Dropdown {
        Dropdown::new(vec![
            DropdownOption {
                label: "All Bedrooms".into(),
                value: "all".into(),
            },
            DropdownOption {
                label: "1 Bedroom".into(),
                value: "1".into(),
            },
            DropdownOption {
                label: "2 Bedrooms".into(),
                value: "2".into(),
            },
        ])
    }

    #[test]
    fn test_defaults_to_first_option() {
        let dropdown = bedrooms();
        assert_eq!(dropdown.selected_value(), "all");
        assert_eq!(dropdown.selected_label(), "All Bedrooms");
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_select_closes_and_reports_change() {
        let mut dropdown = bedrooms();
        dropdown.toggle();
        assert!(dropdown.is_open());

        assert!(dropdown.select(2));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected_value(), "2");

        assert!(!dropdown.select(2));
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut dropdown = bedrooms();
        dropdown.select(1);
        assert!(!dropdown.select(9));
        assert_eq!(dropdown.selected_index(), 1);
    }

    #[test]
    fn test_select_value() {
        let mut dropdown = bedrooms();
        assert!(dropdown.select_value("2"));
        assert_eq!(dropdown.selected_label(), "2 Bedrooms");
        assert!(!dropdown.select_value("7"));
        assert_eq!(dropdown.selected_index(), 2);
    }

    #[test]
    fn test_render_marks_selection() {
        let mut dropdown = bedrooms();
        dropdown.select(1);
        let view = dropdown.render();
        assert_eq!(view.selected_label, "1 Bedroom");
        let selected: Vec<bool> = view.options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_reset() {
        let mut dropdown = bedrooms();
        dropdown.select(2);
        dropdown.toggle();
        dropdown.reset();
        assert_eq!(dropdown.selected_index(), 0);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_empty_dropdown_is_match_all() {
        let dropdown = Dropdown::new(Vec::new());
        assert_eq!(dropdown.selected_value(), "all");
        assert_eq!(dropdown.render().options.len(), 0);
    }
}
