use crate::feed::models::Unit;
use serde::Serialize;

pub const LOADING_MESSAGE: &str = "Loading units...";
pub const FAILED_MESSAGE: &str = "Failed to load data. Please refresh the page.";
pub const EMPTY_MESSAGE: &str = "No units match your criteria. Try adjusting your filters.";
pub const LEASED_LABEL: &str = "LEASED";

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TableBody {
    Loading { message: String },
    Failed { message: String },
    Empty { message: String },
    Rows { rows: Vec<RowView> },
}

impl TableBody {
    pub fn loading() -> Self {
        TableBody::Loading {
            message: LOADING_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        TableBody::Failed {
            message: FAILED_MESSAGE.to_string(),
        }
    }

    pub fn empty() -> Self {
        TableBody::Empty {
            message: EMPTY_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorPlanButton {
    pub label: String,
    pub enabled: bool,
}

/// One table row: id, bed/bath, outdoor, and rent (or "LEASED").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    /// Position within the current page, used to route row clicks back
    pub position: usize,
    pub id: String,
    pub bed_bath: String,
    pub outdoor: String,
    pub rent: String,
    pub leased: bool,
    pub floor_plan: FloorPlanButton,
}

pub fn row_view(position: usize, unit: &Unit) -> RowView {
    RowView {
        position,
        id: unit.id.clone(),
        bed_bath: unit.bed_bath.clone(),
        outdoor: unit.outdoor.clone(),
        rent: if unit.is_leased {
            LEASED_LABEL.to_string()
        } else {
            unit.formatted_rent.clone()
        },
        leased: unit.is_leased,
        floor_plan: FloorPlanButton {
            label: if unit.has_images() { "View" } else { "N/A" }.to_string(),
            enabled: !unit.is_leased,
        },
    }
}

pub fn rows<'u>(page: impl IntoIterator<Item = &'u Unit>) -> TableBody {
    let rows: Vec<RowView> = page
        .into_iter()
        .enumerate()
        .map(|(position, unit)| row_view(position, unit))
        .collect();
    if rows.is_empty() {
        TableBody::empty()
    } else {
        TableBody::Rows { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub total: usize,
    pub available: usize,
    pub text: String,
}

/// "Showing N units (M available)" over the filtered set.
pub fn results_summary<'u>(filtered: impl IntoIterator<Item = &'u Unit>) -> ResultsSummary {
    let (total, available) = filtered
        .into_iter()
        .fold((0, 0), |(total, available), unit| {
            (total + 1, available + usize::from(!unit.is_leased))
        });
    ResultsSummary {
        total,
        available,
        text: format!("Showing {} units ({} available)", total, available),
    }
}
