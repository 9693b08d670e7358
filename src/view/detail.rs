use crate::feed::models::Unit;
use crate::inquiry::submission::InquiryOutcome;
use serde::Serialize;

pub const IMAGES_COMING_SOON: &str = "Unit images coming soon.";
pub const FLOOR_PLAN_UNAVAILABLE: &str =
    "Floor plan not yet available for this unit. Please contact us for more information.";

/// Path an image reference is served from: its file name under `image_base`.
pub fn image_path(image_base: &str, reference: &str) -> String {
    let filename = reference.rsplit('/').next().unwrap_or(reference);
    if image_base.is_empty() || image_base.ends_with('/') {
        format!("{}{}", image_base, filename)
    } else {
        format!("{}/{}", image_base, filename)
    }
}

/// One line of the detail list. Fallback facts carry a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl DetailItem {
    fn sentence(text: &str) -> Self {
        Self {
            label: None,
            text: text.to_string(),
        }
    }

    fn fact(label: &str, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.to_string()),
            text: text.into(),
        }
    }
}

/// Everything the detail dialog shows for one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailContent {
    pub title: String,
    /// Hidden form field consumed by the inquiry submission
    pub unit_id: String,
    pub items: Vec<DetailItem>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_note: Option<String>,
    pub thank_you_name: String,
}

impl DetailContent {
    pub fn for_unit(unit: &Unit, image_base: &str) -> Self {
        let sentences: Vec<DetailItem> = unit
            .description
            .iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| DetailItem::sentence(d))
            .collect();

        let items = if sentences.is_empty() {
            fallback_items(unit)
        } else {
            sentences
        };

        let images: Vec<String> = unit
            .images
            .iter()
            .map(|image| image_path(image_base, image))
            .collect();

        Self {
            title: format!("{} Details", unit.id),
            unit_id: unit.id.clone(),
            items,
            images_note: images
                .is_empty()
                .then(|| IMAGES_COMING_SOON.to_string()),
            images,
            thank_you_name: unit.id.clone(),
        }
    }
}

fn fallback_items(unit: &Unit) -> Vec<DetailItem> {
    let outdoor = if unit.outdoor.is_empty() {
        "None"
    } else {
        unit.outdoor.as_str()
    };

    let mut items = vec![
        DetailItem::fact("Building", unit.building.as_str()),
        DetailItem::fact("Unit Type", unit.bed_bath.as_str()),
        DetailItem::fact("Outdoor Space", outdoor),
        DetailItem::fact("Monthly Rent", unit.formatted_rent.as_str()),
    ];
    if let Some(sqft) = unit.sqft {
        items.push(DetailItem::fact("Square Footage", format!("{} sq ft", sqft)));
    }
    items
}

/// Result of clicking a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RowAction {
    /// Leased units only get a notice carrying the unit id
    LeasedNotice { unit_id: String },
    OpenDetail { content: DetailContent },
}

pub fn row_action(unit: &Unit, image_base: &str) -> RowAction {
    if unit.is_leased {
        RowAction::LeasedNotice {
            unit_id: unit.id.clone(),
        }
    } else {
        RowAction::OpenDetail {
            content: DetailContent::for_unit(unit, image_base),
        }
    }
}

/// Result of the row's floor-plan button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FloorPlanAction {
    Open { src: String },
    Unavailable { message: String },
}

/// `None` for leased rows, whose button is disabled.
pub fn floor_plan_action(unit: &Unit, image_base: &str) -> Option<FloorPlanAction> {
    if unit.is_leased {
        return None;
    }
    Some(match unit.images.first() {
        Some(first) => FloorPlanAction::Open {
            src: image_path(image_base, first),
        },
        None => FloorPlanAction::Unavailable {
            message: FLOOR_PLAN_UNAVAILABLE.to_string(),
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailPhase {
    Form,
    ThankYou,
}

/// Detail dialog lifecycle:
/// closed -> open(form) -> submitted: open(thank you) | error: open(form + error) -> closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    Closed,
    Open {
        content: DetailContent,
        phase: DetailPhase,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        /// Submit button disabled while a submission is in flight
        submitting: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailDialog {
    state: DetailState,
}

impl Default for DetailDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailDialog {
    pub fn new() -> Self {
        Self {
            state: DetailState::Closed,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open { .. })
    }

    pub fn phase(&self) -> Option<DetailPhase> {
        match &self.state {
            DetailState::Open { phase, .. } => Some(*phase),
            DetailState::Closed => None,
        }
    }

    /// Open for a unit. Always starts from the form, whatever the previous
    /// unit's dialog ended in.
    pub fn open(&mut self, content: DetailContent) {
        self.state = DetailState::Open {
            content,
            phase: DetailPhase::Form,
            error: None,
            submitting: false,
        };
    }

    /// Disable the submit button. Only the form phase submits.
    pub fn begin_submit(&mut self) -> bool {
        match &mut self.state {
            DetailState::Open {
                phase: DetailPhase::Form,
                submitting,
                ..
            } if !*submitting => {
                *submitting = true;
                true
            }
            _ => false,
        }
    }

    /// Apply a submission outcome. Every outcome re-enables the submit
    /// button. Returns true when the page must reload.
    pub fn finish_submit(&mut self, outcome: &InquiryOutcome) -> bool {
        let DetailState::Open {
            phase,
            error,
            submitting,
            ..
        } = &mut self.state
        else {
            log::warn!("Submission finished with the detail dialog closed");
            return matches!(outcome, InquiryOutcome::Reload);
        };

        *submitting = false;
        match outcome {
            InquiryOutcome::Success => {
                *phase = DetailPhase::ThankYou;
                *error = None;
                false
            }
            InquiryOutcome::Failed { message } => {
                *phase = DetailPhase::Form;
                *error = Some(message.clone());
                false
            }
            InquiryOutcome::Reload => true,
        }
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }
}
