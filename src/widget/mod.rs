
use crate::config::WidgetConfig;
use crate::controls::{ControlsView, FilterControls, FilterKind, Handle};
use crate::error::LoadError;
#[cfg(not(target_arch = "wasm32"))]
use crate::feed::client::FeedClient;
use crate::feed::loader::load_units_from_str;
use crate::feed::models::Unit;
use crate::filter::engine::FilterEngine;
use crate::inquiry::csrf::CsrfCache;
use crate::inquiry::submission::{InquiryForm, InquiryOutcome};
use crate::view::detail::{
    floor_plan_action, row_action, DetailDialog, DetailState, FloorPlanAction, RowAction,
};
use crate::view::pagination::{PageControl, Paginator};
use crate::view::table::{results_summary, rows, ResultsSummary, TableBody};
use serde::Serialize;

/// Where the unit collection is in its load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(LoadError),
}

/// What the host must do after `initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Initialization {
    /// First initialization of this widget: wire up control handlers
    pub attach_listeners: bool,
    /// A feed fetch is needed for this building context
    pub fetch: bool,
}

/// Everything the page renders, in one serializable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub building: Option<String>,
    pub current_page: usize,
    pub table: TableBody,
    pub pagination: Vec<PageControl>,
    pub summary: ResultsSummary,
    pub controls: ControlsView,
    pub detail: DetailState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<FloorPlanAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leased_notice: Option<String>,
}

/// The availability widget: unit collection, filter controls, paging and the
/// open dialogs, owned in one place.
///
/// Every setter that changes the selection re-runs the filter over the whole
/// collection and returns to page 1. Paging only re-slices.
pub struct AvailabilityWidget {
    config: WidgetConfig,
    building: Option<String>,
    units: Vec<Unit>,
    load_state: LoadState,
    controls: FilterControls,
    // Positions into `units`, in collection order
    filtered: Vec<usize>,
    paginator: Paginator,
    detail: DetailDialog,
    floor_plan: Option<FloorPlanAction>,
    leased_notice: Option<String>,
    csrf: CsrfCache,
    listeners_attached: bool,
}

impl Default for AvailabilityWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl AvailabilityWidget {
    pub fn new(config: WidgetConfig) -> Self {
        let controls = FilterControls::new(&config);
        let paginator = Paginator::new(config.page_size);
        let building = config.building.clone();
        Self {
            config,
            building,
            units: Vec::new(),
            load_state: LoadState::Idle,
            controls,
            filtered: Vec::new(),
            paginator,
            detail: DetailDialog::new(),
            floor_plan: None,
            leased_notice: None,
            csrf: CsrfCache::new(),
            listeners_attached: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn detail(&self) -> &DetailDialog {
        &self.detail
    }

    /// Store the body of the CSRF token endpoint. Only the first usable token
    /// of a page load is kept.
    pub fn accept_csrf(&mut self, body: &str) -> bool {
        self.csrf.accept_body(body)
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Enter a building context. `None` falls back to the configured
    /// building, if any.
    ///
    /// Listeners are reported for attaching only on the first call. A fetch is
    /// requested unless the same building is already loaded or loading.
    pub fn initialize(&mut self, building: Option<&str>) -> Initialization {
        let building = building
            .map(str::to_string)
            .or_else(|| self.config.building.clone())
            .filter(|b| !b.is_empty());

        let same_context = building == self.building;
        let settled = matches!(self.load_state, LoadState::Loading | LoadState::Ready);
        let fetch = !(same_context && settled);

        self.building = building;
        if fetch {
            self.load_state = LoadState::Loading;
        }
        self.refilter();

        let attach_listeners = !self.listeners_attached;
        self.listeners_attached = true;

        log::debug!(
            "Initialized for building {:?} (fetch: {}, attach listeners: {})",
            self.building,
            fetch,
            attach_listeners
        );
        Initialization {
            attach_listeners,
            fetch,
        }
    }

    /// Back to the pre-load state: no units, default selection, dialogs
    /// closed. Attached listeners and the page's CSRF token survive.
    pub fn reset(&mut self) {
        self.building = self.config.building.clone();
        self.units.clear();
        self.filtered.clear();
        self.load_state = LoadState::Idle;
        self.controls.reset();
        self.paginator.reset();
        self.detail.close();
        self.floor_plan = None;
        self.leased_notice = None;
    }

    /// Replace the collection wholesale and re-filter.
    pub fn install_units(&mut self, units: Vec<Unit>) {
        let priced = units
            .iter()
            .any(|u| !u.is_hpd() && u.rent.amount().is_some_and(|a| a > 0.0));
        if priced {
            self.controls.price.reset();
        }

        self.units = units;
        self.load_state = LoadState::Ready;
        self.refilter();
    }

    /// Install a feed body. A malformed body leaves the previous collection
    /// in place and puts the table in its failed state.
    pub fn load_feed(&mut self, body: &str) -> Result<usize, LoadError> {
        match load_units_from_str(body) {
            Ok(units) => {
                let count = units.len();
                self.install_units(units);
                Ok(count)
            }
            Err(e) => {
                self.fail_load(e.clone());
                Err(e)
            }
        }
    }

    pub fn fail_load(&mut self, error: LoadError) {
        log::error!("Error fetching unit data: {}", error);
        self.load_state = LoadState::Failed(error);
    }

    /// Fetch through `client` and install the result.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn refresh(&mut self, client: &FeedClient) -> Result<usize, LoadError> {
        self.load_state = LoadState::Loading;
        match client.fetch_units().await {
            Ok(units) => {
                let count = units.len();
                self.install_units(units);
                Ok(count)
            }
            Err(e) => {
                self.fail_load(e.clone());
                Err(e)
            }
        }
    }

    fn refilter(&mut self) {
        let engine = FilterEngine::new(self.controls.criteria(self.building.as_deref()));
        self.filtered = engine.apply_indices(&self.units);
        self.paginator.reset();
        log::debug!(
            "Filtered {} of {} units",
            self.filtered.len(),
            self.units.len()
        );
    }

    pub fn filtered_units(&self) -> Vec<&Unit> {
        self.filtered.iter().map(|&idx| &self.units[idx]).collect()
    }

    pub fn toggle_dropdown(&mut self, kind: FilterKind) {
        self.controls.toggle_dropdown(kind);
    }

    pub fn close_dropdowns(&mut self) {
        self.controls.close_all();
    }

    /// Select a dropdown option by position.
    pub fn select_filter(&mut self, kind: FilterKind, index: usize) -> bool {
        let changed = self.controls.dropdown_mut(kind).select(index);
        if changed {
            self.refilter();
        }
        changed
    }

    /// Select a dropdown option by its value.
    pub fn select_filter_value(&mut self, kind: FilterKind, value: &str) -> bool {
        let changed = self.controls.dropdown_mut(kind).select_value(value);
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn set_price(&mut self, handle: Handle, value: u32) {
        self.controls.price.set(handle, value);
        self.refilter();
    }

    pub fn set_min_price(&mut self, value: u32) {
        self.set_price(Handle::Min, value);
    }

    pub fn set_max_price(&mut self, value: u32) {
        self.set_price(Handle::Max, value);
    }

    /// Every dropdown to its first option and the full price domain.
    pub fn clear_filters(&mut self) {
        self.controls.reset();
        self.refilter();
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to(page, self.filtered.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next(self.filtered.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous(self.filtered.len())
    }

    /// Units shown on the current page.
    pub fn page_units(&self) -> Vec<&Unit> {
        self.paginator
            .slice(&self.filtered)
            .iter()
            .map(|&idx| &self.units[idx])
            .collect()
    }

    fn page_unit(&self, position: usize) -> Option<&Unit> {
        let unit = self
            .paginator
            .slice(&self.filtered)
            .get(position)
            .map(|&idx| &self.units[idx]);
        if unit.is_none() {
            log::warn!(
                "No row {} on page {}",
                position,
                self.paginator.current_page()
            );
        }
        unit
    }

    pub fn table(&self) -> TableBody {
        match self.load_state {
            LoadState::Idle | LoadState::Loading => TableBody::loading(),
            LoadState::Failed(_) => TableBody::failed(),
            LoadState::Ready => rows(self.page_units()),
        }
    }

    /// Navigation controls, only once units are showing.
    pub fn pagination_controls(&self) -> Vec<PageControl> {
        match self.load_state {
            LoadState::Ready => self.paginator.controls(self.filtered.len()),
            _ => Vec::new(),
        }
    }

    pub fn results_summary(&self) -> ResultsSummary {
        results_summary(self.filtered.iter().map(|&idx| &self.units[idx]))
    }

    pub fn controls_view(&self) -> ControlsView {
        self.controls.render()
    }

    /// Row click. Leased rows raise the notice; others open the detail dialog
    /// from its form state. A missing row is logged and ignored.
    pub fn select_row(&mut self, position: usize) -> Option<RowAction> {
        let action = row_action(self.page_unit(position)?, &self.config.image_base);
        match &action {
            RowAction::LeasedNotice { unit_id } => {
                self.leased_notice = Some(unit_id.clone());
            }
            RowAction::OpenDetail { content } => {
                self.detail.open(content.clone());
            }
        }
        Some(action)
    }

    /// Floor-plan button of a row. Disabled (and ignored) for leased rows.
    pub fn view_floor_plan(&mut self, position: usize) -> Option<FloorPlanAction> {
        let action = floor_plan_action(self.page_unit(position)?, &self.config.image_base)?;
        self.floor_plan = Some(action.clone());
        Some(action)
    }

    pub fn close_floor_plan(&mut self) {
        self.floor_plan = None;
    }

    pub fn dismiss_leased_notice(&mut self) {
        self.leased_notice = None;
    }

    /// Inquiry form for the unit in the open detail dialog, carrying the
    /// page's CSRF token.
    pub fn inquiry_form(&self) -> Option<InquiryForm> {
        match self.detail.state() {
            DetailState::Open { content, .. } => {
                let mut form = InquiryForm::for_unit(&content.unit_id);
                form.csrf_token = self.csrf.field_value().to_string();
                Some(form)
            }
            DetailState::Closed => None,
        }
    }

    pub fn begin_submit(&mut self) -> bool {
        self.detail.begin_submit()
    }

    /// Apply the relay's response. Returns true when the page must reload.
    pub fn finish_submit(&mut self, status: u16, body: &str) -> bool {
        let outcome = InquiryOutcome::from_response(status, body);
        self.detail.finish_submit(&outcome)
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            building: self.building.clone(),
            current_page: self.paginator.current_page(),
            table: self.table(),
            pagination: self.pagination_controls(),
            summary: self.results_summary(),
            controls: self.controls_view(),
            detail: self.detail.state().clone(),
            floor_plan: self.floor_plan.clone(),
            leased_notice: self.leased_notice.clone(),
        }
    }
}
