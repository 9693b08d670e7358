// WebAssembly bindings for the availability widget.
// The page fetches the feed and the relays itself; this side owns the state
// and returns plain JS objects to render.
use crate::config::WidgetConfig;
use crate::controls::{FilterKind, Handle};
use crate::error::LoadError;
use crate::widget::AvailabilityWidget;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))?;
    js_sys::JSON::parse(&json)
}

fn filter_kind(name: &str) -> Result<FilterKind, JsValue> {
    name.parse::<FilterKind>()
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub struct AvailabilityWasm {
    widget: AvailabilityWidget,
}

impl Default for AvailabilityWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl AvailabilityWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            widget: AvailabilityWidget::default(),
        }
    }

    /// Build the widget from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<AvailabilityWasm, JsValue> {
        let config = WidgetConfig::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            widget: AvailabilityWidget::new(config),
        })
    }

    /// Feed URL the page should fetch
    #[wasm_bindgen]
    pub fn feed_url(&self) -> String {
        self.widget.config().feed_url.clone()
    }

    /// Returns `{attach_listeners, fetch}`
    #[wasm_bindgen]
    pub fn initialize(&mut self, building: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&self.widget.initialize(building.as_deref()))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.widget.reset();
    }

    /// Install a fetched feed body. Returns the unit count.
    #[wasm_bindgen]
    pub fn load_units(&mut self, body: &str) -> Result<usize, JsValue> {
        self.widget
            .load_feed(body)
            .map_err(|e| JsValue::from_str(&format!("Failed to load units: {}", e)))
    }

    /// Record a failed fetch (network error or HTTP status)
    #[wasm_bindgen]
    pub fn fail_load(&mut self, status: Option<u16>, message: Option<String>) {
        let error = match status {
            Some(status) => LoadError::Status(status),
            None => LoadError::Fetch(message.unwrap_or_default()),
        };
        self.widget.fail_load(error);
    }

    #[wasm_bindgen]
    pub fn toggle_dropdown(&mut self, filter: &str) -> Result<(), JsValue> {
        self.widget.toggle_dropdown(filter_kind(filter)?);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn close_dropdowns(&mut self) {
        self.widget.close_dropdowns();
    }

    #[wasm_bindgen]
    pub fn select_filter(&mut self, filter: &str, index: usize) -> Result<bool, JsValue> {
        Ok(self.widget.select_filter(filter_kind(filter)?, index))
    }

    #[wasm_bindgen]
    pub fn set_min_price(&mut self, value: u32) {
        self.widget.set_price(Handle::Min, value);
    }

    #[wasm_bindgen]
    pub fn set_max_price(&mut self, value: u32) {
        self.widget.set_price(Handle::Max, value);
    }

    #[wasm_bindgen]
    pub fn clear_filters(&mut self) {
        self.widget.clear_filters();
    }

    #[wasm_bindgen]
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.widget.go_to_page(page)
    }

    /// Row click. Returns the action taken, or null for a missing row.
    #[wasm_bindgen]
    pub fn select_row(&mut self, position: usize) -> Result<JsValue, JsValue> {
        match self.widget.select_row(position) {
            Some(action) => to_js(&action),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn view_floor_plan(&mut self, position: usize) -> Result<JsValue, JsValue> {
        match self.widget.view_floor_plan(position) {
            Some(action) => to_js(&action),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn close_floor_plan(&mut self) {
        self.widget.close_floor_plan();
    }

    #[wasm_bindgen]
    pub fn dismiss_leased_notice(&mut self) {
        self.widget.dismiss_leased_notice();
    }

    /// Store the body of the CSRF token endpoint
    #[wasm_bindgen]
    pub fn accept_csrf(&mut self, body: &str) -> bool {
        self.widget.accept_csrf(body)
    }

    /// Fields for the open detail dialog's inquiry, or null
    #[wasm_bindgen]
    pub fn inquiry_form(&self) -> Result<JsValue, JsValue> {
        match self.widget.inquiry_form() {
            Some(form) => to_js(&form),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn begin_submit(&mut self) -> bool {
        self.widget.begin_submit()
    }

    /// Returns true when the page must reload
    #[wasm_bindgen]
    pub fn finish_submit(&mut self, status: u16, body: &str) -> bool {
        self.widget.finish_submit(status, body)
    }

    #[wasm_bindgen]
    pub fn close_detail(&mut self) {
        self.widget.close_detail();
    }

    /// Full render snapshot: table, pagination, summary, controls, dialogs
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.widget.view())
    }

    #[wasm_bindgen]
    pub fn table(&self) -> Result<JsValue, JsValue> {
        to_js(&self.widget.table())
    }

    #[wasm_bindgen]
    pub fn pagination(&self) -> Result<JsValue, JsValue> {
        to_js(&self.widget.pagination_controls())
    }

    #[wasm_bindgen]
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        to_js(&self.widget.controls_view())
    }
}
