use crate::config::PriceConfig;
use crate::feed::models::format_whole_dollars;
use crate::filter::criteria::PriceWindow;
use serde::Serialize;

/// Which slider handle moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

/// Two linked handles over a fixed price domain.
///
/// Invariant: `floor <= min`, `max <= ceiling` and `max - min >= step`.
/// Moving one handle into the other pushes the other one instead of letting
/// them cross or touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange {
    floor: u32,
    ceiling: u32,
    step: u32,
    min: u32,
    max: u32,
}

/// Slider label text and its position along the track, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLabel {
    pub text: String,
    pub left_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLabels {
    pub min: PriceLabel,
    pub max: PriceLabel,
}

impl PriceRange {
    /// A config spanning less than one step (possible when it skipped
    /// validation) is widened to exactly one step, upward when there is room.
    pub fn new(config: PriceConfig) -> Self {
        let step = config.step.max(1);
        let ceiling = config.ceiling.max(config.floor.saturating_add(step));
        let floor = config.floor.min(ceiling - step);
        Self {
            floor,
            ceiling,
            step,
            min: floor,
            max: ceiling,
        }
    }

    /// Put both handles back at the ends of the domain.
    pub fn reset(&mut self) {
        self.min = self.floor;
        self.max = self.ceiling;
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn set(&mut self, handle: Handle, value: u32) {
        match handle {
            Handle::Min => self.set_min(value),
            Handle::Max => self.set_max(value),
        }
    }

    pub fn set_min(&mut self, value: u32) {
        let value = self.snap(value).min(self.ceiling - self.step);
        self.min = value;
        if self.max < value + self.step {
            self.max = value + self.step;
        }
    }

    pub fn set_max(&mut self, value: u32) {
        let value = self.snap(value).max(self.floor + self.step);
        self.max = value;
        if self.min + self.step > value {
            self.min = value - self.step;
        }
    }

    pub fn window(&self) -> PriceWindow {
        PriceWindow {
            min: self.min,
            max: self.max,
        }
    }

    pub fn labels(&self) -> PriceLabels {
        PriceLabels {
            min: self.label(self.min),
            max: self.label(self.max),
        }
    }

    fn label(&self, value: u32) -> PriceLabel {
        let span = (self.ceiling - self.floor) as f64;
        PriceLabel {
            text: format_whole_dollars(value),
            left_percent: (value - self.floor) as f64 / span * 100.0,
        }
    }

    // Clamp into the domain and round to the nearest step from the floor
    fn snap(&self, value: u32) -> u32 {
        if value <= self.floor {
            return self.floor;
        }
        if value >= self.ceiling {
            return self.ceiling;
        }
        let (floor, step) = (u64::from(self.floor), u64::from(self.step));
        let steps = (u64::from(value) - floor + step / 2) / step;
        (floor + steps * step).min(u64::from(self.ceiling)) as u32
    }
}
