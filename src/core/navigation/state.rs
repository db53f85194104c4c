use std::fmt;

use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::navigation::command::NavigationCommand;
use crate::core::util::coordinate_mapping::viewport_bounds;

pub const DEFAULT_ITERATION_BUDGET: u32 = 10;

const PAN_STEP: f64 = 1.0;
const ZOOM_IN_PAN_FACTOR: f64 = 1.5;
// Not the inverse of ZOOM_IN_PAN_FACTOR: zooming in then out leaves pan at 1.125x.
const ZOOM_OUT_PAN_FACTOR: f64 = 0.75;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationState {
    pub zoom_level: i32,
    pub pan_x: f64,
    pub pan_y: f64,
    pub iteration_budget: u32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            zoom_level: 0,
            pan_x: 0.0,
            pan_y: 0.0,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zoom {} | pan ({:.3}, {:.3}) | iterations {}",
            self.zoom_level, self.pan_x, self.pan_y, self.iteration_budget
        )
    }
}

impl NavigationState {
    pub fn apply(&mut self, command: NavigationCommand) {
        match command {
            NavigationCommand::DoubleIterations => {
                self.iteration_budget = self.iteration_budget.saturating_mul(2);
            }
            NavigationCommand::HalveIterations => self.iteration_budget >>= 1,
            NavigationCommand::ResetIterations => {
                self.iteration_budget = DEFAULT_ITERATION_BUDGET;
            }
            NavigationCommand::PanLeft => self.pan_x -= PAN_STEP,
            NavigationCommand::PanRight => self.pan_x += PAN_STEP,
            NavigationCommand::PanUp => self.pan_y -= PAN_STEP,
            NavigationCommand::PanDown => self.pan_y += PAN_STEP,
            NavigationCommand::ZoomOut => {
                self.pan_x *= ZOOM_OUT_PAN_FACTOR;
                self.pan_y *= ZOOM_OUT_PAN_FACTOR;
                self.zoom_level = self.zoom_level.saturating_sub(1);
            }
            NavigationCommand::ZoomIn => {
                self.zoom_level = self.zoom_level.saturating_add(1);
                self.pan_x *= ZOOM_IN_PAN_FACTOR;
                self.pan_y *= ZOOM_IN_PAN_FACTOR;
            }
        }
    }

    /// Complex region shown by the main view.
    pub fn viewport(&self) -> Result<ComplexRect, ComplexRectError> {
        viewport_bounds(self.zoom_level, self.pan_x, self.pan_y)
    }
}
