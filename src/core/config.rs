pub const DEFAULT_CANVAS_WIDTH: u32 = 500;
pub const DEFAULT_MINIMAP_SIZE: u32 = 100;
pub const DEFAULT_BORDER_THICKNESS: u32 = 5;
pub const DEFAULT_MINIMAP_ITERATIONS: u32 = 10;
const DEFAULT_TITLE: &str = "Mandelbrot Viewer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapConfig {
    /// Side of the overview in pixels. The border and highlight reach index `size`.
    pub size: u32,
    pub border_thickness: u32,
    /// Fixed budget, independent of the main view's iteration budget.
    pub max_iterations: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MINIMAP_SIZE,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            max_iterations: DEFAULT_MINIMAP_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Side of the square canvas in pixels.
    pub canvas_width: u32,
    pub title: String,
    pub minimap: MinimapConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            title: DEFAULT_TITLE.to_string(),
            minimap: MinimapConfig::default(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_canvas_width(mut self, canvas_width: u32) -> Self {
        self.canvas_width = canvas_width;
        self
    }
}
