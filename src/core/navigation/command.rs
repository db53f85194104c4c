/// A single discrete change to the navigation state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    DoubleIterations,
    HalveIterations,
    ResetIterations,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomOut,
    ZoomIn,
}
