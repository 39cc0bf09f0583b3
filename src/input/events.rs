use serde::{Deserialize, Serialize};

/// Control-surface events driving the dynamic raster layer. The hosting
/// environment delivers these one at a time; each one maps to exactly one
/// synchronous reconfiguration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Visibility checkbox toggled.
    VisibilityToggled { visible: bool },
    /// Opacity slider input, 0 to 1 (displayed to two decimal places).
    OpacityChanged { opacity: f64 },
    /// Colormap selector changed.
    ColormapSelected { colormap: String },
    /// Rescale text entry confirmed (apply button or Enter), in `"min,max"`
    /// form.
    RescaleEntered { text: String },
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}
