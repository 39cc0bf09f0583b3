use crate::core::config::CogDisplayParams;
use crate::input::events::{ControlEvent, EventHandled};
use crate::style::document::StyleDocument;
use crate::style::dynamic::DynamicRasterController;
use crate::Result;
use log::debug;

/// Routes control events into the dynamic raster controller.
///
/// Malformed input (non-numeric or unordered rescale text, an empty colormap
/// selection) is reported as [`EventHandled::NotHandled`] and leaves the
/// document untouched; it is never an error.
pub struct ControlHandler {
    controller: DynamicRasterController,
}

impl ControlHandler {
    pub fn new(controller: DynamicRasterController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &DynamicRasterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DynamicRasterController {
        &mut self.controller
    }

    /// Applies one event to the document. Every structural mutation goes
    /// through the controller so the document stays self-consistent.
    pub fn handle(&mut self, doc: &mut StyleDocument, event: ControlEvent) -> Result<EventHandled> {
        match event {
            ControlEvent::VisibilityToggled { visible } => {
                self.controller.set_visible(doc, visible)?;
                Ok(EventHandled::Handled)
            }
            ControlEvent::OpacityChanged { opacity } => {
                self.controller.set_opacity(doc, opacity)?;
                Ok(EventHandled::Handled)
            }
            ControlEvent::ColormapSelected { colormap } => {
                if colormap.trim().is_empty() {
                    debug!("ignoring empty colormap selection");
                    return Ok(EventHandled::NotHandled);
                }
                let params =
                    CogDisplayParams::new(colormap, self.controller.params().rescale);
                self.controller.reconfigure(doc, params)?;
                Ok(EventHandled::Handled)
            }
            ControlEvent::RescaleEntered { text } => match text.parse() {
                Ok(rescale) => {
                    let colormap = self.controller.params().colormap.clone();
                    self.controller
                        .reconfigure(doc, CogDisplayParams::new(colormap, rescale))?;
                    Ok(EventHandled::Handled)
                }
                Err(_) => {
                    debug!("ignoring malformed rescale entry: {text:?}");
                    Ok(EventHandled::NotHandled)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{COG_LAYER_ID, COG_SOURCE_ID, COG_TILE_ENDPOINT, COG_URL};

    fn handler_with_layer() -> (StyleDocument, ControlHandler) {
        let mut doc = StyleDocument::new();
        let mut controller = DynamicRasterController::new(COG_TILE_ENDPOINT, COG_URL);
        controller.materialize(&mut doc).unwrap();
        (doc, ControlHandler::new(controller))
    }

    #[test]
    fn test_colormap_event_rebuilds_url() {
        let (mut doc, mut handler) = handler_with_layer();
        let handled = handler
            .handle(
                &mut doc,
                ControlEvent::ColormapSelected {
                    colormap: "magma".to_string(),
                },
            )
            .unwrap();
        assert_eq!(handled, EventHandled::Handled);
        let url = &doc.source(COG_SOURCE_ID).unwrap().url_template;
        assert!(url.contains("colormap_name=magma"));
    }

    #[test]
    fn test_rescale_event_rebuilds_url() {
        let (mut doc, mut handler) = handler_with_layer();
        handler
            .handle(
                &mut doc,
                ControlEvent::RescaleEntered {
                    text: "30,90".to_string(),
                },
            )
            .unwrap();
        let url = &doc.source(COG_SOURCE_ID).unwrap().url_template;
        assert!(url.contains("rescale=30%2C90"));
    }

    #[test]
    fn test_malformed_rescale_ignored() {
        let (mut doc, mut handler) = handler_with_layer();
        let before = doc.clone();
        for text in ["", "abc", "90,30", "1;2"] {
            let handled = handler
                .handle(
                    &mut doc,
                    ControlEvent::RescaleEntered {
                        text: text.to_string(),
                    },
                )
                .unwrap();
            assert_eq!(handled, EventHandled::NotHandled, "accepted {text:?}");
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_empty_colormap_ignored() {
        let (mut doc, mut handler) = handler_with_layer();
        let before = doc.clone();
        let handled = handler
            .handle(
                &mut doc,
                ControlEvent::ColormapSelected {
                    colormap: "  ".to_string(),
                },
            )
            .unwrap();
        assert_eq!(handled, EventHandled::NotHandled);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_paint_events_do_not_rebuild() {
        let (mut doc, mut handler) = handler_with_layer();
        let url_before = doc.source(COG_SOURCE_ID).unwrap().url_template.clone();

        handler
            .handle(&mut doc, ControlEvent::OpacityChanged { opacity: 0.33 })
            .unwrap();
        handler
            .handle(&mut doc, ControlEvent::VisibilityToggled { visible: false })
            .unwrap();

        let layer = doc.layer(COG_LAYER_ID).unwrap();
        assert_eq!(layer.paint.opacity, 0.33);
        assert!(!layer.paint.visible);
        assert_eq!(doc.source(COG_SOURCE_ID).unwrap().url_template, url_before);
    }
}
