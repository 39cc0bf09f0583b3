//! Integration tests simulating real control-surface sessions: a composed
//! map whose dynamic raster layer is toggled, restyled, and rebuilt while
//! the style document must stay self-consistent after every single mutation.

use reliefmap::core::constants::{
    COG_LAYER_ID, COG_SOURCE_ID, COG_TILE_ENDPOINT, COG_URL, ELEVATION_LAYER_ID,
};
use reliefmap::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session() -> (StyleDocument, ControlHandler) {
    init_logging();
    let composer = StyleComposer::new();
    let mut controller = DynamicRasterController::new(COG_TILE_ENDPOINT, COG_URL)
        .with_bounds(composer.aoi().clone());
    let init = composer.compose(&mut controller).unwrap();
    (init.style, ControlHandler::new(controller))
}

#[test]
fn no_dangling_references_across_event_sequence() {
    let (mut doc, mut handler) = session();

    let events = vec![
        ControlEvent::VisibilityToggled { visible: true },
        ControlEvent::OpacityChanged { opacity: 0.75 },
        ControlEvent::ColormapSelected {
            colormap: "viridis".to_string(),
        },
        ControlEvent::RescaleEntered {
            text: "30,90".to_string(),
        },
        ControlEvent::RescaleEntered {
            text: "not numbers".to_string(),
        },
        ControlEvent::ColormapSelected {
            colormap: "magma".to_string(),
        },
        ControlEvent::VisibilityToggled { visible: false },
        ControlEvent::OpacityChanged { opacity: 0.1 },
        ControlEvent::RescaleEntered {
            text: "0,500".to_string(),
        },
    ];

    for event in events {
        handler.handle(&mut doc, event).unwrap();
        // The invariant must hold after every observable mutation.
        doc.validate().unwrap();
    }

    assert!(doc.has_layer(COG_LAYER_ID));
    assert!(doc.has_source(COG_SOURCE_ID));
}

#[test]
fn visibility_requested_while_absent_applies_on_materialization() {
    let (mut doc, mut handler) = session();

    handler.controller_mut().remove(&mut doc).unwrap();
    assert!(!doc.has_layer(COG_LAYER_ID));
    doc.validate().unwrap();

    // Toggle while torn down, then trigger materialization via a rescale.
    handler
        .handle(&mut doc, ControlEvent::VisibilityToggled { visible: false })
        .unwrap();
    handler
        .handle(
            &mut doc,
            ControlEvent::RescaleEntered {
                text: "50,400".to_string(),
            },
        )
        .unwrap();

    let paint = doc.layer(COG_LAYER_ID).unwrap().paint;
    assert!(!paint.visible, "remembered visibility must win over defaults");
}

#[test]
fn repeated_identical_reconfigure_is_structurally_stable() {
    let (mut doc_once, mut handler_once) = session();
    let (mut doc_twice, mut handler_twice) = session();

    let event = ControlEvent::ColormapSelected {
        colormap: "viridis".to_string(),
    };
    handler_once.handle(&mut doc_once, event.clone()).unwrap();
    handler_twice.handle(&mut doc_twice, event.clone()).unwrap();
    handler_twice.handle(&mut doc_twice, event).unwrap();

    let once = serde_json::to_value(&doc_once).unwrap();
    let twice = serde_json::to_value(&doc_twice).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn rebuild_preserves_z_order_below_anchor() {
    let (mut doc, mut handler) = session();

    for colormap in ["viridis", "magma", "inferno", "cividis"] {
        handler
            .handle(
                &mut doc,
                ControlEvent::ColormapSelected {
                    colormap: colormap.to_string(),
                },
            )
            .unwrap();
        let ids = doc.layer_ids();
        let cog = ids.iter().position(|id| *id == COG_LAYER_ID).unwrap();
        let anchor = ids.iter().position(|id| *id == ELEVATION_LAYER_ID).unwrap();
        assert_eq!(cog + 1, anchor, "dynamic layer must sit directly below the overlay");
    }
}

#[test]
fn initial_view_always_inside_aoi() {
    init_logging();
    let composer = StyleComposer::new();
    let mut controller = DynamicRasterController::new(COG_TILE_ENDPOINT, COG_URL);
    let init = composer.compose(&mut controller).unwrap();
    assert!(init.max_bounds.contains(&init.center));
}

#[test]
fn document_snapshot_round_trips() {
    let (doc, _) = session();
    let json = doc.to_json().unwrap();
    let restored: StyleDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
    restored.validate().unwrap();
}
