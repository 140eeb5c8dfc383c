//! Core engine for a drag-to-snap window assistant.
//!
//! While the user drags a window with a modifier held, the surrounding
//! application shows an overlay of named zones; releasing the drag over
//! a zone resizes the window to fill it. This crate is everything that
//! works without a display server: the zone/layout data model, the
//! pointer-to-layout coordinate math, hit testing, target-frame
//! calculation, layout persistence and the drag-session runtime. The
//! platform pieces (input hook, overlay window, accessibility calls)
//! plug in through the traits in [`runtime`].

pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod runtime;
pub mod store;

pub use engine::ZoneEngine;
pub use error::{Result, SnapError};
pub use geometry::{Point, Rect};
pub use layout::presets::{
    builtin_layouts, priority_grid, three_column, two_by_two, wide_center,
};
pub use layout::{MIN_ZONE_EXTENT, Zone, ZoneLayout};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, event_with_fields, json_kv,
};
pub use metrics::{MetricSnapshot, SessionMetrics};
pub use registry::LayoutRegistry;
pub use runtime::{
    DisplayInfo, DisplayInfoProvider, DragEvent, PlacementSink, RuntimeConfig, SnapRuntime,
    SnapUpdate,
};
pub use store::LayoutStore;
