//! Drag-session runtime: feeds pointer events through the engine and
//! tells the caller what the overlay and window placement should do.
//!
//! The surrounding application owns the platform pieces (global input
//! hook, overlay window, accessibility calls) and injects them here as
//! trait objects or concrete types; the runtime holds no process-wide
//! state of its own.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::json;

use crate::engine::ZoneEngine;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::layout::ZoneLayout;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::SessionMetrics;
use crate::registry::LayoutRegistry;

/// Geometry of the display a drag is happening on, both rects in the
/// host's pointer coordinate system (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayInfo {
    /// Full display bounds.
    pub frame: Rect,
    /// Usable area excluding system chrome such as the menu bar.
    pub visible_frame: Rect,
}

/// Display-geometry collaborator. The runtime asks per event so a
/// resolution change between events is picked up immediately.
pub trait DisplayInfoProvider {
    fn display_info(&self) -> DisplayInfo;
}

/// Window-placement collaborator; receives the absolute target frame
/// (top-left origin) for the dragged window.
pub trait PlacementSink {
    fn place(&mut self, frame: Rect) -> Result<()>;
}

/// Pointer-drag events, in delivery order: one `Started`, zero or more
/// `Moved`, then exactly one of `Ended` or `Cancelled`. Pointer
/// positions are host-native (bottom-left origin, Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Started { pointer: Point },
    Moved { pointer: Point },
    Ended { pointer: Point },
    Cancelled,
}

/// What the external overlay should do after an event. `placed` carries
/// the frame that was handed to the placement sink, when one was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapUpdate {
    OverlayShown { active_zone: Option<usize> },
    ActiveZoneChanged { active_zone: Option<usize> },
    Unchanged,
    OverlayHidden { placed: Option<Rect> },
}

/// Configuration knobs for the drag-session runtime.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Optional structured logger used by the runtime.
    pub logger: Option<Logger>,
    /// Metrics accumulator used for periodic snapshots.
    pub metrics: Option<Arc<Mutex<SessionMetrics>>>,
    /// Interval between metrics snapshot emissions. Zero disables
    /// snapshots.
    pub metrics_interval: Duration,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            metrics_interval: Duration::from_secs(5),
            metrics_target: "zonesnap::runtime.metrics".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(SessionMetrics::new())));
        }
    }

    /// Disable metrics collection and prevent further snapshots.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<SessionMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Drives one snapping session: consumes [`DragEvent`]s, keeps the
/// active-zone state, and pushes the computed target frame to the
/// placement sink when a drag ends over a zone.
pub struct SnapRuntime<D, P> {
    engine: ZoneEngine,
    registry: LayoutRegistry,
    displays: D,
    placement: P,
    config: RuntimeConfig,
    dragging: bool,
    active_zone: Option<usize>,
    start_instant: Option<Instant>,
    last_metrics_emit: Option<Instant>,
}

impl<D, P> SnapRuntime<D, P>
where
    D: DisplayInfoProvider,
    P: PlacementSink,
{
    pub fn new(registry: LayoutRegistry, displays: D, placement: P) -> Self {
        Self {
            engine: ZoneEngine::new(),
            registry,
            displays,
            placement,
            config: RuntimeConfig::default(),
            dragging: false,
            active_zone: None,
            start_instant: None,
            last_metrics_emit: None,
        }
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn active_zone(&self) -> Option<usize> {
        self.active_zone
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Switch to the next layout in the registry. The active zone index
    /// refers to the old layout, so it is cleared; the next move event
    /// recomputes it.
    pub fn cycle_layout(&mut self) -> &ZoneLayout {
        let name = self.registry.cycle().name.clone();
        self.active_zone = None;
        self.log_runtime_event(
            LogLevel::Info,
            "layout_switched",
            [json_kv("layout", json!(name))],
        );
        self.registry.current_layout()
    }

    /// Replace the layout collection, e.g. after the store reloaded.
    pub fn reload_layouts(&mut self, layouts: Vec<ZoneLayout>) {
        let count = layouts.len();
        self.registry.reload(layouts);
        self.active_zone = None;
        self.log_runtime_event(
            LogLevel::Info,
            "layouts_reloaded",
            [
                json_kv("count", json!(count)),
                json_kv("current", json!(self.registry.current_name())),
            ],
        );
    }

    /// Process one drag event. Out-of-order events (a move without a
    /// start, a second start mid-drag) are absorbed without effect on
    /// placement.
    pub fn handle_event(&mut self, event: DragEvent) -> Result<SnapUpdate> {
        if self.start_instant.is_none() {
            let now = Instant::now();
            self.start_instant = Some(now);
            self.last_metrics_emit = Some(now);
        }

        let update = match event {
            DragEvent::Started { pointer } => {
                if self.dragging {
                    self.log_runtime_event(
                        LogLevel::Debug,
                        "drag_already_active",
                        std::iter::empty(),
                    );
                    self.track_drag(pointer)
                } else {
                    self.begin_drag(pointer)
                }
            }
            DragEvent::Moved { pointer } => self.track_drag(pointer),
            DragEvent::Ended { pointer } => self.end_drag(pointer)?,
            DragEvent::Cancelled => self.cancel_drag(),
        };

        self.maybe_emit_metrics();
        Ok(update)
    }

    /// Feed a prepared event sequence through the runtime, collecting
    /// the per-event updates. Used by tests and benches.
    pub fn run_scripted<I>(&mut self, events: I) -> Result<Vec<SnapUpdate>>
    where
        I: IntoIterator<Item = DragEvent>,
    {
        events
            .into_iter()
            .map(|event| self.handle_event(event))
            .collect()
    }

    fn hit(&self, pointer: Point) -> Option<usize> {
        let info = self.displays.display_info();
        let point = self.engine.normalized_layout_point(pointer, info.frame);
        self.engine
            .active_zone_index(point, self.registry.current_layout())
    }

    fn begin_drag(&mut self, pointer: Point) -> SnapUpdate {
        self.dragging = true;
        self.active_zone = self.hit(pointer);
        self.record_metric(SessionMetrics::record_drag);
        self.log_runtime_event(
            LogLevel::Info,
            "drag_started",
            [
                json_kv("layout", json!(self.registry.current_name())),
                json_kv("zone", json!(self.active_zone)),
            ],
        );
        SnapUpdate::OverlayShown {
            active_zone: self.active_zone,
        }
    }

    fn track_drag(&mut self, pointer: Point) -> SnapUpdate {
        if !self.dragging {
            self.log_runtime_event(LogLevel::Debug, "move_without_drag", std::iter::empty());
            return SnapUpdate::Unchanged;
        }

        self.record_metric(SessionMetrics::record_move);
        let hit = self.hit(pointer);
        if hit == self.active_zone {
            return SnapUpdate::Unchanged;
        }

        self.active_zone = hit;
        self.log_runtime_event(
            LogLevel::Debug,
            "active_zone_changed",
            [json_kv("zone", json!(hit))],
        );
        SnapUpdate::ActiveZoneChanged { active_zone: hit }
    }

    fn end_drag(&mut self, pointer: Point) -> Result<SnapUpdate> {
        if !self.dragging {
            self.log_runtime_event(LogLevel::Debug, "end_without_drag", std::iter::empty());
            return Ok(SnapUpdate::Unchanged);
        }

        let target = self.hit(pointer).and_then(|index| {
            let layout = self.registry.current_layout();
            layout
                .zones
                .get(index)
                .map(|zone| (index, zone.rect, layout.spacing))
        });

        // The drag is over regardless of how placement goes below.
        self.dragging = false;
        self.active_zone = None;

        let placed = match target {
            Some((index, zone_rect, spacing)) => {
                let info = self.displays.display_info();
                let frame =
                    self.engine
                        .target_frame(zone_rect, info.visible_frame, info.frame, spacing);
                self.placement.place(frame)?;
                self.record_metric(SessionMetrics::record_snap);
                self.log_runtime_event(
                    LogLevel::Info,
                    "window_snapped",
                    [
                        json_kv("zone", json!(index)),
                        json_kv("x", json!(frame.x)),
                        json_kv("y", json!(frame.y)),
                        json_kv("width", json!(frame.width)),
                        json_kv("height", json!(frame.height)),
                    ],
                );
                Some(frame)
            }
            None => {
                self.record_metric(SessionMetrics::record_miss);
                self.log_runtime_event(LogLevel::Info, "drag_missed", std::iter::empty());
                None
            }
        };

        Ok(SnapUpdate::OverlayHidden { placed })
    }

    fn cancel_drag(&mut self) -> SnapUpdate {
        if !self.dragging {
            self.log_runtime_event(LogLevel::Debug, "cancel_without_drag", std::iter::empty());
            return SnapUpdate::Unchanged;
        }

        self.dragging = false;
        self.active_zone = None;
        self.record_metric(SessionMetrics::record_cancel);
        self.log_runtime_event(LogLevel::Info, "drag_cancelled", std::iter::empty());
        SnapUpdate::OverlayHidden { placed: None }
    }

    fn record_metric(&self, record: impl FnOnce(&mut SessionMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut guard);
            }
        }
    }

    fn log_runtime_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, "zonesnap::runtime", message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn maybe_emit_metrics(&mut self) {
        if self.config.metrics.is_none() {
            return;
        }

        if self.config.metrics_interval == Duration::from_millis(0) {
            return;
        }

        let now = Instant::now();
        match self.last_metrics_emit {
            Some(last) if now.duration_since(last) < self.config.metrics_interval => {
                return;
            }
            _ => {
                self.last_metrics_emit = Some(now);
            }
        }

        let uptime = self
            .start_instant
            .map(|start| now.duration_since(start))
            .unwrap_or_default();

        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let target = self.config.metrics_target.as_str();
                let snapshot_event = guard.snapshot(uptime).to_log_event(target);
                let _ = logger.log_event(snapshot_event);
            }
        }
    }
}
