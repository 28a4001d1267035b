//! The orchestrating panel state machine.

use floatdock_animation::{AnimationSpec, Easing, TimeNanos, Tween};
use floatdock_core::{clamp_axis, Density, Point, PointerEvent, PointerEventKind, Size};

use crate::command::{Commands, HostCommand, IconGlyph, Side};
use crate::config::{PanelConfig, DOCKED_ICON_OPACITY};
use crate::dock::{DockController, DockPhase};
use crate::fold::FoldController;
use crate::gesture::{Gesture, GestureTracker};
use crate::idle::IdleTimer;
use crate::snap::EdgeSnapEngine;

/// Panel geometry in pixels. Mutated only from the control loop, by drag
/// moves, the fold animation, and position animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub parent_width: f32,
    pub parent_height: f32,
    /// Edge margin in pixels.
    pub padding: f32,
}

impl PanelGeometry {
    /// Parent width with the edge margin folded in; the form all horizontal
    /// bounds and the midpoint test are computed against.
    pub fn usable_width(&self) -> f32 {
        self.parent_width - self.padding
    }

    pub fn usable_height(&self) -> f32 {
        self.parent_height - self.padding
    }
}

/// The four reachable open/docked combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMode {
    pub open: bool,
    pub docked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobKind {
    Snap,
    Dock,
    Undock,
}

/// The single in-flight horizontal position animation. Fold (width) and
/// position jobs are the only animations, and at most one of each exists.
#[derive(Debug)]
struct PositionJob {
    kind: JobKind,
    tween: Tween,
}

/// Interactive floating panel controller.
///
/// Wires pointer events to gesture tracking, drag clamping, edge snapping,
/// folding, and idle docking, and emits [`HostCommand`]s for the host to
/// render. Drive it with [`FloatPanel::handle_pointer`] for input and
/// [`FloatPanel::on_frame`] once per frame.
#[derive(Debug)]
pub struct FloatPanel {
    config: PanelConfig,
    padding_px: f32,
    icon_bar_px: f32,
    geometry: Option<PanelGeometry>,
    /// Rendered width of the content region, as last reported by the host.
    content_width: Option<f32>,
    docked: bool,
    gesture: GestureTracker,
    idle: IdleTimer,
    fold: FoldController,
    dock: DockController,
    snap: EdgeSnapEngine,
    position_job: Option<PositionJob>,
    commands: Commands,
}

impl FloatPanel {
    pub fn new(config: PanelConfig, density: Density) -> Self {
        Self {
            padding_px: density.dip_to_px(config.edge_padding),
            icon_bar_px: density.dip_to_px(config.icon_bar_width),
            geometry: None,
            content_width: None,
            docked: false,
            gesture: GestureTracker::new(density.dip_to_px(config.click_distance)),
            idle: IdleTimer::new(config.idle_threshold_secs),
            fold: FoldController::new(config.fold_duration_millis),
            dock: DockController::new(),
            snap: EdgeSnapEngine::new(Side::Right),
            position_job: None,
            commands: Commands::new(),
            config,
        }
    }

    /// The host attached the panel to a parent container. Geometry becomes
    /// known and the inactivity countdown starts.
    pub fn attach(&mut self, parent: Size, panel: Size, origin: Point, now: TimeNanos) {
        self.geometry = Some(PanelGeometry {
            x: origin.x,
            y: origin.y,
            width: panel.width,
            height: panel.height,
            parent_width: parent.width,
            parent_height: parent.height,
            padding: self.padding_px,
        });
        // The panel starts open, showing the collapse glyph.
        self.commands.push(HostCommand::SetIcon(IconGlyph::Collapse));
        self.idle.restart(now);
    }

    /// Host report of the content region's rendered width.
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = Some(width);
    }

    /// Host report of a parent resize.
    pub fn set_parent_size(&mut self, parent: Size) {
        match self.geometry.as_mut() {
            Some(geometry) => {
                geometry.parent_width = parent.width;
                geometry.parent_height = parent.height;
            }
            None => log::warn!("parent size reported before attach; ignored"),
        }
    }

    /// Host report of a panel resize outside the fold animation.
    pub fn set_panel_size(&mut self, panel: Size) {
        match self.geometry.as_mut() {
            Some(geometry) => {
                geometry.width = panel.width;
                geometry.height = panel.height;
            }
            None => log::warn!("panel size reported before attach; ignored"),
        }
    }

    pub fn geometry(&self) -> Option<PanelGeometry> {
        self.geometry
    }

    pub fn mode(&self) -> PanelMode {
        PanelMode {
            open: self.fold.is_open(),
            docked: self.docked,
        }
    }

    pub fn side(&self) -> Side {
        self.snap.side()
    }

    pub fn dock_phase(&self) -> DockPhase {
        self.dock.phase()
    }

    pub fn is_folding(&self) -> bool {
        self.fold.is_folding()
    }

    /// Commands emitted since the last drain, in order.
    pub fn drain_commands(&mut self) -> Commands {
        std::mem::take(&mut self.commands)
    }

    /// Feed one touch event. Returns whether the panel owns the gesture;
    /// a sequence arriving while the fold animation runs is rejected
    /// entirely.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: TimeNanos) -> bool {
        if self.fold.is_folding() {
            // Width and position must never animate from user input at the
            // same time, so the panel does not intercept touches while
            // folding.
            return false;
        }

        match event.kind {
            PointerEventKind::Down => {
                // The press cancels any pending countdown before any move
                // is processed.
                self.idle.cancel();
                if self.geometry.is_none() {
                    log::warn!("pointer down before attach; sequence ignored");
                    return false;
                }
                self.gesture.press(event.global);
                self.commands.push(HostCommand::ClaimGesture);
                true
            }
            PointerEventKind::Move => {
                let Some(delta) = self.gesture.movement(event.global) else {
                    return self.gesture.is_tracking();
                };
                let Some(geometry) = self.geometry.as_mut() else {
                    return false;
                };
                // A live drag supersedes any in-flight position animation.
                self.position_job = None;
                geometry.x = clamp_axis(
                    geometry.x + delta.0,
                    geometry.width,
                    geometry.usable_width(),
                    geometry.padding,
                );
                geometry.y = clamp_axis(
                    geometry.y + delta.1,
                    geometry.height,
                    geometry.usable_height(),
                    geometry.padding,
                );
                self.commands.push(HostCommand::SetPosition {
                    x: geometry.x,
                    y: geometry.y,
                });
                true
            }
            PointerEventKind::Up => {
                let Some(gesture) = self.gesture.release() else {
                    return false;
                };
                match gesture {
                    Gesture::Tap => self.on_tap(now),
                    Gesture::Drag => self.on_drag_release(event.global.x, now),
                }
                true
            }
        }
    }

    /// Step all time-driven work: the scheduled dock slide, the fold job,
    /// the position job, and the inactivity countdown.
    pub fn on_frame(&mut self, now: TimeNanos) {
        if let Some(frame) = self.fold.on_frame(now, &mut self.commands) {
            if let Some(geometry) = self.geometry.as_mut() {
                geometry.width = frame.width;
            }
            if frame.completed.is_some() && self.dock.phase() == DockPhase::Idle {
                // A user-initiated fold settled; the docking sequence
                // restarts the countdown only at its own terminal state.
                self.idle.restart(now);
            }
        }

        // The fold's fixed duration has elapsed; time to slide. Checked
        // after the fold step so the slide sees the collapsed width.
        if self.dock.take_due_slide(now) {
            self.start_dock_slide(now);
        }

        self.step_position_job(now);

        if self.idle.poll(now) {
            self.on_idle(now);
        }
    }

    fn on_tap(&mut self, now: TimeNanos) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        if self.docked {
            // Slide back out of the dock first; the expand fold runs from
            // the slide's completion handler.
            let delta = self.snap.undock_delta(geometry.padding);
            let spec = AnimationSpec::tween(self.config.dock_duration_millis, Easing::Decelerate);
            self.position_job = Some(PositionJob {
                kind: JobKind::Undock,
                tween: Tween::new(geometry.x, geometry.x + delta, spec).start_at(now),
            });
        } else {
            let content = self.content_width_px(geometry);
            self.fold
                .toggle(now, geometry.width, content, &mut self.commands);
            // The countdown restarts when the fold settles, not here.
        }
    }

    fn on_drag_release(&mut self, release_x: f32, now: TimeNanos) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        let side = self.snap.choose_side(release_x, geometry.usable_width());
        let target = self
            .snap
            .rest_x(geometry.usable_width(), geometry.width, geometry.padding);
        let spec = AnimationSpec::tween(self.config.snap_duration_millis, Easing::Decelerate);
        self.position_job = Some(PositionJob {
            kind: JobKind::Snap,
            tween: Tween::new(geometry.x, target, spec).start_at(now),
        });
        log::debug!("drag release at x={}: snapping {:?}", release_x, side);
        // Dragging counts as activity; the countdown restarts immediately
        // and runs while the snap animates.
        self.idle.restart(now);
    }

    fn on_idle(&mut self, now: TimeNanos) {
        let Some(geometry) = self.geometry.as_ref().copied() else {
            return;
        };
        if self.docked {
            return;
        }
        let open = self.fold.is_open();
        if open {
            let content = self.content_width_px(&geometry);
            if !self
                .fold
                .toggle(now, geometry.width, content, &mut self.commands)
            {
                return;
            }
        }
        if self
            .dock
            .on_idle(open, now, self.config.fold_duration_millis)
        {
            self.start_dock_slide(now);
        }
    }

    fn start_dock_slide(&mut self, now: TimeNanos) {
        let Some(geometry) = self.geometry.as_ref() else {
            self.dock.reset();
            return;
        };
        // Geometry carries the parent width as last reported, so the slide
        // target reflects any resize since the sequence began.
        let target = self
            .snap
            .docked_x(geometry.usable_width(), geometry.width, geometry.padding);
        let spec = AnimationSpec::tween(self.config.dock_duration_millis, Easing::Decelerate);
        self.position_job = Some(PositionJob {
            kind: JobKind::Dock,
            tween: Tween::new(geometry.x, target, spec).start_at(now),
        });
        log::debug!("dock slide toward {:?} edge, target x={}", self.snap.side(), target);
    }

    fn step_position_job(&mut self, now: TimeNanos) {
        let (kind, finished) = {
            let Some(job) = self.position_job.as_mut() else {
                return;
            };
            let Some(geometry) = self.geometry.as_mut() else {
                return;
            };
            geometry.x = job.tween.sample(now);
            self.commands.push(HostCommand::SetPosition {
                x: geometry.x,
                y: geometry.y,
            });
            (job.kind, job.tween.is_finished(now))
        };
        if !finished {
            return;
        }
        self.position_job = None;

        match kind {
            JobKind::Snap => {
                // A drag release always re-anchors and undocks.
                self.commands.push(HostCommand::SetAnchor(self.snap.side()));
                self.set_docked(false);
                self.dock.reset();
            }
            JobKind::Dock => {
                self.set_docked(true);
                self.dock.finish_slide();
            }
            JobKind::Undock => {
                self.set_docked(false);
                self.dock.reset();
                if let Some(geometry) = self.geometry.as_ref().copied() {
                    let content = self.content_width_px(&geometry);
                    self.fold
                        .toggle(now, geometry.width, content, &mut self.commands);
                }
            }
        }
    }

    /// Flip the docked flag together with its icon-opacity side effect.
    fn set_docked(&mut self, docked: bool) {
        self.docked = docked;
        self.commands.push(HostCommand::SetIconOpacity(if docked {
            DOCKED_ICON_OPACITY
        } else {
            1.0
        }));
    }

    /// Content width as last reported, falling back to everything left of
    /// the icon bar.
    fn content_width_px(&self, geometry: &PanelGeometry) -> f32 {
        self.content_width
            .unwrap_or(geometry.width - self.icon_bar_px)
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
