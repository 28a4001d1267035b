//! Open/closed width animation.

use floatdock_animation::{AnimationSpec, Easing, TimeNanos, Tween};

use crate::command::{Commands, HostCommand, IconGlyph};

/// Outcome of stepping the fold animation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldFrame {
    /// Width sampled this frame; the host has already been told via
    /// [`HostCommand::SetWidth`].
    pub width: f32,
    /// The new open state when the job completed this frame.
    pub completed: Option<bool>,
}

/// Animates the panel container's width between its open and closed
/// extents, flipping the open flag on completion.
///
/// At most one fold job runs at a time; a re-trigger while one is in
/// flight is dropped silently.
#[derive(Debug)]
pub struct FoldController {
    open: bool,
    job: Option<Tween>,
    spec: AnimationSpec,
}

impl FoldController {
    pub fn new(duration_millis: u64) -> Self {
        Self {
            open: true,
            job: None,
            spec: AnimationSpec::tween(duration_millis, Easing::FastOutSlowIn),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a width animation is in flight. While true, the panel
    /// rejects incoming touch sequences.
    pub fn is_folding(&self) -> bool {
        self.job.is_some()
    }

    /// Start collapsing (when open) or expanding (when closed).
    ///
    /// Pins the content region to its current rendered width first, so the
    /// shrinking container clips the content instead of reflowing it.
    /// Returns false without side effects if a job is already running.
    pub fn toggle(
        &mut self,
        now: TimeNanos,
        panel_width: f32,
        content_width: f32,
        out: &mut Commands,
    ) -> bool {
        if self.job.is_some() {
            log::trace!("fold re-trigger while running; dropped");
            return false;
        }
        out.push(HostCommand::PinContentWidth(content_width));
        let end = if self.open {
            panel_width - content_width
        } else {
            panel_width + content_width
        };
        self.job = Some(Tween::new(panel_width, end, self.spec).start_at(now));
        log::debug!(
            "fold {}: width {} -> {}",
            if self.open { "collapse" } else { "expand" },
            panel_width,
            end
        );
        true
    }

    /// Step the running job, emitting a width frame. On completion the open
    /// flag flips, the icon glyph swaps, and — when the new state is Open —
    /// the content width constraint relaxes back to size-to-content. While
    /// closed the content stays pinned to avoid flicker.
    pub fn on_frame(&mut self, now: TimeNanos, out: &mut Commands) -> Option<FoldFrame> {
        let job = self.job.as_mut()?;
        let width = job.sample(now);
        out.push(HostCommand::SetWidth(width));

        if !job.is_finished(now) {
            return Some(FoldFrame {
                width,
                completed: None,
            });
        }

        self.job = None;
        self.open = !self.open;
        out.push(HostCommand::SetIcon(if self.open {
            IconGlyph::Collapse
        } else {
            IconGlyph::Expand
        }));
        if self.open {
            out.push(HostCommand::ReleaseContentWidth);
        }
        Some(FoldFrame {
            width,
            completed: Some(self.open),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn collapse_animates_down_to_icon_width_and_flips() {
        let mut fold = FoldController::new(300);
        let mut out = Commands::new();
        assert!(fold.toggle(0, 150.0, 104.0, &mut out));
        assert_eq!(out.as_slice(), &[HostCommand::PinContentWidth(104.0)]);
        assert!(fold.is_folding());
        assert!(fold.is_open());

        out.clear();
        let frame = fold.on_frame(150 * MS, &mut out).unwrap();
        assert!(frame.completed.is_none());
        assert!(frame.width < 150.0 && frame.width > 46.0);

        out.clear();
        let frame = fold.on_frame(300 * MS, &mut out).unwrap();
        assert_eq!(frame.width, 46.0);
        assert_eq!(frame.completed, Some(false));
        assert!(!fold.is_open());
        // Closed: icon swaps to Expand, content stays pinned.
        assert_eq!(
            out.as_slice(),
            &[
                HostCommand::SetWidth(46.0),
                HostCommand::SetIcon(IconGlyph::Expand),
            ]
        );
    }

    #[test]
    fn expand_relaxes_content_width_on_completion() {
        let mut fold = FoldController::new(300);
        let mut out = Commands::new();
        fold.toggle(0, 150.0, 104.0, &mut out);
        fold.on_frame(300 * MS, &mut out);

        out.clear();
        assert!(fold.toggle(400 * MS, 46.0, 104.0, &mut out));
        let frame = fold.on_frame(700 * MS, &mut out).unwrap();
        assert_eq!(frame.width, 150.0);
        assert_eq!(frame.completed, Some(true));
        assert!(out.contains(&HostCommand::ReleaseContentWidth));
        assert!(out.contains(&HostCommand::SetIcon(IconGlyph::Collapse)));
    }

    #[test]
    fn retrigger_while_running_is_dropped() {
        let mut fold = FoldController::new(300);
        let mut out = Commands::new();
        assert!(fold.toggle(0, 150.0, 104.0, &mut out));
        out.clear();
        assert!(!fold.toggle(10 * MS, 150.0, 104.0, &mut out));
        assert!(out.is_empty());
        // Still the original collapse job.
        let frame = fold.on_frame(300 * MS, &mut out).unwrap();
        assert_eq!(frame.completed, Some(false));
    }

    #[test]
    fn idle_controller_emits_no_frames() {
        let mut fold = FoldController::new(300);
        let mut out = Commands::new();
        assert!(fold.on_frame(0, &mut out).is_none());
        assert!(out.is_empty());
    }
}
