//! Output surface toward the host layout system.

use smallvec::SmallVec;

/// Horizontal edge the panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Icon glyph shown in the icon bar, selected by the open/closed flag.
/// The host maps these to its own drawable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    /// Shown while the panel is closed; tapping expands.
    Expand,
    /// Shown while the panel is open; tapping collapses.
    Collapse,
}

/// A rendering or layout instruction emitted by the state machine.
///
/// The host applies these in order; the panel never renders anything itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Move the panel to an absolute position within the parent.
    SetPosition { x: f32, y: f32 },
    /// Set the panel container's explicit width (fold animation frames).
    SetWidth(f32),
    /// Fix the content region to an explicit width so the shrinking
    /// container clips it instead of compressing it.
    PinContentWidth(f32),
    /// Relax the content region back to size-to-content.
    ReleaseContentWidth,
    /// Persist the layout anchor on the given edge (exclusive).
    SetAnchor(Side),
    /// Swap the icon glyph.
    SetIcon(IconGlyph),
    /// Set the icon opacity (dimmed to 0.6 while docked).
    SetIconOpacity(f32),
    /// Claim exclusive gesture ownership; the host should suppress ancestor
    /// touch interception for the rest of the sequence.
    ClaimGesture,
}

/// Command buffer drained by the host once per frame. A frame emits only a
/// handful of commands, so they live inline.
pub type Commands = SmallVec<[HostCommand; 8]>;
