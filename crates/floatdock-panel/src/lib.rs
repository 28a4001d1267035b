//! Interaction state machine for a floating, draggable, self-docking panel
//!
//! The panel can be dragged anywhere within its parent's bounds, snaps to
//! the nearest horizontal edge on release, collapses to an icon-only sliver
//! after a period of inactivity and slides off-edge ("docks"), and restores
//! to full size on tap.
//!
//! This crate owns only the state machine. Hosts deliver pointer events and
//! frame timestamps, report rendered sizes, and apply the [`HostCommand`]
//! stream the panel emits; building the visual tree, loading icons, and the
//! actual layout pass stay on the host side.
//!
//! Entry point: [`FloatPanel`].

mod command;
mod config;
mod dock;
mod fold;
mod gesture;
mod idle;
mod panel;
mod snap;

pub use command::*;
pub use config::*;
pub use dock::*;
pub use fold::*;
pub use gesture::*;
pub use idle::*;
pub use panel::*;
pub use snap::*;
