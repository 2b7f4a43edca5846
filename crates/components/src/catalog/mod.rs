//! The component manifest, grouped by surface.
//!
//! Keys are the tags templates mount; they are published API and must not
//! change when declarations move between modules. The grouping below
//! follows the workspace's surface layout, not the key prefixes.

pub mod actions;
pub mod drawers;
pub mod filters;
pub mod menus;
pub mod shell;
pub mod table;
pub mod uploads;
pub mod views;
