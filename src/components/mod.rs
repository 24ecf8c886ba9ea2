//! DOM controllers, one per page feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module exposes an `init` that looks up its elements, registers its
//! named handlers once, and returns. Decisions are delegated to
//! `crate::util`; these modules only read geometry and flip markers.

pub mod animations;
pub mod contact_form;
pub mod footer;
pub mod keyboard;
pub mod navigation;
pub mod notification;
pub mod scroll_tracker;
pub mod theme_toggle;
pub mod typing;
