//! Helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here except `dom` and the browser store is pure and tested
//! natively. Components in `crate::components` call into these modules to
//! decide what to do, then perform the DOM mutation themselves.

pub mod animation_plan;
pub mod contact;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod keys;
pub mod notice;
pub mod preference;
pub mod scroll;
pub mod theme;
pub mod typing;
