//! Adapter utilities for the `scrollkit` crate.
//!
//! The `scrollkit` crate is UI-agnostic and focuses on reconciliation and offset math. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A host driver that resolves the environment, applies snapshots and routes platform events
//! - An in-memory viewport with tween-driven animated offsets
//!
//! This crate is intentionally framework-agnostic (no UIKit/AppKit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod sim;
mod tween;

#[cfg(test)]
mod tests;

pub use host::ScrollHost;
pub use sim::SimulatedViewport;
pub use tween::{Easing, Tween};
