//! A headless scroll-container reconciler with offset preservation and pull-to-refresh.
//!
//! For adapter-level utilities (a simulated viewport, tweens, a host driver), see the
//! `scrollkit-adapter` crate.
//!
//! This crate focuses on the logic that sits between a declarative description of a scroll
//! container and the live scroll view a platform provides: applying configuration snapshots with
//! minimal writes, keeping visible content stable when content size changes, and running a
//! refresh control that distinguishes user pulls from programmatic refreshes.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a [`Viewport`] implementation over its scroll view
//! - the ambient [`Environment`] of each update
//! - user gesture events (pull to refresh) and content mutations
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behavior;
mod config;
mod container;
mod edit;
mod environment;
mod geometry;
mod preserve;
mod refresh;
mod viewport;


pub use behavior::{OffsetBehavior, TouchCountBounds};
pub use config::{
    ActionCallback, ContentInsetAdjustment, ContentOffset, DecelerationRate, IndicatorInsets,
    IndicatorScheme, KeyboardDismissMode, OffsetBinding, OnOffsetChangeCallback, OnZoomCallback,
    RefreshConfig, ViewportConfiguration, ZoomScale,
};
pub use container::ScrollContainer;
pub use edit::{Activation, EditMode, EditPhase, EditableText, OnCommitCallback};
pub use environment::{Environment, IndicatorStyle, Platform};
pub use geometry::{
    Alignment, Axes, Axis, Color, EdgeInsets, HorizontalAlignment, Point, Size,
    VerticalAlignment,
};
pub use preserve::{
    ResizeTrigger, maintained_offset, with_preserved_offset, with_preserved_offset_across_resize,
};
pub use refresh::{RefreshControl, RefreshPhase};
pub use viewport::Viewport;
