//! # Shirube
//!
//! Step sequencing and overlay geometry for spotlight walkthroughs.
//!
//! ## Overview
//!
//! A walkthrough darkens the screen, cuts a circular spotlight around one
//! target at a time, places a description label on the roomier side of the
//! spotlight and draws an arrow from the label to the circle. Each tap moves
//! to the next target until the list runs out.
//!
//! `Shirube` computes all of that without touching a UI toolkit. The
//! [`WalkthroughSequencer`] pops items off a [`StepQueue`] and runs the
//! [`geometry`] engine for each one, emitting a [`WalkthroughEvent`] that a
//! [`renderer::WalkthroughRenderer`] turns into pixels.
//!
//! ## Usage
//!
//! ```rust
//! use shirube::{
//!     WalkthroughDataset, WalkthroughEvent, WalkthroughItem, WalkthroughSequencer,
//!     geometry::{Point, Rect, Size},
//!     measure::FixedAdvanceMeasurer,
//! };
//!
//! // 1. Describe the steps
//! let dataset = WalkthroughDataset::new(vec![
//!     WalkthroughItem::new(
//!         "Your balance",
//!         Rect::new(Point::new(24.0, 96.0), Size::new(120.0, 40.0)),
//!     ),
//!     WalkthroughItem::new(
//!         "Transfers live here",
//!         Rect::new(Point::new(200.0, 560.0), Size::new(80.0, 40.0)),
//!     ),
//! ]);
//!
//! // 2. Hand them to a sequencer
//! let mut sequencer = WalkthroughSequencer::new();
//! sequencer.initialize(dataset);
//!
//! // 3. Advance on every tap
//! let viewport = Rect::new(Point::zero(), Size::new(375.0, 667.0));
//! let measurer = FixedAdvanceMeasurer::default();
//! while let WalkthroughEvent::StepRendered(step) = sequencer.advance(&viewport, &measurer) {
//!     // draw the circle, label and arrow for this step
//!     assert!(step.artifacts.circle_rect.width() > 0.0);
//! }
//! assert!(sequencer.is_finished());
//! ```
//!
//! ## Features
//!
//! *   **Pure geometry**: every placement rule is a free function in [`geometry`].
//! *   **Real text metrics**: [`measure::FontMeasurer`] wraps text with `fontdb` and `fontdue`.
//! *   **Reference renderer**: [`renderer::CpuOverlayRenderer`] rasterizes a step into RGBA.

pub mod dataset;
pub mod error;
pub mod font_storage;
pub mod geometry;
pub mod measure;
pub mod renderer;
pub mod sequencer;
pub mod step_queue;

// common re-exports
pub use dataset::{FontDescriptor, FontFamily, LayoutConfig, WalkthroughDataset, WalkthroughItem};
pub use error::GeometryError;
pub use font_storage::FontStorage;
pub use sequencer::{
    SequencerState, StepRendered, ViewportProvider, WalkthroughEvent, WalkthroughSequencer,
};
pub use step_queue::StepQueue;

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use palette;
pub use parking_lot;
