//! Animation primitives shared by the pager and the carousel
//!
//! Nothing in here knows about panels or cards: each primitive takes a target
//! and is advanced by the host's frame tick, so every animation is a sequence
//! of discrete `advance(now)` calls rather than a blocking wait.
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation math over host timestamps
//! - `guard` - One-shot completion guard with a safety deadline
//! - `debounce` - Trailing-edge debouncer for bursty input
//!
//! ## Molecular
//! - `tween` - Time-based value animation with single completion report
//! - `smoother` - Exponential chase toward a moving target
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use slidetrack_core::motion::{ScrollAnimation, TweenStep};
//! use slidetrack_core::EasingType;
//!
//! let mut anim = ScrollAnimation::new(0.0, 1000.0, now, Duration::from_millis(560), EasingType::CubicInOut);
//!
//! // Each frame:
//! match anim.advance(frame_time) {
//!     Some(TweenStep::Running(y)) => host.scroll_to(y),
//!     Some(TweenStep::Finished(y)) => { host.scroll_to(y); on_complete(); }
//!     None => {}
//! }
//! ```
//!
//! Timestamps are `Duration`s measured from an arbitrary host epoch, which
//! keeps every primitive deterministic under test.

// Atomic
pub mod debounce;
pub mod easing;
pub mod guard;
pub mod timing;

// Molecular
pub mod smoother;
pub mod tween;

pub use debounce::Debounce;
pub use easing::EasingTypeExt;
pub use guard::CompletionGuard;
pub use smoother::OffsetSmoother;
pub use tween::{ScrollAnimation, Tween, TweenStep};
