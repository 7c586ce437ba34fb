//! Scroll-driven panel pager and circular carousel engines.
//!
//! Both engines are plain structs driven through input-port methods and a
//! frame `tick`; the host supplies geometry through [`PagerHost`] and
//! [`CarouselHost`] and renders the [`PagerView`] / [`CarouselView`] snapshots.

pub mod carousel;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod motion;
pub mod pager;

pub use carousel::{Carousel, CarouselPhase, CarouselView};
pub use config::{AppConfig, CarouselConfig, EasingType, MotionConfig, PagerConfig};
pub use error::{Error, Result};
pub use host::{CarouselHost, ItemExtent, PagerHost, Viewport};
pub use input::{FocusTarget, InputOutcome, Key, KeyPress, PointerTarget};
pub use pager::{Indicators, PagerPhase, PagerView, PanelPager};
