#![forbid(unsafe_code)]

//! Runtime: trigger configuration, reference splitter, and event binding.

pub mod binder;
pub mod config;
pub mod scroll;
pub mod splitter;

pub use binder::{PageEvent, TriggerBinder};
pub use config::{TriggerConfig, TriggerKind, DEFAULT_LOAD_DELAY};
pub use scroll::{RecordingObserver, RegionId, ScrollObserver, ScrollRegion, ScrollSignal};
pub use splitter::GraphemeSplitter;
