#![forbid(unsafe_code)]

//! Glyphshuffle public facade crate.
//!
//! Re-exports the engine surface from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use glyphshuffle::prelude::*;
//! use std::time::Duration;
//!
//! let mut engine = ShuffleEngine::new(GraphemeSplitter::new().split("HELLO"))
//!     .duration(Duration::from_millis(300));
//! let mut sink = NullSink;
//!
//! engine.trigger_named("fx3", &mut sink);
//! while engine.is_animating() {
//!     engine.advance(Duration::from_millis(16), &mut sink);
//! }
//! assert_eq!(engine.text(), "HELLO");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use glyphshuffle_core::{
    Cell, EffectKind, ElemId, Line, NullSink, RandomSource, RecordingSink, ScriptedRandom,
    ShuffleEngine, SplitChar, SplitLine, SplitText, SplitWord, StaggerOrder, StaggerSpec,
    StepTask, TextSplitter, TweenRequest, TweenSink, XorShift64, DEFAULT_DURATION,
    MAX_CELL_ITERATIONS, NO_PREVIOUS_CELL,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use glyphshuffle_runtime::{
    GraphemeSplitter, PageEvent, RecordingObserver, RegionId, ScrollObserver, ScrollRegion,
    ScrollSignal, TriggerBinder, TriggerConfig, TriggerKind, DEFAULT_LOAD_DELAY,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{EffectKind, NullSink, ShuffleEngine, TextSplitter, TweenSink};

    #[cfg(feature = "runtime")]
    pub use crate::{GraphemeSplitter, PageEvent, TriggerBinder, TriggerConfig, TriggerKind};
}
