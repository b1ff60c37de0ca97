#![forbid(unsafe_code)]

//! Core: cell model, scheduling, and the scramble/resolve state machine.

pub mod cell;
pub mod effect;
pub mod engine;
pub mod glyphs;
pub mod rng;
pub mod scheduler;
pub mod split;
pub mod tween;

pub use cell::{Cell, ElemId, Line, NO_PREVIOUS_CELL};
pub use effect::{EffectKind, StepTask, MAX_CELL_ITERATIONS};
pub use engine::{ShuffleEngine, DEFAULT_DURATION};
pub use rng::{RandomSource, ScriptedRandom, XorShift64};
pub use split::{SplitChar, SplitLine, SplitText, SplitWord, TextSplitter};
pub use tween::{NullSink, RecordingSink, StaggerOrder, StaggerSpec, TweenRequest, TweenSink};
