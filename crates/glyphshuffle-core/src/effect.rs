#![forbid(unsafe_code)]

//! Effect kinds and the per-cell step record.
//!
//! Effects are a closed tagged enum dispatched inside the engine, with
//! [`EffectKind::parse`] as the string-facing surface; adding an effect
//! means adding a variant, not widening a lookup table.

/// Number of visual updates each cell passes through before it settles.
pub const MAX_CELL_ITERATIONS: u8 = 4;

// ---------------------------------------------------------------------------
// Effect kinds
// ---------------------------------------------------------------------------

/// The effects an engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Cycle every cell through random glyphs, then resolve back to the
    /// original text. Wire name `"fx3"`.
    ScrambleResolve,
}

impl EffectKind {
    /// Parse a wire name. Unknown names yield `None`; callers treat that
    /// as a silent no-op, never an error.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fx3" => Some(Self::ScrambleResolve),
            _ => None,
        }
    }

    /// The wire name of this effect.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ScrambleResolve => "fx3",
        }
    }
}

// ---------------------------------------------------------------------------
// Step record
// ---------------------------------------------------------------------------

/// One pending step of a cell's scramble state machine.
///
/// The per-cell progression is an explicit record advanced by the
/// scheduler: `iteration` counts up from 0, and the final step
/// (`MAX_CELL_ITERATIONS - 1`) restores the cell. In-flight state is
/// inspectable without waiting on real timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTask {
    /// Index of the owning line.
    pub line: usize,
    /// Cell index within the line.
    pub cell: usize,
    /// Zero-based iteration about to run.
    pub iteration: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_effect() {
        assert_eq!(EffectKind::parse("fx3"), Some(EffectKind::ScrambleResolve));
    }

    #[test]
    fn parse_unknown_effect() {
        assert_eq!(EffectKind::parse("doesNotExist"), None);
        assert_eq!(EffectKind::parse(""), None);
        // Wire names are exact.
        assert_eq!(EffectKind::parse("FX3"), None);
    }

    #[test]
    fn name_round_trips() {
        let kind = EffectKind::ScrambleResolve;
        assert_eq!(EffectKind::parse(kind.name()), Some(kind));
    }
}
