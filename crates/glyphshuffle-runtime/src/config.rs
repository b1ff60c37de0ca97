#![forbid(unsafe_code)]

//! Per-element trigger configuration.
//!
//! Read from a string attribute map (the markup surface), with lenient
//! fallback: a missing, malformed, or unrecognized value takes the
//! default rather than failing. Misconfigured markup degrades to the
//! default click behavior, never to an error.

use std::time::Duration;

use glyphshuffle_core::DEFAULT_DURATION;

/// Default wait before a load-triggered first pass.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(5000);

// ---------------------------------------------------------------------------
// Trigger kinds
// ---------------------------------------------------------------------------

/// What fires a text block's animation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerKind {
    /// Page load, after a configurable delay.
    Load,
    /// Click on the element.
    #[default]
    Click,
    /// Scrolling the element into its trigger region.
    Scroll,
}

impl TriggerKind {
    /// Parse an attribute value. Unrecognized values fall back to `Click`,
    /// matching the wiring's default listener.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "load" => Self::Load,
            "scroll" => Self::Scroll,
            _ => Self::Click,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for one bound text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerConfig {
    /// What fires a pass.
    pub trigger: TriggerKind,
    /// Scroll regions fire once by default; `false` makes them repeatable
    /// (re-entering replays, leaving back fades out).
    pub scroll_once: bool,
    /// Total pass duration.
    pub duration: Duration,
    /// Wait before a load-triggered first pass. Load only.
    pub delay: Duration,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::default(),
            scroll_once: true,
            duration: DEFAULT_DURATION,
            delay: DEFAULT_LOAD_DELAY,
        }
    }
}

impl TriggerConfig {
    /// Read a config from `(key, value)` attribute pairs.
    ///
    /// Recognized keys: `trigger`, `scroll-once`, `duration`, `delay`.
    /// Unknown keys are ignored. A zero or unparseable integer counts as
    /// unset and keeps the default.
    #[must_use]
    pub fn from_attrs<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in attrs {
            match key {
                "trigger" => config.trigger = TriggerKind::parse(value),
                // An empty value counts as unset.
                "scroll-once" => {
                    if !value.is_empty() {
                        config.scroll_once = value == "true";
                    }
                }
                "duration" => {
                    if let Some(duration) = parse_millis(value) {
                        config.duration = duration;
                    }
                }
                "delay" => {
                    if let Some(delay) = parse_millis(value) {
                        config.delay = delay;
                    }
                }
                _ => {}
            }
        }
        config
    }
}

fn parse_millis(value: &str) -> Option<Duration> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
