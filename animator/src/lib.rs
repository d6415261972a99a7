//! One-shot scroll animations.
//!
//! The engine knows nothing about the DOM. A binding layer finds the tagged
//! elements, gives each one a [`TargetId`], feeds viewport-intersection
//! entries into [`ScrollAnimator::handle_entries`] and animation-frame
//! timestamps into [`ScrollAnimator::frame`]. Every mutation goes through a
//! [`Surface`], which the browser implements over real elements and
//! [`headless::HeadlessDocument`] implements in memory.
//!
//! ## Lifecycle
//! - [`ScrollAnimator::mount`] starts a cycle for one page: every scanned
//!   target gets a `{ seen: false }` record.
//! - An entry at or past [`THRESHOLD`] flips its record to seen and applies
//!   the transition. Seen records never fire again, so leaving and
//!   re-entering the viewport does nothing.
//! - [`ScrollAnimator::teardown`] (or the next `mount`) drops all records and
//!   running counters. Entries for targets of a previous cycle are ignored,
//!   which requires the binding never to reuse a `TargetId`.

mod counter;
pub mod headless;
mod reveal;

use std::collections::HashMap;

pub use counter::{format_count, parse_counter_target};
pub use reveal::{normalize_delay, resolve_family};

use counter::CounterTween;

/// Fraction of an element that must be visible before it animates.
pub const THRESHOLD: f64 = 0.2;
pub const COUNTER_DURATION_MS: f64 = 1200.0;

/// Marker class added to every animated element.
pub const ANIMATED_CLASS: &str = "animate__animated";
pub const FAMILY_PREFIX: &str = "animate__";
pub const FAMILIES: &[&str] = &[
    "fadeIn",
    "fadeInUp",
    "fadeInDown",
    "fadeInLeft",
    "fadeInRight",
    "zoomIn",
    "slideInUp",
    "slideInLeft",
    "slideInRight",
];
pub const DEFAULT_FAMILY: &str = "fadeInUp";
pub const DELAY_ATTRIBUTE: &str = "data-delay";

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const FIGURE_SELECTOR: &str = ".reveal-image";
pub const COUNTER_SELECTOR: &str = ".counter";

/// Identity of a scanned element. Unique for the lifetime of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// The three independently observed sets of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Generic entrance animation with an optional family and delay.
    Reveal,
    /// Image or figure that starts hidden.
    Figure,
    /// Element whose numeric text counts up from zero.
    Counter,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [Self::Reveal, Self::Figure, Self::Counter];

    pub fn selector(self) -> &'static str {
        match self {
            Self::Reveal => REVEAL_SELECTOR,
            Self::Figure => FIGURE_SELECTOR,
            Self::Counter => COUNTER_SELECTOR,
        }
    }
}

/// Read and write access to the animated elements.
pub trait Surface {
    fn classes(&self, target: TargetId) -> Vec<String>;
    fn attribute(&self, target: TargetId, name: &str) -> Option<String>;
    fn text(&self, target: TargetId) -> String;
    fn add_class(&self, target: TargetId, class: &str);
    fn set_style(&self, target: TargetId, property: &str, value: &str);
    fn set_text(&self, target: TargetId, text: &str);
}

/// Elements found on the current page, by set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub reveals: Vec<TargetId>,
    pub figures: Vec<TargetId>,
    pub counters: Vec<TargetId>,
}

impl Scan {
    pub fn targets(&self, kind: TargetKind) -> &[TargetId] {
        match kind {
            TargetKind::Reveal => &self.reveals,
            TargetKind::Figure => &self.figures,
            TargetKind::Counter => &self.counters,
        }
    }

    pub fn targets_mut(&mut self, kind: TargetKind) -> &mut Vec<TargetId> {
        match kind {
            TargetKind::Reveal => &mut self.reveals,
            TargetKind::Figure => &mut self.figures,
            TargetKind::Counter => &mut self.counters,
        }
    }

    pub fn len(&self) -> usize {
        self.reveals.len() + self.figures.len() + self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One intersection observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub target: TargetId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Entry {
    pub fn visible(target: TargetId, ratio: f64) -> Self {
        Self {
            target,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    pub fn hidden(target: TargetId) -> Self {
        Self {
            target,
            ratio: 0.0,
            is_intersecting: false,
        }
    }

    fn qualifies(&self) -> bool {
        self.is_intersecting && self.ratio >= THRESHOLD
    }
}

#[derive(Debug, Clone, Copy)]
struct Record {
    seen: bool,
}

#[derive(Default)]
pub struct ScrollAnimator {
    records: HashMap<(TargetKind, TargetId), Record>,
    counters: Vec<CounterTween>,
    connected: bool,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle for a freshly rendered page.
    pub fn mount(&mut self, scan: &Scan) {
        self.teardown();
        for kind in TargetKind::ALL {
            for target in scan.targets(kind) {
                self.records.insert((kind, *target), Record { seen: false });
            }
        }
        self.connected = true;
        tracing::debug!(
            reveals = scan.reveals.len(),
            figures = scan.figures.len(),
            counters = scan.counters.len(),
            "scroll animator mounted"
        );
    }

    /// Apply the transitions for entries that became visible, returning the
    /// targets that fired. Those should no longer be observed.
    pub fn handle_entries(
        &mut self,
        surface: &impl Surface,
        kind: TargetKind,
        entries: &[Entry],
    ) -> Vec<TargetId> {
        if !self.connected {
            return Vec::new();
        }
        let mut fired = Vec::new();
        for entry in entries.iter().filter(|e| e.qualifies()) {
            let Some(record) = self.records.get_mut(&(kind, entry.target))
            else {
                continue;
            };
            if record.seen {
                continue;
            }
            record.seen = true;
            self.apply(surface, kind, entry.target);
            fired.push(entry.target);
        }
        fired
    }

    /// Advance running counters to `now_ms`. Returns whether another frame
    /// is wanted.
    pub fn frame(&mut self, surface: &impl Surface, now_ms: f64) -> bool {
        if !self.connected {
            return false;
        }
        self.counters.retain_mut(|tween| tween.step(surface, now_ms));
        !self.counters.is_empty()
    }

    pub fn wants_frame(&self) -> bool {
        self.connected && !self.counters.is_empty()
    }

    /// Disconnect from the current page. Later entries and frames are no-ops
    /// until the next [`mount`](Self::mount).
    pub fn teardown(&mut self) {
        if self.connected {
            tracing::debug!(
                running_counters = self.counters.len(),
                "scroll animator torn down"
            );
        }
        self.connected = false;
        self.records.clear();
        self.counters.clear();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_seen(&self, kind: TargetKind, target: TargetId) -> bool {
        self.records
            .get(&(kind, target))
            .is_some_and(|record| record.seen)
    }

    fn apply(&mut self, surface: &impl Surface, kind: TargetKind, target: TargetId) {
        match kind {
            TargetKind::Reveal => {
                let family = resolve_family(&surface.classes(target));
                if let Some(delay) = surface
                    .attribute(target, DELAY_ATTRIBUTE)
                    .as_deref()
                    .and_then(normalize_delay)
                {
                    surface.set_style(target, "animation-delay", &delay);
                }
                surface.add_class(target, ANIMATED_CLASS);
                surface.add_class(target, &format!("{FAMILY_PREFIX}{family}"));
            }
            TargetKind::Figure => {
                surface.set_style(target, "opacity", "1");
                surface.set_style(target, "visibility", "visible");
                surface.add_class(target, ANIMATED_CLASS);
                surface.add_class(
                    target,
                    &format!("{FAMILY_PREFIX}{DEFAULT_FAMILY}"),
                );
            }
            TargetKind::Counter => {
                let goal = parse_counter_target(&surface.text(target));
                self.counters.push(CounterTween::new(target, goal));
            }
        }
    }
}
