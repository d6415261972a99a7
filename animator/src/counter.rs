use crate::{COUNTER_DURATION_MS, Surface, TargetId};

/// Numeric target of a counter's text, e.g. `"15K+"` counts to 15.
///
/// Everything but digits and `.` is dropped; anything that still does not
/// parse counts to zero.
pub fn parse_counter_target(text: &str) -> f64 {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Text for a counter value: whole numbers without a fractional part.
pub fn format_count(value: f64) -> String {
    format!("{value}")
}

pub(crate) struct CounterTween {
    target: TargetId,
    goal: f64,
    started_at: Option<f64>,
    shown: Option<f64>,
}

impl CounterTween {
    pub(crate) fn new(target: TargetId, goal: f64) -> Self {
        Self {
            target,
            goal,
            started_at: None,
            shown: None,
        }
    }

    /// Write the value for `now_ms`; false once the goal has been written.
    pub(crate) fn step(&mut self, surface: &impl Surface, now_ms: f64) -> bool {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - started_at) / COUNTER_DURATION_MS).clamp(0.0, 1.0);

        if progress >= 1.0 {
            surface.set_text(self.target, &format_count(self.goal));
            return false;
        }

        // frames may arrive out of order; never count down
        let value = (self.goal * progress)
            .floor()
            .max(self.shown.unwrap_or(0.0));
        if self.shown != Some(value) {
            surface.set_text(self.target, &format_count(value));
            self.shown = Some(value);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counter_target() {
        assert_eq!(parse_counter_target("15K+"), 15.0);
        assert_eq!(parse_counter_target("4.9/5"), 4.95);
        assert_eq!(parse_counter_target("4.9"), 4.9);
        assert_eq!(parse_counter_target("1,200"), 1200.0);
        assert_eq!(parse_counter_target("98%"), 98.0);
        assert_eq!(parse_counter_target(""), 0.0);
        assert_eq!(parse_counter_target("lots"), 0.0);
        assert_eq!(parse_counter_target("1.2.3"), 0.0);
        assert_eq!(parse_counter_target("."), 0.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(15.0), "15");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(4.9), "4.9");
    }
}
