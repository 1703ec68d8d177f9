use std::time::{Duration, Instant};

use rand::Rng;

use crate::data::model::{QuoteDataset, TimeKey};
use crate::selector::{select_quote, Selection};

/// Default minimum time a quote stays up within the same minute.
pub const DEFAULT_HOLD: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Rotation policy
// ---------------------------------------------------------------------------

/// Decides when the selector runs again.
///
/// A new quote is drawn when the minute changes, when `hold` has passed since
/// the last draw, or when nothing is held.  Otherwise the held quote stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub hold: Duration,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self { hold: DEFAULT_HOLD }
    }
}

/// The quote currently on display, plus what it was drawn for.
#[derive(Debug, Clone)]
pub struct QuoteRotation {
    policy: RotationPolicy,
    current: Option<Selection>,
    drawn_for: Option<TimeKey>,
    drawn_at: Option<Instant>,
}

impl QuoteRotation {
    pub fn new(policy: RotationPolicy) -> Self {
        Self {
            policy,
            current: None,
            drawn_for: None,
            drawn_at: None,
        }
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    fn is_due(&self, key: TimeKey, now: Instant) -> bool {
        match (&self.current, self.drawn_for, self.drawn_at) {
            (Some(_), Some(drawn_for), Some(drawn_at)) => {
                drawn_for != key || now.saturating_duration_since(drawn_at) >= self.policy.hold
            }
            _ => true,
        }
    }

    /// Re-run the selector if the policy says so.  Returns whether it ran.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        key: TimeKey,
        now: Instant,
        dataset: &QuoteDataset,
        rng: &mut R,
    ) -> bool {
        if !self.is_due(key, now) {
            return false;
        }
        self.current = select_quote(key, dataset, rng);
        self.drawn_for = Some(key);
        self.drawn_at = Some(now);
        if let Some(sel) = &self.current {
            log::debug!("{key}: showing \"{}\" ({:?})", sel.quote.title, sel.matched);
        }
        true
    }

    /// Forget the held quote, e.g. after the dataset was replaced.
    pub fn clear(&mut self) {
        self.current = None;
        self.drawn_for = None;
        self.drawn_at = None;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::model::Quote;

    fn k(s: &str) -> TimeKey {
        s.parse().unwrap()
    }

    fn many_quotes() -> QuoteDataset {
        let quotes = (0..50)
            .map(|i| Quote {
                text: format!("q{i}"),
                title: "T".to_string(),
                author: "Au".to_string(),
            })
            .collect();
        QuoteDataset::from_entries([(k("09:00"), quotes)])
    }

    #[test]
    fn first_update_always_draws() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        assert!(rot.current().is_none());
        assert!(rot.update(k("09:00"), Instant::now(), &ds, &mut rng));
        assert!(rot.current().is_some());
    }

    #[test]
    fn holds_the_quote_within_the_minute() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        let t0 = Instant::now();
        rot.update(k("09:00"), t0, &ds, &mut rng);
        let first = rot.current().cloned();

        for s in 1..10 {
            let ran = rot.update(k("09:00"), t0 + Duration::from_secs(s), &ds, &mut rng);
            assert!(!ran, "re-drew after {s}s");
            assert_eq!(rot.current().cloned(), first);
        }
    }

    #[test]
    fn redraws_once_the_hold_expires() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        let t0 = Instant::now();
        rot.update(k("09:00"), t0, &ds, &mut rng);

        assert!(rot.update(k("09:00"), t0 + Duration::from_secs(10), &ds, &mut rng));
        // The hold restarts from the new draw.
        assert!(!rot.update(k("09:00"), t0 + Duration::from_secs(15), &ds, &mut rng));
        assert!(rot.update(k("09:00"), t0 + Duration::from_secs(20), &ds, &mut rng));
    }

    #[test]
    fn redraws_when_the_minute_changes() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        let t0 = Instant::now();
        rot.update(k("09:00"), t0, &ds, &mut rng);
        assert!(rot.update(k("09:01"), t0 + Duration::from_secs(1), &ds, &mut rng));
        assert_eq!(
            rot.current().map(|s| s.matched),
            Some(crate::selector::Match::Nearest(k("09:00")))
        );
    }

    #[test]
    fn keeps_trying_while_nothing_is_held() {
        let empty = QuoteDataset::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        let t0 = Instant::now();
        assert!(rot.update(k("09:00"), t0, &empty, &mut rng));
        assert!(rot.current().is_none());
        assert!(rot.update(k("09:00"), t0 + Duration::from_secs(1), &empty, &mut rng));
    }

    #[test]
    fn custom_hold_is_respected() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy {
            hold: Duration::from_secs(3),
        });
        let t0 = Instant::now();
        rot.update(k("09:00"), t0, &ds, &mut rng);
        assert!(!rot.update(k("09:00"), t0 + Duration::from_secs(2), &ds, &mut rng));
        assert!(rot.update(k("09:00"), t0 + Duration::from_secs(3), &ds, &mut rng));
    }

    #[test]
    fn clear_forces_a_new_draw() {
        let ds = many_quotes();
        let mut rng = StdRng::seed_from_u64(11);
        let mut rot = QuoteRotation::new(RotationPolicy::default());
        let t0 = Instant::now();
        rot.update(k("09:00"), t0, &ds, &mut rng);
        rot.clear();
        assert!(rot.current().is_none());
        assert!(rot.update(k("09:00"), t0 + Duration::from_secs(1), &ds, &mut rng));
    }
}
