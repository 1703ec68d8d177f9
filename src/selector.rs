use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::model::{Quote, QuoteDataset, TimeKey};

// ---------------------------------------------------------------------------
// Quote selection: exact minute, else nearest minute round the clock
// ---------------------------------------------------------------------------

/// How the chosen quote relates to the requested minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    Exact,
    /// No quote for the requested minute; this is the closest one that has any.
    Nearest(TimeKey),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub quote: Quote,
    pub matched: Match,
}

impl Selection {
    pub fn is_exact(&self) -> bool {
        self.matched == Match::Exact
    }
}

/// Pick a quote for `key`.
///
/// Quotes for the exact minute win.  Otherwise the covered minute with the
/// smallest circular distance is used; on a tie the earliest key wins.
/// Returns `None` only when the dataset is empty.
pub fn select_quote<R: Rng + ?Sized>(
    key: TimeKey,
    dataset: &QuoteDataset,
    rng: &mut R,
) -> Option<Selection> {
    if let Some(quote) = dataset.get(key).and_then(|quotes| quotes.choose(rng)) {
        return Some(Selection {
            quote: quote.clone(),
            matched: Match::Exact,
        });
    }

    let (nearest, quotes) = nearest_entry(key, dataset)?;
    quotes.choose(rng).map(|quote| Selection {
        quote: quote.clone(),
        matched: Match::Nearest(nearest),
    })
}

/// The covered key closest to `key`, first in chronological order on ties.
pub fn nearest_entry(key: TimeKey, dataset: &QuoteDataset) -> Option<(TimeKey, &[Quote])> {
    let mut best: Option<(u16, TimeKey, &[Quote])> = None;
    for (candidate, quotes) in dataset.iter() {
        let distance = key.circular_distance(candidate);
        if best.map_or(true, |(d, _, _)| distance < d) {
            best = Some((distance, candidate, quotes));
        }
    }
    best.map(|(_, k, quotes)| (k, quotes))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn k(s: &str) -> TimeKey {
        s.parse().unwrap()
    }

    fn quote(text: &str) -> Quote {
        Quote {
            text: text.to_string(),
            title: "T".to_string(),
            author: "Au".to_string(),
        }
    }

    /// One `(key, text)` pair per quote; repeated keys accumulate.
    fn dataset(entries: &[(&str, &str)]) -> QuoteDataset {
        QuoteDataset::from_entries(
            entries
                .iter()
                .map(|(key, text)| (k(key), vec![quote(text)])),
        )
    }

    #[test]
    fn exact_match_returns_the_quote_for_that_minute() {
        let ds = dataset(&[("09:00", "A")]);
        let mut rng = StdRng::seed_from_u64(1);
        let sel = select_quote(k("09:00"), &ds, &mut rng).unwrap();
        assert_eq!(sel.matched, Match::Exact);
        assert!(sel.is_exact());
        assert_eq!(sel.quote, quote("A"));
    }

    #[test]
    fn exact_match_only_draws_from_its_own_list() {
        let ds = dataset(&[("09:00", "A"), ("09:00", "B"), ("09:00", "C"), ("09:01", "X")]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let sel = select_quote(k("09:00"), &ds, &mut rng).unwrap();
            assert!(sel.is_exact());
            seen.insert(sel.quote.text);
        }
        let expected: std::collections::BTreeSet<String> =
            ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn nearest_match_wraps_past_midnight() {
        let ds = dataset(&[("00:02", "late"), ("22:00", "early")]);
        let mut rng = StdRng::seed_from_u64(3);
        let sel = select_quote(k("23:58"), &ds, &mut rng).unwrap();
        assert_eq!(sel.matched, Match::Nearest(k("00:02")));
        assert_eq!(sel.quote.text, "late");
        assert_eq!(k("23:58").circular_distance(k("00:02")), 4);
    }

    #[test]
    fn nearest_prefers_two_minutes_over_1438() {
        let ds = dataset(&[("00:01", "wrap"), ("23:00", "far")]);
        let (key, _) = nearest_entry(k("23:59"), &ds).unwrap();
        assert_eq!(key, k("00:01"));
    }

    #[test]
    fn nearest_is_the_minimum_distance_key_for_every_minute() {
        let ds = dataset(&[("03:10", "a"), ("11:45", "b"), ("19:20", "c")]);
        let covered: Vec<TimeKey> = ds.iter().map(|(key, _)| key).collect();
        for target in TimeKey::all() {
            let (found, _) = nearest_entry(target, &ds).unwrap();
            let best = covered
                .iter()
                .map(|c| target.circular_distance(*c))
                .min()
                .unwrap();
            assert_eq!(target.circular_distance(found), best, "target {target}");
        }
    }

    #[test]
    fn ties_go_to_the_earliest_key() {
        let ds = dataset(&[("10:00", "before"), ("10:10", "after")]);
        let (key, _) = nearest_entry(k("10:05"), &ds).unwrap();
        assert_eq!(key, k("10:00"));
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        let ds = QuoteDataset::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_quote(k("12:00"), &ds, &mut rng), None);
        assert!(nearest_entry(k("12:00"), &ds).is_none());
    }
}
