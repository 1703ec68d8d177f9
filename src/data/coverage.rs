use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{QuoteDataset, TimeKey, MINUTES_PER_DAY};

// ---------------------------------------------------------------------------
// Coverage statistics over the 1440-minute key space
// ---------------------------------------------------------------------------

/// How well a dataset covers the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Minutes with at least one quote.
    pub covered: usize,
    pub total_quotes: usize,
    /// Covered minutes per hour of the day (index = hour).
    pub per_hour: [usize; 24],
    /// quotes-per-minute → number of minutes with that many quotes.
    pub distribution: BTreeMap<usize, usize>,
    pub max_quotes: Option<usize>,
    pub min_quotes: Option<usize>,
    /// Upper median of quotes per covered minute.
    pub median_quotes: Option<usize>,
}

impl Coverage {
    pub fn of(dataset: &QuoteDataset) -> Self {
        let mut per_hour = [0usize; 24];
        let mut distribution = BTreeMap::new();
        let mut counts = Vec::with_capacity(dataset.len());

        for (key, quotes) in dataset.iter() {
            per_hour[usize::from(key.hour())] += 1;
            *distribution.entry(quotes.len()).or_insert(0) += 1;
            counts.push(quotes.len());
        }
        counts.sort_unstable();

        Coverage {
            covered: dataset.len(),
            total_quotes: dataset.quote_count(),
            per_hour,
            distribution,
            max_quotes: counts.last().copied(),
            min_quotes: counts.first().copied(),
            median_quotes: counts.get(counts.len() / 2).copied(),
        }
    }

    pub fn missing(&self) -> usize {
        usize::from(MINUTES_PER_DAY) - self.covered
    }

    /// Share of the day covered, in percent.
    pub fn percent(&self) -> f64 {
        self.covered as f64 / f64::from(MINUTES_PER_DAY) * 100.0
    }

    pub fn mean_quotes(&self) -> Option<f64> {
        (self.covered > 0).then(|| self.total_quotes as f64 / self.covered as f64)
    }
}

/// Minutes of the day with no quote at all, in chronological order.
pub fn missing_keys(dataset: &QuoteDataset) -> Vec<TimeKey> {
    TimeKey::all().filter(|k| dataset.get(*k).is_none()).collect()
}

// ---------------------------------------------------------------------------
// CSV listings
// ---------------------------------------------------------------------------

/// Write `time,quotes` rows for every covered minute.
pub fn write_covered_csv<W: Write>(dataset: &QuoteDataset, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["time", "quotes"])?;
    for (key, quotes) in dataset.iter() {
        writer.write_record([key.to_string(), quotes.len().to_string()])?;
    }
    writer.flush().context("flushing covered-times CSV")?;
    Ok(())
}

/// Write a single `time` column listing every uncovered minute.
pub fn write_missing_csv<W: Write>(dataset: &QuoteDataset, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["time"])?;
    for key in missing_keys(dataset) {
        writer.write_record([key.to_string()])?;
    }
    writer.flush().context("flushing missing-times CSV")?;
    Ok(())
}

/// Write `covered_times.csv` and `missing_times.csv` into `dir`.
pub fn write_csv_listings(dataset: &QuoteDataset, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let covered = dir.join("covered_times.csv");
    let file = std::fs::File::create(&covered)
        .with_context(|| format!("creating {}", covered.display()))?;
    write_covered_csv(dataset, file)?;

    let missing = dir.join("missing_times.csv");
    let file = std::fs::File::create(&missing)
        .with_context(|| format!("creating {}", missing.display()))?;
    write_missing_csv(dataset, file)?;

    log::info!("Wrote {} and {}", covered.display(), missing.display());
    Ok(())
}
