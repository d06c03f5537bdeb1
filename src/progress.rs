//! Per-step progress records and the sinks that receive them.
//!
//! Every search emits one [`ProgressRecord`] per iteration, restart, step or
//! generation, in order, to a caller-supplied [`ProgressSink`]. The search
//! never reads records back, never buffers them, and never skips one.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::CvrpError;

/// One row of a search trajectory.
///
/// `current` is the cost of the candidate the step produced (random search,
/// greedy) or the post-decision current cost (annealing). Population-based
/// search has no single current candidate and leaves it `None`; its `mean`
/// is the population mean rather than a running mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Iteration, restart, step or generation index.
    pub index: usize,
    /// Best cost seen so far (or best in the generation).
    pub best: f64,
    /// Cost of this step's candidate, if the search has one.
    pub current: Option<f64>,
    /// Running mean (or population mean).
    pub mean: f64,
    /// Worst cost seen so far (or worst in the generation).
    pub worst: f64,
}

/// Receives progress records in emission order.
pub trait ProgressSink {
    /// Appends one record.
    fn record(&mut self, record: &ProgressRecord);
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn record(&mut self, record: &ProgressRecord) {
        (**self).record(record);
    }
}

impl ProgressSink for Vec<ProgressRecord> {
    fn record(&mut self, record: &ProgressRecord) {
        self.push(*record);
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn record(&mut self, _record: &ProgressRecord) {}
}

/// Forwards every record to a closure.
///
/// # Examples
///
/// ```
/// use cvrp_bench::progress::{FnSink, ProgressRecord, ProgressSink};
///
/// let mut bests = Vec::new();
/// let mut sink = FnSink(|r: &ProgressRecord| bests.push(r.best));
/// sink.record(&ProgressRecord { index: 0, best: 3.0, current: None, mean: 3.0, worst: 3.0 });
/// drop(sink);
/// assert_eq!(bests, vec![3.0]);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(&ProgressRecord)> ProgressSink for FnSink<F> {
    fn record(&mut self, record: &ProgressRecord) {
        (self.0)(record);
    }
}

/// Column layout of a trajectory log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLayout {
    /// `iteration,best,current,avg,worst`
    RandomSearch,
    /// `restart,best,current,avg,worst`
    Greedy,
    /// `step,best,current,avg,worst`
    Annealing,
    /// `generation,best,avg,worst`
    Evolutionary,
}

impl LogLayout {
    /// Header row for this layout.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            LogLayout::RandomSearch => &["iteration", "best", "current", "avg", "worst"],
            LogLayout::Greedy => &["restart", "best", "current", "avg", "worst"],
            LogLayout::Annealing => &["step", "best", "current", "avg", "worst"],
            LogLayout::Evolutionary => &["generation", "best", "avg", "worst"],
        }
    }

    fn has_current(self) -> bool {
        self != LogLayout::Evolutionary
    }
}

/// Writes records as CSV rows with six decimal places.
///
/// Write errors do not interrupt the search: the first one is kept and
/// returned by [`finish`](CsvSink::finish), and later rows are dropped.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    layout: LogLayout,
    error: Option<csv::Error>,
}

impl<W: Write> CsvSink<W> {
    /// Creates a sink and writes the header row.
    pub fn new(inner: W, layout: LogLayout) -> Result<Self, CvrpError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(layout.header())?;
        Ok(Self {
            writer,
            layout,
            error: None,
        })
    }

    /// Flushes the writer and reports the first write error, if any.
    pub fn finish(mut self) -> Result<W, CvrpError> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.writer.flush()?;
        self.writer.into_inner().map_err(|e| {
            CvrpError::Io(std::io::Error::new(
                e.error().kind(),
                "failed to flush progress log",
            ))
        })
    }

    fn write_row(&mut self, record: &ProgressRecord) -> Result<(), csv::Error> {
        let mut row = vec![record.index.to_string(), format!("{:.6}", record.best)];
        if self.layout.has_current() {
            row.push(format!("{:.6}", record.current.unwrap_or(record.best)));
        }
        row.push(format!("{:.6}", record.mean));
        row.push(format!("{:.6}", record.worst));
        self.writer.write_record(&row)
    }
}

impl<W: Write> ProgressSink for CsvSink<W> {
    fn record(&mut self, record: &ProgressRecord) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_row(record) {
            self.error = Some(err);
        }
    }
}
