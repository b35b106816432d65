use std::num::NonZeroUsize;

/// A contiguous run of training rows processed as one SGD step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minibatch {
    /// Index of the first row.
    pub offset: usize,
    /// Number of rows; only the last minibatch of an epoch may be shorter
    /// than the configured batch size.
    pub len: usize,
}

/// Partitions `rows` examples into consecutive minibatches of `batch` rows.
///
/// Yields `ceil(rows / batch)` items in increasing offset order. The final
/// item holds whatever rows remain; nothing is padded or wrapped around.
#[derive(Debug, Clone)]
pub struct Minibatches {
    rows: usize,
    batch: NonZeroUsize,
    next: usize,
}

impl Minibatches {
    pub fn new(rows: usize, batch: NonZeroUsize) -> Self {
        Self {
            rows,
            batch,
            next: 0,
        }
    }

    /// Number of minibatches in a full pass.
    pub fn steps(rows: usize, batch: NonZeroUsize) -> usize {
        rows.div_ceil(batch.get())
    }
}

impl Iterator for Minibatches {
    type Item = Minibatch;

    fn next(&mut self) -> Option<Minibatch> {
        if self.next >= self.rows {
            return None;
        }
        let offset = self.next;
        let len = self.batch.get().min(self.rows - offset);
        self.next += len;
        Some(Minibatch { offset, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Minibatches::steps(self.rows - self.next.min(self.rows), self.batch);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Minibatches {}
