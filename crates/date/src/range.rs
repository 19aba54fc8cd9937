//! Lazy sequences of consecutive months.

use std::iter::FusedIterator;

use crate::year_month::YearMonth;

/// Iterator over consecutive months, created by [`YearMonth::range`] and
/// [`YearMonth::range_inclusive`].
///
/// The iterator owns only its start and length, so cloning it restarts the
/// sequence from wherever the clone was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    start: i64,
    front: usize,
    back: usize,
}

impl MonthRange {
    pub(crate) fn new(start: YearMonth, len: usize) -> Self {
        Self {
            start: start.ordinal(),
            front: 0,
            back: len,
        }
    }

    fn month_at(&self, index: usize) -> Option<YearMonth> {
        let ordinal = self.start + index as i64;
        let year = i32::try_from(ordinal.div_euclid(12) + 1).ok()?;
        let month = (ordinal.rem_euclid(12) + 1) as u8;
        YearMonth::new(year, month).ok()
    }
}

impl Iterator for MonthRange {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        if self.front >= self.back {
            return None;
        }
        let month = self.month_at(self.front);
        self.front += 1;
        month
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<YearMonth> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for MonthRange {
    fn next_back(&mut self) -> Option<YearMonth> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.month_at(self.back)
    }
}

impl ExactSizeIterator for MonthRange {}

impl FusedIterator for MonthRange {}
