use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::Reduction;
use crate::Message;

/// Message counts by weekday (rows, Monday first) and hour of day (columns).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityMatrix {
    pub cells: [[u64; 24]; 7],
}

impl ActivityMatrix {
    /// Count for one (weekday, hour) cell. Hours outside `0..24` read as zero.
    pub fn get(&self, weekday: Weekday, hour: u32) -> u64 {
        self.cells[weekday.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// Messages per weekday, Monday first.
    pub fn by_weekday(&self) -> [u64; 7] {
        self.cells.map(|row| row.iter().sum())
    }

    /// Messages per hour of day.
    pub fn by_hour(&self) -> [u64; 24] {
        let mut hours = [0; 24];
        for row in &self.cells {
            for (total, count) in hours.iter_mut().zip(row) {
                *total += count;
            }
        }
        hours
    }

    /// Busiest cell, earliest on ties. `None` when every cell is zero.
    pub fn peak(&self) -> Option<(Weekday, u32, u64)> {
        let mut best: Option<(Weekday, u32, u64)> = None;
        let mut day = Weekday::Mon;
        for row in &self.cells {
            for (hour, &count) in (0u32..).zip(row) {
                if count > best.map_or(0, |b| b.2) {
                    best = Some((day, hour, count));
                }
            }
            day = day.succ();
        }
        best
    }
}

/// Builds the weekday × hour histogram.
#[derive(Debug, Default)]
pub struct ActivityHistogram {
    matrix: ActivityMatrix,
}

impl ActivityHistogram {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reduction for ActivityHistogram {
    type Output = ActivityMatrix;

    fn observe(&mut self, msg: &Message) {
        let day = msg.timestamp.weekday().num_days_from_monday() as usize;
        let hour = msg.timestamp.hour() as usize;
        self.matrix.cells[day][hour] += 1;
    }

    fn finish(self) -> Self::Output {
        self.matrix
    }
}
