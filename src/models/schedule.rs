//! Size and repetition schedules
//!
//! A schedule pairs each table size (a power of ten) with the number of
//! back-to-back invocations used to time it (also a power of ten). The
//! effective schedule is derived from caller input without mutating it.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOOP_POWERS, DEFAULT_SIZE_POWERS, OPT_OUT_LOOP_POWER, SINGLE_TEST_LOOP_POWER,
};
use crate::error::{BenchError, BenchResult};

/// One timed configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub size_power: u32,
    pub loop_power: u32,
    /// Table rows, `10^size_power`
    pub size: usize,
    /// Invocations, `10^loop_power` (at least one)
    pub invocations: u64,
}

impl ScheduleEntry {
    fn new(size_power: u32, loop_power: u32) -> BenchResult<Self> {
        let size = 10usize
            .checked_pow(size_power)
            .ok_or(BenchError::ScheduleOverflow { power: size_power })?;
        let invocations = 10u64
            .checked_pow(loop_power)
            .ok_or(BenchError::ScheduleOverflow { power: loop_power })?;

        Ok(Self {
            size_power,
            loop_power,
            size,
            invocations: invocations.max(1),
        })
    }
}

/// Effective benchmark schedule, in measurement order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Build the effective schedule.
    ///
    /// The last repetition power is pinned to a single call when
    /// `largest_single_test` is set, and to ten calls otherwise.
    pub fn new(
        size_powers: &[u32],
        loop_powers: &[u32],
        largest_single_test: bool,
    ) -> BenchResult<Self> {
        if size_powers.is_empty() {
            return Err(BenchError::EmptySchedule);
        }
        if size_powers.len() != loop_powers.len() {
            return Err(BenchError::ScheduleMismatch {
                sizes: size_powers.len(),
                repetitions: loop_powers.len(),
            });
        }

        let last = loop_powers.len() - 1;
        let entries = size_powers
            .iter()
            .zip(loop_powers)
            .enumerate()
            .map(|(i, (&size_power, &loop_power))| {
                let loop_power = match (i == last, largest_single_test) {
                    (true, true) => SINGLE_TEST_LOOP_POWER,
                    (true, false) => OPT_OUT_LOOP_POWER,
                    (false, _) => loop_power,
                };
                ScheduleEntry::new(size_power, loop_power)
            })
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Fill in the default schedules for any side the caller left out
    pub fn from_options(
        size_powers: Option<&[u32]>,
        loop_powers: Option<&[u32]>,
        largest_single_test: bool,
    ) -> BenchResult<Self> {
        Self::new(
            size_powers.unwrap_or(DEFAULT_SIZE_POWERS),
            loop_powers.unwrap_or(DEFAULT_LOOP_POWERS),
            largest_single_test,
        )
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn size_powers(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.size_power).collect()
    }

    pub fn loop_powers(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.loop_power).collect()
    }

    /// Smallest configured table size, used by the equivalence probe
    pub fn smallest_size(&self) -> usize {
        self.entries.iter().map(|e| e.size).min().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = Schedule::from_options(None, None, true).unwrap();
        assert_eq!(schedule.size_powers(), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(schedule.loop_powers(), vec![4, 4, 3, 3, 2, 1, 0]);
        assert_eq!(schedule.entries()[6].size, 100_000_000);
        assert_eq!(schedule.entries()[6].invocations, 1);
    }

    #[test]
    fn test_last_entry_is_single_test() {
        let schedule = Schedule::new(&[2, 3], &[3, 5], true).unwrap();
        assert_eq!(schedule.loop_powers(), vec![3, 0]);
        assert_eq!(schedule.entries()[1].invocations, 1);
    }

    #[test]
    fn test_opt_out_pins_ten_calls() {
        let schedule = Schedule::new(&[2, 3], &[3, 5], false).unwrap();
        assert_eq!(schedule.loop_powers(), vec![3, 1]);
        assert_eq!(schedule.entries()[1].invocations, 10);
    }

    #[test]
    fn test_caller_input_not_mutated() {
        let loops = vec![4, 4, 4];
        let schedule = Schedule::new(&[1, 2, 3], &loops, true).unwrap();
        assert_eq!(loops, vec![4, 4, 4]);
        assert_eq!(schedule.loop_powers(), vec![4, 4, 0]);
    }

    #[test]
    fn test_mismatch_and_empty_fail_fast() {
        assert!(matches!(
            Schedule::new(&[2, 3, 4], &[1, 0], true),
            Err(BenchError::ScheduleMismatch {
                sizes: 3,
                repetitions: 2
            })
        ));
        assert!(matches!(
            Schedule::new(&[], &[], true),
            Err(BenchError::EmptySchedule)
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            Schedule::new(&[40], &[0], true),
            Err(BenchError::ScheduleOverflow { power: 40 })
        ));
    }

    #[test]
    fn test_smallest_size() {
        let schedule = Schedule::new(&[4, 2, 3], &[1, 1, 1], true).unwrap();
        assert_eq!(schedule.smallest_size(), 100);
    }
}
