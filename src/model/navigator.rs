use chrono::NaiveDate;

use super::display::WeeklySchedule;
use super::dutch::week_span_title;
use super::week::iso_week_of;

pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 52;

/// Which ISO week the widget shows, relative to the week of "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current_week: u32,
    display_week: u32,
}

impl Navigator {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let current_week = iso_week_of(today);
        Self {
            current_week,
            display_week: current_week,
        }
    }

    /// Starts on `week` instead of the current week, e.g. when a request
    /// carries the week the visitor was looking at.
    #[must_use]
    pub fn with_display_week(mut self, week: i64) -> Self {
        self.display_week = match week {
            // a long year's week 53 is reachable through the skip search
            w if (i64::from(FIRST_WEEK)..=53).contains(&w) => w as u32,
            w if w > 53 => FIRST_WEEK,
            _ => LAST_WEEK,
        };
        self
    }

    #[must_use]
    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    #[must_use]
    pub fn display_week(&self) -> u32 {
        self.display_week
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.display_week == self.current_week
    }

    pub fn next(&mut self, schedule: &WeeklySchedule) {
        self.display_week += 1;
        if self.display_week > LAST_WEEK {
            self.display_week = FIRST_WEEK;
        }
        if !schedule.has_games(self.display_week) {
            self.skip_forward(schedule);
        }
    }

    pub fn prev(&mut self, schedule: &WeeklySchedule) {
        self.display_week = self.display_week.saturating_sub(1);
        if self.display_week < FIRST_WEEK {
            self.display_week = LAST_WEEK;
        }
        if !schedule.has_games(self.display_week) {
            self.skip_backward(schedule);
        }
    }

    /// First-render resolution: an empty display week only ever moves
    /// forward, never back.
    pub fn settle_forward(&mut self, schedule: &WeeklySchedule) {
        if !schedule.has_games(self.display_week) {
            self.skip_forward(schedule);
        }
    }

    #[must_use]
    pub fn title(&self, year: i32) -> String {
        week_span_title(self.display_week, self.current_week, year)
    }

    fn skip_forward(&mut self, schedule: &WeeklySchedule) {
        let mut weeks = schedule.non_empty_weeks();
        let first = weeks.next();
        let later = first
            .into_iter()
            .chain(weeks)
            .find(|w| *w > self.display_week);
        if let Some(week) = later.or(first) {
            self.display_week = week;
        }
    }

    fn skip_backward(&mut self, schedule: &WeeklySchedule) {
        let mut weeks = schedule.non_empty_weeks().rev();
        let last = weeks.next();
        let earlier = last
            .into_iter()
            .chain(weeks)
            .find(|w| *w < self.display_week);
        if let Some(week) = earlier.or(last) {
            self.display_week = week;
        }
    }
}
