use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::team::TeamInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMatch {
    pub week: u32,
    pub date: String,
    pub time: String,
    pub is_cup: bool,
    pub competition: String,
    pub team_info: TeamInfo,
    pub opponent: String,
    pub opponent_guid: String,
    pub is_home: bool,
    pub score_home: String,
    pub score_away: String,
    pub has_result: bool,
}

impl DisplayMatch {
    /// True when the match was played and our side scored more points.
    #[must_use]
    pub fn our_team_won(&self) -> bool {
        if !self.has_result {
            return false;
        }
        match (
            self.score_home.parse::<i32>(),
            self.score_away.parse::<i32>(),
        ) {
            (Ok(home), Ok(away)) if self.is_home => home > away,
            (Ok(home), Ok(away)) => away > home,
            _ => false,
        }
    }

    /// Key used to group matches into one card: `"Zaterdag 12 oktober om 20.00"`.
    #[must_use]
    pub fn date_time_label(&self) -> String {
        format!("{} om {}", self.date, self.time)
    }
}

/// Matches bucketed by ISO week number, each bucket in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<u32, Vec<DisplayMatch>>);

impl WeeklySchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, game: DisplayMatch) {
        self.0.entry(game.week).or_default().push(game);
    }

    #[must_use]
    pub fn week(&self, week: u32) -> &[DisplayMatch] {
        self.0.get(&week).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_games(&self, week: u32) -> bool {
        !self.week(week).is_empty()
    }

    /// Week numbers with at least one match, ascending.
    pub fn non_empty_weeks(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.0
            .iter()
            .filter(|(_, games)| !games.is_empty())
            .map(|(week, _)| *week)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.non_empty_weeks().next().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[DisplayMatch])> {
        self.0.iter().map(|(w, games)| (*w, games.as_slice()))
    }

    /// Display names of every team with a known level in the schedule.
    #[must_use]
    pub fn team_displays(&self) -> BTreeSet<String> {
        self.0
            .values()
            .flatten()
            .filter(|g| !g.team_info.is_unknown())
            .map(|g| g.team_info.display.clone())
            .collect()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<DisplayMatch> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = DisplayMatch>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for game in iter {
            schedule.push(game);
        }
        schedule
    }
}

/// Body of the data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GamesResponse {
    Success { success: bool, data: WeeklySchedule },
    Failure { success: bool, error: String },
}

impl GamesResponse {
    #[must_use]
    pub fn success(data: WeeklySchedule) -> Self {
        Self::Success {
            success: true,
            data,
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: error.into(),
        }
    }
}
