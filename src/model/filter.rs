use std::collections::BTreeSet;

use super::display::{DisplayMatch, WeeklySchedule};
use super::team::is_senior_display;

/// Teams the visitor wants to see.
///
/// `selected == None` means no preference was ever stored; the first
/// schedule to arrive then selects every team it contains. An empty
/// selection is a real choice and hides every team except `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    selected: Option<BTreeSet<String>>,
    available: BTreeSet<String>,
}

impl TeamFilter {
    #[must_use]
    pub fn new(persisted: Option<BTreeSet<String>>) -> Self {
        Self {
            selected: persisted,
            available: BTreeSet::new(),
        }
    }

    /// Collects the teams present in `schedule` and applies the first-run
    /// default.
    pub fn initialize(&mut self, schedule: &WeeklySchedule) {
        self.available = schedule.team_displays();
        if self.selected.is_none() {
            self.selected = Some(self.available.clone());
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> BTreeSet<String> {
        self.selected.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn available(&self) -> &BTreeSet<String> {
        &self.available
    }

    #[must_use]
    pub fn is_selected(&self, team: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.contains(team))
    }

    pub fn toggle(&mut self, team: &str) {
        let selected = self.selected.get_or_insert_with(BTreeSet::new);
        if !selected.remove(team) {
            selected.insert(team.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = Some(self.available.clone());
    }

    pub fn select_seniors(&mut self) {
        self.selected = Some(
            self.available
                .iter()
                .filter(|t| is_senior_display(t))
                .cloned()
                .collect(),
        );
    }

    pub fn select_youth(&mut self) {
        self.selected = Some(
            self.available
                .iter()
                .filter(|t| !is_senior_display(t))
                .cloned()
                .collect(),
        );
    }

    pub fn clear_all(&mut self) {
        self.selected = Some(BTreeSet::new());
    }

    #[must_use]
    pub fn is_visible(&self, game: &DisplayMatch) -> bool {
        if game.team_info.is_unknown() {
            return true;
        }
        self.selected
            .as_ref()
            .is_none_or(|selected| selected.contains(&game.team_info.display))
    }

    pub fn visible<'a>(
        &'a self,
        games: &'a [DisplayMatch],
    ) -> impl Iterator<Item = &'a DisplayMatch> + 'a {
        games.iter().filter(|g| self.is_visible(g))
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        let selected = self.selected.as_ref().map_or(0, BTreeSet::len);
        let total = self.available.len();
        if selected == 0 {
            "Geen teams".to_string()
        } else if selected == total {
            "Alle teams".to_string()
        } else {
            format!("{selected}/{total} teams")
        }
    }

    /// Senior teams first, then the youth teams, each alphabetically.
    #[must_use]
    pub fn sorted_available(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = self.available.iter().map(String::as_str).collect();
        teams.sort_by(|a, b| {
            is_senior_display(b)
                .cmp(&is_senior_display(a))
                .then_with(|| a.cmp(b))
        });
        teams
    }
}
