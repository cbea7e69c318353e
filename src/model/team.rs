use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub display: String,
    pub link: String,
    pub color: String,
    pub original_level: String,
}

struct TeamLevel {
    level: &'static str,
    display: &'static str,
    link: &'static str,
    color: &'static str,
}

const fn team(
    level: &'static str,
    display: &'static str,
    link: &'static str,
    color: &'static str,
) -> TeamLevel {
    TeamLevel {
        level,
        display,
        link,
        color,
    }
}

// Order matters: the first level found in a team name wins.
const TEAM_LEVELS: [TeamLevel; 20] = [
    team("J18 B", "U18 B", "ploegen/u18-kadetten/b", "#e74c3c"),
    team("J18 A", "U18 A", "ploegen/u18-kadetten/a", "#e74c3c"),
    team("G12 A", "U12 A", "ploegen/u12-benjamins/a", "#3498db"),
    team("G12 B", "U12 B", "ploegen/u12-benjamins/b", "#3498db"),
    team("G12 C", "U12 C", "ploegen/u12-benjamins/c", "#3498db"),
    team("J16 A", "U16 A", "ploegen/u16-miniemen/a", "#f39c12"),
    team("J16 B", "U16 B", "ploegen/u16-miniemen/b", "#f39c12"),
    team("J21 A", "U21 A", "ploegen/u21-junioren/a", "#9b59b6"),
    team("J21 B", "U21 B", "ploegen/u21-junioren/b", "#9b59b6"),
    team("G14 A", "G14 A", "ploegen/u14-pupillen/a", "#2ecc71"),
    team("G14 B", "G14 B", "ploegen/u14-pupillen/b", "#2ecc71"),
    team("G10 A", "U10 A", "ploegen/u10-microben/a", "#1abc9c"),
    team("G10 B", "U10 B", "ploegen/u10-microben/b", "#1abc9c"),
    team("G10 C", "U10 C", "ploegen/u10-microben/c", "#1abc9c"),
    team("G10 D", "U10 D", "ploegen/u10-microben/d", "#1abc9c"),
    team("G08 A", "G08 A", "ploegen/u8-premicroben/a", "#34495e"),
    team("G08 B", "G08 B", "ploegen/u8-premicroben/b", "#34495e"),
    team("HSE A", "ONE", "ploegen/seniors/one", "#c0392b"),
    team("HSE B", "TWO", "ploegen/seniors/two", "#c0392b"),
    team("HSE C", "THREE", "ploegen/seniors/three", "#c0392b"),
];

pub const UNKNOWN_TEAM: &str = "Unknown";

const SENIOR_TOKENS: [&str; 3] = ["ONE", "TWO", "THREE"];

impl TeamInfo {
    /// Looks up the team level contained in `team_name`.
    #[must_use]
    pub fn resolve(team_name: &str) -> Self {
        TEAM_LEVELS
            .iter()
            .find(|t| team_name.contains(t.level))
            .map_or_else(Self::unknown, |t| Self {
                display: t.display.to_string(),
                link: t.link.to_string(),
                color: t.color.to_string(),
                original_level: t.level.to_string(),
            })
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self {
            display: UNKNOWN_TEAM.to_string(),
            link: "#".to_string(),
            color: "#95a5a6".to_string(),
            original_level: String::new(),
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.original_level.is_empty()
    }
}

#[must_use]
pub fn is_senior_display(display: &str) -> bool {
    SENIOR_TOKENS.iter().any(|t| display.contains(t))
}

/// Styling class for a team's age tier.
#[must_use]
pub fn level_class(display: &str) -> &'static str {
    let display = display.to_lowercase();
    if display.is_empty() || ["one", "two", "three"].iter().any(|t| display.contains(t)) {
        return "seniors";
    }
    [
        ("21", "u21"),
        ("18", "u18"),
        ("16", "u16"),
        ("14", "u14"),
        ("12", "u12"),
        ("10", "u10"),
        ("8", "u8"),
    ]
    .iter()
    .find(|(needle, _)| display.contains(needle))
    .map_or("seniors", |(_, class)| *class)
}
