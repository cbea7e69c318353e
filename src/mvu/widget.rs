use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::warn;
use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::error::AppError;
use crate::controller::cache::ScheduleCache;
use crate::controller::client::MatchSource;
use crate::controller::games::get_weekly_schedule;
use crate::model::{Navigator, PreferenceStore, TeamFilter, WeeklySchedule};
use crate::view::widget::render_widget;

pub const DEFAULT_SHOW_WEEKS: u32 = 4;
pub const DEFAULT_THEME: &str = "default";

/// Everything a visitor can ask the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextWeek,
    PrevWeek,
    ToggleTeam(String),
    SelectAll,
    SelectSeniors,
    SelectYouth,
    ClearAll,
}

impl Command {
    /// Query-string name of the action, as sent back by the rendered controls.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::NextWeek => "next",
            Self::PrevWeek => "prev",
            Self::ToggleTeam(_) => "toggle",
            Self::SelectAll => "all",
            Self::SelectSeniors => "seniors",
            Self::SelectYouth => "youth",
            Self::ClearAll => "clear",
        }
    }

    fn changes_filter(&self) -> bool {
        !matches!(self, Self::NextWeek | Self::PrevWeek)
    }
}

#[derive(Debug, Clone)]
pub struct WidgetModel {
    pub today: NaiveDate,
    pub navigator: Navigator,
    pub filter: TeamFilter,
    /// Set when the request did not name a week: the very first render.
    pub first_load: bool,
    pub show_weeks: u32,
    pub theme: String,
    pub pending: Option<Command>,
    pub schedule: Option<WeeklySchedule>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl WidgetModel {
    #[must_use]
    pub fn new(today: NaiveDate, filter: TeamFilter) -> Self {
        Self {
            today,
            navigator: Navigator::new(today),
            filter,
            first_load: true,
            show_weeks: DEFAULT_SHOW_WEEKS,
            theme: DEFAULT_THEME.to_string(),
            pending: None,
            schedule: None,
            markup: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_display_week(mut self, week: i64) -> Self {
        self.navigator = self.navigator.with_display_week(week);
        self.first_load = false;
        self
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    Command(Command),
    ScheduleLoaded(WeeklySchedule),
    FilterPersisted,
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadSchedule,
    PersistFilter,
    RenderWidget,
}

pub fn update(model: &mut WidgetModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadSchedule],
        Msg::Command(command) => {
            if model.schedule.is_some() {
                apply_command(model, command)
            } else {
                model.pending = Some(command);
                vec![Effect::LoadSchedule]
            }
        }
        Msg::ScheduleLoaded(schedule) => {
            model.filter.initialize(&schedule);
            model.error = None;
            model.schedule = Some(schedule);
            if let Some(command) = model.pending.take() {
                apply_command(model, command)
            } else {
                if model.first_load {
                    if let Some(schedule) = model.schedule.as_ref() {
                        model.navigator.settle_forward(schedule);
                    }
                }
                vec![Effect::RenderWidget]
            }
        }
        Msg::FilterPersisted => vec![],
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

// Effects are drained from the back: persisting runs before the render.
fn apply_command(model: &mut WidgetModel, command: Command) -> Vec<Effect> {
    let Some(schedule) = model.schedule.as_ref() else {
        return vec![Effect::LoadSchedule];
    };
    let persist = command.changes_filter();
    match command {
        Command::NextWeek => model.navigator.next(schedule),
        Command::PrevWeek => model.navigator.prev(schedule),
        Command::ToggleTeam(team) => model.filter.toggle(&team),
        Command::SelectAll => model.filter.select_all(),
        Command::SelectSeniors => model.filter.select_seniors(),
        Command::SelectYouth => model.filter.select_youth(),
        Command::ClearAll => model.filter.clear_all(),
    }
    if persist {
        vec![Effect::RenderWidget, Effect::PersistFilter]
    } else {
        vec![Effect::RenderWidget]
    }
}

pub struct Deps<'a, Tz: TimeZone> {
    pub cache: &'a dyn ScheduleCache,
    pub source: &'a dyn MatchSource,
    pub preferences: &'a dyn PreferenceStore,
    pub cache_ttl_seconds: u64,
    /// Time zone the match times are written in.
    pub tz: &'a Tz,
    pub generated_at: DateTime<Utc>,
    pub nonce: &'a str,
}

pub async fn run_effect<Tz: TimeZone>(
    effect: Effect,
    model: &WidgetModel,
    deps: &Deps<'_, Tz>,
) -> Msg {
    match effect {
        Effect::LoadSchedule => {
            match get_weekly_schedule(deps.cache, deps.source, deps.cache_ttl_seconds).await {
                Ok(schedule) => Msg::ScheduleLoaded(schedule),
                Err(e) => Msg::Failed(e),
            }
        }
        Effect::PersistFilter => {
            if let Err(e) = deps.preferences.save(&model.filter.selected()) {
                warn!("Could not store team filter: {e}");
            }
            Msg::FilterPersisted
        }
        Effect::RenderWidget => Msg::Rendered(render_widget(model, deps)),
    }
}

/// Parse query params into a `WidgetModel` and the message that starts it.
///
/// # Errors
///
/// Returns `AppError::Other` with human-readable messages for invalid params.
pub fn decode_request_to_model<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    today: NaiveDate,
    preferences: &dyn PreferenceStore,
) -> Result<(WidgetModel, Msg), AppError> {
    let mut model = WidgetModel::new(today, TeamFilter::new(preferences.load()));

    if let Some(week) = query.get("week").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let week: i64 = week
            .parse()
            .map_err(|_| AppError::Other("week must be a number".into()))?;
        model = model.with_display_week(week);
    }

    model.show_weeks = query
        .get("show_weeks")
        .and_then(|s| s.trim().parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_SHOW_WEEKS);
    model.theme = query
        .get("theme")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_THEME)
        .to_string();

    let command = match query.get("action").map(|s| s.trim()) {
        None | Some("" | "load" | "retry") => None,
        Some("next") => Some(Command::NextWeek),
        Some("prev") => Some(Command::PrevWeek),
        Some("all") => Some(Command::SelectAll),
        Some("seniors") => Some(Command::SelectSeniors),
        Some("youth") => Some(Command::SelectYouth),
        Some("clear") => Some(Command::ClearAll),
        Some("toggle") => {
            let team = query
                .get("team")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| AppError::Other("team parameter is required to toggle".into()))?;
            Some(Command::ToggleTeam(team.to_string()))
        }
        Some(other) => return Err(AppError::Other(format!("unknown action '{other}'"))),
    };

    let msg = command.map_or(Msg::PageLoad, Msg::Command);
    Ok((model, msg))
}
