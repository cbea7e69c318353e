pub mod args;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod client;
    pub mod games;
    pub mod nonce;
    pub mod normalize;
    pub mod widget;
}
pub mod mvu {
    pub mod error;
    pub mod runtime;
    pub mod widget;
}
pub mod view {
    pub mod index;
    pub mod widget;
}

const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

/// Substring identifying the club's own teams in the league data.
pub const CLUB_NAME: &str = "Oostkamp";
/// Cache key under which the normalized schedule is stored.
pub const SCHEDULE_CACHE_KEY: &str = "kbbco_games_data";
/// Zone the league publishes its start times in.
pub const CLUB_TIMEZONE: chrono_tz::Tz = chrono_tz::Europe::Brussels;
/// Action name bound into the anti-forgery token of the data endpoint.
pub const NONCE_ACTION: &str = "kbbco_games_nonce";

pub use controller::games::GamesContext;
pub use model::{DisplayMatch, RawMatch, TeamInfo, WeeklySchedule};
