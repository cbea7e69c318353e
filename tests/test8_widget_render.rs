mod common;
use crate::common::{FailingSource, StubSource, fixture_matches, fixture_today};

use chrono::{TimeZone, Utc};
use scraper::{Html, Selector};
use std::collections::HashMap;

use kbbco_games::controller::cache::{CACHE_TTL_SECONDS, MemoryCache};
use kbbco_games::controller::client::MatchSource;
use kbbco_games::model::{MemoryPreferences, PreferenceStore, THIS_WEEK_TITLE};
use kbbco_games::mvu::runtime::run_widget;
use kbbco_games::mvu::widget::{Deps, Effect, Msg, WidgetModel, decode_request_to_model, update};
use kbbco_games::view::index::render_index_template;
use kbbco_games::view::widget::{LOAD_ERROR_MESSAGE, render_error};

const NONCE: &str = "abcdef0123";

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Decodes `pairs`, runs the widget loop and returns the rendered fragment.
async fn render(
    pairs: &[(&str, &str)],
    source: &dyn MatchSource,
    preferences: &MemoryPreferences,
) -> Result<(WidgetModel, Html), Box<dyn std::error::Error>> {
    let cache = MemoryCache::new();
    let (mut model, msg) = decode_request_to_model(&query(pairs), fixture_today(), preferences)?;
    let deps = Deps {
        cache: &cache,
        source,
        preferences,
        cache_ttl_seconds: CACHE_TTL_SECONDS,
        tz: &Utc,
        generated_at: Utc.with_ymd_and_hms(2025, 10, 8, 12, 0, 0).unwrap(),
        nonce: NONCE,
    };
    run_widget(&mut model, msg, &deps).await?;
    let markup = model.markup.take().ok_or("widget was not rendered")?;
    Ok((model, Html::parse_fragment(&markup.into_string())))
}

fn texts(html: &Html, selector: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let selector = Selector::parse(selector).map_err(|e| e.to_string())?;
    Ok(html
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect())
}

#[tokio::test]
async fn test8_first_load_shows_current_week() -> Result<(), Box<dyn std::error::Error>> {
    let source = StubSource::new(fixture_matches()?);
    let prefs = MemoryPreferences::default();
    let (model, html) = render(&[], &source, &prefs).await?;

    assert_eq!(model.navigator.display_week(), 41);
    assert_eq!(texts(&html, "#week-title")?, vec![THIS_WEEK_TITLE]);
    assert_eq!(texts(&html, ".filter-count")?, vec!["Alle teams"]);
    assert_eq!(html.select(&Selector::parse("#week-41")?).count(), 1);

    // two matches at the same date and time share one card
    assert_eq!(texts(&html, ".game-date-header")?, vec!["Zaterdag 11 oktober om 18.00"]);
    assert_eq!(html.select(&Selector::parse(".team-matchup")?).count(), 2);
    assert_eq!(texts(&html, ".game-status")?, vec!["Gespeeld", "Te spelen"]);
    assert_eq!(texts(&html, ".kbbc-winner .team-score")?, vec!["78"]);

    // only the unplayed match offers calendar links
    let ics = Selector::parse(r#".calendar-dropdown a[download="kbbco-game.ics"]"#)?;
    assert_eq!(html.select(&ics).count(), 1);

    let checkboxes = Selector::parse(".team-checkboxes input[checked]")?;
    assert_eq!(html.select(&checkboxes).count(), 5);
    assert_eq!(texts(&html, ".team-label")?, vec!["ONE", "TWO", "U12 B", "U16 A", "U18 A"]);

    // first visit does not write a preference
    assert_eq!(prefs.raw(), None);
    Ok(())
}

#[tokio::test]
async fn test8_navigation_skips_empty_weeks() -> Result<(), Box<dyn std::error::Error>> {
    let source = StubSource::new(fixture_matches()?);
    let prefs = MemoryPreferences::default();

    let (model, html) = render(&[("week", "41"), ("action", "next")], &source, &prefs).await?;
    assert_eq!(model.navigator.display_week(), 43);
    assert_eq!(
        texts(&html, "#week-title")?,
        vec!["Van maandag 20 tem zondag 26 oktober"]
    );
    assert_eq!(texts(&html, ".competition-badge")?, vec!["Beker van West-Vlaanderen"]);

    let next = Selector::parse(".next-btn")?;
    let hx_get = html
        .select(&next)
        .next()
        .and_then(|el| el.value().attr("hx-get"))
        .ok_or("next button carries its url")?;
    assert_eq!(
        hx_get,
        format!("games/widget?nonce={NONCE}&show_weeks=4&theme=default&week=43&action=next")
    );

    let (model, _) = render(&[("week", "37"), ("action", "prev")], &source, &prefs).await?;
    assert_eq!(model.navigator.display_week(), 46);
    Ok(())
}

#[tokio::test]
async fn test8_toggle_persists_and_filters() -> Result<(), Box<dyn std::error::Error>> {
    let source = StubSource::new(fixture_matches()?);
    let prefs = MemoryPreferences::default();

    let (model, html) = render(
        &[("week", "41"), ("action", "toggle"), ("team", "ONE")],
        &source,
        &prefs,
    )
    .await?;
    assert!(!model.filter.is_selected("ONE"));
    assert_eq!(texts(&html, ".filter-count")?, vec!["4/5 teams"]);
    assert_eq!(html.select(&Selector::parse(".team-matchup")?).count(), 1);
    assert_eq!(
        prefs.load().map(|s| s.len()),
        Some(4),
        "selection written to the store"
    );

    let (_, html) = render(&[("week", "41"), ("action", "clear")], &source, &prefs).await?;
    assert_eq!(prefs.raw().as_deref(), Some("[]"));
    assert_eq!(
        texts(&html, ".no-games-message h3")?,
        vec!["Geen wedstrijden voor geselecteerde teams"]
    );

    // the unknown team stays visible with nothing selected
    let (_, html) = render(&[("week", "46")], &source, &prefs).await?;
    assert_eq!(html.select(&Selector::parse(".team-matchup")?).count(), 1);
    assert_eq!(texts(&html, ".filter-count")?, vec!["Geen teams"]);
    Ok(())
}

#[tokio::test]
async fn test8_empty_week_and_empty_schedule() -> Result<(), Box<dyn std::error::Error>> {
    let source = StubSource::new(fixture_matches()?);
    let prefs = MemoryPreferences::default();

    // an explicit week is shown as requested, even when empty
    let (_, html) = render(&[("week", "42")], &source, &prefs).await?;
    assert_eq!(texts(&html, ".no-games-message h3")?, vec!["Geen wedstrijden deze week"]);

    let nothing = StubSource::new(vec![common::raw_match(
        "KBBC Oostkamp HSE A",
        "Rivals HSE A",
        "not a date",
        "20.00",
        "",
    )]);
    let (_, html) = render(&[], &nothing, &prefs).await?;
    assert_eq!(texts(&html, ".no-games-message h3")?, vec!["Geen wedstrijden beschikbaar"]);
    assert_eq!(html.select(&Selector::parse(".team-filter")?).count(), 0);
    Ok(())
}

#[tokio::test]
async fn test8_failure_renders_retry() -> Result<(), Box<dyn std::error::Error>> {
    let source = FailingSource::default();
    let prefs = MemoryPreferences::default();
    let cache = MemoryCache::new();
    let (mut model, msg) =
        decode_request_to_model(&query(&[("week", "41")]), fixture_today(), &prefs)?;
    let deps = Deps {
        cache: &cache,
        source: &source,
        preferences: &prefs,
        cache_ttl_seconds: CACHE_TTL_SECONDS,
        tz: &Utc,
        generated_at: Utc::now(),
        nonce: NONCE,
    };

    let result = run_widget(&mut model, msg, &deps).await;
    assert!(result.is_err());
    assert!(model.error.is_some());
    assert!(model.markup.is_none());
    assert_eq!(source.calls(), 1);

    let html = Html::parse_fragment(&render_error(&model, NONCE).into_string());
    assert_eq!(texts(&html, "#error-message p")?, vec![LOAD_ERROR_MESSAGE]);
    let retry = Selector::parse(".retry-btn")?;
    let hx_get = html
        .select(&retry)
        .next()
        .and_then(|el| el.value().attr("hx-get"))
        .ok_or("retry button carries its url")?;
    assert!(hx_get.ends_with("&week=41"));
    Ok(())
}

#[test]
fn test8_commands_wait_for_schedule() -> Result<(), Box<dyn std::error::Error>> {
    let prefs = MemoryPreferences::default();
    let (mut model, msg) =
        decode_request_to_model(&query(&[("action", "seniors")]), fixture_today(), &prefs)?;
    assert!(matches!(msg, Msg::Command(_)));
    assert_eq!(update(&mut model, msg), vec![Effect::LoadSchedule]);
    assert!(model.pending.is_some());

    let bad = decode_request_to_model(&query(&[("action", "explode")]), fixture_today(), &prefs);
    assert!(bad.is_err());
    let no_team = decode_request_to_model(&query(&[("action", "toggle")]), fixture_today(), &prefs);
    assert!(no_team.is_err());
    let bad_week = decode_request_to_model(&query(&[("week", "soon")]), fixture_today(), &prefs);
    assert!(bad_week.is_err());
    Ok(())
}

#[test]
fn test8_index_page_loads_widget() -> Result<(), Box<dyn std::error::Error>> {
    let markup = render_index_template("KBBCO Wedstrijden", NONCE, 2, "dark");
    let html = Html::parse_document(&markup.into_string());

    let container = Selector::parse("#kbbco-games-container")?;
    let el = html.select(&container).next().ok_or("container is rendered")?;
    assert_eq!(el.value().attr("data-theme"), Some("dark"));
    assert_eq!(el.value().attr("data-show-weeks"), Some("2"));
    assert_eq!(el.value().attr("hx-trigger"), Some("load"));
    assert_eq!(el.value().attr("hx-request"), Some(r#"{"timeout":30000}"#));
    assert_eq!(
        el.value().attr("hx-get"),
        Some(format!("games/widget?nonce={NONCE}&show_weeks=2&theme=dark").as_str())
    );
    assert_eq!(texts(&html, "h1")?, vec!["KBBCO Wedstrijden"]);
    Ok(())
}
