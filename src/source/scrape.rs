// Copyright 2026-present The seas-alerts developers
// SPDX-License-Identifier: Apache-2.0

//! Live scraping adapter for the Harvard SEAS events calendar.
//!
//! The calendar is a Drupal/Localist site with no public API, so this module
//! is a chain of selector fallbacks over whatever the theme currently emits.
//! Events are `.em-card` elements; titles live in `h3.em-card_title`,
//! date/location in `p.em-card_event-text`. The card description is usually a
//! teaser, so each event's detail page is fetched to upgrade the description
//! (and, when present, a more precise time and location).
//!
//! Error posture, boundary-style: if the calendar itself cannot be fetched,
//! log a warning and return an empty batch rather than failing the run. A
//! card missing a field gets a `"TBD"` placeholder. A detail page that fails
//! to load is ignored silently - the card data stands.
//!
//! None of this tolerance leaks into the ranking core, which only ever sees
//! fully-populated [`Event`] records.

use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::source::{EventSource, LoadError};
use crate::types::Event;

const SEAS_BASE_URL: &str = "https://events.seas.harvard.edu";

/// Calendar page fetch budget. Drupal sites can be slow.
const CALENDAR_TIMEOUT: Duration = Duration::from_secs(15);

/// Detail page fetch budget, shorter to fail fast across many events.
const DETAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// Scrapes the SEAS calendar and its per-event detail pages.
#[derive(Debug, Clone)]
pub struct SeasCalendarSource {
    base: Url,
    /// Maximum number of event cards to process.
    limit: usize,
}

/// All selectors parsed once. Each is a fallback chain ordered from the
/// current theme's markup to progressively more generic guesses.
struct Selectors {
    card: Selector,
    title_link: Selector,
    heading: Selector,
    time: Selector,
    location: Selector,
    location_fallback: Selector,
    description: Selector,
    detail_body: Selector,
    detail_time: Selector,
    detail_location: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Static strings; a parse failure here is a typo in this file.
        let sel = |s: &str| Selector::parse(s).expect("static selector");
        Selectors {
            card: sel(".em-card, article, .views-row, .event"),
            title_link: sel("h3.em-card_title a, h3 a, h2 a"),
            heading: sel("h3, h2"),
            time: sel("p.em-card_event-text time, p.em-card_event-text, time"),
            location: sel("p.em-card_event-text a[href]"),
            location_fallback: sel(".location"),
            description: sel(".summary, .field--name-body, .description, p"),
            detail_body: sel(
                ".field--name-body, .node__content, .content, .event-description, .pane-content",
            ),
            detail_time: sel("time"),
            detail_location: sel(".location, .event-location, .field--name-field-location"),
        }
    }
}

impl SeasCalendarSource {
    pub fn new(limit: usize) -> Self {
        SeasCalendarSource {
            // The constant is known-valid; parsing it cannot fail.
            base: Url::parse(SEAS_BASE_URL).expect("static base URL"),
            limit,
        }
    }

    /// Fetch one page as text, or `None` on any transport/HTTP failure.
    fn get(client: &reqwest::blocking::Client, url: &str) -> Option<String> {
        let resp = client.get(url).send().ok()?;
        resp.error_for_status().ok()?.text().ok()
    }

    /// Follow an event's detail page and upgrade description/time/location
    /// in place. Failures leave the card-level values untouched.
    fn upgrade_from_detail(
        &self,
        client: &reqwest::blocking::Client,
        selectors: &Selectors,
        link: &str,
        description: &mut String,
        start_time: &mut String,
        location: &mut String,
    ) {
        let Some(body) = Self::get(client, link) else {
            log::debug!("detail page fetch failed, keeping card data: {}", link);
            return;
        };
        let doc = Html::parse_document(&body);

        if let Some(el) = doc.select(&selectors.detail_body).next() {
            let text = collapse_text(el);
            if !text.is_empty() {
                *description = text;
            }
        }
        if let Some(el) = doc.select(&selectors.detail_time).next() {
            let text = collapse_text(el);
            if !text.is_empty() {
                *start_time = text;
            }
        }
        if let Some(el) = doc.select(&selectors.detail_location).next() {
            let text = collapse_text(el);
            if !text.is_empty() {
                *location = text;
            }
        }
    }

    fn parse_card(
        &self,
        client: &reqwest::blocking::Client,
        selectors: &Selectors,
        card: ElementRef<'_>,
    ) -> Option<Event> {
        let (title, link) = match card.select(&selectors.title_link).next() {
            Some(el) => {
                let title = collapse_text(el);
                // Relative hrefs ("/event/123") become absolute.
                let link = el
                    .value()
                    .attr("href")
                    .and_then(|href| self.base.join(href).ok())
                    .map(String::from);
                (title, link)
            }
            // No linked title: take a bare heading or skip the card.
            None => {
                let heading = card.select(&selectors.heading).next()?;
                (collapse_text(heading), None)
            }
        };
        if title.is_empty() {
            return None;
        }

        let mut start_time = card
            .select(&selectors.time)
            .next()
            .map(collapse_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "TBD".to_string());

        let mut location = card
            .select(&selectors.location)
            .next()
            .or_else(|| card.select(&selectors.location_fallback).next())
            .map(collapse_text)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "TBD".to_string());

        let mut description = card
            .select(&selectors.description)
            .next()
            .map(collapse_text)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| title.clone());

        if let Some(link) = &link {
            self.upgrade_from_detail(
                client,
                selectors,
                link,
                &mut description,
                &mut start_time,
                &mut location,
            );
        }

        Some(Event {
            title,
            description,
            start_time,
            location,
            organization: "Harvard SEAS".to_string(),
            link: link.unwrap_or_default(),
        })
    }
}

impl EventSource for SeasCalendarSource {
    /// Scrape the calendar page, then each event's detail page.
    ///
    /// Degrades to an empty batch (with a logged warning) when the calendar
    /// itself is unreachable; never fails the run for transport errors.
    fn fetch(&self) -> Result<Vec<Event>, LoadError> {
        let selectors = Selectors::new();

        let calendar_url = match self.base.join("/calendar") {
            Ok(url) => url,
            Err(e) => {
                log::warn!("calendar URL construction failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let client = match reqwest::blocking::Client::builder()
            .timeout(CALENDAR_TIMEOUT)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                log::warn!("HTTP client construction failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let Some(body) = Self::get(&client, calendar_url.as_str()) else {
            log::warn!("calendar fetch failed: {}", calendar_url);
            return Ok(Vec::new());
        };

        // Detail pages get their own shorter budget.
        let detail_client = reqwest::blocking::Client::builder()
            .timeout(DETAIL_TIMEOUT)
            .build()
            .unwrap_or_else(|_| client.clone());

        let doc = Html::parse_document(&body);
        let events: Vec<Event> = doc
            .select(&selectors.card)
            .take(self.limit)
            .filter_map(|card| self.parse_card(&detail_client, &selectors, card))
            .collect();

        log::info!("scraped {} events from {}", events.len(), SEAS_BASE_URL);
        Ok(events)
    }
}

/// Element text with whitespace collapsed, the `get_text(" ", strip=True)`
/// of this codebase.
fn collapse_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}
