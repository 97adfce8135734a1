//! NASA event data client.
//!
//! Resolves calendar dates to non-empty lists of normalized astronomical
//! events, abstracting over an unreliable upstream. Three lookups are
//! attempted per date — the Astronomy Picture of the Day, the near-Earth
//! object feed, and DONKI space weather notifications — concurrently and
//! failure-isolated: a dead endpoint never cancels the others, and a date
//! for which everything fails still yields a deterministic fallback record.
//!
//! No operation on [`NasaClient`] returns an error. Transport failures are
//! retried, then logged and absorbed; the caller always receives a valid
//! [`DayEvents`] whose `events` list has at least one entry.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Days, Local, NaiveDate};
use parking_lot::Mutex;
use tracing::{debug, warn};

pub mod config;
pub mod normalize;
pub mod response;
pub mod retry;
pub mod transport;

pub use config::NasaConfig;
pub use transport::{HttpTransport, Transport, TransportError};

use crate::models::{AstronomicalEvent, ConnectionStatus, DayEvents};
use response::{ApodResponse, DonkiNotification, NearEarthObject, NeoFeedResponse};
use retry::with_retry;

/// Near-Earth objects normalized per date, at most.
const MAX_NEO_EVENTS: usize = 2;

/// Space weather notifications normalized per date, at most.
const MAX_WEATHER_EVENTS: usize = 1;

/// Days fetched per batch by [`NasaClient::events_for_month`].
const MONTH_BATCH_SIZE: u32 = 5;

/// Pause between month batches, respecting upstream rate limits.
const INTER_BATCH_DELAY: Duration = Duration::from_secs(1);

/// Client for NASA's public astronomy APIs.
pub struct NasaClient {
    config: NasaConfig,
    transport: Arc<dyn Transport>,
    status: Mutex<ConnectionStatus>,
}

impl NasaClient {
    /// Create a client with the production HTTP transport.
    pub fn new(config: NasaConfig) -> Result<Self, TransportError> {
        let transport = Arc::new(HttpTransport::new(config.request_timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over an injected transport (used by tests).
    pub fn with_transport(config: NasaConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            status: Mutex::new(ConnectionStatus::Pending),
        }
    }

    /// Connectivity derived from the most recent completed fetch.
    pub fn status(&self) -> ConnectionStatus {
        *self.status.lock()
    }

    /// Calendar year this client resolves date keys within.
    pub fn year(&self) -> i32 {
        self.config.year
    }

    /// Resolve an `MM-DD` date key to its events.
    ///
    /// Never fails and never returns an empty list: if all three upstream
    /// lookups yield nothing, the result carries exactly one deterministic
    /// fallback record.
    pub async fn events_for_date(&self, date_key: &str) -> DayEvents {
        let full_date = format!("{:04}-{date_key}", self.config.year);

        let (apod, neos, notifications) = tokio::join!(
            self.fetch_apod(&full_date),
            self.fetch_neos(&full_date),
            self.fetch_notifications(),
        );

        let mut events: Vec<AstronomicalEvent> = Vec::new();

        if let Some(apod) = apod {
            events.push(normalize::apod_event(&apod, date_key));
        }
        if let Some(neos) = neos {
            events.extend(neos.iter().take(MAX_NEO_EVENTS).map(normalize::neo_event));
        }
        if let Some(notifications) = notifications {
            events.extend(
                notifications
                    .iter()
                    .take(MAX_WEATHER_EVENTS)
                    .enumerate()
                    .map(|(i, n)| normalize::notification_event(n, date_key, i)),
            );
        }

        let degraded = events.is_empty();
        if degraded {
            warn!(date = %full_date, "all upstream lookups failed, substituting fallback event");
            events.push(normalize::fallback_event(date_key));
        } else {
            debug!(date = %full_date, count = events.len(), "resolved events");
        }

        *self.status.lock() = if degraded {
            ConnectionStatus::Degraded
        } else {
            ConnectionStatus::Connected
        };

        DayEvents {
            date: full_date,
            events,
        }
    }

    /// Events for the current local date.
    pub async fn todays_events(&self) -> DayEvents {
        let today = Local::now().date_naive();
        self.events_for_date(&date_key(today)).await
    }

    /// Events for the next 7 calendar days starting today, in order.
    pub async fn upcoming_events(&self) -> Vec<DayEvents> {
        let today = Local::now().date_naive();
        let mut days = Vec::with_capacity(7);
        for offset in 0..7 {
            let date = today + Days::new(offset);
            days.push(self.events_for_date(&date_key(date)).await);
        }
        days
    }

    /// Events for every day of `month` in `year`, in day order.
    ///
    /// Requests are issued in batches of [`MONTH_BATCH_SIZE`] concurrent
    /// days with a [`INTER_BATCH_DELAY`] pause between batches. The pacing
    /// is deliberate backpressure against upstream rate limits; do not
    /// collapse it into a single concurrent burst.
    pub async fn events_for_month(&self, month: u32, year: i32) -> Vec<DayEvents> {
        let total_days = days_in_month(year, month);
        let mut results = Vec::with_capacity(total_days as usize);

        let mut day = 1;
        while day <= total_days {
            let batch_end = (day + MONTH_BATCH_SIZE - 1).min(total_days);
            let batch = (day..=batch_end).map(|d| {
                let key = format!("{month:02}-{d:02}");
                async move { self.events_for_date(&key).await }
            });
            results.extend(futures::future::join_all(batch).await);

            if batch_end < total_days {
                tokio::time::sleep(INTER_BATCH_DELAY).await;
            }
            day = batch_end + 1;
        }

        results
    }

    async fn fetch_apod(&self, full_date: &str) -> Option<ApodResponse> {
        let url = self.config.apod_url(full_date);
        self.lookup::<ApodResponse>("APOD", &url).await
    }

    async fn fetch_neos(&self, full_date: &str) -> Option<Vec<NearEarthObject>> {
        let url = self.config.neo_feed_url(full_date, full_date);
        let mut feed = self.lookup::<NeoFeedResponse>("NEO feed", &url).await?;
        Some(feed.near_earth_objects.remove(full_date).unwrap_or_default())
    }

    async fn fetch_notifications(&self) -> Option<Vec<DonkiNotification>> {
        let url = self.config.donki_notifications_url();
        self.lookup::<Vec<DonkiNotification>>("DONKI", &url).await
    }

    /// One retried, failure-absorbing upstream lookup.
    async fn lookup<T: serde::de::DeserializeOwned>(&self, label: &str, url: &str) -> Option<T> {
        let value = with_retry(label, self.config.max_attempts, self.config.retry_delay, || {
            self.transport.get_json(url)
        })
        .await;

        match value {
            Ok(value) => match serde_json::from_value::<T>(value) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    warn!(%err, "{label} returned an unexpected shape, skipping");
                    None
                }
            },
            Err(err) => {
                warn!(%err, "{label} unavailable after retries, skipping");
                None
            }
        }
    }
}

/// `MM-DD` key for a date.
fn date_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// Number of days in `month` of `year`; 0 when the month is out of range.
fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 0,
    }
}
