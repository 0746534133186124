//! Screen state for the single weather screen.
//!
//! Owns everything the view shows (city label, search box text, loading
//! overlay, weather bundle, pending notices) and drives the location
//! service. Rendering reads it; nothing else mutates it.

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use hava_core::{AppError, OpState, UiConfig};
use hava_weather::{
    ForecastEntry, IconKey, LocationProvider, LocationResolver, PlaceName, WeatherData,
};

use crate::services::location_service::{self, LocateError, LocationServiceMessage};

/// One-shot message for the user (replaces a modal alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

pub struct WeatherScreen<P> {
    city: String,
    search_query: String,
    op_state: OpState,
    weather: WeatherData,
    notices: VecDeque<Notice>,
    resolver: Arc<LocationResolver<P>>,
    tx: Sender<LocationServiceMessage>,
    rx: Receiver<LocationServiceMessage>,
}

impl<P: LocationProvider + 'static> WeatherScreen<P> {
    pub fn new(ui: &UiConfig, weather: WeatherData, resolver: Arc<LocationResolver<P>>) -> Self {
        let (tx, rx) = channel();
        Self {
            city: ui.default_city.clone(),
            search_query: String::new(),
            op_state: OpState::Idle,
            weather,
            notices: VecDeque::new(),
            resolver,
            tx,
            rx,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// True while the loading overlay is shown.
    pub fn is_loading(&self) -> bool {
        self.op_state.is_busy()
    }

    pub fn weather(&self) -> &WeatherData {
        &self.weather
    }

    pub fn pending_notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Drain notices in the order they were raised.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Relabel the screen with the searched city. Blank queries are ignored.
    /// No weather is fetched; the bundle stays the same.
    pub fn submit_search(&mut self) -> bool {
        let city = self.search_query.trim().to_string();
        if city.is_empty() {
            return false;
        }

        tracing::info!("City changed by search: {}", city);
        self.notices.push_back(Notice::new(
            "Şehir Değiştirildi",
            format!("{} için hava durumu gösteriliyor.", city),
        ));
        self.city = city;
        self.search_query.clear();
        true
    }

    /// Start a device-location lookup. Returns false if one is already running.
    pub fn request_location(&mut self) -> bool {
        if !self.op_state.can_start_locate() {
            tracing::debug!("Location request ignored: lookup already running");
            return false;
        }

        self.op_state = OpState::Locating;
        location_service::request_locate(&self.tx, self.resolver.clone());
        true
    }

    /// Apply any finished background work. Returns true if state changed.
    pub fn poll_channel(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
            changed = true;
        }
        changed
    }

    /// Block until the running lookup reports back or `wait` elapses.
    /// Returns false on timeout or if no lookup is running.
    ///
    /// On timeout the loading overlay is dropped and an error notice raised.
    /// The lookup itself keeps running; if it reports back later,
    /// `poll_channel` still applies the result.
    pub fn wait_for_location(&mut self, wait: Duration) -> bool {
        if !self.is_loading() {
            return false;
        }
        match self.rx.recv_timeout(wait) {
            Ok(msg) => {
                self.handle_message(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!("No location result within {:?}", wait);
                self.op_state = self.op_state.on_locate_done();
                self.notices
                    .push_back(Notice::new("Hata", "Konum alınamadı: zaman aşımı."));
                false
            }
            Err(RecvTimeoutError::Disconnected) => {
                self.op_state = self.op_state.on_locate_done();
                false
            }
        }
    }

    fn handle_message(&mut self, msg: LocationServiceMessage) {
        match msg {
            LocationServiceMessage::LocateDone(result) => self.apply_locate_result(result),
        }
    }

    /// Fold a lookup outcome into the screen.
    ///
    /// A found city and the unknown-location placeholder take the same path:
    /// the label changes and the user is told which place is in use. Failures
    /// leave the label alone and raise an error notice.
    pub fn apply_locate_result(&mut self, result: Result<PlaceName, LocateError>) {
        self.op_state = self.op_state.on_locate_done();

        match result {
            Ok(place) => {
                self.notices.push_back(Notice::new(
                    "Konum Bulundu",
                    format!("{} konumu kullanılıyor.", place),
                ));
                self.city = place.into_string();
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::error!("Location lookup failed: {}", err);
                self.notices
                    .push_back(Notice::new(err.title(), err.user_message()));
            }
        }
    }

    /// Icon for each hourly entry, in order.
    pub fn hourly_icons(&self) -> Vec<IconKey> {
        self.weather.hourly.iter().map(ForecastEntry::icon).collect()
    }

    /// Icon for each daily entry, in order.
    pub fn daily_icons(&self) -> Vec<IconKey> {
        self.weather.daily.iter().map(ForecastEntry::icon).collect()
    }

    /// Upper bound on one lookup, for callers that block on it.
    pub fn locate_budget(&self) -> Duration {
        let t = self.resolver.timeouts();
        t.position + t.geocode + Duration::from_secs(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hava_weather::{mock_weather, Coordinates, LocationError, PlaceCandidate};

    struct StubProvider {
        granted: bool,
        candidates: Vec<PlaceCandidate>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl LocationProvider for StubProvider {
        async fn request_permission(&self) -> Result<bool, LocationError> {
            Ok(self.granted)
        }

        async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(Coordinates::new(37.0, 35.32))
        }

        async fn reverse_geocode(
            &self,
            _coords: Coordinates,
        ) -> Result<Vec<PlaceCandidate>, LocationError> {
            Ok(self.candidates.clone())
        }
    }

    fn screen(granted: bool, candidates: Vec<PlaceCandidate>) -> WeatherScreen<StubProvider> {
        crate::bridge::init_runtime().unwrap();
        let resolver = Arc::new(LocationResolver::new(StubProvider {
            granted,
            candidates,
            delay: None,
        }));
        WeatherScreen::new(&UiConfig::default(), mock_weather().unwrap(), resolver)
    }

    #[test]
    fn starts_on_default_city() {
        let s = screen(true, vec![]);
        assert_eq!(s.city(), "İstanbul");
        assert!(!s.is_loading());
        assert_eq!(s.pending_notices().count(), 0);
    }

    #[test]
    fn search_trims_and_relabels() {
        let mut s = screen(true, vec![]);
        s.set_search_query("  Eskişehir ");
        assert!(s.submit_search());

        assert_eq!(s.city(), "Eskişehir");
        assert_eq!(s.search_query(), "");
        assert_eq!(
            s.take_notices(),
            vec![Notice::new(
                "Şehir Değiştirildi",
                "Eskişehir için hava durumu gösteriliyor."
            )]
        );
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut s = screen(true, vec![]);
        s.set_search_query("   ");
        assert!(!s.submit_search());
        assert_eq!(s.city(), "İstanbul");
        assert_eq!(s.search_query(), "   ");
        assert!(s.take_notices().is_empty());
    }

    #[test]
    fn search_keeps_weather_bundle() {
        let mut s = screen(true, vec![]);
        let before = s.weather().clone();
        s.set_search_query("Van");
        s.submit_search();
        assert_eq!(s.weather(), &before);
    }

    #[test]
    fn location_lookup_sets_city() {
        let mut s = screen(true, vec![PlaceCandidate::locality("Adana")]);
        assert!(s.request_location());
        assert!(s.is_loading());

        assert!(s.wait_for_location(Duration::from_secs(5)));

        assert!(!s.is_loading());
        assert_eq!(s.city(), "Adana");
        assert_eq!(
            s.take_notices(),
            vec![Notice::new("Konum Bulundu", "Adana konumu kullanılıyor.")]
        );
    }

    #[test]
    fn no_place_found_uses_placeholder() {
        let mut s = screen(true, vec![]);
        s.request_location();
        assert!(s.wait_for_location(Duration::from_secs(5)));
        assert_eq!(s.city(), PlaceName::UNKNOWN);
    }

    #[test]
    fn denied_permission_keeps_city_and_notifies() {
        let mut s = screen(false, vec![PlaceCandidate::locality("Adana")]);
        s.request_location();
        assert!(s.wait_for_location(Duration::from_secs(5)));

        assert_eq!(s.city(), "İstanbul");
        assert!(!s.is_loading());
        assert_eq!(
            s.take_notices(),
            vec![Notice::new("İzin Gerekli", "Konum izni verilmedi.")]
        );
    }

    #[test]
    fn second_request_while_locating_is_rejected() {
        let mut s = screen(true, vec![]);
        s.op_state = OpState::Locating;
        assert!(!s.request_location());
    }

    #[test]
    fn busy_result_clears_loading() {
        let mut s = screen(true, vec![]);
        s.op_state = OpState::Locating;
        s.apply_locate_result(Err(LocateError::Location(LocationError::Busy)));
        assert!(!s.is_loading());
        assert_eq!(s.take_notices()[0].title, "Hata");
    }

    #[test]
    fn wait_without_request_returns_false() {
        let mut s = screen(true, vec![]);
        assert!(!s.wait_for_location(Duration::from_millis(10)));
        assert!(!s.poll_channel());
    }

    #[test]
    fn slow_lookup_times_out_and_clears_loading() {
        crate::bridge::init_runtime().unwrap();
        let resolver = Arc::new(LocationResolver::new(StubProvider {
            granted: true,
            candidates: vec![PlaceCandidate::locality("Adana")],
            delay: Some(Duration::from_secs(2)),
        }));
        let mut s = WeatherScreen::new(&UiConfig::default(), mock_weather().unwrap(), resolver);

        assert!(s.request_location());
        assert!(!s.wait_for_location(Duration::from_millis(50)));

        assert!(!s.is_loading());
        assert_eq!(s.city(), "İstanbul");
        assert_eq!(
            s.take_notices(),
            vec![Notice::new("Hata", "Konum alınamadı: zaman aşımı.")]
        );
    }

    #[test]
    fn icons_follow_conditions() {
        let s = screen(true, vec![]);
        let daily: Vec<_> = s.daily_icons().iter().map(|i| i.as_str()).collect();
        assert_eq!(
            daily,
            vec![
                "weather-sunny",
                "weather-partly-cloudy",
                "weather-cloudy",
                "weather-rainy",
                "weather-pouring",
            ]
        );
        assert_eq!(s.hourly_icons().len(), 6);
    }

    #[test]
    fn locate_budget_covers_both_timeouts() {
        let s = screen(true, vec![]);
        assert_eq!(s.locate_budget(), Duration::from_secs(16));
    }
}
