//! Plain-text rendering of the weather screen for terminals.

use std::fmt::{self, Display, Formatter};

use hava_weather::{ForecastEntry, IconKey, LocationProvider};

use crate::models::weather_model::WeatherScreen;

/// Terminal glyph for an icon key.
pub fn glyph(icon: IconKey) -> &'static str {
    match icon.as_str() {
        "weather-sunny" => "☀",
        "weather-partly-cloudy" => "⛅",
        "weather-cloudy" => "☁",
        "weather-rainy" => "🌦",
        "weather-pouring" => "🌧",
        "weather-snowy" => "❄",
        "weather-fog" => "🌫",
        "weather-windy" => "🌬",
        _ => "·",
    }
}

/// Borrowing view that formats a screen.
pub struct ScreenView<'a, P>(pub &'a WeatherScreen<P>);

impl<P: LocationProvider + 'static> Display for ScreenView<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let screen = self.0;
        let data = screen.weather();
        let current = &data.current;

        let query = if screen.search_query().is_empty() {
            "Şehir ara..."
        } else {
            screen.search_query()
        };
        writeln!(f, "[ {} ]  (⌖)", query)?;
        writeln!(f)?;

        writeln!(f, "📍 {}", screen.city())?;
        writeln!(f, "{}°", current.temperature)?;
        writeln!(f, "{}", current.condition)?;
        writeln!(f, "Hissedilen: {}°", current.feels_like)?;
        writeln!(
            f,
            "💧 {}%    🌬 {} km/s",
            current.humidity, current.wind_speed
        )?;
        writeln!(f)?;

        writeln!(f, "Saatlik Tahmin")?;
        let hourly: Vec<String> = data
            .hourly
            .iter()
            .map(|h| format!("{} {} {}°", h.label(), glyph(h.icon()), h.temperature()))
            .collect();
        writeln!(f, "{}", hourly.join("  |  "))?;
        writeln!(f)?;

        writeln!(f, "{} Günlük Tahmin", data.daily.len())?;
        for day in &data.daily {
            writeln!(
                f,
                "{:<10} {}  {}° / {}°",
                day.label(),
                glyph(day.icon()),
                day.high,
                day.low
            )?;
        }
        writeln!(f)?;

        let info = &data.info;
        writeln!(f, "UV İndeksi: {}", info.uv_index)?;
        writeln!(f, "Görüş: {} km", info.visibility_km)?;
        writeln!(f, "Gün Doğumu: {}", info.sunrise.format("%H:%M"))?;
        write!(f, "Gün Batımı: {}", info.sunset.format("%H:%M"))?;

        if screen.is_loading() {
            write!(f, "\n\n… Konum alınıyor...")?;
        }
        Ok(())
    }
}

/// Render the whole screen to a string.
pub fn render<P: LocationProvider + 'static>(screen: &WeatherScreen<P>) -> String {
    ScreenView(screen).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hava_core::UiConfig;
    use hava_weather::{
        icon_for, mock_weather, Coordinates, LocationError, LocationResolver, PlaceCandidate,
    };
    use std::sync::Arc;

    struct NoLocation;

    #[async_trait]
    impl LocationProvider for NoLocation {
        async fn request_permission(&self) -> Result<bool, LocationError> {
            Ok(false)
        }

        async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::PositionUnavailable)
        }

        async fn reverse_geocode(
            &self,
            _coords: Coordinates,
        ) -> Result<Vec<PlaceCandidate>, LocationError> {
            Ok(Vec::new())
        }
    }

    fn screen() -> WeatherScreen<NoLocation> {
        WeatherScreen::new(
            &UiConfig::default(),
            mock_weather().unwrap(),
            Arc::new(LocationResolver::new(NoLocation)),
        )
    }

    #[test]
    fn renders_all_sections() {
        let out = render(&screen());
        assert!(out.contains("📍 İstanbul"));
        assert!(out.contains("23°"));
        assert!(out.contains("Hissedilen: 25°"));
        assert!(out.contains("65%"));
        assert!(out.contains("13 km/s"));
        assert!(out.contains("Saatlik Tahmin"));
        assert!(out.contains("12:00 ☀ 23°"));
        assert!(out.contains("5 Günlük Tahmin"));
        assert!(out.contains("26° / 18°"));
        assert!(out.contains("Gün Doğumu: 06:23"));
        assert!(out.contains("Gün Batımı: 19:45"));
        assert!(!out.contains("Konum alınıyor"));
    }

    #[test]
    fn renders_search_text_and_new_city() {
        let mut s = screen();
        s.set_search_query("Mardin");
        assert!(render(&s).contains("[ Mardin ]"));
        s.submit_search();
        let out = render(&s);
        assert!(out.contains("📍 Mardin"));
        assert!(out.contains("[ Şehir ara... ]"));
    }

    #[test]
    fn glyph_falls_back_for_unknown_keys() {
        assert_eq!(glyph(icon_for("Güneşli")), "☀");
        assert_eq!(glyph(IconKey::new("weather-hail")), "·");
    }
}
