//! OpenWeather "current weather" client.
//!
//! Sends one GET per lookup and turns the answer into a display-ready
//! `WeatherReport`, or a `LookupError` carrying the message to show.

use crate::config::{Units, WeatherConfig};
use crate::widgets::clock::{format_time, UNRENDERABLE_TIME};
use crate::widgets::lookup::{LookupError, LookupSource};
use chrono::{Local, TimeZone};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::Display;

/// Shown when the service fails without saying why
pub const FALLBACK_ERROR: &str = "City not found";

/// Current conditions, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temp: String,
    pub feels: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub icon: String,
    pub icon_url: String,
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
    name: String,
    sys: SysInfo,
    #[serde(default)]
    cod: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct SysInfo {
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Formatting choices applied to a successful payload
#[derive(Debug, Clone)]
pub struct ReportFormat<Tz: TimeZone> {
    pub units: Units,
    pub time_format: String,
    pub icon_url: String,
    pub tz: Tz,
}

impl ReportFormat<Local> {
    pub fn local(config: &WeatherConfig) -> Self {
        Self {
            units: config.units,
            time_format: config.time_format.clone(),
            icon_url: config.icon_url.clone(),
            tz: Local,
        }
    }
}

/// `cod` arrives as a number on success and as a string on errors
fn cod_is_ok(cod: &Option<serde_json::Value>) -> bool {
    match cod {
        None => true,
        Some(serde_json::Value::Number(n)) => n.as_u64() == Some(200),
        Some(serde_json::Value::String(s)) => s == "200",
        Some(_) => false,
    }
}

/// Epoch seconds to time-of-day text in `tz`
pub fn time_of_day<Tz: TimeZone>(epoch_secs: i64, tz: &Tz, format: &str) -> String
where
    Tz::Offset: Display,
{
    tz.timestamp_opt(epoch_secs, 0)
        .single()
        .and_then(|t| format_time(&t, format))
        .unwrap_or_else(|| UNRENDERABLE_TIME.to_string())
}

/// Map an HTTP status and body to a report or a user-facing error
pub fn interpret_response<Tz: TimeZone>(
    status: StatusCode,
    body: &str,
    format: &ReportFormat<Tz>,
) -> Result<WeatherReport, LookupError>
where
    Tz::Offset: Display,
{
    if !status.is_success() {
        return Err(rejection(status.as_u16(), body));
    }

    let payload: CurrentWeather = match serde_json::from_str(body) {
        Ok(payload) => payload,
        // Some failures still come back as 200 with an error body
        Err(e) => match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message: Some(message) }) => {
                return Err(LookupError::Rejected {
                    status: status.as_u16(),
                    message,
                })
            }
            _ => return Err(LookupError::Malformed(format!("Unexpected weather payload: {}", e))),
        },
    };

    if !cod_is_ok(&payload.cod) {
        return Err(rejection(status.as_u16(), body));
    }

    let condition = payload
        .weather
        .first()
        .ok_or_else(|| LookupError::Malformed("Weather payload has no conditions".to_string()))?;

    let units = format.units;
    Ok(WeatherReport {
        city: payload.name,
        country: payload.sys.country,
        temp: format!("{}{}", payload.main.temp, units.temperature_suffix()),
        feels: format!("{}{}", payload.main.feels_like, units.temperature_suffix()),
        description: condition.description.clone(),
        humidity: format!("{}%", payload.main.humidity),
        wind: format!("{}{}", payload.wind.speed, units.speed_suffix()),
        icon: condition.icon.clone(),
        icon_url: format.icon_url.replace("{icon}", &condition.icon),
        sunrise: time_of_day(payload.sys.sunrise, &format.tz, &format.time_format),
        sunset: time_of_day(payload.sys.sunset, &format.tz, &format.time_format),
    })
}

fn rejection(status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());
    LookupError::Rejected { status, message }
}

/// Weather source backed by the OpenWeather HTTP API
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    format: ReportFormat<Local>,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        if config.api_key.is_empty() {
            tracing::warn!("No weather API key configured, lookups will be rejected");
        }
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            format: ReportFormat::local(config),
        }
    }

    async fn request(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.format.units.as_param()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(%status, bytes = body.len(), "Weather response received");

        interpret_response(status, &body, &self.format)
    }
}

/// The request URL carries the API key, so it never reaches the message
fn transport(e: reqwest::Error) -> LookupError {
    LookupError::Transport(e.without_url().to_string())
}

impl LookupSource for OpenWeatherClient {
    type Output = WeatherReport;

    async fn fetch(&self, query: &str) -> Result<WeatherReport, LookupError> {
        self.request(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::Utc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const LONDON: &str = r#"{
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 15, "feels_like": 14.2, "humidity": 72, "pressure": 1012},
        "wind": {"speed": 3.6, "deg": 240},
        "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
        "name": "London",
        "cod": 200
    }"#;

    fn utc_format() -> ReportFormat<Utc> {
        ReportFormat {
            units: Units::Metric,
            time_format: "%H:%M:%S".to_string(),
            icon_url: "https://openweathermap.org/img/wn/{icon}@2x.png".to_string(),
            tz: Utc,
        }
    }

    #[test]
    fn test_success_payload() {
        let report = interpret_response(StatusCode::OK, LONDON, &utc_format()).unwrap();
        assert_eq!(report.temp, "15°C");
        assert_eq!(report.feels, "14.2°C");
        assert_eq!(report.humidity, "72%");
        assert_eq!(report.wind, "3.6 m/s");
        assert_eq!(report.description, "broken clouds");
        assert_eq!(report.city, "London");
        assert_eq!(report.country, "GB");
        assert_eq!(report.icon_url, "https://openweathermap.org/img/wn/04d@2x.png");
        assert_eq!(report.sunrise, "22:13:20");
        assert_eq!(report.sunset, "06:33:20");
    }

    #[test]
    fn test_imperial_suffixes() {
        let format = ReportFormat {
            units: Units::Imperial,
            ..utc_format()
        };
        let report = interpret_response(StatusCode::OK, LONDON, &format).unwrap();
        assert_eq!(report.temp, "15°F");
        assert_eq!(report.wind, "3.6 mph");
    }

    #[test]
    fn test_not_found_uses_service_message() {
        let err = interpret_response(
            StatusCode::NOT_FOUND,
            r#"{"cod":"404","message":"city not found"}"#,
            &utc_format(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LookupError::Rejected {
                status: 404,
                message: "city not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn test_failure_without_message_falls_back() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "<html>oops</html>", &utc_format())
            .unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[test]
    fn test_error_cod_on_ok_status() {
        let err = interpret_response(
            StatusCode::OK,
            r#"{"cod":"401","message":"Invalid API key"}"#,
            &utc_format(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = interpret_response(StatusCode::OK, "not json", &utc_format()).unwrap_err();
        assert!(matches!(err, LookupError::Malformed(_)));

        let no_conditions = LONDON.replace(
            r#"[{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]"#,
            "[]",
        );
        let err = interpret_response(StatusCode::OK, &no_conditions, &utc_format()).unwrap_err();
        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[test]
    fn test_unrenderable_time_format_still_reports() {
        let format = ReportFormat {
            time_format: "%H:%Q".to_string(),
            ..utc_format()
        };
        let report = interpret_response(StatusCode::OK, LONDON, &format).unwrap();
        assert_eq!(report.temp, "15°C");
        assert_eq!(report.sunrise, UNRENDERABLE_TIME);
        assert_eq!(report.sunset, UNRENDERABLE_TIME);
    }

    #[tokio::test]
    async fn test_controller_resolves_with_bad_time_format() {
        use crate::widgets::LookupController;
        use tokio::sync::mpsc;

        let (endpoint, server) = serve_once("200 OK", LONDON).await;
        let mut config = Config::default().weather;
        config.endpoint = endpoint;
        config.time_format = "%H:%Q".to_string();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut lookup = LookupController::new(OpenWeatherClient::new(&config), tx);
        lookup.set_query("London");
        assert!(lookup.trigger());

        let resolved = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("resolution arrives")
            .expect("channel open");
        lookup.resolve(resolved);
        server.await.unwrap();

        assert!(!lookup.state().is_loading());
        assert_eq!(lookup.state().result().map(|r| r.city.as_str()), Some("London"));
        assert!(lookup.state().can_trigger());
    }

    /// Serve one canned HTTP response and hand back the request line
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}/data/2.5/weather", addr), handle)
    }

    fn client_for(endpoint: String) -> OpenWeatherClient {
        let mut config = Config::default().weather;
        config.endpoint = endpoint;
        config.api_key = "secret".to_string();
        OpenWeatherClient::new(&config)
    }

    #[tokio::test]
    async fn test_client_sends_query_parameters() {
        let (endpoint, server) = serve_once("200 OK", LONDON).await;
        let report = client_for(endpoint).fetch("New York").await.unwrap();
        assert_eq!(report.temp, "15°C");

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /data/2.5/weather?"), "{request_line}");
        assert!(request_line.contains("q=New+York"), "{request_line}");
        assert!(request_line.contains("appid=secret"), "{request_line}");
        assert!(request_line.contains("units=metric"), "{request_line}");
    }

    #[tokio::test]
    async fn test_client_maps_404() {
        let (endpoint, server) =
            serve_once("404 Not Found", r#"{"cod":"404","message":"city not found"}"#).await;
        let err = client_for(endpoint).fetch("Atlantis").await.unwrap_err();
        assert_eq!(err.to_string(), "city not found");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_transport_error_hides_key() {
        // Bind then drop to get a port nothing listens on
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let err = client_for(format!("http://{}/weather", addr))
            .fetch("Paris")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        assert!(!err.to_string().contains("secret"));
    }
}
