use chrono::NaiveDate;
use moonphase::types::{MajorPhase, MoonApiResponse};
use moonphase::usno::{FetchError, PhaseProvider, UsnoClient, events_from_response};
use reqwest::Client;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

const SAMPLE_RESPONSE: &str = r#"{
    "apiversion": "4.0.1",
    "day": 5,
    "month": 1,
    "year": 2024,
    "numphases": 4,
    "phasedata": [
        { "day": 11, "month": 1, "phase": "New Moon", "time": "11:57", "year": 2024 },
        { "day": 18, "month": 1, "phase": "First Quarter", "time": "03:53", "year": 2024 },
        { "day": 25, "month": 1, "phase": "Full Moon", "time": "17:54", "year": 2024 },
        { "day": 2, "month": 2, "phase": "Last Quarter", "time": "23:18", "year": 2024 }
    ]
}"#;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Serves a single canned HTTP response and returns the base URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/api/moon/phases/date", addr)
}

fn local_client(url: String) -> UsnoClient {
    UsnoClient::with_client(Client::builder().no_proxy().build().unwrap(), url)
}

#[test]
fn test_events_from_response() {
    let response: MoonApiResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
    let events = events_from_response(response).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0].date, date(2024, 1, 11));
    assert_eq!(events[0].phase, MajorPhase::NewMoon);
    assert_eq!(events[0].time.as_deref(), Some("11:57"));
    assert_eq!(events[3].date, date(2024, 2, 2));
    assert_eq!(events[3].phase, MajorPhase::LastQuarter);
}

#[test]
fn test_unknown_phase_name_is_rejected() {
    let body = SAMPLE_RESPONSE.replace("Full Moon", "Blue Moon");
    assert!(serde_json::from_str::<MoonApiResponse>(&body).is_err());
}

#[test]
fn test_impossible_date_is_rejected() {
    let body = SAMPLE_RESPONSE.replace(r#""day": 25"#, r#""day": 32"#);
    let response: MoonApiResponse = serde_json::from_str(&body).unwrap();

    match events_from_response(response) {
        Err(FetchError::Payload(msg)) => assert!(msg.contains("2024-1-32")),
        other => panic!("expected payload error, got {:?}", other),
    }
}

#[test]
fn test_query_url() {
    let client = UsnoClient::new("https://aa.usno.navy.mil/api/moon/phases/date".to_string());
    assert_eq!(
        client.query_url(date(2024, 1, 5), 4),
        "https://aa.usno.navy.mil/api/moon/phases/date?date=2024-01-05&nump=4"
    );
}

#[tokio::test]
async fn test_client_fetches_phases() {
    let url = serve_once("200 OK", SAMPLE_RESPONSE).await;
    let client = local_client(url);

    let events = client.phases(date(2024, 1, 5), 4).await.unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[1].phase, MajorPhase::FirstQuarter);
    assert_eq!(events[1].date, date(2024, 1, 18));
}

#[tokio::test]
async fn test_client_reports_error_status() {
    let url = serve_once("400 Bad Request", r#"{"error": "invalid date"}"#).await;
    let client = local_client(url);

    match client.phases(date(2024, 1, 5), 4).await {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 400),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_reports_malformed_body() {
    let url = serve_once("200 OK", r#"{"phasedata": "nope"}"#).await;
    let client = local_client(url);

    assert!(matches!(
        client.phases(date(2024, 1, 5), 4).await,
        Err(FetchError::Payload(_))
    ));
}
