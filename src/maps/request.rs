use crate::maps::MapsError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

pub fn endpoint_url(base_url: &str, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, MapsError> {
    let url = Url::parse_with_params(&format!("{}/{}", base_url.trim_end_matches('/'), endpoint), params)?;
    Ok(url)
}

/// Issues a GET and parses the body as `T`. An empty body is reported separately from a malformed one.
///
/// Transport errors are stripped of their URL as the query carries the API key.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, MapsError> {
    debug!(endpoint = url.path(), "Sending request");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(reqwest::Error::without_url)?;
    let body = response.text().await.map_err(reqwest::Error::without_url)?;

    if body.trim().is_empty() {
        return Err(MapsError::EmptyResponse);
    }

    Ok(serde_json::from_str::<T>(&body)?)
}

/// Rejects API-level failures such as `REQUEST_DENIED`; an absent status or `ZERO_RESULTS` passes.
pub fn check_status(status: Option<&str>, error_message: Option<&str>) -> Result<(), MapsError> {
    match status {
        None | Some(STATUS_OK) | Some(STATUS_ZERO_RESULTS) => Ok(()),
        Some(status) => Err(MapsError::ApiStatus {
            status: status.to_string(),
            message: error_message.unwrap_or("no error message").to_string(),
        }),
    }
}

/// Unwraps a field that is only optional so API errors without it still reach `check_status`.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, MapsError> {
    value.ok_or_else(|| MapsError::MalformedResponse(<serde_json::Error as serde::de::Error>::missing_field(field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn endpoint_url_encodes_the_parameters() {
        let url = endpoint_url("https://maps.url/api/", "geocode/json", &[("address", "Main St & 5th"), ("key", "k")]).unwrap();

        assert_eq!(url.as_str(), "https://maps.url/api/geocode/json?address=Main+St+%26+5th&key=k");
    }

    #[test]
    fn endpoint_url_rejects_a_relative_base_url() {
        let result = endpoint_url("maps.url/api", "geocode/json", &[]);

        assert!(matches!(result, Err(MapsError::InvalidUrl(url::ParseError::RelativeUrlWithoutBase))));
    }

    #[rstest]
    #[case::absent(None)]
    #[case::ok(Some("OK"))]
    #[case::zero_results(Some("ZERO_RESULTS"))]
    fn check_status_accepts_successful_statuses(#[case] status: Option<&str>) {
        assert!(check_status(status, None).is_ok());
    }

    #[test]
    fn check_status_reports_denied_requests() {
        let result = check_status(Some("REQUEST_DENIED"), Some("The provided API key is invalid."));

        assert_eq!(
            result.unwrap_err().to_string(),
            "maps API responded with status REQUEST_DENIED: The provided API key is invalid."
        );
    }

    #[test]
    fn required_reports_a_missing_field_as_malformed() {
        let error = required::<Vec<u8>>(None, "results").unwrap_err();

        assert!(matches!(error, MapsError::MalformedResponse(_)));
        assert_eq!(error.to_string(), "unexpected JSON structure: missing field `results`");
    }

    #[tokio::test]
    async fn get_json_reports_an_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/empty").with_status(200).with_body("").create_async().await;

        let url = Url::parse(&format!("{}/empty", server.url())).unwrap();
        let result = get_json::<serde_json::Value>(&Client::new(), url).await;

        mock.assert();
        assert!(matches!(result, Err(MapsError::EmptyResponse)));
    }

    #[tokio::test]
    async fn get_json_reports_http_errors_as_transport_errors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/broken").with_status(500).create_async().await;

        let url = Url::parse(&format!("{}/broken", server.url())).unwrap();
        let result = get_json::<serde_json::Value>(&Client::new(), url).await;

        mock.assert();
        assert!(matches!(result, Err(MapsError::Transport(_))));
    }

    #[tokio::test]
    async fn get_json_keeps_the_api_key_out_of_transport_errors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/geocode/json")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let url = endpoint_url(&server.url(), "geocode/json", &[("address", "x"), ("key", "SUPERSECRET")]).unwrap();
        let error = get_json::<serde_json::Value>(&Client::new(), url).await.unwrap_err();

        mock.assert();
        assert!(matches!(error, MapsError::Transport(_)));
        assert!(!error.to_string().contains("SUPERSECRET"));
        assert!(!format!("{:?}", error).contains("SUPERSECRET"));
    }

    #[tokio::test]
    async fn get_json_keeps_the_api_key_out_of_connection_errors() {
        // Nothing listens on port 9 of the loopback interface
        let url = endpoint_url("http://127.0.0.1:9", "geocode/json", &[("key", "SUPERSECRET")]).unwrap();

        let error = get_json::<serde_json::Value>(&Client::new(), url).await.unwrap_err();

        assert!(matches!(error, MapsError::Transport(_)));
        assert!(!error.to_string().contains("SUPERSECRET"));
    }
}
