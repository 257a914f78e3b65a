//! Thin HTTP client for the estimation backend.
//!
//! Every operation is a single fire-and-forget request against
//! [`config::get_backend_url`]: no retries, no caching. Callers own the error
//! display; nothing here touches the UI.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is extracted
    /// from the error body when the backend provided one.
    Status { code: u16, message: Option<String> },
    /// The request never completed (DNS, connection, serialization).
    Network(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404, .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { code, message: Some(message) } => {
                write!(f, "HTTP {}: {}", code, message)
            }
            ApiError::Status { code, message: None } => write!(f, "HTTP {}", code),
            ApiError::Network(e) => write!(f, "network error: {}", e),
        }
    }
}

/// Generic `{"message": ...}` acknowledgement returned by the backend.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct NewsletterRequest {
    email: String,
}

#[derive(Serialize)]
struct SuggestRequest {
    description_projet: String,
}

/// Wire format for `POST /estimations`. Field names follow the backend
/// schema, not this crate's vocabulary.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimationRequest {
    pub client: ClientInfo,
    pub estimation: EstimationDetails,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub email: String,
    pub nom: String,
    pub telephone: String,
    pub entreprise: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimationDetails {
    pub description_projet: String,
    pub type_projet: String,
    pub nombre_pages: u32,
    pub delai_souhaite: String,
    pub budget: String,
}

/// Suggestion payload from the AI endpoint. The service fills in whatever it
/// could infer from the description; everything is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AiSuggestions {
    pub type_projet: Option<String>,
    pub nombre_pages: Option<u32>,
    pub delai_souhaite: Option<String>,
    pub budget: Option<String>,
    pub liste_pages: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    suggestions: AiSuggestions,
}

/// Client record as returned by the newsletter lookup.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewsletterClient {
    pub id: i32,
    pub email: String,
    pub newsletter: bool,
}

/// Extracts a human-readable message from an error response body. The backend
/// uses `detail` (FastAPI convention); `error` and `message` are accepted as
/// fallbacks.
async fn status_error(response: Response) -> ApiError {
    let code = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            ["detail", "error", "message"].iter().find_map(|key| {
                body.get(*key).and_then(|v| v.as_str()).map(str::to_owned)
            })
        });
    ApiError::Status { code, message }
}

async fn parse_ok<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// `POST {base}/newsletter` — subscribe an email to the newsletter.
pub async fn subscribe_newsletter(email: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&format!("{}/newsletter", config::get_backend_url()))
        .json(&NewsletterRequest { email: email.to_string() })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_ok(response).await
}

/// `POST {base}/estimations` — create an estimation from a submitted quote.
pub async fn create_estimation(request: &EstimationRequest) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&format!("{}/estimations", config::get_backend_url()))
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_ok(response).await
}

/// `POST {base}/ai/suggest` — analyze a free-text project description.
pub async fn get_ai_suggestions(description: &str) -> Result<AiSuggestions, ApiError> {
    let response = Request::post(&format!("{}/ai/suggest", config::get_backend_url()))
        .json(&SuggestRequest { description_projet: description.to_string() })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let parsed: SuggestResponse = parse_ok(response).await?;
    Ok(parsed.suggestions)
}

/// `GET {base}/newsletter/client/{email}` — look up a client's newsletter
/// status. 404 means the email was never subscribed.
pub async fn fetch_newsletter_client(email: &str) -> Result<NewsletterClient, ApiError> {
    let response = Request::get(&format!(
        "{}/newsletter/client/{}",
        config::get_backend_url(),
        urlencoding::encode(email)
    ))
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_ok(response).await
}

/// `POST {base}/newsletter/unsubscribe/{email}` — opt a client out.
pub async fn unsubscribe_newsletter(email: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&format!(
        "{}/newsletter/unsubscribe/{}",
        config::get_backend_url(),
        urlencoding::encode(email)
    ))
    .send()
    .await
    .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimation_request_serializes_to_backend_shape() {
        let request = EstimationRequest {
            client: ClientInfo {
                email: "jean@entreprise.fr".into(),
                nom: "Jean Dupont".into(),
                telephone: "+33 6 12 34 56 78".into(),
                entreprise: "Dupont SARL".into(),
            },
            estimation: EstimationDetails {
                description_projet: "Un site e-commerce".into(),
                type_projet: "Site E-commerce".into(),
                nombre_pages: 20,
                delai_souhaite: "Normal".into(),
                budget: "5 000€ - 10 000€".into(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["client"]["email"], "jean@entreprise.fr");
        assert_eq!(value["client"]["entreprise"], "Dupont SARL");
        assert_eq!(value["estimation"]["nombre_pages"], 20);
        assert_eq!(value["estimation"]["type_projet"], "Site E-commerce");
    }

    #[test]
    fn suggestions_tolerate_missing_fields() {
        let parsed: SuggestResponse =
            serde_json::from_str(r#"{"suggestions": {"type_projet": "E-commerce"}}"#).unwrap();
        assert_eq!(parsed.suggestions.type_projet.as_deref(), Some("E-commerce"));
        assert_eq!(parsed.suggestions.nombre_pages, None);
        assert_eq!(parsed.suggestions.liste_pages, None);

        let empty: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.suggestions, AiSuggestions::default());
    }

    #[test]
    fn not_found_is_distinguished() {
        assert!(ApiError::Status { code: 404, message: None }.is_not_found());
        assert!(!ApiError::Status { code: 500, message: None }.is_not_found());
        assert!(!ApiError::Network("timeout".into()).is_not_found());
    }
}
