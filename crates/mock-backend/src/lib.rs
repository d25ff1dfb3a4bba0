//! In-process emulation of the Apps Script lead backend.
//!
//! Speaks the same pseudo-REST contract as a deployed web app: `GET` with an
//! `action` query parameter, `POST` with an action-tagged JSON body, and
//! application errors carried in a `{status, error}` envelope with HTTP 200,
//! the way Apps Script deployments report them.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLead {
    pub timestamp: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub contact_preference: String,
    #[serde(default)]
    pub memo: String,
}

pub type Db = Arc<RwLock<Vec<StoredLead>>>;

/// Configuration document served by `action=getConfig`.
pub fn sample_config() -> Value {
    json!({
        "branding": {
            "brandName": "Mock Spreadsheet Automation",
            "landingTitle": "Mock landing title",
            "landingSubtitle": "Mock landing subtitle",
            "footerText": "Mock footer"
        },
        "forms": {
            "submittingMessage": "Submitting...",
            "successMessage": "Saved to the mock sheet!",
            "errorMessage": "Mock submission failed.",
            "fields": {
                "name": {"label": "Name *", "placeholder": "Jane Doe", "required": true},
                "phone": {
                    "label": "Phone *",
                    "placeholder": "010-1234-5678",
                    "required": true,
                    "pattern": "^\\d{2,3}-\\d{3,4}-\\d{4}$"
                },
                "service": {
                    "label": "Service *",
                    "placeholder": "Pick a service",
                    "options": ["Alpha automation", "Beta tracking"]
                },
                "contactPreference": {
                    "label": "Contact *",
                    "placeholder": "Pick a contact method",
                    "options": ["Phone call", "Email reply"]
                },
                "memo": {"label": "Memo", "placeholder": "Optional", "rows": 4}
            }
        },
        "features": [
            {"title": "Mock feature", "description": "Serves canned data for tests."}
        ]
    })
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/", get(handle_get).post(handle_post))
        .with_state(db)
}

/// Router that answers every request with a fixed status and body, for
/// failure-path tests (HTTP 500, non-JSON payloads, and the like).
pub fn static_response_app(status: u16, body: &'static str) -> Router {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Router::new().fallback(move || async move { (status, body) })
}

async fn handle_get(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    match params.get("action").map(String::as_str) {
        Some("test") => (
            StatusCode::OK,
            Json(json!({"status": "success", "message": "API connection OK"})),
        ),
        Some("getConfig") => (StatusCode::OK, Json(sample_config())),
        Some("getEntries") => {
            let rows = db.read().await;
            (StatusCode::OK, Json(json!({"rows": &*rows})))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "error": "unknown action"})),
        ),
    }
}

async fn handle_post(
    State(db): State<Db>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if payload.get("action").and_then(Value::as_str) != Some("submitLead") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "error": "unknown action"})),
        );
    }

    let field = |name: &str| {
        payload
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let lead = StoredLead {
        timestamp: unix_timestamp(),
        name: field("name"),
        phone: field("phone"),
        service: field("service"),
        contact_preference: field("contactPreference"),
        memo: field("memo"),
    };

    for (key, value) in [
        ("name", &lead.name),
        ("phone", &lead.phone),
        ("service", &lead.service),
        ("contactPreference", &lead.contact_preference),
    ] {
        if value.is_empty() {
            // Application errors ride in the envelope, not the HTTP status.
            return (
                StatusCode::OK,
                Json(json!({"status": "error", "error": format!("missing field: {key}")})),
            );
        }
    }

    db.write().await.push(lead);
    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Lead saved"})),
    )
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs().to_string())
        .unwrap_or_default()
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

/// Serve `router` on an ephemeral local port from a background thread and
/// return the bound address. The listener is bound before this returns, so
/// callers can connect immediately.
pub fn spawn_app(router: Router) -> std::io::Result<SocketAddr> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async {
            let listener = TcpListener::from_std(std_listener).expect("tokio listener");
            axum::serve(listener, router).await
        })
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_lead_serializes_to_camel_case() {
        let lead = StoredLead {
            timestamp: "0".to_string(),
            name: "A".to_string(),
            phone: "010-1234-5678".to_string(),
            service: "S".to_string(),
            contact_preference: "P".to_string(),
            memo: String::new(),
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["contactPreference"], "P");
        assert!(json.get("contact_preference").is_none());
    }

    #[test]
    fn sample_config_has_the_expected_shape() {
        let config = sample_config();
        assert!(config["branding"]["brandName"].is_string());
        assert!(config["forms"]["fields"]["service"]["options"].is_array());
        assert!(config["features"].is_array());
    }
}
