use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::credentials::Credentials;
use crate::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyPasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

impl Client {
    /// Exchanges email and password for an ID token.
    pub fn verify_password(&self, credentials: &Credentials) -> Result<String, Error> {
        let url = self.request_url(credentials.project_key())?;
        let body = VerifyPasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
            return_secure_token: true,
        };

        tracing::debug!(email = credentials.email(), "requesting id token");

        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = resp.status();
        tracing::debug!(status = %status, "identity service responded");

        if status == StatusCode::BAD_REQUEST {
            if let Ok(detail) = resp.text() {
                tracing::debug!(detail = %detail, "credentials rejected");
            }
            return Err(Error::Authentication);
        }
        if status != StatusCode::OK {
            return Err(Error::Connection(format!("response status {}", status)));
        }

        let bytes = resp
            .bytes()
            .map_err(|_| Error::Connection("could not read identity service response".into()))?;
        let data: HashMap<String, Value> = serde_json::from_slice(&bytes)
            .map_err(|_| Error::Internal("could not decode identity service response".into()))?;

        id_token(&data)
    }
}

fn id_token(data: &HashMap<String, Value>) -> Result<String, Error> {
    match data.get("idToken") {
        Some(Value::String(token)) => Ok(token.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(Error::Internal(
            "identity service response has no idToken".into(),
        )),
    }
}
