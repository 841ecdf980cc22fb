//! Zoom REST API v2 client.
//!
//! Auth is an HS256 JWT minted once per process (`iss` = API key, short
//! expiry) and sent as a bearer token. All calls are fallible and map
//! unexpected statuses to [`ZoomctlError::RemoteStatus`]; a 404 on a user
//! lookup becomes [`ZoomctlError::UserNotFound`].

pub mod types;

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ZoomctlError};
use types::{Meeting, MeetingListPage, User, UserListPage, UserType};

const API_BASE: &str = "https://api.zoom.us/v2/";
const TOKEN_TTL_MINUTES: i64 = 5;
// One page covers the account sizes this tool targets; no pagination.
const PAGE_SIZE: &str = "300";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    exp: usize,
}

pub struct ZoomClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl ZoomClient {
    pub fn new(api_key: &str, api_secret: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base: Url::parse(API_BASE)?,
            token: mint_token(api_key, api_secret)?,
        })
    }

    /// Fetch the full user directory.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.base.join("users")?;
        crate::log_debug!("GET {url}");
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("page_size", PAGE_SIZE)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ZoomctlError::RemoteStatus {
                context: "could not retrieve user list".into(),
                status: resp.status().as_u16(),
            });
        }
        let page: UserListPage = resp.json().await?;
        Ok(page.users)
    }

    /// Fetch a single user; `key` may be the Zoom id or the email.
    pub async fn get_user(&self, key: &str) -> Result<User> {
        let url = self.base.join(&format!("users/{key}"))?;
        crate::log_debug!("GET {url}");
        let resp = self.http.get(url).bearer_auth(&self.token).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ZoomctlError::UserNotFound(key.to_string()));
        }
        if !resp.status().is_success() {
            return Err(ZoomctlError::RemoteStatus {
                context: format!("could not retrieve user '{key}'"),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    /// Change a user's license type. Zoom answers 204 on success.
    pub async fn update_user_type(&self, key: &str, user_type: UserType) -> Result<()> {
        let url = self.base.join(&format!("users/{key}"))?;
        crate::log_debug!("PATCH {url} type={}", user_type.label());
        let resp = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "type": u8::from(user_type) }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ZoomctlError::RemoteStatus {
                context: format!(
                    "could not update user '{key}' to type '{}'",
                    user_type.label()
                ),
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    /// Fetch a user's upcoming meetings.
    pub async fn list_upcoming_meetings(&self, key: &str) -> Result<Vec<Meeting>> {
        let url = self.base.join(&format!("users/{key}/meetings"))?;
        crate::log_debug!("GET {url} type=upcoming");
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("type", "upcoming"), ("page_size", PAGE_SIZE)])
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ZoomctlError::UserNotFound(key.to_string()));
        }
        if !resp.status().is_success() {
            return Err(ZoomctlError::RemoteStatus {
                context: format!("could not retrieve meetings for '{key}'"),
                status: resp.status().as_u16(),
            });
        }
        let page: MeetingListPage = resp.json().await?;
        Ok(page.meetings)
    }
}

fn mint_token(api_key: &str, api_secret: &str) -> Result<String> {
    let exp = (Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp() as usize;
    let claims = Claims {
        iss: api_key.to_string(),
        exp,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_bytes()),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    #[test]
    fn token_carries_issuer_and_future_expiry() {
        let token = mint_token("my-key", "my-secret").unwrap();
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"my-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.iss, "my-key");
        assert!(decoded.claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = mint_token("my-key", "my-secret").unwrap();
        let res = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(res.is_err());
    }

    #[test]
    fn base_url_joins_keep_version_prefix() {
        let base = Url::parse(API_BASE).unwrap();
        let users = base.join("users").unwrap();
        assert_eq!(users.as_str(), "https://api.zoom.us/v2/users");
        let one = base.join("users/jane@example.com/meetings").unwrap();
        assert!(one.path().starts_with("/v2/users/"));
    }
}
