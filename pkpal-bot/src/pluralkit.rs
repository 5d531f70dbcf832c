//! HTTP/JSON client for the PluralKit registry API.
//!
//! The bot never caches registry answers: every command looks the sender up
//! again, so a system edited on PluralKit's side is picked up immediately.

use std::time::Duration;

use async_trait::async_trait;
use pluralkit_types::{Fronters, Member, System};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::RegistryError;

/// Default PluralKit API URL
pub const DEFAULT_PLURALKIT_URL: &str = "https://api.pluralkit.me/v1";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lookups the bot needs from the identity registry
#[async_trait]
pub trait IdentityRegistry: Send + Sync {
    /// Resolve a Discord account to the canonical record of its system.
    async fn resolve_sender(&self, sender_id: &str) -> Result<System, RegistryError>;

    /// Full member list of a system, in registry order. `sender_id` is the
    /// account the lookup is made for.
    async fn list_members(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError>;

    /// Members currently fronting; an empty list means nobody is.
    async fn list_fronters(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError>;
}

pub struct PluralKitClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl PluralKitClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, String> {
        Self::with_timeout(base_url, token, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        self.get_optional(path)
            .await?
            .ok_or_else(|| "PluralKit API returned no content".to_string())
    }

    /// GET a JSON body; `Ok(None)` on 204 No Content, `Err` on any other non-200.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, String> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("PluralKit API unavailable: {}", e))?;

        match response.status() {
            StatusCode::OK => response
                .json::<T>()
                .await
                .map(Some)
                .map_err(|e| format!("Invalid response from PluralKit API: {}", e)),
            StatusCode::NO_CONTENT => Ok(None),
            status => Err(format!("PluralKit API returned {}", status)),
        }
    }
}

#[async_trait]
impl IdentityRegistry for PluralKitClient {
    async fn resolve_sender(&self, sender_id: &str) -> Result<System, RegistryError> {
        let account: System = match self.get(&format!("/a/{}", sender_id)).await {
            Ok(account) => account,
            Err(e) => {
                log::error!(
                    "PluralKit: Lookup for {} failed ({}). Either the API is down or they have no system",
                    sender_id,
                    e
                );
                return Err(RegistryError::NotFound);
            }
        };

        match self.get::<System>(&format!("/s/{}", account.id)).await {
            Ok(system) => {
                log::info!(
                    "PluralKit: {} resolved to system {}",
                    sender_id,
                    system.id
                );
                Ok(system)
            }
            Err(e) => {
                log::error!(
                    "PluralKit: System {} of {} could not be fetched: {}",
                    account.id,
                    sender_id,
                    e
                );
                Err(RegistryError::NotFound)
            }
        }
    }

    async fn list_members(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError> {
        match self.get::<Vec<Member>>(&format!("/s/{}/members", system_id)).await {
            Ok(members) => {
                log::info!(
                    "PluralKit: Fetched {} members of system {} for {}",
                    members.len(),
                    system_id,
                    sender_id
                );
                Ok(members)
            }
            Err(e) => {
                log::warn!(
                    "PluralKit: Members of system {} unavailable for {}: {}",
                    system_id,
                    sender_id,
                    e
                );
                Err(RegistryError::Unavailable)
            }
        }
    }

    async fn list_fronters(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError> {
        match self
            .get_optional::<Fronters>(&format!("/s/{}/fronters", system_id))
            .await
        {
            Ok(fronters) => {
                let members = fronters.map(|f| f.members).unwrap_or_default();
                log::info!(
                    "PluralKit: System {} has {} fronters ({} asked)",
                    system_id,
                    members.len(),
                    sender_id
                );
                Ok(members)
            }
            Err(e) => {
                log::warn!(
                    "PluralKit: Fronters of system {} unavailable for {}: {}",
                    system_id,
                    sender_id,
                    e
                );
                Err(RegistryError::Unavailable)
            }
        }
    }
}
