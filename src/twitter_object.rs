//! Twitter API response object definition
//! The JSON keys of each endpoint are mapped here and nowhere else
use serde::Deserialize;

use crate::credential::BearerToken;
use crate::error::AppError;

/// Body of `POST oauth2/token`
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(rename = "access_token")]
    pub access_token: String,
    #[serde(rename = "token_type", default)]
    pub token_type: Option<String>,
}

/// One element of `GET 1.1/statuses/retweets/{id}.json`
#[derive(Deserialize, Debug)]
pub struct Retweet {
    #[serde(rename = "user")]
    pub user: RetweetUser,
}

/// Only the handle of the retweeting user is needed
#[derive(Deserialize, Debug)]
pub struct RetweetUser {
    #[serde(rename = "screen_name")]
    pub screen_name: String,
}

/// Decode the token endpoint body into a bearer token
/// An empty `access_token` is treated the same as a missing one
pub fn parse_token(body: &str) -> Result<BearerToken, AppError> {
    let response: TokenResponse =
        serde_json::from_str(body).map_err(|e| AppError::decode("token response", e))?;
    if response.access_token.is_empty() {
        return Err(AppError::decode("token response", "access_token is empty"));
    }
    Ok(BearerToken {
        access_token: response.access_token,
        token_type: response.token_type.unwrap_or_else(|| "bearer".to_string()),
    })
}

/// Decode the retweet list, keeping the order the platform returned
pub fn parse_retweets(body: &str) -> Result<Vec<Retweet>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::decode("retweet list", e))
}

/// Project retweets to the usernames, duplicates included
pub fn screen_names(retweets: Vec<Retweet>) -> Vec<String> {
    retweets.into_iter().map(|rt| rt.user.screen_name).collect()
}
