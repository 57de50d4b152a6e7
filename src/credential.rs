//! Credentials: the app's consumer key pair and the bearer token it is exchanged for
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// App side credentials, loaded from the key file
/// Absent fields are left empty, the token endpoint is the one who rejects them
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ConsumerCredential {
    #[serde(rename = "consumer_key", default)]
    pub consumer_key: String,
    #[serde(rename = "consumer_secret", default)]
    pub consumer_secret: String,
}

impl ConsumerCredential {
    pub fn is_complete(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }

    /// Value for the `Authorization: Basic` header of the token request
    /// i.e. base64("<consumer_key>:<consumer_secret>")
    pub fn basic_auth_value(&self) -> String {
        base64::encode(format!("{}:{}", self.consumer_key, self.consumer_secret))
    }
}

/// Token granted by the client-credentials flow
/// Lives only in memory and is never refreshed
#[derive(Clone, Debug, PartialEq)]
pub struct BearerToken {
    pub access_token: String,
    pub token_type: String,
}

impl BearerToken {
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Load the consumer key pair from a JSON file
/// * key_file: path to a document like `{"consumer_key": "...", "consumer_secret": "..."}`
///   Other fields are ignored.
pub fn load_credential(key_file: &Path) -> Result<ConsumerCredential, AppError> {
    let raw = fs::read(key_file).map_err(|source| AppError::Io {
        path: key_file.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", raw.len(), key_file.display());
    serde_json::from_slice(&raw).map_err(|e| AppError::decode("credential file", e))
}
