//! Error kinds of the retweet pipeline
//! Every step returns one of these, the driver decides what to do with it
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The credential file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or incomplete JSON
    #[error("failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    /// The request could not be built or sent, or no response came back
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The endpoint rejected the credentials or the token
    #[error("{url} rejected the request with status {status}: {body}")]
    Auth {
        url: String,
        status: u16,
        body: String,
    },
}

impl AppError {
    pub fn decode(what: &'static str, reason: impl ToString) -> Self {
        AppError::Decode {
            what,
            reason: reason.to_string(),
        }
    }

    pub fn network(url: impl ToString, reason: impl ToString) -> Self {
        AppError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_names_the_cause() {
        let err = AppError::Auth {
            url: "https://api.twitter.com/oauth2/token".to_string(),
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "https://api.twitter.com/oauth2/token rejected the request with status 403: forbidden"
        );

        let err = AppError::decode("token response", "missing field `access_token`");
        assert_eq!(
            err.to_string(),
            "failed to decode token response: missing field `access_token`"
        );
    }
}
