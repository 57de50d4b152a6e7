//! Twitter API Client
//! It calls the app-only (OAuth2 client credentials) endpoints
//! Define it as trait and implement it for the testability(using mock)
use std::error::Error;
use std::io::ErrorKind;
use std::time::Duration;

use log::debug;
use url::Url;

use crate::credential::{BearerToken, ConsumerCredential};
use crate::error::AppError;
use crate::twitter_object::{parse_retweets, screen_names};

/// Twitter Client
/// One agent is shared by the token exchange and the authenticated calls
pub struct TwitterClient {
    agent: ureq::Agent,
    server: Url,
}

#[cfg(test)]
use mockall::automock;
#[cfg_attr(test, automock)]
pub trait TwitterClientTrait {
    fn request_token(&self, cred: &ConsumerCredential) -> Result<String, AppError>;
    fn fetch_retweets(&self, token: &BearerToken, tweet_id: &str)
        -> Result<Vec<String>, AppError>;
}

impl TwitterClient {
    /// Constructs new Twitter Client
    /// * server: API root, e.g. `https://api.twitter.com`
    /// * timeout: applied to connect, read and write of every request
    pub fn new(server: Url, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        TwitterClient { agent, server }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.server
            .join(path)
            .map_err(|e| AppError::network(path, e))
    }

    /// The tweet id is opaque, it is pushed as one percent-encoded segment
    fn retweets_endpoint(&self, tweet_id: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint("1.1/statuses/retweets/")?;
        url.path_segments_mut()
            .map_err(|_| AppError::network(&self.server, "API endpoint cannot carry a path"))?
            .pop_if_empty()
            .push(&format!("{}.json", tweet_id));
        Ok(url)
    }

    /// Attach the bearer token, as every app-only call needs it
    fn authorized_get(&self, token: &BearerToken, url: &Url) -> ureq::Request {
        self.agent
            .request_url("GET", url)
            .set("Authorization", &token.authorization_value())
    }
}

impl TwitterClientTrait for TwitterClient {
    /// Exchange the consumer key pair for a bearer token and return the raw response body
    /// ref: <https://developer.twitter.com/en/docs/authentication/oauth-2-0/bearer-tokens>
    fn request_token(&self, cred: &ConsumerCredential) -> Result<String, AppError> {
        let token_request = self.endpoint("oauth2/token")?;
        debug!("POST {}", token_request);

        let token_response = self
            .agent
            .request_url("POST", &token_request)
            .set("Authorization", &format!("Basic {}", cred.basic_auth_value()))
            .set(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .send_string("grant_type=client_credentials");

        match token_response {
            Ok(res) if !is_success(res.status()) => Err(rejected(&token_request, res)),
            Ok(res) => read_body(&token_request, res, "token response"),
            Err(ureq::Error::Status(_, res)) => Err(rejected(&token_request, res)),
            Err(e) => Err(transport_error(&token_request, e)),
        }
    }

    /// Retrieve the usernames who retweeted the tweet, in the order Twitter returns them
    /// Only the first page is read
    /// * token: bearer token from [`TwitterClientTrait::request_token()`]
    /// * tweet_id: target tweet id
    fn fetch_retweets(
        &self,
        token: &BearerToken,
        tweet_id: &str,
    ) -> Result<Vec<String>, AppError> {
        let retweets_request = self.retweets_endpoint(tweet_id)?;
        debug!("GET {}", retweets_request);

        let retweets_response = match self.authorized_get(token, &retweets_request).call() {
            Ok(res) if !is_success(res.status()) => {
                return Err(AppError::network(
                    &retweets_request,
                    format!("unexpected status {}", res.status()),
                ))
            }
            Ok(res) => res,
            Err(ureq::Error::Status(status, res)) if status == 401 || status == 403 => {
                return Err(rejected(&retweets_request, res))
            }
            Err(e) => return Err(transport_error(&retweets_request, e)),
        };
        let body = read_body(&retweets_request, retweets_response, "retweet list")?;

        let retweets = parse_retweets(&body)?;
        debug!("Got: {} retweets", retweets.len());
        Ok(screen_names(retweets))
    }
}

/// ureq only reports 4xx and 5xx as errors, an unfollowed 3xx comes back as `Ok`
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn rejected(url: &Url, res: ureq::Response) -> AppError {
    AppError::Auth {
        url: url.to_string(),
        status: res.status(),
        body: res.into_string().unwrap_or_default(),
    }
}

/// A body that is not UTF-8 is malformed content, anything else went wrong on the wire
fn read_body(url: &Url, res: ureq::Response, what: &'static str) -> Result<String, AppError> {
    res.into_string().map_err(|e| match e.kind() {
        ErrorKind::InvalidData => AppError::decode(what, e),
        _ => AppError::network(url, e),
    })
}

/// ureq's own message repeats the URL, keep only the kind and the cause
fn transport_error(url: &Url, err: ureq::Error) -> AppError {
    let reason = match err {
        ureq::Error::Status(status, _) => format!("unexpected status {}", status),
        ureq::Error::Transport(transport) => {
            let mut reason = transport.kind().to_string();
            if let Some(message) = transport.message() {
                reason = format!("{}: {}", reason, message);
            }
            if let Some(source) = transport.source() {
                reason = format!("{}: {}", reason, source);
            }
            reason
        }
    };
    AppError::network(url, reason)
}
