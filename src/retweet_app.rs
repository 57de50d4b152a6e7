//! App module and interface between CLI and Twitter Client/APIs
//! pub methods are expected to call from [`#main`]
//! Each step has to finish before the next one starts: keys -> token -> retweets
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;

use crate::cli::Action;
use crate::config::Config;
use crate::credential::{load_credential, BearerToken, ConsumerCredential};
use crate::error::AppError;
use crate::twitter_client::TwitterClientTrait;
use crate::twitter_object::parse_token;

/// Run the action selected on the command line and write its output to `out`
pub fn run(
    tw_client: &impl TwitterClientTrait,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    match config.action {
        Action::Retweets => print_retweeters(tw_client, config, out),
        Action::Token => print_token(tw_client, config, out),
        Action::Keys => print_keys(config, out),
    }
}

/// Print the usernames who retweeted `config.tweet_id`, one per line
pub fn print_retweeters(
    tw_client: &impl TwitterClientTrait,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let cred = load_keys(config)?;
    let token = exchange_token(tw_client, &cred).context("Unable to authenticate")?;

    info!("Fetch the retweets of {}", config.tweet_id);
    let usernames = tw_client
        .fetch_retweets(&token, &config.tweet_id)
        .context("Request failed")?;
    info!("{} users retweeted {}", usernames.len(), config.tweet_id);

    for username in &usernames {
        writeln!(out, "{}", username)?;
    }
    Ok(())
}

/// Print the token endpoint response as it is
pub fn print_token(
    tw_client: &impl TwitterClientTrait,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let cred = load_keys(config)?;
    info!("Request a bearer token");
    let body = tw_client
        .request_token(&cred)
        .context("Unable to authenticate")?;
    writeln!(out, "{}", body)?;
    Ok(())
}

/// Print the loaded consumer keys
pub fn print_keys(config: &Config, out: &mut impl Write) -> Result<()> {
    let cred = load_keys(config)?;
    serde_json::to_writer_pretty(&mut *out, &cred)?;
    writeln!(out)?;
    Ok(())
}

/// Exchange the consumer keys for a bearer token
pub fn exchange_token(
    tw_client: &impl TwitterClientTrait,
    cred: &ConsumerCredential,
) -> Result<BearerToken, AppError> {
    info!("Request a bearer token");
    let body = tw_client.request_token(cred)?;
    let token = parse_token(&body)?;
    debug!("Got a {} token", token.token_type);
    Ok(token)
}

/// Load the consumer keys
/// An incomplete pair is only warned about, Twitter is the one who rejects it
fn load_keys(config: &Config) -> Result<ConsumerCredential> {
    let cred = load_credential(&config.key_file).with_context(|| {
        format!(
            "Impossible to parse credentials from {}",
            config.key_file.display()
        )
    })?;
    if !cred.is_complete() {
        warn!(
            "consumer_key or consumer_secret is empty in {}",
            config.key_file.display()
        );
    }
    Ok(cred)
}
