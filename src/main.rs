//! CLI tool for listing who retweeted a tweet
//! It authenticates as an app with the OAuth2 client credentials flow, no user login is needed
use env_logger::Env;
use log::{error, log_enabled, Level};
use std::io::{self, Write};
use std::process;
use structopt::StructOpt;
use twitter_client::TwitterClient;
mod cli;
mod config;
mod credential;
mod error;
mod retweet_app;
mod twitter_client;
mod twitter_object;

use cli::CommandLineArgs;
use config::Config;

/// Entrypoint Function
///
/// It will use the following environment variable
/// * `RETWEETERS_LOG_LEVEL` Log level setting e.g. `RETWEETERS_LOG_LEVEL=retweeters=debug`
///
/// Any failure is reported here, once, and the process exits with status 1
fn main() {
    let env = Env::default().filter_or("RETWEETERS_LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    if let Err(e) = run() {
        report_failure(&e, &mut io::stderr());
        process::exit(1);
    }
}

/// Write the failure once: through the logger when it shows errors, straight to `stderr` otherwise
/// `RETWEETERS_LOG_LEVEL=off` must not silence it
fn report_failure(e: &anyhow::Error, stderr: &mut impl Write) {
    if log_enabled!(Level::Error) {
        error!("{:#}", e);
    } else {
        let _ = writeln!(stderr, "{:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_args(CommandLineArgs::from_args())?;
    let tw_client = TwitterClient::new(config.api_base.clone(), config.timeout);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    retweet_app::run(&tw_client, &config, &mut out)
}
