//! Runtime configuration, built once from the command line and passed down
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::cli::{Action, CommandLineArgs};

pub const TWITTER_API: &str = "https://api.twitter.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct Config {
    pub key_file: PathBuf,
    pub tweet_id: String,
    pub action: Action,
    /// Both endpoints are joined onto this
    pub api_base: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: CommandLineArgs) -> Result<Config> {
        let CommandLineArgs {
            action,
            key_file,
            tweet_id,
        } = args;
        let api_base = Url::parse(TWITTER_API).context("API endpoint is not valid.")?;

        Ok(Config {
            key_file,
            tweet_id,
            action: action.unwrap_or(Action::Retweets),
            api_base,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use super::{Config, DEFAULT_TIMEOUT};
    use crate::cli::{Action, CommandLineArgs};

    #[test]
    fn retweets_when_no_sub_command() {
        let config = Config::from_args(CommandLineArgs::from_iter(&["retweeters"])).unwrap();
        assert_eq!(config.action, Action::Retweets);
        assert_eq!(config.api_base.as_str(), "https://api.twitter.com/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn keeps_sub_command() {
        let args = CommandLineArgs::from_iter(&["retweeters", "keys"]);
        assert_eq!(Config::from_args(args).unwrap().action, Action::Keys);
    }
}
