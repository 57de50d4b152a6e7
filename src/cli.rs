//! Definition of CLI commands/sub commands + its option parameters
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "retweeters",
    about = "List the users who retweeted a tweet, authenticated as an app"
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Option<Action>,

    /// JSON containing consumer key and secret.
    #[structopt(long = "key_file", parse(from_os_str), default_value = "./keys.json")]
    pub key_file: PathBuf,

    /// Tweet whose retweets are listed.
    #[structopt(long = "tweet_id", default_value = "1007246074317365248")]
    pub tweet_id: String,
}

#[derive(Debug, PartialEq, StructOpt)]
pub enum Action {
    #[structopt(about = "Print the usernames of the retweeters (default)")]
    Retweets,
    #[structopt(about = "Exchange the consumer keys and print the raw token response")]
    Token,
    #[structopt(about = "Load the consumer keys and print them")]
    Keys,
}
