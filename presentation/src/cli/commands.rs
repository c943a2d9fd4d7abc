//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use quote_domain::{OptionUpdate, OutputFormat, PageSpec};
use std::path::PathBuf;

/// Urgent delivery choice for the vocal-mix form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UrgencyArg {
    /// Delivery within 3 days
    #[value(name = "3")]
    ThreeDays,
    /// Delivery within 7 days
    #[value(name = "7")]
    SevenDays,
}

/// CLI arguments for studio-quote
#[derive(Parser, Debug)]
#[command(name = "studio-quote")]
#[command(author, version, about = "Price quotes and order summaries for vocal mixing and web creation")]
#[command(long_about = r#"
studio-quote computes a price and a plain-text order summary for one of two
services. The summary is printed (or appended to the outbox with --submit)
exactly as it would be sent.

Configuration files are loaded from (in priority order):
1. STUDIO_QUOTE_<SECTION>__<KEY>    Environment variables
2. --config <path>                  Explicit config file
3. ./studio-quote.toml              Project-level config
4. ~/.config/studio-quote/config.toml   Global config

Example:
  studio-quote vocal-mix --name 山田太郎 --video-url https://youtu.be/abc --vocal 2 --encode
  studio-quote web-create --name 佐藤花子 --overview "カフェの紹介" --page トップ --page "メニュー:季節限定"
  studio-quote check-url https://youtu.be/abc
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(OutputFormat))]
    pub output: Option<OutputFormat>,

    /// Contact method written into the summary ("email" includes the e-mail line)
    #[arg(long, global = true, value_name = "METHOD")]
    pub contact: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Quote a vocal mix
    VocalMix(VocalMixArgs),
    /// Quote a website
    WebCreate(WebCreateArgs),
    /// Check whether a video URL looks well formed
    CheckUrl {
        /// URL to check
        url: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct VocalMixArgs {
    /// Request file (.toml or .json); flags override its fields
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Customer e-mail
    #[arg(long)]
    pub email: Option<String>,

    /// Link to the track or video to mix
    #[arg(long, value_name = "URL")]
    pub video_url: Option<String>,

    /// Other requests or questions
    #[arg(long, value_name = "TEXT")]
    pub requests: Option<String>,

    /// Add extra vocalists (1-5)
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..=5))]
    pub vocal: Option<u32>,

    /// Add encoding
    #[arg(long)]
    pub encode: bool,

    /// Urgent delivery
    #[arg(long, value_enum)]
    pub urgent: Option<UrgencyArg>,

    /// Raw option update, applied after the other flags (e.g. urgent7:selected=true)
    #[arg(long = "set", value_name = "KEY:FIELD=VALUE")]
    pub updates: Vec<OptionUpdate>,

    /// Append the order to the outbox after printing it
    #[arg(long)]
    pub submit: bool,
}

#[derive(Args, Debug, Default)]
pub struct WebCreateArgs {
    /// Request file (.toml or .json); flags override its fields
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Customer e-mail
    #[arg(long)]
    pub email: Option<String>,

    /// Other contact details
    #[arg(long, value_name = "TEXT")]
    pub contact_info: Option<String>,

    /// What the site is for
    #[arg(long, value_name = "TEXT")]
    pub overview: Option<String>,

    /// Page as NAME or NAME:CONTENT (repeat for each page; replaces pages from the request file)
    #[arg(long = "page", value_name = "NAME[:CONTENT]", value_parser = parse_page)]
    pub pages: Vec<PageSpec>,

    /// Desired deadline
    #[arg(long)]
    pub deadline: Option<String>,

    /// Budget
    #[arg(long)]
    pub budget: Option<String>,

    /// Append the order to the outbox after printing it
    #[arg(long)]
    pub submit: bool,
}

/// Parse `NAME` or `NAME:CONTENT` into a page.
///
/// Only the first colon splits, so content may itself contain colons.
pub fn parse_page(s: &str) -> Result<PageSpec, String> {
    let (name, content) = s.split_once(':').unwrap_or((s, ""));
    let page = PageSpec::new(name.trim(), content.trim());
    if page.is_empty() {
        return Err("page needs a name or content".to_string());
    }
    Ok(page)
}
