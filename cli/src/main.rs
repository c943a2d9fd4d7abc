//! CLI entrypoint for studio-quote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quote_application::{
    DryRunSubmitter, OrderSubmitter, PricingConfig, SubmitError, VocalMixSession,
    WebCreateSession,
};
use quote_domain::{
    ContactMethod, OptionKey, OutputFormat, SelectionUpdate, is_well_formed_url,
};
use quote_infrastructure::{ConfigLoader, FileConfig, JsonlOutbox, RequestLoader};
use quote_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, QuoteView, UrgencyArg, VocalMixArgs,
    WebCreateArgs,
};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources(cli.config.as_ref()));
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.no_color,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    let contact = cli
        .contact
        .as_deref()
        .map(ContactMethod::from)
        .unwrap_or_else(|| config.submission.contact_method());
    let pricing = config.pricing.to_pricing_config();

    let Some(command) = cli.command else {
        bail!("No command given. Use --help to see available commands.");
    };

    match command {
        Command::CheckUrl { url } => Ok(check_url(&url)),
        Command::VocalMix(args) => {
            run_vocal_mix(args, pricing, &contact, output, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::WebCreate(args) => {
            run_web_create(args, pricing, &contact, output, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print config issues; stop on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        warn!("Config: {}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue);
    }
    Ok(())
}

fn check_url(url: &str) -> ExitCode {
    if is_well_formed_url(url) {
        println!("ok");
        ExitCode::SUCCESS
    } else {
        println!("warning: URLの形式が正しくない可能性があります");
        ExitCode::FAILURE
    }
}

async fn run_vocal_mix(
    args: VocalMixArgs,
    pricing: PricingConfig,
    contact: &ContactMethod,
    output: OutputConfig,
    config: &FileConfig,
) -> Result<()> {
    let mut session = VocalMixSession::new(pricing);

    if let Some(path) = &args.request {
        let request = RequestLoader::load_vocal_mix(path)?;
        session.set_form(request.form);
        for update in &request.options {
            session.update_option(update.key, update.update);
        }
    }

    let form = session.form_mut();
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(email) = args.email {
        form.email = email;
    }
    if let Some(url) = args.video_url {
        form.video_url = url;
    }
    if let Some(requests) = args.requests {
        form.other_requests = requests;
    }

    if let Some(count) = args.vocal {
        session.update_option(OptionKey::VocalAddition, SelectionUpdate::Selected(true));
        session.update_option(OptionKey::VocalAddition, SelectionUpdate::Quantity(count));
    }
    if args.encode {
        session.update_option(OptionKey::Encoding, SelectionUpdate::Selected(true));
    }
    if let Some(urgency) = args.urgent {
        let key = match urgency {
            UrgencyArg::ThreeDays => OptionKey::UrgentThreeDay,
            UrgencyArg::SevenDays => OptionKey::UrgentSevenDay,
        };
        session.update_option(key, SelectionUpdate::Selected(true));
    }
    for update in &args.updates {
        session.update_option(update.key, update.update);
    }

    print_view(&QuoteView::from_vocal_mix(&session, contact), output);

    if args.submit {
        let submitter = build_submitter(config)?;
        report_submit(session.submit(submitter.as_ref(), contact).await)?;
    }
    Ok(())
}

async fn run_web_create(
    args: WebCreateArgs,
    pricing: PricingConfig,
    contact: &ContactMethod,
    output: OutputConfig,
    config: &FileConfig,
) -> Result<()> {
    let mut session = WebCreateSession::new(pricing);

    if let Some(path) = &args.request {
        session.set_form(RequestLoader::load_web_create(path)?);
    }

    session.edit_form(|form| {
        if let Some(name) = args.name {
            form.name = name;
        }
        if let Some(email) = args.email {
            form.email = email;
        }
        if let Some(contact_info) = args.contact_info {
            form.contact_info = contact_info;
        }
        if let Some(overview) = args.overview {
            form.site_overview = overview;
        }
        if let Some(deadline) = args.deadline {
            form.deadline = deadline;
        }
        if let Some(budget) = args.budget {
            form.budget = budget;
        }
        if !args.pages.is_empty() {
            form.pages = args.pages;
        }
    });

    print_view(&QuoteView::from_web_create(&session, contact), output);

    if args.submit {
        let submitter = build_submitter(config)?;
        report_submit(session.submit(submitter.as_ref(), contact).await)?;
    }
    Ok(())
}

fn print_view(view: &QuoteView, output: OutputConfig) {
    let text = match output.format {
        OutputFormat::Text => ConsoleFormatter::format(view),
        OutputFormat::Json => ConsoleFormatter::format_json(view),
    };
    println!("{}", text);
}

fn build_submitter(config: &FileConfig) -> Result<Box<dyn OrderSubmitter>> {
    match &config.submission.outbox {
        Some(path) => {
            let outbox = JsonlOutbox::open(path)
                .with_context(|| format!("Failed to open outbox {}", path))?;
            Ok(Box::new(outbox))
        }
        None => {
            info!("No outbox configured; submission is a dry run");
            Ok(Box::new(DryRunSubmitter))
        }
    }
}

fn report_submit(result: Result<quote_application::SubmissionReceipt, SubmitError>) -> Result<()> {
    match result {
        Ok(receipt) => {
            eprintln!(
                "Submitted {} order to {} at {}",
                receipt.service,
                receipt.destination,
                receipt.submitted_at.to_rfc3339()
            );
            Ok(())
        }
        Err(SubmitError::NotReady) => {
            bail!("Not submitted: required fields are missing")
        }
        Err(e) => Err(e.into()),
    }
}
