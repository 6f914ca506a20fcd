//! # CLI Layer
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Decides which commands need a logged-in user
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{
    print_ad_copy, print_analytics, print_campaign_detail, print_campaign_list, print_config,
    print_messages, print_user,
};
use super::setup::{Cli, Commands, StatusArg};
use adscribe::adcopy::OllamaClient;
use adscribe::api::AdScribeApi;
use adscribe::catalog::interest_labels;
use adscribe::commands::create::CampaignDraft;
use adscribe::config::{default_data_dir, AdScribeConfig};
use adscribe::error::Result;
use adscribe::query::CampaignFilter;
use adscribe::store::fs_backend::FsBackend;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

struct AppContext {
    api: AdScribeApi<FsBackend, OllamaClient>,
    config: AdScribeConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let command = cli.command.unwrap_or(Commands::List {
        search: None,
        status: None,
    });
    if requires_session(&command) {
        ctx.api.require_session()?;
    }

    match command {
        Commands::Login { email, password } => handle_login(&ctx, &email, &password),
        Commands::Logout => handle_logout(&ctx),
        Commands::Whoami => handle_whoami(&ctx),
        Commands::List { search, status } => handle_list(&ctx, search, status),
        Commands::Create {
            name,
            image_url,
            age_range,
            location,
            interests,
            ad_copy,
        } => handle_create(
            &mut ctx,
            CampaignDraft {
                name,
                image_url,
                age_range,
                location,
                interests: interest_labels(&interests),
                ad_copy,
            },
        ),
        Commands::Show { id } => handle_show(&ctx, &id),
        Commands::Status { id, status } => handle_status(&mut ctx, &id, status),
        Commands::Generate { name, interests } => handle_generate(&ctx, &name, &interests),
        Commands::Analytics => handle_analytics(&ctx),
        Commands::Reset { yes } => handle_reset(&mut ctx, yes),
        Commands::Config => handle_config(&ctx),
    }
}

fn requires_session(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Login { .. } | Commands::Config | Commands::Generate { .. }
    )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // An explicit directory wins; otherwise the default dir's config may point elsewhere.
    let (config, data_dir) = match &cli.data_dir {
        Some(dir) => (AdScribeConfig::load(dir)?, dir.clone()),
        None => {
            let config = AdScribeConfig::load(&default_data_dir()?)?;
            let data_dir = config.resolve_data_dir()?;
            (config, data_dir)
        }
    };
    let generator = config.ollama_client();
    tracing::debug!(
        data_dir = %data_dir.display(),
        endpoint = generator.endpoint(),
        model = generator.model(),
        "Starting"
    );

    let mut api = AdScribeApi::new(FsBackend::new(data_dir.clone()), generator);
    let outcome = api.load()?;
    tracing::debug!(?outcome, "Loaded campaigns");

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.current_user()?;
    if let Some(user) = &result.user {
        print_user(user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, status: Option<StatusArg>) -> Result<()> {
    let filter = CampaignFilter {
        search,
        status: status.map(Into::into),
    };
    let result = ctx.api.list_campaigns(&filter)?;
    print_campaign_list(&result.listed_campaigns);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, draft: CampaignDraft) -> Result<()> {
    let result = ctx.api.create_campaign(draft)?;
    for campaign in &result.affected_campaigns {
        print_campaign_detail(campaign);
        println!();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_campaign(id)?;
    for campaign in &result.listed_campaigns {
        print_campaign_detail(campaign);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, id: &str, status: StatusArg) -> Result<()> {
    let result = ctx.api.set_status(id, status.into())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_generate(ctx: &AppContext, name: &str, interests: &[String]) -> Result<()> {
    let result = ctx.api.generate_ad_copy(name, &interest_labels(interests))?;
    if let Some(copy) = &result.ad_copy {
        print_ad_copy(copy);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_analytics(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.analytics()?;
    if let Some(summary) = &result.analytics {
        print_analytics(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, confirmed: bool) -> Result<()> {
    let result = ctx.api.reset(confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    print_config(&ctx.config, &ctx.data_dir);
    Ok(())
}
