use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use agelove::ads::{self, Placement};
use agelove::analytics::{self, Analytics};
use agelove::share::{self, Platform};
use agelove::svg::{self, Theme, group_thousands};
use agelove::titles::{self, Relationship};
use agelove::{AppConfig, compute_age, compute_compatibility, parse_date};

#[derive(Parser)]
#[command(
    name = "agelove",
    version,
    about = "Age and love compatibility calculators with shareable SVG cards"
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory the SVG cards are written to
    #[arg(long, default_value = ".", global = true)]
    out_dir: PathBuf,

    /// Card theme(s) to render
    #[arg(long, value_enum, default_value_t = ThemeArg::Both, global = true)]
    theme: ThemeArg,

    /// Skip writing SVG cards
    #[arg(long, global = true)]
    no_card: bool,

    /// Print share text and platform links for the result
    #[arg(long, global = true)]
    share: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exact age plus lifetime statistics
    Age {
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        birth: String,

        /// Calculate age to this date instead of now
        #[arg(long)]
        at: Option<String>,

        /// Name on the personalized card
        #[arg(long)]
        name: Option<String>,

        /// Relationship to the person (friend, wife, husband, ...)
        #[arg(long)]
        relationship: Option<String>,

        /// Keep printing seconds lived, once per second
        #[arg(long)]
        watch: bool,
    },

    /// Love compatibility between two names
    Love {
        /// Your name
        name_a: String,

        /// Partner's name
        name_b: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
    Both,
}

impl ThemeArg {
    fn themes(self) -> &'static [Theme] {
        match self {
            ThemeArg::Dark => &[Theme::Dark],
            ThemeArg::Light => &[Theme::Light],
            ThemeArg::Both => &[Theme::Dark, Theme::Light],
        }
    }
}

struct Output {
    out_dir: PathBuf,
    themes: &'static [Theme],
    card: bool,
    share: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = AppConfig::from_env();
    let analytics = analytics::from_config(&config);

    let output = Output {
        out_dir: cli.out_dir,
        themes: cli.theme.themes(),
        card: !cli.no_card,
        share: cli.share,
    };

    match cli.command {
        Command::Age {
            birth,
            at,
            name,
            relationship,
            watch,
        } => {
            run_age(
                &output,
                &config,
                analytics.as_ref(),
                &birth,
                at.as_deref(),
                name.as_deref(),
                relationship.as_deref(),
                watch,
            )
            .await
        }
        Command::Love { name_a, name_b } => {
            run_love(&output, &config, analytics.as_ref(), &name_a, &name_b).await
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agelove=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agelove=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[allow(clippy::too_many_arguments)]
async fn run_age(
    output: &Output,
    config: &AppConfig,
    analytics: &dyn Analytics,
    birth_text: &str,
    at: Option<&str>,
    name: Option<&str>,
    relationship_text: Option<&str>,
    watch: bool,
) -> Result<()> {
    let birth = parse_date(birth_text)?.and_time(NaiveTime::MIN);
    let reference = match at {
        Some(text) => parse_date(text)?.and_time(NaiveTime::MIN),
        None => Utc::now().naive_utc(),
    };

    let result = compute_age(birth, reference)?;
    let relationship = relationship_text.and_then(Relationship::parse);
    let title = titles::card_title(name, relationship);

    print_ad(config, Placement::Header);

    println!("{}", title.title);
    println!("{}", title.subtitle);
    println!();
    println!("🎂 Age: {result}");
    println!("📅 Days lived: {}", group_thousands(result.total_days));
    println!("⏱  Hours experienced: {}", group_thousands(result.total_hours));
    println!("⏰ Minutes elapsed: {}", group_thousands(result.total_minutes));
    println!(
        "🎉 Next birthday: {} (turns {}, {} day{} to go)",
        result.next_birthday.format("%A, %B %-d, %Y"),
        result.next_birthday_age,
        result.days_to_next_birthday,
        if result.days_to_next_birthday == 1 { "" } else { "s" },
    );

    analytics::track_calculator_usage(analytics, "age").await;

    let card_name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("Friend");

    if output.card {
        for &theme in output.themes {
            let file_name = svg::age_card_file_name(card_name, result.reference.date(), theme);
            let card = svg::generate_age_card(&result, &title, &config.app_name, theme);
            write_card(output, &file_name, &card)?;
            analytics::track_download(analytics, "age", &file_name).await;
        }
    }

    if output.share && config.enable_social_sharing {
        let base = config.share_base_url().context("invalid share domain")?;
        let url = share::age_share_url(
            &base,
            &result,
            card_name,
            relationship.map(Relationship::as_str).unwrap_or(""),
        );
        let text = share::age_share_text(&result, &title, &config.app_name);
        print_share_block(&url, &text, "age", analytics).await;
    }

    print_ad(config, Placement::Footer);

    if watch {
        watch_seconds(birth).await;
    }

    Ok(())
}

async fn run_love(
    output: &Output,
    config: &AppConfig,
    analytics: &dyn Analytics,
    name_a: &str,
    name_b: &str,
) -> Result<()> {
    let result = compute_compatibility(name_a, name_b)?;

    print_ad(config, Placement::Header);

    let filled = result.filled_hearts();
    println!("💖 {} ♥ {}", result.name_a, result.name_b);
    println!();
    println!("{} {}% Love Match!", result.tier.emoji(), result.score);
    println!("✨ {}", result.tier.label());
    println!("{}{}", "💖".repeat(filled), "🤍".repeat(5 - filled));
    println!();
    println!("{}", result.tier.message());
    println!();
    println!("🎭 Entertainment purposes only. Results are not real or scientifically accurate.");

    analytics::track_calculator_usage(analytics, "love").await;

    if output.card {
        for &theme in output.themes {
            let file_name = svg::love_card_file_name(
                &result.name_a,
                &result.name_b,
                Utc::now().date_naive(),
                theme,
            );
            let card = svg::generate_love_card(&result, &config.app_name, theme);
            write_card(output, &file_name, &card)?;
            analytics::track_download(analytics, "love", &file_name).await;
        }
    }

    if output.share && config.enable_social_sharing {
        let base = config.share_base_url().context("invalid share domain")?;
        let url = share::love_share_url(&base, &result);
        let text = share::love_share_text(&result, &config.app_name);
        print_share_block(&url, &text, "love", analytics).await;
    }

    print_ad(config, Placement::Footer);

    Ok(())
}

fn write_card(output: &Output, file_name: &str, card: &str) -> Result<()> {
    fs::create_dir_all(&output.out_dir)
        .with_context(|| format!("failed to create {}", output.out_dir.display()))?;
    let path = output.out_dir.join(file_name);
    fs::write(&path, card).with_context(|| format!("failed to write {}", path.display()))?;
    info!(file = %path.display(), "wrote result card");
    Ok(())
}

fn print_ad(config: &AppConfig, placement: Placement) {
    if let Some(slot_id) = ads::slot(config, placement) {
        println!("{}", ads::placeholder(placement, slot_id));
        println!();
    }
}

async fn print_share_block(url: &Url, text: &str, calculator: &str, analytics: &dyn Analytics) {
    println!();
    println!("📤 Share your result");
    println!();
    println!("{}", share::copy_block(text, url));
    println!();
    for platform in [Platform::Whatsapp, Platform::Facebook, Platform::Twitter] {
        if let Some(link) = share::platform_link(platform, url, text) {
            println!("  {:<9} {link}", platform.as_str());
            analytics::track_social_share(analytics, platform.as_str(), calculator).await;
        }
    }
}

/// Reprints the seconds-lived counter once per second until interrupted.
/// The engine itself stays untouched; this only re-reads the clock.
async fn watch_seconds(birth: NaiveDateTime) {
    println!();
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        ticker.tick().await;
        let lived = (Utc::now().naive_utc() - birth).num_seconds();
        print!("\r⚡ {} seconds lived", group_thousands(lived));
        let _ = io::stdout().flush();
    }
}
