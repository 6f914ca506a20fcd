use adscribe::adcopy::AdCopy;
use adscribe::analytics::AnalyticsSummary;
use adscribe::catalog::location_name;
use adscribe::commands::{CmdMessage, MessageLevel};
use adscribe::config::AdScribeConfig;
use adscribe::model::{Campaign, CampaignStatus, User};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::Path;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 9;
const TIME_WIDTH: usize = 16;
const BAR_WIDTH: usize = 30;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_campaign_list(campaigns: &[Campaign]) {
    if campaigns.is_empty() {
        return;
    }

    for campaign in campaigns {
        let id = format!("{:<width$}", campaign.short_id(), width = ID_WIDTH);
        let status = format!("{:<width$}", campaign.status, width = STATUS_WIDTH);
        let status = match campaign.status {
            CampaignStatus::Live => status.green(),
            CampaignStatus::Pending => status.yellow(),
        };

        let summary = format!(
            "{} · {} · {}",
            campaign.name,
            campaign.location,
            campaign.interests.join(", ")
        );
        let fixed = ID_WIDTH + STATUS_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let summary = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary.width());

        println!(
            "{}{}{}{}{}",
            id.dimmed(),
            status,
            summary,
            " ".repeat(padding),
            format_time_ago(campaign.date_created).dimmed()
        );
    }
}

pub(super) fn print_campaign_detail(campaign: &Campaign) {
    let status = match campaign.status {
        CampaignStatus::Live => campaign.status.to_string().green(),
        CampaignStatus::Pending => campaign.status.to_string().yellow(),
    };
    println!("{} {}", campaign.name.bold(), status);
    println!("--------------------------------");
    print_field("ID", &campaign.id.to_string());
    print_field(
        "Created",
        &campaign.date_created.format("%Y-%m-%d %H:%M").to_string(),
    );
    print_field("Image", &campaign.image_url);
    print_field("Age range", &campaign.age_range);
    print_field("Location", &location_name(&campaign.location));
    print_field("Interests", &campaign.interests.join(", "));
    print_field("Impressions", &format_thousands(u64::from(campaign.impressions)));
    print_field("CTR", &format!("{:.2}%", campaign.click_through_rate));
    println!();
    println!("{}", campaign.ad_copy);
}

fn print_field(label: &str, value: &str) {
    println!("{:<12} {}", format!("{}:", label).dimmed(), value);
}

pub(super) fn print_ad_copy(copy: &AdCopy) {
    println!("{}", copy.text);
}

pub(super) fn print_user(user: &User) {
    println!("{} <{}>", user.name.bold(), user.email);
}

pub(super) fn print_analytics(summary: &AnalyticsSummary) {
    if summary.is_empty() {
        return;
    }

    println!("{}", "Overview".bold());
    print_field("Campaigns", &summary.total_campaigns.to_string());
    print_field(
        "Live",
        &format!(
            "{} ({} pending)",
            summary.live_campaigns, summary.pending_campaigns
        ),
    );
    print_field("Impressions", &format_thousands(summary.total_impressions));
    print_field("Average CTR", &format!("{:.2}%", summary.average_ctr));

    println!();
    println!("{}", "By location".bold());
    let widest = summary
        .by_location
        .iter()
        .map(|entry| entry.campaigns)
        .max()
        .unwrap_or(1);
    for entry in &summary.by_location {
        let bar_len = (entry.campaigns * BAR_WIDTH).div_ceil(widest);
        println!(
            "  {:<24} {} {}",
            location_name(&entry.location),
            "█".repeat(bar_len).cyan(),
            entry.campaigns
        );
    }

    println!();
    println!("{}", "Performance".bold());
    for row in &summary.performance {
        let name = truncate_to_width(&row.name, 40);
        let padding = 40usize.saturating_sub(name.width());
        println!(
            "  {}{} {:>8} impressions {:>7.2}% CTR",
            name,
            " ".repeat(padding),
            format_thousands(u64::from(row.impressions)),
            row.click_through_rate
        );
    }
}

pub(super) fn print_config(config: &AdScribeConfig, data_dir: &Path) {
    print_field("data_dir", &data_dir.display().to_string());
    print_field("endpoint", &config.generator_endpoint);
    print_field("model", &config.generator_model);
    print_field("timeout", &format!("{}s", config.generator_timeout().as_secs()));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
