use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::AnalyticsService;

pub async fn show_stats(
    service: &AnalyticsService,
    shortlink: Option<&str>,
) -> Result<(), CliError> {
    if let Some(shortlink) = shortlink {
        let stats = service.usage_stats(shortlink).await?;
        let last = stats
            .last_used
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{} used {} time(s), last used {}",
            format!("go/{}", shortlink.trim()).cyan(),
            stats.usage_count.to_string().bold(),
            last.yellow()
        );
        return Ok(());
    }

    let rows = service.all_usage_stats().await?;
    if rows.is_empty() {
        println!("{} No usage recorded yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Usage:".bold().green());
    for row in rows {
        let last = row
            .last_used
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {:>6}  {}  {}",
            row.usage_count.to_string().bold(),
            format!("go/{}", row.shortlink).cyan(),
            last.dimmed()
        );
    }
    Ok(())
}
