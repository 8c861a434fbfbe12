//! Link management commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkRequest, LinkService};
use crate::storage::GoLink;

fn print_link(link: &GoLink) {
    println!(
        "  {:>4}  {} -> {}  {}",
        link.id.to_string().dimmed(),
        format!("go/{}", link.shortlink).cyan(),
        link.destination.blue().underline(),
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed()
    );
}

pub async fn add_link(
    service: &LinkService,
    shortlink: &str,
    destination: &str,
) -> Result<(), CliError> {
    let link = service
        .create_link(LinkRequest::new(shortlink, destination))
        .await?;

    println!(
        "{} Added go link #{}: {} -> {}",
        "✓".bold().green(),
        link.id,
        link.shortlink.cyan(),
        link.destination.blue().underline()
    );
    Ok(())
}

pub async fn list_links(service: &LinkService, filter: Option<String>) -> Result<(), CliError> {
    let links = service.list_links(filter.clone()).await?;

    if links.is_empty() {
        match filter {
            Some(f) => println!("{} No links match '{}'", "ℹ".bold().blue(), f),
            None => println!("{} No links yet", "ℹ".bold().blue()),
        }
        return Ok(());
    }

    println!("{}", "Go links:".bold().green());
    for link in &links {
        print_link(link);
    }
    println!();
    println!("{} {} link(s)", "ℹ".bold().blue(), links.len());
    Ok(())
}

pub async fn update_link(
    service: &LinkService,
    id: i64,
    shortlink: &str,
    destination: &str,
) -> Result<(), CliError> {
    let old = service.get_link_by_id(id).await?;
    let link = service
        .update_link(id, LinkRequest::new(shortlink, destination))
        .await?;

    if let Some(old) = old {
        println!(
            "{} Updated #{}: {} -> {}",
            "✓".bold().green(),
            id,
            old.shortlink.dimmed(),
            old.destination.dimmed().strikethrough()
        );
    }
    print_link(&link);
    Ok(())
}

pub async fn remove_link(service: &LinkService, id: i64) -> Result<(), CliError> {
    service.delete_link(id).await?;
    println!("{} Deleted go link #{}", "✓".bold().green(), id);
    Ok(())
}
