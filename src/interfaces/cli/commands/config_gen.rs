//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

pub const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

/// Write the default configuration as TOML
///
/// An existing file is only replaced with `--force` or after confirmation.
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_PATH.to_string());

    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    StaticConfig::default().save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "{} {} {}",
        "✓".bold().green(),
        "Configuration file generated:".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Values can be overridden with GOLINKS__<SECTION>__<KEY> environment variables".dimmed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_loadable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("golinks.toml");
        let path_str = path.to_str().unwrap().to_string();

        config_generate(Some(path_str.clone()), true).unwrap();

        let loaded = StaticConfig::try_load(&path_str).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.database.database_url, "golinks.db");
    }
}
