use std::path::PathBuf;

use crate::cli::commands::Cli;
use crate::cli::output::TaskListJson;
use crate::io::config_io;
use crate::io::logging;
use crate::model::config::AppConfig;
use crate::tui::app::App;

/// Apply command-line overrides on top of the loaded config
pub fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if cli.allow_duplicates {
        config.behavior.reject_duplicates = false;
    }
    if cli.no_confirm {
        config.behavior.confirm_remove = false;
    }
    if let Some(dir) = &cli.log_dir {
        config.log.dir = Some(dir.display().to_string());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
}

/// Build the screen state from config and CLI, with `--add` tasks seeded
pub fn build_app(config: &AppConfig, cli: &Cli) -> Result<App, Box<dyn std::error::Error>> {
    let mut app = App::from_config(config)?;
    app.seed_tasks(&cli.add);
    Ok(app)
}

/// Load config, start logging, run the TUI, then report the final list
pub fn launch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    let _logger = match &config.log.dir {
        Some(dir) => Some(logging::init_logging(&config.log.level, &PathBuf::from(dir))?),
        None => None,
    };

    let app = build_app(&config, &cli)?;
    let app = crate::tui::run(app)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&TaskListJson::new(&app.tasks))?
        );
    }
    Ok(())
}
