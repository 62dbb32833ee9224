//! Preference Editor CLI
//!
//! Command-line interface for viewing and editing the flat-file preferences.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pref_editor::catalog::Item;
use pref_editor::controller::PreferenceController;
use pref_editor::model::{ModelEvent, RecordModel};
use pref_editor::storage::{self, PrefKey, PrefStore};
use pref_editor::utils::parsing::{
    ListSide, SHELL_HELP, ShellCommand, parse_shell_command, parse_value,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Preference Editor
#[derive(Parser, Debug)]
#[command(name = "pref-editor-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the preference file
    #[arg(short, long, global = true, default_value = "pref.txt")]
    file: PathBuf,

    /// Use the preference file in the user config directory
    #[arg(short, long, global = true, conflicts_with = "file")]
    user: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all preferences
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one preference
    Get {
        /// Key: option1, option2, line1, line2 or enabled
        key: PrefKey,
    },

    /// Set one preference
    Set {
        /// Key: option1, option2, line1, line2 or enabled
        key: PrefKey,

        /// New value (true/false, text, or comma-separated items)
        #[arg(default_value = "")]
        value: String,
    },

    /// Flip option1 or option2
    Toggle {
        /// Key: option1 or option2
        key: PrefKey,
    },

    /// Overwrite the preference file with defaults
    Reset,

    /// Show the enabled and disabled item lists
    List,

    /// Move an item from the disabled to the enabled list
    Enable {
        /// Item name
        item: Item,
    },

    /// Move an item from the enabled to the disabled list
    Disable {
        /// Item name
        item: Item,
    },

    /// Move an enabled row one position up
    Up {
        /// Row number (0-based)
        row: usize,
    },

    /// Move an enabled row one position down
    Down {
        /// Row number (0-based)
        row: usize,
    },

    /// Interactive editing session
    Shell,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = if args.user {
        storage::user_pref_path().context("Failed to resolve user preference path")?
    } else {
        args.file
    };
    let record = RecordModel::new(PrefStore::new(path));

    match args.command {
        Command::Show { json } => cmd_show(&record, json),
        Command::Get { key } => cmd_get(&record, key),
        Command::Set { key, value } => cmd_set(&record, key, &value),
        Command::Toggle { key } => cmd_toggle(&record, key),
        Command::Reset => cmd_reset(&record),
        Command::List => cmd_list(&PreferenceController::new(&record)),
        Command::Enable { item } => cmd_enable(&record, item),
        Command::Disable { item } => cmd_disable(&record, item),
        Command::Up { row } => cmd_move(&record, row, true),
        Command::Down { row } => cmd_move(&record, row, false),
        Command::Shell => cmd_shell(&record),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_show(record: &RecordModel, json: bool) -> Result<()> {
    let prefs = record
        .store()
        .load_record()
        .context("Failed to read preferences")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
        return Ok(());
    }

    println!("Preferences ({})", record.store().path().display());
    for key in PrefKey::ALL {
        println!("  {:<14} {}", key.name(), prefs.value(key));
    }
    Ok(())
}

fn cmd_get(record: &RecordModel, key: PrefKey) -> Result<()> {
    let value = record
        .get(key)
        .with_context(|| format!("Failed to read {}", key))?;
    println!("{}", value);
    Ok(())
}

fn cmd_set(record: &RecordModel, key: PrefKey, raw: &str) -> Result<()> {
    let value = parse_value(key, raw)?;
    let mut controller = PreferenceController::new(record);
    let changed = controller
        .submit(key, value.clone())
        .with_context(|| format!("Failed to set {}", key))?;

    if changed {
        println!("✅ {} = {}", key, value);
    } else {
        println!("{} already {}", key, value);
    }
    Ok(())
}

fn cmd_toggle(record: &RecordModel, key: PrefKey) -> Result<()> {
    let mut controller = PreferenceController::new(record);
    let value = controller
        .toggle(key)
        .with_context(|| format!("Failed to toggle {}", key))?;
    println!("✅ {} = {}", key, value);
    Ok(())
}

fn cmd_reset(record: &RecordModel) -> Result<()> {
    record
        .store()
        .write_defaults()
        .context("Failed to write defaults")?;
    println!("✅ Wrote defaults to {}", record.store().path().display());
    Ok(())
}

fn cmd_list(controller: &PreferenceController) -> Result<()> {
    let enabled = controller.enabled().items()?;
    let disabled = controller.disabled().items()?;

    println!("Enabled:");
    print_rows(&enabled, controller.enabled_selection());
    println!("Disabled:");
    print_rows(&disabled, controller.disabled_selection());
    Ok(())
}

fn print_rows(items: &[Item], selection: Option<usize>) {
    if items.is_empty() {
        println!("  (none)");
    }
    for (row, item) in items.iter().enumerate() {
        let marker = if selection == Some(row) { ">" } else { " " };
        println!(" {} {}. {}", marker, row, item);
    }
}

fn cmd_enable(record: &RecordModel, item: Item) -> Result<()> {
    let mut controller = PreferenceController::new(record);
    controller.select_item(item)?;
    if !controller.enable()? {
        println!("{} is already enabled", item);
        return Ok(());
    }
    println!("✅ Enabled {}", item);
    cmd_list(&controller)
}

fn cmd_disable(record: &RecordModel, item: Item) -> Result<()> {
    let mut controller = PreferenceController::new(record);
    controller.select_item(item)?;
    if !controller.disable()? {
        println!("{} is already disabled", item);
        return Ok(());
    }
    println!("✅ Disabled {}", item);
    cmd_list(&controller)
}

fn cmd_move(record: &RecordModel, row: usize, up: bool) -> Result<()> {
    let mut controller = PreferenceController::new(record);
    controller.select_enabled(Some(row)).context("Invalid row")?;

    let moved = if up {
        controller.move_up()?
    } else {
        controller.move_down()?
    };
    if !moved {
        println!("Row {} is already at the edge of the list", row);
    }
    cmd_list(&controller)
}

fn cmd_shell(record: &RecordModel) -> Result<()> {
    let mut controller = PreferenceController::new(record);
    controller.enabled().subscribe(|event| log_event("enabled", event));
    controller.disabled().subscribe(|event| log_event("disabled", event));
    record.subscribe(|event| log_event("record", event));

    println!(
        "Editing {}. Type 'help' for commands.",
        record.store().path().display()
    );
    cmd_list(&controller)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("pref> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_shell_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(e) = run_shell_command(record, &mut controller, command) {
            println!("❌ {:#}", e);
        }
    }

    Ok(())
}

fn run_shell_command(
    record: &RecordModel,
    controller: &mut PreferenceController,
    command: ShellCommand,
) -> Result<()> {
    match command {
        ShellCommand::Select(ListSide::Enabled, row) => controller.select_enabled(Some(row))?,
        ShellCommand::Select(ListSide::Disabled, row) => controller.select_disabled(Some(row))?,
        ShellCommand::SelectItem(item) => controller.select_item(item)?,
        ShellCommand::Clear => {
            controller.select_enabled(None)?;
            controller.select_disabled(None)?;
        }
        ShellCommand::Up => {
            report_gesture(controller.move_up()?, "Select a row below the top first")
        }
        ShellCommand::Down => {
            report_gesture(controller.move_down()?, "Select a row above the bottom first")
        }
        ShellCommand::Enable => {
            report_gesture(controller.enable()?, "Select a disabled row first")
        }
        ShellCommand::Disable => {
            report_gesture(controller.disable()?, "Select an enabled row first")
        }
        ShellCommand::Toggle(key) => {
            let value = controller.toggle(key)?;
            println!("✅ {} = {}", key, value);
            return Ok(());
        }
        ShellCommand::Set(key, value) => {
            controller.submit(key, value)?;
            return cmd_show(record, false);
        }
        ShellCommand::Show => return cmd_show(record, false),
        ShellCommand::Help => {
            println!("{}", SHELL_HELP);
            return Ok(());
        }
        ShellCommand::List | ShellCommand::Quit => {}
    }
    cmd_list(controller)
}

fn report_gesture(done: bool, hint: &str) {
    if !done {
        println!("Nothing to do. {}", hint);
    }
}

fn log_event(model: &str, event: &ModelEvent) {
    tracing::debug!(model, ?event, "view refresh");
}
