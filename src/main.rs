use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use quit_tracker::cli::{
    handle_audit_command, handle_history_command, handle_init_command, handle_log_command,
    handle_quote_command, handle_summary_command, parse_date_arg, InitArgs, LogArgs,
};
use quit_tracker::config::{Settings, TrackerPaths};
use quit_tracker::i18n::{detect_locale, resolve_language, Quotes, Translations};
use quit_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "quit",
    version,
    about = "Daily quit-smoking tracker",
    long_about = "quit records a short daily checklist while you quit smoking, \
                  together with a stress rating and a comment, and estimates \
                  how much money the smoke-free days have saved."
)]
struct Cli {
    /// Data directory (defaults to the platform config directory)
    #[arg(long, global = true, env = "QUIT_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Two-letter language code for labels and quotes
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save pack price, candy price and daily cigarette count
    Init(InitArgs),

    /// Record the checklist for a day
    #[command(alias = "add")]
    Log(LogArgs),

    /// Show every recorded day
    History {
        /// Only show this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show savings totals and the daily chart
    Summary {
        /// Export the daily series to a CSV file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the quote of the day
    Quote {
        /// Date to pick the quote for (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let locale = detect_locale();
    let language = resolve_language(cli.lang.as_deref(), locale.as_deref());
    let today = Local::now().date_naive();

    let storage = Storage::new(paths.clone())?;
    let translations = || Translations::load(&paths, &language);

    match cli.command {
        Some(Commands::Init(args)) => {
            handle_init_command(&storage, args, locale.as_deref())?;
        }
        Some(Commands::Log(args)) => {
            handle_log_command(&storage, &translations()?, args, today)?;
        }
        Some(Commands::History { date }) => {
            let date = date
                .map(|d| parse_date_arg(Some(&d), today))
                .transpose()?;
            handle_history_command(&storage, &translations()?, date)?;
        }
        Some(Commands::Summary { output }) => {
            let settings = Settings::load_required(&paths)?;
            handle_summary_command(&storage, &settings, &translations()?, output)?;
        }
        Some(Commands::Quote { date }) => {
            let date = parse_date_arg(date.as_deref(), today)?;
            handle_quote_command(&paths, &language, date)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("quit-tracker configuration");
            println!("==========================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("History file:      {}", paths.history_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!("Language:          {}", language);
            println!();
            match Settings::load(&paths)? {
                Some(settings) => {
                    println!("Settings:");
                    println!("  Cigarettes per day: {}", settings.cigarettes_per_day);
                    println!(
                        "  Pack price:         {}",
                        settings.pack_price.format_with_currency(&settings.currency)
                    );
                    println!(
                        "  Candy price:        {}",
                        settings.candy_price.format_with_currency(&settings.currency)
                    );
                }
                None => println!("Settings: not initialized (run 'quit init')"),
            }
        }
        None => {
            let quotes = Quotes::load(&paths, &language)?;
            let t = translations()?;
            println!("{}", t.text("title", "Quit smoking tracker"));
            println!();
            println!("{}", quotes.quote_of_the_day(today));
            println!();
            println!("Run 'quit --help' for usage information.");
        }
    }

    Ok(())
}
