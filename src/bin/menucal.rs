use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use menucal::cli;
use menucal::client::google::GoogleCalendarStore;
use menucal::client::{UploadOutcome, upload};
use menucal::config::Config;
use menucal::locale::{Level, LocaleProfile, Meal};
use menucal::model::{MenuEvent, adapter, segment};
use menucal::storage::LocalStorage;
use std::env;
use std::fs;
use std::path::PathBuf;

struct Options {
    input: PathBuf,
    language: String,
    date_language: Option<String>,
    level: Level,
    meal: Meal,
    year: Option<i32>,
    calendar: Option<String>,
    out_dir: Option<PathBuf>,
    verbose: bool,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut input = None;
    let mut language = "en".to_string();
    let mut date_language = None;
    let mut level = None;
    let mut meal = None;
    let mut year = None;
    let mut calendar = None;
    let mut out_dir = None;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut flag_value = |name: &str| -> Result<String> {
            iter.next()
                .cloned()
                .with_context(|| format!("{} requires a value", name))
        };
        match arg.as_str() {
            "--lang" => language = flag_value("--lang")?,
            "--date-lang" => date_language = Some(flag_value("--date-lang")?),
            "--level" => level = Some(flag_value("--level")?.parse()?),
            "--meal" => meal = Some(flag_value("--meal")?.parse()?),
            "--year" => year = Some(flag_value("--year")?.parse::<i32>()?),
            "--calendar" => calendar = Some(flag_value("--calendar")?),
            "--out" => out_dir = Some(PathBuf::from(flag_value("--out")?)),
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => bail!("Unknown option '{}'", other),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    bail!("More than one input file given");
                }
            }
        }
    }

    Ok(Options {
        input: input.context("Missing input text file")?,
        language,
        date_language,
        level: level.context("Missing --level")?,
        meal: meal.context("Missing --meal")?,
        year,
        calendar,
        out_dir,
        verbose,
    })
}

fn load_config_or_default() -> Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) if Config::is_missing_config_error(&e) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

/// Runs the extraction pipeline over one document's text.
fn extract_events(opts: &Options, config: &Config) -> Result<Vec<MenuEvent>> {
    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read '{}'", opts.input.display()))?;
    let content_locale = LocaleProfile::get(&opts.language)?;
    let date_locale = match &opts.date_language {
        Some(tag) => LocaleProfile::get(tag)?,
        None => content_locale,
    };
    let title = config.full_title(&content_locale.event_title(opts.level, opts.meal)?);
    let year = opts.year.unwrap_or_else(|| Local::now().year());

    let events = segment(&text, &title, content_locale, date_locale, year);
    log::info!(
        "extracted {} event(s) from {}",
        events.len(),
        opts.input.display()
    );
    Ok(events)
}

fn run_generate(opts: &Options) -> Result<()> {
    let config = load_config_or_default()?;
    let events = extract_events(opts, &config)?;
    if events.is_empty() {
        log::warn!("nothing generated for {}", opts.input.display());
        return Ok(());
    }

    let ics = adapter::to_calendar(&events).to_string();
    let locale = LocaleProfile::get(&opts.language)?;
    let dir = match &opts.out_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let path = dir.join(locale.output_filename(opts.level, opts.meal));
    if LocalStorage::write_calendar(&path, &ics)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_upload(opts: &Options) -> Result<()> {
    let config = load_config_or_default()?;
    let events = extract_events(opts, &config)?;
    if events.is_empty() {
        log::warn!("nothing to upload for {}", opts.input.display());
        return Ok(());
    }

    let locale = LocaleProfile::get(&opts.language)?;
    let menu_key = locale.menu_key(opts.level, opts.meal);
    let calendar_id = match &opts.calendar {
        Some(id) => id.as_str(),
        None => config
            .resolve_calendar(&menu_key)
            .with_context(|| format!("No calendar configured for '{}'", menu_key))?,
    };

    let token = if config.api_token.is_empty() {
        env::var("MENUCAL_API_TOKEN").context("No API token in the config or MENUCAL_API_TOKEN")?
    } else {
        config.api_token.clone()
    };

    let store = GoogleCalendarStore::with_base_url(&token, &config.api_base_url);
    let results = upload(&store, calendar_id, &events)?;
    let created = results
        .iter()
        .filter(|r| matches!(r.outcome, UploadOutcome::Created { .. }))
        .count();
    println!(
        "{}: {} created, {} skipped",
        calendar_id,
        created,
        results.len() - created
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" || args[1] == "help" {
        cli::print_help("menucal");
        return Ok(());
    }

    let command = args[1].as_str();
    let opts = parse_options(&args[2..])?;

    let _ = simplelog::TermLogger::init(
        if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );

    match command {
        "generate" => run_generate(&opts),
        "upload" => run_upload(&opts),
        other => {
            cli::print_help("menucal");
            bail!("Unknown command '{}'", other);
        }
    }
}
