use backfill::application::{ConfigService, GenerateService};
use backfill::cli::{
    collect_request, format_config, format_next_steps, format_preview, Cli, Commands,
    GenerateArgs,
};
use backfill::error::BackfillError;
use backfill::infrastructure::{
    save_script, CalendarSource, ConfigFile, FileCalendar, HttpCalendar, Prompter,
};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BACKFILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), BackfillError> {
    let config_file = ConfigFile::discover(cli.config);

    match cli.command {
        Some(Commands::Generate(args)) => generate(&config_file, args),
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(config_file);

            if list {
                // List all config
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: backfill config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    backfill::application::manage_config::CONFIG_KEYS.join(", ")
                );
                Ok(())
            }
        }
        None => {
            println!("backfill - Paint a contribution pattern with scripted commits");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn generate(config_file: &ConfigFile, args: GenerateArgs) -> Result<(), BackfillError> {
    let config = config_file.load()?;

    // Prompts go to stderr so --print output stays clean
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let request = collect_request(&args, &config, &mut prompter)?;

    let calendar: Box<dyn CalendarSource> = match &args.calendar {
        Some(path) => Box::new(FileCalendar::new(path.clone())),
        None => Box::new(HttpCalendar::new(&config.base_url)),
    };
    let repo = request.repo.clone();
    let generation = GenerateService::new(calendar).execute(request)?;

    if args.print {
        print!("{}", generation.script.as_str());
        return Ok(());
    }

    print!("{}", format_preview(&generation));

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));
    save_script(&output, &generation.script)?;

    println!(
        "{}",
        format_next_steps(&output.display().to_string(), &repo, &config)
    );
    Ok(())
}
