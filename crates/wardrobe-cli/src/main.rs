use clap::Parser;
use wardrobe_core::storage::config::Config;
use wardrobe_core::utils::logging::init_logging;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load Config
    let config_path = cli.config_dir.as_deref().map(Config::file_in);

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            eprintln!("Using config directory: {}", config_dir.display());
        }
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command) {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("{} Hint: {}", e.severity().emoji(), hint);
        }
        std::process::exit(1);
    }
}
