use crate::cli::command_handlers::{
    CalcHandler, ConfigHandler, LayoutHandler, ShowHandler, TemplateHandler,
};
use crate::cli::main_types::Commands;
use std::path::PathBuf;
use wardrobe_core::core::services::config_service::ConfigService;
use wardrobe_core::error::AppError;
use wardrobe_core::storage::config::Config;
use wardrobe_core::utils::logging::print_verbose;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            verbose,
        }
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    // Explicit --config-dir path, or the default location
    fn effective_config_path(&self) -> Result<PathBuf, AppError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_file_path()?),
        }
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Calc(args) => {
                self.log_verbose("Dispatching calc command");
                CalcHandler::new().handle(args, &self.create_config_service(), self.verbose)
            }
            Commands::Show(args) => {
                self.log_verbose("Dispatching show command");
                ShowHandler::new().handle(args, &self.create_config_service(), self.verbose)
            }
            Commands::Layout(args) => {
                self.log_verbose("Dispatching layout command");
                LayoutHandler::new().handle(args, &self.create_config_service(), self.verbose)
            }
            Commands::Template { output } => TemplateHandler::new().handle(output, self.verbose),
            Commands::Config { command } => {
                let config_path = self.effective_config_path()?;
                let mut config_service = self.create_config_service();
                ConfigHandler::new().handle(
                    command,
                    &mut config_service,
                    &config_path,
                    self.verbose,
                )
            }
        }
    }
}
