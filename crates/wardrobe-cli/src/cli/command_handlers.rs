use crate::cli::main_types::{CalcArgs, ConfigCommands, InputArgs, LayoutArgs, RowArgs};
use std::io::Write;
use std::path::{Path, PathBuf};
use wardrobe_core::core::opening::{InputPolicy, OpeningInput};
use wardrobe_core::core::services::batch_service::BatchService;
use wardrobe_core::core::services::config_service::ConfigService;
use wardrobe_core::display::{
    HEIGHT_LIMIT_WARNING, OperationStatus, OutputFormat, TableDisplay, display_status,
    export_report,
};
use wardrobe_core::error::{AppError, CliError, DisplayError, StorageError};
use wardrobe_core::storage::openings::{load_inputs, write_template};
use wardrobe_core::utils::input::EnvConfigReader;
use wardrobe_core::utils::logging::print_verbose;
use wardrobe_core::utils::validation::validate_row_number;

fn input_policy(strict: bool) -> InputPolicy {
    if strict {
        InputPolicy::Reject
    } else {
        InputPolicy::Clamp
    }
}

fn load_openings(args: &InputArgs, verbose: bool) -> Result<Vec<OpeningInput>, AppError> {
    let policy = input_policy(args.strict);
    print_verbose(
        verbose,
        &format!(
            "Loading openings from {} ({:?} policy)",
            args.file.display(),
            policy
        ),
    );
    let inputs = load_inputs(&args.file, policy)?;
    print_verbose(verbose, &format!("Loaded {} openings", inputs.len()));
    Ok(inputs)
}

/// Colours only when writing to an interactive terminal and not disabled.
fn use_colors(no_color: bool, writing_to_file: bool) -> bool {
    !no_color
        && !writing_to_file
        && !EnvConfigReader::read_no_color()
        && atty::is(atty::Stream::Stdout)
}

/// Write `content` to `output`, or to stdout when no path is given.
fn emit(content: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|source| StorageError::FileIo {
                path: path.to_string_lossy().to_string(),
                source,
            })?;
            display_status(
                &format!("wrote {}", path.display()),
                OperationStatus::Success,
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content.trim_end_matches('\n'))
                .map_err(|e| DisplayError::TerminalOutput(e.to_string()))?;
        }
    }
    Ok(())
}

#[derive(Default)]
pub struct CalcHandler;

impl CalcHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        args: CalcArgs,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        let format = self.resolve_format(args.format.as_deref(), config_service)?;
        print_verbose(verbose, &format!("Output format: {}", format));

        let constants = config_service.constants()?;
        let inputs = load_openings(&args.input, verbose)?;
        let report = BatchService::new(constants).evaluate(&inputs);
        print_verbose(
            verbose,
            &format!(
                "{} OK, {} to check",
                report.summary.ok, report.summary.check
            ),
        );

        let output = args.output.as_deref();
        let content = match format {
            OutputFormat::Table => {
                let display = TableDisplay::new()
                    .with_colors(use_colors(args.no_color, output.is_some()));
                let mut sections = Vec::new();
                if args.problems_only {
                    sections.push(display.render_problems(&report).unwrap_or_else(|| {
                        "✅ All openings fit within the height limits".to_string()
                    }));
                } else {
                    sections.push(display.render_summary(&report.summary));
                    sections.push(display.render_results(&report.rows));
                    if let Some(problems) = display.render_problems(&report) {
                        sections.push(problems);
                    }
                }
                sections.join("\n\n")
            }
            OutputFormat::Csv | OutputFormat::Json => {
                export_report(&report, format, args.problems_only)?
            }
        };

        emit(&content, output)?;

        if !report.all_ok() {
            display_status(HEIGHT_LIMIT_WARNING, OperationStatus::Warning);
        }
        Ok(())
    }

    /// CLI flag > WARDROBE_FORMAT > config file > table
    fn resolve_format(
        &self,
        flag: Option<&str>,
        config_service: &ConfigService,
    ) -> Result<OutputFormat, AppError> {
        match flag {
            Some(value) => Ok(value.parse::<OutputFormat>()?),
            None => match config_service.default_format()? {
                Some(value) => Ok(value.parse::<OutputFormat>()?),
                None => Ok(OutputFormat::Table),
            },
        }
    }
}

#[derive(Default)]
pub struct ShowHandler;

impl ShowHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        args: RowArgs,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        validate_row_number(args.row)?;
        let constants = config_service.constants()?;
        let inputs = load_openings(&args.input, verbose)?;
        let service = BatchService::new(constants.clone());
        let row = service.evaluate_row(&inputs, args.row)?;

        let display = TableDisplay::new().with_colors(use_colors(args.no_color, false));
        emit(&display.render_detail(&row, &constants), None)?;

        if !row.is_ok() {
            display_status(HEIGHT_LIMIT_WARNING, OperationStatus::Warning);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct LayoutHandler;

impl LayoutHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        args: LayoutArgs,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        validate_row_number(args.row)?;
        let constants = config_service.constants()?;
        let inputs = load_openings(&args.input, verbose)?;
        let (row, layout) = BatchService::new(constants).layout_row(&inputs, args.row)?;
        print_verbose(
            verbose,
            &format!(
                "Row {}: {} doors, dropdown label '{}'",
                row.row,
                layout.doors.len(),
                layout.dropdown_label
            ),
        );

        let json = serde_json::to_string_pretty(&layout).map_err(|e| {
            StorageError::SerializeFailed {
                message: format!("Failed to serialize layout: {}", e),
            }
        })?;
        emit(&json, args.output.as_deref())
    }
}

#[derive(Default)]
pub struct TemplateHandler;

impl TemplateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, output: PathBuf, verbose: bool) -> Result<(), AppError> {
        if output.exists() {
            return Err(AppError::Cli(CliError::InvalidArguments(format!(
                "{} already exists; choose another --output path",
                output.display()
            ))));
        }
        print_verbose(verbose, &format!("Writing template to {}", output.display()));
        write_template(&output)?;
        display_status(
            &format!("wrote starter openings file {}", output.display()),
            OperationStatus::Success,
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: &Path,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                let constants = config_service.constants()?;
                let default_format = config_service.default_format()?;
                let path = config_path.to_string_lossy();
                let location = config_path.exists().then_some(path.as_ref());

                let display = TableDisplay::new().with_colors(use_colors(false, false));
                emit(
                    &display.render_constants(&constants, default_format.as_deref(), location),
                    None,
                )
            }
            ConfigCommands::Init { force } => {
                if config_path.exists() && !force {
                    return Err(AppError::Cli(CliError::InvalidArguments(format!(
                        "{} already exists; use --force to overwrite",
                        config_path.display()
                    ))));
                }
                print_verbose(
                    verbose,
                    &format!("Writing default constants to {}", config_path.display()),
                );
                config_service.init_constants();
                config_service.save_config(Some(config_path.to_path_buf()))?;
                display_status(
                    &format!("wrote {}", config_path.display()),
                    OperationStatus::Success,
                );
                Ok(())
            }
        }
    }
}
