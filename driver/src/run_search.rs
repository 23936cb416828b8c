use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use quicc::backend::{BackendError, ExecutionBackend};
use quicc::catalog::{get_catalog, Catalog, CatalogError, OutputWidth};
use quicc::types::constants::{MAX_INPUT_WIDTH, MAX_XOF_OUTPUT_WIDTH, MIN_INPUT_WIDTH, MIN_XOF_OUTPUT_WIDTH};
use quicc::types::max_value_for_width;
use quicc::utils::logging;
use quicc::{Entrypoint, FullSimulator, ResourceEstimator};
use crate::config::Config;
use crate::interface::{MainMenuOption, SearchInterface};
use crate::report;
use crate::search_method;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Backend failed: {0}")]
    Backend(#[from] BackendError),
}

/// Which backend a collected search is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Analyze,
    Simulate,
}

impl RunMode {
    fn operation_prompt(&self) -> &'static str {
        match self {
            RunMode::Analyze => "Choose an operation to analyze:",
            RunMode::Simulate => "Choose an operation to simulate:",
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Driver
// ------------------------------------------------------------------------------------------------

/// Interactive main loop: menu, parameter collection, dispatch, reporting
pub struct SearchDriver<R, W> {
    interface: SearchInterface<R, W>,
    catalog: &'static Catalog,
    estimator: ResourceEstimator,
    simulator: FullSimulator,
    config: Config,
}

impl<R: BufRead, W: Write> SearchDriver<R, W> {
    pub fn new(interface: SearchInterface<R, W>, config: Config) -> Self {
        let mut simulator = FullSimulator::new(config.simulator.max_input_width, config.simulator.seed);
        if !config.simulator.check_memory {
            simulator = simulator.without_memory_check();
        }
        Self {
            interface,
            catalog: get_catalog(),
            estimator: ResourceEstimator::new(),
            simulator,
            config,
        }
    }

    pub fn into_interface(self) -> SearchInterface<R, W> {
        self.interface
    }

    /// Runs until the operator quits or the console closes.
    /// Backend and catalog failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), DriverError> {
        if self.config.display.banner {
            self.interface.show_banner()?;
        }
        match self.menu_loop().await {
            Err(DriverError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                logging::log("DRIVER", "Console closed");
                self.quit()
            }
            other => other,
        }
    }

    async fn menu_loop(&mut self) -> Result<(), DriverError> {
        loop {
            match self.interface.choose_main_menu()? {
                MainMenuOption::Analyze => self.run_once(RunMode::Analyze).await?,
                MainMenuOption::Simulate => self.run_once(RunMode::Simulate).await?,
                MainMenuOption::Help => self.interface.show_help()?,
                MainMenuOption::Quit => return self.quit(),
            }
        }
    }

    fn quit(&mut self) -> Result<(), DriverError> {
        writeln!(self.interface.output(), "Exiting...")?;
        self.interface.output().flush()?;
        Ok(())
    }

    async fn run_once(&mut self, mode: RunMode) -> Result<(), DriverError> {
        let entrypoint = self.collect_parameters(mode)?;
        let params = entrypoint.parameters();
        logging::log("DRIVER", &format!(
            "Run started at {}: {:?} {} over {} bits, output width {}, targets {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            mode,
            params.operation(),
            params.input_width(),
            params.output_width(),
            params.targets()
        ));

        match mode {
            RunMode::Analyze => {
                write!(self.interface.output(), "\nEstimating resources...")?;
                self.interface.output().flush()?;
                let (report, elapsed) = self.dispatch(&self.estimator, &entrypoint).await?;
                let out = self.interface.output();
                writeln!(out, "Done")?;
                report::write_runtime(out, elapsed)?;
                report::write_estimation(out, &report)?;
            }
            RunMode::Simulate => {
                write!(self.interface.output(), "\nSimulating quantum program...")?;
                self.interface.output().flush()?;
                let (outcome, elapsed) = self.dispatch(&self.simulator, &entrypoint).await?;
                let out = self.interface.output();
                writeln!(out, "Done")?;
                report::write_runtime(out, elapsed)?;
                report::write_simulation(out, &outcome)?;
                logging::log("DRIVER", &format!("Simulation outcome: {}", outcome));
            }
        }
        Ok(())
    }

    /// Operation, search method, input width, output width and output to match
    pub fn collect_parameters(&mut self, mode: RunMode) -> Result<Entrypoint, DriverError> {
        let operations = match mode {
            RunMode::Analyze => self.catalog.analysis_operations(),
            RunMode::Simulate => self.catalog.simulation_operations(),
        };
        let operation = self.interface.choose(mode.operation_prompt(), &operations)?;
        let targets = search_method::choose_and_generate(&mut self.interface)?;
        let input_width: u32 = self.interface.read_int(
            "Enter size of search space in bits (<63):",
            MIN_INPUT_WIDTH..=MAX_INPUT_WIDTH,
        )?;
        let output_width = self.resolve_output_width(operation)?;
        let output_to_match = self.interface.read_hex_integer(
            "Enter known output for which to find a matching input (hex):",
            &max_value_for_width(output_width),
        )?;

        let entrypoint = self.catalog.build_entrypoint(
            operation,
            targets,
            input_width,
            output_width,
            output_to_match,
        )?;
        Ok(entrypoint)
    }

    fn resolve_output_width(&mut self, operation: &str) -> Result<u32, DriverError> {
        match self.catalog.output_width(operation)? {
            OutputWidth::Fixed(width) => Ok(width),
            OutputWidth::Dynamic => Ok(self
                .interface
                .read_int("Output length?", MIN_XOF_OUTPUT_WIDTH..=MAX_XOF_OUTPUT_WIDTH)?),
        }
    }

    /// Awaits one backend run, timing it and showing a spinner when enabled
    async fn dispatch<B: ExecutionBackend>(
        &self,
        backend: &B,
        entrypoint: &Entrypoint,
    ) -> Result<(B::Output, Duration), DriverError> {
        let spinner = self.config.display.progress.then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(backend.name());
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        let start = Instant::now();
        let result = entrypoint.run(backend).await;
        let elapsed = start.elapsed();

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        logging::log("DRIVER", &format!("{} finished in {}", backend.name(), report::format_runtime(elapsed)));
        Ok((result?, elapsed))
    }
}
