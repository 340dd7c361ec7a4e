use crate::config::Settings;
use crate::display::DisplaySurface;
use crate::domain::{Calculator, RoiReport};
use crate::infrastructure::log_messages;
use crate::Result;
use tracing::{debug, info, instrument};

/// Main application struct that wires settings, catalog, and calculator
pub struct Application {
    settings: Settings,
    calculator: Calculator,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Self::from_settings(settings)
    }

    /// Build the calculator from already loaded settings
    ///
    /// Configured inputs are applied in order on top of the defaults.
    #[instrument(skip_all, fields(environment = %settings.application.environment))]
    pub fn from_settings(settings: Settings) -> Result<Self> {
        info!("{}", log_messages::application::SETTINGS_LOADED);

        if settings.catalog.is_some() {
            info!("{}", log_messages::application::CUSTOM_CATALOG);
        }
        let catalog = settings.catalog()?;
        info!(
            industries = catalog.industries().len(),
            plans = catalog.plans().len(),
            "{}",
            log_messages::application::CATALOG_READY
        );

        let mut calculator = Calculator::new(catalog);
        for change in settings.calculator.changes() {
            debug!(?change, "{}", log_messages::application::APPLYING_INPUT);
            calculator.update(change);
        }

        Ok(Self {
            settings,
            calculator,
        })
    }

    /// Compute the current report and hand it to the surface
    #[instrument(skip_all)]
    pub fn run(self, surface: &mut dyn DisplaySurface) -> Result<RoiReport> {
        let report = self.calculator.report();
        surface.render(&report)?;

        info!(
            plan = %report.plan,
            roi = report.metrics.roi,
            advisories = report.advisories.len(),
            "{}",
            log_messages::application::REPORT_RENDERED
        );

        Ok(report)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
