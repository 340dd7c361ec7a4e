//! Rendering targets for ROI reports

use serde::Serialize;
use std::io::{self, Write};

use crate::display::format;
use crate::domain::{CalculatorInput, RoiMetrics, RoiReport};

/// Consumer of freshly computed reports
///
/// Implementations receive a shared reference and must treat the report as
/// read-only.
pub trait DisplaySurface {
    fn render(&mut self, report: &RoiReport) -> io::Result<()>;
}

const LABEL_WIDTH: usize = 28;

/// Human-readable, labelled summary
pub struct TextSurface<W: Write> {
    writer: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, label: &str, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{label:<LABEL_WIDTH$}{value}")
    }
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn render(&mut self, report: &RoiReport) -> io::Result<()> {
        let metrics = &report.metrics;
        let input = &report.input;

        writeln!(self.writer, "Your ROI with Finde")?;
        self.line("Industry focus", report.industry.as_ref())?;
        self.line(
            "Assumptions",
            &format!(
                "{} seats, {} h/week saved at {}/h, {} active weeks",
                input.team_size,
                input.hours_saved,
                format::currency(input.hourly_rate.into_inner()),
                input.usage_weeks,
            ),
        )?;
        writeln!(self.writer)?;

        self.line("Annual time value", &format::currency(metrics.annual_value))?;
        self.line(
            "Estimated annual licence",
            &format!(
                "{} ({} tier)",
                format::currency(metrics.annual_cost),
                report.plan
            ),
        )?;
        self.line("Net annual gain", &format::currency(metrics.annual_net))?;
        let roi = if metrics.annual_cost == 0.0 {
            format::NOT_AVAILABLE.to_string()
        } else {
            format::percent(metrics.roi)
        };
        self.line("Projected ROI", &roi)?;
        self.line("Monthly net impact", &format::currency(metrics.monthly_net))?;
        self.line("Payback period", &format::payback(metrics.payback_months))?;
        self.line("Value per workday", &format::currency(metrics.daily_value))?;

        if !report.advisories.is_empty() {
            writeln!(self.writer)?;
            for advisory in &report.advisories {
                writeln!(self.writer, "- {advisory}")?;
            }
        }

        self.writer.flush()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a CalculatorInput,
    industry: &'a str,
    plan: &'a str,
    metrics: &'a RoiMetrics,
    advice: Vec<String>,
}

/// Machine-readable report with raw numbers
pub struct JsonSurface<W: Write> {
    writer: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySurface for JsonSurface<W> {
    fn render(&mut self, report: &RoiReport) -> io::Result<()> {
        let view = JsonReport {
            input: &report.input,
            industry: report.industry.as_ref(),
            plan: report.plan.as_ref(),
            metrics: &report.metrics,
            advice: report.advisories.iter().map(ToString::to_string).collect(),
        };

        serde_json::to_writer_pretty(&mut self.writer, &view)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
