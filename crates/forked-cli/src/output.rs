//! Output formatting for the CLI.

use crate::animate::MeterAnimator;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use forked_domain::{ParsedNarrative, ScoreBand, SubmissionInput, YearKey};
use forked_render::views;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    animate: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, animate: bool) -> Self {
        Self {
            format,
            color_enabled,
            animate,
        }
    }

    /// Informational line.
    pub fn info(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    /// Error line (the CLI's "blocking alert").
    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    /// Busy-indicator line shown while a request is in flight.
    pub fn busy(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render one simulation result to stdout.
    ///
    /// In pretty mode the meter sweeps via `animator`; json and html
    /// modes emit a single machine-readable document.
    pub async fn render_results(
        &self,
        animator: &mut MeterAnimator,
        input: &SubmissionInput,
        parsed: &ParsedNarrative,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(parsed)?);
            }
            OutputFormat::Html => {
                println!("{}", views::results_page(input, parsed).to_html());
            }
            OutputFormat::Pretty => {
                print!("{}", self.pretty_body(input, parsed));
                self.render_meter(animator, parsed).await;
            }
        }
        Ok(())
    }

    /// Everything above the meter, as one string.
    pub fn pretty_body(&self, input: &SubmissionInput, parsed: &ParsedNarrative) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", self.heading("Your current path")));
        // The baseline copy is shared with the HTML view
        out.push_str(&format!(
            "{}\n",
            views::baseline_card(input).text_content()
        ));

        out.push_str(&format!("\n{}\n", self.heading("The alternate timeline")));
        for key in YearKey::ALL {
            let outcome = parsed.timeline.get(&key).cloned().unwrap_or_default();
            out.push_str(&format!("\n{}\n", self.heading(&format!("Year {}", key.number()))));
            out.push_str(&format!("  {} {}\n", self.paint("✓ Wins:", Color::Green), outcome.wins));
            out.push_str(&format!(
                "  {} {}\n",
                self.paint("⚠ Struggles:", Color::Yellow),
                outcome.struggles
            ));
        }

        out.push_str(&format!("\n{}\n", self.heading("10-Year Perspective")));
        out.push_str(&format!("  {}\n", parsed.ending));

        if !parsed.lost_from_path.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                self.heading("What you'd have lost from your current life")
            ));
            for cost in &parsed.lost_from_path {
                out.push_str(&format!("  • {}\n", cost));
            }
        }

        out.push('\n');
        out
    }

    async fn render_meter(&self, animator: &mut MeterAnimator, parsed: &ParsedNarrative) {
        let label = self.heading("Grass-is-greener score:");
        let score = parsed.grass_is_green_score;

        if self.animate {
            let handle = animator.start(score, label);
            // Hold the view until the sweep settles
            let _ = handle.await;
        } else {
            println!("{} {:>3}", label, score);
        }

        let band = ScoreBand::from_score(score);
        println!("{}", self.paint(band.caption(), Color::Magenta));
        if !parsed.explanation.is_empty() {
            println!("{}", parsed.explanation);
        }
    }
}
