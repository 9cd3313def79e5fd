//! Terminal chart of sleep duration and quality per day

use sleepwise_core::SleepQuality;
use std::io::{self, Write};

/// Renders a session's history
pub trait Plotter {
    /// `quality_levels` uses Poor=1, Average=2, Good=3
    fn render(
        &mut self,
        out: &mut dyn Write,
        days: &[u32],
        durations: &[f64],
        quality_levels: &[u8],
    ) -> io::Result<()>;
}

/// Horizontal bar chart; bars are scaled against `max_hours`
#[derive(Debug, Clone)]
pub struct TextChart {
    pub bar_width: usize,
    pub max_hours: f64,
}

impl Default for TextChart {
    fn default() -> Self {
        Self {
            bar_width: 28,
            max_hours: 14.0,
        }
    }
}

impl TextChart {
    fn bar(&self, hours: f64) -> String {
        let filled = ((hours / self.max_hours).clamp(0.0, 1.0) * self.bar_width as f64).round()
            as usize;
        format!(
            "{}{}",
            "█".repeat(filled),
            "·".repeat(self.bar_width - filled)
        )
    }
}

impl Plotter for TextChart {
    fn render(
        &mut self,
        out: &mut dyn Write,
        days: &[u32],
        durations: &[f64],
        quality_levels: &[u8],
    ) -> io::Result<()> {
        writeln!(out, "\n📈 Sleep Duration & Quality Over Time")?;
        writeln!(
            out,
            "{:>4}  {:<width$}  {:>5}  Quality",
            "Day",
            "Duration (hrs)",
            "Hours",
            width = self.bar_width
        )?;

        let mut total = 0.0;
        let mut count = 0usize;
        for ((day, &hours), &level) in days.iter().zip(durations).zip(quality_levels) {
            let label = SleepQuality::from_level(level).map_or("?", |q| q.as_str());
            let stars = "★".repeat(usize::from(level.min(3)));
            writeln!(
                out,
                "{:>4}  {}  {:>5.1}  {:<3} {}",
                day,
                self.bar(hours),
                hours,
                stars,
                label
            )?;
            total += hours;
            count += 1;
        }

        if count > 0 {
            writeln!(
                out,
                "\nAverage: {:.1} hrs over {} day{}",
                total / count as f64,
                count,
                if count == 1 { "" } else { "s" }
            )?;
        }
        out.flush()
    }
}
