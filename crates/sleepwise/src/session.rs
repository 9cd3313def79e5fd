//! Interactive prediction session over any line-based reader and writer

use std::io::{self, BufRead, Write};

use sleepwise_core::parse::{
    parse_choice, parse_interruptions, parse_minutes, parse_stress, parse_time, sleep_duration,
};
use sleepwise_core::{Caffeine, FeatureRow, HistoryEntry, MenuChoice, Mood, ParseError};
use sleepwise_learn::{LearnError, SleepModel};
use thiserror::Error;

use crate::chart::Plotter;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] LearnError),
}

/// Owns the menu loop and the history of predictions made so far
pub struct Session<'m, R, W> {
    model: &'m SleepModel,
    input: R,
    output: W,
    plotter: Box<dyn Plotter>,
    history: Vec<HistoryEntry>,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    pub fn new(model: &'m SleepModel, input: R, output: W, plotter: Box<dyn Plotter>) -> Self {
        Self {
            model,
            input,
            output,
            plotter,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.menu_loop() {
            Err(SessionError::InputClosed) => {
                tracing::debug!("input closed, ending session");
                self.farewell()
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), SessionError> {
        loop {
            writeln!(self.output, "\nOptions:")?;
            writeln!(self.output, "[1] New Sleep Entry")?;
            writeln!(self.output, "[2] View Sleep Graph")?;
            writeln!(self.output, "[3] Exit")?;

            let line = self.prompt("Choose option: ")?;
            match parse_choice(&line) {
                Ok(MenuChoice::NewEntry) => self.new_entry()?,
                Ok(MenuChoice::ViewGraph) => self.show_graph()?,
                Ok(MenuChoice::Exit) => return self.farewell(),
                Err(e) => writeln!(self.output, "❌ {e}")?,
            }
        }
    }

    fn farewell(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nGood night 🌙 Sleep well!")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt until `parse` accepts the answer
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, SessionError> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = ?e, "rejected answer");
                    writeln!(self.output, "❌ {e}")?;
                }
            }
        }
    }

    fn read_entry(&mut self) -> Result<FeatureRow, SessionError> {
        writeln!(self.output, "\n--- Sleep Quality Predictor ---")?;

        let bedtime = self.ask("Bedtime (e.g., 10 pm, 22, 22:30): ", parse_time)?;
        let wake_time = self.ask("Wake-up Time (e.g., 6 am, 6, 06:30): ", parse_time)?;

        let duration = sleep_duration(bedtime, wake_time);
        if duration.is_substituted() {
            writeln!(
                self.output,
                "⚠️ Unusual sleep duration detected, setting to {:.0} hours",
                duration.hours()
            )?;
        }
        writeln!(
            self.output,
            "🕒 Auto-calculated Sleep Duration: {:.1} hours",
            duration.hours()
        )?;

        let caffeine = self.ask("Caffeine Intake (None/Low/Moderate/High): ", |s| {
            s.parse::<Caffeine>()
        })?;
        let exercise = self.ask("Exercise Duration (minutes): ", parse_minutes)?;
        let screen_time = self.ask("Screen Time Before Bed (minutes): ", parse_minutes)?;
        let stress = self.ask("Stress Level (1-10): ", parse_stress)?;
        let mood = self.ask("Mood Before Sleep (Happy/Neutral/Sad/Anxious): ", |s| {
            s.parse::<Mood>()
        })?;
        let interruptions = self.ask(
            "Sleep Interruptions? (0 = No, 1 = Yes): ",
            parse_interruptions,
        )?;

        Ok(FeatureRow {
            sleep_duration: duration.hours(),
            bedtime,
            wake_time,
            caffeine,
            exercise,
            screen_time,
            stress,
            mood,
            interruptions,
        })
    }

    fn new_entry(&mut self) -> Result<(), SessionError> {
        let row = self.read_entry()?;
        let prediction = self.model.predict(&row)?;

        let entry = HistoryEntry {
            day: self.history.len() as u32 + 1,
            sleep_duration: row.sleep_duration,
            sleep_quality: prediction.quality,
        };
        tracing::debug!(
            day = entry.day,
            hours = entry.sleep_duration,
            quality = %entry.sleep_quality,
            confidence = prediction.confidence,
            "prediction recorded"
        );
        self.history.push(entry);

        writeln!(
            self.output,
            "\n🛌 Predicted Sleep Quality: {} ({:.0}% confidence)",
            prediction.quality,
            prediction.confidence * 100.0
        )?;
        writeln!(self.output, "\n💡 Suggestions:")?;
        for tip in prediction.quality.suggestions() {
            writeln!(self.output, "- {tip}")?;
        }
        Ok(())
    }

    fn show_graph(&mut self) -> Result<(), SessionError> {
        if self.history.is_empty() {
            writeln!(self.output, "\nNo data to plot yet.")?;
            return Ok(());
        }

        let days: Vec<u32> = self.history.iter().map(|h| h.day).collect();
        let durations: Vec<f64> = self.history.iter().map(|h| h.sleep_duration).collect();
        let levels: Vec<u8> = self
            .history
            .iter()
            .map(|h| h.sleep_quality.level())
            .collect();
        self.plotter
            .render(&mut self.output, &days, &durations, &levels)?;
        Ok(())
    }
}
