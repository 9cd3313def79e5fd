use sleepwise_core::Config;
use sleepwise_learn::SleepModel;

use crate::chart::TextChart;
use crate::session::Session;

pub fn run(config: &Config) -> anyhow::Result<()> {
    println!("Training sleep model on {} synthetic rows...", config.rows);
    let (model, report) = SleepModel::train(config)?;
    if let Some(accuracy) = report.accuracy {
        println!("Model ready (hold-out accuracy {:.1}%)", accuracy * 100.0);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        &model,
        stdin.lock(),
        stdout.lock(),
        Box::new(TextChart::default()),
    );
    session.run()?;
    tracing::debug!(entries = session.history().len(), "session finished");
    Ok(())
}
