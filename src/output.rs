//! Logging setup and time-series output

use color_eyre::eyre::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    fmt::layer, fmt::time::uptime, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

use crate::series::EnergyTimeSeries;

/// Route logs to a file or stdout, timestamped with elapsed run time
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(uptime())
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Output will be written to: {}", path);
            }
            Err(e) => eprintln!("Could not create output file {}: {}", path, e),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(uptime())
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// Write the time series as `temperature,energy` CSV lines
pub fn write_series<P: AsRef<Path>>(path: P, series: &EnergyTimeSeries) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "temperature,energy")?;
    for point in series.iter() {
        writeln!(file, "{},{}", point.temperature, point.energy)?;
    }
    Ok(())
}
