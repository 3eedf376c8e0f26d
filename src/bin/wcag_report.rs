//! Prints the most commonly reported WCAG recommendations.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin wcag_report -- data/wcag.tsv data/reports 3
//! ```

use indexed_minpq::report::{self, ReportConfig};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ReportConfig::from_args(env::args().skip(1))
        .map_err(|err| anyhow::anyhow!(format!("bad arguments: {}", err)))?;
    let report = report::run(&config).map_err(|err| {
        anyhow::anyhow!(format!(
            "could not rank tags from {} and {}: {}",
            config.definitions.display(),
            config.reports_dir.display(),
            err
        ))
    })?;

    print!("{}", report);
    Ok(())
}
