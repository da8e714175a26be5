use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;
use tracing_subscriber::fmt::time::OffsetTime;

/// Installs the global `tracing` subscriber, truncating and writing to the file at `path`.
///
/// Fails if the file cannot be opened or a global subscriber is already installed. In the
/// latter case the file is left untouched.
pub fn setup_log(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if tracing::dispatcher::has_been_set() {
        bail!("setup_log(): a global subscriber is already installed");
    }
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .with_context(|| format!("setup_log(): could not open {}", path.display()))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("setup_log(): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_time::HwTimer;

    #[test]
    fn setup_log_writes_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("raygeom-{}.log", std::process::id()));
        setup_log(&path)?;
        HwTimer::new().report("setup_log_writes_file");
        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("setup_log_writes_file"));

        // A second call fails and must not truncate the live log.
        assert!(setup_log(&path).is_err());
        let after = std::fs::read_to_string(&path)?;
        assert!(after.contains("setup_log_writes_file"));
        assert!(after.len() >= contents.len());
        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn setup_log_bad_path() {
        let path = std::env::temp_dir().join("raygeom-missing-dir").join("x").join("run.log");
        assert!(setup_log(path).is_err());
    }
}
