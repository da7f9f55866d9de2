use std::io::{self, IsTerminal};
use std::time::Duration;

use tarot_core::Catalogue;
use tarot_reading::{Controller, LineConsole, ReadingConfig, Session, recap_markdown};

/// Settings for an interactive reading.
pub struct Options {
    pub seed: Option<u64>,
    pub pace: f64,
    pub width: usize,
    pub reader: Option<String>,
    pub color: bool,
    pub recap: bool,
}

pub fn run(opts: &Options) -> Result<(), String> {
    let pace = Duration::try_from_secs_f64(opts.pace).map_err(|_| {
        format!(
            "invalid pace '{}': expected a non-negative number of seconds",
            opts.pace
        )
    })?;

    let mut config = ReadingConfig::default()
        .with_pace(pace)
        .with_line_width(opts.width);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    if let Some(reader) = &opts.reader {
        config = config.with_reader_name(reader.as_str());
    }

    let session = Session::new(Catalogue::standard(), &config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    let stdout = io::stdout();
    let styled = opts.color && stdout.is_terminal();
    let console = LineConsole::new(io::stdin().lock(), stdout.lock()).styled(styled);

    let mut controller = Controller::new(session, console, config);
    let result = controller.run();
    let (session, console) = controller.into_parts();
    drop(console);
    result.map_err(|e| e.to_string())?;

    if opts.recap {
        println!("{}", recap_markdown(session.username(), session.history()));
    }

    Ok(())
}
