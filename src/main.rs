use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use bossrush::{
    language::WordBank,
    runtime::{Clock, CrosstermInput, InputSource, PipedInput, SystemClock},
    terminal::{Frontend, TerminalGuard},
    ui::{PlainRenderer, Renderer, TuiRenderer},
    Game, GameConfig, GameSummary,
};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// typing boss rush: type the words before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Defeat 25 ASCII-art bosses by typing the words shown before each 60 second timer runs out. You have 3 lives."
)]
pub struct Cli {
    /// write diagnostic logs to this file
    #[clap(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _log_guard = cli.log_file.as_deref().map(init_logging).transpose()?;

    // bad word lists or rules fail here, before the terminal changes mode
    let mut game = Game::new(GameConfig::default(), WordBank::builtin()?)?;

    let frontend = Frontend::detect();
    let summary = play(&mut game, frontend)?;

    // the alternate screen is gone now; leave the summary in the scrollback
    if frontend.full_screen {
        println!("{summary}");
    }

    Ok(())
}

fn play(game: &mut Game, frontend: Frontend) -> Result<GameSummary, Box<dyn Error>> {
    let _guard = if frontend.raw_input {
        Some(TerminalGuard::acquire(frontend.full_screen)?)
    } else {
        None
    };

    let mut input: Box<dyn InputSource> = if frontend.raw_input {
        Box::new(CrosstermInput::new())
    } else {
        Box::new(PipedInput::stdin())
    };
    let mut renderer: Box<dyn Renderer> = if frontend.full_screen {
        Box::new(TuiRenderer::new(CrosstermBackend::new(io::stdout()))?)
    } else {
        Box::new(PlainRenderer::new(io::stdout()))
    };

    let summary = game.run(input.as_mut(), renderer.as_mut(), &SystemClock)?;
    if frontend.full_screen {
        SystemClock.sleep(game.closing_pause(&summary));
    }
    Ok(summary)
}

fn init_logging(path: &Path) -> io::Result<WorkerGuard> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "log file path has no file name")
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("bossrush=debug"))
        .with(file_layer)
        .init();

    tracing::info!("logging to {}", path.display());
    Ok(guard)
}
