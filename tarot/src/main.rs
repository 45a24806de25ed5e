mod app;
mod effects;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use tarot_core::ArtCatalog;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "tarot", about = "Draw tarot cards in the terminal")]
struct Args {
    /// Load card art from this directory instead of the built-in set
    #[arg(long)]
    art_dir: Option<PathBuf>,

    /// Seed the shuffle for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "tarot.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The terminal is in raw mode while running, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }
    log::info!("tarot starting up with {:?}", args);

    let catalog = match &args.art_dir {
        Some(dir) => ArtCatalog::from_dir(dir),
        None => ArtCatalog::embedded(),
    };
    log::info!(
        "loaded {} card faces, {} major arcana",
        catalog.len(),
        catalog.major_count()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &catalog, args.seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("{:?}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &ArtCatalog,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let mut app = App::new(catalog, seed);

    // The grid needs the width before the first resize event arrives
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Poll with ~30fps tick for animations
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && app.handle_key(key) {
                        break; // Quit signal
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Resize(w, h) => {
                    app.handle_resize(w, h);
                }
                _ => {}
            }
        }
    }

    log::info!("quitting");
    Ok(())
}
