// crustguide: a leveled language reference with a heap-backed linked list

use std::io::{self, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

use crustguide::config::Cli;
use crustguide::errors::GuideError;
use crustguide::levels::{self, Context};
use crustguide::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program_name = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("crustguide"));
    let config = Cli::parse().into_config(program_name);
    info!("configuration: {:?}", config);

    let tui = config.tui;
    let only_level = config.level;
    let mut ctx = Context::new(config);

    let failures = match only_level {
        Some(number) => match levels::run_level(&mut ctx, number) {
            Ok(()) => Vec::new(),
            Err(e @ GuideError::UnknownLevel { .. }) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
            Err(e) => vec![(number, e)],
        },
        None => levels::run_all(&mut ctx),
    };

    for (number, e) in &failures {
        warn!("level {} reported: {}", number, e);
    }
    let ran = if only_level.is_some() {
        1
    } else {
        levels::all().len()
    };
    info!("{} levels finished, {} failed", ran, failures.len());

    if !tui {
        let mut stdout = io::stdout().lock();
        stdout.write_all(ctx.terminal.text().as_bytes())?;
        stdout.flush()?;
        if !failures.is_empty() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ctx, &failures);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
