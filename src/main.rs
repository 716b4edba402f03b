use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use wargame::build_info;
use wargame::game::{AttackOfTheOrcs, GameResult};
use wargame::hutgame::HutGame;
use wargame::patterns;
use wargame::records::RecordManager;
use wargame::ui::hut_scene;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "huts" => return run_hut_game(),
            "patterns" => {
                let stdout = io::stdout();
                return patterns::run_demos(&mut stdout.lock());
            }
            "--version" | "-v" => {
                println!(
                    "wargame {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Attack of the Orcs\n");
                println!("Usage: wargame [command]\n");
                println!("Commands:");
                println!("  (none)     Play the village scenario in the console");
                println!("  huts       Play the hut-picker mini game (TUI)");
                println!("  patterns   Run the design-pattern demos");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'wargame --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    play_console_game()
}

/// Plays the interactive village scenario on stdin/stdout and folds the
/// outcome into the lifetime records.
fn play_console_game() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    let mut rng = rand::thread_rng();

    let mut game = AttackOfTheOrcs::new();
    let result = game.play(&mut rng, &mut input, &mut out)?;

    // A failure to persist records should not spoil the game's ending.
    match RecordManager::new() {
        Ok(manager) => {
            let mut records = manager.load_or_default();
            records.record_game(result == GameResult::Won, game.acquired_count());
            match manager.save(&records) {
                Ok(()) => println!("\n{}", records.summary()),
                Err(e) => eprintln!("Could not save game records: {}", e),
            }
        }
        Err(e) => eprintln!("Could not open game records: {}", e),
    }

    Ok(())
}

/// Runs the hut-picker mini game in the terminal.
fn run_hut_game() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = hut_game_loop(&mut terminal);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn hut_game_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = HutGame::new(&mut rng);

    loop {
        terminal.draw(|frame| hut_scene::draw(frame, &game))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => game.restart(&mut rng),
                KeyCode::Left | KeyCode::Char('h') => game.select_previous(),
                KeyCode::Right | KeyCode::Char('l') => game.select_next(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if game.result().is_none() {
                        game.enter_selected();
                    }
                }
                _ => {}
            }
        }
    }
}
