mod ai;
mod config;
mod debug;
mod game;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use game::{GameState, InputEvent};
use ui::{Theme, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut debug_enabled = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    debug::init(debug_enabled)?;
    debug::log("SESSION_START", "pong-tui starting");

    let config = config::load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn print_usage(program: &str) {
    println!("pong-tui - mouse-controlled Pong for the terminal");
    println!();
    println!("Usage: {} [--debug]", program);
    println!();
    println!("Move the mouse to steer the left paddle; first to 10 wins.");
    println!("Click to restart after a win, q or Esc to quit.");
    println!();
    println!("Options:");
    println!("  -d, --debug    Write diagnostics to /tmp/pong-tui-debug.log");
    println!("  -h, --help     Show this help");
}

/// The frame driver: one fixed-timestep simulation step plus one render
/// pass per frame. While game over, simulation is skipped and rendering
/// continues only to track the blink effect and the restart hint.
fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let target_fps = config.display.target_fps.max(1);
    let frame_duration = Duration::from_millis(1000 / target_fps);
    let dt = 1.0 / target_fps as f32;

    let mut rng = rand::thread_rng();
    let theme = Theme::new(&config.display);
    let tracker = ai::Tracker::new(config.physics.ai_speed);

    let size = terminal.size()?;
    let mut viewport = Viewport::new(
        size.width,
        size.height,
        config.physics.field_width,
        config.physics.field_height,
    );

    let mut state = GameState::new(
        &config.physics,
        Duration::from_millis(config.display.flash_interval_ms),
    );
    state.serve(1.0, &mut rng);

    loop {
        let frame_start = Instant::now();

        for event in game::poll_events()? {
            match event {
                InputEvent::Quit => return Ok(()),
                InputEvent::PointerMoved { row, .. } => {
                    let field_y = viewport.pointer_to_field_y(row);
                    game::apply_pointer(&mut state, field_y);
                }
                InputEvent::Restart => {
                    if state.game_over {
                        state.reset_game(&mut rng);
                        debug::log("RESTART", "scores cleared, serving");
                    }
                }
                InputEvent::Resized { cols, rows } => {
                    viewport = Viewport::new(
                        cols,
                        rows,
                        config.physics.field_width,
                        config.physics.field_height,
                    );
                    state.recenter_paddles();
                    state.serve(1.0, &mut rng);
                    debug::log("RESIZE", &format!("terminal now {}x{}", cols, rows));
                }
            }
        }

        if !state.game_over {
            let events = game::update(&mut state, dt, &mut rng);
            if events.any() {
                debug::log("PHYSICS", &format!("{:?}", events));
            }
            if events.point_scored {
                debug::log(
                    "SCORE",
                    &format!("player={} computer={}", state.player_score, state.ai_score),
                );
            }
            if events.game_over {
                if let Some(winner) = state.winner {
                    debug::log("GAME_OVER", &format!("{} wins", winner.label()));
                }
            }
            tracker.drive(
                &mut state.computer,
                &state.ball,
                state.field_height,
                dt,
            );
        }

        // The win flash runs on its own fixed interval, independent of the
        // simulation frames above
        if state.blink.is_active() {
            state.blink.tick(Instant::now());
        }

        terminal.draw(|f| ui::render(f, &state, &viewport, &theme))?;

        // Frame rate limiting
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}
