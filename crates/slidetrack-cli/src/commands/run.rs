use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use slidetrack_core::AppConfig;
use slidetrack_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    ui, App, Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("slidetrack"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, &keymap);

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

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
    keymap: &Keymap,
) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.motion.animation_fps);

    let (cols, rows) = terminal::size()?;
    let mut app = App::new(config, Theme::default(), cols, rows);
    info!(
        cols,
        rows,
        pager = app.pager.is_some(),
        carousel = app.carousel.is_some(),
        "slidetrack started"
    );

    // Poll at the frame rate only while something is moving
    let mut needs_frame = app.needs_frame();

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        let event = if needs_frame {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let now = app.now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, keymap);
                    app.clear_status();
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    // Bare pointer motion must not cancel a pending "g"
                    if action != Action::None {
                        app.apply(action, now);
                    }
                }
                AppEvent::Resize(cols, rows) => app.resize(cols, rows, now),
                AppEvent::Tick => {}
            }
        }

        needs_frame = app.tick(app.now());

        if app.should_quit {
            break;
        }
    }

    info!("slidetrack exiting");
    Ok(())
}
