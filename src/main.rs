// main.rs - Application Entry Point
mod app;
mod config;
mod error;
mod recipe_store;
mod state;
mod ui;

use std::io;
use std::process;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetSize, SetTitle,
    },
};
use log::{error, info, warn, LevelFilter};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::app::App;
use crate::config::RunnerConfig;
use crate::recipe_store::{resolve_data_path, RecipeCollection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = RunnerConfig::default();

    // Load once, before the terminal is touched / التحميل مرة واحدة قبل تهيئة الطرفية
    let data_path = resolve_data_path(&config.data_file_name);
    let recipes = match recipe_store::load(&data_path) {
        Ok(recipes) => recipes,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    if recipes.is_empty() {
        warn!("No recipes found in {}", data_path.display());
    }

    run_recipe_browser(&config, recipes)?;
    println!("Goodbye!");
    Ok(())
}

/// Logger writing to stderr; frame-level messages stay below the default level
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Raw mode + alternate screen, restored on drop
struct TerminalSession {
    original_size: (u16, u16),
}

impl TerminalSession {
    fn enter(config: &RunnerConfig) -> io::Result<Self> {
        let original_size = terminal::size()?;
        enable_raw_mode()?;
        // From here on, an early return still restores the terminal
        let session = Self { original_size };
        let (width, height) = config.window_size;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(&config.window_title),
            SetSize(width, height)
        )?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Cleanup - important to do in correct order!
        // تنظيف - مهم بالترتيب الصحيح!
        let _ = disable_raw_mode();
        let (width, height) = self.original_size;
        let _ = execute!(
            io::stdout(),
            SetSize(width, height),
            LeaveAlternateScreen,
            DisableMouseCapture,
            Show
        );
    }
}

fn run_recipe_browser(
    config: &RunnerConfig,
    recipes: RecipeCollection,
) -> Result<(), Box<dyn std::error::Error>> {
    // Layout is fixed before the loop starts / التخطيط ثابت قبل بدء الحلقة
    let docking = ui::create_default_layout();
    info!(
        "Dock layout: {} split(s), {} window(s)",
        docking.splits.len(),
        docking.windows.len()
    );
    let mut app = App::new(recipes, docking);

    let session = TerminalSession::enter(config)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app_loop(&mut terminal, &mut app, config);
    drop(session);

    info!(
        "Closed with selection {:?}",
        app.state().selection.selected_index()
    );
    result.map_err(|e| e.into())
}

fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &RunnerConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            // The whole terminal hosts the docks / الطرفية كاملة تستضيف مناطق الإرساء
            let area = frame.area();
            app.render(frame, area);
        })?;
        app.handle_events(config.tick_rate)?;
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
