mod app;
mod config;
mod export;
mod logging;
mod provider;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::provider::gemini::GeminiClient;
use crate::provider::manager::ProviderManager;
use crate::provider::types::ConceptResult;
use crate::provider::ConceptProvider;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // The provider credential is a startup requirement, not something the
    // wizard can recover from later.
    let client = GeminiClient::from_env(&cfg.provider)
        .with_context(|| format!("set {} to run briefsmith", provider::gemini::API_KEY_ENV))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, Arc::new(client)).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    client: Arc<dyn ConceptProvider>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let provider = ProviderManager::new(event_tx.clone(), client);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::FetchTopic { generation, range } => {
                    provider.fetch_topic(generation, range);
                }
                Action::GenerateConcept { generation, topic } => {
                    provider.generate_concept(generation, topic);
                }
                Action::ExportBrief => match state.concept.clone() {
                    Some(concept) => {
                        let out_dir = state.config.export.resolve_output_dir();
                        spawn_export(event_tx.clone(), concept, out_dir);
                    }
                    // Unreachable from the handler's guard, but the
                    // in-progress flag must still come back down.
                    None => {
                        let _ = event_tx
                            .send(AppEvent::ExportFailed { error: "nothing to export".to_string() });
                    }
                },
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Write the PDF off the UI thread and report the outcome as an event. Export
/// failures are logged and surfaced in the status bar, never fatal.
fn spawn_export(
    event_tx: mpsc::UnboundedSender<AppEvent>,
    concept: ConceptResult,
    out_dir: PathBuf,
) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            export::write_brief_pdf(&concept.brief, &concept.logo_png, &out_dir)
        })
        .await;

        let event = match result {
            Ok(Ok(path)) => AppEvent::ExportComplete { path },
            Ok(Err(e)) => {
                tracing::error!("PDF export failed: {e}");
                AppEvent::ExportFailed { error: e.to_string() }
            }
            Err(e) => {
                tracing::error!("export task failed: {e}");
                AppEvent::ExportFailed { error: "export task failed".to_string() }
            }
        };
        let _ = event_tx.send(event);
    });
}
