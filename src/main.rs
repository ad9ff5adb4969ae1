use ghtrack::adapters::ReqwestHttpClient;
use ghtrack::app::{App, AppMessage};
use ghtrack::cli::{apply_options, parse_args, version_line, CliCommand, RunOptions, USAGE};
use ghtrack::config::TrackerConfig;
use ghtrack::export::export_html;
use ghtrack::github::GitHubClient;
use ghtrack::terminal::{setup_panic_hook, TerminalManager};
use ghtrack::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

fn main() -> Result<()> {
    // Handle flags that need no runtime before any initialization
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::ExportHtml { path, options } => {
            color_eyre::install()?;
            logging::init();
            return run_export(&path, &options);
        }
        CliCommand::RunTui(options) => options,
    };

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    if let Some(path) = logging::init() {
        info!(log = %path.display(), version = %version_line(), "Starting");
    }

    let config = apply_options(TrackerConfig::from_env(), &options);
    let runtime = tokio::runtime::Runtime::new()?;

    let mut term = TerminalManager::new()?;

    // App::new captures the runtime handle through tokio::spawn, so it is
    // created and booted inside the runtime context
    let result = runtime.block_on(async {
        let default_user = config.default_user.clone();
        let mut app = App::new(config, Arc::new(ReqwestHttpClient::new()));
        app.load_user(&default_user);
        run_app(term.terminal(), &mut app).await
    });

    term.restore()?;
    drop(term);

    if let Err(ref e) = result {
        error!(error = %e, "Dashboard exited with an error");
    }
    info!("Shutting down");
    result
}

fn run_export(path: &Path, options: &RunOptions) -> Result<()> {
    let config = apply_options(TrackerConfig::from_env(), options);
    let runtime = tokio::runtime::Runtime::new()?;
    let client = GitHubClient::new(Arc::new(ReqwestHttpClient::new()), &config);

    runtime.block_on(export_html(&client, &config.default_user, path))?;
    println!("Wrote {}", path.display());
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the loading spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // stdin closed
                    None => app.quit(),
                }
            }

            // Fetch results from spawned load tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
