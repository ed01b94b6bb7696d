use crate::config::Config;
use crate::host::TerminalHost;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::scheduler::TokioScheduler;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the storefront until the shopper quits. Must be called from within
/// a tokio runtime.
pub async fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownHandle::new();
    let mut events = EventHandler::new();
    events.spawn_input(shutdown.clone());
    events.spawn_signal_listener(shutdown.clone());

    let scheduler = TokioScheduler::new(events.sender());
    let host = TerminalHost::new(&config.host);
    let mut app = App::new(&config, Box::new(scheduler), Box::new(host));
    app.mount();
    tracing::info!("Storefront mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Timer(timer)) => app.on_timer(timer),
                // The next draw picks up the new size.
                Some(AppEvent::Resize(_, _)) => {}
                None => app.request_quit(),
            },
            _ = shutdown.wait() => app.request_quit(),
        }
    }

    app.unmount();
    shutdown.signal();
    drop(guard);
    tracing::info!("Storefront closed");
    Ok(())
}
