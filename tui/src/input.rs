//! Input handling for the Toss TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;

use toss_engine::App;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Background reader for terminal events.
///
/// `crossterm::event::read` blocks, so it runs on a blocking task and feeds
/// a bounded channel the render loop drains between frames.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop_flag, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Stop the reader thread and wait briefly for it to exit.
    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx.blocking_send(InputMsg::Error(err.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                let _ = tx.blocking_send(InputMsg::Error(err.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input and apply it to the app.
///
/// Returns `Ok(true)` when the event loop should exit. At most
/// [`MAX_EVENTS_PER_FRAME`] events are processed per call so a key burst
/// can never starve rendering.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let msg = match input.rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        let ev = match msg {
            InputMsg::Event(ev) => ev,
            InputMsg::Error(message) => return Err(anyhow!("input error: {message}")),
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the loop should exit.
fn apply_event(app: &mut App, event: &Event) -> bool {
    if let Event::Key(key) = event {
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }

        // Ctrl+C always exits, even mid-flight.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        handle_key(app, key);
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: &KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        // The engine guards re-entry too; the key guard keeps the disabled
        // button honest from the input side.
        KeyCode::Char(' ' | 'f') | KeyCode::Enter if !app.is_flipping() => app.trigger_flip(),
        KeyCode::Char('b') => app.toggle_bell(),
        _ => {}
    }
}
