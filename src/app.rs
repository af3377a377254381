//! Demo board orchestration
//!
//! Wires a [`KeyboardSensor`] to a [`BoardEngine`], routes terminal events through it
//! and flushes scheduled moves once per tick.

pub mod engine;

pub use engine::{BoardEngine, Position};

use crate::config::DemoConfig;
use crate::error::Result;
use crate::input::{is_key_down, spawn_input_thread, HostEvent};
use crate::render::BoardRenderer;
use crate::sensor::{Axis, KeyboardSensor, SensorContext, WindowEvent, WindowEvents};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Poll interval of the input thread.
const INPUT_POLL_MS: u64 = 25;

/// A board of lists plus the sensor that drags items around it.
pub struct Board {
    sensor: KeyboardSensor<BoardEngine>,
    window: Arc<WindowEvents>,
    axis: Axis,
}

impl Board {
    pub fn new(config: &DemoConfig) -> Result<Self> {
        config.validate()?;
        let window = Arc::new(WindowEvents::new());
        let engine = BoardEngine::new(config.lists, config.items_per_list);
        let sensor = KeyboardSensor::from_config(
            engine,
            window.clone(),
            &config.sensor,
            config.tick_interval(),
        );

        Ok(Self {
            sensor,
            window,
            axis: config.axis,
        })
    }

    pub fn engine(&self) -> &BoardEngine {
        self.sensor.callbacks()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_dragging(&self) -> bool {
        self.sensor.is_dragging()
    }

    pub fn window(&self) -> &WindowEvents {
        &self.window
    }

    fn context(&self) -> SensorContext {
        SensorContext::new(self.engine().can_lift(), Some(self.axis))
    }

    /// Handle one host event. Returns false when the board should quit.
    pub fn handle_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Key(key) => self.handle_key(key),
            HostEvent::Window(event) => {
                self.dispatch_window_event(event);
                true
            }
        }
    }

    /// Advance one frame: flush any scheduled move.
    pub fn tick(&mut self, now: Instant) {
        self.sensor.flush_frame(now);
    }

    /// Abandon any drag without notifying the engine, e.g. on shutdown.
    pub fn shutdown(&mut self) {
        self.sensor.kill();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let context = self.context();
        if self.sensor.on_key_down(&key, context).is_suppressed() || !is_key_down(&key) {
            return true;
        }

        // Default handling: the sensor passed on this key.
        match key.code {
            KeyCode::Char('q') => false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            code => {
                let axis = self.axis;
                self.sensor.callbacks_mut().move_focus(code, axis);
                true
            }
        }
    }

    fn dispatch_window_event(&mut self, event: WindowEvent) {
        for listener in self.window.listeners(event) {
            if listener == self.sensor.listener_id() {
                self.sensor.on_window_event(event);
            }
        }
    }
}

/// Drive the board from a stream of host events until quit or channel close.
pub async fn run_loop(
    board: &mut Board,
    renderer: &mut dyn BoardRenderer,
    mut events: mpsc::UnboundedReceiver<HostEvent>,
    tick: Duration,
) -> Result<()> {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    renderer.render(board)?;
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                if !board.handle_event(event) {
                    break;
                }
            }
            _ = ticker.tick() => {
                board.tick(Instant::now());
                renderer.render(board)?;
            }
        }
    }

    board.shutdown();
    Ok(())
}

/// Run the interactive demo on the current terminal.
pub async fn run(config: DemoConfig, renderer: &mut dyn BoardRenderer) -> Result<()> {
    let mut board = Board::new(&config)?;
    renderer.initialize()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    let input = spawn_input_thread(tx, shutdown.clone(), Duration::from_millis(INPUT_POLL_MS));

    let result = run_loop(&mut board, renderer, rx, config.tick_interval()).await;
    let cleanup = renderer.cleanup();

    shutdown.store(true, Ordering::SeqCst);
    if input.join().is_err() {
        log::warn!("input thread panicked");
    }

    result.and(cleanup)
}
