//! Application state and logic.

use crate::celebration::Celebration;
use crate::config::TuiConfig;
use crate::input::{self, Action};
use crate::ui::{ScreenLayout, Target};
use crossterm::event::{KeyEvent, MouseEvent};
use std::sync::mpsc;
use tictac_core::{BoardStore, GameEvent, GameSnapshot, Outcome, Position, WinLine, winning_line};
use tracing::{debug, info, instrument, trace};

/// Main application state.
///
/// The app owns the board store and learns about state changes through a
/// subscription that forwards [`GameEvent`]s into a channel, drained after
/// every action and on every tick.
pub struct App {
    store: BoardStore,
    events: mpsc::Receiver<GameEvent>,
    config: TuiConfig,
    cursor: Position,
    hover: Option<Target>,
    pressed: Option<(Target, u16)>,
    celebration: Option<Celebration>,
    celebrations: u64,
    seed: u64,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game and a random confetti seed.
    pub fn new(config: TuiConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Creates a new application whose celebrations derive from `seed`.
    #[instrument(skip(config))]
    pub fn with_seed(config: TuiConfig, seed: u64) -> Self {
        let mut store = BoardStore::new();
        let (tx, events) = mpsc::channel();
        store.subscribe(move |event| {
            // The receiver lives in the same App as the store, so it
            // outlives every send.
            let _ = tx.send(*event);
        });

        Self {
            store,
            events,
            config,
            cursor: Position::Center,
            hover: None,
            pressed: None,
            celebration: None,
            celebrations: 0,
            seed,
            layout: None,
            should_quit: false,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for_key(key) {
            self.apply(action);
        }
    }

    /// Handles a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = &self.layout else {
            return;
        };
        if let Some(action) = input::action_for_mouse(mouse, layout) {
            self.apply(action);
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Tap(pos) => {
                self.cursor = pos;
                self.tap(pos);
            }
            Action::TapCursor => self.tap(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Hover(target) => self.hover = target,
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Taps a cell: places the current mark if the store accepts it.
    ///
    /// Rejected taps still flash the cell but change nothing else.
    fn tap(&mut self, pos: Position) {
        self.press(Target::Cell(pos));
        if let Err(e) = self.store.place_mark(pos.to_index()) {
            debug!(error = %e, "Tap ignored");
        }
        self.drain_events();
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.press(Target::Restart);
        self.store.reset();
        self.drain_events();
    }

    /// Advances animations by one tick.
    pub fn tick(&mut self) {
        self.drain_events();
        if let Some((_, remaining)) = &mut self.pressed {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.pressed = None;
            }
        }
        if let Some(celebration) = &mut self.celebration {
            celebration.tick();
        }
    }

    fn press(&mut self, target: Target) {
        let ticks = *self.config.press_flash_ticks();
        self.pressed = (ticks > 0).then_some((target, ticks));
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::MoveMade(action) => trace!(%action, "Move made"),
            GameEvent::GameOver(Outcome::Winner(mark)) => {
                info!(%mark, "Starting celebration");
                let particles = if *self.config.confetti() {
                    *self.config.confetti_particles()
                } else {
                    0
                };
                self.celebrations += 1;
                self.celebration = Some(Celebration::new(
                    mark,
                    particles,
                    *self.config.banner_ticks(),
                    self.seed.wrapping_add(self.celebrations),
                ));
            }
            GameEvent::GameOver(outcome) => info!(%outcome, "Game over"),
            GameEvent::Restarted => {
                self.celebration = None;
            }
        }
    }

    /// Status line: winner, draw, or whose turn it is.
    pub fn status_text(&self) -> String {
        match self.store.current_outcome() {
            Outcome::Winner(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "It's a Draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.store.to_move()),
        }
    }

    /// Board, turn and outcome.
    pub fn snapshot(&self) -> GameSnapshot {
        self.store.snapshot()
    }

    /// The completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(self.store.board()).map(|(_, line)| line)
    }

    /// The board store.
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// The configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Keyboard cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Target under the mouse pointer.
    pub fn hover(&self) -> Option<Target> {
        self.hover
    }

    /// Target currently flashing after a tap.
    pub fn pressed(&self) -> Option<Target> {
        self.pressed.map(|(target, _)| target)
    }

    /// The running celebration, if someone has won.
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Remembers the layout of the frame just drawn for mouse hit testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{Cell, Mark};

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    fn first_particles(seed: u64) -> Vec<crate::celebration::Particle> {
        let mut app = App::with_seed(TuiConfig::default(), seed);
        tap_all(&mut app, &[0, 3, 1, 4, 2]);
        app.celebration()
            .and_then(|c| c.confetti())
            .expect("confetti after win")
            .particles()
            .to_vec()
    }

    #[test]
    fn test_confetti_follows_seed() {
        assert_eq!(first_particles(7), first_particles(7));
        assert_ne!(first_particles(7), first_particles(8));
    }

    fn tap_all(app: &mut App, indices: &[usize]) {
        for &i in indices {
            app.apply(Action::Tap(Position::from_index(i).unwrap()));
        }
    }

    #[test]
    fn test_status_text_follows_game() {
        let mut app = app();
        assert_eq!(app.status_text(), "Next player: X");
        tap_all(&mut app, &[4]);
        assert_eq!(app.status_text(), "Next player: O");
        tap_all(&mut app, &[0, 1, 3, 7]);
        assert_eq!(app.status_text(), "Winner: X");
    }

    #[test]
    fn test_draw_status_without_celebration() {
        let mut app = app();
        tap_all(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(app.status_text(), "It's a Draw!");
        assert!(app.celebration().is_none());
    }

    #[test]
    fn test_win_starts_celebration_and_restart_clears_it() {
        let mut app = app();
        tap_all(&mut app, &[0, 4, 1, 5, 2]);
        let celebration = app.celebration().expect("celebration after win");
        assert_eq!(celebration.winner(), Mark::X);
        assert!(celebration.confetti().is_some());
        assert!(app.winning_line().is_some());

        app.apply(Action::Restart);
        assert!(app.celebration().is_none());
        assert_eq!(app.status_text(), "Next player: X");
        assert_eq!(app.snapshot().outcome, Outcome::InProgress);
    }

    #[test]
    fn test_confetti_disabled_by_config() {
        let config = TuiConfig::default().with_overrides(&crate::Cli {
            no_confetti: true,
            ..Default::default()
        });
        let mut app = App::new(config);
        tap_all(&mut app, &[0, 4, 1, 5, 2]);
        let celebration = app.celebration().expect("banner still shows");
        assert!(celebration.confetti().is_none());
    }

    #[test]
    fn test_taps_after_win_are_ignored() {
        let mut app = app();
        tap_all(&mut app, &[0, 4, 1, 5, 2]);
        let before = app.snapshot();
        tap_all(&mut app, &[8]);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_cursor_tap_places_mark() {
        let mut app = app();
        app.apply(Action::MoveCursor(input::Direction::Up));
        app.apply(Action::MoveCursor(input::Direction::Left));
        app.apply(Action::TapCursor);
        assert_eq!(
            app.snapshot().board.get(Position::TopLeft),
            Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_press_flash_expires() {
        let mut app = app();
        app.apply(Action::Tap(Position::Center));
        assert_eq!(app.pressed(), Some(Target::Cell(Position::Center)));
        for _ in 0..*app.config().press_flash_ticks() {
            app.tick();
        }
        assert_eq!(app.pressed(), None);
    }

    #[test]
    fn test_rejected_tap_still_flashes() {
        let mut app = app();
        tap_all(&mut app, &[4]);
        app.tick();
        app.apply(Action::Tap(Position::Center));
        assert_eq!(app.pressed(), Some(Target::Cell(Position::Center)));
        assert_eq!(app.store().history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
