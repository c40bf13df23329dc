//! Headless board demo: scripted input against a board session
//!
//! Usage: `chess_demo [config.toml|config.ron]`

use board_engine::foundation::logging;
use board_engine::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const FRAME: f32 = 1.0 / 60.0;
const MAX_SETTLE_FRAMES: usize = 2000;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("board has fewer than two pieces; raise piece_chance or change the seed")]
    NotEnoughPieces,

    #[error("camera did not settle while {0}")]
    Stalled(&'static str),
}

struct ChessDemo {
    session: BoardSession,
    rng: StdRng,
    missiles: usize,
    destroyed: usize,
}

impl ChessDemo {
    fn new(config: DemoConfig) -> Self {
        let rng = match config.board.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { session: BoardSession::new(config), rng, missiles: 0, destroyed: 0 }
    }

    fn run(&mut self) -> Result<(), DemoError> {
        let mut pieces = self.session.board().pieces.clone();
        if pieces.len() < 2 {
            return Err(DemoError::NotEnoughPieces);
        }
        pieces.shuffle(&mut self.rng);
        let (attacker, victim) = (pieces[0], pieces[1]);

        log::info!("Panning the overview");
        self.hold_key(KeyCode::D, 0.5);
        log::info!("Camera target now {:?}", self.session.camera().target);

        log::info!("Selecting and focusing {:?}", attacker);
        self.pointer(PointerEvent::new(PointerEventKind::Pick, 0.0, 0.0).with_picked(attacker));
        self.pointer(PointerEvent::new(PointerEventKind::DoubleTap, 0.0, 0.0).with_picked(attacker));
        self.settle("focusing")?;

        log::info!("Orbiting around the piece");
        self.hold_key(KeyCode::Left, 0.5);

        log::info!("Firing at {:?}", victim);
        self.pointer(
            PointerEvent::new(PointerEventKind::Pick, 0.0, 0.0)
                .with_button(MouseButton::Right)
                .with_picked(victim),
        );

        self.key(KeyboardEvent::KeyDown(KeyCode::Escape));
        self.key(KeyboardEvent::KeyUp(KeyCode::Escape));
        self.settle("returning to the overview")?;

        while self.session.effects().active_count() > 0 {
            self.tick();
        }

        log::info!(
            "Demo finished after {:.1}s: {} missile(s), {} piece(s) destroyed, {} pieces left",
            self.session.elapsed(),
            self.missiles,
            self.destroyed,
            self.session.board().pieces.iter().filter(|id| self.session.scene().contains(**id)).count()
        );
        Ok(())
    }

    fn hold_key(&mut self, key: KeyCode, seconds: f32) {
        self.key(KeyboardEvent::KeyDown(key));
        for _ in 0..(seconds / FRAME).round() as usize {
            self.tick();
        }
        self.key(KeyboardEvent::KeyUp(key));
    }

    fn settle(&mut self, what: &'static str) -> Result<(), DemoError> {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.session.animation_in_flight() {
                return Ok(());
            }
            self.tick();
        }
        Err(DemoError::Stalled(what))
    }

    fn pointer(&mut self, event: PointerEvent) {
        let events = self.session.on_pointer(event);
        self.record(events);
    }

    fn key(&mut self, event: KeyboardEvent) {
        let events = self.session.on_keyboard(event);
        self.record(events);
    }

    fn tick(&mut self) {
        let events = self.session.tick(FRAME);
        self.record(events);
    }

    fn record(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::MissileLaunched { .. } => self.missiles += 1,
                SessionEvent::Effect(EffectEvent::Disposed(id)) if self.session.board().pieces.contains(&id) => {
                    self.destroyed += 1;
                }
                SessionEvent::Settled(state) => log::info!("Camera settled: {:?}", state),
                _ => {}
            }
            log::debug!("{:?}", event);
        }
    }
}

fn main() -> Result<(), DemoError> {
    logging::init();

    let path = std::env::args().nth(1);
    let config = DemoConfig::load_or_default(path.as_deref()).map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        DemoError::from(e)
    })?;
    logging::set_level(&config.logging.level);

    log::info!("Starting board demo");
    let result = ChessDemo::new(config).run();
    match result {
        Ok(()) => {
            log::info!("Board demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Board demo failed: {}", e);
            Err(e)
        }
    }
}
