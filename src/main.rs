mod display;

use std::fs::{self, OpenOptions};
use std::io::{self, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use flappy_game::audio::{AudioSink, Cue};
use flappy_game::clock::{FixedStep, TickContext};
use flappy_game::compute::Game;
use flappy_game::config::{ConfigError, GameConfig};
use flappy_game::input::{InputEvent, Key};
use flappy_game::persistence::{default_dir, JsonFileStore};

use display::Viewport;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Classic terminals never report releases, so a held flap key is guessed
/// from repeats.  Until the first repeat arrives the guess has to outlast the
/// OS initial repeat delay (250-600 ms).
const FIRST_REPEAT_WINDOW: u64 = 40;

/// Once repeats are flowing they arrive every ~30 ms; a gap this long means
/// the key was let go.
const HOLD_WINDOW: u64 = 4;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// The terminal has no mixer: point and death ring the bell, everything else
/// is only logged.  Bell failures are ignored.
struct TerminalAudio {
    music_playing: bool,
}

impl AudioSink for TerminalAudio {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Point | Cue::Death => {
                let mut err = io::stderr();
                let _ = err.write_all(b"\x07").and_then(|_| err.flush());
            }
            Cue::MusicStart => self.music_playing = true,
            Cue::MusicStop => self.music_playing = false,
            Cue::Flap => {}
        }
        tracing::debug!(?cue, music = self.music_playing, "audio cue");
    }
}

// ── Logging & config ──────────────────────────────────────────────────────────

/// Log to a file: the terminal belongs to the renderer.
fn init_logging(dir: &Path) {
    let Ok(()) = fs::create_dir_all(dir) else {
        return;
    };
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("flappy_game.log"))
    else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn load_config(dir: &Path) -> GameConfig {
    match GameConfig::load(&dir.join("config.toml")) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => GameConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "bad config file, using defaults");
            GameConfig::default()
        }
    }
}

// ── Input mapping ─────────────────────────────────────────────────────────────

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => Some(Key::Flap),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        _ => None,
    }
}

/// Tracks the flap key so that OS key-repeat is never mistaken for a new flap.
#[derive(Debug, Default)]
struct FlapHold {
    last_seen: Option<u64>,
    /// At least one repeat arrived since the press.
    repeating: bool,
    /// Terminal reports releases; no need to guess them.
    exact: bool,
}

impl FlapHold {
    fn new(exact: bool) -> Self {
        FlapHold {
            exact,
            ..Self::default()
        }
    }

    fn window(&self) -> u64 {
        if self.repeating {
            HOLD_WINDOW
        } else {
            FIRST_REPEAT_WINDOW
        }
    }

    fn is_held(&self, frame: u64) -> bool {
        match self.last_seen {
            Some(_) if self.exact => true,
            Some(last) => frame.saturating_sub(last) <= self.window(),
            None => false,
        }
    }

    /// Returns the core event for a flap key press, if any.  On classic
    /// terminals a press while held is an OS repeat.
    fn press(&mut self, frame: u64) -> Option<InputEvent> {
        if self.is_held(frame) {
            self.repeat(frame);
            return None;
        }
        self.last_seen = Some(frame);
        self.repeating = false;
        Some(InputEvent::KeyDown(Key::Flap))
    }

    fn repeat(&mut self, frame: u64) {
        if self.last_seen.is_some() {
            self.last_seen = Some(frame);
            self.repeating = true;
        }
    }

    fn release(&mut self) -> Option<InputEvent> {
        self.repeating = false;
        self.last_seen.take().map(|_| InputEvent::KeyUp(Key::Flap))
    }

    /// Synthesised release once repeats stop arriving (classic terminals).
    fn expire(&mut self, frame: u64) -> Option<InputEvent> {
        if self.last_seen.is_some() && !self.is_held(frame) {
            self.release()
        } else {
            None
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until Esc or Ctrl-C.  The in-game Quit only returns to the menu.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<TerminalAudio, JsonFileStore>,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> io::Result<()> {
    let mut rng = StdRng::from_entropy();
    let mut scheduler = FixedStep::default();
    let mut flap = FlapHold::new(keyboard_enhanced);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let (width, height) = terminal::size()?;
        let view = Viewport::fit(width, height, game.config.width, game.config.height);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let mapped = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if kind == KeyEventKind::Press
                        && (code == KeyCode::Esc
                            || (code == KeyCode::Char('c')
                                && modifiers.contains(KeyModifiers::CONTROL)))
                    {
                        return Ok(());
                    }
                    match (map_key(code), kind) {
                        (Some(Key::Flap), KeyEventKind::Press) => flap.press(frame),
                        (Some(Key::Flap), KeyEventKind::Repeat) => {
                            flap.repeat(frame);
                            None
                        }
                        (Some(Key::Flap), KeyEventKind::Release) => flap.release(),
                        (Some(key), KeyEventKind::Press) => Some(InputEvent::KeyDown(key)),
                        (Some(key), KeyEventKind::Release) => Some(InputEvent::KeyUp(key)),
                        _ => None,
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                    MouseEventKind::Moved => {
                        Some(InputEvent::PointerMove(view.to_world(column, row)))
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        Some(InputEvent::PointerClick(view.to_world(column, row)))
                    }
                    _ => None,
                },
                _ => None,
            };
            if let Some(input) = mapped {
                game.handle_input(input, &mut rng);
            }
        }

        if let Some(release) = flap.expire(frame) {
            game.handle_input(release, &mut rng);
        }

        // ── Fixed-step simulation ─────────────────────────────────────────────
        let now = Instant::now();
        let mut snapshot = None;
        for _ in 0..scheduler.advance(now) {
            snapshot = Some(game.tick(TickContext::at(now), &mut rng));
        }
        let snapshot = snapshot.unwrap_or_else(|| game.snapshot());

        display::render(out, &snapshot, &view, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let dir = default_dir().unwrap_or_else(|_| PathBuf::from(".flappy_game"));
    init_logging(&dir);
    tracing::info!(dir = %dir.display(), "starting");

    let config = load_config(&dir);
    let store = JsonFileStore::new(dir.clone());
    let audio = TerminalAudio {
        music_playing: false,
    };
    let mut game = Game::new(config, audio, store, &mut StdRng::from_entropy());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the
    // hold-window guess in `FlapHold`.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::info!(high_score = game.session.high_score, "exiting");
    result
}
