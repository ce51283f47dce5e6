use flappy::clock::FrameClock;
use flappy::config::{GameConfig, BIRD_SPRITE_PATH, SPRITE_PIXELS};
use flappy::input::TerminalInput;
use flappy::ui::{Sprite, TerminalDisplay};
use flappy::{logging, run_loop, GameError, Session};

fn main() -> Result<(), GameError> {
    logging::init()?;

    let config = GameConfig::default();

    // Load before touching the terminal so a missing asset prints cleanly.
    let sprite = Sprite::load(
        BIRD_SPRITE_PATH,
        SPRITE_PIXELS,
        config.entity_width,
        config.entity_height,
    )?;

    let mut clock = FrameClock::new(config.frame_duration());
    let mut session = Session::new(config, sprite);
    let mut input = TerminalInput;
    let mut rng = rand::thread_rng();

    let mut display = TerminalDisplay::new()?;
    let result = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng);
    display.restore()?;

    let summary = result?;
    println!(
        "Thanks for playing! Best score: {} over {} game{}.",
        summary.best_score,
        summary.games,
        if summary.games == 1 { "" } else { "s" }
    );
    Ok(())
}
