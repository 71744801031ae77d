use log::{error, info, warn};
use std::io;

use dice_duel::{logging, GameConfig, GameRng, Session};

fn main() {
    logging::init();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            warn!("{}; using default configuration", err);
            GameConfig::default()
        }
    };

    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("session seed {} (set DICE_SEED to replay)", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = Session::new(config, rng)
        .and_then(|mut session| session.run(&mut stdin.lock(), &mut stdout.lock()));

    if let Err(err) = result {
        error!("{}", err);
    }
}
