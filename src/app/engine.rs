use rand::prelude::*;

use crate::control::GameDriver;
use crate::model::*;
use crate::util::misc::*;
use crate::{error, info};

// 乱数で局を進行させて判定処理を動かすモード
#[derive(Debug)]
pub struct EngineApp {
    seed: u64,
    n_game: u32,
    quiet: bool,
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            n_game: 1,
            quiet: false,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-g" => app.n_game = next_value(&mut it, s),
                "-q" => app.quiet = true,
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(0);
                }
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now();
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.seed
            );
        }

        app
    }

    pub fn run(self) {
        println!("seed: {}", self.seed);

        let start = std::time::Instant::now();
        let mut rng: StdRng = SeedableRng::seed_from_u64(self.seed);
        let mut n_win = [0; SEAT];
        let mut n_draw = 0;
        for i in 0..self.n_game {
            // 1局目は指定されたシードをそのまま使う
            let seed = if i == 0 { self.seed } else { rng.next_u64() };
            let mut game = GameDriver::new(seed);
            let outcome = game.run();

            if !self.quiet {
                for e in game.get_events() {
                    match serde_json::to_string(e) {
                        Ok(s) => println!("{}", s),
                        Err(e) => error!("{}", e),
                    }
                }
            }
            println!(
                "{:5},{:20}, winner: {:?}, progress: {:?}",
                i,
                game.get_seed(),
                outcome.winner,
                outcome.progress
            );

            match outcome.winner {
                Some(s) => n_win[s] += 1,
                None => n_draw += 1,
            }
        }

        for s in 0..SEAT {
            println!("seat{} win: {}", s, n_win[s]);
        }
        println!("draw: {}", n_draw);
        println!(
            "total elapsed time: {:8.3}sec",
            start.elapsed().as_nanos() as f32 / 1000000000.0
        );
    }
}
