#![warn(rust_2018_idioms)]

use mahjong_judge::{app, error};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "C" => {
            // Calculator (和了判定モード)
            app::CalculatorApp::new(args2).run();
        }
        "J" => {
            // Json (卓の状態から鳴き・終了判定)
            app::TableApp::new(args2).run();
        }
        "E" => {
            // Engine (乱数による局の進行)
            app::EngineApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
