#![warn(rust_2018_idioms)]

use log::error;

use riichi_engine::app;
use riichi_engine::util::logger::{init_logger, level_from_env};

fn main() {
    init_logger(level_from_env());

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        std::process::exit(1);
    }

    let args2 = args[2..].to_vec();
    let res = match args[1].as_str() {
        "C" => {
            // Calculator (向聴数, 和了牌計算モード)
            app::CalculatorApp::new(args2).run()
        }
        "E" => {
            // Engine (bot対戦シミュレーションモード)
            app::EngineApp::new(args2).and_then(|a| a.run())
        }
        m => Err(anyhow::anyhow!("unknown mode: {}", m)),
    };

    if let Err(e) = res {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
