use std::sync::mpsc;
use std::thread;

use anyhow::{bail, ensure, Context, Result};
use log::info;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::{create_actor, Actor};
use crate::control::engine::MahjongEngine;
use crate::listener::{EventPrinter, EventWriter, Listener};
use crate::model::*;
use crate::util::misc::*;

// [GameConfig]
// -c で読み込むJSON設定. 省略された項目はデフォルト値
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rule: Rule,
    pub seed: u64,
    pub actors: [String; SEAT],
    pub names: Option<[String; SEAT]>, // 未指定の場合はActor名
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rule: Rule::default(),
            seed: 0,
            actors: ["Nop".into(), "Nop".into(), "Nop".into(), "Nop".into()],
            names: None,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let data =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        serde_json::from_str(&data).with_context(|| format!("invalid config: {}", path))
    }
}

// [App]
#[derive(Debug)]
pub struct EngineApp {
    config: GameConfig,
    n_game: u32,
    n_thread: u32,
    write: bool,
    quiet: bool,
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Result<Self> {
        let mut app = Self {
            config: GameConfig::default(),
            n_game: 0,
            n_thread: 16,
            write: false,
            quiet: false,
        };

        // 設定ファイルを先に読み込んで他のオプションで上書きする
        let mut it = args.iter();
        while let Some(s) = it.next() {
            if s == "-c" {
                let path: String = next_value(&mut it, s)?;
                app.config = GameConfig::from_file(&path)?;
            }
        }

        let mut it = args.iter();
        while let Some(s) = it.next() {
            let conf = &mut app.config;
            match s.as_str() {
                "-c" => {
                    it.next();
                }
                "-s" => conf.seed = next_value(&mut it, s)?,
                "-r-round" => conf.rule.round = next_value(&mut it, s)?,
                "-r-init" => conf.rule.initial_score = next_value(&mut it, s)?,
                "-r-red5" => conf.rule.red5 = next_value(&mut it, s)?,
                "-r-bust" => conf.rule.bust = next_value(&mut it, s)?,
                "-g" => app.n_game = next_value(&mut it, s)?,
                "-t" => app.n_thread = next_value(&mut it, s)?,
                "-w" => app.write = true,
                "-q" => app.quiet = true,
                "-0" => conf.actors[0] = next_value(&mut it, s)?,
                "-1" => conf.actors[1] = next_value(&mut it, s)?,
                "-2" => conf.actors[2] = next_value(&mut it, s)?,
                "-3" => conf.actors[3] = next_value(&mut it, s)?,
                opt => bail!("unknown option: {}", opt),
            }
        }

        ensure!(app.config.rule.round > 0, "-r-round: must be positive");
        ensure!(app.n_thread > 0, "-t: must be positive");

        if app.config.seed == 0 {
            app.config.seed = unixtime_now() as u64;
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.config.seed
            );
        }

        Ok(app)
    }

    pub fn run(self) -> Result<()> {
        println!("seed: {}", self.config.seed);

        let mut actors = vec![];
        for name in &self.config.actors {
            actors.push(create_actor(name)?);
        }
        let actors: [Box<dyn Actor>; SEAT] = [
            actors[0].clone(),
            actors[1].clone(),
            actors[2].clone(),
            actors[3].clone(),
        ];
        for s in 0..SEAT {
            println!("actor{}: {:?}", s, actors[s]);
        }
        println!();

        let start = std::time::Instant::now();
        if self.n_game == 0 {
            self.run_single_game(actors);
        } else {
            self.run_multiple_game(actors)?;
        }
        println!(
            "total elapsed time: {:8.3}sec",
            start.elapsed().as_secs_f32()
        );
        Ok(())
    }

    fn run_single_game(self, actors: [Box<dyn Actor>; SEAT]) {
        let mut listeners: Vec<Box<dyn Listener>> = vec![];
        if !self.quiet {
            listeners.push(Box::new(EventPrinter::new()));
        }
        if self.write {
            listeners.push(Box::new(EventWriter::new()));
        }

        let conf = self.config;
        let mut game = match conf.names {
            Some(names) => {
                let stage = Stage::new(conf.rule, &names, conf.seed);
                MahjongEngine::from_stage(stage, actors, listeners)
            }
            None => MahjongEngine::new(conf.rule, conf.seed, actors, listeners),
        };
        let scores = game.run();
        for s in 0..SEAT {
            println!("player {}: {}", s, scores[s]);
        }
    }

    // 座席をシャッフルしながら複数対局をスレッドで並列実行し, Actorごとに集計
    fn run_multiple_game(self, actors: [Box<dyn Actor>; SEAT]) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let (tx, rx) = mpsc::channel();
        let mut sum_delta_scores = [0; SEAT];
        let mut n_started = 0;
        let mut n_running = 0;
        let mut n_end = 0;

        while n_end < self.n_game {
            while n_running < self.n_thread && n_started < self.n_game {
                let seed = rng.next_u64();
                let mut shuffle_table = [0, 1, 2, 3];
                shuffle_table.shuffle(&mut rng);
                let shuffled_actors = shuffle_table.map(|i| actors[i].clone());
                let rule = self.config.rule.clone();
                let tx2 = tx.clone();
                thread::spawn(move || {
                    let start = std::time::Instant::now();
                    let mut game = MahjongEngine::new(rule, seed, shuffled_actors, vec![]);
                    let scores = game.run();
                    // 受信側が先に終了している場合は結果を破棄
                    let _ = tx2.send((shuffle_table, seed, scores, start.elapsed()));
                });
                n_started += 1;
                n_running += 1;
            }

            let (shuffle, seed, scores, elapsed) =
                rx.recv().context("game thread terminated unexpectedly")?;
            print!("{:5},{:4}ms,{:20}", n_end, elapsed.as_millis(), seed);
            for s in 0..SEAT {
                let i = shuffle[s];
                sum_delta_scores[i] += scores[s] - self.config.rule.initial_score;
                print!(", ac{}:{:6}", i, scores[s]);
            }
            println!();
            n_running -= 1;
            n_end += 1;
        }

        for i in 0..SEAT {
            println!(
                "ac{} avg_delta_score: {:6}",
                i,
                sum_delta_scores[i] / self.n_game as Score,
            );
        }
        Ok(())
    }
}
