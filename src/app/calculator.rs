use std::fs::File;
use std::io::{self, BufRead};

use anyhow::{bail, ensure, Context, Result};
use log::error;

use crate::control::common::count_tile_table;
use crate::control::string::{tile_table_from_string, tile_table_to_string, tiles_to_string};
use crate::hand::*;
use crate::model::*;
use crate::util::misc::*;

// [CalculatorApp]
// 手牌文字列 (例: m123p456s789z1122) の向聴数, 和了牌, 聴牌打牌を表示
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Result<()> {
        let mut file_path = String::new();
        let mut exp = String::new();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-f" => file_path = next_value(&mut it, s)?,
                opt if opt.starts_with('-') => bail!("unknown option: {}", opt),
                _ => {
                    ensure!(exp.is_empty(), "multiple expression is not allowed");
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return Ok(());
        }

        if !exp.is_empty() {
            println!("> {}", exp);
            println!("{}", calculate(&exp)?);
        } else {
            run_from_file(&file_path)?;
        }
        Ok(())
    }
}

fn run_from_file(file_path: &str) -> Result<()> {
    let file = File::open(file_path).with_context(|| format!("failed to open {}", file_path))?;
    for line in io::BufReader::new(file).lines() {
        let line = line?;
        let exp = line.split('#').next().unwrap_or("").trim();
        println!("> {}", line);
        if exp.is_empty() {
            continue;
        }
        match calculate(exp) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("{}", e),
        }
        println!();
    }
    Ok(())
}

fn calculate(exp: &str) -> Result<String> {
    let hand = tile_table_from_string(&exp.replace(' ', ""))?;
    let n = count_tile_table(&hand);
    ensure!(n > 0 && n <= HAND + 1, "invalid number of tiles: {}", n);
    ensure!(
        hand.iter().flatten().all(|&c| c <= TILE),
        "more than {} copies of a tile",
        TILE
    );

    let mut out = vec![format!("hand: {}", tile_table_to_string(&hand))];
    let shanten = calc_shanten(&hand);
    out.push(format!(
        "shanten: {} (normal: {}, chiitoitsu: {}, kokushimusou: {})",
        shanten,
        calc_normal_shanten(&hand),
        calc_chiitoitsu_shanten(&hand),
        calc_kokushimusou_shanten(&hand),
    ));
    match n % 3 {
        1 => {
            let a = analyze_hand(&hand);
            if a.shanten == SHANTEN_TENPAI {
                out.push(format!("waits: {}", tiles_to_string(&a.waits)));
            }
        }
        2 => {
            if shanten == SHANTEN_WIN {
                out.push("win".to_string());
            }
            for t in calc_discards_to_tenpai(&hand) {
                out.push(format!(
                    "discard: {}, waits: {}",
                    t.discard_tile,
                    tiles_to_string(&t.waits)
                ));
            }
        }
        _ => {}
    }
    Ok(out.join("\n"))
}

fn print_usage() {
    println!("usage: C <hand> | C -f <file>");
    println!("  hand: m123p456s789z1122 (m: 萬子, p: 筒子, s: 索子, z: 字牌, 0: 赤5)");
}
