// 手牌の向聴数,和了牌を計算するモジュール
mod shanten;
mod wait;

pub use self::{
    shanten::{
        calc_chiitoitsu_shanten, calc_kokushimusou_shanten, calc_normal_shanten, calc_shanten,
        SHANTEN_TENPAI, SHANTEN_WIN,
    },
    wait::{calc_discards_to_tenpai, calc_waits, is_tenpai, is_win, Tenpai},
};

use crate::model::*;

// [HandAnalysis]
// 3n+1枚の場合は聴牌時に和了牌も計算する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    pub shanten: i32,
    pub waits: Vec<Tile>,
}

pub fn analyze_hand(hand: &TileTable) -> HandAnalysis {
    let shanten = calc_shanten(hand);
    let waits = if shanten == SHANTEN_TENPAI {
        calc_waits(hand)
    } else {
        vec![]
    };
    HandAnalysis { shanten, waits }
}
