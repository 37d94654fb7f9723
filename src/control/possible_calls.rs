use super::common::{inc_tile, next_seat};
use crate::hand::is_win;
use crate::model::*;

// [鳴き,ロンの候補]
// 打牌に対して各プレイヤーが可能な鳴き,ロンを独立に列挙する
// 優先順位の解決はStageControllerで行う
pub fn calc_call_opportunities(
    stg: &Stage,
    discarder: Seat,
    target: TileInstance,
) -> Vec<CallOpportunity> {
    let mut res = vec![];
    let is_last = stg.wall.is_exhausted(); // 河底
    for i in 1..SEAT {
        let s = (discarder + i) % SEAT;
        let pl = &stg.players[s];

        if let Some(c) = check_ron(pl, target) {
            res.push(c);
        }
        if is_last || pl.is_riichi() {
            continue;
        }

        let t = target.tile;
        let same = pl.tiles_of(t, 3);
        if same.len() >= 2 {
            res.push(CallOpportunity {
                call_type: CallType::Pon,
                seat: s,
                tiles: same[..2].to_vec(),
                target,
            });
        }
        if same.len() == 3 && stg.wall.replacements_left() > 0 {
            res.push(CallOpportunity {
                call_type: CallType::Kan,
                seat: s,
                tiles: same,
                target,
            });
        }
        if s == next_seat(discarder) {
            for tiles in calc_chi_combinations(pl, t) {
                res.push(CallOpportunity {
                    call_type: CallType::Chi,
                    seat: s,
                    tiles,
                    target,
                });
            }
        }
    }
    res
}

fn check_ron(pl: &Player, target: TileInstance) -> Option<CallOpportunity> {
    if pl.furiten.is_active() {
        return None;
    }
    let mut tt = pl.tile_table();
    inc_tile(&mut tt, target.tile);
    if !is_win(&tt) {
        return None;
    }
    Some(CallOpportunity {
        call_type: CallType::Ron,
        seat: pl.seat,
        tiles: vec![],
        target,
    })
}

// 打牌を下,中,上に使うチーの組み合わせ (最大3通り)
pub fn calc_chi_combinations(pl: &Player, t: Tile) -> Vec<Vec<TileInstance>> {
    let mut res = vec![];
    if !t.is_suit() {
        return res;
    }
    let Tile(ti, ni) = t;
    let ni = ni as isize;
    for (a, b) in [(-2, -1), (-1, 1), (1, 2)] {
        let (na, nb) = (ni + a, ni + b);
        if na < 1 || nb > 9 {
            continue;
        }
        let ta = pl.tiles_of(Tile(ti, na as Tnum), 1);
        let tb = pl.tiles_of(Tile(ti, nb as Tnum), 1);
        if let (Some(&x), Some(&y)) = (ta.first(), tb.first()) {
            res.push(vec![x, y]);
        }
    }
    res
}
