use super::common::*;
use super::stage_controller::{is_match_over, step};
use crate::hand::{calc_discards_to_tenpai, is_win};
use crate::model::*;

// [可能なアクションの列挙]
// 返却されるアクションはすべてStage::applyで受理される
pub fn calc_possible_actions(stg: &Stage, seat: Seat) -> Vec<Action> {
    match stg.phase {
        Phase::Waiting => vec![Action::Start],
        Phase::Playing => {
            if stg.turn == seat {
                calc_possible_turn_actions(stg, seat)
            } else {
                vec![]
            }
        }
        Phase::Calling => calc_possible_call_actions(stg, seat),
        Phase::Win | Phase::Draw => {
            if is_match_over(stg) {
                vec![]
            } else {
                vec![Action::NextRound]
            }
        }
    }
}

// 手番のプレイヤーのアクション (打牌,リーチ,ツモ,暗槓,加槓)
pub fn calc_possible_turn_actions(stg: &Stage, seat: Seat) -> Vec<Action> {
    let pl = &stg.players[seat];
    let mut acts = vec![];

    if stg.last_drawn.is_some() && is_win(&pl.tile_table()) {
        acts.push(Action::Tsumo);
    }

    // 打牌 (同じ牌は1つにまとめる, 赤5は区別)
    if pl.is_riichi() {
        if let Some(t) = stg.last_drawn {
            acts.push(Action::discard(t.id));
        }
    } else {
        for t in distinct_tiles(pl) {
            acts.push(Action::discard(t.id));
        }
    }

    // リーチ
    if !pl.is_riichi() && !pl.has_open_meld() {
        let tenpais = calc_discards_to_tenpai(&pl.tile_table());
        for t in distinct_tiles(pl) {
            if tenpais.iter().any(|tp| tp.discard_tile == t.tile) {
                push_if_accepted(stg, seat, &mut acts, Action::riichi(t.id));
            }
        }
    }

    // 暗槓
    for t in Tile::all() {
        let tiles = pl.tiles_of(t, TILE);
        if tiles.len() == TILE {
            let ids = tiles.iter().map(|x| x.id).collect();
            push_if_accepted(stg, seat, &mut acts, Action::kan(ids));
        }
    }

    // 加槓
    for m in pl.melds.iter().filter(|m| m.meld_type == MeldType::Pon) {
        if let Some(t) = pl.tiles_of(m.tile(), 1).first() {
            push_if_accepted(stg, seat, &mut acts, Action::kan(vec![t.id]));
        }
    }

    acts
}

// 打牌に対するアクション (ロン,ポン,槓,チー,見送り)
pub fn calc_possible_call_actions(stg: &Stage, seat: Seat) -> Vec<Action> {
    let mut acts = vec![];
    let calls: Vec<&CallOpportunity> = stg
        .pending_calls
        .iter()
        .filter(|c| c.seat == seat)
        .collect();
    if calls.is_empty() {
        return acts;
    }
    for c in calls {
        push_if_accepted(stg, seat, &mut acts, c.to_action());
    }
    acts.push(Action::SkipCall);
    acts
}

// 現時点で応答が必要なプレイヤー (優先順位が最も高い未処理の鳴きを持つプレイヤー)
pub fn calc_next_caller(stg: &Stage) -> Option<Seat> {
    let (from, _) = stg.last_discard?;
    stg.pending_calls
        .iter()
        .max_by_key(|c| {
            (
                c.call_type.priority(),
                SEAT - calc_seat_offset(from, c.seat),
            )
        })
        .map(|c| c.seat)
}

fn distinct_tiles(pl: &Player) -> Vec<TileInstance> {
    let mut hand = pl.hand.clone();
    hand.sort();
    hand.dedup_by(|a, b| a.tile == b.tile && a.is_red == b.is_red);
    hand
}

fn push_if_accepted(stg: &Stage, seat: Seat, acts: &mut Vec<Action>, act: Action) {
    if step(stg, seat, &act).1.success {
        acts.push(act);
    }
}
