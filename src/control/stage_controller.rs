use log::{debug, info};

use super::common::*;
use super::possible_calls::calc_call_opportunities;
use super::wall::create_wall;
use crate::hand::{calc_waits, is_tenpai, is_win};
use crate::listener::Listener;
use crate::model::*;

type Res<T = Vec<Event>> = Result<T, ActionError>;

// [StageController]
// Stageを所有し, アクションの適用とListenerへのイベント通知を行う
#[derive(Debug)]
pub struct StageController {
    stage: Stage,
    listeners: Vec<Box<dyn Listener>>,
}

impl StageController {
    pub fn new(stage: Stage, listeners: Vec<Box<dyn Listener>>) -> Self {
        Self { stage, listeners }
    }

    #[inline]
    pub fn get_stage(&self) -> &Stage {
        &self.stage
    }

    pub fn handle_action(&mut self, seat: Seat, act: &Action) -> ActionResult {
        let res = self.stage.apply(seat, act);
        for e in &res.events {
            for l in &mut self.listeners {
                l.notify_event(&self.stage, e);
            }
        }
        res
    }
}

// (state, action) -> (new state, result)
pub fn step(stg: &Stage, seat: Seat, act: &Action) -> (Stage, ActionResult) {
    let mut next = stg.clone();
    let res = next.apply(seat, act);
    (next, res)
}

impl Stage {
    // 全ての前提条件を確認してから状態を変更する. 失敗した場合Stageは変化しない
    pub fn apply(&mut self, seat: Seat, act: &Action) -> ActionResult {
        if seat >= SEAT {
            let e = ActionError::illegal("invalid seat");
            debug!("seat {} {} rejected: {}", seat, act, e);
            return ActionResult::err(&e);
        }
        let res = match act {
            Action::Start => action_start(self),
            Action::Discard { tile } => action_discard(self, seat, *tile),
            Action::Chi { tiles } => action_chi(self, seat, tiles),
            Action::Pon { tiles } => action_pon(self, seat, tiles),
            Action::Kan { tiles } => action_kan(self, seat, tiles),
            Action::Riichi { tile } => action_riichi(self, seat, *tile),
            Action::Tsumo => action_tsumo(self, seat),
            Action::Ron => action_ron(self, seat),
            Action::SkipCall => action_skip_call(self, seat),
            Action::NextRound => action_next_round(self),
        };
        match &res {
            Ok(_) => debug!("seat {} {}", seat, act),
            Err(e) => debug!("seat {} {} rejected: {}", seat, act, e),
        }
        res.into()
    }
}

// [Check]
fn check_turn(stg: &Stage, seat: Seat) -> Res<()> {
    if stg.phase != Phase::Playing {
        return Err(ActionError::illegal("not in playing phase"));
    }
    if stg.turn != seat {
        return Err(ActionError::illegal("not your turn"));
    }
    Ok(())
}

fn check_calling(stg: &Stage) -> Res<(Seat, TileInstance)> {
    if stg.phase != Phase::Calling {
        return Err(ActionError::illegal("not in calling phase"));
    }
    stg.last_discard
        .ok_or_else(|| ActionError::illegal("no discard to call"))
}

fn has_pending(stg: &Stage, seat: Seat, call_type: CallType) -> bool {
    stg.pending_calls
        .iter()
        .any(|c| c.seat == seat && c.call_type == call_type)
}

// ロン > ポン = 槓 > チー
fn check_priority(stg: &Stage, seat: Seat, call_type: CallType) -> Res<()> {
    if !has_pending(stg, seat, call_type) {
        return Err(ActionError::illegal(&format!(
            "no {:?} opportunity",
            call_type
        )));
    }
    if !stg.ron_winners.is_empty() {
        return Err(ActionError::illegal("ron has been declared"));
    }
    let p = call_type.priority();
    if stg
        .pending_calls
        .iter()
        .any(|c| c.seat != seat && c.call_type.priority() > p)
    {
        return Err(ActionError::illegal("a higher priority call is pending"));
    }
    Ok(())
}

// 指定された牌をすべて手牌から探す (同じ牌の重複指定は不可)
fn find_tiles(pl: &Player, ids: &[TileId]) -> Res<Vec<TileInstance>> {
    let mut res = vec![];
    for (i, &id) in ids.iter().enumerate() {
        if ids[..i].contains(&id) {
            return Err(ActionError::rule("same tile specified twice"));
        }
        res.push(pl.get(id).ok_or(ActionError::TileNotHeld(id))?);
    }
    Ok(res)
}

fn check_kan_supply(stg: &Stage) -> Res<()> {
    if stg.wall.replacements_left() == 0 {
        return Err(ActionError::rule("no replacement tile left"));
    }
    if stg.wall.is_exhausted() {
        return Err(ActionError::rule("wall is exhausted"));
    }
    Ok(())
}

// [Action]
fn action_start(stg: &mut Stage) -> Res {
    if stg.phase != Phase::Waiting {
        return Err(ActionError::illegal("round already started"));
    }
    Ok(deal_round(stg))
}

fn action_discard(stg: &mut Stage, seat: Seat, id: TileId) -> Res {
    check_turn(stg, seat)?;
    let pl = &stg.players[seat];
    pl.get(id).ok_or(ActionError::TileNotHeld(id))?;
    if pl.is_riichi() && stg.last_drawn.map(|t| t.id) != Some(id) {
        return Err(ActionError::rule(
            "only the drawn tile can be discarded in riichi",
        ));
    }
    Ok(do_discard(stg, seat, id, false))
}

fn action_riichi(stg: &mut Stage, seat: Seat, id: TileId) -> Res {
    check_turn(stg, seat)?;
    let pl = &stg.players[seat];
    if pl.is_riichi() {
        return Err(ActionError::rule("already in riichi"));
    }
    if pl.has_open_meld() {
        return Err(ActionError::rule("hand is open"));
    }
    if pl.score < RIICHI_COST {
        return Err(ActionError::rule("not enough points for riichi"));
    }
    if stg.wall.remaining() < RIICHI_MIN_WALL {
        return Err(ActionError::rule("not enough tiles left in the wall"));
    }
    let t = pl.get(id).ok_or(ActionError::TileNotHeld(id))?;
    let mut tt = pl.tile_table();
    dec_tile(&mut tt, t.tile);
    if !is_tenpai(&tt) {
        return Err(ActionError::rule("not in tenpai"));
    }

    let turn_count = stg.turn_count;
    let pl = &mut stg.players[seat];
    pl.score -= RIICHI_COST;
    pl.riichi_turn = Some(turn_count);
    pl.riichi_stick = true;
    pl.is_ippatsu = true;
    stg.riichi_sticks += 1;
    let mut events = vec![Event::riichi_declared(seat, stg.riichi_sticks)];
    events.extend(do_discard(stg, seat, id, true));
    Ok(events)
}

fn action_tsumo(stg: &mut Stage, seat: Seat) -> Res {
    check_turn(stg, seat)?;
    let tile = stg
        .last_drawn
        .ok_or_else(|| ActionError::rule("no tile drawn this turn"))?;
    if !is_win(&stg.players[seat].tile_table()) {
        return Err(ActionError::rule("hand is not complete"));
    }

    let mut events = vec![Event::tsumo(seat, tile)];
    collect_riichi_sticks(stg, seat);
    let result = RoundResult::Tsumo { seat, tile };
    events.extend(end_round(stg, Phase::Win, result));
    Ok(events)
}

fn action_ron(stg: &mut Stage, seat: Seat) -> Res {
    let (from, tile) = check_calling(stg)?;
    if !has_pending(stg, seat, CallType::Ron) {
        return Err(ActionError::illegal("no ron opportunity"));
    }
    let f = &stg.players[seat].furiten;
    if f.permanent || f.riichi {
        return Err(ActionError::rule("furiten"));
    }

    stg.pending_calls.retain(|c| c.seat != seat);
    stg.ron_winners.push(seat);
    let mut events = vec![Event::ron(seat, from, tile)];
    events.extend(resolve_calls(stg));
    Ok(events)
}

fn action_skip_call(stg: &mut Stage, seat: Seat) -> Res {
    check_calling(stg)?;
    if !stg.pending_calls.iter().any(|c| c.seat == seat) {
        return Err(ActionError::illegal("no pending call"));
    }

    mark_ron_passed(stg, seat);
    stg.pending_calls.retain(|c| c.seat != seat);
    Ok(resolve_calls(stg))
}

// ロンの見逃し (見送り, または同じ打牌への鳴き)
fn mark_ron_passed(stg: &mut Stage, seat: Seat) {
    if has_pending(stg, seat, CallType::Ron) {
        let pl = &mut stg.players[seat];
        pl.furiten.temporary = true;
        if pl.is_riichi() {
            pl.furiten.riichi = true;
        }
    }
}

fn action_chi(stg: &mut Stage, seat: Seat, ids: &[TileId; 2]) -> Res {
    let (from, target) = check_calling(stg)?;
    if seat != next_seat(from) {
        return Err(ActionError::illegal("chi is only allowed from the previous seat"));
    }
    check_priority(stg, seat, CallType::Chi)?;
    let tiles = find_tiles(&stg.players[seat], ids)?;
    if !is_run(tiles[0].tile, tiles[1].tile, target.tile) {
        return Err(ActionError::rule("tiles do not form a run with the discard"));
    }

    Ok(do_call(stg, seat, from, target, tiles, MeldType::Chi))
}

fn action_pon(stg: &mut Stage, seat: Seat, ids: &[TileId; 2]) -> Res {
    let (from, target) = check_calling(stg)?;
    check_priority(stg, seat, CallType::Pon)?;
    let tiles = find_tiles(&stg.players[seat], ids)?;
    if tiles.iter().any(|t| t.tile != target.tile) {
        return Err(ActionError::rule("tiles do not match discard"));
    }

    Ok(do_call(stg, seat, from, target, tiles, MeldType::Pon))
}

fn action_kan(stg: &mut Stage, seat: Seat, ids: &[TileId]) -> Res {
    match ids.len() {
        3 => action_open_kan(stg, seat, ids),
        4 => action_closed_kan(stg, seat, ids),
        1 => action_added_kan(stg, seat, ids[0]),
        _ => Err(ActionError::rule("kan needs 1, 3 or 4 tiles")),
    }
}

// 大明槓
fn action_open_kan(stg: &mut Stage, seat: Seat, ids: &[TileId]) -> Res {
    let (from, target) = check_calling(stg)?;
    check_priority(stg, seat, CallType::Kan)?;
    let tiles = find_tiles(&stg.players[seat], ids)?;
    if tiles.iter().any(|t| t.tile != target.tile) {
        return Err(ActionError::rule("tiles do not match discard"));
    }
    check_kan_supply(stg)?;

    let mut events = do_call(stg, seat, from, target, tiles, MeldType::Kan);
    events.extend(do_kan_draw(stg, seat));
    Ok(events)
}

// 暗槓
fn action_closed_kan(stg: &mut Stage, seat: Seat, ids: &[TileId]) -> Res {
    check_turn(stg, seat)?;
    let pl = &stg.players[seat];
    let tiles = find_tiles(pl, ids)?;
    let t = tiles[0].tile;
    if tiles.iter().any(|x| x.tile != t) {
        return Err(ActionError::rule("kan tiles do not match"));
    }
    check_kan_supply(stg)?;
    if pl.is_riichi() {
        // リーチ後はツモ牌を含み, 待ちが変わらない場合のみ
        let drawn = stg
            .last_drawn
            .ok_or_else(|| ActionError::rule("no tile drawn this turn"))?;
        if !ids.contains(&drawn.id) {
            return Err(ActionError::rule("kan in riichi must use the drawn tile"));
        }
        let mut before = pl.tile_table();
        dec_tile(&mut before, drawn.tile);
        let mut after = pl.tile_table();
        for x in &tiles {
            dec_tile(&mut after, x.tile);
        }
        if calc_waits(&before) != calc_waits(&after) {
            return Err(ActionError::rule("kan would change the waits"));
        }
    }

    let pl = &mut stg.players[seat];
    for id in ids {
        pl.take(*id);
    }
    let meld = Meld::kan(tiles, KanType::Ankan, None);
    pl.melds.push(meld.clone());
    clear_ippatsu(stg);
    let mut events = vec![Event::kan_declared(seat, meld)];
    events.extend(do_kan_draw(stg, seat));
    Ok(events)
}

// 加槓
fn action_added_kan(stg: &mut Stage, seat: Seat, id: TileId) -> Res {
    check_turn(stg, seat)?;
    let pl = &stg.players[seat];
    let t = pl.get(id).ok_or(ActionError::TileNotHeld(id))?;
    let mi = pl
        .melds
        .iter()
        .position(|m| m.meld_type == MeldType::Pon && m.tile() == t.tile)
        .ok_or_else(|| ActionError::rule("no pon to add to"))?;
    check_kan_supply(stg)?;

    let pl = &mut stg.players[seat];
    pl.take(id);
    pl.melds[mi].upgrade_to_kan(t);
    let meld = pl.melds[mi].clone();
    clear_ippatsu(stg);
    let mut events = vec![Event::kan_declared(seat, meld)];
    events.extend(do_kan_draw(stg, seat));
    Ok(events)
}

fn action_next_round(stg: &mut Stage) -> Res {
    let (round, dealer, honba) = calc_next_round(stg)?;
    stg.round = round;
    stg.dealer = dealer;
    stg.honba = honba;
    Ok(deal_round(stg))
}

// 次局の (場, 親, 本場). 対局が終了している場合はエラー
pub fn calc_next_round(stg: &Stage) -> Res<(usize, Seat, usize)> {
    if !stg.phase.is_round_over() {
        return Err(ActionError::illegal("round is not over"));
    }
    let result = stg
        .result
        .as_ref()
        .ok_or_else(|| ActionError::illegal("round is not over"))?;
    let (is_renchan, is_draw) = match result {
        RoundResult::Tsumo { seat, .. } => (stg.is_dealer(*seat), false),
        RoundResult::Ron { winners, .. } => (winners.contains(&stg.dealer), false),
        RoundResult::Draw { tenpai, .. } => (tenpai[stg.dealer], true),
    };

    let (mut round, mut dealer, mut honba) = (stg.round, stg.dealer, stg.honba);
    if is_renchan {
        honba += 1;
    } else {
        dealer += 1;
        if dealer == SEAT {
            dealer = 0;
            round += 1;
        }
        honba = if is_draw { honba + 1 } else { 0 };
    }

    if stg.rule.bust && stg.players.iter().any(|p| p.score < 0) {
        return Err(ActionError::rule("match is over"));
    }
    if round >= stg.rule.round {
        return Err(ActionError::rule("match is over"));
    }
    Ok((round, dealer, honba))
}

#[inline]
pub fn is_match_over(stg: &Stage) -> bool {
    stg.phase.is_round_over() && calc_next_round(stg).is_err()
}

// [Mutation]
// 配牌 (親から4枚ずつ3巡, 1枚ずつ1巡) と親の第一ツモ
fn deal_round(stg: &mut Stage) -> Vec<Event> {
    stg.wall = match stg.preset_wall.take() {
        Some(w) => w,
        None => create_wall(stg.wall_seed(), stg.rule.red5),
    };
    stg.hand_count += 1;
    for pl in &mut stg.players {
        pl.reset();
    }
    for r in 0..4 {
        let n = if r < 3 { 4 } else { 1 };
        for o in 0..SEAT {
            let s = (stg.dealer + o) % SEAT;
            for _ in 0..n {
                if let Some(t) = stg.wall.draw() {
                    stg.players[s].hand.push(t);
                }
            }
        }
    }
    for pl in &mut stg.players {
        pl.sort_hand();
    }

    stg.last_discard = None;
    stg.pending_calls.clear();
    stg.ron_winners.clear();
    stg.result = None;
    stg.turn = stg.dealer;
    stg.turn_count = 1;
    stg.phase = Phase::Playing;
    info!(
        "round start: {:?}-{} honba: {} riichi_sticks: {}",
        stg.get_prevalent_wind(),
        stg.dealer + 1,
        stg.honba,
        stg.riichi_sticks
    );

    let mut events = vec![];
    if let Some(t) = stg.wall.draw() {
        stg.players[stg.dealer].hand.push(t);
        stg.last_drawn = Some(t);
        events.push(Event::tile_drawn(stg.dealer, t, false, stg.wall.remaining()));
    }
    events
}

fn do_discard(stg: &mut Stage, seat: Seat, id: TileId, is_riichi: bool) -> Vec<Event> {
    let is_drawn = stg.last_drawn.map(|t| t.id) == Some(id);
    let turn_count = stg.turn_count;
    let pl = &mut stg.players[seat];
    let tile = match pl.take(id) {
        Some(t) => t,
        None => return vec![],
    };
    pl.sort_hand();
    pl.discards.push(Discard {
        tile,
        turn: turn_count,
        is_drawn,
        is_riichi,
        called_by: None,
    });
    if !is_riichi {
        pl.is_ippatsu = false;
    }

    // 自分の捨て牌に和了牌が含まれる場合はフリテン
    let waits = calc_waits(&pl.tile_table());
    if pl.discarded_tiles().any(|t| waits.contains(&t)) {
        pl.furiten.permanent = true;
    }

    stg.last_drawn = None;
    stg.last_discard = Some((seat, tile));
    let mut events = vec![Event::tile_discarded(seat, tile, is_drawn, is_riichi)];

    let calls = calc_call_opportunities(stg, seat, tile);
    if calls.is_empty() {
        events.extend(advance_turn(stg));
    } else {
        stg.pending_calls = calls;
        stg.phase = Phase::Calling;
    }
    events
}

// 鳴きまたはロンへの応答後の処理
fn resolve_calls(stg: &mut Stage) -> Vec<Event> {
    if !stg.ron_winners.is_empty() {
        if stg
            .pending_calls
            .iter()
            .any(|c| c.call_type == CallType::Ron)
        {
            return vec![];
        }
        return finish_ron(stg);
    }
    if stg.pending_calls.is_empty() {
        return advance_turn(stg);
    }
    vec![]
}

fn do_call(
    stg: &mut Stage,
    seat: Seat,
    from: Seat,
    target: TileInstance,
    tiles: Vec<TileInstance>,
    meld_type: MeldType,
) -> Vec<Event> {
    mark_ron_passed(stg, seat);
    let pl = &mut stg.players[seat];
    for t in &tiles {
        pl.take(t.id);
    }
    let mut v = tiles;
    v.push(target);
    let meld = match meld_type {
        MeldType::Chi => Meld::chi(v, from),
        MeldType::Pon => Meld::pon(v, from),
        MeldType::Kan => Meld::kan(v, KanType::Daiminkan, Some(from)),
    };
    pl.melds.push(meld.clone());
    if let Some(d) = stg.players[from].discards.last_mut() {
        d.called_by = Some(seat);
    }

    clear_ippatsu(stg);
    stg.pending_calls.clear();
    stg.last_discard = None;
    stg.last_drawn = None;
    stg.turn = seat;
    stg.phase = Phase::Playing;
    vec![Event::meld_called(seat, meld)]
}

// 槓ドラの公開と嶺上牌のツモ
fn do_kan_draw(stg: &mut Stage, seat: Seat) -> Vec<Event> {
    let mut events = vec![];
    if let Some(t) = stg.wall.reveal_next_dora() {
        events.push(Event::dora_revealed(t));
    }
    if let Some(t) = stg.wall.draw_replacement() {
        stg.players[seat].hand.push(t);
        stg.last_drawn = Some(t);
        events.push(Event::tile_drawn(seat, t, true, stg.wall.remaining()));
    }
    events
}

fn advance_turn(stg: &mut Stage) -> Vec<Event> {
    stg.pending_calls.clear();
    let t = match stg.wall.draw() {
        Some(t) => t,
        None => return finish_draw(stg),
    };
    for pl in &mut stg.players {
        pl.furiten.temporary = false;
    }
    let seat = next_seat(stg.turn);
    stg.turn = seat;
    stg.turn_count += 1;
    stg.last_drawn = Some(t);
    stg.phase = Phase::Playing;
    stg.players[seat].hand.push(t);
    vec![Event::tile_drawn(seat, t, false, stg.wall.remaining())]
}

fn finish_draw(stg: &mut Stage) -> Vec<Event> {
    let mut tenpai = [false; SEAT];
    for s in 0..SEAT {
        tenpai[s] = is_tenpai(&stg.players[s].tile_table());
    }
    let mut events = vec![Event::draw(DrawType::Exhaustive, tenpai)];
    let result = RoundResult::Draw {
        draw_type: DrawType::Exhaustive,
        tenpai,
    };
    events.extend(end_round(stg, Phase::Draw, result));
    events
}

fn finish_ron(stg: &mut Stage) -> Vec<Event> {
    let (from, tile) = match stg.last_discard {
        Some(d) => d,
        None => return vec![],
    };
    let mut winners = stg.ron_winners.clone();
    winners.sort_by_key(|&s| calc_seat_offset(from, s));
    collect_riichi_sticks(stg, winners[0]);
    let result = RoundResult::Ron {
        winners,
        from,
        tile,
    };
    end_round(stg, Phase::Win, result)
}

fn end_round(stg: &mut Stage, phase: Phase, result: RoundResult) -> Vec<Event> {
    stg.phase = phase;
    stg.pending_calls.clear();
    stg.result = Some(result.clone());
    info!("round end: {:?}", result);
    vec![Event::round_end(result, stg.get_scores())]
}

// 供託は和了者が総取り (流局時は持ち越し)
fn collect_riichi_sticks(stg: &mut Stage, seat: Seat) {
    stg.players[seat].score += RIICHI_COST * stg.riichi_sticks as Score;
    stg.riichi_sticks = 0;
}

fn clear_ippatsu(stg: &mut Stage) {
    for pl in &mut stg.players {
        pl.is_ippatsu = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::wall::create_wall_debug;

    fn new_stage(hands: [&str; SEAT], draws: &str) -> Stage {
        let names = ["A", "B", "C", "D"].map(|s| s.to_string());
        let mut stg = Stage::new(Rule::default(), &names, 1);
        stg.preset_wall = Some(create_wall_debug(1, 0, &hands, draws, true).unwrap());
        assert!(stg.apply(0, &Action::Start).success);
        stg
    }

    fn id_of(stg: &Stage, seat: Seat, sym: &str) -> TileId {
        let t = Tile::from_symbol(sym).unwrap();
        stg.players[seat]
            .hand
            .iter()
            .find(|x| x.tile == t)
            .unwrap()
            .id
    }

    #[test]
    fn test_start() {
        let stg = new_stage(["", "", "", ""], "");
        assert_eq!(stg.phase, Phase::Playing);
        assert_eq!(stg.turn_count, 1);
        assert_eq!(stg.players[0].hand.len(), 14);
        for s in 1..SEAT {
            assert_eq!(stg.players[s].hand.len(), 13);
        }
        assert_eq!(stg.count_tiles(), TOTAL_TILES);

        let mut stg = stg;
        let res = stg.apply(0, &Action::Start);
        assert!(!res.success);
    }

    #[test]
    fn test_discard_rejections() {
        let mut stg = new_stage(["m1", "m2", "", ""], "");
        let before = stg.clone();
        let id = id_of(&stg, 1, "m2");
        let res = stg.apply(1, &Action::discard(id));
        assert_eq!(res.error, Some("illegal action: not your turn".to_string()));
        let res = stg.apply(0, &Action::discard(id));
        assert_eq!(res.error, Some(format!("tile not held: {}", id)));
        assert_eq!(stg, before);
    }

    #[test]
    fn test_skip_ron_sets_temporary_furiten() {
        // 座席2は p14待ち, 親が p4 を切る
        let mut stg = new_stage(["p4", "", "m123456789p2355", ""], "z1");
        let id = id_of(&stg, 0, "p4");
        assert!(stg.apply(0, &Action::discard(id)).success);
        assert_eq!(stg.phase, Phase::Calling);
        assert!(stg
            .pending_calls
            .iter()
            .any(|c| c.seat == 2 && c.call_type == CallType::Ron));

        assert!(stg.apply(2, &Action::SkipCall).success);
        assert!(stg.players[2].furiten.temporary);
        assert!(!stg.players[2].furiten.permanent);
        assert!(!stg.pending_calls.iter().any(|c| c.seat == 2));
    }

    #[test]
    fn test_pon_over_ron_sets_furiten() {
        // 座席2は s1,p5 のシャンポン待ち. 親の p5 にロンせずポンする
        let mut stg = new_stage(["p5", "", "m123456789s11p55", ""], "z1");
        let id = id_of(&stg, 0, "p5");
        assert!(stg.apply(0, &Action::discard(id)).success);
        assert!(has_pending(&stg, 2, CallType::Ron));
        assert!(has_pending(&stg, 2, CallType::Pon));

        let ids: Vec<TileId> = stg.players[2]
            .tiles_of(Tile::from_symbol("p5").unwrap(), 2)
            .iter()
            .map(|t| t.id)
            .collect();
        let res = stg.apply(2, &Action::pon(ids[0], ids[1]));
        assert!(res.success, "{:?}", res.error);
        assert_eq!(stg.turn, 2);
        assert!(stg.players[2].furiten.temporary);
        assert!(!stg.players[2].furiten.riichi);
    }
}
