use log::{info, warn};

use super::possible_actions::{calc_next_caller, calc_possible_actions};
use super::stage_controller::{is_match_over, StageController};
use crate::actor::Actor;
use crate::listener::Listener;
use crate::model::*;

// [MahjongEngine]
// Actorにアクションを選択させて対局を進行する
#[derive(Debug)]
pub struct MahjongEngine {
    ctrl: StageController,
    actors: [Box<dyn Actor>; SEAT],
    max_step: usize, // 無限ループ防止
}

impl MahjongEngine {
    pub fn new(
        rule: Rule,
        seed: u64,
        actors: [Box<dyn Actor>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        let names = [0, 1, 2, 3].map(|s| actors[s].get_config().name.clone());
        let stage = Stage::new(rule, &names, seed);
        Self {
            ctrl: StageController::new(stage, listeners),
            actors,
            max_step: 1_000_000,
        }
    }

    pub fn from_stage(
        stage: Stage,
        actors: [Box<dyn Actor>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        Self {
            ctrl: StageController::new(stage, listeners),
            actors,
            max_step: 1_000_000,
        }
    }

    #[inline]
    pub fn get_stage(&self) -> &Stage {
        self.ctrl.get_stage()
    }

    // 対局終了までを実行して最終得点を返却
    pub fn run(&mut self) -> [Score; SEAT] {
        for s in 0..SEAT {
            self.actors[s].init(s);
        }

        for _ in 0..self.max_step {
            if !self.do_step() {
                break;
            }
        }

        let stg = self.ctrl.get_stage();
        info!("game end: scores {:?}", stg.get_scores());
        stg.get_scores()
    }

    // 1アクション進める. 対局が終了した場合はfalse
    pub fn do_step(&mut self) -> bool {
        let stg = self.ctrl.get_stage();
        if is_match_over(stg) {
            return false;
        }
        let seat = match stg.phase {
            Phase::Waiting | Phase::Win | Phase::Draw => stg.dealer,
            Phase::Playing => stg.turn,
            Phase::Calling => match calc_next_caller(stg) {
                Some(s) => s,
                None => return false,
            },
        };

        let acts = calc_possible_actions(stg, seat);
        if acts.is_empty() {
            warn!("seat {}: no possible action", seat);
            return false;
        }
        let mut act = self.actors[seat].select_action(stg, seat, &acts);
        if !acts.contains(&act) {
            warn!("seat {}: invalid action {} (fallback)", seat, act);
            act = fallback_action(&acts);
        }

        let res = self.ctrl.handle_action(seat, &act);
        if !res.success {
            warn!("seat {}: {} failed: {:?}", seat, act, res.error);
            return false;
        }
        let stg = self.ctrl.get_stage();
        for e in &res.events {
            for a in &mut self.actors {
                a.notify_event(stg, e);
            }
        }
        true
    }
}

// 見送り, ツモ切り相当のアクション
fn fallback_action(acts: &[Action]) -> Action {
    if acts.contains(&Action::SkipCall) {
        return Action::SkipCall;
    }
    acts.iter()
        .rev()
        .find(|a| matches!(a, Action::Discard { .. }))
        .unwrap_or(&acts[0])
        .clone()
}
