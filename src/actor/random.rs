use rand::prelude::*;

use super::*;

pub struct RandomDiscardBuilder;

impl ActorBuilder for RandomDiscardBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "RandomDiscard".to_string(),
            args: vec![
                Arg::int("seed", 0),
                Arg::float("call", 0.0),
                Arg::bool("riichi", true),
            ],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(RandomDiscard::from_config(config))
    }
}

// 和了できる場合は和了, それ以外はランダムに打牌
// call: 鳴き可能な場合に鳴く確率, riichi: 聴牌時にリーチするかどうか
#[derive(Clone)]
pub struct RandomDiscard {
    config: Config,
    rng: StdRng,
    call: f32,
    riichi: bool,
}

impl RandomDiscard {
    pub fn from_config(config: Config) -> Self {
        let seed = config.args[0].value.as_int().unwrap_or(0);
        let call = config.args[1].value.as_float().unwrap_or(0.0);
        let riichi = config.args[2].value.as_bool().unwrap_or(true);
        Self {
            config,
            rng: StdRng::seed_from_u64(seed as u64),
            call,
            riichi,
        }
    }
}

impl Actor for RandomDiscard {
    fn select_action(&mut self, _stg: &Stage, _seat: Seat, acts: &[Action]) -> Action {
        for a in acts {
            match a {
                Action::Tsumo | Action::Ron | Action::Start | Action::NextRound => {
                    return a.clone();
                }
                _ => {}
            }
        }

        if acts.contains(&Action::SkipCall) {
            let calls: Vec<&Action> = acts.iter().filter(|a| **a != Action::SkipCall).collect();
            if !calls.is_empty() && self.rng.gen::<f32>() < self.call {
                if let Some(a) = calls.choose(&mut self.rng) {
                    return (*a).clone();
                }
            }
            return Action::SkipCall;
        }

        if self.riichi {
            let riichis: Vec<&Action> = acts
                .iter()
                .filter(|a| matches!(a, Action::Riichi { .. }))
                .collect();
            if let Some(a) = riichis.choose(&mut self.rng) {
                return (*a).clone();
            }
        }

        let discards: Vec<&Action> = acts
            .iter()
            .filter(|a| matches!(a, Action::Discard { .. }))
            .collect();
        match discards.choose(&mut self.rng) {
            Some(a) => (*a).clone(),
            None => acts[0].clone(),
        }
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Listener for RandomDiscard {}
