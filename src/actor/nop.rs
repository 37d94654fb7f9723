use super::*;

pub struct NopBuilder;

impl ActorBuilder for NopBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Nop".to_string(),
            args: vec![],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Nop::from_config(config))
    }
}

// ツモ切りと鳴きの見送りのみを行う (和了もしない)
#[derive(Clone)]
pub struct Nop {
    config: Config,
}

impl Nop {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }
}

impl Actor for Nop {
    fn select_action(&mut self, stg: &Stage, _seat: Seat, acts: &[Action]) -> Action {
        if acts.contains(&Action::SkipCall) {
            return Action::SkipCall;
        }
        if let Some(t) = stg.last_drawn {
            let act = Action::discard(t.id);
            if acts.contains(&act) {
                return act;
            }
        }
        acts.iter()
            .rev()
            .find(|a| matches!(a, Action::Discard { .. }))
            .unwrap_or(&acts[0])
            .clone()
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Listener for Nop {}
