mod nop;
mod random;

use std::fmt;

use anyhow::{anyhow, bail, Result};

use crate::listener::Listener;
use crate::model::*;
use crate::util::variant::*;

pub use nop::Nop;
pub use random::RandomDiscard;

#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub args: Vec<Arg>,
}

// Actor trait
// 人間のプレイヤーと同じアクションの集合からのみ選択する
pub trait Actor: Listener + ActorClone + Send {
    // 対局開始時の初期化処理
    fn init(&mut self, _seat: Seat) {}

    // 可能なアクションの選択 (actsは空ではない)
    fn select_action(&mut self, stg: &Stage, seat: Seat, acts: &[Action]) -> Action;

    // Actorの詳細表示用
    fn get_config(&self) -> &Config;
}

impl fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = self.get_config();
        let arg_str = conf
            .args
            .iter()
            .map(|a| format!("{}={}", a.name, a.value))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}({})", conf.name, arg_str)
    }
}

// https://stackoverflow.com/questions/30353462/how-to-clone-a-struct-storing-a-boxed-trait-object
pub trait ActorClone {
    fn clone_box(&self) -> Box<dyn Actor>;
}

impl<T> ActorClone for T
where
    T: 'static + Actor + Clone,
{
    fn clone_box(&self) -> Box<dyn Actor> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Actor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

trait ActorBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Actor>;
}

// "Name" または "Name(arg0,arg1,...)" 形式の文字列からActorを生成
pub fn create_actor(exp: &str) -> Result<Box<dyn Actor>> {
    let builders: Vec<Box<dyn ActorBuilder>> = vec![
        Box::new(nop::NopBuilder {}),
        Box::new(random::RandomDiscardBuilder {}),
    ];

    let name: &str;
    let args: Vec<&str>;
    let paren_left = exp.find('(');
    let paren_right = exp.rfind(')');
    if let (Some(l), Some(r)) = (paren_left, paren_right) {
        if r < l {
            bail!("invalid paren: {}", exp);
        }
        args = exp[l + 1..r].split(',').collect();
        name = &exp[..l];
    } else {
        args = vec![];
        name = exp;
    }

    for b in &builders {
        let mut conf = b.get_default_config();
        if name == conf.name {
            if conf.args.len() < args.len() {
                bail!(
                    "expected {} arguments for {}. but {} arguments are provided.",
                    conf.args.len(),
                    name,
                    args.len(),
                );
            }

            for (i, &a) in args.iter().enumerate() {
                if !a.is_empty() {
                    conf.args[i].value = conf.args[i]
                        .value
                        .parse_as(a)
                        .map_err(|e| anyhow!("{}: {}", e, a))?;
                }
            }

            return Ok(b.create(conf));
        }
    }

    bail!("unknown actor name: {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_actor() {
        let a = create_actor("Nop").unwrap();
        assert_eq!(a.get_config().name, "Nop");
        let a = create_actor("RandomDiscard(7,0.5)").unwrap();
        assert_eq!(format!("{:?}", a), "RandomDiscard(seed=7,call=0.5,riichi=true)");
        assert!(create_actor("Unknown").is_err());
        assert!(create_actor("RandomDiscard(x)").is_err());
        assert!(create_actor("Nop(1)").is_err());
    }
}
