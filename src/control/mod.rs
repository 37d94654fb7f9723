// 局の進行を制御するモジュール
pub mod common;
pub mod engine;
pub mod possible_actions;
pub mod possible_calls;
pub mod stage_controller;
pub mod string;
pub mod wall;

pub use self::{
    engine::MahjongEngine,
    possible_actions::calc_possible_actions,
    possible_calls::calc_call_opportunities,
    stage_controller::{step, StageController},
    wall::{create_wall, create_wall_debug, Wall},
};
