// mainから直接呼び出すアプリケーションの動作モード(E, C)のモジュール

mod calculator;
mod engine;

pub use calculator::CalculatorApp;
pub use engine::{EngineApp, GameConfig};
