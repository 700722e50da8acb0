// mainから直接呼び出すアプリケーションの動作モード(C, J, E)のモジュール

mod calculator;
mod engine;
mod table;

pub use calculator::CalculatorApp;
pub use engine::EngineApp;
pub use table::{judge_table, parse_table, read_table, Report, Table, TableApp};
