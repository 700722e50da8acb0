// 判定処理を実際の局の進行に組み込んで動かすためのモジュール
mod driver;
mod wall;

pub use driver::GameDriver;
pub use wall::create_wall;
