// 麻雀のデータモデル
mod define;
mod event;
mod player;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use event::*;
pub use player::*;
pub use tile::*;
