// 和了判定と鳴き判定を行うモジュール
mod claim;
mod judge;
mod set;
mod win;

pub use self::{
    claim::{check_chow, check_pong_gong},
    judge::judge_round,
    set::{check_consecutive, count_sets, count_triplets, extract_runs},
    win::evaluate_hand,
};
