use serde::{Deserialize, Serialize};

use crate::error;
use crate::hand::{check_chow, check_pong_gong, evaluate_hand, judge_round};
use crate::model::*;
use crate::util::misc::*;

// 卓の状態(JSON)を読み込んで鳴き判定と局の終了判定の結果をJSONで出力するモード
#[derive(Debug)]
pub struct TableApp {
    args: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Table {
    pub players: Vec<Player>,
    #[serde(default)]
    pub discard: Option<Discard>,
    pub wall_count: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub pong_gong: Option<Claim>,
    pub chow: Option<Claim>,
    pub hands: Vec<(bool, usize)>, // 各プレイヤーの和了判定
    pub outcome: RoundOutcome,
}

impl TableApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&self) {
        let file_path = match self.args.as_slice() {
            [p] => p,
            _ => {
                error!("Usage: cargo run J FILE");
                return;
            }
        };

        match read_table(file_path).and_then(|t| Ok(serde_json::to_string_pretty(&judge_table(&t))?)) {
            Ok(s) => println!("{}", s),
            Err(e) => error!("{}: {}", file_path, e),
        }
    }
}

pub fn read_table(file_path: &str) -> Res<Table> {
    let s = std::fs::read_to_string(file_path)?;
    parse_table(&s)
}

pub fn parse_table(s: &str) -> Res<Table> {
    let table: Table = serde_json::from_str(s)?;
    for (i, pl) in table.players.iter().enumerate() {
        if pl.melds.iter().any(|m| m.tiles.len() != m.meld_type.size()) {
            Err(format!("player{}: invalid meld size", i))?;
        }
    }
    Ok(table)
}

pub fn judge_table(table: &Table) -> Report {
    let (pong_gong, chow) = match &table.discard {
        Some(d) => (
            check_pong_gong(d, &table.players),
            check_chow(d, &table.players),
        ),
        None => (None, None),
    };
    Report {
        pong_gong,
        chow,
        hands: table.players.iter().map(evaluate_hand).collect(),
        outcome: judge_round(&table.players, table.wall_count),
    }
}

#[test]
fn test_judge_table() {
    let json = r#"{
        "players": [
            { "seat": 0, "hand": ["m1", "m2", "m3", "p4", "p5", "p6", "s7", "s8", "s9", "w1", "w2", "w3", "d1"] },
            { "seat": 1, "hand": ["m1", "m2", "p4", "p4", "s1", "s2"],
              "melds": [
                { "meld_type": "Pong", "tiles": ["d2", "d2", "d2"], "from": 0 },
                { "meld_type": "Chow", "tiles": ["s7", "s8", "s9"] }
              ] },
            { "seat": 2, "hand": ["m3", "m3", "m3", "w4", "w4", "d3", "d3", "p9", "p9", "p1", "s5", "s6", "s7"] }
        ],
        "discard": { "seat": 0, "tile": "m3" },
        "wall_count": 30
    }"#;
    let table = parse_table(json).unwrap();
    let report = judge_table(&table);

    let pg = report.pong_gong.as_ref().unwrap();
    assert_eq!(pg.claim_type, MeldType::Gong);
    assert_eq!(pg.seat, 2);

    let chow = report.chow.as_ref().unwrap();
    assert_eq!(chow.seat, 1);
    assert_eq!(chow.tiles, crate::util::common::tiles_from_string("m123").unwrap());

    assert_eq!(report.hands, vec![(false, 0), (false, 0), (false, 0)]);
    assert!(!report.outcome.finished);

    // JSONとして出力できる
    let s = serde_json::to_string(&report).unwrap();
    let report2: Report = serde_json::from_str(&s).unwrap();
    assert_eq!(report, report2);
}

#[test]
fn test_judge_table_large_seat() {
    let json = r#"{
        "players": [
            { "seat": 0, "hand": ["m1", "m2", "p1"] },
            { "seat": 1, "hand": ["m1", "m2", "p1"] }
        ],
        "discard": { "seat": 18446744073709551615, "tile": "m3" },
        "wall_count": 10
    }"#;
    let table = parse_table(json).unwrap();
    let report = judge_table(&table);
    assert_eq!(report.chow, None);
    assert_eq!(report.pong_gong, None);
}

#[test]
fn test_parse_table_error() {
    assert!(parse_table("{}").is_err());
    assert!(parse_table(r#"{ "players": [{ "seat": 0, "hand": ["x1"] }], "wall_count": 0 }"#).is_err());
    let bad_meld = r#"{ "players": [{ "seat": 0, "hand": [],
        "melds": [{ "meld_type": "Gong", "tiles": ["m1", "m1", "m1"] }] }], "wall_count": 0 }"#;
    assert!(parse_table(bad_meld).is_err());
}
