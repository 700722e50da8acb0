use super::*;
use crate::util::misc::vec_to_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Chow, // 順子 (チー)
    Pong, // 刻子 (ポン)
    Gong, // 槓子 (カン)
}

impl MeldType {
    // 面子を構成する牌の枚数
    #[inline]
    pub fn size(self) -> usize {
        match self {
            MeldType::Gong => 4,
            _ => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub from: Option<Seat>, // 鳴いた相手の座席
}

impl Meld {
    #[inline]
    pub fn new(meld_type: MeldType, tiles: Vec<Tile>, from: Option<Seat>) -> Self {
        assert!(tiles.len() == meld_type.size());
        Self {
            meld_type,
            tiles,
            from,
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join("|"))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,       // 座席番号 (順子を鳴けるのはseat+1のみ)
    pub hand: Vec<Tile>,  // 手牌 (並び順を保持)
    #[serde(default)]
    pub melds: Vec<Meld>, // 鳴き一覧
}

impl Player {
    pub fn new(seat: Seat, hand: Vec<Tile>, melds: Vec<Meld>) -> Self {
        Self { seat, hand, melds }
    }

    pub fn count_tile(&self, t: Tile) -> usize {
        self.hand.iter().filter(|&&h| h == t).count()
    }

    // 手牌と鳴きを合わせた枚数
    pub fn tile_count(&self) -> usize {
        self.hand.len() + self.melds.iter().map(|m| m.tiles.len()).sum::<usize>()
    }

    // 手牌から牌を1枚取り除く
    pub fn remove_tile(&mut self, t: Tile) -> bool {
        if let Some(i) = self.hand.iter().position(|&h| h == t) {
            self.hand.remove(i);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hand = self.hand.clone();
        hand.sort();
        writeln!(f, "seat: {}", self.seat)?;
        writeln!(f, "hand: {}", vec_to_string(&hand))?;
        write!(f, "melds: {}", vec_to_string(&self.melds))
    }
}
