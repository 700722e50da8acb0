use super::*;

// 直前の打牌 (他家の鳴き判定に使用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pub seat: Seat, // 打牌したプレイヤー
    pub tile: Tile,
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tile, self.seat)
    }
}

// 鳴き判定の結果
// tilesは捨て牌を含む面子全体 (ポン:3枚, カン:4枚, チー:手牌2枚+捨て牌)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: MeldType,
    pub seat: Seat,
    pub tiles: Vec<Tile>,
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}){:?}", self.claim_type, self.seat, self.tiles)
    }
}

// 局の判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub finished: bool,
    pub winner: Option<Seat>, // 流局の場合はNone
    pub progress: Vec<usize>, // 各プレイヤーの最大面子数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    New(EventNew),         // 局開始
    Deal(EventDeal),       // ツモ
    Discard(EventDiscard), // 打牌
    Meld(EventMeld),       // 鳴き
    Win(EventWin),         // 局終了 (和了)
    Draw(EventDraw),       // 局終了 (流局)
}

impl Event {
    #[inline]
    pub fn new(seed: u64, hands: Vec<Vec<Tile>>, wall_count: usize) -> Self {
        Self::New(EventNew {
            seed,
            hands,
            wall_count,
        })
    }

    #[inline]
    pub fn deal(seat: Seat, tile: Tile) -> Self {
        Self::Deal(EventDeal { seat, tile })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile) -> Self {
        Self::Discard(EventDiscard { seat, tile })
    }

    #[inline]
    pub fn meld(claim: &Claim, from: Seat) -> Self {
        Self::Meld(EventMeld {
            seat: claim.seat,
            meld_type: claim.claim_type,
            tiles: claim.tiles.clone(),
            from,
        })
    }

    #[inline]
    pub fn win(seat: Seat, hand: Vec<Tile>, progress: Vec<usize>) -> Self {
        Self::Win(EventWin {
            seat,
            hand,
            progress,
        })
    }

    #[inline]
    pub fn draw(progress: Vec<usize>) -> Self {
        Self::Draw(EventDraw { progress })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNew {
    pub seed: u64,
    pub hands: Vec<Vec<Tile>>,
    pub wall_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeld {
    pub seat: Seat,
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
    pub from: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWin {
    pub seat: Seat,
    pub hand: Vec<Tile>,
    pub progress: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraw {
    pub progress: Vec<usize>,
}
