// 型エイリアス
pub type Seat = usize; // 座席
pub type Rank = usize; // 牌の数字部分 (0始まり)
pub type Index = usize; // その他Index

// Number
pub const SEAT: usize = 4; // 座席の数
pub const CATEGORY: usize = 5; // 牌の種別の数 (萬子,筒子,索子,風牌,三元牌)
pub const RANK: usize = 9; // 数牌の数字の数 (1~9)
pub const TILE: usize = 4; // 同種の牌の数
pub const HAND: usize = 13; // 配牌の枚数
pub const SET_TO_WIN: usize = 4; // 和了に必要な面子の数
pub const WALL: usize = (RANK * 3 + WIND + DRAGON) * TILE; // 牌山の枚数 (136)

// 字牌の数字の数
pub const WIND: usize = 4;
pub const DRAGON: usize = 3;

// Rank Index (風牌)
pub const WE: Rank = 0; // Wind: East  (東)
pub const WS: Rank = 1; // Wind: South (南)
pub const WW: Rank = 2; // Wind: West  (西)
pub const WN: Rank = 3; // Wind: North (北)

// Rank Index (三元牌)
pub const DW: Rank = 0; // Dragon: White (白)
pub const DG: Rank = 1; // Dragon: Green (發)
pub const DR: Rank = 2; // Dragon: Red   (中)
