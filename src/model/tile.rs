use serde::{de, ser};

use super::*;

// [Category]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Characters, // 萬子
    Dots,       // 筒子
    Bamboo,     // 索子
    Winds,      // 風牌
    Dragons,    // 三元牌
}

use Category::*;

pub const CATEGORIES: [Category; CATEGORY] = [Characters, Dots, Bamboo, Winds, Dragons];
pub const SUITS: [Category; 3] = [Characters, Dots, Bamboo];

impl Category {
    #[inline]
    pub fn index(self) -> Index {
        self as Index
    }

    // 数牌
    #[inline]
    pub fn is_suit(self) -> bool {
        matches!(self, Characters | Dots | Bamboo)
    }

    // 字牌 (順子を作れない)
    #[inline]
    pub fn is_honor(self) -> bool {
        !self.is_suit()
    }

    // 数字の種類
    #[inline]
    pub fn rank_count(self) -> usize {
        match self {
            Winds => WIND,
            Dragons => DRAGON,
            _ => RANK,
        }
    }

    pub fn symbol(self) -> char {
        ['m', 'p', 's', 'w', 'd'][self.index()]
    }

    pub fn from_symbol(c: char) -> Result<Self, String> {
        Ok(match c {
            'm' => Characters,
            'p' => Dots,
            's' => Bamboo,
            'w' => Winds,
            'd' => Dragons,
            _ => return Err(format!("invalid tile category: '{}'", c)),
        })
    }
}

// [Tile]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(pub Category, pub Rank); // (category, rank) rankは0始まり

impl Tile {
    // 範囲外の牌は呼び出し側の契約違反
    pub fn new(c: Category, r: Rank) -> Self {
        assert!(r < c.rank_count(), "rank out of range: {:?} {}", c, r);
        Self(c, r)
    }

    // "m1" -> Tile(Characters, 0)
    pub fn from_symbol(s: &str) -> Result<Self, String> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(format!("invalid tile symbol: '{}'", s));
        }
        let c = Category::from_symbol(chars[0])?;
        let n = chars[1]
            .to_digit(10)
            .ok_or_else(|| format!("invalid tile number: '{}'", s))? as usize;
        if n == 0 || n > c.rank_count() {
            return Err(format!("tile number out of range: '{}'", s));
        }
        Ok(Self(c, n - 1))
    }

    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0.is_suit()
    }

    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0.is_honor()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.symbol(), self.1 + 1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::str::FromStr for Tile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// 全種類の牌 (34種)
pub fn all_tiles() -> Vec<Tile> {
    let mut tiles = vec![];
    for &c in &CATEGORIES {
        for r in 0..c.rank_count() {
            tiles.push(Tile::new(c, r));
        }
    }
    tiles
}

// [TileTable]
// 字牌もRANK幅の行を使う (使わない列は常に0)
pub type TileRow = [usize; RANK];
pub type TileTable = [TileRow; CATEGORY];

#[test]
fn test_tile_symbol() {
    let t = Tile::from_symbol("m1").unwrap();
    assert_eq!(t, Tile(Characters, 0));
    assert_eq!(t.to_string(), "m1");
    assert_eq!(Tile::from_symbol("d3").unwrap(), Tile(Dragons, DR));
    assert_eq!(Tile::from_symbol("w4").unwrap(), Tile(Winds, WN));
    assert!(Tile::from_symbol("w5").is_err());
    assert!(Tile::from_symbol("s0").is_err());
    assert!(Tile::from_symbol("x1").is_err());
    assert_eq!(all_tiles().len(), 34);
}

#[test]
fn test_tile_serde() {
    let t = Tile(Bamboo, 8);
    let s = serde_json::to_string(&t).unwrap();
    assert_eq!(s, "\"s9\"");
    let t2: Tile = serde_json::from_str(&s).unwrap();
    assert_eq!(t, t2);
}

#[test]
#[should_panic]
fn test_tile_out_of_range() {
    Tile::new(Winds, WIND);
}
