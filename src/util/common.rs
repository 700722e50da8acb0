use crate::model::*;
use crate::util::misc::vec_count;

#[inline]
pub fn count_tile(tt: &TileTable, t: Tile) -> usize {
    tt[t.0.index()][t.1]
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0.index()][t.1] += 1;
}

#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) {
    let n = &mut tt[t.0.index()][t.1];
    assert!(*n > 0, "tile not found in table: {}", t);
    *n -= 1;
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for &c in &CATEGORIES {
        for r in 0..c.rank_count() {
            for _ in 0..tt[c.index()][r] {
                tiles.push(Tile(c, r));
            }
        }
    }
    tiles
}

// "m123p55w1" のような表記をパース
pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, String> {
    let mut tiles = vec![];
    let mut cat = None;
    for c in exp.chars() {
        match c {
            'm' | 'p' | 's' | 'w' | 'd' => cat = Some(Category::from_symbol(c)?),
            '1'..='9' => {
                let cat = cat.ok_or_else(|| "tile number before tile category".to_string())?;
                let n = c.to_digit(10).unwrap_or(0) as usize;
                if n > cat.rank_count() {
                    return Err(format!("tile number out of range: '{}{}'", cat.symbol(), c));
                }
                tiles.push(Tile(cat, n - 1));
            }
            _ => {
                return Err(format!("invalid char: '{}'", c));
            }
        }
    }
    Ok(tiles)
}

// 鳴き(3枚または4枚)をパースして種別を判定
pub fn meld_from_string(exp: &str) -> Result<Meld, String> {
    let mut tiles = tiles_from_string(exp)?;
    tiles.sort();
    if tiles.len() < 3 || tiles.iter().any(|t| t.0 != tiles[0].0) {
        return Err(format!("invalid meld: '{}'", exp));
    }

    let mut diffs = vec![];
    for w in tiles.windows(2) {
        diffs.push(w[1].1 - w[0].1);
    }

    let meld_type = if diffs.len() == 2 && vec_count(&diffs, &1) == 2 && tiles[0].is_suit() {
        MeldType::Chow
    } else if diffs.len() == 2 && vec_count(&diffs, &0) == 2 {
        MeldType::Pong
    } else if diffs.len() == 3 && vec_count(&diffs, &0) == 3 {
        MeldType::Gong
    } else {
        return Err(format!("invalid meld: '{}'", exp));
    };

    Ok(Meld::new(meld_type, tiles, None))
}

#[test]
fn test_tiletable() {
    let hand = tiles_from_string("m1123p55s9w14d3").unwrap();
    let tt = tiles_to_tile_table(&hand);
    assert_eq!(count_tile(&tt, Tile(Category::Characters, 0)), 2);
    assert_eq!(count_tile(&tt, Tile(Category::Dragons, DR)), 1);
    let hand2 = tiles_from_tile_table(&tt);
    assert_eq!(hand, hand2);
}

#[test]
fn test_parse_error() {
    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("w5").is_err());
    assert!(tiles_from_string("d4").is_err());
    assert!(tiles_from_string("m1x").is_err());
}

#[test]
fn test_meld_from_string() {
    assert_eq!(meld_from_string("s312").unwrap().meld_type, MeldType::Chow);
    assert_eq!(meld_from_string("p555").unwrap().meld_type, MeldType::Pong);
    assert_eq!(meld_from_string("d1111").unwrap().meld_type, MeldType::Gong);
    assert!(meld_from_string("w123").is_err());
    assert!(meld_from_string("m124").is_err());
    assert!(meld_from_string("m1p23").is_err());
}
