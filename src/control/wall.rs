use rand::prelude::*;

use crate::model::*;

// 136枚の牌山を生成してシャッフル
pub fn create_wall<R: Rng>(rng: &mut R) -> Vec<Tile> {
    let mut wall = Vec::with_capacity(WALL);
    for t in all_tiles() {
        for _ in 0..TILE {
            wall.push(t);
        }
    }
    wall.shuffle(rng);
    wall
}

#[test]
fn test_create_wall() {
    use crate::util::common::tiles_to_tile_table;

    let mut rng: StdRng = SeedableRng::seed_from_u64(0);
    let wall = create_wall(&mut rng);
    assert_eq!(wall.len(), WALL);

    let tt = tiles_to_tile_table(&wall);
    for t in all_tiles() {
        assert_eq!(tt[t.0.index()][t.1], TILE);
    }

    let mut rng2: StdRng = SeedableRng::seed_from_u64(0);
    assert_eq!(wall, create_wall(&mut rng2));
}
