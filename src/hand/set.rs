use crate::model::*;
use crate::util::common::*;

// [順子抽出]
// ソート済みの数字列から先頭の数字を起点に順子を貪欲に取り出す.
// 起点rの後ろから最初のr+1, さらにその後ろから最初のr+2を探し,
// 両方見つかれば3枚を取り除いて順子とする. 見つからなければ起点のみを余りとする.
// 全探索ではないため最適な分解を見逃す場合がある (例: [1,1,1,2,3,4] は 111+234 にならない).
pub fn extract_runs(sorted: &[Rank]) -> (Vec<[Rank; 3]>, Vec<Rank>) {
    let mut runs = vec![];
    let mut leftover = vec![];
    let mut used = vec![false; sorted.len()];
    let mut remain = sorted.len();

    let mut i = 0;
    while i < sorted.len() {
        if used[i] {
            i += 1;
            continue;
        }
        if remain < 3 {
            for j in i..sorted.len() {
                if !used[j] {
                    leftover.push(sorted[j]);
                }
            }
            break;
        }

        let r = sorted[i];
        let second = find_unused(sorted, &used, i + 1, r + 1);
        let third = second.and_then(|j| find_unused(sorted, &used, j + 1, r + 2));
        if let (Some(j), Some(k)) = (second, third) {
            used[j] = true;
            used[k] = true;
            remain -= 3;
            runs.push([r, r + 1, r + 2]);
        } else {
            remain -= 1;
            leftover.push(r);
        }
        used[i] = true;
        i += 1;
    }

    (runs, leftover)
}

fn find_unused(sorted: &[Rank], used: &[bool], start: Index, r: Rank) -> Option<Index> {
    (start..sorted.len()).find(|&j| !used[j] && sorted[j] == r)
}

// [面子数の計算]
// 数牌の順子を種別ごとに抽出した後, 残りの牌(字牌を含む)で3枚以上ある牌を刻子1つとして数える.
// 4枚あっても刻子1つ (手牌中の槓子は考慮しない)
pub fn count_sets(tiles: &[Tile]) -> (usize, Vec<[Tile; 3]>) {
    let mut tt = tiles_to_tile_table(tiles);
    let mut sets = vec![];

    for &c in &SUITS {
        let mut ranks = vec![];
        for r in 0..RANK {
            for _ in 0..tt[c.index()][r] {
                ranks.push(r);
            }
        }

        let (runs, _) = extract_runs(&ranks);
        for run in runs {
            let run = [Tile(c, run[0]), Tile(c, run[1]), Tile(c, run[2])];
            for &t in &run {
                dec_tile(&mut tt, t);
            }
            sets.push(run);
        }
    }

    let n_triplet = tt.iter().flat_map(|row| row.iter()).filter(|&&n| n >= 3).count();
    (sets.len() + n_triplet, sets)
}

// 刻子のみの面子数と刻子の牌のリスト
pub fn count_triplets(tiles: &[Tile]) -> (usize, Vec<Tile>) {
    let tt = tiles_to_tile_table(tiles);
    let triplets: Vec<Tile> = tiles_from_tile_table(&tt)
        .into_iter()
        .filter(|&t| count_tile(&tt, t) >= 3)
        .fold(vec![], |mut v, t| {
            if !v.contains(&t) {
                v.push(t);
            }
            v
        });
    (triplets.len(), triplets)
}

// 数字列が欠けのない連番かどうか (順不同)
pub fn check_consecutive(ranks: &[Rank]) -> bool {
    let mut v = ranks.to_vec();
    v.sort_unstable();
    match (v.first(), v.last()) {
        (Some(&min), Some(&max)) => v.iter().copied().eq(min..=max),
        _ => false,
    }
}

#[cfg(test)]
use crate::model::Category::*;

#[cfg(test)]
fn tiles(exp: &str) -> Vec<Tile> {
    tiles_from_string(exp).unwrap()
}

#[test]
fn test_extract_runs() {
    let (runs, leftover) = extract_runs(&[1, 2, 3]);
    assert_eq!(runs, vec![[1, 2, 3]]);
    assert!(leftover.is_empty());

    let (runs, leftover) = extract_runs(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(runs, vec![[1, 2, 3], [4, 5, 6]]);
    assert!(leftover.is_empty());

    let (runs, leftover) = extract_runs(&[1, 1, 1, 5, 5, 5]);
    assert!(runs.is_empty());
    assert_eq!(leftover, vec![1, 1, 1, 5, 5, 5]);

    let (runs, leftover) = extract_runs(&[0, 1]);
    assert!(runs.is_empty());
    assert_eq!(leftover, vec![0, 1]);

    let (runs, leftover) = extract_runs(&[]);
    assert!(runs.is_empty());
    assert!(leftover.is_empty());
}

#[test]
fn test_extract_runs_greedy() {
    // 起点を順に消費するので重複があっても2つ取れる
    let (runs, leftover) = extract_runs(&[1, 1, 2, 2, 3, 3]);
    assert_eq!(runs, vec![[1, 2, 3], [1, 2, 3]]);
    assert!(leftover.is_empty());

    let (runs, leftover) = extract_runs(&[1, 1, 2, 3, 3, 4]);
    assert_eq!(runs, vec![[1, 2, 3]]);
    assert_eq!(leftover, vec![1, 3, 4]);

    let (runs, leftover) = extract_runs(&[2, 3, 3, 4, 4, 5]);
    assert_eq!(runs, vec![[2, 3, 4], [3, 4, 5]]);
    assert!(leftover.is_empty());

    // 最初の1が順子を取るので刻子111の分解は考慮されない
    let (runs, leftover) = extract_runs(&[1, 1, 1, 2, 3, 4]);
    assert_eq!(runs, vec![[1, 2, 3]]);
    assert_eq!(leftover, vec![1, 1, 4]);

    let (runs, leftover) = extract_runs(&[1, 2, 2, 3, 4]);
    assert_eq!(runs, vec![[1, 2, 3]]);
    assert_eq!(leftover, vec![2, 4]);
}

#[test]
fn test_count_sets() {
    // 同じ牌4枚は刻子1つ
    let (n, runs) = count_sets(&tiles("m5555p1s9"));
    assert_eq!(n, 1);
    assert!(runs.is_empty());

    // 字牌は順子にならない
    let (n, runs) = count_sets(&tiles("w123d123"));
    assert_eq!(n, 0);
    assert!(runs.is_empty());

    let (n, runs) = count_sets(&tiles("m123p456s789w111d22"));
    assert_eq!(n, 4);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[1], [Tile(Dots, 3), Tile(Dots, 4), Tile(Dots, 5)]);

    // 順子を先に抜くので111+234の2面子にはならない
    let (n, runs) = count_sets(&tiles("m111234"));
    assert_eq!(n, 1);
    assert_eq!(runs, vec![[Tile(Characters, 0), Tile(Characters, 1), Tile(Characters, 2)]]);
}

#[test]
fn test_count_triplets() {
    let (n, triplets) = count_triplets(&tiles("m1112222p3d333"));
    assert_eq!(n, 3);
    assert_eq!(triplets, tiles("m12d3"));
}

#[test]
fn test_check_consecutive() {
    assert!(check_consecutive(&[3, 1, 2]));
    assert!(check_consecutive(&[7]));
    assert!(!check_consecutive(&[1, 2, 4]));
    assert!(!check_consecutive(&[1, 1, 2]));
    assert!(!check_consecutive(&[]));
}
