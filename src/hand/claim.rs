use crate::model::*;

// [鳴き判定]
// 直前の捨て牌に対して鳴けるプレイヤーを判定する.

// ポン・カン
// プレイヤーのリスト順に走査し, 最初に条件を満たしたプレイヤーを返す (座席の近さは考慮しない).
// 捨て牌と同じ牌を3枚持っていればカン, 2枚ならポン.
pub fn check_pong_gong(discard: &Discard, players: &[Player]) -> Option<Claim> {
    let t = discard.tile;
    for pl in players {
        if pl.seat == discard.seat {
            continue;
        }

        let claim_type = match pl.count_tile(t) {
            3 => MeldType::Gong,
            2 => MeldType::Pong,
            _ => continue,
        };
        return Some(Claim {
            claim_type,
            seat: pl.seat,
            tiles: vec![t; claim_type.size()],
        });
    }
    None
}

// チー
// 鳴けるのは打牌者の次の座席(seat+1)のプレイヤーのみ. 最後の座席から先頭には戻らない.
// 捨て牌が順子の最大の牌になる形のみ判定する (捨て牌が1の場合は1,2,3の形).
pub fn check_chow(discard: &Discard, players: &[Player]) -> Option<Claim> {
    let t = discard.tile;
    if t.is_honor() {
        return None;
    }

    let next = discard.seat.checked_add(1)?;
    let pl = players.iter().find(|pl| pl.seat == next)?;

    let mut tr: TileRow = [0; RANK];
    for h in &pl.hand {
        if h.0 == t.0 {
            tr[h.1] += 1;
        }
    }

    let needs = match t.1 {
        0 => [1, 2],
        r if r < RANK => [r.checked_sub(2)?, r - 1],
        r => panic!("rank out of range: {:?} {}", t.0, r),
    };
    if needs.iter().any(|&r| tr[r] == 0) {
        return None;
    }

    // 手牌の並び順で最初に見つかった牌を使う
    let mut tiles = vec![];
    for &r in &needs {
        let h = pl.hand.iter().find(|h| h.0 == t.0 && h.1 == r)?;
        tiles.push(*h);
    }
    tiles.push(t);

    Some(Claim {
        claim_type: MeldType::Chow,
        seat: pl.seat,
        tiles,
    })
}

#[cfg(test)]
fn player(seat: Seat, exp: &str) -> Player {
    let hand = crate::util::common::tiles_from_string(exp).unwrap();
    Player::new(seat, hand, vec![])
}

#[cfg(test)]
fn discard(seat: Seat, exp: &str) -> Discard {
    Discard {
        seat,
        tile: Tile::from_symbol(exp).unwrap(),
    }
}

#[test]
fn test_pong_gong() {
    let players = vec![
        player(0, "m123p456s789w1122"),
        player(1, "m55p111s222d11123"),
        player(2, "m555p111s222d1123"),
        player(3, "m55p111s222d11123"),
    ];

    // リスト順で先にあるseat1(2枚)がseat2(3枚)より優先
    let c = check_pong_gong(&discard(0, "m5"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Pong);
    assert_eq!(c.seat, 1);
    assert_eq!(c.tiles, vec![Tile::from_symbol("m5").unwrap(); 3]);

    // 打牌者自身は対象外
    let c = check_pong_gong(&discard(1, "m5"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Gong);
    assert_eq!(c.seat, 2);
    assert_eq!(c.tiles.len(), 4);

    let c = check_pong_gong(&discard(0, "d1"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Gong);
    assert_eq!(c.seat, 1);

    assert_eq!(check_pong_gong(&discard(0, "s9"), &players), None);

    let c = check_pong_gong(&discard(3, "w1"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Pong);
    assert_eq!(c.seat, 0);
}

#[test]
fn test_gong_before_pong() {
    let players = vec![
        player(0, "w1"),
        player(1, "d333m1"),
        player(2, "d33m1"),
    ];
    let c = check_pong_gong(&discard(0, "d3"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Gong);
    assert_eq!(c.seat, 1);
}

#[test]
fn test_chow() {
    let players = vec![
        player(0, "m1"),
        player(1, "m2378p23s11"),
        player(2, "m45"),
    ];

    // 捨て牌が最大の牌
    let c = check_chow(&discard(0, "m4"), &players).unwrap();
    assert_eq!(c.claim_type, MeldType::Chow);
    assert_eq!(c.seat, 1);
    assert_eq!(c.tiles, crate::util::common::tiles_from_string("m234").unwrap());

    // 捨て牌が最小になる形(678)は判定しない
    assert_eq!(check_chow(&discard(0, "m6"), &players), None);

    // 最大の牌 (9)
    let c = check_chow(&discard(0, "m9"), &players).unwrap();
    assert_eq!(c.tiles, crate::util::common::tiles_from_string("m789").unwrap());

    // 次の座席以外は鳴けない
    assert_eq!(check_chow(&discard(1, "m4"), &players), None);
    assert_eq!(check_chow(&discard(2, "m4"), &players), None);
    assert_eq!(check_chow(&discard(1, "m6"), &players).map(|c| c.seat), Some(2));

    // 種別が違う
    assert_eq!(check_chow(&discard(0, "s4"), &players), None);
}

#[test]
fn test_chow_lowest_rank() {
    let players = vec![player(0, "p9"), player(1, "p32w1")];
    let c = check_chow(&discard(0, "p1"), &players).unwrap();
    assert_eq!(c.tiles, crate::util::common::tiles_from_string("p231").unwrap());

    // 2の下に2枚はない
    let players = vec![player(0, "p9"), player(1, "p13w1")];
    assert_eq!(check_chow(&discard(0, "p2"), &players), None);
}

#[test]
fn test_chow_honor() {
    let players = vec![player(0, "m1"), player(1, "w1234d123")];
    assert_eq!(check_chow(&discard(0, "w3"), &players), None);
    assert_eq!(check_chow(&discard(0, "d3"), &players), None);
}

#[test]
fn test_chow_no_wrap() {
    let players = vec![player(0, "m12"), player(1, "p1"), player(2, "p1"), player(3, "s1")];
    assert_eq!(check_chow(&discard(3, "m3"), &players), None);

    // 外部入力の座席番号が上限でも先頭に回り込まない
    assert_eq!(check_chow(&discard(usize::MAX, "m3"), &players), None);
}
