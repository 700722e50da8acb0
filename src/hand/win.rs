use super::set::count_sets;
use crate::model::*;
use crate::util::misc::vec_distinct;

// [和了判定]
// 戻り値: (和了かどうか, 鳴きを含めた最大面子数)
//
// 鳴きが4つ以上あれば無条件で和了.
// 手牌の枚数が (4 - 鳴きの数) * 3 + 2 でない場合は判定せず (false, 0).
// 2枚以上ある牌を手牌の初出順に雀頭として外し, 残りの面子数を数える.
// 面子数が4に達した時点で和了とし, それ以降の雀頭候補は調べない.
pub fn evaluate_hand(player: &Player) -> (bool, usize) {
    let n_meld = player.melds.len();
    if n_meld >= SET_TO_WIN {
        return (true, n_meld);
    }

    let hand = &player.hand;
    if hand.len() != (SET_TO_WIN - n_meld) * 3 + 2 {
        return (false, 0);
    }

    let mut max = 0;
    for t in vec_distinct(hand) {
        if player.count_tile(t) < 2 {
            continue;
        }

        let mut rest = hand.clone();
        for _ in 0..2 {
            if let Some(i) = rest.iter().position(|&h| h == t) {
                rest.remove(i);
            }
        }

        let (n_set, _) = count_sets(&rest);
        max = max.max(n_meld + n_set);
        if n_meld + n_set >= SET_TO_WIN {
            return (true, max);
        }
    }

    (false, max)
}

#[cfg(test)]
use crate::util::common::{meld_from_string, tiles_from_string};

#[cfg(test)]
fn player(hand: &str, melds: &[&str]) -> Player {
    let hand = tiles_from_string(hand).unwrap();
    let melds = melds.iter().map(|m| meld_from_string(m).unwrap()).collect();
    Player::new(0, hand, melds)
}

#[test]
fn test_win_with_melds() {
    // 鳴き3つ + 雀頭 + 順子
    let pl = player("m11s345", &["p111", "p234", "d222"]);
    assert_eq!(evaluate_hand(&pl), (true, 4));

    let pl = player("w11p999", &["m123", "m456", "m789"]);
    assert_eq!(evaluate_hand(&pl), (true, 4));

    // 鳴き4つは手牌に関係なく和了
    let pl = player("d1", &["m123", "m456", "m789", "w4444"]);
    assert_eq!(evaluate_hand(&pl), (true, 4));
}

#[test]
fn test_win_closed() {
    let pl = player("m123p456s789w111d22", &[]);
    assert_eq!(evaluate_hand(&pl), (true, 4));

    let pl = player("m11122233344455", &[]);
    assert!(evaluate_hand(&pl).0);

    // 順子を優先して抜くため111+234の形は和了とみなされない
    let pl = player("m111234p456s789d11", &[]);
    assert_eq!(evaluate_hand(&pl), (false, 3));
}

#[test]
fn test_not_win() {
    let pl = player("m123p456s789w123d11", &[]);
    assert_eq!(evaluate_hand(&pl), (false, 3));

    // 雀頭候補なし
    let pl = player("m147p258s369w1234d1", &[]);
    assert_eq!(evaluate_hand(&pl), (false, 0));

    let pl = player("m11p258", &["s123", "s456", "s789"]);
    assert_eq!(evaluate_hand(&pl), (false, 3));
}

#[test]
fn test_wrong_size() {
    // 13枚 (ツモ前)
    let pl = player("m123p456s789w111d2", &[]);
    assert_eq!(evaluate_hand(&pl), (false, 0));

    let pl = player("m11s345w1", &["p111", "p234", "d222"]);
    assert_eq!(evaluate_hand(&pl), (false, 0));

    let pl = player("", &[]);
    assert_eq!(evaluate_hand(&pl), (false, 0));
}

#[test]
fn test_idempotent() {
    let pl = player("m123p456s789w123d11", &[]);
    let before = pl.clone();
    assert_eq!(evaluate_hand(&pl), evaluate_hand(&pl));
    assert_eq!(pl, before);
}
