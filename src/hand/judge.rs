use super::win::evaluate_hand;
use crate::model::*;

// [局の終了判定]
// 全プレイヤーの和了判定を行い, 最大面子数を座席順に集計する.
// 和了者が複数いる場合は最後に見つかったプレイヤー.
// 和了者がおらず牌山が空の場合は流局 (winner: None, finished: true).
pub fn judge_round(players: &[Player], wall_count: usize) -> RoundOutcome {
    let mut progress = vec![];
    let mut winner = None;
    for pl in players {
        let (is_win, n_set) = evaluate_hand(pl);
        progress.push(n_set);
        if is_win {
            winner = Some(pl.seat);
        }
    }

    RoundOutcome {
        finished: winner.is_some() || wall_count == 0,
        winner,
        progress,
    }
}

#[cfg(test)]
fn player(seat: Seat, hand: &str) -> Player {
    let hand = crate::util::common::tiles_from_string(hand).unwrap();
    Player::new(seat, hand, vec![])
}

#[test]
fn test_judge_round() {
    let players = vec![
        player(0, "m123p456s789w123d11"),
        player(1, "m123p456s789w111d22"),
        player(2, "m123p456s789w11d2"),
        player(3, "m147p258s369w1234d1"),
    ];
    let res = judge_round(&players, 10);
    assert!(res.finished);
    assert_eq!(res.winner, Some(1));
    assert_eq!(res.progress, vec![3, 4, 0, 0]);
}

#[test]
fn test_judge_round_draw() {
    let players = vec![
        player(0, "m123p456s789w123d11"),
        player(1, "m123p456s789w12d2"),
    ];
    let res = judge_round(&players, 0);
    assert!(res.finished);
    assert_eq!(res.winner, None);
    assert_eq!(res.progress, vec![3, 0]);

    let res = judge_round(&players, 1);
    assert!(!res.finished);
    assert_eq!(res.winner, None);
}

#[test]
fn test_judge_round_last_winner() {
    let players = vec![
        player(0, "m123p456s789w111d22"),
        player(1, "m234p456s789w111d22"),
    ];
    let res = judge_round(&players, 5);
    assert_eq!(res.winner, Some(1));
    assert_eq!(res.progress, vec![4, 4]);
}
