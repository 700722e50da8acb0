use rand::prelude::*;

use super::wall::create_wall;
use crate::hand::{check_chow, check_pong_gong, judge_round};
use crate::model::*;
use crate::util::misc::vec_to_string;
use crate::{debug, info};

// 4人の局を乱数で進行させる
// ツモ -> 和了判定 -> ランダムに打牌 -> ポン・カン判定 -> チー判定 -> ...
// 鳴きは常に実行し, 鳴いたプレイヤーが次に打牌する (カンの場合は補充のツモあり).
#[derive(Debug)]
pub struct GameDriver {
    seed: u64,
    rng: StdRng,
    wall: Vec<Tile>,
    players: Vec<Player>,
    discards: Vec<Discard>, // 鳴かれなかった捨て牌
    turn: Seat,
    events: Vec<Event>,
}

impl GameDriver {
    pub fn new(seed: u64) -> Self {
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
        let mut wall = create_wall(&mut rng);

        let mut players = vec![];
        for s in 0..SEAT {
            let hand = wall.split_off(wall.len() - HAND);
            players.push(Player::new(s, hand, vec![]));
        }

        let hands = players.iter().map(|pl| pl.hand.clone()).collect();
        let events = vec![Event::new(seed, hands, wall.len())];

        Self {
            seed,
            rng,
            wall,
            players,
            discards: vec![],
            turn: 0,
            events,
        }
    }

    pub fn run(&mut self) -> RoundOutcome {
        let mut need_draw = true;
        loop {
            if need_draw {
                let t = match self.wall.pop() {
                    Some(t) => t,
                    None => {
                        // カンの補充牌がない
                        let outcome = judge_round(&self.players, 0);
                        return self.finish(outcome);
                    }
                };
                self.players[self.turn].hand.push(t);
                self.events.push(Event::deal(self.turn, t));
                debug!("deal: seat{} {}", self.turn, t);
            }

            let outcome = judge_round(&self.players, self.wall.len());
            if outcome.finished {
                return self.finish(outcome);
            }

            let discard = self.discard_random();
            if let Some(claim) = self.check_claim(&discard) {
                self.apply_claim(&claim, discard.seat);
                need_draw = claim.claim_type == MeldType::Gong;
            } else {
                self.discards.push(discard);
                self.turn = (self.turn + 1) % SEAT;
                need_draw = true;
            }
        }
    }

    fn discard_random(&mut self) -> Discard {
        let hand = &mut self.players[self.turn].hand;
        let i = self.rng.gen_range(0..hand.len());
        let tile = hand.remove(i);
        self.events.push(Event::discard(self.turn, tile));
        debug!("discard: seat{} {}", self.turn, tile);
        Discard {
            seat: self.turn,
            tile,
        }
    }

    // ポン・カンをチーより優先
    fn check_claim(&self, discard: &Discard) -> Option<Claim> {
        check_pong_gong(discard, &self.players).or_else(|| check_chow(discard, &self.players))
    }

    fn apply_claim(&mut self, claim: &Claim, from: Seat) {
        let pl = &mut self.players[claim.seat];
        // 最後の1枚は捨て牌
        let consumed = &claim.tiles[..claim.tiles.len() - 1];
        for &t in consumed {
            let ok = pl.remove_tile(t);
            assert!(ok, "claimed tile not in hand: {}", t);
        }
        pl.melds.push(Meld::new(claim.claim_type, claim.tiles.clone(), Some(from)));

        self.events.push(Event::meld(claim, from));
        debug!("meld: {} from seat{}", claim, from);
        self.turn = claim.seat;
    }

    fn finish(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        if let Some(s) = outcome.winner {
            let mut hand = self.players[s].hand.clone();
            hand.sort();
            info!(
                "seed {}: seat{} win {} {}",
                self.seed,
                s,
                vec_to_string(&hand),
                vec_to_string(&self.players[s].melds)
            );
            self.events.push(Event::win(s, hand, outcome.progress.clone()));
        } else {
            info!("seed {}: draw {:?}", self.seed, outcome.progress);
            self.events.push(Event::draw(outcome.progress.clone()));
        }
        outcome
    }

    #[inline]
    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    pub fn get_events(&self) -> &[Event] {
        &self.events
    }

    #[inline]
    pub fn get_wall_count(&self) -> usize {
        self.wall.len()
    }
}

#[test]
fn test_driver_deterministic() {
    let mut g1 = GameDriver::new(12345);
    let mut g2 = GameDriver::new(12345);
    let o1 = g1.run();
    let o2 = g2.run();
    assert_eq!(o1, o2);
    assert_eq!(g1.get_events(), g2.get_events());
}

#[test]
fn test_driver_finishes() {
    for seed in 1..20 {
        let mut g = GameDriver::new(seed);
        assert_eq!(g.get_wall_count(), WALL - HAND * SEAT);

        let outcome = g.run();
        assert!(outcome.finished);
        assert_eq!(outcome.progress.len(), SEAT);
        if outcome.winner.is_none() {
            assert_eq!(g.get_wall_count(), 0);
        }

        // 牌の総数は変わらない
        let n_player: usize = g.get_players().iter().map(|pl| pl.tile_count()).sum();
        assert_eq!(n_player + g.discards.len() + g.get_wall_count(), WALL);

        match g.get_events().last() {
            Some(Event::Win(e)) => assert_eq!(Some(e.seat), outcome.winner),
            Some(Event::Draw(_)) => assert_eq!(outcome.winner, None),
            e => panic!("unexpected last event: {:?}", e),
        }
    }
}
