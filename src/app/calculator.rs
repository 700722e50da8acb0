use std::fs::File;
use std::io::{self, BufRead};

use crate::error;
use crate::hand::{count_sets, evaluate_hand};
use crate::model::*;
use crate::util::common::*;
use crate::util::misc::*;

// 手牌の和了判定モード
// 入力: "手牌[,鳴き...][/和了,面子数]" 例: "m11s345,p111,p234,d222/true,4"
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            return;
        }

        if let Err(e) = self.run_from_file(&file_path) {
            error!("{}", e);
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines {
            let exp = exp?;
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail);
        calculator.parse(exp)?;
        calculator.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

#[derive(Debug)]
struct Calculator {
    detail: bool,
    player: Player,
    // verify
    expected: Option<(bool, usize)>,
}

impl Calculator {
    fn new(detail: bool) -> Self {
        Self {
            detail,
            player: Player::default(),
            expected: None,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        if exps.len() > 2 {
            Err(format!("too many '/': {}", input))?;
        }
        self.parse_hand_meld(exps[0])?;
        if let Some(exp) = exps.get(1) {
            self.parse_verify(exp)?;
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn run(&self) -> Verify {
        let (is_win, n_set) = evaluate_hand(&self.player);
        if self.detail {
            let (n, runs) = count_sets(&self.player.hand);
            println!("sets in hand: {}, runs: {:?}", n, runs);
        }
        println!("win: {}, progress: {}", is_win, n_set);

        let verify = match self.expected {
            Some(e) if e == (is_win, n_set) => Verify::Ok,
            Some(_) => Verify::Error,
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        verify
    }

    fn parse_hand_meld(&mut self, input: &str) -> Res {
        let mut exps = input.split(',');
        let hand = exps.next().unwrap_or("");
        self.player.hand = tiles_from_string(hand)?;
        for exp in exps {
            self.player.melds.push(meld_from_string(exp)?);
        }
        Ok(())
    }

    fn parse_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 2 {
            Err(format!("invalid verify info: {}", input))?;
        }
        let is_win = exps[0].parse::<bool>()?;
        let n_set = exps[1].parse::<usize>()?;
        self.expected = Some((is_win, n_set));
        Ok(())
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d]
    $ cargo run C -f FILE [-d]
Options
    -d: print debug info
    -f: read expresisons from file instead of a commandline expression
Expression
    HAND[,MELD...][/WIN,PROGRESS]
    e.g. m11s345,p111,p234,d222/true,4
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map(|l| l.unwrap()) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false);
            calculator.parse(&e).unwrap();
            assert_eq!(Verify::Ok, calculator.run(), "{}", exp);
        }
    }
}

#[test]
fn test_calculator_parse_error() {
    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m11x").is_err());

    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m11,m124").is_err());

    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m11/true").is_err());

    let mut calculator = Calculator::new(false);
    calculator.parse("m11s345,p111,p234,d222").unwrap();
    assert_eq!(calculator.run(), Verify::Skip);
}
