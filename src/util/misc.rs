use std::fmt;

use crate::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn unixtime_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}

pub fn vec_count<T: PartialEq>(v: &[T], e: &T) -> usize {
    v.iter().filter(|&n| n == e).count()
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

// 要素の初出順に重複を除いたリストを返却
pub fn vec_distinct<T: PartialEq + Copy>(v: &[T]) -> Vec<T> {
    let mut res = vec![];
    for &e in v {
        if !res.contains(&e) {
            res.push(e);
        }
    }
    res
}

#[test]
fn test_vec_utils() {
    let v = vec![3, 1, 3, 2, 1];
    assert_eq!(vec_count(&v, &3), 2);
    assert_eq!(vec_distinct(&v), vec![3, 1, 2]);
    assert_eq!(vec_to_string(&v), "[3, 1, 3, 2, 1]");
}
