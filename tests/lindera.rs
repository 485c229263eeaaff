use nemui_gacha::{exec, exec_with_rng, ErrorKind, LinderaTokenizer, RandomSource};

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

fn negate(input: &str) -> String {
    let tokenizer = LinderaTokenizer::new().unwrap();
    exec(input, Some(&tokenizer), true).unwrap()
}

#[test]
fn 食べる() {
    assert_eq!(negate("食べる"), "食べない");
}

#[test]
fn 走る() {
    assert_eq!(negate("走る"), "走らない");
}

#[test]
fn 食べた() {
    assert_eq!(negate("食べた"), "食べなかった");
}

#[test]
fn 眠いガチャ() {
    assert_eq!(negate("眠いガチャ"), "眠くない");
}

#[test]
fn 行きます() {
    assert_eq!(negate("行きます"), "行きません");
}

#[test]
fn 勉強() {
    assert_eq!(negate("勉強"), "勉強しない");
}

#[test]
fn ガチャ() {
    assert_eq!(negate("ガチャ"), "ガチャじゃない");
    assert_eq!(negate("ｶﾞﾁｬ"), "ｶﾞﾁｬじゃない");
    assert_eq!(negate("がちゃ"), "がちゃじゃない");
}

#[test]
fn sign_is_not_supported() {
    let tokenizer = LinderaTokenizer::new().unwrap();
    let error = exec("。", Some(&tokenizer), true).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ConversionFailed);
}

#[test]
fn low_draw_returns_input_without_keyword() {
    let tokenizer = LinderaTokenizer::new().unwrap();
    let result = exec_with_rng("走るガチャ", Some(&tokenizer), false, &mut Fixed(0.1)).unwrap();
    assert_eq!(result, "走る");
    let result = exec_with_rng("走るガチャ", Some(&tokenizer), false, &mut Fixed(0.5)).unwrap();
    assert_eq!(result, "走らない");
}
