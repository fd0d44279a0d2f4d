//! Behavior of the support table as generated code sees it
//!
//! Everything here goes through `skol_runtime::prelude::*`, the same import
//! the preamble places at the top of every generated file.

use skol_runtime::prelude::*;

const SAMPLES: &[&str] = &["hello", "a", "héllo", "日本語", "🦀 crab", "ab\tcd"];

#[test]
fn test_scenarios() {
    assert_eq!(char_at("hello", 1), Ok(101));
    assert_eq!(char_at("hello", -1), Ok(111));
    assert_eq!(substr("hello", 1, 4).unwrap(), "ell");
    assert_eq!(substr("hello", -3, 100).unwrap(), "llo");
    assert_eq!(div_i(7, 2), Ok(3));
    assert_eq!(div_f(7.0, 2.0), 3.5);
    assert_eq!(char_append("ab", 99).unwrap(), "abc");
}

#[test]
fn test_floored_integer_division() {
    assert_eq!(div_i(-7, 2), Ok(-4));
    assert_eq!(mod_i(-7, 2), Ok(1));
    assert_eq!(mod_i(7, -2), Ok(-1));
    assert_eq!(mod_f(-7.0, 2.0), 1.0);
    for a in -12..=12 {
        for b in [-5, -3, -1, 1, 2, 7] {
            let q = div_i(a, b).unwrap();
            let r = mod_i(a, b).unwrap();
            assert_eq!(add_i(mul_i(q, b), r), a, "{} / {}", a, b);
        }
    }
}

#[test]
fn test_division_by_zero() {
    assert!(matches!(div_i(1, 0), Err(PreludeError::DivisionByZero { .. })));
    assert!(matches!(mod_i(1, 0), Err(PreludeError::DivisionByZero { .. })));
    assert!(matches!(
        div_c(Complex::new(1.0, 0.0), Complex::ZERO),
        Err(PreludeError::DivisionByZero { .. })
    ));
}

#[test]
fn test_char_at_is_periodic_in_byte_length() {
    for s in SAMPLES {
        let n = byte_len(s);
        for i in -20..20 {
            let base = char_at(s, i).unwrap();
            for k in -3..=3 {
                assert_eq!(char_at(s, i + k * n).unwrap(), base, "{:?} at {}", s, i);
            }
        }
    }
}

#[test]
fn test_char_at_endpoints() {
    for s in SAMPLES {
        let first = s.as_bytes()[0];
        assert_eq!(char_at(s, 0).unwrap(), first);
        assert_eq!(char_at(s, byte_len(s)).unwrap(), first);
    }
}

#[test]
fn test_substr_full_range_is_identity() {
    for s in SAMPLES.iter().chain(&[""]) {
        assert_eq!(substr(s, 0, str_len(s)).unwrap(), *s);
    }
}

#[test]
fn test_substr_empty_when_start_not_before_end() {
    for s in SAMPLES {
        let n = str_len(s);
        for a in 0..=n {
            for b in 0..=a {
                assert_eq!(substr(s, a, b).unwrap(), "", "{:?} [{}, {})", s, a, b);
            }
        }
    }
}

#[test]
fn test_char_append_ascii() {
    for s in SAMPLES {
        for c in 0u8..128 {
            let out = char_append(s, c).unwrap();
            assert_eq!(str_len(&out), str_len(s) + 1);
            assert_eq!(out.chars().last(), Some(c as char));
        }
    }
}

#[test]
fn test_char_append_rejects_high_bytes() {
    assert_eq!(
        char_append("ab", 200),
        Err(PreludeError::InvalidUtf8Byte { byte: 200 })
    );
}

#[test]
fn test_empty_text_is_an_error() {
    assert!(matches!(char_at("", 3), Err(PreludeError::EmptyText { .. })));
    assert!(matches!(substr("", 1, 0), Err(PreludeError::EmptyText { .. })));
    assert_eq!(substr("", 0, 0).unwrap(), "");
}

#[test]
fn test_ctoi_inverts_to_str() {
    for n in [0, 1, -1, 42, -17, 1 << 40, i64::MIN, i64::MAX] {
        assert_eq!(ctoi(&to_str(n)), Ok(n));
    }
}

#[test]
fn test_kind_agnostic_entries() {
    assert!(eq(to_str(3.5), "3.5"));
    assert!(to_bool(concat("", "x")));
    assert!(or_(eq(1, 2), not_(0i64)));
    assert!(!and_(Value::Bool(true), Value::String(String::new())));
    assert_eq!(parse_bool(&to_str(true)), Ok(true));
}

#[test]
fn test_per_kind_families() {
    assert_eq!(add_i(i64::MAX, 1), i64::MIN);
    assert_eq!(add_f(0.5, 0.25), 0.75);
    assert_eq!(add_c(Complex::I, Complex::I), Complex::new(0.0, 2.0));
    assert_eq!(pow_i(3, 4), Ok(81));
    assert_eq!(pow_f(2.0, 3.0), 8.0);
    assert!(gt_i(2, 1) && lt_f(1.0, 2.0));
    assert!(matches!(
        gt_c(Complex::I, Complex::ZERO),
        Err(PreludeError::Unordered { .. })
    ));
    assert!(matches!(
        lt_c(Complex::I, Complex::ZERO),
        Err(PreludeError::Unordered { .. })
    ));
    assert!(matches!(
        mod_c(Complex::new(7.0, 0.0), Complex::new(2.0, 0.0)),
        Err(PreludeError::NoModulo { .. })
    ));
    assert_eq!(to_str(mod_f(-4.0, 2.0)), "0");
}
