//! Tests for the minimize module

use super::*;
use test_log::test;

fn table(values: &str) -> TruthTable {
    let n = values.len().trailing_zeros() as usize;
    let cells = values.chars().enumerate().map(|(i, c)| (i, c.to_string()));
    TruthTable::from_cells(n, cells).unwrap()
}

fn run(values: &str) -> Minimization {
    Minimization::new(&table(values), &MinimizerConfig::default()).unwrap()
}

// ========== Two-variable scenarios (index = 2A + B) ==========

#[test]
fn test_all_zero() {
    let m = run("0000");
    assert_eq!(m.sop(), "0");
    assert!(m.sop_cover().is_empty());
    // Constant false: the zero-set cover is the universe, whose clause is empty
    assert_eq!(m.pos().unwrap(), "0");
}

#[test]
fn test_all_one() {
    let m = run("1111");
    assert_eq!(m.sop(), "1");
    assert_eq!(m.pos().unwrap(), "1");
    assert!(m.pos_cover().unwrap().is_empty());
}

#[test]
fn test_single_minterm() {
    let m = run("0001");
    assert_eq!(m.sop(), "A & B");
    assert_eq!(m.sop_code(), "A && B");
}

#[test]
fn test_dont_care_is_absorbed() {
    // index 1 (A=0, B=1) is don't-care, index 3 (A=1, B=1) is on
    let m = run("0x01");
    assert_eq!(m.sop(), "B");
    assert_eq!(m.sop_cover().len(), 1);
    assert_eq!(m.pos().unwrap(), "(B)");
}

#[test]
fn test_xnor_needs_two_products() {
    let m = run("1001");
    assert_eq!(m.sop_cover().len(), 2);
    assert_eq!(m.sop(), "~A & ~B + A & B");
    assert_eq!(m.sop_code(), "(!A && !B) || (A && B)");
}

#[test]
fn test_only_dont_cares() {
    let m = run("xxxx");
    assert_eq!(m.sop(), "0");
    assert_eq!(m.pos().unwrap(), "1");
    assert_eq!(m.primes().len(), 1);
}

// ========== Larger functions ==========

#[test]
fn test_textbook_function() {
    // f = sum m(4,8,10,11,12,15) + d(9,14)
    let mut t = TruthTable::new(4).unwrap();
    for m in [4, 8, 10, 11, 12, 15] {
        t.set(m, Value::True).unwrap();
    }
    for d in [9, 14] {
        t.set(d, Value::DontCare).unwrap();
    }
    let m = Minimization::new(&t, &MinimizerConfig::default()).unwrap();
    assert_eq!(m.sop_cover().len(), 3);
    assert!(m.mismatches().is_empty());
    let text: Vec<String> = m.sop_cover().iter().map(|i| i.to_string()).collect();
    assert!(text.contains(&"-100".to_string()));
    assert!(text.contains(&"1-1-".to_string()));
}

#[test]
fn test_majority_of_three() {
    let m = run("00010111");
    assert_eq!(m.sop_cover().len(), 3);
    assert!(m.sop_cover().iter().all(|i| i.literal_count() == 2));
    assert!(m.mismatches().is_empty());
}

#[test]
fn test_one_variable() {
    assert_eq!(run("01").sop(), "A");
    assert_eq!(run("10").sop(), "~A");
    assert_eq!(run("10").pos().unwrap(), "(~A)");
}

#[test]
fn test_pos_disabled() {
    let config = MinimizerConfig {
        pos: false,
        ..Default::default()
    };
    let m = Minimization::new(&table("0110"), &config).unwrap();
    assert!(m.pos().is_none());
    assert!(m.pos_cover().is_none());
    assert!(m.evaluate_pos(0).is_none());
}

#[test]
fn test_custom_labels_flow_into_rendering() {
    let t = table("0110").with_labels(&["sel", "en"]).unwrap();
    let m = t.minimize().unwrap();
    assert_eq!(m.sop(), "~sel & en + sel & ~en");
}

#[test]
fn test_expected_follows_minimized_dont_cares() {
    let m = run("0x01");
    assert!(!m.expected(0));
    assert!(m.expected(1)); // the don't-care was absorbed into B
    assert!(!m.expected(2));
    assert!(m.expected(3));
}

// ========== Properties over every 3-variable table ==========

fn all_tables(n: usize) -> impl Iterator<Item = TruthTable> {
    let rows = 1usize << n;
    let count = 3usize.pow(rows as u32);
    (0..count).map(move |mut code| {
        let values: Vec<Value> = (0..rows)
            .map(|_| {
                let v = match code % 3 {
                    0 => Value::False,
                    1 => Value::True,
                    _ => Value::DontCare,
                };
                code /= 3;
                v
            })
            .collect();
        TruthTable::from_values(n, &values).unwrap()
    })
}

#[test]
fn test_sop_and_pos_are_sound_for_every_three_variable_table() {
    for t in all_tables(3) {
        let m = t.minimize().unwrap();
        for (index, value) in t.iter() {
            if let Some(bit) = value.as_bool() {
                assert_eq!(m.evaluate(index), bit, "SOP wrong at {} for {:?}", index, t.values());
                assert_eq!(
                    m.evaluate_pos(index),
                    Some(bit),
                    "POS wrong at {} for {:?}",
                    index,
                    t.values()
                );
            }
        }
    }
}

#[test]
fn test_cover_is_complete_and_essentials_included() {
    for t in all_tables(3) {
        let minterms = t.minterms();
        let present: Vec<u32> = minterms.iter().chain(t.dont_cares().iter()).copied().collect();
        let primes = prime_implicants(&present, 3);
        let chart = CoverChart::new(primes.as_slice(), &minterms);

        for config in [MinimizerConfig::default(), MinimizerConfig::exact()] {
            let cover = chart.solve(&config).unwrap();
            let mut covered: Vec<u32> = cover
                .iter()
                .flat_map(|&p| primes.as_slice()[p].expand())
                .filter(|i| minterms.contains(i))
                .collect();
            covered.sort_unstable();
            covered.dedup();
            assert_eq!(covered, minterms);

            for e in chart.essential_primes() {
                assert!(cover.contains(&e));
            }
        }
    }
}

#[test]
fn test_exact_is_never_larger() {
    for t in all_tables(3) {
        let greedy = t.minimize().unwrap();
        let exact = t.minimize_exact().unwrap();
        assert!(exact.sop_cover().len() <= greedy.sop_cover().len());
        assert!(exact.mismatches().is_empty());
    }
}

#[test]
fn test_deterministic() {
    let t = table("1011001011110001");
    let a = t.minimize().unwrap();
    let b = t.minimize().unwrap();
    assert_eq!(a.sop(), b.sop());
    assert_eq!(a.pos(), b.pos());
    assert_eq!(a.sop_cover(), b.sop_cover());
}
