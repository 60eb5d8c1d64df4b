use linesort::core::CodeUnit;
use linesort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

// Mostly ignorable units, so lines run out of significant content at odd points.
const UNITS: &[CodeUnit] = &[0x002E, 0x0020, 0x0021, 0x0028, 0x0029, 0x0061, 0x0062];

fn significant(line: &[CodeUnit]) -> Vec<CodeUnit> {
    line.iter()
        .copied()
        .filter(|&u| !IgnoreSet::DEFAULT.is_ignorable(u))
        .collect()
}

#[test]
fn test_short_noisy_lines() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let count = rng.random_range(2000..5000);
        let lines: Vec<Vec<CodeUnit>> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..5); // Keep short to hit one-sided exhaustion
                (0..len)
                    .map(|_| UNITS[rng.random_range(0..UNITS.len())])
                    .collect()
            })
            .collect();

        for direction in [Direction::Forward, Direction::Backward] {
            let indices = linesort::algo::sort_indices(&lines, direction, &IgnoreSet::DEFAULT);

            let mut expected: Vec<Vec<CodeUnit>> = lines.iter().map(|l| significant(l)).collect();
            if direction == Direction::Backward {
                expected.iter_mut().for_each(|l| l.reverse());
            }
            expected.sort();

            let actual: Vec<Vec<CodeUnit>> = indices
                .iter()
                .map(|&i| {
                    let mut key = significant(&lines[i]);
                    if direction == Direction::Backward {
                        key.reverse();
                    }
                    key
                })
                .collect();

            if actual != expected {
                for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                    if a != b {
                        panic!("Mismatch at index {}: Got {:?}, Expected {:?}", i, a, b);
                    }
                }
            }
        }
    }
}

#[test]
fn test_exhaustion_is_one_sided() {
    let cases: &[(&str, &str, Ordering)] = &[
        ("", "", Ordering::Equal),
        ("", "...", Ordering::Equal),
        ("...", "a", Ordering::Less),
        ("a", "a...", Ordering::Equal),
        ("a..", "..ab", Ordering::Less),
        ("ab", "a", Ordering::Greater),
        (" a b ", "ab", Ordering::Equal),
    ];

    for &(a, b, expected) in cases {
        let (a16, b16): (Vec<CodeUnit>, Vec<CodeUnit>) =
            (a.encode_utf16().collect(), b.encode_utf16().collect());
        for direction in [Direction::Forward, Direction::Backward] {
            let ordering = directional_cmp(&a16, &b16, direction, &IgnoreSet::DEFAULT);
            assert_eq!(ordering, expected, "{a:?} vs {b:?} ({direction:?})");
            let flipped = directional_cmp(&b16, &a16, direction, &IgnoreSet::DEFAULT);
            assert_eq!(flipped, expected.reverse(), "{b:?} vs {a:?} ({direction:?})");
        }
    }
}
