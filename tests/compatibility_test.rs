use linesort::algo::{Direction, sort_in_place, sort_indices};
use linesort::core::{CodeUnit, IgnoreSet, LineAccessor, utf16};
use std::collections::VecDeque;

// Simulate an external flat store (like a column of an Arrow string array)
struct MockColumn {
    data: Vec<CodeUnit>,
    offsets: Vec<usize>,
}

impl MockColumn {
    fn new(lines: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for line in lines {
            data.extend(line.encode_utf16());
            offsets.push(data.len());
        }
        Self { data, offsets }
    }
}

// This proves the trait is implementable by "outside crates".
impl LineAccessor for MockColumn {
    fn line(&self, index: usize) -> &[CodeUnit] {
        &self.data[self.offsets[index]..self.offsets[index + 1]]
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mock = MockColumn::new(&["foo", "(bar)", "baz!"]);
    let indices = sort_indices(&mock, Direction::Forward, &IgnoreSet::DEFAULT);

    // sorted: bar (1), baz (2), foo (0)
    assert_eq!(indices, vec![1, 2, 0]);

    // by suffix: (bar) r, baz! z, foo o -> foo, bar, baz
    let indices = sort_indices(&mock, Direction::Backward, &IgnoreSet::DEFAULT);
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_vec_deque() {
    let input: VecDeque<Vec<CodeUnit>> =
        VecDeque::from(vec![utf16("banana"), utf16("apple"), utf16("cherry")]);

    let indices = sort_indices(&input, Direction::Forward, &IgnoreSet::DEFAULT);
    assert_eq!(indices, vec![1, 0, 2]);
    assert!(!input.is_empty());
}

#[test]
fn test_empty() {
    let input: Vec<Vec<CodeUnit>> = vec![];
    assert!(sort_indices(&input, Direction::Forward, &IgnoreSet::DEFAULT).is_empty());
}

#[test]
fn test_sort_in_place_keeps_equal_lines_in_order() {
    let mut data = vec![utf16("b"), utf16("a."), utf16("-a"), utf16("a")];
    sort_in_place(&mut data, Direction::Forward, &IgnoreSet::DEFAULT);
    assert_eq!(data, vec![utf16("a."), utf16("-a"), utf16("a"), utf16("b")]);
}
