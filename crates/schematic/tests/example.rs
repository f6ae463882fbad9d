use lib::input::IStr;
use num::BigUint;
use schematic::{Alphabet, Schematic};

const EXAMPLE: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn example() -> Schematic {
    Schematic::parse(IStr::new(EXAMPLE), Alphabet::default()).unwrap()
}

#[test]
fn test_example() {
    let s = example();
    assert_eq!(s.dimensions(), (10, 10));
    assert_eq!(schematic::part1::<u64>(&s).unwrap(), 4361);
    assert_eq!(schematic::part2::<u64>(&s).unwrap(), 467835);
}

#[test]
fn test_example_parts() {
    let s = example();

    let parts = s
        .all_numbers::<u32>()
        .map(Result::unwrap)
        .filter(|n| schematic::is_adjacent_to_symbol(&s, n))
        .map(|n| n.value)
        .collect::<Vec<_>>();

    assert_eq!(parts, [467, 35, 633, 617, 592, 755, 664, 598]);

    let ratios = schematic::gears(&s)
        .filter_map(|(row, column)| schematic::gear_ratio::<u32>(&s, row, column).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(ratios, [16345, 451490]);
}

#[test]
fn test_idempotent() {
    let s = example();
    let first = schematic::solve::<u64>(&s).unwrap();
    let second = schematic::solve::<u64>(&s).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_symbols() {
    let s = Schematic::from_rows(["467..114..", "..35..633.", ".........."], Alphabet::default()).unwrap();
    assert_eq!(schematic::solve::<u64>(&s).unwrap(), (0, 0));
}

#[test]
fn test_big_values() {
    let s = Schematic::from_rows(
        [
            "99999999999999999999....",
            "....................*...",
            ".....................99.",
        ],
        Alphabet::default(),
    )
    .unwrap();

    assert!(matches!(
        schematic::part1::<u64>(&s),
        Err(schematic::Error::Overflow { row: 0, column: 0 })
    ));

    let (part1, part2) = schematic::solve::<BigUint>(&s).unwrap();
    assert_eq!(part1.to_string(), "100000000000000000098");
    assert_eq!(part2.to_string(), "9899999999999999999901");
}

#[test]
fn test_alternate_alphabet() {
    let input = EXAMPLE
        .iter()
        .map(|&c| match c {
            b'.' => b' ',
            b'*' => b'x',
            c => c,
        })
        .collect::<Vec<_>>();

    let rows = input.split(|&c| c == b'\n').filter(|row| !row.is_empty());
    let alphabet = Alphabet::new(b' ', b'x').unwrap();
    let s = Schematic::from_rows(rows, alphabet).unwrap();

    assert_eq!(schematic::solve::<u64>(&s).unwrap(), (4361, 467835));
}

#[test]
fn test_shared_between_threads() {
    let s = example();

    std::thread::scope(|scope| {
        let a = scope.spawn(|| schematic::part1::<u64>(&s).unwrap());
        let b = scope.spawn(|| schematic::part2::<u64>(&s).unwrap());
        assert_eq!((a.join().unwrap(), b.join().unwrap()), (4361, 467835));
    });
}
