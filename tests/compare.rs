mod roaring;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use widechar_width::{classify, WcWidth};

#[test]
fn compare_all_codepoints() {
    let reference = roaring::Reference::new();

    for c in 0..=0x10FFFF + 0x100 {
        assert_eq!(classify(c), reference.classify(c), "U+{c:04X}");
    }

    for ch in '\0'..=char::MAX {
        assert_eq!(WcWidth::from_char(ch), classify(ch as u32), "{ch:?}");
    }
}

#[test]
fn compare_random_u32() {
    let reference = roaring::Reference::new();
    let mut rng = StdRng::seed_from_u64(0x5749_4445);

    for _ in 0..100_000 {
        let c: u32 = rng.random();
        assert_eq!(classify(c), reference.classify(c), "{c:#X}");
    }
    for c in [0x110000, 0x7FFF_FFFF, 0x8000_0000, u32::MAX - 1, u32::MAX] {
        assert_eq!(classify(c), WcWidth::One, "{c:#X}");
    }
}

#[test]
fn classify_is_repeatable() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..10_000 {
        let c = rng.random_range(0..=0x10FFFF);
        let first = classify(c);
        assert_eq!(classify(c + 1), classify(c + 1));
        assert_eq!(classify(c), first);
    }
}
