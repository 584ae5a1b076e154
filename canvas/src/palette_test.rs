use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::consts::DEFAULT_PALETTE;

fn colours(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn default_colours() -> Vec<String> {
    colours(&DEFAULT_PALETTE)
}

// =============================================================
// Background reservation
// =============================================================

#[test]
fn background_is_removed_from_fills() {
    let all = default_colours();
    let mut rng = SmallRng::seed_from_u64(7);
    let palette = Palette::with_random_background(&all, &mut rng).unwrap();
    assert_eq!(palette.fills().len(), all.len() - 1);
    assert!(!palette.fills().iter().any(|c| c == palette.background()));
    assert!(all.iter().any(|c| c == palette.background()));
}

#[test]
fn background_at_index_keeps_other_colours_in_order() {
    let palette = Palette::with_background_at(&colours(&["#a", "#b", "#c"]), 1);
    assert_eq!(palette.background(), "#b");
    assert_eq!(palette.fills(), colours(&["#a", "#c"]).as_slice());
}

#[test]
fn background_index_wraps() {
    let palette = Palette::with_background_at(&colours(&["#a", "#b", "#c"]), 4);
    assert_eq!(palette.background(), "#b");
}

#[test]
fn single_colour_palette_keeps_its_only_fill() {
    let mut rng = SmallRng::seed_from_u64(1);
    let palette = Palette::with_random_background(&colours(&["#FF4136"]), &mut rng).unwrap();
    assert_eq!(palette.background(), "#FF4136");
    assert_eq!(palette.fills(), colours(&["#FF4136"]).as_slice());
}

#[test]
fn empty_palette_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = Palette::with_random_background(&[], &mut rng).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPalette));
}

#[test]
fn every_seed_reserves_a_palette_colour() {
    let all = default_colours();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette = Palette::with_random_background(&all, &mut rng).unwrap();
        assert!(!palette.fills().iter().any(|c| c == palette.background()), "seed {seed}");
    }
}

// =============================================================
// Fill picks
// =============================================================

#[test]
fn pick_never_returns_background() {
    let all = default_colours();
    let mut rng = SmallRng::seed_from_u64(42);
    let palette = Palette::with_random_background(&all, &mut rng).unwrap();
    for _ in 0..500 {
        let c = palette.pick(&mut rng);
        assert_ne!(c, palette.background());
        assert!(palette.fills().contains(&c));
    }
}

#[test]
fn pick_reaches_more_than_one_colour() {
    let palette = Palette::with_background_at(&default_colours(), 0);
    let mut rng = SmallRng::seed_from_u64(3);
    let first = palette.pick(&mut rng);
    let varied = (0..200).any(|_| palette.pick(&mut rng) != first);
    assert!(varied);
}

#[test]
fn same_seed_gives_same_picks() {
    let palette = Palette::with_background_at(&default_colours(), 0);
    let mut a = SmallRng::seed_from_u64(99);
    let mut b = SmallRng::seed_from_u64(99);
    for _ in 0..20 {
        assert_eq!(palette.pick(&mut a), palette.pick(&mut b));
    }
}
