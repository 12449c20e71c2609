// File: crates/canx-watch/tests/palette.rs
// Purpose: Validate colour pool ordering, release/reuse and exhaustion policies.

use canx_watch::{ColorPool, ExhaustionPolicy, WatcherKey};
use skia_safe::Color;

fn three() -> Vec<Color> { vec![Color::RED, Color::GREEN, Color::BLUE] }

fn key(n: usize) -> WatcherKey { WatcherKey::new("MSG", format!("S{n}")) }

#[test]
fn hands_out_in_palette_order() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    assert_eq!(pool.acquire(&key(0)), Color::RED);
    assert_eq!(pool.acquire(&key(1)), Color::GREEN);
    assert_eq!(pool.acquire(&key(2)), Color::BLUE);
    assert_eq!(pool.available(), 0);
}

#[test]
fn acquire_is_idempotent_per_key() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    let a = pool.acquire(&key(0));
    assert_eq!(pool.acquire(&key(0)), a);
    assert_eq!(pool.available(), 2);
}

#[test]
fn released_colour_goes_to_back() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    pool.acquire(&key(0));
    assert!(pool.release(&key(0)));
    assert!(!pool.release(&key(0)));
    // GREEN and BLUE were free before RED came back
    assert_eq!(pool.acquire(&key(1)), Color::GREEN);
    assert_eq!(pool.acquire(&key(2)), Color::BLUE);
    assert_eq!(pool.acquire(&key(3)), Color::RED);
}

#[test]
fn round_robin_when_exhausted() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    for i in 0..3 {
        pool.acquire(&key(i));
    }
    assert_eq!(pool.acquire(&key(3)), Color::RED);
    assert_eq!(pool.acquire(&key(4)), Color::GREEN);
    assert_eq!(pool.acquire(&key(5)), Color::BLUE);
    assert_eq!(pool.acquire(&key(6)), Color::RED);
}

#[test]
fn shared_colour_freed_by_last_holder() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    for i in 0..3 {
        pool.acquire(&key(i));
    }
    assert_eq!(pool.acquire(&key(3)), Color::RED);
    pool.release(&key(0));
    assert_eq!(pool.available(), 0);
    pool.release(&key(3));
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.acquire(&key(7)), Color::RED);
}

#[test]
fn seeded_random_is_deterministic() {
    let draw = || {
        let mut pool = ColorPool::new(three(), ExhaustionPolicy::Random { seed: 42 });
        (0..12).map(|i| pool.acquire(&key(i))).collect::<Vec<_>>()
    };
    let a = draw();
    assert_eq!(a, draw());
    assert_eq!(&a[..3], &[Color::RED, Color::GREEN, Color::BLUE]);
    assert!(a.iter().all(|c| three().contains(c)));
}

#[test]
fn reset_restores_order() {
    let mut pool = ColorPool::new(three(), ExhaustionPolicy::RoundRobin);
    pool.acquire(&key(0));
    pool.acquire(&key(1));
    pool.reset();
    assert_eq!(pool.available(), 3);
    assert_eq!(pool.color_of(&key(0)), None);
    assert_eq!(pool.acquire(&key(5)), Color::RED);
}

#[test]
fn empty_palette_uses_default() {
    let pool = ColorPool::new(Vec::new(), ExhaustionPolicy::default());
    assert_eq!(pool.palette(), canx_chart::theme::default_palette().as_slice());
}
