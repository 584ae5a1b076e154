use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Fake timer: counts live handles and stops ticking once dropped.
struct FakeTimer {
    live: Rc<Cell<usize>>,
    cancelled: Rc<Cell<bool>>,
}

impl FakeTimer {
    fn spawn(live: &Rc<Cell<usize>>, cancelled: &Rc<Cell<bool>>) -> Self {
        live.set(live.get() + 1);
        cancelled.set(false);
        Self { live: Rc::clone(live), cancelled: Rc::clone(cancelled) }
    }
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        self.cancelled.set(true);
    }
}

fn counters() -> (Rc<Cell<usize>>, Rc<Cell<bool>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(false)))
}

// =============================================================
// start / stop
// =============================================================

#[test]
fn new_disco_is_not_running() {
    let disco: Disco<FakeTimer> = Disco::new();
    assert!(!disco.is_running());
}

#[test]
fn start_spawns_one_timer() {
    let (live, cancelled) = counters();
    let mut disco = Disco::new();
    assert!(disco.start(|| FakeTimer::spawn(&live, &cancelled)));
    assert!(disco.is_running());
    assert_eq!(live.get(), 1);
}

#[test]
fn starting_twice_keeps_exactly_one_timer() {
    let (live, cancelled) = counters();
    let spawned = Cell::new(0);
    let mut disco = Disco::new();
    assert!(disco.start(|| {
        spawned.set(spawned.get() + 1);
        FakeTimer::spawn(&live, &cancelled)
    }));
    assert!(!disco.start(|| {
        spawned.set(spawned.get() + 1);
        FakeTimer::spawn(&live, &cancelled)
    }));
    assert_eq!(spawned.get(), 1);
    assert_eq!(live.get(), 1);
}

#[test]
fn stop_cancels_timer() {
    let (live, cancelled) = counters();
    let mut disco = Disco::new();
    disco.start(|| FakeTimer::spawn(&live, &cancelled));
    assert!(disco.stop());
    assert!(!disco.is_running());
    assert_eq!(live.get(), 0);
    assert!(cancelled.get());
}

#[test]
fn stop_when_idle_returns_false() {
    let mut disco: Disco<FakeTimer> = Disco::new();
    assert!(!disco.stop());
}

#[test]
fn restart_after_stop_spawns_fresh_timer() {
    let (live, cancelled) = counters();
    let mut disco = Disco::new();
    disco.start(|| FakeTimer::spawn(&live, &cancelled));
    disco.stop();
    assert!(disco.start(|| FakeTimer::spawn(&live, &cancelled)));
    assert_eq!(live.get(), 1);
    assert!(!cancelled.get());
}

#[test]
fn dropping_disco_cancels_timer() {
    let (live, cancelled) = counters();
    {
        let mut disco = Disco::new();
        disco.start(|| FakeTimer::spawn(&live, &cancelled));
    }
    assert_eq!(live.get(), 0);
    assert!(cancelled.get());
}
