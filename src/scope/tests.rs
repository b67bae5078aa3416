// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the scope module.

use super::{Scope, nesting_depth};
use crate::{InMemorySink, Level, SinkKind, callsite};
use std::sync::Barrier;

#[test]
fn emits_iff_level_passes_threshold() {
    for threshold in Level::ALL {
        for level in Level::ALL {
            let sink = InMemorySink::new().with_threshold(threshold);
            {
                let scope = Scope::enter(level, &sink);
                assert_eq!(scope.enabled(), level <= threshold);
                scope.emit(&callsite!(), &[&"x"]);
            }
            let expected = usize::from(level <= threshold);
            assert_eq!(
                sink.lines().len(),
                expected,
                "level {level:?} threshold {threshold:?}"
            );
        }
    }
}

#[test]
fn threshold_info_scenario() {
    let sink = InMemorySink::new().with_threshold(Level::Info);
    for level in [Level::Warning, Level::Info, Level::Debug] {
        let scope = Scope::enter(level, &sink);
        scope.emit(&callsite!(), &[&"Hello"]);
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(&format!("   WARN {}:", file!())), "{}", lines[0]);
    assert!(lines[1].contains(&format!("   INFO {}:", file!())), "{}", lines[1]);
    assert!(lines.iter().all(|l| l.ends_with("::threshold_info_scenario [Hello]")));
}

#[test]
fn double_nesting_observes_two_and_unwinds_to_zero() {
    let sink = InMemorySink::new();
    assert_eq!(nesting_depth(SinkKind::Console), 0);
    {
        let outer = Scope::enter(Level::Info, &sink);
        assert_eq!(outer.depth(), 1);
        {
            let inner = Scope::enter(Level::Info, &sink);
            assert_eq!(inner.depth(), 2);
            assert_eq!(nesting_depth(SinkKind::Console), 2);
            inner.emit(&callsite!(), &[&"inner"]);
        }
        assert_eq!(nesting_depth(SinkKind::Console), 1);
        outer.emit(&callsite!(), &[&"outer"]);
    }
    assert_eq!(nesting_depth(SinkKind::Console), 0);

    let lines = sink.lines();
    let inner_at = lines[0].find(file!()).unwrap();
    let outer_at = lines[1].find(file!()).unwrap();
    assert_eq!(inner_at, outer_at + crate::INDENT_WIDTH);
    assert!(lines[0].contains(&format!("   INFO     {}:", file!())));
}

#[test]
fn outer_scope_emits_at_the_live_depth() {
    let sink = InMemorySink::new();
    let outer = Scope::enter(Level::Info, &sink);
    {
        let _inner = Scope::enter(Level::Info, &sink);
        assert_eq!(nesting_depth(SinkKind::Console), 2);
        assert_eq!(outer.indent(), 1);
        outer.emit(&callsite!(), &[&"while inner is open"]);
    }
    assert_eq!(outer.indent(), 0);
    outer.emit(&callsite!(), &[&"after inner closed"]);
    drop(outer);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].contains(&format!("   INFO     {}:", file!())),
        "{}",
        lines[0]
    );
    assert!(
        lines[1].contains(&format!("   INFO {}:", file!())),
        "{}",
        lines[1]
    );
}

#[test]
fn filtered_scopes_still_nest() {
    let sink = InMemorySink::new().with_threshold(Level::Error);
    let outer = Scope::enter(Level::Debug, &sink);
    assert!(!outer.enabled());
    let inner = Scope::enter(Level::Error, &sink);
    assert_eq!(inner.indent(), 1);
    inner.emit(&callsite!(), &[&"deep"]);
    drop(inner);
    drop(outer);
    assert!(sink.lines()[0].contains(&format!("  ERROR     {}:", file!())));
    assert_eq!(nesting_depth(SinkKind::Console), 0);
}

#[test]
fn depth_is_restored_when_a_nested_scope_panics() {
    let sink = InMemorySink::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _outer = Scope::enter(Level::Info, &sink);
        let _inner = Scope::enter(Level::Info, &sink);
        if nesting_depth(SinkKind::Console) == 2 {
            panic!("inner work failed");
        }
    }));
    assert!(result.is_err());
    assert_eq!(nesting_depth(SinkKind::Console), 0);
}

#[test]
fn depth_is_restored_on_early_return() {
    fn fallible(sink: &InMemorySink) -> Result<(), std::num::ParseIntError> {
        let _outer = Scope::enter(Level::Info, sink);
        let _inner = Scope::enter(Level::Info, sink);
        let _n: u32 = "not a number".parse()?;
        unreachable!()
    }

    let sink = InMemorySink::new();
    assert!(fallible(&sink).is_err());
    assert_eq!(nesting_depth(SinkKind::Console), 0);
}

#[test]
fn depth_is_per_thread() {
    let sink = InMemorySink::new();
    let barrier = Barrier::new(2);
    std::thread::scope(|s| {
        for extra in [1usize, 3] {
            let sink = &sink;
            let barrier = &barrier;
            s.spawn(move || {
                let scopes: Vec<Scope<'_>> = (0..extra)
                    .map(|_| Scope::enter(Level::Info, sink))
                    .collect();
                // both threads hold their scopes at the same time
                barrier.wait();
                assert_eq!(nesting_depth(SinkKind::Console), extra);
                barrier.wait();
                drop(scopes);
                assert_eq!(nesting_depth(SinkKind::Console), 0);
            });
        }
    });
    assert_eq!(nesting_depth(SinkKind::Console), 0);
}

#[test]
fn kinds_nest_independently() {
    let console = InMemorySink::new();
    let file = InMemorySink::new().with_kind(SinkKind::File);
    let _c = Scope::enter(Level::Info, &console);
    let _c2 = Scope::enter(Level::Info, &console);
    let f = Scope::enter(Level::Info, &file);
    assert_eq!(nesting_depth(SinkKind::Console), 2);
    assert_eq!(nesting_depth(SinkKind::File), 1);
    assert_eq!(f.indent(), 0);
}

#[test]
fn console_scope_uses_the_console_counter() {
    let scope = Scope::console(Level::Debug);
    assert_eq!(scope.sink().kind(), SinkKind::Console);
    assert_eq!(nesting_depth(SinkKind::Console), 1);
    // Debug does not pass the default console threshold; nothing is printed
    scope.emit(&callsite!(), &[&"hidden"]);
    drop(scope);
    assert_eq!(nesting_depth(SinkKind::Console), 0);
}
