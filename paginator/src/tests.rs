use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Lays `count` equal items on the axis and reports the spans a host would
/// measure at `scroll` with a viewport of `visible` items.
fn measured_spans(count: usize, item_size: u32, scroll: i64) -> Vec<Span> {
    (0..count)
        .map(|i| Span::new(i as i64 * item_size as i64 - scroll, item_size))
        .collect()
}

fn active_paginator(count: usize, page_size: usize) -> Paginator {
    let mut p = Paginator::new(PaginatorOptions::default());
    p.set_count(count);
    p.apply_visibility(Visibility {
        active_index: Some(0),
        visible_count: page_size,
    });
    p
}

#[test]
fn defaults_match_stock_markup() {
    let opts = PaginatorOptions::default();
    assert_eq!(opts.container_selector, ".scroll-snap-container");
    assert_eq!(opts.wrapper_selector, ".scroll-snap-wrapper");
    assert_eq!(opts.item_selector, ".scroll-snap-container li");
    assert_eq!(opts.previous_selector, ".scroll-snap-nav-previous");
    assert_eq!(opts.next_selector, ".scroll-snap-nav-next");
    assert!(opts.add_controls);
    assert!(opts.paginated);
    assert!(opts.enabled);
    assert_eq!(opts.intersection_threshold, 0.75);
    assert_eq!(opts.resize_throttle_ms, 250);
    assert!(!opts.trim_partial_page);
}

#[test]
fn empty_registry_is_inert() {
    let mut p = Paginator::new(PaginatorOptions::default());
    assert!(!p.is_active());
    assert_eq!(p.active_index(), None);
    assert_eq!(p.page_size(), 0);
    assert_eq!(p.next_page(), None);
    assert_eq!(p.previous_page(), None);

    // Commits and visibility reports on an inert paginator are no-ops.
    p.commit_scroll(
        ScrollRequest {
            index: 3,
            align: Align::Start,
            behavior: ScrollBehavior::Smooth,
        },
        0,
    );
    assert_eq!(p.active_index(), None);
    assert!(!p.is_scrolling());
}

#[test]
fn disabled_answers_queries_empty() {
    let mut p = active_paginator(10, 3);
    assert!(p.is_active());

    p.set_enabled(false);
    assert!(!p.is_active());
    assert_eq!(p.active_index(), None);
    assert_eq!(p.page_size(), 0);
    assert_eq!(p.next_page(), None);

    // Re-enabling waits for the next visibility pass.
    p.set_enabled(true);
    assert_eq!(p.active_index(), Some(0));
    assert_eq!(p.page_size(), 0);
}

#[test]
fn next_targets_one_page_forward() {
    let p = active_paginator(10, 3);
    let req = p.next_page().unwrap();
    assert_eq!(req.index, 3);
    assert_eq!(req.align, Align::Start);
    assert_eq!(req.behavior, ScrollBehavior::Smooth);
}

#[test]
fn next_clamps_to_last_element() {
    let mut p = active_paginator(10, 3);
    p.apply_visibility(Visibility {
        active_index: Some(8),
        visible_count: 3,
    });
    // 8 + 3 would be 11; the registry ends at 9.
    assert_eq!(p.next_page().unwrap().index, 9);
}

#[test]
fn next_at_last_element_is_noop() {
    let mut p = active_paginator(10, 3);
    p.apply_visibility(Visibility {
        active_index: Some(9),
        visible_count: 3,
    });
    assert_eq!(p.next_page(), None);
    assert_eq!(p.active_index(), Some(9));
}

#[test]
fn previous_at_first_element_is_noop() {
    let p = active_paginator(10, 3);
    assert_eq!(p.previous_page(), None);
    assert_eq!(p.active_index(), Some(0));
}

#[test]
fn previous_targets_one_page_back_with_end_alignment() {
    let mut p = active_paginator(10, 3);
    p.apply_visibility(Visibility {
        active_index: Some(5),
        visible_count: 3,
    });
    let req = p.previous_page().unwrap();
    assert_eq!(req.index, 2);
    assert_eq!(req.align, Align::End);

    // Near the start the target saturates at zero.
    p.apply_visibility(Visibility {
        active_index: Some(2),
        visible_count: 3,
    });
    assert_eq!(p.previous_page().unwrap().index, 0);
}

#[test]
fn reduced_motion_switches_to_instant() {
    let mut p = active_paginator(10, 3);
    assert_eq!(p.scroll_behavior(), ScrollBehavior::Smooth);

    p.set_reduced_motion(true);
    assert_eq!(p.scroll_behavior(), ScrollBehavior::Instant);
    assert_eq!(p.next_page().unwrap().behavior, ScrollBehavior::Instant);
}

#[test]
fn unpaginated_steps_one_element() {
    let mut p = Paginator::new(PaginatorOptions::default().with_paginated(false));
    p.set_count(10);
    p.apply_visibility(Visibility {
        active_index: Some(4),
        visible_count: 3,
    });
    assert_eq!(p.stride(), 1);
    assert_eq!(p.next_page().unwrap().index, 5);
    assert_eq!(p.previous_page().unwrap().index, 3);
}

#[test]
fn stride_degrades_to_one_before_first_visibility_pass() {
    let mut p = Paginator::new(PaginatorOptions::default());
    p.set_count(10);
    assert_eq!(p.page_size(), 0);
    assert_eq!(p.stride(), 1);
    assert_eq!(p.next_page().unwrap().index, 1);
}

#[test]
fn trim_partial_page_shortens_the_stride() {
    let mut p = Paginator::new(PaginatorOptions::default().with_trim_partial_page(true));
    p.set_count(10);
    p.apply_visibility(Visibility {
        active_index: Some(0),
        visible_count: 4,
    });
    assert_eq!(p.page_size(), 3);
    assert_eq!(p.next_page().unwrap().index, 3);

    // A single visible element still navigates.
    p.apply_visibility(Visibility {
        active_index: Some(0),
        visible_count: 1,
    });
    assert_eq!(p.page_size(), 0);
    assert_eq!(p.stride(), 1);
}

#[test]
fn visibility_report_without_active_keeps_current_index() {
    let mut p = active_paginator(10, 3);
    p.apply_visibility(Visibility {
        active_index: Some(6),
        visible_count: 3,
    });
    p.apply_visibility(Visibility {
        active_index: None,
        visible_count: 2,
    });
    assert_eq!(p.active_index(), Some(6));
    assert_eq!(p.page_size(), 2);
}

#[test]
fn out_of_range_visibility_is_clamped() {
    let mut p = active_paginator(5, 3);
    p.apply_visibility(Visibility {
        active_index: Some(99),
        visible_count: 42,
    });
    assert_eq!(p.active_index(), Some(4));
    assert_eq!(p.page_size(), 5);
}

#[test]
fn set_count_clamps_active_index() {
    let mut p = active_paginator(10, 3);
    p.apply_visibility(Visibility {
        active_index: Some(9),
        visible_count: 3,
    });
    p.set_count(4);
    assert_eq!(p.active_index(), Some(3));

    p.set_count(0);
    assert_eq!(p.active_index(), None);
    assert!(!p.is_active());
}

#[test]
fn commit_scroll_moves_active_and_enters_scrolling() {
    let mut p = active_paginator(10, 3);
    let req = p.next_page().unwrap();
    p.commit_scroll(req, 1000);
    assert_eq!(p.active_index(), Some(3));
    assert!(p.is_scrolling());

    // Settles after the debounce window with no further events.
    p.update_scrolling(1100);
    assert!(p.is_scrolling());
    p.update_scrolling(1150);
    assert!(!p.is_scrolling());
}

#[test]
fn repeated_commits_retarget_without_defence() {
    let mut p = active_paginator(10, 3);
    let first = p.next_page().unwrap();
    p.commit_scroll(first, 0);
    let second = p.next_page().unwrap();
    p.commit_scroll(second, 10);
    assert_eq!(p.active_index(), Some(6));
    assert!(p.is_scrolling());
}

#[test]
fn active_index_stays_in_range_under_random_navigation() {
    let mut rng = Lcg::new(0x5EED);
    for _ in 0..50 {
        let count = rng.gen_range_usize(1, 20);
        let mut p = Paginator::new(PaginatorOptions::default());
        p.set_count(count);
        p.apply_visibility(Visibility {
            active_index: Some(rng.gen_range_usize(0, count)),
            visible_count: rng.gen_range_usize(0, 6),
        });

        for step in 0..200u64 {
            let req = if rng.gen_bool() {
                p.next_page()
            } else {
                p.previous_page()
            };
            if let Some(req) = req {
                assert!(req.index < count);
                p.commit_scroll(req, step);
            }
            let active = p.active_index().unwrap();
            assert!(active < count);
        }
    }
}

#[test]
fn throttle_coalesces_a_burst_into_one_trailing_run() {
    let mut t = Throttle::new(250);

    // Leading edge fires immediately.
    assert!(t.request(1000));

    // The rest of the burst coalesces.
    assert!(!t.request(1010));
    assert!(!t.request(1100));
    assert!(!t.request(1249));
    assert!(t.is_pending());

    // Not yet.
    assert!(!t.poll(1200));

    // Exactly one trailing fire once the window elapses.
    assert!(t.poll(1250));
    assert!(!t.poll(1251));
    assert!(!t.is_pending());
}

#[test]
fn throttle_reopens_after_the_window() {
    let mut t = Throttle::new(250);
    assert!(t.request(0));
    assert!(t.request(250));
    assert!(t.request(600));
    assert!(!t.is_pending());
}

#[test]
fn throttle_zero_interval_never_gates() {
    let mut t = Throttle::new(0);
    assert!(t.request(5));
    assert!(t.request(5));
    assert!(t.request(5));
}

#[test]
fn remeasure_requests_are_rate_limited() {
    let mut p = active_paginator(10, 3);

    assert!(p.request_remeasure(0));
    let mut fired = 0;
    for now in [10u64, 40, 90, 200, 240] {
        if p.request_remeasure(now) {
            fired += 1;
        }
        if p.poll_remeasure(now) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert!(p.poll_remeasure(250));
    assert!(!p.poll_remeasure(260));
}

#[test]
fn disabled_paginator_ignores_remeasure_and_scroll_events() {
    let mut p = active_paginator(10, 3);
    p.set_enabled(false);
    assert!(!p.request_remeasure(0));
    assert!(!p.poll_remeasure(1000));
    p.notify_scroll_event(0);
    assert!(!p.is_scrolling());
}

#[test]
fn on_change_reports_is_scrolling() {
    let states = Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen = Arc::clone(&states);
    let mut p = Paginator::new(PaginatorOptions::default().with_on_change(Some(
        move |p: &Paginator, is_scrolling: bool| {
            seen.lock().unwrap().push((p.nav_state(), is_scrolling));
        },
    )));
    p.set_count(10);
    p.apply_visibility(Visibility {
        active_index: Some(0),
        visible_count: 3,
    });
    let req = p.next_page().unwrap();
    p.commit_scroll(req, 0);

    let states = states.lock().unwrap();
    let last = states.last().unwrap();
    assert_eq!(last.0.active_index, Some(3));
    assert!(last.1);
}

#[test]
fn batch_update_fires_on_change_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&calls);
    let mut p = Paginator::new(
        PaginatorOptions::default().with_on_change(Some(move |_: &Paginator, _| {
            n.fetch_add(1, Ordering::Relaxed);
        })),
    );

    p.batch_update(|p| {
        p.set_count(10);
        p.apply_visibility(Visibility {
            active_index: Some(2),
            visible_count: 3,
        });
        p.set_reduced_motion(true);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn intersection_tracker_applies_threshold() {
    let mut t = IntersectionTracker::new(5, 0.75);
    t.record_all([
        IntersectionEntry {
            index: 0,
            ratio: 0.2,
        },
        IntersectionEntry {
            index: 1,
            ratio: 0.8,
        },
        IntersectionEntry {
            index: 2,
            ratio: 1.0,
        },
        IntersectionEntry {
            index: 3,
            ratio: 0.74,
        },
    ]);
    let v = t.visibility();
    assert_eq!(v.active_index, Some(1));
    assert_eq!(v.visible_count, 2);
}

#[test]
fn intersection_tracker_updates_replace_earlier_entries() {
    let mut t = IntersectionTracker::new(3, 0.5);
    t.record(IntersectionEntry {
        index: 0,
        ratio: 1.0,
    });
    t.record(IntersectionEntry {
        index: 0,
        ratio: 0.1,
    });
    assert_eq!(t.visibility().active_index, None);
}

#[test]
fn intersection_tracker_set_len_reseeds() {
    let mut t = IntersectionTracker::new(2, 0.5);
    t.record(IntersectionEntry {
        index: 1,
        ratio: 1.0,
    });
    t.set_len(4);
    assert_eq!(t.len(), 4);
    assert_eq!(t.visibility().visible_count, 0);
}

#[test]
fn rect_tracker_counts_fully_contained_spans() {
    let mut t = RectTracker::new();
    // Viewport shows items 0..3 of ten 100-wide items; item 3 is clipped.
    let viewport = Span::new(0, 320);
    t.measure(viewport, measured_spans(10, 100, 0));

    let v = t.visibility();
    assert_eq!(v.active_index, Some(0));
    assert_eq!(v.visible_count, 3);
}

#[test]
fn rect_tracker_tracks_scrolled_viewport() {
    let mut t = RectTracker::new();
    // Scrolled by 300: items 3..6 are the fully visible ones.
    t.measure(Span::new(0, 300), measured_spans(10, 100, 300));
    let v = t.visibility();
    assert_eq!(v.active_index, Some(3));
    assert_eq!(v.visible_count, 3);
}

#[test]
fn rect_tracker_empty_measurement_reports_nothing() {
    let mut t = RectTracker::new();
    t.measure(Span::new(0, 300), core::iter::empty());
    assert_eq!(t.visibility(), Visibility::default());
}

#[test]
fn span_containment_and_coverage() {
    let viewport = Span::new(0, 300);
    assert!(viewport.contains(Span::new(0, 100)));
    assert!(viewport.contains(Span::new(200, 100)));
    assert!(!viewport.contains(Span::new(250, 100)));
    assert!(!viewport.contains(Span::new(-10, 100)));

    assert_eq!(viewport.coverage(Span::new(250, 100)), 0.5);
    assert_eq!(viewport.coverage(Span::new(400, 100)), 0.0);
    assert_eq!(viewport.coverage(Span::new(100, 100)), 1.0);
}

#[test]
fn end_to_end_poll_driven_page_walk() {
    // Ten 100-wide items in a 300-wide wrapper: pages of three, and the host
    // clamps its scroll offset to [0, 700] like a real scroll container.
    const ITEM: i64 = 100;
    const VIEW: u32 = 300;
    const MAX_SCROLL: i64 = 10 * ITEM - VIEW as i64;

    let scroll_for = |req: &ScrollRequest| -> i64 {
        let start = req.index as i64 * ITEM;
        let target = match req.align {
            Align::End => start + ITEM - VIEW as i64,
            _ => start,
        };
        target.clamp(0, MAX_SCROLL)
    };

    let mut tracker = RectTracker::new();
    let mut p = Paginator::new(PaginatorOptions::default());
    p.set_count(10);

    let mut scroll = 0i64;
    tracker.measure(Span::new(0, VIEW), measured_spans(10, ITEM as u32, scroll));
    p.observe(&tracker);
    assert_eq!(p.nav_state().page_size, 3);

    // Forward: 0 -> 3 -> 6, then the clamped end of the container.
    for (step, expected) in [(0u64, 3usize), (1, 6)] {
        let req = p.next_page().unwrap();
        assert_eq!(req.index, expected);
        assert_eq!(req.align, Align::Start);
        p.commit_scroll(req, step);
        scroll = scroll_for(&req);
        tracker.measure(Span::new(0, VIEW), measured_spans(10, ITEM as u32, scroll));
        p.observe(&tracker);
        assert_eq!(p.active_index(), Some(expected));
    }

    // 6 + 3 targets the last element; the host clamps the scroll so the
    // first fully visible element settles at 7.
    let req = p.next_page().unwrap();
    assert_eq!(req.index, 9);
    p.commit_scroll(req, 2);
    scroll = scroll_for(&req);
    assert_eq!(scroll, MAX_SCROLL);
    tracker.measure(Span::new(0, VIEW), measured_spans(10, ITEM as u32, scroll));
    p.observe(&tracker);
    assert_eq!(p.active_index(), Some(7));

    // Clicking next again re-targets 9 but the settled state is unchanged.
    let req = p.next_page().unwrap();
    assert_eq!(req.index, 9);
    p.commit_scroll(req, 3);
    let settled = scroll_for(&req);
    assert_eq!(settled, scroll);
    p.observe(&tracker);
    assert_eq!(p.active_index(), Some(7));

    // Back: 7 -> 4 (end-aligned) -> 1 -> 0, then a boundary no-op.
    let req = p.previous_page().unwrap();
    assert_eq!((req.index, req.align), (4, Align::End));
    p.commit_scroll(req, 4);
    scroll = scroll_for(&req);
    assert_eq!(scroll, 200);
    tracker.measure(Span::new(0, VIEW), measured_spans(10, ITEM as u32, scroll));
    p.observe(&tracker);
    assert_eq!(p.active_index(), Some(2));

    let req = p.previous_page().unwrap();
    assert_eq!(req.index, 0);
    p.commit_scroll(req, 5);
    scroll = scroll_for(&req);
    assert_eq!(scroll, 0);
    tracker.measure(Span::new(0, VIEW), measured_spans(10, ITEM as u32, scroll));
    p.observe(&tracker);
    assert_eq!(p.active_index(), Some(0));
    assert_eq!(p.previous_page(), None);
}
