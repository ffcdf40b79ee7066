// Example: minimal poll-driven usage.
use paginator::{Paginator, PaginatorOptions, RectTracker, Span};

fn main() {
    // Ten 100-wide cards behind a 300-wide wrapper.
    let mut tracker = RectTracker::new();
    tracker.measure(Span::new(0, 300), (0..10i64).map(|i| Span::new(i * 100, 100)));

    let mut p = Paginator::new(PaginatorOptions::default());
    p.set_count(10);
    p.observe(&tracker);
    println!("state={:?}", p.nav_state());

    while let Some(req) = p.next_page() {
        println!("scroll to index {} ({:?}, {:?})", req.index, req.align, req.behavior);
        p.commit_scroll(req, 0);
    }
    println!("final state={:?}", p.nav_state());
}
