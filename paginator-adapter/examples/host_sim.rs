// Example: a simulated host driving the mounted controller.
//
// Models a 12-card gallery behind a 400-wide wrapper; "clicks" walk the
// pages forward to the end and back again.
use paginator::{Align, PaginatorOptions, ScrollBehavior, Span};
use paginator_adapter::{ControlsSpec, NavControls, NavController, ScrollHost};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Handle {
    Container,
    Wrapper,
    Item(usize),
    Previous,
    Next,
}

#[derive(Clone, Debug)]
struct SimHost {
    item_count: usize,
    item_size: u32,
    viewport_size: u32,
    scroll: i64,
}

impl SimHost {
    fn max_scroll(&self) -> i64 {
        (self.item_count as i64 * self.item_size as i64 - self.viewport_size as i64).max(0)
    }
}

impl ScrollHost for SimHost {
    type Handle = Handle;

    fn query(&self, selector: &str) -> Option<Handle> {
        match selector {
            ".scroll-snap-container" => Some(Handle::Container),
            ".scroll-snap-wrapper" => Some(Handle::Wrapper),
            _ => None,
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Handle> {
        if selector == ".scroll-snap-container li" {
            (0..self.item_count).map(Handle::Item).collect()
        } else {
            self.query(selector).into_iter().collect()
        }
    }

    fn span_of(&self, handle: &Handle) -> Span {
        match handle {
            Handle::Item(i) => Span::new(
                *i as i64 * self.item_size as i64 - self.scroll,
                self.item_size,
            ),
            _ => Span::new(0, self.viewport_size),
        }
    }

    fn scroll_into_view(&mut self, handle: &Handle, align: Align, behavior: ScrollBehavior) {
        let Handle::Item(index) = handle else {
            return;
        };
        let start = *index as i64 * self.item_size as i64;
        let target = match align {
            Align::End => start + self.item_size as i64 - self.viewport_size as i64,
            _ => start,
        };
        self.scroll = target.clamp(0, self.max_scroll());
        println!("  host: scroll_into_view(item {index}, {align:?}, {behavior:?}) -> offset {}", self.scroll);
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn append_controls(&mut self, _container: &Handle, spec: &ControlsSpec) -> NavControls<Handle> {
        println!("  host: appended <div class=\"{}\"> with two buttons", spec.nav_class);
        NavControls {
            previous: Handle::Previous,
            next: Handle::Next,
        }
    }
}

fn main() {
    let host = SimHost {
        item_count: 12,
        item_size: 100,
        viewport_size: 400,
        scroll: 0,
    };
    let mut c = NavController::mount(host, PaginatorOptions::default());
    println!("mounted: {:?}", c.paginator().nav_state());

    let mut now_ms = 0u64;
    println!("clicking next to the end:");
    while c.next(now_ms) {
        now_ms += 500;
        println!("  state: {:?}", c.paginator().nav_state());
    }

    println!("clicking previous back to the start:");
    while c.previous(now_ms) {
        now_ms += 500;
        println!("  state: {:?}", c.paginator().nav_state());
    }
}
