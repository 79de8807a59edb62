// Example: paging a list and resolving the initial window.
use pagewindow::{Geometry, ScrollEvent, TrackerOptions, VirtualScroll};

fn main() {
    let items: Vec<String> = (1..=100).map(|i| format!("row {i}")).collect();
    let mut list = VirtualScroll::new(items, TrackerOptions::new(Geometry::new(10, 50)));

    let rendered = list.render();
    println!("page_count={}", rendered.page_count);
    println!("window={:?}", list.window().pages());
    for it in &rendered.items {
        println!("{:>3} {:<8} {}", it.absolute_index, it.item, it.style);
    }

    list.on_scroll(&ScrollEvent::element(480));
    list.on_frame(16);

    let rendered = list.render();
    println!("after scroll: window={:?}", list.window().pages());
    println!(
        "first={:?} last={:?}",
        rendered.items.first().map(|it| it.absolute_index),
        rendered.items.last().map(|it| it.absolute_index)
    );
}
