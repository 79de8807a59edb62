// Example: an adapter loop feeding scroll bursts and frame ticks.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pagewindow::{Geometry, ScrollEvent, TrackerOptions, VirtualScroll, Window};
use tracing_subscriber::EnvFilter;

fn main() {
    // Run with `--features tracing` and RUST_LOG=pagewindow=trace to see the tracker's events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Stand-ins for the UI: a flag the auxiliary element would mirror, and a render counter.
    let pointer_events = Arc::new(AtomicBool::new(true));
    let renders = Arc::new(AtomicUsize::new(0));

    let opts = TrackerOptions::new(Geometry::new(20, 400))
        .with_on_pointer_events(Some({
            let pointer_events = Arc::clone(&pointer_events);
            move |enabled: bool| pointer_events.store(enabled, Ordering::Relaxed)
        }))
        .with_on_change(Some({
            let renders = Arc::clone(&renders);
            move |w: &Window| {
                renders.fetch_add(1, Ordering::Relaxed);
                println!("  window -> {:?}", w.pages());
            }
        }));

    let mut list = VirtualScroll::new((0..10_000u32).collect::<Vec<_>>(), opts);

    let mut now_ms = 0u64;
    let mut offset = 0u64;
    for frame in 0..60u64 {
        now_ms += 16;

        // A flick for the first 30 frames: several scroll events per frame.
        if frame < 30 {
            for _ in 0..3 {
                offset += 45;
                list.on_scroll(&ScrollEvent::element(offset));
            }
        }

        list.tick(now_ms);

        if frame % 10 == 0 {
            let mut first = None;
            let mut count = 0usize;
            list.for_each_render_item(|it| {
                first.get_or_insert(it.absolute_index);
                count += 1;
            });
            println!(
                "t={now_ms}ms offset={offset} first={first:?} rendered={count} pointer_events={}",
                pointer_events.load(Ordering::Relaxed)
            );
        }
    }

    list.detach();
    println!(
        "done: renders={} pointer_events={}",
        renders.load(Ordering::Relaxed),
        pointer_events.load(Ordering::Relaxed)
    );
}
