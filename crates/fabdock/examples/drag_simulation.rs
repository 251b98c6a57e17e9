//! Simulated drag session against a phone-sized container.
//!
//! Run with: cargo run --example drag_simulation

use std::thread;
use std::time::Duration;

use fabdock::{
    Anchor, LayoutDirection, MovableActionButton, MovableActionButtonSpec, Point, Rect,
    SampleClock,
};

fn sleep_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

fn main() {
    let container = Rect::new(0.0, 0.0, 360.0, 640.0);
    let direction = LayoutDirection::Ltr;

    let spec = MovableActionButtonSpec::new().allowed_anchors(Anchor::CANONICAL.to_vec());
    let mut button = MovableActionButton::new(spec, "(+)")
        .anchor_changed(|anchor| println!("  anchor changed -> {anchor:?}"));

    let clock = SampleClock::start();
    println!(
        "button {:?} starts at {:?}",
        button.content(),
        button.anchor()
    );

    // A slow drag from the bottom-end corner up to the top-left.
    println!("slow drag toward the top-left:");
    button.drag_started(clock.now_ms(), Point::new(350.0, 630.0));
    for step in 1..=10 {
        sleep_ms(16);
        let t = step as f32 / 10.0;
        let position = Point::new(350.0 + (20.0 - 350.0) * t, 630.0 + (30.0 - 630.0) * t);
        let offset = button.drag_moved(clock.now_ms(), position);
        if step % 5 == 0 {
            println!("  offset {offset:?}");
        }
    }
    sleep_ms(64);
    let outcome = button.drag_ended(container, direction, clock.now_ms(), Point::new(20.0, 30.0));
    println!("  outcome {outcome:?}, resting at {:?}", button.anchor());

    // A quick rightward fling; the predicted rest point decides the drop.
    println!("rightward fling:");
    button.drag_started(clock.now_ms(), Point::new(20.0, 20.0));
    for step in 1..=4 {
        sleep_ms(8);
        let position = Point::new(20.0 + step as f32 * 45.0, 21.0);
        button.drag_moved(clock.now_ms(), position);
    }
    let outcome = button.drag_ended(container, direction, clock.now_ms(), Point::new(200.0, 21.0));
    println!("  outcome {outcome:?}, resting at {:?}", button.anchor());

    // A tap never moves the button.
    println!("tap in place:");
    button.drag_started(clock.now_ms(), Point::new(30.0, 30.0));
    sleep_ms(32);
    let outcome = button.drag_ended(container, direction, clock.now_ms(), Point::new(30.0, 30.0));
    println!("  outcome {outcome:?}, resting at {:?}", button.anchor());
}
