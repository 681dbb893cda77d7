use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use scrollkit::{Color, Environment, Point, RefreshConfig, Size, Viewport, ViewportConfiguration};
use scrollkit_adapter::{ScrollHost, SimulatedViewport};

fn main() {
    // Example: a feed whose refresh state is owned by the caller's model.
    let loading = Arc::new(AtomicBool::new(false));
    let viewport = SimulatedViewport::new(Size::new(320.0, 640.0), Size::new(320.0, 3000.0));
    let mut host = ScrollHost::new(viewport, Environment::default());

    let snapshot = |refreshing: bool| {
        let flag = Arc::clone(&loading);
        ViewportConfiguration::default().with_refresh(Some(
            RefreshConfig::new()
                .with_on_refresh(move || flag.store(true, Ordering::SeqCst))
                .with_is_refreshing(refreshing)
                .with_tint(Some(Color::rgb(0.2, 0.4, 0.9))),
        ))
    };

    host.update(snapshot(false));
    host.viewport_mut().set_content_offset(Point::new(0.0, 400.0), false);

    // The model starts a reload on its own: the affordance slides into view.
    host.update(snapshot(true));
    host.viewport_mut().finish_animations();
    println!("programmatic: offset={:?}", host.viewport().content_offset());
    host.update(snapshot(false));
    host.viewport_mut().finish_animations();
    println!("finished: offset={:?}", host.viewport().content_offset());

    // The user pulls: the refresh action runs and the offset is left to the gesture.
    host.on_user_pull();
    println!("user pull: loading={}", loading.load(Ordering::SeqCst));
    host.on_refresh_finished();
    println!("refreshing={}", host.is_refreshing());
}
