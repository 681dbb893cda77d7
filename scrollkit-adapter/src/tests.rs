use crate::*;

use scrollkit::{
    Alignment, ContentOffset, Environment, OffsetBehavior, OffsetBinding, Point, ResizeTrigger,
    Size, ViewportConfiguration, Viewport,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn phone() -> SimulatedViewport {
    SimulatedViewport::new(Size::new(320.0, 480.0), Size::new(320.0, 1000.0))
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(Point::ZERO, Point::new(0.0, 100.0), 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), Point::new(0.0, 50.0));
    assert!(!t.is_done(99));
    assert_eq!(t.sample(100), Point::new(0.0, 100.0));
    assert!(t.is_done(100));

    let mut last = 0.0;
    let s = Tween::new(Point::ZERO, Point::new(0.0, 100.0), 0, 100, Easing::EaseInOutCubic);
    for now_ms in [0u64, 10, 25, 50, 75, 90, 100] {
        let y = s.sample(now_ms).y;
        assert!(y >= last);
        last = y;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn simulated_viewport_animates_offset_writes() {
    let mut v = phone().with_animation(100, Easing::Linear);
    v.set_content_offset(Point::new(0.0, 500.0), true);
    assert!(v.is_scrolling());
    assert_eq!(v.content_offset(), Point::ZERO);
    assert_eq!(v.target_offset(), Point::new(0.0, 500.0));

    assert_eq!(v.tick(50), Some(Point::new(0.0, 250.0)));
    assert_eq!(v.tick(100), Some(Point::new(0.0, 500.0)));
    assert!(!v.is_scrolling());
    assert_eq!(v.tick(120), None);

    v.set_content_offset(Point::new(0.0, 10.0), false);
    assert_eq!(v.content_offset(), Point::new(0.0, 10.0));
    assert!(!v.is_animating());
}

#[test]
fn drag_cancels_animation_and_counts_as_scrolling() {
    let mut v = phone().with_animation(100, Easing::Linear);
    v.set_content_offset(Point::new(0.0, 500.0), true);
    v.drag_to(Point::new(0.0, 40.0));
    assert!(!v.is_animating());
    assert!(v.is_scrolling());
    assert_eq!(v.content_offset(), Point::new(0.0, 40.0));
    v.end_drag();
    assert!(!v.is_scrolling());
}

#[test]
fn offset_binding_round_trips_through_the_host() {
    let stored = Arc::new(Mutex::new(Point::ZERO));
    let binding = {
        let get = Arc::clone(&stored);
        let set = Arc::clone(&stored);
        OffsetBinding::new(
            move || *get.lock().unwrap(),
            move |p| *set.lock().unwrap() = p,
        )
    };
    let config = ViewportConfiguration::default().with_content_offset(Some(binding));

    let mut host = ScrollHost::new(
        phone().with_animation(0, Easing::Linear),
        Environment::default(),
    );
    host.update(config.clone());
    assert_eq!(host.viewport().content_offset(), Point::ZERO);

    *stored.lock().unwrap() = Point::new(0.0, 300.0);
    assert_eq!(host.update(config.clone()), 1);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 300.0));

    host.viewport_mut().drag_to(Point::new(0.0, 420.0));
    host.on_user_scroll(Point::new(0.0, 420.0));
    assert_eq!(*stored.lock().unwrap(), Point::new(0.0, 420.0));

    assert_eq!(host.update(config), 0);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 420.0));
}

#[test]
fn user_scroll_reports_offset_with_geometry() {
    let seen = Arc::new(Mutex::new(Vec::<ContentOffset>::new()));
    let sink = Arc::clone(&seen);
    let config = ViewportConfiguration::default()
        .with_on_offset_change(Some(move |o: ContentOffset| sink.lock().unwrap().push(o)));

    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(config);
    host.viewport_mut().drag_to(Point::new(0.0, 260.0));
    host.on_user_scroll(Point::new(0.0, 260.0));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].offset, Point::new(0.0, 260.0));
    assert_eq!(seen[0].content_size, Size::new(320.0, 1000.0));
    assert_eq!(seen[0].container_size, Size::new(320.0, 480.0));
    assert_eq!(seen[0].relative(), Point::new(0.0, 0.5));
}

#[test]
fn first_update_applies_initial_zoom_and_alignment() {
    let ended = Arc::new(Mutex::new(None::<f64>));
    let sink = Arc::clone(&ended);
    let config = ViewportConfiguration::default()
        .with_zoom_scale(1.0, 3.0)
        .with_initial_zoom_scale(2.0)
        .with_initial_content_alignment(Some(Alignment::BOTTOM))
        .with_on_zoom_end(Some(move |s: f64| *sink.lock().unwrap() = Some(s)));

    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(config.clone());
    assert_eq!(host.viewport().zoom_scale(), 2.0);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 520.0));

    host.viewport_mut().drag_to(Point::new(0.0, 100.0));
    host.update(config);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 100.0));

    host.on_zoom_end(2.5);
    assert_eq!(*ended.lock().unwrap(), Some(2.5));
}

#[test]
fn chat_sticks_to_bottom_as_messages_arrive() {
    let config = ViewportConfiguration::default()
        .with_initial_content_alignment(Some(Alignment::BOTTOM))
        .with_offset_behavior(OffsetBehavior::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE);

    let mut host = ScrollHost::new(
        phone().with_animation(0, Easing::Linear),
        Environment::default(),
    );
    host.update(config);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 520.0));

    host.mutate_content(true, |v| v.set_content_size(Size::new(320.0, 1300.0)));
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 820.0));

    // Reading history: new messages leave the offset alone.
    host.viewport_mut().drag_to(Point::new(0.0, 300.0));
    host.viewport_mut().end_drag();
    host.mutate_content(true, |v| v.set_content_size(Size::new(320.0, 1500.0)));
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 300.0));
}

#[test]
fn maintain_freezes_running_animation_before_shifting() {
    let config = ViewportConfiguration::default()
        .with_offset_behavior(OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE);
    let mut host = ScrollHost::new(
        phone().with_animation(100, Easing::Linear),
        Environment::default(),
    );
    host.update(config);

    host.viewport_mut().set_content_offset(Point::new(0.0, 400.0), true);
    host.viewport_mut().tick(50);
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 200.0));

    host.mutate_content(false, |v| v.set_content_size(Size::new(320.0, 1150.0)));
    assert!(!host.viewport().is_animating());
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 350.0));
}

#[test]
fn keyboard_frame_change_keeps_bottom_anchor() {
    let config = ViewportConfiguration::default()
        .with_initial_content_alignment(Some(Alignment::BOTTOM))
        .with_offset_behavior(OffsetBehavior::MAINTAIN_ON_KEYBOARD_FRAME_CHANGE);
    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(config);

    host.resize(ResizeTrigger::KeyboardFrame, false, |v| {
        v.set_bounds_size(Size::new(320.0, 180.0))
    });
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 820.0));

    // Bounds changes are not covered by the keyboard flag.
    host.resize(ResizeTrigger::Bounds, false, |v| {
        v.set_bounds_size(Size::new(320.0, 480.0))
    });
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 820.0));
}

#[test]
fn programmatic_refresh_reveals_affordance_and_restores_offset() {
    let viewport = SimulatedViewport::new(Size::new(320.0, 480.0), Size::new(320.0, 2000.0))
        .with_animation(100, Easing::Linear)
        .with_refresh_control_height(60.0);
    let mut host = ScrollHost::new(viewport, Environment::default());
    host.viewport_mut().set_content_offset(Point::new(0.0, 200.0), false);

    let base = ViewportConfiguration::default();
    host.update(base.clone().with_is_refreshing(true));
    assert!(host.is_refreshing());
    assert!(host.viewport().is_refresh_control_attached());
    assert!(host.viewport().is_refresh_control_animating());
    assert!(host.viewport().always_bounce_vertical());
    host.viewport_mut().finish_animations();
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 140.0));

    host.update(base.with_is_refreshing(false));
    assert!(!host.is_refreshing());
    assert!(!host.viewport().is_refresh_control_animating());
    host.viewport_mut().finish_animations();
    assert_eq!(host.viewport().content_offset(), Point::new(0.0, 200.0));
}

#[test]
fn user_pull_runs_refresh_action_once_per_cycle() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config = ViewportConfiguration::default().with_on_refresh(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(config);
    assert!(host.on_user_pull());
    assert!(!host.on_user_pull());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(host.on_refresh_finished());
    assert!(!host.is_refreshing());
    assert!(!host.on_refresh_finished());
    assert_eq!(host.viewport().content_offset(), Point::ZERO);

    assert!(host.on_user_pull());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn environment_can_disable_scrolling() {
    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(ViewportConfiguration::default());
    assert!(host.viewport().is_scroll_enabled());

    assert!(host.set_environment(Environment::default().with_scroll_enabled(false)) > 0);
    assert!(!host.viewport().is_scroll_enabled());
    assert!(!host.configuration().is_scroll_enabled);

    host.set_environment(Environment::default());
    assert!(host.viewport().is_scroll_enabled());
}

#[test]
fn into_viewport_detaches_refresh_control() {
    let mut host = ScrollHost::new(phone(), Environment::default());
    host.update(ViewportConfiguration::default().with_on_refresh(|| {}));
    assert!(host.viewport().is_refresh_control_attached());

    let v = host.into_viewport();
    assert!(!v.is_refresh_control_attached());
}

#[test]
fn repeated_updates_keep_an_explicit_vertical_bounce() {
    let config = ViewportConfiguration::default()
        .with_always_bounce(None, Some(false))
        .with_on_refresh(|| {});

    let mut host = ScrollHost::new(phone(), Environment::default());
    assert_eq!(host.update(config.clone()), 1);
    assert_eq!(host.update(config.clone()), 0);
    assert_eq!(host.update(config), 0);
    assert!(!host.viewport().always_bounce_vertical());
    assert!(host.viewport().is_refresh_control_attached());
}
