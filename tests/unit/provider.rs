use super::*;
use crate::foundation::config::StartAtMount;
use crate::tour::step::LayoutSlot;
use std::cell::RefCell;

const VIEWPORT: Size = Size::new(400.0, 800.0);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn guide(config: TourConfig) -> TourGuide {
    TourGuide::new(config, VIEWPORT).unwrap()
}

fn step(order: i32) -> Step {
    Step::at(order, "text", Layout::new(20.0, 40.0 * order as f64, 100.0, 30.0))
}

#[test]
fn invalid_config_is_rejected() {
    let config = TourConfig {
        backdrop_color: String::new(),
        ..TourConfig::default()
    };
    assert!(TourGuide::new(config, VIEWPORT).is_err());
}

#[test]
fn mount_starts_configured_tour() {
    let mut g = guide(TourConfig {
        start_at_mount: StartAtMount::Tour(TourKey::from("intro")),
        ..TourConfig::default()
    });
    g.controller("intro").register_step(step(1)).unwrap();
    g.mount();
    assert!(g.controller("intro").is_visible());
    assert!(!g.default_controller().is_visible());
}

#[test]
fn mount_without_flag_starts_nothing() {
    let mut g = guide(TourConfig::default());
    g.register_step(step(1)).unwrap();
    g.mount();
    assert!(g.tours().active_tour().is_none());
    assert!(g.tick(ms(16)).is_none());
}

#[test]
fn overlay_follows_current_step_and_reports_settled_once() {
    let mut g = guide(TourConfig::default());
    g.register_step(step(1)).unwrap();
    g.register_step(step(2)).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    g.default_controller().on(EventKind::Settled, move |e| {
        sink.borrow_mut().push(e.step().map(|s| s.name.clone()));
    });
    g.default_controller().start(None, None);

    let frame = g.tick(ms(0)).unwrap();
    assert_eq!(frame.step.as_deref(), Some("1"));
    for t in (16..=1600).step_by(16) {
        g.tick(ms(t));
    }
    assert_eq!(*seen.borrow(), vec![Some("1".to_owned())]);

    g.handle_next();
    let frame = g.tick(ms(1700)).unwrap();
    assert_eq!(frame.step.as_deref(), Some("2"));
    assert!(g.overlay().is_moving());
}

#[test]
fn unmeasured_target_is_polled() {
    let mut g = guide(TourConfig::default());
    let slot = Rc::new(LayoutSlot::new());
    g.register_step(Step::new(1, "late", slot.clone())).unwrap();
    g.default_controller().start(None, None);

    assert!(g.tick(ms(0)).is_none());
    assert!(g.tick(ms(16)).is_none());
    slot.set(Layout::new(10.0, 10.0, 40.0, 40.0));
    let frame = g.tick(ms(32)).unwrap();
    assert_eq!(frame.step.as_deref(), Some("1"));
}

#[test]
fn press_overlay_respects_dismiss_flag() {
    let mut g = guide(TourConfig::default());
    g.register_step(step(1)).unwrap();
    g.default_controller().start(None, None);
    assert!(!g.press_overlay());
    assert!(g.default_controller().is_visible());

    let mut g = guide(TourConfig {
        dismiss_on_press: true,
        ..TourConfig::default()
    });
    g.register_step(step(1)).unwrap();
    g.default_controller().start(None, None);
    g.tick(ms(0));
    assert!(g.press_overlay());
    assert!(!g.default_controller().is_visible());
    assert!(g.tick(ms(16)).is_none());
    assert!(!g.press_overlay());
}

#[test]
fn stop_button_hides_overlay() {
    let mut g = guide(TourConfig {
        prevent_outside_interaction: true,
        ..TourConfig::default()
    });
    g.register_step(step(1)).unwrap();
    g.default_controller().start(None, None);
    g.tick(ms(0));
    assert!(g.blocks_outside_interaction());
    g.handle_stop();
    assert!(!g.blocks_outside_interaction());
    assert!(g.default_controller().current_step().is_none());
    assert!(!g.overlay().is_moving());
}

#[test]
fn resize_remeasures_current_step() {
    let mut g = guide(TourConfig::default());
    g.register_step(step(1)).unwrap();
    g.default_controller().start(None, None);
    for t in (0..=1600).step_by(16) {
        g.tick(ms(t));
    }
    assert!(!g.overlay().is_moving());
    g.resize(Size::new(800.0, 600.0));
    let frame = g.tick(ms(1700)).unwrap();
    assert!(g.overlay().is_moving());
    assert!(frame.mask_path.as_str().starts_with("M0,0H800V600H0V0Z"));
}

#[test]
fn invalid_step_style_is_rejected() {
    let mut g = guide(TourConfig::default());
    let mut bad = step(1);
    bad.style.border_radius = Some(-1.0);
    assert!(g.register_step(bad).is_err());
    assert!(!g.default_controller().can_start());
}

#[test]
fn handle_scopes_registration_to_its_key() {
    let mut g = guide(TourConfig::default());
    let mut handle = g.controller("B");
    assert_eq!(handle.tour_key().as_str(), "B");
    handle.register_step(step(1)).unwrap();
    assert!(handle.can_start());
    handle.unregister_step("1");
    assert!(!handle.can_start());
    assert!(!g.default_controller().can_start());
}
