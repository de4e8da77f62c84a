use super::*;

#[test]
fn layout_slot_reports_none_until_first_layout() {
    let slot = Rc::new(LayoutSlot::new());
    let step = Step::new(1, "hello", slot.clone());
    assert!(step.measure().is_none());
    slot.set(Layout::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(step.measure(), Some(Layout::new(1.0, 2.0, 3.0, 4.0)));
    slot.clear();
    assert!(step.measure().is_none());
}

#[test]
fn non_finite_measurements_are_dropped() {
    let step = Step::at(1, "x", Layout::new(f64::NAN, 0.0, 10.0, 10.0));
    assert!(step.measure().is_none());
}

#[test]
fn builder_defaults_to_default_tour_and_order_name() {
    let step = Step::at(3, "third", Layout::default());
    assert_eq!(step.name, "3");
    assert!(step.tour_key.is_default());
    let renamed = step.named("intro").in_tour("onboarding");
    assert_eq!(renamed.name, "intro");
    assert_eq!(renamed.tour_key.as_str(), "onboarding");
}

#[test]
fn equality_uses_target_identity() {
    let target: Rc<dyn Measurable> = Rc::new(FixedTarget(Layout::default()));
    let a = Step::new(1, "a", target.clone());
    let b = Step::new(1, "b", target);
    let c = Step::at(1, "a", Layout::default());
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn hole_falls_back_to_provider_values() {
    let style = StepStyle::default();
    let hole = style.hole(Point::new(1.0, 2.0), Size::new(3.0, 4.0), Some(MaskOffset::Uniform(5.0)), Some(6.0));
    assert_eq!(hole.mask_offset, MaskOffset::Uniform(5.0));
    assert_eq!(hole.border_radius, 6.0);

    let own = StepStyle {
        mask_offset: Some(MaskOffset::Uniform(1.0)),
        border_radius: Some(0.0),
        ..StepStyle::default()
    };
    let hole = own.hole(Point::ZERO, Size::ZERO, Some(MaskOffset::Uniform(5.0)), Some(6.0));
    assert_eq!(hole.mask_offset, MaskOffset::Uniform(1.0));
    assert_eq!(hole.border_radius, 0.0);
}

#[test]
fn style_parses_from_json() {
    let style: StepStyle = serde_json::from_str(
        r#"{"shape":"circle_keep","tooltip_position":"auto","mask_offset":8,"keep_tooltip_position":true}"#,
    )
    .unwrap();
    assert_eq!(style.shape, Shape::CircleAndKeep);
    assert_eq!(style.tooltip_position, TooltipPosition::Auto);
    assert_eq!(style.mask_offset, Some(MaskOffset::Uniform(8.0)));
    assert!(style.keep_tooltip_position);
    assert!(style.validate().is_ok());
}

#[test]
fn style_validation_rejects_non_finite_offsets() {
    let style = StepStyle {
        tooltip_left_offset: Some(f64::INFINITY),
        ..StepStyle::default()
    };
    assert!(matches!(style.validate(), Err(TourError::Validation(_))));
    let radii = StepStyle {
        corner_radii: Some(CornerRadii {
            top_left: Some(-2.0),
            ..CornerRadii::default()
        }),
        ..StepStyle::default()
    };
    assert!(radii.validate().is_err());
}
