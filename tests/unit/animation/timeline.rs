use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn cue_samples_linear_midpoint_and_clamps_after_end() {
    let cue = Cue::new(Channel::TooltipOpacity, 0.0, 1.0, ms(100), Ease::Linear).delayed(ms(50));
    assert_eq!(cue.sample(ms(0)), 0.0);
    assert_eq!(cue.sample(ms(50)), 0.0);
    assert!((cue.sample(ms(100)) - 0.5).abs() < 1e-9);
    assert_eq!(cue.sample(ms(500)), 1.0);
    assert_eq!(cue.end(), ms(150));
}

#[test]
fn zero_duration_cue_jumps_at_start() {
    let cue = Cue::new(Channel::MaskMorph, 0.0, 1.0, Duration::ZERO, Ease::Linear).delayed(ms(10));
    assert_eq!(cue.sample(ms(9)), 0.0);
    assert_eq!(cue.sample(ms(10)), 1.0);
}

#[test]
fn then_after_chains_on_dependency_end() {
    let tl = Timeline::new()
        .with(Cue::new(Channel::MaskMorph, 0.0, 1.0, ms(400), Ease::Linear))
        .then_after(
            Channel::MaskMorph,
            Cue::new(Channel::TooltipOpacity, 0.0, 1.0, ms(200), Ease::Linear),
        );
    let opacity = tl
        .cues()
        .iter()
        .find(|c| c.channel == Channel::TooltipOpacity)
        .unwrap();
    assert_eq!(opacity.delay, ms(400));
    assert_eq!(tl.duration(), ms(600));
    assert_eq!(tl.sample(Channel::TooltipOpacity, ms(300)), Some(0.0));
    assert!(!tl.is_finished(ms(599)));
    assert!(tl.is_finished(ms(600)));
}

#[test]
fn then_after_without_dependency_keeps_delay() {
    let tl = Timeline::new().then_after(
        Channel::MaskMorph,
        Cue::new(Channel::TooltipOpacity, 0.0, 1.0, ms(10), Ease::Linear).delayed(ms(5)),
    );
    assert_eq!(tl.cues()[0].delay, ms(5));
}

#[test]
fn undriven_channel_samples_none_and_empty_timeline_is_finished() {
    let tl = Timeline::new();
    assert!(tl.is_empty());
    assert!(tl.is_finished(Duration::ZERO));
    assert_eq!(tl.sample(Channel::MaskOpacity, ms(1)), None);
}

#[test]
fn cues_stay_sorted_by_start() {
    let tl = Timeline::new()
        .with(Cue::new(Channel::MaskMorph, 0.0, 1.0, ms(10), Ease::Linear).delayed(ms(30)))
        .with(Cue::new(Channel::MaskOpacity, 0.0, 1.0, ms(10), Ease::Linear));
    let starts: Vec<_> = tl.cues().iter().map(|c| c.delay).collect();
    assert_eq!(starts, vec![ms(0), ms(30)]);
}

#[test]
fn playback_is_anchored_to_start_time() {
    let tl = Timeline::new().with(Cue::new(
        Channel::TooltipTranslateY,
        10.0,
        20.0,
        ms(100),
        Ease::Linear,
    ));
    let pb = Playback::start(tl, ms(1_000));
    assert_eq!(pb.sample(Channel::TooltipTranslateY, ms(500)), Some(10.0));
    assert_eq!(pb.sample(Channel::TooltipTranslateY, ms(1_050)), Some(15.0));
    assert!(pb.is_finished(ms(1_100)));
}
