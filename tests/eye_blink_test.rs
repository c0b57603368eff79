//! Integration tests driving whole blink cycles frame by frame

use eye_blink::clock::{ManualClock, TimeSource};
use eye_blink::parameter::{ParameterMap, ParameterSink};
use eye_blink::random::FixedSequence;
use eye_blink::units::Milliseconds;
use eye_blink::{BlinkConfig, BlinkError, EyeBlink, EyeState};

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(String, f32)>,
}

impl ParameterSink for RecordingSink {
    fn set_param_float(&mut self, id: &str, value: f32) -> Result<(), BlinkError> {
        self.writes.push((id.to_string(), value));
        Ok(())
    }
}

fn enabled_blink(draws: &[f64]) -> EyeBlink {
    let mut blink = EyeBlink::with_config(BlinkConfig::default(), FixedSequence::new(draws)).unwrap();
    blink.set_enabled(true);
    blink
}

#[test]
fn test_disabled_never_writes() {
    let mut blink = EyeBlink::new();
    let mut sink = RecordingSink::default();
    for frame in 0..100 {
        let result = blink.update(Milliseconds(frame * 16), &mut sink).unwrap();
        assert_eq!(result, None);
    }
    assert!(sink.writes.is_empty());
    assert_eq!(blink.state(), EyeState::Seed);
}

#[test]
fn test_first_update_opens_both_eyes() {
    let mut blink = enabled_blink(&[0.5]);
    let mut sink = RecordingSink::default();
    assert_eq!(blink.update(Milliseconds(1000), &mut sink).unwrap(), Some(1.0));
    assert_eq!(blink.state(), EyeState::Interval);
    assert_eq!(
        sink.writes,
        vec![
            ("PARAM_EYE_L_OPEN".to_string(), 1.0),
            ("PARAM_EYE_R_OPEN".to_string(), 1.0)
        ]
    );
}

#[test]
fn test_full_cycle() {
    let mut blink = enabled_blink(&[0.0, 0.5]);
    let mut sink = RecordingSink::default();

    blink.update(Milliseconds(1000), &mut sink).unwrap();
    assert_eq!(blink.next_blink_time(), Milliseconds(1000));

    // blink is due: still open this frame, closing from now
    assert_eq!(blink.update(Milliseconds(1016), &mut sink).unwrap(), Some(1.0));
    assert_eq!(blink.state(), EyeState::Closing);
    assert_eq!(blink.state_start_time(), Milliseconds(1016));

    let half = blink.update(Milliseconds(1066), &mut sink).unwrap().unwrap();
    assert!((half - 0.5).abs() < 1e-6);
    assert_eq!(blink.state(), EyeState::Closing);

    assert_eq!(blink.update(Milliseconds(1116), &mut sink).unwrap(), Some(0.0));
    assert_eq!(blink.state(), EyeState::Closed);

    assert_eq!(blink.update(Milliseconds(1140), &mut sink).unwrap(), Some(0.0));
    assert_eq!(blink.state(), EyeState::Closed);

    assert_eq!(blink.update(Milliseconds(1166), &mut sink).unwrap(), Some(0.0));
    assert_eq!(blink.state(), EyeState::Opening);

    let third = blink.update(Milliseconds(1216), &mut sink).unwrap().unwrap();
    assert!((third - 1.0 / 3.0).abs() < 1e-6);

    assert_eq!(blink.update(Milliseconds(1316), &mut sink).unwrap(), Some(1.0));
    assert_eq!(blink.state(), EyeState::Interval);
    assert_eq!(blink.next_blink_time(), Milliseconds(1316 + 3999));
    assert!(blink.next_blink_time() > Milliseconds(1316));

    let left: Vec<f32> = sink
        .writes
        .iter()
        .filter(|(id, _)| id == "PARAM_EYE_L_OPEN")
        .map(|(_, value)| *value)
        .collect();
    let right: Vec<f32> = sink
        .writes
        .iter()
        .filter(|(id, _)| id == "PARAM_EYE_R_OPEN")
        .map(|(_, value)| *value)
        .collect();
    assert_eq!(left, right);
    assert_eq!(left.len(), 8);
}

#[test]
fn test_reenable_reseeds() {
    let mut blink = enabled_blink(&[0.0]);
    let mut sink = RecordingSink::default();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    blink.update(Milliseconds(10), &mut sink).unwrap();
    blink.update(Milliseconds(110), &mut sink).unwrap();
    assert_eq!(blink.state(), EyeState::Closed);

    blink.set_enabled(false);
    assert_eq!(blink.state(), EyeState::Closed);
    blink.set_enabled(true);
    assert_eq!(blink.state(), EyeState::Seed);

    assert_eq!(blink.update(Milliseconds(120), &mut sink).unwrap(), Some(1.0));
    assert_eq!(blink.state(), EyeState::Interval);
}

#[test]
fn test_enable_is_noop_when_unchanged() {
    let mut blink = enabled_blink(&[0.5]);
    let mut sink = RecordingSink::default();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    blink.set_enabled(true);
    assert_eq!(blink.state(), EyeState::Interval);
}

#[test]
fn test_closed_at_one_negates() {
    let times = [0, 10, 30, 60, 110, 130, 160, 200, 250, 310];
    let mut normal = enabled_blink(&[0.0, 0.9]);
    let config = BlinkConfig::default().closed_at_one();
    let mut inverted = EyeBlink::with_config(config, FixedSequence::new([0.0, 0.9])).unwrap();
    inverted.set_enabled(true);
    let mut sink = RecordingSink::default();
    for time in times {
        let a = normal.update(Milliseconds(time), &mut sink).unwrap().unwrap();
        let b = inverted.update(Milliseconds(time), &mut sink).unwrap().unwrap();
        assert_eq!(a, -b, "at {time}ms");
        assert_eq!(normal.state(), inverted.state());
    }
}

#[test]
fn test_repeated_time_is_idempotent() {
    let mut blink = enabled_blink(&[0.5]);
    let mut sink = RecordingSink::default();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    let due = *blink.next_blink_time();
    blink.update(Milliseconds(due), &mut sink).unwrap();
    let time = Milliseconds(due + 40);
    let first = blink.update(time, &mut sink).unwrap();
    let phase = blink.phase();
    let second = blink.update(time, &mut sink).unwrap();
    assert_eq!(first, second);
    assert_eq!(phase, blink.phase());
}

#[test]
fn test_interval_change_applies_to_next_schedule() {
    let mut blink = enabled_blink(&[0.5]);
    let mut sink = RecordingSink::default();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    assert_eq!(blink.next_blink_time(), Milliseconds(3999));
    blink.set_interval(Milliseconds(1000)).unwrap();
    assert_eq!(blink.next_blink_time(), Milliseconds(3999));
    blink.set_enabled(false);
    blink.set_enabled(true);
    blink.update(Milliseconds(0), &mut sink).unwrap();
    assert_eq!(blink.next_blink_time(), Milliseconds(999));
}

#[test]
fn test_eye_motion_change() {
    let mut blink = enabled_blink(&[0.0]);
    blink.set_eye_motion(Milliseconds(200), Milliseconds(10), Milliseconds(20));
    let mut sink = RecordingSink::default();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    blink.update(Milliseconds(0), &mut sink).unwrap();
    assert_eq!(blink.state(), EyeState::Closing);
    let value = blink.update(Milliseconds(50), &mut sink).unwrap().unwrap();
    assert!((value - 0.75).abs() < 1e-6);
}

#[test]
fn test_unknown_parameter_propagates() {
    let config = BlinkConfig::default().eye_ids("PARAM_EYE_L_OPEN", "PARAM_EYE_MISSING");
    let mut blink = EyeBlink::with_config(config, FixedSequence::new([0.5])).unwrap();
    blink.set_enabled(true);
    let mut model = ParameterMap::with_parameters(["PARAM_EYE_L_OPEN"], 0.0);
    let result = blink.update(Milliseconds(0), &mut model);
    assert_eq!(
        result,
        Err(BlinkError::UnknownParameter("PARAM_EYE_MISSING".to_string()))
    );
    assert_eq!(model.get("PARAM_EYE_L_OPEN"), Some(1.0));
}

#[test]
fn test_update_param_reads_clock() {
    let mut blink = enabled_blink(&[0.0]);
    let clock = ManualClock::starting_at(Milliseconds(500));
    let mut model = ParameterMap::with_parameters(["PARAM_EYE_L_OPEN", "PARAM_EYE_R_OPEN"], 0.0);
    blink.update_param(&clock, &mut model).unwrap();
    assert_eq!(blink.next_blink_time(), clock.now());
    clock.advance(Milliseconds(16));
    blink.update_param(&clock, &mut model).unwrap();
    assert_eq!(blink.state_start_time(), Milliseconds(516));
    assert_eq!(model.writes(), 4);
}

#[test]
fn test_controllers_are_independent() {
    let mut early = enabled_blink(&[0.0]);
    let mut late = enabled_blink(&[0.9]);
    let mut sink = RecordingSink::default();
    for time in [0, 16, 32] {
        early.update(Milliseconds(time), &mut sink).unwrap();
        late.update(Milliseconds(time), &mut sink).unwrap();
    }
    assert_eq!(early.state(), EyeState::Closing);
    assert_eq!(late.state(), EyeState::Interval);
}
