//! Session workflow integration tests: the host-UI driving pattern.

use sigtrace_dsp::Session;
use sigtrace_spec::{FilterParams, NoiseParams, PipelineParams, SignalParams};

#[test]
fn test_slider_change_recompute_cycle() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();
    let initial = session.recompute().unwrap();

    // Host reacts to an amplitude slider change with one full recompute.
    session.set_signal(SignalParams {
        amplitude: 5.0,
        frequency: 1.0,
        phase: 0.0,
    });
    let updated = session.recompute().unwrap();

    assert_eq!(initial.len(), updated.len());
    assert_ne!(initial.clean, updated.clean);

    // The cached noise is untouched by harmonic changes.
    for i in 0..initial.len() {
        let before = initial.noisy[i] - initial.clean[i];
        let after = updated.noisy[i] - updated.clean[i];
        assert!((before - after).abs() < 1e-12);
    }
}

#[test]
fn test_show_noise_toggle() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();

    session.set_show_noise(false);
    let hidden = session.recompute().unwrap();
    assert_eq!(hidden.noisy, hidden.clean);

    session.set_show_noise(true);
    let shown = session.recompute().unwrap();
    assert_ne!(shown.noisy, shown.clean);
}

#[test]
fn test_regenerate_button() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();
    let before = session.recompute().unwrap();

    session.regenerate_noise().unwrap();
    let after = session.recompute().unwrap();

    assert_eq!(before.clean, after.clean);
    assert_ne!(before.noisy, after.noisy);
}

#[test]
fn test_noise_slider_change_redraws_sample() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();
    let before = session.noise().clone();

    session
        .set_noise(NoiseParams {
            mean: 0.5,
            std_dev: 0.2,
        })
        .unwrap();

    assert_ne!(session.noise(), &before);
    assert_eq!(session.noise_params().mean, 0.5);
}

#[test]
fn test_filter_switch_mid_session() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();
    let butter = session.recompute().unwrap();

    session.set_filter(FilterParams::MovingAverage { window_size: 5 });
    let averaged = session.recompute().unwrap();

    // Same noisy input, different smoother.
    assert_eq!(butter.noisy, averaged.noisy);
    assert_ne!(butter.filtered, averaged.filtered);
}

#[test]
fn test_randomize_then_reset_round_trip() {
    let mut session = Session::new(&PipelineParams::default(), 42).unwrap();

    session.randomize().unwrap();
    assert_ne!(session.signal(), SignalParams::default());

    session.reset().unwrap();
    assert_eq!(session.signal(), SignalParams::default());
    assert_eq!(session.noise_params(), NoiseParams::default());
    assert!(session.show_noise());

    // The session still recomputes cleanly after the round trip.
    let traces = session.recompute().unwrap();
    assert_eq!(traces.len(), 1000);
}

#[test]
fn test_sessions_with_same_seed_agree() {
    let mut a = Session::new(&PipelineParams::default(), 42).unwrap();
    let mut b = Session::new(&PipelineParams::default(), 42).unwrap();

    assert_eq!(a.recompute().unwrap(), b.recompute().unwrap());

    a.regenerate_noise().unwrap();
    b.regenerate_noise().unwrap();
    assert_eq!(a.recompute().unwrap(), b.recompute().unwrap());

    a.randomize().unwrap();
    b.randomize().unwrap();
    assert_eq!(a.signal(), b.signal());
    assert_eq!(a.recompute().unwrap(), b.recompute().unwrap());
}
