//! End-to-end checks of the design pipeline and the streaming filter.

use approx::assert_abs_diff_eq;
use butterworth_iir::design::prototype::butterworth_order;
use butterworth_iir::{
    create_online_filter, design_filter, design_filter_zpk, BandType, DesignError, FilterSpec,
};

/// Allowed slack at the band edges, in dB
const EDGE_SLACK_DB: f64 = 1e-6;

fn spec_grid() -> Vec<FilterSpec> {
    let mut specs = Vec::new();
    for ripple in [0.5, 1.0, 3.0] {
        for attenuation in [20.0, 40.0, 60.0] {
            for (pass, stop) in [(0.1, 0.2), (0.2, 0.3), (0.05, 0.15), (0.3, 0.45)] {
                specs.push(FilterSpec::lowpass(pass, stop, ripple, attenuation).unwrap());
                specs.push(FilterSpec::highpass(stop, pass, ripple, attenuation).unwrap());
            }
        }
        for attenuation in [20.0, 40.0] {
            for (pass, stop) in [
                ((0.2, 0.3), (0.1, 0.4)),
                ((0.15, 0.25), (0.05, 0.35)),
                ((0.25, 0.3), (0.15, 0.4)),
            ] {
                specs.push(FilterSpec::bandpass(pass, stop, ripple, attenuation).unwrap());
                specs.push(FilterSpec::bandstop(stop, pass, ripple, attenuation).unwrap());
            }
        }
    }
    specs
}

#[test]
fn reference_lowpass_stream() {
    let spec = FilterSpec::lowpass(2000.0 / 20000.0, 2500.0 / 20000.0, 5.0, 6.0).unwrap();
    let tf = design_filter(&spec, 1.0 / 20000.0).unwrap();

    assert_abs_diff_eq!(tf.numerator()[0], 0.09723679451225617, epsilon = 1e-15);
    assert_abs_diff_eq!(tf.numerator()[1], 0.09723679451225617, epsilon = 1e-15);
    assert_abs_diff_eq!(tf.denominator()[1], -0.8055264109754877, epsilon = 1e-15);

    let mut filter = create_online_filter(tf);
    let input = [0.228897927516298, -2.619954349660920, -17.502123684467897];
    let expected = [0.022257300742183576, -0.21456981840243389, -2.1294480226855419];
    for (x, y) in input.into_iter().zip(expected) {
        assert_abs_diff_eq!(filter.process_sample(x), y, epsilon = 1e-14);
    }
}

#[test]
fn designs_are_stable() {
    for spec in spec_grid() {
        let zpk = design_filter_zpk(&spec, 1.0).unwrap();
        assert!(zpk.is_stable(), "unstable design for {:?}", spec);
    }
}

#[test]
fn designs_meet_edge_requirements() {
    for spec in spec_grid() {
        let tf = design_filter(&spec, 1.0).unwrap();
        for f in spec.passband().to_vec() {
            let gain = tf.gain_db(f);
            assert!(
                gain >= -spec.ripple_db() - EDGE_SLACK_DB,
                "passband edge {} at {} dB for {:?}",
                f,
                gain,
                spec
            );
        }
        for f in spec.stopband().to_vec() {
            let gain = tf.gain_db(f);
            assert!(
                gain <= -spec.attenuation_db() + EDGE_SLACK_DB,
                "stopband edge {} at {} dB for {:?}",
                f,
                gain,
                spec
            );
        }
    }
}

#[test]
fn coefficients_are_normalized() {
    for spec in spec_grid() {
        let tf = design_filter(&spec, 1.0).unwrap();
        assert_eq!(tf.denominator()[0], 1.0);
        assert_eq!(tf.numerator().len(), tf.denominator().len());
        assert!(tf.numerator().iter().chain(tf.denominator()).all(|c| c.is_finite()));
    }
}

#[test]
fn band_forms_double_the_prototype_order() {
    for spec in spec_grid() {
        let prototype = butterworth_order(&spec).unwrap();
        let tf = design_filter(&spec, 1.0).unwrap();
        assert_eq!(tf.order(), spec.band().realized_order(prototype.order));
        if spec.band().is_band() {
            assert_eq!(tf.order(), 2 * prototype.order);
        }
    }
}

#[test]
fn order_grows_with_attenuation() {
    let mut previous = 0;
    for attenuation in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0] {
        let spec = FilterSpec::bandpass((0.2, 0.3), (0.1, 0.4), 1.0, attenuation).unwrap();
        let order = butterworth_order(&spec).unwrap().order;
        assert!(order >= previous);
        previous = order;
    }
}

#[test]
fn order_shrinks_with_ripple() {
    let mut previous = usize::MAX;
    for ripple in [0.1, 0.5, 1.0, 2.0, 3.0, 6.0] {
        let spec = FilterSpec::lowpass(0.1, 0.2, ripple, 40.0).unwrap();
        let order = butterworth_order(&spec).unwrap().order;
        assert!(order <= previous);
        previous = order;
    }
}

#[test]
fn reference_band_gains() {
    let lowpass = design_filter(&FilterSpec::lowpass(0.1, 0.2, 1.0, 40.0).unwrap(), 1.0).unwrap();
    assert_abs_diff_eq!(lowpass.gain_db(0.0), 0.0, epsilon = 1e-6);

    let highpass = design_filter(&FilterSpec::highpass(0.2, 0.1, 1.0, 40.0).unwrap(), 1.0).unwrap();
    assert_abs_diff_eq!(highpass.frequency_response(1.0).norm(), 1.0, epsilon = 1e-9);

    let bandstop =
        design_filter(&FilterSpec::bandstop((0.1, 0.4), (0.2, 0.3), 3.0, 40.0).unwrap(), 1.0).unwrap();
    assert_abs_diff_eq!(bandstop.gain_db(0.0), 0.0, epsilon = 1e-6);
    assert!(bandstop.gain_db(0.25) < -40.0);
}

#[test]
fn repeated_designs_are_identical() {
    let spec = FilterSpec::bandstop((0.1, 0.4), (0.2, 0.3), 3.0, 40.0).unwrap();
    let first = design_filter(&spec, 1.0).unwrap();
    let second = design_filter(&spec, 1.0).unwrap();
    assert_eq!(first, second);

    let mut a = create_online_filter(first);
    let mut b = create_online_filter(second);
    for n in 0..256 {
        let x = ((n * 7919) % 97) as f64 / 48.5 - 1.0;
        assert_eq!(a.process_sample(x).to_bits(), b.process_sample(x).to_bits());
    }
}

#[test]
fn streaming_lowpass_blocks_stopband_tone() {
    let spec = FilterSpec::lowpass(0.1, 0.2, 1.0, 40.0).unwrap();
    let mut filter = create_online_filter(design_filter(&spec, 1.0).unwrap());

    // Tone at f = 0.3 (z = exp(i * 0.3 * pi)), well into the stopband
    let omega = 0.3 * std::f64::consts::PI;
    let outputs: Vec<f64> = (0..2000)
        .map(|n| filter.process_sample((omega * n as f64).sin()))
        .collect();
    let peak = outputs[1000..].iter().fold(0.0_f64, |m, y| m.max(y.abs()));
    assert!(peak < 0.01, "stopband tone leaked with amplitude {}", peak);
}

#[test]
fn invalid_specifications_are_rejected() {
    assert!(matches!(
        FilterSpec::lowpass(0.3, 0.2, 3.0, 40.0),
        Err(DesignError::InvalidSpecification(_))
    ));
    assert!(FilterSpec::highpass(0.2, 0.3, 3.0, 40.0).is_err());
    assert!(FilterSpec::bandpass((0.1, 0.4), (0.2, 0.3), 3.0, 40.0).is_err());
    assert!(FilterSpec::bandstop((0.2, 0.3), (0.1, 0.4), 3.0, 40.0).is_err());
    assert!(FilterSpec::lowpass(0.1, 0.6, 3.0, 40.0).is_err());
    assert!(FilterSpec::lowpass(0.1, 0.2, 40.0, 3.0).is_err());
    assert!(FilterSpec::lowpass(0.1, 0.2, 0.0, 40.0).is_err());
}

#[test]
fn band_type_round_trips_through_spec() {
    let spec = FilterSpec::bandpass((0.2, 0.3), (0.1, 0.4), 3.0, 40.0).unwrap();
    assert_eq!(spec.band(), BandType::Bandpass);
    assert_eq!(spec.passband().pair(), Some((0.2, 0.3)));
}
