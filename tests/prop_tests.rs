//! Property tests for the clipping and sampling invariants.

use prismnet::net::{CutSpec, NetParams, compute_net};
use proptest::prelude::*;

proptest! {
    /// After clipping, every cut-line sample lies inside [0, height], no
    /// matter how steep the cut or how far out of range its start height.
    #[test]
    fn cut_lines_respect_height_bounds(
        major in 0.5f64..40.0,
        minor in 0.5f64..40.0,
        height in 1.0f64..60.0,
        angle1 in -89.0f64..89.0,
        angle2 in -89.0f64..89.0,
        start1 in -100.0f64..100.0,
        start2 in -100.0f64..100.0,
    ) {
        let params = NetParams::new(
            major,
            minor,
            height,
            CutSpec::new(angle1, start1),
            CutSpec::new(angle2, start2),
        );
        let net = compute_net(&params).unwrap();

        for point in net.cut1.iter().chain(net.cut2.iter()) {
            prop_assert!(point.y >= 0.0 && point.y <= height,
                "y = {} escaped [0, {}]", point.y, height);
        }
    }

    /// The arc-length samples always start at 0, end at the perimeter, and
    /// increase strictly.
    #[test]
    fn samples_are_strictly_increasing(
        major in 0.5f64..40.0,
        minor in 0.5f64..40.0,
        samples in 2usize..512,
    ) {
        let mut params = NetParams::new(
            major,
            minor,
            10.0,
            CutSpec::new(30.0, 2.0),
            CutSpec::new(-30.0, 1.0),
        );
        params.samples = samples;
        let net = compute_net(&params).unwrap();

        prop_assert!(net.perimeter > 0.0);
        prop_assert_eq!(net.samples[0], 0.0);
        prop_assert_eq!(*net.samples.last().unwrap(), net.perimeter);
        for pair in net.samples.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert_eq!(net.cut1.len(), samples);
        prop_assert_eq!(net.cut2.len(), samples);
    }
}
