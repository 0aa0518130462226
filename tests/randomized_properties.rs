use std::f64::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unitcircle::lowlevel::{approximate, PRECISION};
use unitcircle::{DragMode, Handle, HandlePixel, Outcome, UnitCircle, WidgetConfig};

const DIAMETER: f64 = 400.0;

fn random_pixel(rng: &mut StdRng) -> HandlePixel {
    HandlePixel::new(
        rng.random_range(0.0..=DIAMETER),
        rng.random_range(0.0..=DIAMETER),
    )
}

fn random_handle(rng: &mut StdRng) -> Handle {
    match rng.random_range(0..3) {
        0 => Handle::AngleRay,
        1 => Handle::CosineMarker,
        _ => Handle::SineMarker,
    }
}

#[test]
fn random_sessions_keep_committed_triples_valid() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut w = UnitCircle::new(WidgetConfig {
        diameter: DIAMETER,
        initial_angle: rng.random_range(0.0..TAU),
    })
    .unwrap();

    for _ in 0..200 {
        w.pointer_down(random_handle(&mut rng));
        for _ in 0..25 {
            let outcome = w.pointer_move(random_pixel(&mut rng));
            let snap = w.snapshot();

            assert!((0.0..TAU).contains(&snap.angle), "angle {}", snap.angle);
            assert_eq!(snap.angle, approximate(snap.angle, PRECISION));
            assert!((-1.0..=1.0).contains(&snap.cosine));
            assert!((-1.0..=1.0).contains(&snap.sine));
            assert!((0.0..=DIAMETER).contains(&snap.handle.x));
            assert!((0.0..=DIAMETER).contains(&snap.handle.y));

            if let Outcome::Committed { mode, .. } = outcome {
                let sum = snap.cosine * snap.cosine + snap.sine * snap.sine;
                assert!((sum - 1.0).abs() < 1e-3, "{mode:?}: {sum}");
                match mode {
                    DragMode::DraggingCosine => {
                        assert!(snap.angle <= approximate(PI, PRECISION));
                    }
                    DragMode::DraggingSine => {
                        assert!(
                            snap.angle <= 0.5 * PI + 1e-4 || snap.angle >= 1.5 * PI - 1e-4
                        );
                    }
                    DragMode::DraggingAngle | DragMode::Idle => {}
                }
            }
        }
        if rng.random_bool(0.5) {
            w.pointer_up();
        } else {
            w.pointer_leave();
        }

        let idle = w.snapshot();
        assert_eq!(idle.mode, DragMode::Idle);
        assert_eq!(w.pointer_move(random_pixel(&mut rng)), Outcome::Ignored);
        assert_eq!(w.snapshot(), idle);
    }
}

#[test]
fn random_angle_moves_track_magnitudes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut w = UnitCircle::new(WidgetConfig::default()).unwrap();
    w.pointer_down(Handle::AngleRay);

    for _ in 0..2_000 {
        let pixel = random_pixel(&mut rng);
        if !w.pointer_move(pixel).is_committed() {
            continue;
        }
        let snap = w.snapshot();
        // The magnitude guard may keep a stale sign, never a stale magnitude.
        assert_eq!(
            snap.sine.abs(),
            approximate(snap.angle.sin(), PRECISION).abs()
        );
        assert_eq!(
            snap.cosine.abs(),
            approximate(snap.angle.cos(), PRECISION).abs()
        );
    }
}
