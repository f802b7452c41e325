use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use vec3d_core::constants::{DEG_TO_RAD, RAD_TO_DEG, TWOPI};
use vec3d_core::{Vector3, Vector3d, Vector3f, Vector3i, VectorErrorKind};

fn samples() -> Vec<Vector3d> {
    vec![
        Vector3d::new(1.0, 2.0, 3.0),
        Vector3d::new(-4.5, 0.25, 7.0),
        Vector3d::new(0.0, -1.0, 0.5),
        Vector3d::new(1e3, -2e-3, 3.5),
    ]
}

fn assert_vec_near(a: Vector3d, b: Vector3d, epsilon: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
    assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
    assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
}

// --- Algebraic identities ---

#[test]
fn addition_commutes_and_associates() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a);
            for c in samples() {
                assert_vec_near((a + b) + c, a + (b + c), 1e-12);
            }
        }
    }

    let a = Vector3i::new(1, -2, 3);
    let b = Vector3i::new(7, 8, -9);
    let c = Vector3i::new(-5, 0, 2);
    assert_eq!((a + b) + c, a + (b + c));
}

#[test]
fn adding_the_negation_gives_zero() {
    for a in samples() {
        assert_eq!(a + (-a), Vector3d::zeros());
    }
    let i = Vector3i::new(3, -4, 5);
    assert_eq!(i + i.negate(), Vector3i::zeros());
}

#[test]
fn scale_then_divide_round_trips() {
    for a in samples() {
        for s in [2.0, -0.5, 3.0, 1e-3] {
            assert_vec_near((a * s) / s, a, 1e-12);
        }
    }
}

#[test]
fn dot_is_symmetric_and_square_non_negative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.dot(&b), b.dot(&a));
        }
        assert_eq!(a.square(), a.dot(&a));
        assert!(a.square() >= 0.0);
    }
}

#[test]
fn cross_is_anticommutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross(&b), -(b.cross(&a)));
        }
        assert_eq!(a.cross(&a), Vector3d::zeros());
    }
}

// --- Magnitude and distance ---

#[test]
fn magnitude_is_root_of_square() {
    for a in samples() {
        assert_eq!(a.magnitude(), a.square().sqrt());
    }
    assert_eq!(Vector3d::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    assert_eq!(Vector3f::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    assert_eq!(Vector3i::new(3, 4, 0).magnitude(), 5);
}

#[test]
fn distance_is_magnitude_of_difference() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.distance(&b), (a - b).magnitude());
        }
        assert_eq!(a.distance(&a), 0.0);
    }
}

#[test]
fn normalising_keeps_direction() {
    for a in samples() {
        let mut unit = a;
        unit.normalise();
        assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-15);
        assert_vec_near(unit.cross(&a), Vector3d::zeros(), 1e-12);
        assert!(unit.dot(&a) > 0.0);
        assert_eq!(a.try_normalised().unwrap(), unit);
    }
}

#[test]
fn normalising_zero_vector_degenerates() {
    let mut zero = Vector3d::zeros();
    zero.normalise();
    assert!(zero.x.is_nan() && zero.y.is_nan() && zero.z.is_nan());

    let err = Vector3d::zeros().try_normalised().unwrap_err();
    assert_eq!(err.kind(), Some(VectorErrorKind::ZeroMagnitude));
}

// --- Indexing ---

#[test]
fn indexing_reads_components_and_defaults_to_zero() {
    for a in samples() {
        assert_eq!(a[0], a.x);
        assert_eq!(a[1], a.y);
        assert_eq!(a[2], a.z);
        assert_eq!(a[3], 0.0);
        assert_eq!(a[42], 0.0);
        assert!(a.get(3).is_err());
    }
}

// --- Angles ---

#[test]
fn azimuth_of_vertical_vector_is_zero() {
    assert_eq!(Vector3d::new(0.0, 0.0, 0.0).azimuth(), 0.0);
    assert_eq!(Vector3d::new(0.0, 1.0, 0.0).azimuth(), 0.0);
    assert_eq!(Vector3d::new(0.0, -9.0, 0.0).azimuth(), 0.0);
}

#[test]
fn azimuth_behind_subtracts_pi() {
    for (x, z) in [(1.0, -1.0), (-1.0, -1.0), (0.5, -3.0), (-2.0, -0.25)] {
        let v = Vector3d::new(x, 0.0, z);
        assert_abs_diff_eq!(v.azimuth(), (x / z).atan() - PI, epsilon = 1e-15);
    }
}

#[test]
fn azimuth_degrees_in_front() {
    let v = Vector3d::new(1.0, 0.0, 3.0_f64.sqrt());
    assert_abs_diff_eq!(v.azimuth() * RAD_TO_DEG, 30.0, epsilon = 1e-12);
}

#[test]
fn elevation_of_unit_vectors() {
    let up = Vector3d::new(0.0, 1.0, 0.0);
    assert_eq!(up.elevation(), FRAC_PI_2);

    let v = Vector3d::new(1.0, 1.0, 0.0).normalised();
    assert_abs_diff_eq!(v.elevation() * RAD_TO_DEG, 45.0, epsilon = 1e-12);

    assert!(Vector3d::new(0.0, 1.0 + 1e-9, 0.0).elevation().is_nan());
}

// --- Rotations ---

#[test]
fn quarter_turns_follow_row_vector_convention() {
    let quarter = 90.0 * DEG_TO_RAD;
    assert_vec_near(
        Vector3d::x_axis().rotate_z(quarter),
        Vector3d::new(0.0, -1.0, 0.0),
        1e-15,
    );
    assert_vec_near(
        Vector3d::y_axis().rotate_x(quarter),
        Vector3d::new(0.0, 0.0, -1.0),
        1e-15,
    );
    assert_vec_near(
        Vector3d::z_axis().rotate_y(quarter),
        Vector3d::new(-1.0, 0.0, 0.0),
        1e-15,
    );
}

#[test]
fn zero_and_full_turns_are_identity() {
    for a in samples() {
        assert_eq!(a.rotate_x(0.0), a);
        assert_eq!(a.rotate_y(0.0), a);
        assert_eq!(a.rotate_z(0.0), a);

        let tolerance = 1e-12 * a.magnitude();
        assert_vec_near(a.rotate_x(TWOPI), a, tolerance);
        assert_vec_near(a.rotate_y(TWOPI), a, tolerance);
        assert_vec_near(a.rotate_z(TWOPI), a, tolerance);
    }
}

#[test]
fn rotating_about_y_shifts_azimuth() {
    // Row-vector Ry turns +z toward -x, i.e. a positive angle lowers the azimuth.
    let forward = Vector3d::z_axis();
    let turned = forward.rotate_y(0.3);
    assert_abs_diff_eq!(turned.azimuth(), -0.3, epsilon = 1e-15);
    assert_abs_diff_eq!(turned.elevation(), 0.0, epsilon = 1e-15);
}

#[test]
fn generic_over_component_type() {
    fn centroid<T: vec3d_core::Scalar>(points: &[Vector3<T>], count: T) -> Vector3<T> {
        let mut sum = Vector3::zeros();
        for p in points {
            sum += *p;
        }
        sum / count
    }

    let ints = [Vector3::new(0, 0, 0), Vector3::new(4, 8, -2)];
    assert_eq!(centroid(&ints, 2), Vector3::new(2, 4, -1));

    let floats = [Vector3f::new(1.0, 1.0, 1.0), Vector3f::new(2.0, 3.0, 4.0)];
    assert_eq!(centroid(&floats, 2.0), Vector3f::new(1.5, 2.0, 2.5));
}
