//! Algebraic identities of the vector engine, checked over a spread of
//! operand values with the tolerances the display layer relies on.

use approx::assert_relative_eq;
use vector_sim_core::{formula, Vec3};

const SAMPLES: [Vec3; 5] = [
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(-4.5, 0.25, 9.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(100.0, -250.0, 0.001),
    Vec3::new(0.3, 0.3, 0.3),
];

#[test]
fn test_dot_product_commutes() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(a.dot(b), b.dot(a), "dot not symmetric for {a} · {b}");
        }
    }
}

#[test]
fn test_magnitude_of_scaled_vector() {
    for a in SAMPLES {
        for k in [0.5, -3.0, 7.25] {
            assert_relative_eq!(
                a.scale(k).magnitude(),
                k.abs() * a.magnitude(),
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_unit_vectors_have_unit_magnitude() {
    for a in SAMPLES {
        assert_relative_eq!(a.unit().magnitude(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_projection_decomposition() {
    for a in SAMPLES {
        for b in SAMPLES {
            if b.magnitude() == 0.0 {
                continue;
            }
            let reconstructed = a.project_onto(b) + a.reject_from(b);
            assert_relative_eq!(reconstructed.x, a.x, epsilon = 1e-5);
            assert_relative_eq!(reconstructed.y, a.y, epsilon = 1e-5);
            assert_relative_eq!(reconstructed.z, a.z, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_projection_is_parallel_to_target() {
    let a = Vec3::new(2.0, 5.0, -1.0);
    let b = Vec3::new(3.0, 0.0, 0.0);

    let projection = a.project_onto(b);
    assert_eq!(projection, Vec3::new(2.0, 0.0, 0.0));
    assert_relative_eq!(projection.angle_between_degrees(b), 0.0, epsilon = 1e-5);
}

#[test]
fn test_cross_branches_with_literal_inputs() {
    // a.z * b.x = 1: regular branch, y = a.z*b.x - a.x*b.z
    assert_eq!(
        Vec3::new(0.0, 0.0, 1.0).cross(Vec3::new(1.0, 0.0, 0.0)),
        Vec3::new(0.0, 1.0, 0.0)
    );
    // a.z * b.x = 0: special branch, y = -(a.x * b.z)
    assert_eq!(
        Vec3::new(0.0, 0.0, 0.0).cross(Vec3::new(1.0, 0.0, 0.0)),
        Vec3::ZERO
    );
}

#[test]
fn test_degenerate_operations_render_without_crashing() {
    // Zero-magnitude operands produce NaN results, never panics, and the
    // formula layer formats them like any other float.
    let zero = Vec3::ZERO;
    let a = Vec3::new(1.0, 2.0, 3.0);

    assert!(a.angle_between_degrees(zero).is_nan());
    assert!(a.project_onto(zero).x.is_nan());

    let rendered = formula::operation_summary(&formula::unit_vector(zero), zero.unit());
    assert!(rendered.contains("NaN"));
}

#[test]
fn test_formula_strings_track_operands() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);

    assert_eq!(formula::dot_product(a, b), "(1 * 4 + 2 * 5 + 3 * 6)");
    assert_eq!(
        formula::addition(a, b),
        "(1 + 4, 2 + 5, 3 + 6)"
    );
    assert_eq!(
        formula::scalar_multiplication(a, 2.0),
        "(1 * 2, 2 * 2, 3 * 2)"
    );
}
