//! Human-readable formula rendering for the vector algebra.
//!
//! Pure string builders: each function spells out the symbolic computation of
//! one operation using the operands' literal component values, for display
//! next to the numeric result. Nothing here evaluates or rounds beyond normal
//! float formatting, and nothing can fail; NaN/Infinity components render the
//! way `f64` formats them.

use crate::vector::Vec3;

/// Dot product as `"(x1 * x2 + y1 * y2 + z1 * z2)"`.
pub fn dot_product(a: Vec3, b: Vec3) -> String {
    format!(
        "({} * {} + {} * {} + {} * {})",
        a.x, b.x, a.y, b.y, a.z, b.z
    )
}

/// Magnitude as a square root of summed squares.
pub fn magnitude(a: Vec3) -> String {
    format!("√({} ^ 2 + {} ^ 2 + {} ^ 2)", a.x, a.y, a.z)
}

/// Componentwise addition.
pub fn addition(a: Vec3, b: Vec3) -> String {
    format!(
        "({} + {}, {} + {}, {} + {})",
        a.x, b.x, a.y, b.y, a.z, b.z
    )
}

/// Componentwise subtraction.
pub fn subtraction(a: Vec3, b: Vec3) -> String {
    format!(
        "({} - {}, {} - {}, {} - {})",
        a.x, b.x, a.y, b.y, a.z, b.z
    )
}

/// Scalar multiplication.
pub fn scalar_multiplication(a: Vec3, scalar: f64) -> String {
    format!(
        "({} * {k}, {} * {k}, {} * {k})",
        a.x,
        a.y,
        a.z,
        k = scalar
    )
}

/// Cross product, rendering the expressions actually computed.
///
/// The y component mirrors the irregular branch in [`Vec3::cross`]: when
/// `a.z * b.x == 0` it renders the negated single-term form.
pub fn cross_product(a: Vec3, b: Vec3) -> String {
    let y = if a.z * b.x == 0.0 {
        format!("-({} * {})", a.x, b.z)
    } else {
        format!("{} * {} - {} * {}", a.z, b.x, a.x, b.z)
    };
    format!(
        "({} * {} - {} * {}, {y}, {} * {} - {} * {})",
        a.y, b.z, a.z, b.y, a.x, b.y, a.y, b.x
    )
}

/// Unit vector as componentwise division by the literal magnitude.
pub fn unit_vector(a: Vec3) -> String {
    let m = a.magnitude();
    format!("({} / {m}, {} / {m}, {} / {m})", a.x, a.y, a.z)
}

/// Angle between two vectors in degrees, acos-quotient form.
///
/// π is rendered rounded to two decimals, as the original display did.
pub fn angle_between_degrees(a: Vec3, b: Vec3) -> String {
    format!(
        "(acos({} / ({} * {})) * 180 / 3.14)",
        dot_product(a, b),
        magnitude(a),
        magnitude(b)
    )
}

/// Projection of `a` onto `b`, per-component quotient form.
pub fn vector_projection(a: Vec3, b: Vec3) -> String {
    let quotient = format!("({} / {} ^ 2)", dot_product(a, b), magnitude(b));
    format!(
        "({} * {q}, {} * {q}, {} * {q})",
        b.x,
        b.y,
        b.z,
        q = quotient
    )
}

/// Projection of `a` onto the plane perpendicular to `b`.
pub fn plane_projection(a: Vec3, b: Vec3) -> String {
    format!("({} - {})", a, vector_projection(a, b))
}

/// A full display line: formula on the left, numeric result on the right.
pub fn operation_summary(formula: &str, result: impl std::fmt::Display) -> String {
    format!("{formula} = {result}")
}
