//! Immutable 3-component vector and its algebraic operations.
//!
//! Every operation returns a new value; nothing mutates in place. Most of the
//! algebra is textbook, with one deliberate exception: [`Vec3::cross`] keeps
//! an inherited special case on its y component (see the method docs).
//! Operations that divide by a zero magnitude yield NaN/Infinity per
//! IEEE-754 rather than failing.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameter;

/// One of the three component axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Immutable 3D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    /// All-ones vector (the identity scale of a transform).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Construct a vector, rejecting non-finite components.
    ///
    /// Intended for input boundaries (parsed user text); plain [`Vec3::new`]
    /// is fine for values produced by the algebra itself.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] naming the first non-finite component.
    pub fn checked(x: f64, y: f64, z: f64) -> Result<Self, InvalidParameter> {
        InvalidParameter::check("x", x)?;
        InvalidParameter::check("y", y)?;
        InvalidParameter::check("z", z)?;
        Ok(Self::new(x, y, z))
    }

    /// True if all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component along `axis`.
    #[inline]
    pub fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Multiply every component by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Multiply by another vector's magnitude.
    ///
    /// "Multiplying by a vector" here means scaling by its length, not a
    /// componentwise product.
    pub fn scale_by(self, other: Self) -> Self {
        self.scale(other.magnitude())
    }

    /// Euclidean length: `sqrt(x² + y² + z²)`.
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, with an inherited irregularity on the y component.
    ///
    /// When `self.z * other.x == 0` the y component is computed as
    /// `-(self.x * other.z)` instead of the canonical
    /// `self.z * other.x - self.x * other.z`. This exact branch structure is
    /// preserved for behavioral compatibility with the system this library
    /// replaces; it is almost certainly a defect there, so do not "fix" it
    /// without revisiting the tests that pin both branches.
    pub fn cross(self, other: Self) -> Self {
        let x = self.y * other.z - self.z * other.y;
        let y = if self.z * other.x == 0.0 {
            -(self.x * other.z)
        } else {
            self.z * other.x - self.x * other.z
        };
        let z = self.x * other.y - self.y * other.x;
        Self::new(x, y, z)
    }

    /// Angle between two vectors in radians.
    ///
    /// NaN when either operand has zero magnitude.
    pub fn angle_between_radians(self, other: Self) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    /// Angle between two vectors in degrees.
    pub fn angle_between_degrees(self, other: Self) -> f64 {
        self.angle_between_radians(other).to_degrees()
    }

    /// Unit vector in the same direction.
    ///
    /// Componentwise division by the magnitude; all-NaN for the zero vector.
    pub fn unit(self) -> Self {
        let magnitude = self.magnitude();
        Self::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
    }

    /// Projection of `self` onto `other`.
    pub fn project_onto(self, other: Self) -> Self {
        other.scale(self.dot(other) / other.magnitude().powi(2))
    }

    /// Projection of `self` onto the plane perpendicular to `other`.
    pub fn reject_from(self, other: Self) -> Self {
        self - self.project_onto(other)
    }

    /// Unclamped linear interpolation from `a` to `b`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a).scale(t)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
