//! Operand values.
//!
//! Scalars are `f64`; vectors are fixed at three `f64` components for the
//! whole system. There is no variable dimensionality, so two vectors are
//! always compatible for component-wise algebra.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The kind of a value or field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Scalar,
    Vector,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Scalar => f.write_str("scalar"),
            Kind::Vector => f.write_str("vector"),
        }
    }
}

/// What an operand position accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindConstraint {
    Scalar,
    Vector,
    Either,
}

impl KindConstraint {
    /// Whether a value of `kind` satisfies this constraint.
    #[inline]
    pub const fn admits(self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (KindConstraint::Either, _)
                | (KindConstraint::Scalar, Kind::Scalar)
                | (KindConstraint::Vector, Kind::Vector)
        )
    }
}

impl From<Kind> for KindConstraint {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Scalar => KindConstraint::Scalar,
            Kind::Vector => KindConstraint::Vector,
        }
    }
}

impl fmt::Display for KindConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindConstraint::Scalar => f.write_str("scalar"),
            KindConstraint::Vector => f.write_str("vector"),
            KindConstraint::Either => f.write_str("scalar or vector"),
        }
    }
}

/// A vector component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
            Axis::Z => f.write_str("Z"),
        }
    }
}

/// Three-component real vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    pub const X: Vector = Vector::new(1.0, 0.0, 0.0);
    pub const Y: Vector = Vector::new(0.0, 1.0, 0.0);
    pub const Z: Vector = Vector::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length, without overflow or underflow in the squares.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    ///
    /// Components are scaled by the largest one first so that neither very
    /// large nor very small vectors lose their direction.
    pub fn normalized(self) -> Option<Vector> {
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 || !largest.is_finite() {
            return None;
        }
        let scaled = self / largest;
        Some(scaled / scaled.magnitude())
    }

    #[inline]
    pub fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A stack operand.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
}

impl Value {
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Scalar(_) => Kind::Scalar,
            Value::Vector(_) => Kind::Vector,
        }
    }

    #[inline]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(n) => Some(*n),
            Value::Vector(_) => None,
        }
    }

    #[inline]
    pub const fn as_vector(&self) -> Option<Vector> {
        match self {
            Value::Vector(v) => Some(*v),
            Value::Scalar(_) => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Value::Scalar(n) => n.is_finite(),
            Value::Vector(v) => v.is_finite(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(n)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(n) => write!(f, "{n}"),
            Value::Vector(v) => write!(f, "{v}"),
        }
    }
}
