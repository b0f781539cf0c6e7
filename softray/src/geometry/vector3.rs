use std::ops::{Add, Div, Mul, Neg, Sub};

const DELTA: f64 = 1e-5;

// Below this, lengths and divisors are treated as degenerate.
const DEGENERATE_DELTA: f64 = 1e-8;

#[derive(Copy, Clone, Debug)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn dot_product(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x
        )
    }

    pub fn length(&self) -> f64 {
        self.dot_product(self).sqrt()
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Unit-length copy of this vector. Near-zero vectors are returned
    /// unchanged instead of blowing up into NaN.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length > DEGENERATE_DELTA {
            *self / length
        } else {
            *self
        }
    }

    /// Mirror of this vector around a unit-length normal.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot_product(normal))
    }
}

impl PartialEq for Vector3 {

    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < DELTA &&
            (self.y - other.y).abs() < DELTA &&
            (self.z - other.z).abs() < DELTA
    }
}

impl Add for Vector3 {

    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {

    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector3 {

    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        if rhs.abs() < DEGENERATE_DELTA {
            self
        } else {
            Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
        }
    }
}

impl Neg for Vector3 {

    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
