#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_num;
use num_traits::{Num, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub, SubAssign,
    },
};

/// A 3D vector of [`Real`] components, used both as a point and as a direction.
///
/// # Equality
/// Two vectors are considered equal if every pair of components differs by less than
/// [`EPSILON`](crate::core::config::EPSILON). If neither vector is finite, the components are
/// compared exactly instead, so that [`Vec3::infinity()`] equals itself.
///
/// # Examples
///
/// ```
/// use raygeom::core::prelude::*;
///
/// let a = Vec3::new(1.0, 0.0, 0.0);
/// let b = Vec3::new(0.0, 1.0, 0.0);
/// assert_eq!(a.cross(b), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!((a + b).sqr(), 2.0);
/// assert_eq!(a.to_string(), "1 0 0");
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z
        }
    }
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: Real, y: Real, z: Real) -> Vec3 {
        Vec3 { x, y, z }
    }
    /// The directed vector from `p0` to `p1`, i.e. `p1 - p0`.
    #[must_use]
    pub fn from_points(p0: Vec3, p1: Vec3) -> Vec3 {
        Vec3 {
            x: p1.x - p0.x,
            y: p1.y - p0.y,
            z: p1.z - p0.z,
        }
    }

    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }
    #[must_use]
    pub fn get_zero() -> Vec3 {
        Vec3::zero()
    }
    /// Returns a vector with `x` and `y` set to [`Real::MAX`]. Note that `z` is left at zero.
    #[must_use]
    pub fn max() -> Vec3 {
        Vec3::new(Real::MAX, Real::MAX, 0.)
    }
    /// Returns a vector with `x` and `y` set to positive infinity, and `z` left at zero.
    ///
    /// This is the sentinel returned by [`transmission()`](Vec3::transmission) when no
    /// refracted ray exists; test for it with [`is_finite()`](Vec3::is_finite).
    #[must_use]
    pub fn infinity() -> Vec3 {
        Vec3::new(Real::INFINITY, Real::INFINITY, 0.)
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn sqr(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    /// Returns the (Euclidean) length of the vector.
    #[must_use]
    pub fn modulus(&self) -> Real {
        self.sqr().sqrt()
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Returns `self × other`.
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Scales the vector to unit length in place.
    ///
    /// # Panics
    /// If the reciprocal of the length is not a normal float. This covers zero-length vectors,
    /// lengths so small or so large that the reciprocal leaves the normal range, and vectors
    /// with non-finite components.
    pub fn normalize(&mut self) {
        let m = 1. / self.modulus();
        check!(m.is_normal(), format!("cannot normalise {:?}", self));
        *self *= m;
    }
    /// Returns a unit vector in the same direction. Panics under the same conditions as
    /// [`normalize()`](Vec3::normalize).
    #[must_use]
    pub fn get_normalized(&self) -> Vec3 {
        let mut rv = *self;
        rv.normalize();
        rv
    }

    /// Returns the smallest absolute value among the components.
    #[must_use]
    pub fn min_comp_abs(&self) -> Real {
        let mut rv = self.x.abs();
        gg_num::update_min(&mut rv, self.y.abs());
        gg_num::update_min(&mut rv, self.z.abs());
        rv
    }
    #[must_use]
    pub fn get_max(&self) -> Real {
        self.x.max(self.y.max(self.z))
    }
    #[must_use]
    pub fn get_abs_max(&self) -> Real {
        self.x.abs().max(self.y.abs().max(self.z.abs()))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(EPSILON)
    }
    pub fn is_zero_within(&self, threshold: Real) -> bool {
        self.x.abs() < threshold && self.y.abs() < threshold && self.z.abs() < threshold
    }
    pub fn is_positive(&self) -> bool {
        self.is_positive_within(EPSILON)
    }
    pub fn is_positive_within(&self, threshold: Real) -> bool {
        self.x > threshold && self.y > threshold && self.z > threshold
    }
    /// True iff no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Componentwise minimum, in place. Accumulating this over a set of points gives the
    /// minimum corner of their axis-aligned bounding box.
    pub fn update_min(&mut self, other: Vec3) {
        gg_num::update_min(&mut self.x, other.x);
        gg_num::update_min(&mut self.y, other.y);
        gg_num::update_min(&mut self.z, other.z);
    }
    /// Componentwise maximum, in place. See [`update_min()`](Vec3::update_min).
    pub fn update_max(&mut self, other: Vec3) {
        gg_num::update_max(&mut self.x, other.x);
        gg_num::update_max(&mut self.y, other.y);
        gg_num::update_max(&mut self.z, other.z);
    }

    /// Treating `self` as a unit incident direction `d` and `normal` as a unit surface normal
    /// `n`, returns `2(d·n)d - n`.
    ///
    /// # Panics
    /// If either vector is not of unit length (within [`EPSILON`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use raygeom::core::prelude::*;
    /// let d = Vec3::new(0.0, 0.0, -1.0);
    /// let n = Vec3::new(0.0, 0.0, 1.0);
    /// assert_eq!(d.reflection(n), Vec3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn reflection(&self, normal: Vec3) -> Vec3 {
        check!(
            (normal.sqr() - 1.).abs() < EPSILON && (self.sqr() - 1.).abs() < EPSILON,
            format!("reflection() needs unit vectors: {:?}, normal {:?}", self, normal)
        );
        *self * 2. * self.dot(normal) - normal
    }

    /// Refracts the incident direction `v_in` through a surface with unit normal `self`,
    /// following Snell's law.
    ///
    /// `density` is the refractive index of the medium being entered divided by that of the
    /// medium being left. Returns `None` if the ray does not enter the surface (it is exiting
    /// or grazing, i.e. `-(self·v_in) < EPSILON`), or under total internal reflection.
    ///
    /// # Panics
    /// If the cosine of the incident angle is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use raygeom::core::prelude::*;
    /// let n = Vec3::new(0.0, 0.0, 1.0);
    /// let down = Vec3::new(0.0, 0.0, -1.0);
    /// assert_eq!(n.refraction(down, 1.5), Some(down));
    /// assert_eq!(n.refraction(-down, 1.5), None);
    /// ```
    #[must_use]
    pub fn refraction(&self, v_in: Vec3, density: Real) -> Option<Vec3> {
        let ratio = 1. / density;
        let cos1 = -self.dot(v_in);
        if cos1 < EPSILON {
            return None;
        }
        check_ge!(cos1, 0.);
        let cos2_sq = 1. - gg_num::square(ratio) * (1. - gg_num::square(cos1));
        if cos2_sq < 0. {
            return None;
        }
        let cos2 = cos2_sq.sqrt();
        Some((v_in * ratio + *self * (ratio * cos1 - cos2)).get_normalized())
    }
    /// As [`refraction()`](Vec3::refraction), but signals failure with the
    /// [`Vec3::infinity()`] sentinel instead of `None`.
    #[must_use]
    pub fn transmission(&self, v_in: Vec3, density: Real) -> Vec3 {
        self.refraction(v_in, density).unwrap_or_else(Vec3::infinity)
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        Vec3::is_zero(self)
    }
}

impl From<[Real; 3]> for Vec3 {
    fn from(value: [Real; 3]) -> Self {
        Vec3::new(value[0], value[1], value[2])
    }
}
impl From<Vec3> for [Real; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

/// Indexes `x`, `y`, `z` by 0, 1, 2. Any other index panics.
impl Index<usize> for Vec3 {
    type Output = Real;

    fn index(&self, c: usize) -> &Self::Output {
        check_lt!(c, 3);
        match c {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}
impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, c: usize) -> &mut Self::Output {
        check_lt!(c, 3);
        match c {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "{0:.3$} {1:.3$} {2:.3$}", self.x, self.y, self.z, p)
        } else {
            write!(f, "{} {} {}", self.x, self.y, self.z)
        }
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Real) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vec3> for Real {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<Real> for Vec3 {
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// The divisor must be non-zero; otherwise the components become infinite or NaN.
impl Div<Real> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: Real) -> Self::Output {
        self * (1. / rhs)
    }
}
impl DivAssign<Real> for Vec3 {
    fn div_assign(&mut self, rhs: Real) {
        *self *= 1. / rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl Neg for &Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        -*self
    }
}

/// Scalar types a [`Vec2D`] can hold.
///
/// The conversions to and from [`Real`] behave like `as` casts: converting a real back to an
/// integer scalar truncates toward zero.
pub trait Scalar: Num + Signed + Copy + PartialOrd + Default + fmt::Display + fmt::Debug {
    fn to_real(self) -> Real;
    fn from_real(value: Real) -> Self;
    /// `|self - other|` as a [`Real`]. The difference is taken in `Self` first, so distinct
    /// integers never collapse to the same real.
    fn abs_diff_real(self, other: Self) -> Real;
}

macro_rules! impl_scalar {
    (@casts $t:ty) => {
        #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
        fn to_real(self) -> Real {
            self as Real
        }
        #[allow(clippy::cast_possible_truncation)]
        fn from_real(value: Real) -> Self {
            value as $t
        }
    };
    (int: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                impl_scalar!(@casts $t);
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn abs_diff_real(self, other: Self) -> Real {
                    self.abs_diff(other) as Real
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                impl_scalar!(@casts $t);
                #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn abs_diff_real(self, other: Self) -> Real {
                    (self - other).abs() as Real
                }
            }
        )*
    };
}
impl_scalar!(int: i32, i64);
impl_scalar!(float: f32, f64);

/// A 2D vector over a [`Scalar`] type. See [`Coor`] for the integer grid coordinate and
/// [`Vec2`] for the continuous version.
///
/// Equality compares components within [`EPSILON`], for integer and floating-point scalars
/// alike. Integer components are subtracted exactly before the comparison.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2D<T> {
    pub x: T,
    pub y: T,
}

/// Discrete 2D coordinate.
pub type Coor = Vec2D<i32>;
/// Continuous 2D vector.
pub type Vec2 = Vec2D<Real>;

impl<T: Scalar> PartialEq for Vec2D<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            self.x.abs_diff_real(other.x) < EPSILON && self.y.abs_diff_real(other.y) < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2D<i32> {}
impl Hash for Vec2D<i32> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Scalar> Vec2D<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
    /// The directed vector from `p0` to `p1`.
    #[must_use]
    pub fn from_points(p0: Self, p1: Self) -> Self {
        Self {
            x: p1.x - p0.x,
            y: p1.y - p0.y,
        }
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
    /// The z-component of the 3D cross product, i.e. twice the signed area of the triangle
    /// `(0, self, other)`. Positive if `other` is counter-clockwise from `self` (y up).
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn sqr(&self) -> T {
        self.x * self.x + self.y * self.y
    }
    pub fn modulus(&self) -> Real {
        self.x.to_real().hypot(self.y.to_real())
    }

    /// # Panics
    /// If the length is not greater than [`EPSILON`].
    #[must_use]
    pub fn get_normalized(&self) -> Self {
        let m = self.modulus();
        check_gt!(m, EPSILON, format!("cannot normalise {:?}", self));
        *self * (1. / m)
    }

    /// Swaps the two components, e.g. to move between row- and column-major coordinates.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.to_real().abs() < EPSILON && self.y.to_real().abs() < EPSILON
    }
    pub fn is_finite(&self) -> bool {
        self.x.to_real().is_finite() && self.y.to_real().is_finite()
    }

    pub fn update_min(&mut self, other: Self) {
        gg_num::update_min(&mut self.x, other.x);
        gg_num::update_min(&mut self.y, other.y);
    }
    pub fn update_max(&mut self, other: Self) {
        gg_num::update_max(&mut self.x, other.x);
        gg_num::update_max(&mut self.y, other.y);
    }
}

impl Coor {
    /// Iterates over the block `[start.x, end.x) × [start.y, end.y)` in row-major order.
    pub fn range(start: Coor, end: Coor) -> impl Iterator<Item = Coor> {
        (start.y..end.y)
            .cartesian_product(start.x..end.x)
            .map(|(y, x)| Coor::new(x, y))
    }
    pub fn range_from_zero(end: Coor) -> impl Iterator<Item = Coor> {
        Self::range(Coor::default(), end)
    }

    pub fn as_real(&self) -> Vec2 {
        Vec2::new(self.x.to_real(), self.y.to_real())
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2D<T> {
    fn from(value: [T; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}
impl<T: Scalar> From<(T, T)> for Vec2D<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T: Scalar> fmt::Display for Vec2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl<T: Scalar> Add<Vec2D<T>> for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Vec2D<T>) -> Self::Output {
        Vec2D {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<T: Scalar> AddAssign<Vec2D<T>> for Vec2D<T> {
    fn add_assign(&mut self, rhs: Vec2D<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub<Vec2D<T>> for Vec2D<T> {
    type Output = Vec2D<T>;

    fn sub(self, rhs: Vec2D<T>) -> Self::Output {
        Vec2D {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<T: Scalar> SubAssign<Vec2D<T>> for Vec2D<T> {
    fn sub_assign(&mut self, rhs: Vec2D<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<Real> for Vec2D<T> {
    type Output = Vec2D<T>;

    fn mul(self, rhs: Real) -> Self::Output {
        Vec2D {
            x: T::from_real(self.x.to_real() * rhs),
            y: T::from_real(self.y.to_real() * rhs),
        }
    }
}
/// The divisor must be non-zero.
impl<T: Scalar> Div<Real> for Vec2D<T> {
    type Output = Vec2D<T>;

    fn div(self, rhs: Real) -> Self::Output {
        self * (1. / rhs)
    }
}

impl<T: Scalar> Neg for Vec2D<T> {
    type Output = Vec2D<T>;

    fn neg(self) -> Self::Output {
        Vec2D {
            x: -self.x,
            y: -self.y,
        }
    }
}
/// Mirrors across the x-axis by negating the second component.
impl<T: Scalar> Not for Vec2D<T> {
    type Output = Vec2D<T>;

    fn not(self) -> Self::Output {
        Vec2D {
            x: self.x,
            y: -self.y,
        }
    }
}

/// A directed line segment from `.0` to `.1`. The endpoints may coincide.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Line2D(pub Coor, pub Coor);

impl Line2D {
    #[must_use]
    pub fn reverse(&self) -> Line2D {
        Line2D(self.1, self.0)
    }
    pub fn direction(&self) -> Coor {
        Coor::from_points(self.0, self.1)
    }
}

/// An ordered list of vertices. Polygons are implicitly closed: the last vertex connects back
/// to the first, which is not repeated. See [`polygon_edges()`].
pub type Polygon = Vec<Coor>;

/// Returns every edge of the polygon, including the closing edge from the last vertex back to
/// the first. Yields nothing for fewer than two vertices.
///
/// # Examples
///
/// ```
/// use raygeom::core::prelude::*;
/// let triangle: Polygon = vec![Coor::new(0, 0), Coor::new(2, 0), Coor::new(0, 2)];
/// let edges = polygon_edges(&triangle).collect::<Vec<_>>();
/// assert_eq!(edges.len(), 3);
/// assert_eq!(edges[2], Line2D(Coor::new(0, 2), Coor::new(0, 0)));
/// ```
pub fn polygon_edges(polygon: &[Coor]) -> impl Iterator<Item = Line2D> + '_ {
    let count = if polygon.len() < 2 { 0 } else { polygon.len() };
    polygon
        .iter()
        .copied()
        .circular_tuple_windows()
        .take(count)
        .map(|(start, end)| Line2D(start, end))
}

/// Twice the signed area of the polygon (shoelace formula). Positive if the vertices wind
/// counter-clockwise in a y-up frame.
pub fn twice_signed_area(polygon: &[Coor]) -> i64 {
    polygon_edges(polygon)
        .map(|Line2D(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(a.y) * i64::from(b.x))
        .sum()
}

/// An axis-aligned `w × h` extent with origin at zero, covering `[0, w) × [0, h)`.
///
/// # Examples
///
/// ```
/// use raygeom::core::prelude::*;
/// let g = Geometry::new(4, 2);
/// assert_eq!(g.area(), 8);
/// assert_eq!(g.ratio(), 2.0);
/// assert!(g.contain(3, 1));
/// assert!(!g.contain(4, 1));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub w: i32,
    pub h: i32,
}

impl Geometry {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Widened to `i64`, so extents up to `i32::MAX` on each side never overflow.
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }
    /// The aspect ratio, longer side over shorter side, so always at least 1.
    ///
    /// The shorter side must be non-zero; otherwise the result is infinite or NaN.
    pub fn ratio(&self) -> Real {
        self.w.max(self.h).to_real() / self.w.min(self.h).to_real()
    }

    pub fn contain(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.w && y >= 0 && y < self.h
    }
    pub fn contains(&self, coor: Coor) -> bool {
        self.contain(coor.x, coor.y)
    }
    /// Every contained coordinate, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coor> {
        Coor::range_from_zero(Coor::new(self.w, self.h))
    }
}
