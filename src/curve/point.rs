//! Affine point representation and group operations.
//!
//! Points are either the explicit identity element or an affine
//! coordinate pair with both coordinates reduced in `[0, p)`. Every
//! operation matches on the variant exhaustively; there is no coordinate
//! sentinel standing in for "no point".

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::CurveError;
use super::field::{inverse_of, mul_mod, sub_mod};
use super::params::CurveParams;

/// A point on the curve, either the group's neutral element or an
/// affine coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity, neutral element of the group law.
    Identity,
    /// An affine point `(x, y)` with `y² ≡ x³ + ax + b (mod p)`.
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Returns `true` for the identity point.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The affine x-coordinate, if the point is not the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The affine y-coordinate, if the point is not the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Projects the x-coordinate onto the 40-symbol circle, `x mod 40`.
    ///
    /// Returns `None` for the identity point, which has no coordinates
    /// to project.
    pub fn x_mod_40(&self) -> Option<u32> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => {
                let residue = x % BigUint::from(40u32);
                // A value below 40 always fits in a u32.
                Some(residue.to_u32().expect("residue below 40"))
            }
        }
    }
}

/// Checks whether a point satisfies the curve equation
/// `y² ≡ x³ + ax + b (mod p)`. The identity is always on the curve.
pub fn is_on_curve(params: &CurveParams, point: &Point) -> bool {
    match point {
        Point::Identity => true,
        Point::Affine { x, y } => {
            let p = &params.p;
            let lhs = mul_mod(y, y, p);
            let rhs = (x * x * x + &params.a * x + &params.b) % p;
            sub_mod(&lhs, &rhs, p).is_zero()
        }
    }
}

/// Adds two points under the group law.
///
/// Handles the identity cases, the inverse pair `(x, y) + (x, -y)`, and
/// delegates equal operands to [`double`]. The slope denominator is
/// non-zero on the remaining branch, so the inversion cannot fail for
/// points on the curve.
pub fn add(params: &CurveParams, p1: &Point, p2: &Point) -> Result<Point, CurveError> {
    let (x1, y1, x2, y2) = match (p1, p2) {
        (Point::Identity, q) => return Ok(q.clone()),
        (q, Point::Identity) => return Ok(q.clone()),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
    };

    let p = &params.p;

    if x1 == x2 && y1 != y2 {
        // A point plus its inverse.
        return Ok(Point::Identity);
    }

    if p1 == p2 {
        return double(params, p1);
    }

    // s = (y2 - y1) / (x2 - x1)
    let numerator = sub_mod(y2, y1, p);
    let denominator = inverse_of(&sub_mod(x2, x1, p), p)?;
    let s = mul_mod(&numerator, &denominator, p);

    let x3 = sub_mod(&sub_mod(&mul_mod(&s, &s, p), x1, p), x2, p);
    let y3 = sub_mod(&mul_mod(&s, &sub_mod(x1, &x3, p), p), y1, p);

    Ok(Point::Affine { x: x3, y: y3 })
}

/// Doubles a point under the group law.
///
/// The identity doubles to itself, and a point with `y = 0` has a
/// vertical tangent and doubles to the identity.
pub fn double(params: &CurveParams, point: &Point) -> Result<Point, CurveError> {
    let (x1, y1) = match point {
        Point::Identity => return Ok(Point::Identity),
        Point::Affine { x, y } => (x, y),
    };

    let p = &params.p;

    if y1.is_zero() {
        return Ok(Point::Identity);
    }

    // s = (3x² + a) / (2y)
    let numerator = (BigUint::from(3u32) * x1 * x1 + &params.a) % p;
    let denominator = inverse_of(&(BigUint::from(2u32) * y1 % p), p)?;
    let s = mul_mod(&numerator, &denominator, p);

    let two_x = BigUint::from(2u32) * x1 % p;
    let x3 = sub_mod(&mul_mod(&s, &s, p), &two_x, p);
    let y3 = sub_mod(&mul_mod(&s, &sub_mod(x1, &x3, p), p), y1, p);

    Ok(Point::Affine { x: x3, y: y3 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_on_curve() {
        let params = CurveParams::secp256k1();
        assert!(is_on_curve(&params, &Point::Identity));
    }

    #[test]
    fn identity_is_neutral() {
        let params = CurveParams::secp256k1();
        let g = params.g.clone();

        assert_eq!(add(&params, &Point::Identity, &g).unwrap(), g);
        assert_eq!(add(&params, &g, &Point::Identity).unwrap(), g);
        assert_eq!(
            add(&params, &Point::Identity, &Point::Identity).unwrap(),
            Point::Identity
        );
    }

    #[test]
    fn point_plus_inverse_is_identity() {
        let params = CurveParams::secp256k1();
        let g = params.g.clone();

        let inverse = match &g {
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: &params.p - y,
            },
            Point::Identity => unreachable!(),
        };

        assert!(is_on_curve(&params, &inverse));
        assert_eq!(add(&params, &g, &inverse).unwrap(), Point::Identity);
    }

    #[test]
    fn doubling_identity_stays_identity() {
        let params = CurveParams::secp256k1();
        assert_eq!(double(&params, &Point::Identity).unwrap(), Point::Identity);
    }
}
