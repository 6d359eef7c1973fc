//! Interpolation capability for keyframe values.
//!
//! Purpose
//! - Define the four blend operations a keyframe value must support and
//!   implement them for scalars, points, optional values, and sequences.
//!
//! Model
//! - Every segment is a cubic Hermite curve from `f1` (t=0) to `f2` (t=1).
//!   Interior segments take Catmull-Rom tangents `(f2-f0)/2` and `(f3-f1)/2`.
//! - End segments estimate the missing tangent from the quadratic through the
//!   three available points, so collinear, evenly spaced data stays linear.
//! - Composites recurse structurally: `Option` by presence, `Vec` index-aligned.
//!
//! Code cross-refs: `anim::Animation::value`, `interpolate_segment`.

use std::ops::{Add, Mul};

use nalgebra::Vector2;

/// Blend operations over a normalized segment position `t ∈ [0, 1]`.
pub trait Interpolatable: Sized {
    /// Straight blend from `f0` to `f1`.
    fn linear(f0: &Self, f1: &Self, t: f64) -> Self;
    /// Segment `f1 → f2` when nothing precedes `f1`.
    fn first_spline(f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self;
    /// Segment `f1 → f2` with neighbours on both sides.
    fn spline(f0: &Self, f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self;
    /// Segment `f1 → f2` when nothing follows `f2`.
    fn last_spline(f0: &Self, f1: &Self, f2: &Self, t: f64) -> Self;
}

/// Segment `f1 → f2`, degrading spline → first/last spline → linear with the
/// neighbours that are available.
pub fn interpolate_segment<T: Interpolatable>(
    f0: Option<&T>,
    f1: &T,
    f2: &T,
    f3: Option<&T>,
    t: f64,
) -> T {
    match (f0, f3) {
        (Some(f0), Some(f3)) => T::spline(f0, f1, f2, f3, t),
        (None, Some(f3)) => T::first_spline(f1, f2, f3, t),
        (Some(f0), None) => T::last_spline(f0, f1, f2, t),
        (None, None) => T::linear(f1, f2, t),
    }
}

/// Cubic Hermite curve from `p1` to `p2` with end tangents `m1`, `m2`.
#[inline]
pub fn hermite<T>(p1: T, p2: T, m1: T, m2: T, t: f64) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let t2 = t * t;
    let t3 = t2 * t;
    p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + m1 * (t3 - 2.0 * t2 + t)
        + p2 * (3.0 * t2 - 2.0 * t3)
        + m2 * (t3 - t2)
}

macro_rules! impl_interpolatable_vector {
    ($($ty:ty),*) => {$(
        impl Interpolatable for $ty {
            #[inline]
            fn linear(f0: &Self, f1: &Self, t: f64) -> Self {
                *f0 * (1.0 - t) + *f1 * t
            }

            fn first_spline(f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
                let m1 = (*f2 * 4.0 - *f1 * 3.0 - *f3) * 0.5;
                let m2 = (*f3 - *f1) * 0.5;
                hermite(*f1, *f2, m1, m2, t)
            }

            fn spline(f0: &Self, f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
                let m1 = (*f2 - *f0) * 0.5;
                let m2 = (*f3 - *f1) * 0.5;
                hermite(*f1, *f2, m1, m2, t)
            }

            fn last_spline(f0: &Self, f1: &Self, f2: &Self, t: f64) -> Self {
                let m1 = (*f2 - *f0) * 0.5;
                let m2 = (*f0 + *f2 * 3.0 - *f1 * 4.0) * 0.5;
                hermite(*f1, *f2, m1, m2, t)
            }
        }
    )*};
}

impl_interpolatable_vector!(f64, Vector2<f64>);

/// A missing anchor stays missing; a missing partner passes the anchor through.
fn option_segment<T: Interpolatable + Clone>(
    f0: Option<&Option<T>>,
    f1: &Option<T>,
    f2: &Option<T>,
    f3: Option<&Option<T>>,
    t: f64,
) -> Option<T> {
    let a1 = f1.as_ref()?;
    let Some(a2) = f2.as_ref() else {
        return Some(a1.clone());
    };
    Some(interpolate_segment(
        f0.and_then(Option::as_ref),
        a1,
        a2,
        f3.and_then(Option::as_ref),
        t,
    ))
}

impl<T: Interpolatable + Clone> Interpolatable for Option<T> {
    fn linear(f0: &Self, f1: &Self, t: f64) -> Self {
        option_segment(None, f0, f1, None, t)
    }

    fn first_spline(f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
        option_segment(None, f1, f2, Some(f3), t)
    }

    fn spline(f0: &Self, f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
        option_segment(Some(f0), f1, f2, Some(f3), t)
    }

    fn last_spline(f0: &Self, f1: &Self, f2: &Self, t: f64) -> Self {
        option_segment(Some(f0), f1, f2, None, t)
    }
}

/// Index-aligned blend; indices present in only one of `f1`/`f2` pass through.
fn sequence_segment<T: Interpolatable + Clone>(
    f0: Option<&[T]>,
    f1: &[T],
    f2: &[T],
    f3: Option<&[T]>,
    t: f64,
) -> Vec<T> {
    let n = f1.len().max(f2.len());
    (0..n)
        .filter_map(|i| match (f1.get(i), f2.get(i)) {
            (Some(a1), Some(a2)) => Some(interpolate_segment(
                f0.and_then(|s| s.get(i)),
                a1,
                a2,
                f3.and_then(|s| s.get(i)),
                t,
            )),
            (a1, a2) => a1.or(a2).cloned(),
        })
        .collect()
}

impl<T: Interpolatable + Clone> Interpolatable for Vec<T> {
    fn linear(f0: &Self, f1: &Self, t: f64) -> Self {
        sequence_segment(None, f0, f1, None, t)
    }

    fn first_spline(f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
        sequence_segment(None, f1, f2, Some(f3), t)
    }

    fn spline(f0: &Self, f1: &Self, f2: &Self, f3: &Self, t: f64) -> Self {
        sequence_segment(Some(f0), f1, f2, Some(f3), t)
    }

    fn last_spline(f0: &Self, f1: &Self, f2: &Self, t: f64) -> Self {
        sequence_segment(Some(f0), f1, f2, None, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    const EPS: f64 = 1e-12;

    #[test]
    fn splines_hit_their_anchors() {
        let (f0, f1, f2, f3) = (0.3, 1.7, -0.4, 2.2);
        assert!((f64::spline(&f0, &f1, &f2, &f3, 0.0) - f1).abs() < EPS);
        assert!((f64::spline(&f0, &f1, &f2, &f3, 1.0) - f2).abs() < EPS);
        assert!((f64::first_spline(&f1, &f2, &f3, 0.0) - f1).abs() < EPS);
        assert!((f64::first_spline(&f1, &f2, &f3, 1.0) - f2).abs() < EPS);
        assert!((f64::last_spline(&f0, &f1, &f2, 0.0) - f1).abs() < EPS);
        assert!((f64::last_spline(&f0, &f1, &f2, 1.0) - f2).abs() < EPS);
    }

    #[test]
    fn evenly_spaced_collinear_data_stays_linear() {
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let want = 1.0 + t;
            assert!((f64::spline(&0.0, &1.0, &2.0, &3.0, t) - want).abs() < EPS);
            assert!((f64::first_spline(&1.0, &2.0, &3.0, t) - want).abs() < EPS);
            assert!((f64::last_spline(&0.0, &1.0, &2.0, t) - want).abs() < EPS);
        }
    }

    #[test]
    fn spline_midpoint_is_catmull_rom() {
        // Catmull-Rom midpoint: (-f0 + 9 f1 + 9 f2 - f3) / 16
        let got = f64::spline(&0.0, &1.0, &0.0, &1.0, 0.5);
        assert!((got - 0.5).abs() < EPS);
        let got = f64::spline(&0.0, &0.0, &1.0, &0.0, 0.5);
        assert!((got - 9.0 / 16.0).abs() < EPS);
    }

    #[test]
    fn points_blend_componentwise() {
        let a = vector![0.0, 10.0];
        let b = vector![4.0, 20.0];
        let mid = Vector2::linear(&a, &b, 0.25);
        assert!((mid - vector![1.0, 12.5]).norm() < EPS);
        let c = vector![8.0, 30.0];
        let d = vector![12.0, 40.0];
        let s = Vector2::spline(&a, &b, &c, &d, 0.5);
        assert!((s - vector![6.0, 25.0]).norm() < EPS);
    }

    #[test]
    fn options_never_invent_values() {
        assert_eq!(Option::<f64>::linear(&None, &Some(1.0), 0.5), None);
        assert_eq!(Option::linear(&Some(2.0), &None, 0.5), Some(2.0));
        assert_eq!(Option::linear(&Some(2.0), &Some(4.0), 0.5), Some(3.0));
        // missing outer neighbours degrade to linear
        let got = Option::spline(&None, &Some(0.0), &Some(1.0), &None, 0.25).unwrap();
        assert!((got - 0.25).abs() < EPS);
        assert_eq!(Option::spline(&Some(0.0), &None, &Some(1.0), &Some(2.0), 0.5), None);
        assert_eq!(Option::last_spline(&Some(0.0), &Some(1.0), &None, 0.5), Some(1.0));
        let first = Option::first_spline(&Some(1.0), &Some(2.0), &Some(3.0), 0.5).unwrap();
        assert!((first - 1.5).abs() < EPS);
    }

    #[test]
    fn sequences_pass_trailing_elements_through() {
        let a = vec![0.0, 10.0, 7.0];
        let b = vec![2.0, 20.0];
        let got = Vec::linear(&a, &b, 0.5);
        assert_eq!(got, vec![1.0, 15.0, 7.0]);
        let got = Vec::linear(&b, &a, 0.5);
        assert_eq!(got, vec![1.0, 15.0, 7.0]);
        // element 1 has no f3 partner → last_spline, element 0 → full spline
        let f0 = vec![0.0, 0.0];
        let f1 = vec![1.0, 1.0];
        let f2 = vec![2.0, 2.0];
        let f3 = vec![3.0];
        let got = Vec::spline(&f0, &f1, &f2, &f3, 0.5);
        assert!((got[0] - 1.5).abs() < EPS && (got[1] - 1.5).abs() < EPS);
    }
}
