/**
 * ```text
 * The $1 Unistroke Recognizer (rust version)
 *
 * Original authors:
 *
 * 	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *      Microsoft Research
 *      One Microsoft Way
 *      Redmond, WA 98052
 *      awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 * 	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user
 *	  interface prototypes. Proceedings of the ACM Symposium on User
 *	  Interface Software and Technology (UIST '07). Newport, Rhode
 *	  Island (October 7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (C) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and
 * Yang Li. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D.
 * Wilson OR Yang Li BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
 * PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR
 * PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
 * LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
 * NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
 * SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 * ```
**/

use crate::{errors::RecognizerError, geometry, parameters::Parameters, point::Point};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Implements a gesture as a unistroke: a named point path normalized with
/// respect to sampling, rotation, scale, and position.
///
/// Gestures are resampled into a fixed number of points, rotated so their
/// indicative angle is zero, scaled into a fixed square (non-uniformly, an
/// intentional property of the $1 family), and translated so their
/// centroid sits on the origin.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unistroke {
    /// Gesture class
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
    /// Unit-length interleaved (x0, y0, x1, y1, ...) representation of the
    /// normalized points, consumed by the protractor metric. Derivable
    /// from `points`; kept so classification never recomputes it.
    pub vector: Vec<f64>,
}

impl Unistroke {
    /// Constructs a new unistroke from a raw point path and a name.
    ///
    /// Fails with [`RecognizerError::DegenerateStroke`] when the path is
    /// too short or too flat to normalize.
    pub fn new(name: &str, points: &[Point], params: &Parameters) -> Result<Self, RecognizerError> {
        let points = Self::normalize(points, params)?;
        let vector = Self::vectorize(&points);
        Ok(Self {
            name: name.into(),
            points,
            vector,
        })
    }

    /// Runs the normalization pipeline on a raw path and returns exactly
    /// `params.resample_count` points centered on the origin.
    ///
    /// The input is only read; resampling works on its own copy of the
    /// walk state instead of splicing interpolated points into the
    /// caller's list.
    pub fn normalize(points: &[Point], params: &Parameters) -> Result<Vec<Point>, RecognizerError> {
        if points.len() < 2 || geometry::path_length(points) == 0.0 {
            return Err(RecognizerError::DegenerateStroke);
        }

        let pts = Self::resample(points, params.resample_count);
        let radians = Self::indicative_angle(&pts);
        let pts = geometry::rotate_by(&pts, -radians);
        let pts = Self::scale_to(&pts, params.square_size)?;
        Ok(Self::translate_to_origin(&pts))
    }

    /// Flattens a normalized point path into a unit-length interleaved
    /// vector for the protractor metric.
    pub fn vectorize(points: &[Point]) -> Vec<f64> {
        let mut vector = Vec::with_capacity(points.len() * 2);
        let mut sum = 0.0;
        for p in points {
            vector.push(p.x);
            vector.push(p.y);
            sum += p.x * p.x + p.y * p.y;
        }
        let magnitude = sum.sqrt();
        for v in &mut vector {
            *v /= magnitude;
        }
        vector
    }

    /// Resamples the path into n equally-distanced points
    fn resample(points: &[Point], n: usize) -> Vec<Point> {
        let mut new_points = Vec::with_capacity(n);
        new_points.push(points[0]);

        let interval = geometry::path_length(points) / (n as f64 - 1.0);
        let mut d = 0.0;

        for i in 1..points.len() {
            let mut dist = geometry::euclidean_distance(&points[i - 1], &points[i]);
            if (d + dist) >= interval {
                let mut first_point = points[i - 1];
                while (d + dist) >= interval {
                    // interpolation parameter; a zero-length segment would
                    // divide by zero, split it down the middle instead
                    let t = if dist != 0.0 {
                        ((interval - d) / dist).clamp(0.0, 1.0)
                    } else {
                        0.5
                    };
                    let q = Point::new(
                        (1.0 - t) * first_point.x + t * points[i].x,
                        (1.0 - t) * first_point.y + t * points[i].y,
                    );
                    new_points.push(q);

                    // the rest of this segment is walked from the new point
                    dist = d + dist - interval;
                    d = 0.0;
                    first_point = q;
                }
                d = dist;
            } else {
                d += dist;
            }
        }
        // rounding can leave the walk a point or two short of n
        while new_points.len() < n {
            new_points.push(points[points.len() - 1]);
        }
        new_points.truncate(n);
        new_points
    }

    /// Angle from the first point to the centroid, the canonical
    /// orientation reference of the $1 family.
    fn indicative_angle(points: &[Point]) -> f64 {
        let c = geometry::centroid(points);
        (c.y - points[0].y).atan2(c.x - points[0].x)
    }

    /// Scales x and y independently into a size x size square. Aspect
    /// ratio is deliberately not preserved.
    ///
    /// A path that is flat along either axis cannot be scaled; rotation
    /// round-off leaves a collinear path with a near-zero extent rather
    /// than an exact zero, so the check is relative to the larger extent.
    fn scale_to(points: &[Point], size: f64) -> Result<Vec<Point>, RecognizerError> {
        let bb = geometry::bounding_box(points);
        let extent = bb.width.max(bb.height);
        if bb.width <= extent * 1e-12 || bb.height <= extent * 1e-12 {
            return Err(RecognizerError::DegenerateStroke);
        }
        Ok(points
            .iter()
            .map(|p| Point::new(p.x * (size / bb.width), p.y * (size / bb.height)))
            .collect())
    }

    /// Translates the points so their centroid lands on the origin
    fn translate_to_origin(points: &[Point]) -> Vec<Point> {
        let c = geometry::centroid(points);
        points
            .iter()
            .map(|p| Point::new(p.x - c.x, p.y - c.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 45.0),
            Point::new(60.0, 5.0),
            Point::new(95.0, 60.0),
            Point::new(130.0, 10.0),
        ]
    }

    #[test]
    fn resample_produces_exactly_n_points() {
        for n in [16, 64, 128] {
            assert_eq!(Unistroke::resample(&zigzag(), n).len(), n);
        }
    }

    #[test]
    fn resample_spaces_points_by_the_interval_on_a_straight_line() {
        let line: Vec<Point> = (0..10).map(|i| Point::new(i as f64 * 7.0, 0.0)).collect();
        let n = 64;
        let interval = geometry::path_length(&line) / (n as f64 - 1.0);
        let resampled = Unistroke::resample(&line, n);
        for pair in resampled.windows(2) {
            assert_abs_diff_eq!(
                geometry::euclidean_distance(&pair[0], &pair[1]),
                interval,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn resample_total_length_approximates_the_walked_path() {
        let n = 64;
        let resampled = Unistroke::resample(&zigzag(), n);
        let interval = geometry::path_length(&zigzag()) / (n as f64 - 1.0);
        // resampled points sit on the original polyline, so the chords can
        // only cut corners, never exceed the walked length
        let total = geometry::path_length(&resampled);
        assert!(total <= (n as f64 - 1.0) * interval + 1e-9);
        assert!(total >= (n as f64 - 1.0) * interval * 0.95);
    }

    #[test]
    fn resample_does_not_mutate_the_input() {
        let original = zigzag();
        let copy = original.clone();
        let _ = Unistroke::resample(&original, 64);
        assert_eq!(original, copy);
    }

    #[test]
    fn resample_skips_zero_length_segments() {
        let mut path = zigzag();
        path.insert(2, path[1]); // duplicate consecutive point
        let resampled = Unistroke::resample(&path, 64);
        assert_eq!(resampled.len(), 64);
        assert!(resampled.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn normalize_returns_resample_count_points() {
        let params = Parameters::default();
        let pts = Unistroke::normalize(&zigzag(), &params).unwrap();
        assert_eq!(pts.len(), 64);

        let custom = Parameters {
            resample_count: 32,
            ..Parameters::default()
        };
        let pts = Unistroke::normalize(&zigzag(), &custom).unwrap();
        assert_eq!(pts.len(), 32);
    }

    #[test]
    fn normalize_centers_the_centroid_on_the_origin() {
        let params = Parameters::default();
        let pts = Unistroke::normalize(&zigzag(), &params).unwrap();
        let c = geometry::centroid(&pts);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_scales_to_the_square_size() {
        let params = Parameters::default();
        let pts = Unistroke::normalize(&zigzag(), &params).unwrap();
        let bb = geometry::bounding_box(&pts);
        assert_abs_diff_eq!(bb.width, params.square_size, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.height, params.square_size, epsilon = 1e-9);
    }

    #[test]
    fn single_point_is_degenerate() {
        let params = Parameters::default();
        assert_eq!(
            Unistroke::normalize(&[Point::new(5.0, 5.0)], &params),
            Err(RecognizerError::DegenerateStroke)
        );
    }

    #[test]
    fn zero_length_path_is_degenerate() {
        let params = Parameters::default();
        let pts = vec![Point::new(3.0, 4.0); 10];
        assert_eq!(
            Unistroke::normalize(&pts, &params),
            Err(RecognizerError::DegenerateStroke)
        );
    }

    #[test]
    fn collinear_path_is_degenerate() {
        let params = Parameters::default();
        let line: Vec<Point> = (0..20)
            .map(|i| Point::new(i as f64 * 3.0, i as f64 * 2.0))
            .collect();
        assert_eq!(
            Unistroke::normalize(&line, &params),
            Err(RecognizerError::DegenerateStroke)
        );
    }

    #[test]
    fn vectorize_is_unit_length() {
        let params = Parameters::default();
        let pts = Unistroke::normalize(&zigzag(), &params).unwrap();
        let vector = Unistroke::vectorize(&pts);
        assert_eq!(vector.len(), 2 * pts.len());
        let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn new_keeps_the_name_and_caches_the_vector() {
        let params = Parameters::default();
        let stroke = Unistroke::new("zigzag", &zigzag(), &params).unwrap();
        assert_eq!(stroke.name, "zigzag");
        assert_eq!(stroke.vector, Unistroke::vectorize(&stroke.points));
    }
}
