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

use crate::{errors::RecognizerError, geometry, point::Point, unistroke::Unistroke};

/// Finds the distance between a normalized candidate path and a template
/// at the best rotation inside `[-angle_range, angle_range]`.
///
/// The rotation angle is minimized with a golden-section search: two
/// interior probes split the bracket by the golden ratio, and each
/// iteration shrinks the bracket toward the smaller-valued probe until it
/// is narrower than `angle_precision`. Distance as a function of angle is
/// unimodal near the optimum, which is what makes the bracket shrink
/// valid.
pub fn distance(
    candidate: &[Point],
    template: &Unistroke,
    angle_range: f64,
    angle_precision: f64,
) -> Result<f64, RecognizerError> {
    if candidate.len() != template.points.len() {
        return Err(RecognizerError::InvalidDimension {
            candidate: candidate.len(),
            template: template.points.len(),
        });
    }

    let phi = 0.5 * (5.0_f64.sqrt() - 1.0);
    let mut a = -angle_range;
    let mut b = angle_range;

    let mut x1 = phi * a + (1.0 - phi) * b;
    let mut f1 = distance_at_angle(candidate, template, x1);
    let mut x2 = (1.0 - phi) * a + phi * b;
    let mut f2 = distance_at_angle(candidate, template, x2);

    while (b - a).abs() > angle_precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = phi * a + (1.0 - phi) * b;
            f1 = distance_at_angle(candidate, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - phi) * a + phi * b;
            f2 = distance_at_angle(candidate, template, x2);
        }
    }
    Ok(f1.min(f2))
}

/// Converts a raw alignment distance into a similarity score.
///
/// The score is `1 - distance / half_diagonal` and goes negative whenever
/// the distance exceeds half the diagonal of the normalizing square,
/// which happens against sufficiently dissimilar templates. Callers must
/// not assume the score lies in `[0, 1]`.
pub fn similarity(distance: f64, half_diagonal: f64) -> f64 {
    1.0 - distance / half_diagonal
}

/// Rotates the candidate by the probe angle, then measures its path
/// distance to the template.
fn distance_at_angle(candidate: &[Point], template: &Unistroke, radians: f64) -> f64 {
    let rotated = geometry::rotate_by(candidate, radians);
    path_distance(&rotated, &template.points)
}

/// Mean point-wise Euclidean distance between two equal-length paths.
fn path_distance(pts1: &[Point], pts2: &[Point]) -> f64 {
    let mut d = 0.0;
    for (p1, p2) in pts1.iter().zip(pts2) {
        d += geometry::euclidean_distance(p1, p2);
    }
    d / pts1.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameters;
    use approx::assert_abs_diff_eq;

    fn hook() -> Vec<Point> {
        vec![
            Point::new(10.0, 0.0),
            Point::new(50.0, 10.0),
            Point::new(60.0, 50.0),
            Point::new(30.0, 80.0),
            Point::new(0.0, 60.0),
        ]
    }

    #[test]
    fn distance_to_itself_is_small() {
        let params = Parameters::default();
        let template = Unistroke::new("hook", &hook(), &params).unwrap();
        let candidate = Unistroke::normalize(&hook(), &params).unwrap();
        let d = distance(
            &candidate,
            &template,
            params.angle_range,
            params.angle_precision,
        )
        .unwrap();
        // the search stops a bracket-width away from zero rotation, so the
        // result is near zero rather than exactly zero
        assert!(d < 2.0, "self distance was {d}");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let params = Parameters::default();
        let template = Unistroke::new("hook", &hook(), &params).unwrap();
        let short_params = Parameters {
            resample_count: 32,
            ..Parameters::default()
        };
        let candidate = Unistroke::normalize(&hook(), &short_params).unwrap();
        assert_eq!(
            distance(
                &candidate,
                &template,
                params.angle_range,
                params.angle_precision
            ),
            Err(RecognizerError::InvalidDimension {
                candidate: 32,
                template: 64
            })
        );
    }

    #[test]
    fn path_distance_averages_over_the_point_count() {
        let a = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
        let b = vec![Point::new(3.0, 4.0), Point::new(0.0, 1.0)];
        assert_abs_diff_eq!(path_distance(&a, &b), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn similarity_is_one_at_zero_distance_and_negative_past_the_half_diagonal() {
        let half_diagonal = Parameters::default().half_diagonal();
        assert_abs_diff_eq!(similarity(0.0, half_diagonal), 1.0, epsilon = 1e-12);
        assert!(similarity(half_diagonal * 1.5, half_diagonal) < 0.0);
    }
}
