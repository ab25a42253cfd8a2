/**
 * ```text
 * The Protractor gesture recognizer (rust version)
 *
 * Protractor is the closed-form enhancement of the $1 Unistroke
 * Recognizer. Original authors:
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
 * The academic publication for the Protractor enhancement, and what
 * should be used to cite it, is:
 *
 *	Li, Y. (2010). Protractor: A fast and accurate gesture recognizer.
 *	  Proceedings of the ACM Conference on Human Factors in Computing
 *	  Systems (CHI '10). Atlanta, Georgia (April 10-15, 2010). New
 *	  York: ACM Press, pp. 2169-2172.
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

use crate::{errors::RecognizerError, unistroke::Unistroke};

/// Optimal-cosine distance between a unit-vectorized candidate and a
/// template.
///
/// The vectorized representation makes the rotation minimization solvable
/// in closed form: the best rotation angle is `atan(b/a)` and no search is
/// needed. The cosine argument is clamped against floating-point drift
/// right at a perfect match.
pub fn distance(candidate: &[f64], template: &Unistroke) -> Result<f64, RecognizerError> {
    if candidate.len() != template.vector.len() {
        return Err(RecognizerError::InvalidDimension {
            candidate: candidate.len() / 2,
            template: template.vector.len() / 2,
        });
    }

    let mut a = 0.0;
    let mut b = 0.0;
    for i in (0..candidate.len()).step_by(2) {
        a += candidate[i] * template.vector[i] + candidate[i + 1] * template.vector[i + 1];
        b += candidate[i] * template.vector[i + 1] - candidate[i + 1] * template.vector[i];
    }
    let angle = (b / a).atan();
    Ok((a * angle.cos() + b * angle.sin()).clamp(-1.0, 1.0).acos())
}

/// Converts an optimal-cosine distance into a similarity score.
///
/// A perfect match has distance zero; its score is defined as positive
/// infinity rather than left to a division by zero.
pub fn similarity(distance: f64) -> f64 {
    if distance == 0.0 {
        f64::INFINITY
    } else {
        1.0 / distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parameters::Parameters, point::Point};
    use approx::assert_abs_diff_eq;

    fn arc() -> Vec<Point> {
        (0..24)
            .map(|i| {
                let t = i as f64 / 23.0 * std::f64::consts::PI;
                Point::new(100.0 * t.cos(), 60.0 * t.sin())
            })
            .collect()
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let params = Parameters::default();
        let template = Unistroke::new("arc", &arc(), &params).unwrap();
        let d = distance(&template.vector, &template).unwrap();
        assert_abs_diff_eq!(d, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let params = Parameters::default();
        let template = Unistroke::new("arc", &arc(), &params).unwrap();
        let short_params = Parameters {
            resample_count: 16,
            ..Parameters::default()
        };
        let candidate = Unistroke::new("short", &arc(), &short_params).unwrap();
        assert_eq!(
            distance(&candidate.vector, &template),
            Err(RecognizerError::InvalidDimension {
                candidate: 16,
                template: 64
            })
        );
    }

    #[test]
    fn similarity_of_a_perfect_match_is_infinite() {
        assert_eq!(similarity(0.0), f64::INFINITY);
    }

    #[test]
    fn similarity_is_the_reciprocal_distance() {
        assert_abs_diff_eq!(similarity(0.5), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(similarity(2.0), 0.5, epsilon = 1e-12);
    }
}
