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

use crate::{
    errors::RecognizerError,
    golden_section,
    log::{debug, warn},
    parameters::Parameters,
    point::Point,
    protractor,
    unistroke::Unistroke,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The distance metric used to score a candidate against the templates.
///
/// Scores produced by the two metrics live on different scales and must
/// never be compared with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Golden-section search for the best rotational alignment over the
    /// normalized point sequences. Score is `1 - distance/half_diagonal`
    /// and can go negative against dissimilar templates.
    GoldenSection,
    /// Closed-form optimal-cosine distance over the unit feature vectors.
    /// Score is `1/distance`, positive infinity on a perfect match.
    Protractor,
}

/// The outcome of a classification: the winning template's name and the
/// metric-specific similarity score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecognitionResult {
    /// Name of the winning template, or `"No Match"` when nothing is
    /// stored yet.
    pub name: String,
    /// Similarity of the candidate to the winning template; its scale
    /// depends on the metric used.
    pub score: f64,
}

impl RecognitionResult {
    /// The sentinel returned when the template store is empty. An
    /// untrained recognizer is an expected state, not an error.
    pub fn no_match() -> Self {
        RecognitionResult {
            name: "No Match".into(),
            score: 0.0,
        }
    }
}

/// The $1 recognizer: a store of named templates plus the
/// normalize / score-against-all / best-match pipeline.
///
/// All operations are synchronous, CPU-bound computation over the
/// in-memory store; the store is the only mutable state. When a sampling
/// thread and an interactive add/retrain/remove surface share one
/// recognizer, wrap it in a reader-writer lock (`recognize` under the
/// read lock, mutations under the write lock) or hand out copy-on-write
/// snapshots, so a reader never observes a partially mutated store.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognizer {
    parameters: Parameters,
    templates: Vec<Unistroke>,
}

impl Recognizer {
    /// Creates a recognizer with the default parameters and no templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer with custom parameters and no templates.
    pub fn with_parameters(parameters: Parameters) -> Self {
        Recognizer {
            parameters,
            templates: Vec::new(),
        }
    }

    /// The parameters this recognizer normalizes and scores with.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The stored templates, in insertion order.
    pub fn templates(&self) -> &[Unistroke] {
        &self.templates
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Classifies a raw point path against the stored templates.
    ///
    /// The path is normalized first (degenerate paths are rejected), then
    /// scored against every template with the chosen metric. Exact
    /// distance ties resolve to the first-inserted template. An empty
    /// store yields the `"No Match"` sentinel.
    pub fn recognize(
        &self,
        points: &[Point],
        metric: Metric,
    ) -> Result<RecognitionResult, RecognizerError> {
        let candidate = Unistroke::normalize(points, &self.parameters)?;
        if self.templates.is_empty() {
            return Ok(RecognitionResult::no_match());
        }

        let (index, distance) = match metric {
            Metric::GoldenSection => self.closest_by_golden_section(&candidate)?,
            Metric::Protractor => self.closest_by_protractor(&candidate)?,
        };
        let score = match metric {
            Metric::GoldenSection => {
                golden_section::similarity(distance, self.parameters.half_diagonal())
            }
            Metric::Protractor => protractor::similarity(distance),
        };

        let winner = &self.templates[index];
        debug!(name = %winner.name, score, ?metric, "candidate classified");
        Ok(RecognitionResult {
            name: winner.name.clone(),
            score,
        })
    }

    /// Normalizes a raw path and appends it to the store under `name`.
    ///
    /// Names need not be unique; training several samples of the same
    /// gesture under one name is allowed.
    pub fn add_gesture(&mut self, name: &str, points: &[Point]) -> Result<(), RecognizerError> {
        let template = Unistroke::new(name, points, &self.parameters)?;
        debug!(name = %template.name, count = self.templates.len() + 1, "template added");
        self.templates.push(template);
        Ok(())
    }

    /// Removes the template at `index`.
    ///
    /// An out-of-bounds index leaves the store unchanged; interactive
    /// remove surfaces expect this to be forgiving rather than an error.
    pub fn delete_gesture(&mut self, index: usize) {
        if index < self.templates.len() {
            self.templates.remove(index);
        } else {
            warn!(index, count = self.templates.len(), "delete ignored: index out of range");
        }
    }

    /// Replaces the template at `index` with a freshly normalized stroke,
    /// keeping its name.
    ///
    /// An out-of-bounds index leaves the store unchanged, mirroring
    /// [`Recognizer::delete_gesture`].
    pub fn retrain_gesture(
        &mut self,
        index: usize,
        points: &[Point],
    ) -> Result<(), RecognizerError> {
        if index >= self.templates.len() {
            warn!(index, count = self.templates.len(), "retrain ignored: index out of range");
            return Ok(());
        }
        let name = self.templates[index].name.clone();
        self.templates[index] = Unistroke::new(&name, points, &self.parameters)?;
        Ok(())
    }

    /// Scans the store with the golden-section metric. Returns the index
    /// of the closest template and its distance; ties keep the
    /// first-seen template.
    fn closest_by_golden_section(
        &self,
        candidate: &[Point],
    ) -> Result<(usize, f64), RecognizerError> {
        let mut min_distance = f64::MAX;
        let mut min_index = 0;
        for (i, template) in self.templates.iter().enumerate() {
            let d = golden_section::distance(
                candidate,
                template,
                self.parameters.angle_range,
                self.parameters.angle_precision,
            )?;
            if d < min_distance {
                min_distance = d;
                min_index = i;
            }
        }
        Ok((min_index, min_distance))
    }

    /// Scans the store with the protractor metric over the vectorized
    /// candidate. Same tie behavior as the golden-section scan.
    fn closest_by_protractor(&self, candidate: &[Point]) -> Result<(usize, f64), RecognizerError> {
        let vector = Unistroke::vectorize(candidate);
        let mut min_distance = f64::MAX;
        let mut min_index = 0;
        for (i, template) in self.templates.iter().enumerate() {
            let d = protractor::distance(&vector, template)?;
            if d < min_distance {
                min_distance = d;
                min_index = i;
            }
        }
        Ok((min_index, min_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_sentinel() {
        let result = RecognitionResult::no_match();
        assert_eq!(result.name, "No Match");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn new_recognizer_is_empty() {
        let recognizer = Recognizer::new();
        assert!(recognizer.is_empty());
        assert_eq!(recognizer.len(), 0);
        assert_eq!(recognizer.parameters().resample_count, 64);
    }
}
