//! Rust implementation of the $1 (Unistroke) and Protractor gesture
//! recognizers.
//!
//! A raw 2D point path is normalized into a scale-, rotation-, and
//! position-invariant representation and classified against a store of
//! named templates with one of two distance metrics:
//!
//! * [`recognizer::Metric::GoldenSection`] - a golden-section search for
//!   the best rotational alignment over the normalized point sequences.
//! * [`recognizer::Metric::Protractor`] - a closed-form optimal-cosine
//!   distance over unit-vectorized sequences, no search needed.
//!
//! The point producer (mouse drag, accelerometer sampling) and the
//! consumer of the classification result stay outside this crate; the
//! whole surface is `points in, result out`.
//!
//! ```
//! use one_recognizer::point::Point;
//! use one_recognizer::recognizer::{Metric, Recognizer};
//!
//! let stroke: Vec<Point> = (0..32)
//!     .map(|i| Point::new(i as f64, (i * i) as f64 / 10.0))
//!     .collect();
//!
//! let mut recognizer = Recognizer::new();
//! recognizer.add_gesture("swoosh", &stroke)?;
//!
//! let result = recognizer.recognize(&stroke, Metric::Protractor)?;
//! assert_eq!(result.name, "swoosh");
//! # Ok::<(), one_recognizer::errors::RecognizerError>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod golden_section;
pub mod log;
pub mod parameters;
pub mod point;
pub mod protractor;
pub mod recognizer;
pub mod unistroke;
