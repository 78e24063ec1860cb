//! Scalar resampling of audio sample buffers.
//!
//! This crate is the numeric core of an audio buffer toolkit: it reconstructs
//! a continuous signal from a buffer of samples and evaluates that
//! reconstruction at fractional indices, turning a buffer of one length into
//! a buffer of another. File parsing, format handling and channel
//! de-interleaving live upstream; this crate only ever sees one
//! fully-materialized buffer and a target length.
//!
//! # Quick Start
//!
//! ```rust
//! use retune::{ResampleConfig, Resampler};
//!
//! let samples = [0.0, 10.0, 0.0, 10.0, 0.0];
//! let resampler = Resampler::new(samples.len(), 10, ResampleConfig::linear())?;
//! let stretched = resampler.resample(&samples);
//! assert_eq!(stretched.len(), 10);
//! # Ok::<(), retune::ConfigError>(())
//! ```
//!
//! For advanced control, use the [`ResampleConfig`] builder:
//!
//! ```rust
//! use retune::math::nz;
//! use retune::{Boundary, Method, ResampleConfig, Resampler, SincWindow};
//!
//! let config = ResampleConfig::default()
//!     .method(Method::Sinc)                // windowed-sinc reconstruction
//!     .sinc_filter_size(nz!(4))            // 8-tap support
//!     .window(SincWindow::Gaussian)        // default taper
//!     .boundary(Boundary::Mirror);         // reflect at the edges
//! let resampler = Resampler::new(5, 10, config)?;
//! # Ok::<(), retune::ConfigError>(())
//! ```
//!
//! # Choosing a method
//!
//! **Polynomial reconstruction** ([`Method::Point`], [`Method::Linear`],
//! [`Method::Cubic`]) is cheap and evaluates a fixed, small neighborhood of
//! the source buffer. It does not band-limit the signal, so downsampling can
//! alias.
//!
//! **Windowed-sinc reconstruction** ([`Method::Sinc`], [`Method::Lanczos`])
//! evaluates `2 * filter_size` taps of a sinc kernel shaped by a window
//! function. Larger filter sizes trade CPU for reconstruction quality.
//!
//! # Boundary policies
//!
//! Kernels read samples outside `[0, source_len)` near the buffer edges.
//! [`Boundary`] decides what those reads see: the edge sample ([`Boundary::Clamp`]),
//! a periodic repetition of the buffer ([`Boundary::Periodic`]), or a
//! reflection of it ([`Boundary::Mirror`]).
//!
//! # Evaluating single indices
//!
//! A full pass over the target length is just one way to drive the engine.
//! [`Resampler::evaluate`] computes a single output sample from a single
//! fractional index, so callers can sample any position on demand:
//!
//! ```rust
//! use retune::{ResampleConfig, Resampler};
//!
//! let samples = [0.0, 1.0, 4.0, 9.0];
//! let resampler = Resampler::new(samples.len(), 8, ResampleConfig::cubic())?;
//! let halfway = resampler.evaluate(4.0, &samples);
//! assert!(halfway.is_finite());
//! # Ok::<(), retune::ConfigError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod boundary;
pub mod math;
pub mod resample;

pub use crate::boundary::Boundary;
pub use crate::resample::{
    ConfigError, Method, ResampleConfig, ResampleIter, Resampler, SincWindow,
};

/// The floating point type used for samples and coordinates.
#[cfg(not(feature = "64bit"))]
pub type Float = f32;
/// The floating point type used for samples and coordinates.
#[cfg(feature = "64bit")]
pub type Float = f64;

/// Value of π in the active [`Float`] width.
#[cfg(not(feature = "64bit"))]
pub(crate) const PI: Float = std::f32::consts::PI;
/// Value of π in the active [`Float`] width.
#[cfg(feature = "64bit")]
pub(crate) const PI: Float = std::f64::consts::PI;
