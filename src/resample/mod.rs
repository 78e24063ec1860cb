//! Resampling of a sample buffer from one length to another.
//!
//! A [`Resampler`] is built once from the source and target lengths plus a
//! [`ResampleConfig`], then evaluated any number of times. Each evaluation
//! maps an output index `t` to the source-domain coordinate
//! `u = scale_factor * t` and reconstructs the signal there with the
//! configured kernel. Sample reads outside the buffer are resolved by the
//! configured [`Boundary`] policy.
//!
//! Evaluation is a pure function of the configuration and the buffer: no
//! state is retained between calls, and a shared `Resampler` can be used
//! from many threads at once.

use crate::boundary::Boundary;
use crate::math;
use crate::Float;

mod builder;

pub use builder::{Method, ResampleConfig, SincWindow};

/// Error constructing a [`Resampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The source buffer must contain at least one sample.
    #[error("source length must be at least 1")]
    EmptySource,
    /// The requested output must contain at least one sample.
    #[error("target length must be at least 1")]
    EmptyTarget,
    /// The Lanczos method needs an explicit window size.
    #[error("lanczos method requires a window size of at least 1")]
    MissingLanczosSize,
}

/// Evaluates a continuous reconstruction of a sample buffer at fractional
/// indices.
///
/// All scalar parameters are resolved at construction; afterwards the value
/// is immutable. The buffer itself is passed to each call so one `Resampler`
/// can serve many buffers of the same length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resampler {
    /// Length of the source buffer; every evaluation call must pass a
    /// buffer of exactly this length.
    source_len: usize,
    /// Number of output samples one full pass produces.
    target_len: usize,
    /// The reconstruction kernel.
    method: Method,
    /// Policy for sample reads outside `[0, source_len)`.
    boundary: Boundary,
    /// Window shaping the sinc kernel; forced to [`SincWindow::Lanczos`]
    /// when the method is [`Method::Lanczos`].
    window: SincWindow,
    /// Half-width of the sinc kernel support, in source samples.
    filter_size: usize,
    /// Damping applied to cubic tangents, `1 - tension`.
    tangent_factor: Float,
    /// Output index to source coordinate ratio.
    scale_factor: Float,
}

impl Resampler {
    /// Create a resampler mapping `source_len` input samples onto
    /// `target_len` output samples.
    ///
    /// The lengths must both be at least 1, and [`Method::Lanczos`] requires
    /// a window size via [`ResampleConfig::lanczos_filter_size`] (or the
    /// [`ResampleConfig::lanczos`] preset). All other configuration degrades
    /// gracefully instead of erroring: unknown names have already fallen
    /// back to defaults during parsing, and tension is clamped into
    /// `[0, 1]`.
    pub fn new(
        source_len: usize,
        target_len: usize,
        config: ResampleConfig,
    ) -> Result<Resampler, ConfigError> {
        if source_len == 0 {
            return Err(ConfigError::EmptySource);
        }
        if target_len == 0 {
            return Err(ConfigError::EmptyTarget);
        }

        let ResampleConfig {
            method,
            boundary,
            tension,
            sinc_filter_size,
            window,
            lanczos_filter_size,
        } = config;

        // Lanczos is sinc under a Lanczos window whose support matches the
        // window's zero crossings, so the size overrides both fields.
        let (window, filter_size) = match method {
            Method::Lanczos => {
                let size = lanczos_filter_size.ok_or(ConfigError::MissingLanczosSize)?;
                (SincWindow::Lanczos, size)
            }
            _ => (window, sinc_filter_size),
        };

        let scale_factor = match boundary {
            // A cyclic signal has no terminal endpoint: the buffer spans
            // `source_len` unit intervals, one per sample.
            Boundary::Periodic => source_len as Float / target_len as Float,
            // Fixed endpoints span `source_len - 1` intervals between them.
            Boundary::Clamp | Boundary::Mirror => {
                (source_len as Float - 1.0) / target_len as Float
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "resampling {source_len} -> {target_len} samples, \
             method {method:?}, boundary {boundary:?}, scale factor {scale_factor}"
        );

        Ok(Resampler {
            source_len,
            target_len,
            method,
            boundary,
            window,
            filter_size,
            tangent_factor: 1.0 - tension.clamp(0.0, 1.0),
            scale_factor,
        })
    }

    /// Length of the source buffer this resampler was built for.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of output samples one full pass produces.
    #[inline]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// The resolved reconstruction method.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The resolved boundary policy.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Ratio mapping output indices to source coordinates.
    #[inline]
    pub fn scale_factor(&self) -> Float {
        self.scale_factor
    }

    /// Evaluate the reconstructed signal at output index `t`.
    ///
    /// `samples` must have length [`source_len`](Self::source_len). The
    /// usage contract restricts `t` to `[0, target_len)`; values outside it
    /// still produce a deterministic result since the math is continuous
    /// everywhere, but the result is rarely meaningful.
    pub fn evaluate(&self, t: Float, samples: &[Float]) -> Float {
        debug_assert_eq!(samples.len(), self.source_len);

        let u = self.scale_factor * t;
        match self.method {
            Method::Point => self.fetch(u.round() as isize, samples),
            Method::Linear => self.linear(u, samples),
            Method::Cubic => self.cubic(u, samples),
            Method::Sinc | Method::Lanczos => self.windowed_sinc(u, samples),
        }
    }

    /// Iterator over all `target_len` output samples of one pass.
    ///
    /// Outputs have no dependency on each other; the iterator simply
    /// evaluates indices `0..target_len` in order.
    #[inline]
    pub fn stream<'a>(&'a self, samples: &'a [Float]) -> ResampleIter<'a> {
        debug_assert_eq!(samples.len(), self.source_len);
        ResampleIter {
            resampler: self,
            samples,
            position: 0,
        }
    }

    /// Resample the whole buffer into a new `Vec` of `target_len` samples.
    pub fn resample(&self, samples: &[Float]) -> Vec<Float> {
        self.stream(samples).collect()
    }

    /// Resample a buffer in another sample format.
    ///
    /// Converts through [`dasp_sample`] first, so integer PCM buffers
    /// (`i16`, `u16`, ...) can be fed directly.
    pub fn resample_from<S>(&self, samples: &[S]) -> Vec<Float>
    where
        S: dasp_sample::Sample + dasp_sample::ToSample<Float>,
    {
        let samples: Vec<Float> = samples.iter().map(|s| s.to_sample()).collect();
        self.resample(&samples)
    }

    /// Read the sample at index `t`, resolving out-of-range indices through
    /// the boundary policy.
    #[inline]
    fn fetch(&self, t: isize, samples: &[Float]) -> Float {
        if (0..self.source_len as isize).contains(&t) {
            samples[t as usize]
        } else {
            samples[self.boundary.map(t, self.source_len)]
        }
    }

    /// Linear blend between the two samples bracketing `u`.
    fn linear(&self, u: Float, samples: &[Float]) -> Float {
        let k = u.floor();
        let fraction = u - k;
        let k = k as isize;

        math::lerp(self.fetch(k, samples), self.fetch(k + 1, samples), fraction)
    }

    /// Cubic Hermite spline through the samples bracketing `u`, with
    /// centered-difference tangents damped by the tangent factor.
    fn cubic(&self, u: Float, samples: &[Float]) -> Float {
        let k = u.floor();
        let f = u - k;
        let k = k as isize;

        let p0 = self.fetch(k, samples);
        let p1 = self.fetch(k + 1, samples);
        let m0 = self.tangent_factor * (p1 - self.fetch(k - 1, samples)) / 2.0;
        let m1 = self.tangent_factor * (self.fetch(k + 2, samples) - p0) / 2.0;

        math::h00(f) * p0 + math::h10(f) * m0 + math::h01(f) * p1 + math::h11(f) * m1
    }

    /// Windowed-sinc reconstruction over `2 * filter_size` taps around `u`.
    fn windowed_sinc(&self, u: Float, samples: &[Float]) -> Float {
        let k = u.floor() as isize;
        let size = self.filter_size as isize;

        let mut sum = 0.0;
        for n in (k - size + 1)..=(k + size) {
            let x = u - n as Float;
            let weight = math::sinc(x) * self.window.eval(x, self.filter_size);
            sum += weight * self.fetch(n, samples);
        }
        sum
    }
}

/// Iterator over the output samples of one resampling pass.
///
/// Created by [`Resampler::stream`]. The length is always exactly the
/// resampler's [`target_len`](Resampler::target_len).
#[derive(Debug, Clone)]
pub struct ResampleIter<'a> {
    resampler: &'a Resampler,
    samples: &'a [Float],
    position: usize,
}

impl Iterator for ResampleIter<'_> {
    type Item = Float;

    #[inline]
    fn next(&mut self) -> Option<Float> {
        if self.position == self.resampler.target_len {
            return None;
        }

        let value = self.resampler.evaluate(self.position as Float, self.samples);
        self.position += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.resampler.target_len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ResampleIter<'_> {}

impl std::iter::FusedIterator for ResampleIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nz;

    #[test]
    fn empty_lengths_are_rejected() {
        assert_eq!(
            Resampler::new(0, 10, ResampleConfig::default()),
            Err(ConfigError::EmptySource)
        );
        assert_eq!(
            Resampler::new(10, 0, ResampleConfig::default()),
            Err(ConfigError::EmptyTarget)
        );
    }

    #[test]
    fn lanczos_without_size_is_rejected() {
        let config = ResampleConfig::default().method(Method::Lanczos);
        assert_eq!(
            Resampler::new(10, 10, config),
            Err(ConfigError::MissingLanczosSize)
        );
    }

    #[test]
    fn lanczos_supersedes_window_and_support() {
        let config = ResampleConfig::lanczos(nz!(3)).window(SincWindow::Gaussian);
        let resampler = Resampler::new(10, 10, config).unwrap();
        assert_eq!(resampler.window, SincWindow::Lanczos);
        assert_eq!(resampler.filter_size, 3);
    }

    #[test]
    fn periodic_boundary_changes_scale_factor() {
        let clamped = Resampler::new(8, 4, ResampleConfig::linear()).unwrap();
        assert_eq!(clamped.scale_factor(), 7.0 / 4.0);

        let config = ResampleConfig::linear().boundary(Boundary::Periodic);
        let periodic = Resampler::new(8, 4, config).unwrap();
        assert_eq!(periodic.scale_factor(), 2.0);
    }

    #[test]
    fn tension_is_clamped() {
        let over = Resampler::new(4, 4, ResampleConfig::cubic().tension(7.5)).unwrap();
        assert_eq!(over.tangent_factor, 0.0);

        let under = Resampler::new(4, 4, ResampleConfig::cubic().tension(-7.5)).unwrap();
        assert_eq!(under.tangent_factor, 1.0);
    }

    #[test]
    fn unknown_method_name_behaves_like_default_sinc() {
        let samples = [0.25, -1.0, 0.5, 0.75, -0.25];

        let fallback = ResampleConfig::default().method_name("unknown");
        let fallback = Resampler::new(samples.len(), 8, fallback).unwrap();
        let reference = Resampler::new(samples.len(), 8, ResampleConfig::sinc()).unwrap();

        for t in 0..8 {
            assert_eq!(
                fallback.evaluate(t as Float, &samples),
                reference.evaluate(t as Float, &samples),
            );
        }
    }

    #[test]
    fn evaluate_is_deterministic() {
        let samples = [0.1, 0.9, -0.4, 0.3];
        let resampler = Resampler::new(samples.len(), 7, ResampleConfig::sinc()).unwrap();

        for t in 0..7 {
            let first = resampler.evaluate(t as Float, &samples);
            let second = resampler.evaluate(t as Float, &samples);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn stream_is_exact_size() {
        let samples = [1.0, 2.0, 3.0];
        let resampler = Resampler::new(samples.len(), 9, ResampleConfig::linear()).unwrap();

        let mut iter = resampler.stream(&samples);
        assert_eq!(iter.len(), 9);
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.size_hint(), (8, Some(8)));
        assert_eq!(iter.count(), 8);
    }

    #[test]
    fn resample_matches_per_index_evaluation() {
        let samples = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0];
        let resampler = Resampler::new(samples.len(), 13, ResampleConfig::cubic()).unwrap();

        let bulk = resampler.resample(&samples);
        assert_eq!(bulk.len(), 13);
        for (t, value) in bulk.iter().enumerate() {
            assert_eq!(*value, resampler.evaluate(t as Float, &samples));
        }
    }

    #[test]
    fn single_sample_source_is_constant() {
        let samples = [0.5];
        for config in [
            ResampleConfig::point(),
            ResampleConfig::linear(),
            ResampleConfig::cubic(),
            ResampleConfig::sinc(),
        ] {
            for boundary in [Boundary::Clamp, Boundary::Periodic, Boundary::Mirror] {
                let resampler =
                    Resampler::new(1, 4, config.boundary(boundary)).unwrap();
                for value in resampler.resample(&samples) {
                    assert!(value.is_finite());
                }
            }
        }
    }
}
