//! Configuration types and builder for the resampler.

use std::num::NonZero;

use crate::boundary::Boundary;
use crate::math;
use crate::Float;

const DEFAULT_SINC_FILTER_SIZE: usize = 1;

/// Reconstruction kernel used to evaluate fractional source indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Zero-order hold - nearest neighbor sampling.
    ///
    /// Simply picks the nearest input sample without interpolation.
    /// Creates a "stepped" waveform.
    Point,

    /// Linear interpolation between the 2 bracketing samples.
    Linear,

    /// Cubic Hermite interpolation using 4 samples.
    ///
    /// Tangents are centered differences damped by the configured tension;
    /// with zero tension this is a Catmull-Rom-like spline.
    Cubic,

    /// Windowed-sinc reconstruction using `2 * filter_size` samples.
    ///
    /// The sinc kernel is shaped by a [`SincWindow`] (Gaussian unless
    /// configured otherwise).
    #[default]
    Sinc,

    /// Sinc reconstruction under a Lanczos window.
    ///
    /// The window's zero crossings coincide with the edge of the kernel
    /// support, implementing a standard Lanczos-`a` kernel with
    /// `a = lanczos_filter_size`.
    Lanczos,
}

impl Method {
    /// Select a method by name.
    ///
    /// Recognizes `"point"`, `"linear"`, `"cubic"`, `"sinc"` and
    /// `"lanczos"`. Any other name (including the empty string) falls back
    /// to [`Method::Sinc`]; this permissiveness is deliberate, callers
    /// validate names upstream if they care.
    pub fn from_name(name: &str) -> Self {
        match name {
            "point" => Self::Point,
            "linear" => Self::Linear,
            "cubic" => Self::Cubic,
            "sinc" => Self::Sinc,
            "lanczos" => Self::Lanczos,
            _ => Self::default(),
        }
    }
}

/// Window function shaping the sinc kernel.
///
/// The window tapers the infinite sinc impulse response down to the finite
/// support the kernel actually evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SincWindow {
    /// Gaussian taper `exp(-x²)`.
    #[default]
    Gaussian,

    /// Lanczos taper `sinc(x / filter_size)`.
    ///
    /// Selected automatically when the method is [`Method::Lanczos`].
    Lanczos,

    /// Caller-supplied window function.
    ///
    /// Invoked with the signed distance (in source samples) between the
    /// evaluation coordinate and the tap; must be cheap and pure.
    Custom(fn(Float) -> Float),
}

impl SincWindow {
    /// Evaluate the window at distance `x` for a kernel of half-width `size`.
    #[inline]
    pub(crate) fn eval(self, x: Float, size: usize) -> Float {
        match self {
            Self::Gaussian => (-x * x).exp(),
            Self::Lanczos => math::sinc(x / size as Float),
            Self::Custom(window) => window(x),
        }
    }
}

/// Resampling configuration.
///
/// Length-independent options for a [`Resampler`](crate::Resampler); scale
/// factors and the resolved kernel are derived when the configuration is
/// handed to [`Resampler::new`](crate::Resampler::new) together with the
/// source and target lengths.
///
/// # Examples
///
/// ```rust
/// use retune::math::nz;
/// use retune::{Boundary, ResampleConfig};
///
/// // Presets
/// let config = ResampleConfig::linear();
/// let config = ResampleConfig::lanczos(nz!(3));
///
/// // Customized
/// let config = ResampleConfig::cubic()
///     .tension(0.5)
///     .boundary(Boundary::Periodic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleConfig {
    pub(crate) method: Method,
    pub(crate) boundary: Boundary,
    pub(crate) tension: Float,
    pub(crate) sinc_filter_size: usize,
    pub(crate) window: SincWindow,
    pub(crate) lanczos_filter_size: Option<usize>,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            boundary: Boundary::default(),
            tension: 0.0,
            sinc_filter_size: DEFAULT_SINC_FILTER_SIZE,
            window: SincWindow::default(),
            lanczos_filter_size: None,
        }
    }
}

impl ResampleConfig {
    /// Create a nearest-neighbor configuration.
    pub fn point() -> Self {
        Self::default().method(Method::Point)
    }

    /// Create a linear interpolation configuration.
    pub fn linear() -> Self {
        Self::default().method(Method::Linear)
    }

    /// Create a cubic Hermite configuration.
    pub fn cubic() -> Self {
        Self::default().method(Method::Cubic)
    }

    /// Create a Gaussian-windowed sinc configuration.
    pub fn sinc() -> Self {
        Self::default().method(Method::Sinc)
    }

    /// Create a Lanczos configuration with the given window size.
    pub fn lanczos(size: NonZero<usize>) -> Self {
        Self::default()
            .method(Method::Lanczos)
            .lanczos_filter_size(size)
    }

    /// Set the reconstruction method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the reconstruction method by name.
    ///
    /// Unrecognized names fall back to [`Method::Sinc`], see
    /// [`Method::from_name`].
    pub fn method_name(self, name: &str) -> Self {
        self.method(Method::from_name(name))
    }

    /// Set the boundary policy for out-of-range sample reads.
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the boundary policy by name.
    ///
    /// Unrecognized names fall back to [`Boundary::Clamp`], see
    /// [`Boundary::from_name`].
    pub fn boundary_name(self, name: &str) -> Self {
        self.boundary(Boundary::from_name(name))
    }

    /// Set the cubic tangent damping, `0.0..=1.0`.
    ///
    /// Zero keeps full Catmull-Rom-like tangents; one flattens all tangents,
    /// degenerating the spline to a smoothstep-weighted blend of the two
    /// bracketing samples. Values outside the range are clamped into it.
    /// Ignored by non-cubic methods.
    pub fn tension(mut self, tension: Float) -> Self {
        self.tension = tension;
        self
    }

    /// Set the half-width of the sinc kernel support, in source samples.
    ///
    /// The kernel evaluates `2 * size` taps per output sample; larger
    /// supports reconstruct better and cost proportionally more. Ignored by
    /// non-sinc methods, superseded by the Lanczos size when the method is
    /// [`Method::Lanczos`].
    pub fn sinc_filter_size(mut self, size: NonZero<usize>) -> Self {
        self.sinc_filter_size = size.get();
        self
    }

    /// Set the window function applied to the sinc kernel.
    ///
    /// Superseded by [`SincWindow::Lanczos`] when the method is
    /// [`Method::Lanczos`].
    pub fn window(mut self, window: SincWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the Lanczos window size.
    ///
    /// Required when the method is [`Method::Lanczos`]; the sinc support is
    /// widened to match, so the kernel ends exactly on the window's zero
    /// crossings.
    pub fn lanczos_filter_size(mut self, size: NonZero<usize>) -> Self {
        self.lanczos_filter_size = Some(size.get());
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nz;

    #[test]
    fn unknown_method_name_falls_back_to_sinc() {
        assert_eq!(Method::from_name("unknown"), Method::Sinc);
        assert_eq!(Method::from_name(""), Method::Sinc);
        assert_eq!(Method::from_name("Linear"), Method::Sinc);
    }

    #[test]
    fn known_method_names_resolve() {
        assert_eq!(Method::from_name("point"), Method::Point);
        assert_eq!(Method::from_name("linear"), Method::Linear);
        assert_eq!(Method::from_name("cubic"), Method::Cubic);
        assert_eq!(Method::from_name("sinc"), Method::Sinc);
        assert_eq!(Method::from_name("lanczos"), Method::Lanczos);
    }

    #[test]
    fn presets_select_their_method() {
        assert_eq!(ResampleConfig::point().method, Method::Point);
        assert_eq!(ResampleConfig::linear().method, Method::Linear);
        assert_eq!(ResampleConfig::cubic().method, Method::Cubic);
        assert_eq!(ResampleConfig::sinc().method, Method::Sinc);

        let lanczos = ResampleConfig::lanczos(nz!(3));
        assert_eq!(lanczos.method, Method::Lanczos);
        assert_eq!(lanczos.lanczos_filter_size, Some(3));
    }

    #[test]
    fn custom_window_is_invoked() {
        fn half(_x: Float) -> Float {
            0.5
        }
        let window = SincWindow::Custom(half);
        assert_eq!(window.eval(0.3, 1), 0.5);
    }

    #[test]
    fn lanczos_window_matches_stretched_sinc() {
        let window = SincWindow::Lanczos;
        assert_eq!(window.eval(0.0, 3), 1.0);
        // zero crossing exactly at the support edge
        assert!(window.eval(3.0, 3).abs() < 1e-6);
    }
}
