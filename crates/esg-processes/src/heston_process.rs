//! Heston stochastic volatility process.
//!
//! The model couples a price and its instantaneous variance:
//!
//! ```text
//! dp = μ p dt + √v p dW_p
//! dv = κ(θ − v) dt + ξ √v dW_v
//! dW_p dW_v = ρ dt
//! ```
//!
//! and is advanced with a plain Euler step. The Euler variance update can
//! undershoot zero; what happens next is decided by [`VarianceFloor`].

use esg_core::{
    errors::{Error, Result},
    Price, Real, Time, Variance,
};
use esg_math::CorrelationTransform;
use std::fmt;
use std::str::FromStr;

/// What the Euler step does with a variance below zero.
///
/// The policy is applied when the previous variance is *used*; the stored
/// state is the raw Euler update. Under [`VarianceFloor::Reflection`] the
/// update also starts from `|v|`, so a negative entry is reflected before
/// the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VarianceFloor {
    /// Use `max(v, 0)`. Paths stay finite.
    #[default]
    FullTruncation,
    /// Use `|v|` everywhere, including as the base of the update. Paths
    /// stay finite.
    Reflection,
    /// Use `v` unchanged. A negative variance makes `√v` NaN, and the NaN
    /// spreads through the rest of that scenario.
    Propagate,
    /// Use `v` unchanged and fail the simulation as soon as any variance is
    /// negative.
    Reject,
}

impl VarianceFloor {
    /// The variance fed to the drift and diffusion terms.
    #[inline]
    pub fn effective(self, v: Variance) -> Variance {
        match self {
            VarianceFloor::FullTruncation => v.max(0.0),
            VarianceFloor::Reflection => v.abs(),
            VarianceFloor::Propagate | VarianceFloor::Reject => v,
        }
    }

    /// The variance the Euler update starts from.
    #[inline]
    pub fn base(self, v: Variance) -> Variance {
        match self {
            VarianceFloor::Reflection => v.abs(),
            _ => v,
        }
    }

    /// `true` for the policies that keep the square root well defined.
    pub fn keeps_paths_finite(self) -> bool {
        matches!(
            self,
            VarianceFloor::FullTruncation | VarianceFloor::Reflection
        )
    }

    /// Name used by `Display` and accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            VarianceFloor::FullTruncation => "full_truncation",
            VarianceFloor::Reflection => "reflection",
            VarianceFloor::Propagate => "propagate",
            VarianceFloor::Reject => "reject",
        }
    }
}

impl fmt::Display for VarianceFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarianceFloor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "full_truncation" | "truncate" => Ok(VarianceFloor::FullTruncation),
            "reflection" | "reflect" => Ok(VarianceFloor::Reflection),
            "propagate" | "nan" => Ok(VarianceFloor::Propagate),
            "reject" | "error" => Ok(VarianceFloor::Reject),
            other => Err(Error::InvalidArgument(format!(
                "unknown variance floor policy '{other}'"
            ))),
        }
    }
}

/// Raw Heston model inputs.
///
/// Field names follow the usual notation: `xi` is the volatility of
/// variance, `mu` the price drift.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HestonParams {
    /// Initial price.
    pub p0: Price,
    /// Initial variance.
    pub v0: Variance,
    /// Mean-reversion speed of the variance.
    pub kappa: Real,
    /// Long-run variance.
    pub theta: Variance,
    /// Volatility of variance.
    pub xi: Real,
    /// Price drift.
    pub mu: Real,
    /// Correlation between the price and variance drivers.
    pub rho: Real,
}

/// The Heston process with its correlation factor already built.
#[derive(Debug, Clone)]
pub struct HestonProcess {
    params: HestonParams,
    correlation: CorrelationTransform,
    variance_floor: VarianceFloor,
}

impl HestonProcess {
    /// Build the process, factoring the correlation matrix once.
    ///
    /// Fails with [`Error::Decomposition`] when `rho` is outside `[-1, 1]`.
    /// No other parameter is validated: the remaining inputs only need to
    /// be numbers for the recursion to be defined.
    pub fn new(params: HestonParams) -> Result<Self> {
        let correlation = CorrelationTransform::new(params.rho)?;
        Ok(Self {
            params,
            correlation,
            variance_floor: VarianceFloor::default(),
        })
    }

    /// Replace the variance floor policy.
    pub fn with_variance_floor(mut self, variance_floor: VarianceFloor) -> Self {
        self.variance_floor = variance_floor;
        self
    }

    /// The parameters the process was built from.
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Initial price.
    pub fn p0(&self) -> Price {
        self.params.p0
    }

    /// Initial variance.
    pub fn v0(&self) -> Variance {
        self.params.v0
    }

    /// Mean-reversion speed.
    pub fn kappa(&self) -> Real {
        self.params.kappa
    }

    /// Long-run variance.
    pub fn theta(&self) -> Variance {
        self.params.theta
    }

    /// Vol-of-variance.
    pub fn xi(&self) -> Real {
        self.params.xi
    }

    /// Price drift.
    pub fn mu(&self) -> Real {
        self.params.mu
    }

    /// Correlation.
    pub fn rho(&self) -> Real {
        self.params.rho
    }

    /// The Cholesky factor applied to every pair of draws.
    pub fn correlation(&self) -> &CorrelationTransform {
        &self.correlation
    }

    /// Active variance floor policy.
    pub fn variance_floor(&self) -> VarianceFloor {
        self.variance_floor
    }

    /// Feller condition `2κθ > ξ²`.
    ///
    /// When it holds the continuous-time variance never reaches zero; the
    /// Euler scheme can still undershoot for coarse steps.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.params.kappa * self.params.theta > self.params.xi * self.params.xi
    }

    /// One Euler step of length `dt` from `(v, p)`.
    ///
    /// `dw` holds two independent standard-normal draws; they are correlated
    /// here, the first becoming the price shock and the second the variance
    /// shock. Returns `(v_next, p_next)`.
    #[inline]
    pub fn evolve(&self, v: Variance, p: Price, dt: Time, dw: [Real; 2]) -> (Variance, Price) {
        let (shock_price, shock_vol) = self.correlation.apply(dw[0], dw[1]);
        let v_eff = self.variance_floor.effective(v);
        let v_base = self.variance_floor.base(v);
        let sqrt_v = v_eff.sqrt();
        let sqrt_dt = dt.sqrt();
        let HestonParams {
            kappa,
            theta,
            xi,
            mu,
            ..
        } = self.params;

        let v_next = v_base + kappa * (theta - v_eff) * dt + xi * sqrt_v * sqrt_dt * shock_vol;
        let p_next = p + mu * p * dt + sqrt_v * p * sqrt_dt * shock_price;
        (v_next, p_next)
    }
}
