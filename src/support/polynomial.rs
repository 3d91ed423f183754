//! Fixed-size polynomials in one variable.
//!
//! [`Polynomial<N>`] holds `N` coefficients in ascending power order and
//! represents `f(x) = Σ cᵢ·xⁱ`. The size is a const generic, so arithmetic
//! between polynomials of different sizes is rejected at compile time.
//!
//! Two integral forms are derived from a polynomial:
//!
//! - [`Antiderivative<N>`]: `∫ f dx`, which has `N + 1` coefficients.
//! - [`LogPolynomial<N>`]: `∫ f/x dx`, where the constant term of `f`
//!   integrates to a logarithm.
//!
//! Both carry an explicit integration constant that callers fix as needed.

use std::{
    fmt,
    iter,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign},
};

use super::tokens::{FromTokens, TokenError, next_scalar};

/// A polynomial with `N` coefficients, `c₀ + c₁·x + … + c_{N-1}·x^{N-1}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<const N: usize> {
    coeffs: [f64; N],
}

impl<const N: usize> Polynomial<N> {
    /// Creates a polynomial from coefficients in ascending power order.
    #[must_use]
    pub const fn new(coeffs: [f64; N]) -> Self {
        Self { coeffs }
    }

    /// Returns the polynomial with all coefficients zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: [0.0; N] }
    }

    /// Returns the coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64; N] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns `∫ f dx` with a zero integration constant.
    #[must_use]
    pub fn integral(&self) -> Antiderivative<N> {
        let mut terms = [0.0; N];
        for (i, (term, c)) in terms.iter_mut().zip(&self.coeffs).enumerate() {
            *term = c / (i + 1) as f64;
        }

        Antiderivative {
            constant: 0.0,
            terms: Polynomial::new(terms),
        }
    }

    /// Returns `∫ f/x dx` with a zero integration constant.
    ///
    /// The `c₀` term integrates to `c₀·ln x`; every other term `cᵢ·xⁱ⁻¹`
    /// integrates to `cᵢ/i·xⁱ`.
    #[must_use]
    pub fn integral_minus_one(&self) -> LogPolynomial<N> {
        let mut coeffs = [0.0; N];
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            coeffs[i] = c / i as f64;
        }

        LogPolynomial {
            log_coeff: self.coeffs.first().copied().unwrap_or(0.0),
            poly: Polynomial::new(coeffs),
        }
    }
}

impl<const N: usize> Default for Polynomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial<N> {
    fn from(coeffs: [f64; N]) -> Self {
        Self::new(coeffs)
    }
}

impl<const N: usize> Index<usize> for Polynomial<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

impl<const N: usize> IndexMut<usize> for Polynomial<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.coeffs[index]
    }
}

impl<const N: usize> AddAssign for Polynomial<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, r) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *c += r;
        }
    }
}

impl<const N: usize> SubAssign for Polynomial<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (c, r) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *c -= r;
        }
    }
}

impl<const N: usize> MulAssign<f64> for Polynomial<N> {
    fn mul_assign(&mut self, rhs: f64) {
        for c in &mut self.coeffs {
            *c *= rhs;
        }
    }
}

impl<const N: usize> Add for Polynomial<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize> Sub for Polynomial<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize> Mul<f64> for Polynomial<N> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl<const N: usize> Mul<Polynomial<N>> for f64 {
    type Output = Polynomial<N>;

    fn mul(self, rhs: Polynomial<N>) -> Polynomial<N> {
        rhs * self
    }
}

/// Writes the coefficients separated by single spaces.
impl<const N: usize> fmt::Display for Polynomial<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<const N: usize> FromTokens for Polynomial<N> {
    type Error = TokenError;

    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, TokenError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut coeffs = [0.0; N];
        for c in &mut coeffs {
            *c = next_scalar(tokens, "polynomial coefficient")?;
        }
        Ok(Self::new(coeffs))
    }
}

/// The antiderivative of a [`Polynomial<N>`].
///
/// Represents `C + Σ cᵢ/(i+1)·xⁱ⁺¹`, a polynomial of size `N + 1` whose
/// constant `C` is free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antiderivative<const N: usize> {
    constant: f64,
    /// Coefficient `i` multiplies `xⁱ⁺¹`.
    terms: Polynomial<N>,
}

impl<const N: usize> Antiderivative<N> {
    /// Evaluates the antiderivative at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.constant + x * self.terms.evaluate(x)
    }

    /// Returns the integration constant.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Sets the integration constant.
    pub fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
    }

    /// Returns all `N + 1` coefficients in ascending power order,
    /// starting with the integration constant.
    pub fn coefficients(&self) -> impl Iterator<Item = f64> + '_ {
        iter::once(self.constant).chain(self.terms.coefficients().iter().copied())
    }

    /// Differentiates back to the integrand.
    #[must_use]
    pub fn derivative(&self) -> Polynomial<N> {
        let mut coeffs = *self.terms.coefficients();
        for (i, c) in coeffs.iter_mut().enumerate() {
            *c *= (i + 1) as f64;
        }
        Polynomial::new(coeffs)
    }
}

/// The integral `∫ f/x dx` of a [`Polynomial<N>`].
///
/// Represents `a·ln x + C + Σ_{i≥1} bᵢ·xⁱ`, where `C` is stored as the
/// zeroth polynomial coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPolynomial<const N: usize> {
    log_coeff: f64,
    poly: Polynomial<N>,
}

impl<const N: usize> LogPolynomial<N> {
    /// Evaluates at `x`.
    ///
    /// The result is only finite for `x > 0` unless the log coefficient is zero.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.log_coeff == 0.0 {
            self.poly.evaluate(x)
        } else {
            self.log_coeff * x.ln() + self.poly.evaluate(x)
        }
    }

    /// Returns the coefficient of `ln x`.
    #[must_use]
    pub fn log_coefficient(&self) -> f64 {
        self.log_coeff
    }

    /// Returns the algebraic part, whose zeroth coefficient is the constant.
    #[must_use]
    pub fn polynomial(&self) -> &Polynomial<N> {
        &self.poly
    }

    /// Returns the integration constant.
    #[must_use]
    pub fn constant(&self) -> f64 {
        if N == 0 { 0.0 } else { self.poly[0] }
    }

    /// Sets the integration constant.
    ///
    /// A zero-size polynomial has no room for a constant; the call is ignored.
    pub fn set_constant(&mut self, constant: f64) {
        if N > 0 {
            self.poly[0] = constant;
        }
    }
}
