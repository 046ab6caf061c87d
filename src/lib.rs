//! Weighted Pearson and Spearman correlation.
//!
//! Spearman correlation is computed as the weighted Pearson correlation of
//! weighted mid-ranks, see [`weighted_rank`].

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod errors;
pub mod rank;
pub mod statistics;

use std::fmt;
use std::str::FromStr;

pub use errors::{Error, ErrorKind, Result};
pub use rank::weighted_rank;
pub use statistics::{weighted_mean, weighted_pearson, weighted_spearman};

/// Correlation method used by [`weighted_corr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Pearson,
    Spearman,
}

impl Default for Method {
    fn default() -> Method {
        Method::Pearson
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Method> {
        match s.to_lowercase().as_str() {
            "pearson" => Ok(Method::Pearson),
            "spearman" => Ok(Method::Spearman),
            _ => bail!(ErrorKind::InvalidArgument(format!("unknown correlation method '{}'", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Method::Pearson => write!(f, "Pearson"),
            Method::Spearman => write!(f, "Spearman"),
        }
    }
}

/// Weighted correlation of `x` and `y` using `method`.
pub fn weighted_corr(x: &[f64], y: &[f64], w: &[f64], method: Method) -> Result<f64> {
    match method {
        Method::Pearson => weighted_pearson(x, y, w),
        Method::Spearman => weighted_spearman(x, y, w),
    }
}
