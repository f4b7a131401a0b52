//! Test direction and decision method.

use pk_core::Error;
use std::str::FromStr;

/// Which side(s) of the null distribution form the rejection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
    /// Reject for small statistics (`H1: μ < μ0`).
    Left,
    /// Reject for large statistics (`H1: μ > μ0`).
    Right,
    /// Reject for statistics far from the null in either direction.
    Two,
}

impl std::fmt::Display for Tail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tail::Left => "left",
            Tail::Right => "right",
            Tail::Two => "two",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Tail {
    type Err = Error;

    /// Accepts `left`, `right`, `two` (or `two-sided`), ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Tail::Left),
            "right" => Ok(Tail::Right),
            "two" | "two-sided" => Ok(Tail::Two),
            _ => Err(Error::InvalidTail(s.to_string())),
        }
    }
}

/// How the reject / fail-to-reject decision is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Compare the standardized statistic with the critical value(s).
    CriticalValue,
    /// Compare the p-value with the significance level.
    PValue,
    /// Check whether the confidence interval excludes the null value.
    ConfidenceInterval,
}

impl Method {
    /// All methods, in a fixed order.
    pub const ALL: [Method; 3] = [
        Method::CriticalValue,
        Method::PValue,
        Method::ConfidenceInterval,
    ];
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::CriticalValue => "critical",
            Method::PValue => "p-value",
            Method::ConfidenceInterval => "ci",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "critical-value" => Ok(Method::CriticalValue),
            "p-value" | "pvalue" => Ok(Method::PValue),
            "ci" | "confidence-interval" => Ok(Method::ConfidenceInterval),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}
