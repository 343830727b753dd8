//! Human-readable day-count parsing and formatting

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid day count format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Day count must not be negative: {0}")]
    Negative(i64),
}

/// Whole-day count with human-readable parsing ("30", "30d", "4w")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Days(pub u32);

impl Days {
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.0))
    }
}

impl<'de> Deserialize<'de> for Days {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DaysVisitor;

        impl<'de> serde::de::Visitor<'de> for DaysVisitor {
            type Value = Days;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a day count as string (e.g., \"30\", \"30d\", \"4w\") or integer")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(Days)
                    .map_err(|_| E::custom(format!("day count out of range: {v}")))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v < 0 {
                    return Err(E::custom(ParseError::Negative(v)));
                }
                self.visit_u64(v as u64)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Days>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(DaysVisitor)
    }
}

impl FromStr for Days {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if let Ok(num) = s.parse::<i64>() {
            if num < 0 {
                return Err(ParseError::Negative(num));
            }
            return Ok(Days(u32::try_from(num).map_err(|_| {
                ParseError::InvalidFormat(s.clone())
            })?));
        }

        let (num_str, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
            Some(pos) if pos > 0 => (&s[..pos], &s[pos..]),
            _ => return Err(ParseError::InvalidFormat(s.to_string())),
        };

        let num: u32 = num_str.parse()?;

        let multiplier = match unit.trim() {
            "d" | "day" | "days" => 1,
            "w" | "week" | "weeks" => 7,
            _ => return Err(ParseError::InvalidUnit(unit.to_string())),
        };

        num.checked_mul(multiplier)
            .map(Days)
            .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "1 day"),
            n => write!(f, "{n} days"),
        }
    }
}
