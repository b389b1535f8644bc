//! Birth-year element classification.
//!
//! A year maps onto one of ten heavenly stems via `(year - 4) mod 10`, and each consecutive
//! pair of stems belongs to one of the five elements. The birth month maps independently onto a
//! season. This is a deliberately coarse heuristic: no lunar-calendar arithmetic is involved.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five element categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ElementCategory {
    /// All categories in stem order.
    pub const ALL: [ElementCategory; 5] = [
        ElementCategory::Wood,
        ElementCategory::Fire,
        ElementCategory::Earth,
        ElementCategory::Metal,
        ElementCategory::Water,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementCategory::Wood => "Wood",
            ElementCategory::Fire => "Fire",
            ElementCategory::Earth => "Earth",
            ElementCategory::Metal => "Metal",
            ElementCategory::Water => "Water",
        }
    }

    /// Lowercase key used in the knowledge base document.
    pub fn key(self) -> &'static str {
        match self {
            ElementCategory::Wood => "wood",
            ElementCategory::Fire => "fire",
            ElementCategory::Earth => "earth",
            ElementCategory::Metal => "metal",
            ElementCategory::Water => "water",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten heavenly stems, in cycle order starting from index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl HeavenlyStem {
    pub const CYCLE: [HeavenlyStem; 10] = [
        HeavenlyStem::Gap,
        HeavenlyStem::Eul,
        HeavenlyStem::Byeong,
        HeavenlyStem::Jeong,
        HeavenlyStem::Mu,
        HeavenlyStem::Gi,
        HeavenlyStem::Gyeong,
        HeavenlyStem::Sin,
        HeavenlyStem::Im,
        HeavenlyStem::Gye,
    ];

    /// Position of this stem in the ten-stem cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stems pair up two-to-one onto the elements.
    pub fn element(self) -> ElementCategory {
        match self {
            HeavenlyStem::Gap | HeavenlyStem::Eul => ElementCategory::Wood,
            HeavenlyStem::Byeong | HeavenlyStem::Jeong => ElementCategory::Fire,
            HeavenlyStem::Mu | HeavenlyStem::Gi => ElementCategory::Earth,
            HeavenlyStem::Gyeong | HeavenlyStem::Sin => ElementCategory::Metal,
            HeavenlyStem::Im | HeavenlyStem::Gye => ElementCategory::Water,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeavenlyStem::Gap => "Gap",
            HeavenlyStem::Eul => "Eul",
            HeavenlyStem::Byeong => "Byeong",
            HeavenlyStem::Jeong => "Jeong",
            HeavenlyStem::Mu => "Mu",
            HeavenlyStem::Gi => "Gi",
            HeavenlyStem::Gyeong => "Gyeong",
            HeavenlyStem::Sin => "Sin",
            HeavenlyStem::Im => "Im",
            HeavenlyStem::Gye => "Gye",
        }
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Birth season, derived from the month alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stem for a year. Uses Euclidean remainder so negative years stay within the cycle.
pub fn stem_for_year(year: i32) -> HeavenlyStem {
    let index = (i64::from(year) - 4).rem_euclid(10) as usize;
    HeavenlyStem::CYCLE[index]
}

/// Element category for a birth year. Total over all integers, period 10.
pub fn classify_year(year: i32) -> ElementCategory {
    stem_for_year(year).element()
}

/// Season for a birth month (1-12).
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if `month` is outside `1..=12`.
pub fn classify_season(month: u32) -> CoreResult<Season> {
    match month {
        3..=5 => Ok(Season::Spring),
        6..=8 => Ok(Season::Summer),
        9..=11 => Ok(Season::Autumn),
        12 | 1 | 2 => Ok(Season::Winter),
        _ => Err(CoreError::InvalidInput(format!(
            "month {month} is outside 1..=12"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_four_is_first_stem_and_wood() {
        assert_eq!(stem_for_year(4), HeavenlyStem::Gap);
        assert_eq!(classify_year(4), ElementCategory::Wood);
    }

    #[test]
    fn year_1993_is_last_stem_and_water() {
        assert_eq!(stem_for_year(1993), HeavenlyStem::Gye);
        assert_eq!(classify_year(1993), ElementCategory::Water);
    }

    #[test]
    fn stems_pair_onto_elements() {
        let expected = [
            ElementCategory::Wood,
            ElementCategory::Wood,
            ElementCategory::Fire,
            ElementCategory::Fire,
            ElementCategory::Earth,
            ElementCategory::Earth,
            ElementCategory::Metal,
            ElementCategory::Metal,
            ElementCategory::Water,
            ElementCategory::Water,
        ];
        for (offset, category) in expected.iter().enumerate() {
            assert_eq!(classify_year(2024 + offset as i32), *category);
        }
    }

    #[test]
    fn classification_has_period_ten() {
        for year in -2_000..2_100 {
            assert_eq!(classify_year(year), classify_year(year + 10), "year {year}");
        }
    }

    #[test]
    fn negative_years_use_mathematical_modulo() {
        // (-1 - 4) mod 10 = 5 -> Gi -> Earth
        assert_eq!(stem_for_year(-1), HeavenlyStem::Gi);
        assert_eq!(classify_year(-1), ElementCategory::Earth);
        assert_eq!(classify_year(-6), classify_year(4));
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert!(ElementCategory::ALL.contains(&classify_year(i32::MIN)));
        assert!(ElementCategory::ALL.contains(&classify_year(i32::MAX)));
    }

    #[test]
    fn seasons_group_by_quarter() {
        assert_eq!(classify_season(3).unwrap(), Season::Spring);
        assert_eq!(classify_season(5).unwrap(), Season::Spring);
        assert_eq!(classify_season(6).unwrap(), Season::Summer);
        assert_eq!(classify_season(8).unwrap(), Season::Summer);
        assert_eq!(classify_season(9).unwrap(), Season::Autumn);
        assert_eq!(classify_season(11).unwrap(), Season::Autumn);
        assert_eq!(classify_season(12).unwrap(), Season::Winter);
        assert_eq!(classify_season(1).unwrap(), Season::Winter);
        assert_eq!(classify_season(2).unwrap(), Season::Winter);
    }

    #[test]
    fn season_rejects_invalid_month() {
        for month in [0, 13, 99] {
            let err = classify_season(month).expect_err("should reject month");
            assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("outside 1..=12")));
        }
    }
}
