//! The closed set of curling clubs a member can pick as their favorite.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A curling club recognized by the registry.
///
/// The set is closed: registration rejects any name that does not match one
/// of these exactly (case and whitespace included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Club {
    CacheValleyStoneSociety,
    OgdenCurlingClub,
    ParkCityCurlingClub,
    SaltCityCurlingClub,
    UtahOlympicOvalCurlingClub,
}

/// Returned when a club name is not part of [`Club::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown club: {0}")]
pub struct UnknownClub(pub String);

impl Club {
    /// Every recognized club, in alphabetical order.
    pub const ALL: [Club; 5] = [
        Club::CacheValleyStoneSociety,
        Club::OgdenCurlingClub,
        Club::ParkCityCurlingClub,
        Club::SaltCityCurlingClub,
        Club::UtahOlympicOvalCurlingClub,
    ];

    /// The display name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Club::CacheValleyStoneSociety => "Cache Valley Stone Society",
            Club::OgdenCurlingClub => "Ogden Curling Club",
            Club::ParkCityCurlingClub => "Park City Curling Club",
            Club::SaltCityCurlingClub => "Salt City Curling Club",
            Club::UtahOlympicOvalCurlingClub => "Utah Olympic Oval Curling Club",
        }
    }
}

impl FromStr for Club {
    type Err = UnknownClub;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Club::ALL
            .into_iter()
            .find(|club| club.name() == s)
            .ok_or_else(|| UnknownClub(s.to_string()))
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_club_by_name() {
        for club in Club::ALL {
            assert_eq!(club.name().parse::<Club>(), Ok(club));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("ogden curling club".parse::<Club>().is_err());
        assert!(" Ogden Curling Club".parse::<Club>().is_err());
        assert!("Unknown Club".parse::<Club>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(
            Club::SaltCityCurlingClub.to_string(),
            "Salt City Curling Club"
        );
    }
}
