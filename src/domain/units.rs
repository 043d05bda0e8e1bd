//! Measurement units and radiation types.
//!
//! Both are closed enumerations. String tokens coming from a form or the
//! command line are parsed once, at the boundary, through `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DoseError;

/// Unit an exposure reading is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoseUnit {
    /// Roentgen (R), exposure in air
    Roentgen,
    /// Curie (Ci), source activity
    Curie,
    /// Gray (Gy), absorbed dose
    Gray,
    /// Sievert (Sv), dose equivalent (canonical)
    Sievert,
}

impl DoseUnit {
    /// Every unit, in selector order.
    pub const ALL: [DoseUnit; 4] = [Self::Roentgen, Self::Curie, Self::Gray, Self::Sievert];

    /// Short symbol used by the input selector.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Roentgen => "R",
            Self::Curie => "Ci",
            Self::Gray => "Gy",
            Self::Sievert => "Sv",
        }
    }

    /// Full unit name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roentgen => "Roentgen",
            Self::Curie => "Curie",
            Self::Gray => "Gray",
            Self::Sievert => "Sievert",
        }
    }

    /// Whether converting from this unit needs the radiation type.
    ///
    /// Gray readings are treated as gamma-equivalent, Sievert readings are
    /// already canonical.
    #[must_use]
    pub fn depends_on_radiation_type(&self) -> bool {
        matches!(self, Self::Roentgen | Self::Curie)
    }
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DoseUnit {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "r" | "roentgen" => Ok(Self::Roentgen),
            "ci" | "curie" => Ok(Self::Curie),
            "gy" | "gray" => Ok(Self::Gray),
            "sv" | "sievert" => Ok(Self::Sievert),
            _ => Err(DoseError::UnknownUnit(token.to_string())),
        }
    }
}

/// Kind of ionizing radiation the reading was taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiationType {
    Gamma,
    Alpha,
    Beta,
}

impl RadiationType {
    /// Every radiation type, in selector order.
    pub const ALL: [RadiationType; 3] = [Self::Gamma, Self::Alpha, Self::Beta];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gamma => "Gamma",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
        }
    }
}

impl fmt::Display for RadiationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RadiationType {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "gamma" => Ok(Self::Gamma),
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            _ => Err(DoseError::UnknownRadiationType(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_selector_symbols() {
        assert_eq!("R".parse::<DoseUnit>(), Ok(DoseUnit::Roentgen));
        assert_eq!("Ci".parse::<DoseUnit>(), Ok(DoseUnit::Curie));
        assert_eq!("Gy".parse::<DoseUnit>(), Ok(DoseUnit::Gray));
        assert_eq!("Sv".parse::<DoseUnit>(), Ok(DoseUnit::Sievert));
    }

    #[test]
    fn test_unit_from_full_names() {
        assert_eq!(" sievert ".parse::<DoseUnit>(), Ok(DoseUnit::Sievert));
        assert_eq!("ROENTGEN".parse::<DoseUnit>(), Ok(DoseUnit::Roentgen));
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert_eq!(
            "XYZ".parse::<DoseUnit>(),
            Err(DoseError::UnknownUnit("XYZ".to_string()))
        );
        assert!("".parse::<DoseUnit>().is_err());
    }

    #[test]
    fn test_symbol_round_trips_through_parse() {
        for unit in DoseUnit::ALL {
            assert_eq!(unit.to_string().parse::<DoseUnit>(), Ok(unit));
        }
    }

    #[test]
    fn test_radiation_type_parse() {
        assert_eq!("Gamma".parse::<RadiationType>(), Ok(RadiationType::Gamma));
        assert_eq!("alpha".parse::<RadiationType>(), Ok(RadiationType::Alpha));
        assert_eq!("BETA".parse::<RadiationType>(), Ok(RadiationType::Beta));
        assert_eq!(
            "Neutron".parse::<RadiationType>(),
            Err(DoseError::UnknownRadiationType("Neutron".to_string()))
        );
    }

    #[test]
    fn test_type_dependence() {
        assert!(DoseUnit::Roentgen.depends_on_radiation_type());
        assert!(DoseUnit::Curie.depends_on_radiation_type());
        assert!(!DoseUnit::Gray.depends_on_radiation_type());
        assert!(!DoseUnit::Sievert.depends_on_radiation_type());
    }
}
