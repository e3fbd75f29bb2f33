use crate::error::EnforcementError;
use std::fmt;
use std::str::FromStr;
use tcfguard_types::ids;

/// One of the ten IAB TCF v2 purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PurposeId {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
}

impl PurposeId {
    pub const ALL: [PurposeId; 10] = [
        PurposeId::One,
        PurposeId::Two,
        PurposeId::Three,
        PurposeId::Four,
        PurposeId::Five,
        PurposeId::Six,
        PurposeId::Seven,
        PurposeId::Eight,
        PurposeId::Nine,
        PurposeId::Ten,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Key used for this purpose in configuration tables (`p1`..`p10`).
    pub fn config_key(self) -> &'static str {
        ids::PURPOSE_KEYS[usize::from(self.code() - 1)]
    }

    pub fn from_config_key(key: &str) -> Option<PurposeId> {
        ids::PURPOSE_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|idx| PurposeId::ALL[idx])
    }
}

impl TryFrom<u8> for PurposeId {
    type Error = EnforcementError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=10 => Ok(PurposeId::ALL[usize::from(value - 1)]),
            other => Err(EnforcementError::UnknownPurpose(other)),
        }
    }
}

impl fmt::Display for PurposeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Strictness applied when evaluating a purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnforcementMode {
    Full,
    #[default]
    Basic,
    No,
}

impl EnforcementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EnforcementMode::Full => "full",
            EnforcementMode::Basic => "basic",
            EnforcementMode::No => "no",
        }
    }
}

impl FromStr for EnforcementMode {
    type Err = EnforcementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(EnforcementMode::Full),
            "basic" => Ok(EnforcementMode::Basic),
            "no" => Ok(EnforcementMode::No),
            other => Err(EnforcementError::UnsupportedEnforcementMode(
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_ids_round_trip_through_codes_and_keys() {
        for (idx, purpose) in PurposeId::ALL.iter().enumerate() {
            assert_eq!(usize::from(purpose.code()), idx + 1);
            assert_eq!(PurposeId::try_from(purpose.code()), Ok(*purpose));
            assert_eq!(PurposeId::from_config_key(purpose.config_key()), Some(*purpose));
        }
        assert_eq!(PurposeId::Ten.config_key(), "p10");
        assert_eq!(PurposeId::Seven.to_string(), "7");
    }

    #[test]
    fn out_of_range_purpose_is_rejected() {
        assert_eq!(PurposeId::try_from(0), Err(EnforcementError::UnknownPurpose(0)));
        assert_eq!(PurposeId::try_from(11), Err(EnforcementError::UnknownPurpose(11)));
        assert_eq!(PurposeId::from_config_key("p11"), None);
    }

    #[test]
    fn enforcement_mode_parses_account_vocabulary() {
        assert_eq!("full".parse::<EnforcementMode>(), Ok(EnforcementMode::Full));
        assert_eq!("basic".parse::<EnforcementMode>(), Ok(EnforcementMode::Basic));
        assert_eq!("no".parse::<EnforcementMode>(), Ok(EnforcementMode::No));
        assert_eq!(EnforcementMode::default(), EnforcementMode::Basic);

        let err = "Full".parse::<EnforcementMode>().unwrap_err();
        assert_eq!(
            err,
            EnforcementError::UnsupportedEnforcementMode("Full".to_string())
        );
        assert_eq!(err.code(), ids::CODE_UNSUPPORTED_ENFORCEMENT_MODE);
    }
}
