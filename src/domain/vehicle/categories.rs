//! Categorical car attributes and their integer codes.
//!
//! Each field owns a single static table of `(label, variant)` pairs. The
//! position of a pair in the table is the integer code the model was trained
//! on, so the table is the only place a code is defined.

use crate::domain::errors::InputError;
use serde::{Deserialize, Serialize};

/// A form field whose values come from a fixed, ordered set of labels.
pub trait Categorical: Copy + PartialEq + Sized + 'static {
    /// Field name as it appears in the feature registry
    const FIELD: &'static str;

    /// Label/variant pairs ordered by integer code
    const TABLE: &'static [(&'static str, Self)];

    /// Integer code fed to the model
    fn code(self) -> u8;

    /// Display label shown in the form
    fn label(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, variant)| *variant == self)
            .map(|(label, _)| *label)
            .unwrap_or(Self::FIELD)
    }

    /// Resolve a form label (case-insensitive, surrounding whitespace ignored)
    fn from_label(label: &str) -> Result<Self, InputError> {
        let wanted = label.trim();
        Self::TABLE
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
            .map(|(_, variant)| *variant)
            .ok_or_else(|| InputError::UnknownLabel {
                field: Self::FIELD,
                label: label.to_string(),
            })
    }

    fn from_code(code: i64) -> Result<Self, InputError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::TABLE.get(idx))
            .map(|(_, variant)| *variant)
            .ok_or(InputError::UnknownCode {
                field: Self::FIELD,
                code,
            })
    }

    fn all() -> impl Iterator<Item = Self> {
        Self::TABLE.iter().map(|(_, variant)| *variant)
    }
}

macro_rules! impl_label_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = InputError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Categorical>::from_label(s)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Fuel {
    #[default]
    Diesel = 0,
    Petrol = 1,
    Cng = 2,
    Lpg = 3,
    Electric = 4,
}

impl Categorical for Fuel {
    const FIELD: &'static str = "fuel";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Diesel", Fuel::Diesel),
        ("Petrol", Fuel::Petrol),
        ("CNG", Fuel::Cng),
        ("LPG", Fuel::Lpg),
        ("Electric", Fuel::Electric),
    ];

    fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SellerType {
    #[default]
    Individual = 0,
    Dealer = 1,
    TrustmarkDealer = 2,
}

impl Categorical for SellerType {
    const FIELD: &'static str = "seller_type";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Individual", SellerType::Individual),
        ("Dealer", SellerType::Dealer),
        ("Trustmark Dealer", SellerType::TrustmarkDealer),
    ];

    fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Transmission {
    #[default]
    Manual = 0,
    Automatic = 1,
}

impl Categorical for Transmission {
    const FIELD: &'static str = "transmission";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Manual", Transmission::Manual),
        ("Automatic", Transmission::Automatic),
    ];

    fn code(self) -> u8 {
        self as u8
    }
}

/// Ownership history of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Owner {
    #[default]
    First = 0,
    Second = 1,
    Third = 2,
    FourthAndAbove = 3,
    TestDrive = 4,
}

impl Categorical for Owner {
    const FIELD: &'static str = "owner";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("First Owner", Owner::First),
        ("Second Owner", Owner::Second),
        ("Third Owner", Owner::Third),
        ("Fourth & Above Owner", Owner::FourthAndAbove),
        ("Test Drive Car", Owner::TestDrive),
    ];

    fn code(self) -> u8 {
        self as u8
    }
}

impl_label_conversions!(Fuel, SellerType, Transmission, Owner);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_table_matches_codes<T: Categorical + std::fmt::Debug>() {
        for (idx, (label, variant)) in T::TABLE.iter().enumerate() {
            assert_eq!(variant.code() as usize, idx, "{} code drift", label);
            assert_eq!(variant.label(), *label);
            assert_eq!(T::from_code(idx as i64).unwrap(), *variant);
        }
    }

    #[test]
    fn test_tables_are_ordered_by_code() {
        assert_table_matches_codes::<Fuel>();
        assert_table_matches_codes::<SellerType>();
        assert_table_matches_codes::<Transmission>();
        assert_table_matches_codes::<Owner>();
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Fuel::Cng.code(), 2);
        assert_eq!(Fuel::Electric.code(), 4);
        assert_eq!(SellerType::TrustmarkDealer.code(), 2);
        assert_eq!(Transmission::Automatic.code(), 1);
        assert_eq!(Owner::FourthAndAbove.code(), 3);
        assert_eq!(Owner::TestDrive.code(), 4);
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        assert_eq!(Fuel::from_label("petrol").unwrap(), Fuel::Petrol);
        assert_eq!(
            SellerType::from_label("  trustmark dealer ").unwrap(),
            SellerType::TrustmarkDealer
        );
        assert_eq!(
            "Fourth & Above Owner".parse::<Owner>().unwrap(),
            Owner::FourthAndAbove
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = Fuel::from_label("Hydrogen").unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownLabel {
                field: "fuel",
                label: "Hydrogen".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(Transmission::from_code(2).is_err());
        assert!(Owner::from_code(-1).is_err());
    }

    #[test]
    fn test_display_uses_form_label() {
        assert_eq!(Fuel::Lpg.to_string(), "LPG");
        assert_eq!(Owner::TestDrive.to_string(), "Test Drive Car");
        assert_eq!(Fuel::all().count(), 5);
    }
}
