use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Billing cadence of a subscription plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cadence {
    Monthly,
    #[serde(alias = "three-monthly")]
    ThreeMonthly,
    #[serde(alias = "six-monthly")]
    SixMonthly,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Monthly, Cadence::ThreeMonthly, Cadence::SixMonthly];

    /// Wire key used by the checkout flow (`threeMonthly`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::ThreeMonthly => "threeMonthly",
            Self::SixMonthly => "sixMonthly",
        }
    }

    pub fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::ThreeMonthly => 3,
            Self::SixMonthly => 6,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Cadence {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "threemonthly" | "three-monthly" | "three_monthly" => Ok(Self::ThreeMonthly),
            "sixmonthly" | "six-monthly" | "six_monthly" => Ok(Self::SixMonthly),
            other => Err(DomainError::UnknownCadence(other.to_string())),
        }
    }
}

/// One value per billing cadence. Every cadence is always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByCadence<T> {
    pub monthly: T,
    pub three_monthly: T,
    pub six_monthly: T,
}

impl<T> ByCadence<T> {
    pub fn new(monthly: T, three_monthly: T, six_monthly: T) -> Self {
        Self { monthly, three_monthly, six_monthly }
    }

    pub fn get(&self, cadence: Cadence) -> &T {
        match cadence {
            Cadence::Monthly => &self.monthly,
            Cadence::ThreeMonthly => &self.three_monthly,
            Cadence::SixMonthly => &self.six_monthly,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cadence, &T)> {
        Cadence::ALL.into_iter().map(move |cadence| (cadence, self.get(cadence)))
    }
}

#[cfg(test)]
mod tests {
    use super::{ByCadence, Cadence};
    use crate::errors::DomainError;

    #[test]
    fn parses_wire_and_kebab_forms() {
        assert_eq!("threeMonthly".parse::<Cadence>(), Ok(Cadence::ThreeMonthly));
        assert_eq!("six-monthly".parse::<Cadence>(), Ok(Cadence::SixMonthly));
        assert_eq!(" Monthly ".parse::<Cadence>(), Ok(Cadence::Monthly));
    }

    #[test]
    fn rejects_unknown_cadence() {
        let error = "yearly".parse::<Cadence>().expect_err("yearly is not a cadence");
        assert_eq!(error, DomainError::UnknownCadence("yearly".to_string()));
    }

    #[test]
    fn by_cadence_iterates_in_cadence_order() {
        let values = ByCadence::new("a", "b", "c");
        let collected: Vec<_> = values.iter().map(|(cadence, value)| (cadence, *value)).collect();

        assert_eq!(
            collected,
            vec![(Cadence::Monthly, "a"), (Cadence::ThreeMonthly, "b"), (Cadence::SixMonthly, "c")]
        );
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(ByCadence::new(1, 3, 6)).expect("serialize");
        assert_eq!(json["monthly"], 1);
        assert_eq!(json["threeMonthly"], 3);
        assert_eq!(json["sixMonthly"], 6);
        assert_eq!(serde_json::to_value(Cadence::SixMonthly).expect("serialize"), "sixMonthly");
    }
}
