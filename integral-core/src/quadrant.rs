//! Quadrants, dataset variants and the user's selection.

use crate::{IntegralError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four Integral Theory data domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// Individual Internal: driver sleep and mood logs.
    Ul,
    /// Individual External: daily operational metrics.
    Ur,
    /// Collective Internal: weekly cultural feedback.
    Ll,
    /// Collective External: weekly business metrics.
    Lr,
}

impl Quadrant {
    /// All quadrants in canonical order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Ul, Quadrant::Ur, Quadrant::Ll, Quadrant::Lr];

    pub fn id(self) -> &'static str {
        match self {
            Quadrant::Ul => "ul",
            Quadrant::Ur => "ur",
            Quadrant::Ll => "ll",
            Quadrant::Lr => "lr",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Quadrant::Ul => "UL",
            Quadrant::Ur => "UR",
            Quadrant::Ll => "LL",
            Quadrant::Lr => "LR",
        }
    }

    /// Name used inside prompts and placeholder texts, e.g. `Individual Internal (UL)`.
    pub fn name(self) -> &'static str {
        match self {
            Quadrant::Ul => "Individual Internal (UL)",
            Quadrant::Ur => "Individual External (UR)",
            Quadrant::Ll => "Collective Internal (LL)",
            Quadrant::Lr => "Collective External (LR)",
        }
    }

    /// Heading shown on the selection grid.
    pub fn title(self) -> &'static str {
        match self {
            Quadrant::Ul => "UL - Individual Internal",
            Quadrant::Ur => "UR - Individual External",
            Quadrant::Ll => "LL - Collective Internal",
            Quadrant::Lr => "LR - Collective External",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Quadrant::Ul => {
                "Daily driver logs focusing on subjective experience: sleep quality, mood states, and personal well-being indicators."
            }
            Quadrant::Ur => {
                "Daily operational metrics: hours on road, break times, delivery throughput, and schedule adherence."
            }
            Quadrant::Ll => {
                "Weekly cultural feedback: vendor treatment, organizational culture, appreciation, and interpersonal dynamics."
            }
            Quadrant::Lr => {
                "Weekly business metrics: revenue trends, safety incidents, regulatory compliance, and operational costs."
            }
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Quadrant {
    type Err = IntegralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ul" => Ok(Quadrant::Ul),
            "ur" => Ok(Quadrant::Ur),
            "ll" => Ok(Quadrant::Ll),
            "lr" => Ok(Quadrant::Lr),
            other => Err(IntegralError::Parse(format!("unknown quadrant '{other}'"))),
        }
    }
}

/// One of the three canned dataset states selectable per quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetVariant {
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "inc")]
    Mixed,
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 3] =
        [DatasetVariant::Negative, DatasetVariant::Positive, DatasetVariant::Mixed];

    pub fn id(self) -> &'static str {
        match self {
            DatasetVariant::Negative => "neg",
            DatasetVariant::Positive => "pos",
            DatasetVariant::Mixed => "inc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatasetVariant::Negative => "Poor",
            DatasetVariant::Positive => "Good",
            DatasetVariant::Mixed => "Mixed Results",
        }
    }

    /// What this variant looks like for the given quadrant.
    pub fn description(self, quadrant: Quadrant) -> &'static str {
        use DatasetVariant::*;
        match (quadrant, self) {
            (Quadrant::Ul, Negative) => "Low sleep hours, negative mood patterns",
            (Quadrant::Ul, Positive) => "Adequate sleep, positive mood trends",
            (Quadrant::Ul, Mixed) => "Variable sleep quality and mood patterns",
            (Quadrant::Ur, Negative) => "Long hours, few breaks, missed schedules",
            (Quadrant::Ur, Positive) => "Balanced hours, regular breaks, on-time",
            (Quadrant::Ur, Mixed) => "Variable operational efficiency patterns",
            (Quadrant::Ll, Negative) => "Negative vendor relations, toxic culture",
            (Quadrant::Ll, Positive) => "Positive relationships, supportive culture",
            (Quadrant::Ll, Mixed) => "Variable cultural and relational dynamics",
            (Quadrant::Lr, Negative) => "High costs, safety incidents, low revenue",
            (Quadrant::Lr, Positive) => "Low costs, safe operations, strong revenue",
            (Quadrant::Lr, Mixed) => "Variable business performance indicators",
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DatasetVariant {
    type Err = IntegralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neg" | "negative" | "poor" => Ok(DatasetVariant::Negative),
            "pos" | "positive" | "good" => Ok(DatasetVariant::Positive),
            "inc" | "mixed" => Ok(DatasetVariant::Mixed),
            other => Err(IntegralError::Parse(format!("unknown dataset variant '{other}'"))),
        }
    }
}

/// Dataset choice per quadrant as the user builds it up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub ul: Option<DatasetVariant>,
    #[serde(default)]
    pub ur: Option<DatasetVariant>,
    #[serde(default)]
    pub ll: Option<DatasetVariant>,
    #[serde(default)]
    pub lr: Option<DatasetVariant>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, quadrant: Quadrant, variant: DatasetVariant) -> Self {
        self.set(quadrant, variant);
        self
    }

    pub fn set(&mut self, quadrant: Quadrant, variant: DatasetVariant) {
        *self.slot_mut(quadrant) = Some(variant);
    }

    pub fn clear(&mut self, quadrant: Quadrant) {
        *self.slot_mut(quadrant) = None;
    }

    pub fn get(&self, quadrant: Quadrant) -> Option<DatasetVariant> {
        match quadrant {
            Quadrant::Ul => self.ul,
            Quadrant::Ur => self.ur,
            Quadrant::Ll => self.ll,
            Quadrant::Lr => self.lr,
        }
    }

    /// Quadrants still lacking a dataset, in canonical order.
    pub fn missing(&self) -> Vec<Quadrant> {
        Quadrant::ALL.into_iter().filter(|q| self.get(*q).is_none()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Converts into a [`CompleteSelection`], failing if any quadrant is unset.
    pub fn complete(&self) -> Result<CompleteSelection> {
        match (self.ul, self.ur, self.ll, self.lr) {
            (Some(ul), Some(ur), Some(ll), Some(lr)) => {
                Ok(CompleteSelection::new(ul, ur, ll, lr))
            }
            _ => {
                let missing: Vec<&str> = self.missing().into_iter().map(Quadrant::code).collect();
                Err(IntegralError::IncompleteSelection(missing.join(", ")))
            }
        }
    }

    fn slot_mut(&mut self, quadrant: Quadrant) -> &mut Option<DatasetVariant> {
        match quadrant {
            Quadrant::Ul => &mut self.ul,
            Quadrant::Ur => &mut self.ur,
            Quadrant::Ll => &mut self.ll,
            Quadrant::Lr => &mut self.lr,
        }
    }
}

/// A selection with every quadrant set. The only input a run accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompleteSelection {
    ul: DatasetVariant,
    ur: DatasetVariant,
    ll: DatasetVariant,
    lr: DatasetVariant,
}

impl CompleteSelection {
    pub fn new(
        ul: DatasetVariant,
        ur: DatasetVariant,
        ll: DatasetVariant,
        lr: DatasetVariant,
    ) -> Self {
        Self { ul, ur, ll, lr }
    }

    /// Same variant for all four quadrants.
    pub fn uniform(variant: DatasetVariant) -> Self {
        Self::new(variant, variant, variant, variant)
    }

    pub fn get(&self, quadrant: Quadrant) -> DatasetVariant {
        match quadrant {
            Quadrant::Ul => self.ul,
            Quadrant::Ur => self.ur,
            Quadrant::Ll => self.ll,
            Quadrant::Lr => self.lr,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, DatasetVariant)> + '_ {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

impl From<CompleteSelection> for Selection {
    fn from(selection: CompleteSelection) -> Self {
        Selection {
            ul: Some(selection.ul),
            ur: Some(selection.ur),
            ll: Some(selection.ll),
            lr: Some(selection.lr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_round_trips_through_str() {
        for quadrant in Quadrant::ALL {
            assert_eq!(quadrant.id().parse::<Quadrant>().unwrap(), quadrant);
        }
        assert!("xx".parse::<Quadrant>().is_err());
        assert_eq!("UL".parse::<Quadrant>().unwrap(), Quadrant::Ul);
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!("neg".parse::<DatasetVariant>().unwrap(), DatasetVariant::Negative);
        assert_eq!("Good".parse::<DatasetVariant>().unwrap(), DatasetVariant::Positive);
        assert_eq!("inc".parse::<DatasetVariant>().unwrap(), DatasetVariant::Mixed);
        assert!("meh".parse::<DatasetVariant>().is_err());
    }

    #[test]
    fn test_empty_selection_is_incomplete() {
        let selection = Selection::new();
        assert!(!selection.is_complete());
        assert_eq!(selection.missing(), Quadrant::ALL.to_vec());

        let err = selection.complete().unwrap_err();
        assert!(matches!(err, IntegralError::IncompleteSelection(ref s) if s == "UL, UR, LL, LR"));
    }

    #[test]
    fn test_partial_selection_reports_missing_quadrants() {
        let selection = Selection::new()
            .with(Quadrant::Ul, DatasetVariant::Negative)
            .with(Quadrant::Ll, DatasetVariant::Mixed);

        assert_eq!(selection.missing(), vec![Quadrant::Ur, Quadrant::Lr]);
        assert!(selection.complete().is_err());
    }

    #[test]
    fn test_complete_selection() {
        let mut selection = Selection::new();
        selection.set(Quadrant::Ul, DatasetVariant::Negative);
        selection.set(Quadrant::Ur, DatasetVariant::Positive);
        selection.set(Quadrant::Ll, DatasetVariant::Mixed);
        selection.set(Quadrant::Lr, DatasetVariant::Negative);

        let complete = selection.complete().unwrap();
        assert_eq!(complete.get(Quadrant::Ur), DatasetVariant::Positive);
        let order: Vec<Quadrant> = complete.iter().map(|(q, _)| q).collect();
        assert_eq!(order, Quadrant::ALL.to_vec());

        selection.clear(Quadrant::Ll);
        assert_eq!(selection.missing(), vec![Quadrant::Ll]);
    }

    #[test]
    fn test_selection_deserializes_from_partial_json() {
        let selection: Selection =
            serde_json::from_str(r#"{"ul":"neg","lr":"inc"}"#).unwrap();
        assert_eq!(selection.ul, Some(DatasetVariant::Negative));
        assert_eq!(selection.lr, Some(DatasetVariant::Mixed));
        assert_eq!(selection.ur, None);
    }

    #[test]
    fn test_every_pair_has_a_description() {
        for quadrant in Quadrant::ALL {
            for variant in DatasetVariant::ALL {
                assert!(!variant.description(quadrant).is_empty());
            }
        }
    }
}
