use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An oceanographic variable measured by a profiling float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableId {
    Temperature,
    Salinity,
    Pressure,
    Oxygen,
    Chlorophyll,
    Nitrate,
    Ph,
    Density,
}

/// Textual aliases for each variable, in table order. Matching is
/// case-insensitive substring containment against the whole query text.
pub const VARIABLE_ALIASES: &[(VariableId, &[&str])] = &[
    (
        VariableId::Temperature,
        &["temp", "temperature", "sst", "sea surface temperature"],
    ),
    (
        VariableId::Salinity,
        &["sal", "salinity", "psal", "practical salinity"],
    ),
    (VariableId::Pressure, &["pres", "pressure", "depth"]),
    (
        VariableId::Oxygen,
        &["oxy", "oxygen", "dissolved oxygen", "do"],
    ),
    (VariableId::Chlorophyll, &["chl", "chlorophyll", "chla"]),
    (VariableId::Nitrate, &["no3", "nitrate", "nitrogen"]),
    (VariableId::Ph, &["ph", "acidity", "acid"]),
    (
        VariableId::Density,
        &["density", "sigma", "potential density"],
    ),
];

impl VariableId {
    /// All known variables, in alias-table order.
    pub fn all() -> Vec<VariableId> {
        VARIABLE_ALIASES.iter().map(|(v, _)| *v).collect()
    }

    /// Canonical lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableId::Temperature => "temperature",
            VariableId::Salinity => "salinity",
            VariableId::Pressure => "pressure",
            VariableId::Oxygen => "oxygen",
            VariableId::Chlorophyll => "chlorophyll",
            VariableId::Nitrate => "nitrate",
            VariableId::Ph => "ph",
            VariableId::Density => "density",
        }
    }

    /// Resolve a canonical name (exact, case-insensitive) to a variable.
    pub fn from_name(name: &str) -> Option<VariableId> {
        let lowered = name.trim().to_lowercase();
        VariableId::all()
            .into_iter()
            .find(|v| v.as_str() == lowered)
    }

    /// Scan free text for variable aliases and return the union of matches.
    ///
    /// Each variable matches at most once; the first alias hit per variable
    /// short-circuits the rest of that variable's alias list.
    pub fn scan_text(text: &str) -> BTreeSet<VariableId> {
        let lowered = text.to_lowercase();
        let mut matched = BTreeSet::new();
        for (variable, aliases) in VARIABLE_ALIASES {
            if aliases.iter().any(|alias| lowered.contains(alias)) {
                matched.insert(*variable);
            }
        }
        matched
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::VariableId;

    #[test]
    fn test_scan_text_single_match() {
        let matched = VariableId::scan_text("Show me temperature data in Bay of Bengal");
        assert_eq!(matched.len(), 1);
        assert!(matched.contains(&VariableId::Temperature));
    }

    #[test]
    fn test_scan_text_multiple_matches() {
        let matched = VariableId::scan_text("compare SST and salinity near the equator");
        assert!(matched.contains(&VariableId::Temperature));
        assert!(matched.contains(&VariableId::Salinity));
    }

    #[test]
    fn test_scan_text_no_match() {
        let matched = VariableId::scan_text("asdkjh nonsense");
        assert!(matched.is_empty());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            VariableId::from_name("Temperature"),
            Some(VariableId::Temperature)
        );
        assert_eq!(VariableId::from_name("chlorophyll"), Some(VariableId::Chlorophyll));
        assert_eq!(VariableId::from_name("wave height"), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&VariableId::Oxygen).unwrap();
        assert_eq!(json, "\"oxygen\"");
        let back: VariableId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VariableId::Oxygen);
    }
}
