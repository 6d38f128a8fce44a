//! ARGO quality-control flag conventions.

/// QC flag values and their meanings, per the ARGO convention.
pub const QC_FLAG_MEANINGS: &[(u8, &str)] = &[
    (1, "good"),
    (2, "probably_good"),
    (3, "probably_bad"),
    (4, "bad"),
    (5, "changed"),
    (8, "estimated"),
    (9, "missing"),
];

/// Flags considered usable for downstream analysis.
pub const ACCEPTED_QC_FLAGS: &[u8] = &[1, 2, 5, 8];

/// The flag assigned to every synthesized value.
pub const QC_GOOD: u8 = 1;

/// True if the flag is one of the defined ARGO QC codes.
pub fn is_known_flag(flag: u8) -> bool {
    QC_FLAG_MEANINGS.iter().any(|(f, _)| *f == flag)
}

/// True if the flag is in the accepted subset.
pub fn is_accepted_flag(flag: u8) -> bool {
    ACCEPTED_QC_FLAGS.contains(&flag)
}

/// Human-readable meaning of a flag, if defined.
pub fn flag_meaning(flag: u8) -> Option<&'static str> {
    QC_FLAG_MEANINGS
        .iter()
        .find(|(f, _)| *f == flag)
        .map(|(_, meaning)| *meaning)
}
