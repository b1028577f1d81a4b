use crate::SeedWeightPair;

pub fn seed_weights_to_string(pairs: &[SeedWeightPair]) -> String {
    pairs
        .iter()
        .map(|p| format!("{}:{}", p.seed, p.weight))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses `"seed:weight,seed:weight"`. Any malformed entry rejects the whole string.
pub fn string_to_seed_weights(s: &str) -> Option<Vec<SeedWeightPair>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut out = Vec::new();
    for entry in s.split(',') {
        let (seed, weight) = entry.split_once(':')?;
        let seed = seed.trim().parse::<i64>().ok()?;
        let weight = weight.trim().parse::<f64>().ok()?;
        out.push(SeedWeightPair { seed, weight });
    }

    validate_seed_weights(&out).then_some(out)
}

pub fn validate_seed_weights(pairs: &[SeedWeightPair]) -> bool {
    !pairs.is_empty()
        && pairs
            .iter()
            .all(|p| p.weight.is_finite() && (0.0..=1.0).contains(&p.weight))
}
