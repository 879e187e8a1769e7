use strsim::levenshtein;

/// Suggest up to three candidates close to `target`, closest first.
///
/// Short targets (three characters or fewer) accept an edit distance of 1,
/// longer ones an edit distance of 2.
pub fn compute_suggestions<S: AsRef<str>>(target: &str, candidates: &[S]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != target)
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
