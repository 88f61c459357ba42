use std::collections::HashSet;

/// Derives a batch code from a batch name: whitespace stripped, uppercased,
/// truncated to eight characters, with a zero-padded suffix taken from a
/// monotonic sequence. Collisions with already-issued codes get an
/// incrementing counter appended.
pub fn generate_batch_code(
    batch_name: &str,
    sequence: u64,
    existing_codes: &HashSet<String>,
) -> String {
    let base: String = batch_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(8)
        .collect();

    let suffix = format!("{:04}", sequence % 10_000);
    let mut code = format!("{}_{}", base, suffix);

    let mut counter = 1;
    while existing_codes.contains(&code) {
        code = format!("{}_{}_{}", base, suffix, counter);
        counter += 1;
    }

    code
}
