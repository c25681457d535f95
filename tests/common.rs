use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for skein
pub fn skein() -> Command {
    cargo_bin_cmd!("skein")
}

/// Edge flags for the two-component exercise graph:
/// {A, B, C, D, E, H} and {F, G, Q}.
#[allow(dead_code)]
pub fn example_edge_args() -> Vec<String> {
    ["AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG"]
        .iter()
        .flat_map(|spec| ["--edge".to_string(), spec.to_string()])
        .collect()
}
