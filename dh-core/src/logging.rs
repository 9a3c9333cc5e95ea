// kube's HTTP stack logs a lot at the levels operators actually want for
// reconciliation output; pin those crates to warn unless the filter names
// them explicitly.
const QUIETED_CRATES: &[&str] = &["hyper_util", "tower", "rustls"];

fn env_filter(verbosity: &str) -> String {
    let mut filter = verbosity.to_string();
    for crate_name in QUIETED_CRATES {
        if !verbosity.contains(crate_name) {
            filter.push_str(&format!(",{crate_name}=warn"));
        }
    }
    filter
}

// dhctl output goes to a terminal mid-pipeline-run, so no timestamps.
pub fn setup(verbosity: &str) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter(verbosity))
        .without_time()
        .compact()
        .init();
}
