//! `hooky version`

/// Placeholder vergen emits when build metadata is unavailable
const IDEMPOTENT_OUTPUT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Print the version line
pub fn run() {
    println!("{}", version_line(option_env!("VERGEN_GIT_SHA")));
}

/// `hooky version <semver>`, plus the short commit when it is known
pub fn version_line(git_sha: Option<&str>) -> String {
    let version = env!("CARGO_PKG_VERSION");
    match git_sha.filter(|sha| !sha.is_empty() && *sha != IDEMPOTENT_OUTPUT) {
        Some(sha) => {
            let short = sha.get(..7).unwrap_or(sha);
            format!("hooky version {version} (commit {short})")
        }
        None => format!("hooky version {version}"),
    }
}
