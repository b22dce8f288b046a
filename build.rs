use std::process::Command;

/// Output of `git rev-parse <args>`, or "unknown" outside a git checkout.
fn git_rev(args: &[&str]) -> String {
    match Command::new("git").arg("rev-parse").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // shown in `--version` and in the wasm debug report
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short", "HEAD"]));

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
