//! Stamps `--version` with the source revision.
//!
//! Sets `VFSH_BUILD_INFO` to `git describe` output (`<tag>-<n>-g<hash>`, a
//! bare hash when untagged, `-dirty` for local edits) or `source` when built
//! outside a checkout.

use std::path::Path;
use std::process::Command;

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let head = Path::new("../../.git/HEAD");
    if head.exists() {
        println!("cargo::rerun-if-changed={}", head.display());
        println!("cargo::rerun-if-changed=../../.git/index");
    }

    let info = describe().unwrap_or_else(|| "source".to_string());
    println!("cargo::rustc-env=VFSH_BUILD_INFO={info}");
}
