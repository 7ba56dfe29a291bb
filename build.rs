//! Build script for echo.
//!
//! Emits `VERGEN_*` build, cargo, git and rustc metadata for the startup
//! debug log, and rebuilds when the externally supplied `ECHO_VERSION`
//! changes.

use vergen_gix::{Build, Cargo, Emitter, Gix, Rustc};

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-env-changed=ECHO_VERSION");

    let build = Build::builder().build_timestamp(true).build();
    let cargo = Cargo::builder().target_triple(true).build();
    let gix = Gix::builder().sha(true).dirty(true).build();
    let rustc = Rustc::builder().semver(true).build();

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&gix)?
        .add_instructions(&rustc)?
        .emit()
}
