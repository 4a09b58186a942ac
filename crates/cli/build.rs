//! Build script for hooky-cli.
//!
//! Emits build metadata through vergen, read back by `hooky version`:
//! - Rustc version
//! - Git commit of the source tree, when built from a checkout

use vergen_git2::{Emitter, Git2Builder};

fn main() -> anyhow::Result<()> {
    // Generate build and rustc info
    let build = vergen::BuildBuilder::all_build()?;
    let rustc = vergen::RustcBuilder::all_rustc()?;

    vergen::Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&rustc)?
        .emit()?;

    // Generate git info
    let git2 = Git2Builder::all_git()?;
    Emitter::default().add_instructions(&git2)?.emit()?;

    Ok(())
}
