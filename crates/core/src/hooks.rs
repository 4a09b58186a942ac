//! Git hook names
//!
//! The set of client and server hooks git invokes from the conventional
//! `hooks/` directory.

/// Every hook name hooky knows how to manage
pub const SUPPORTED_HOOKS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-receive",
    "update",
    "post-receive",
    "post-update",
    "pre-auto-gc",
    "post-rewrite",
    "pre-push",
    "push-to-checkout",
];

/// Check whether `name` is a hook git knows about
#[must_use]
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_HOOKS.contains(&name)
}
