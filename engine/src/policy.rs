//! Holder transfer authorization.
//!
//! `changeDrugHolder` consults a `HolderPolicy` before rewriting a record.
//! The default, `AllowAll`, accepts every transfer; the contract performs no
//! custody check unless a stricter policy is configured.

use std::collections::BTreeSet;

use drugtrace_primitives::Record;

/// Decides whether a record may pass to a new holder.
///
/// Implementations must be deterministic: the same inputs always give the
/// same answer.
pub trait HolderPolicy: Send + Sync {
    /// Return `Err(reason)` to refuse the transfer.
    fn authorize(&self, key: &str, current: &Record, new_holder: &str) -> Result<(), String>;
}

/// Accepts every transfer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl HolderPolicy for AllowAll {
    fn authorize(&self, _key: &str, _current: &Record, _new_holder: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Accepts transfers only to holders on an allow-list.
#[derive(Debug, Clone, Default)]
pub struct KnownHolders {
    holders: BTreeSet<String>,
}

impl KnownHolders {
    pub fn new<I, S>(holders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            holders: holders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, holder: &str) -> bool {
        self.holders.contains(holder)
    }
}

impl HolderPolicy for KnownHolders {
    fn authorize(&self, _key: &str, _current: &Record, new_holder: &str) -> Result<(), String> {
        if self.contains(new_holder) {
            Ok(())
        } else {
            Err(format!("{new_holder} is not a registered holder"))
        }
    }
}

/// Adapts a closure into a `HolderPolicy`.
pub struct FnPolicy<F>(pub F);

impl<F> HolderPolicy for FnPolicy<F>
where
    F: Fn(&str, &Record, &str) -> Result<(), String> + Send + Sync,
{
    fn authorize(&self, key: &str, current: &Record, new_holder: &str) -> Result<(), String> {
        (self.0)(key, current, new_holder)
    }
}
