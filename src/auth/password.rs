use anyhow::{Context, Result};

/// Salted one-way password hashing with a fixed cost factor.
///
/// Hash failure is an internal error; a mismatch on verify is a normal
/// negative result. The precomputed dummy digest lets login burn a full
/// verification when the email is unknown, so that path costs the same
/// as a real mismatch.
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self> {
        let dummy_hash = bcrypt::hash("timing-equalizer", cost)
            .context("Failed to precompute dummy password digest")?;

        Ok(Self { cost, dummy_hash })
    }

    pub fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, self.cost).context("Password hashing failed")
    }

    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool> {
        bcrypt::verify(plaintext, digest).context("Password verification failed")
    }

    /// Verify against the dummy digest and discard the result.
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = bcrypt::verify(plaintext, &self.dummy_hash);
    }
}
