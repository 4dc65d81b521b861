use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

fn argon2_error(op: &'static str) -> impl FnOnce(password_hash::Error) -> anyhow::Error {
    move |e| {
        error!(error = %e, op, "argon2 failure");
        anyhow::anyhow!("{op}: {e}")
    }
}

/// Salted Argon2 hash in PHC string form.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(argon2_error("hash"))
}

/// `Ok(false)` on mismatch; `Err` when the stored hash is unusable.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let phc = PasswordHash::new(stored).map_err(argon2_error("parse stored hash"))?;
    match Argon2::default().verify_password(plain.as_bytes(), &phc) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(argon2_error("verify")(e)),
    }
}
