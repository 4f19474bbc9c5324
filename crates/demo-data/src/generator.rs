//! Deterministic client account generation.
//!
//! The same seed name always produces identical output, so a demo
//! environment can be reset without churning its data.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GenerationError;

/// Upper bound on generated client accounts per environment.
pub const MAX_CLIENT_ACCOUNTS: usize = 500;

/// A generated filler client account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
}

/// Derive a numeric RNG seed from a human-friendly seed name.
///
/// FNV-1a over the trimmed name; collisions are acceptable because the seed
/// only namespaces demo environments.
fn seed_from_name(name: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    name.trim()
        .bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Generate `count` client accounts from the named seed.
///
/// Identical `(seed_name, count)` inputs yield identical accounts, ids
/// included. Emails embed the account index so they stay unique within one
/// generated batch.
///
/// # Errors
///
/// Returns [`GenerationError::EmptySeedName`] when the trimmed seed name is
/// empty and [`GenerationError::TooManyClients`] when `count` exceeds
/// [`MAX_CLIENT_ACCOUNTS`].
pub fn generate_client_accounts(
    seed_name: &str,
    count: usize,
) -> Result<Vec<GeneratedAccount>, GenerationError> {
    if seed_name.trim().is_empty() {
        return Err(GenerationError::EmptySeedName);
    }
    if count > MAX_CLIENT_ACCOUNTS {
        return Err(GenerationError::TooManyClients {
            requested: count,
            max: MAX_CLIENT_ACCOUNTS,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_from_name(seed_name));
    let accounts = (0..count)
        .map(|index| generate_single_account(&mut rng, index))
        .collect();
    Ok(accounts)
}

fn generate_single_account(rng: &mut ChaCha8Rng, index: usize) -> GeneratedAccount {
    let id = Uuid::from_u128(rng.random());
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let name = format!("{first} {last}");
    let email = derive_email(&first, &last, index);
    let phone = derive_phone(rng);
    let company_name: String = CompanyName(EN).fake_with_rng(rng);

    GeneratedAccount {
        id,
        name,
        email,
        phone,
        company_name,
    }
}

/// Build a lowercase ASCII email from the generated name parts.
fn derive_email(first: &str, last: &str, index: usize) -> String {
    let local: String = format!("{first}.{last}")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    format!("{}{index}@example.com", local.to_lowercase())
}

/// Ten-digit phone number in the same format the fixed demo accounts use.
fn derive_phone(rng: &mut ChaCha8Rng) -> String {
    let prefix: u32 = rng.random_range(70000..=99999);
    let suffix: u32 = rng.random_range(10000..=99999);
    format!("+91 {prefix} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn generates_requested_count() {
        let accounts = generate_client_accounts("test-seed", 10).expect("generation succeeds");
        assert_eq!(accounts.len(), 10);
    }

    #[rstest]
    fn generation_is_deterministic() {
        let first = generate_client_accounts("test-seed", 10).expect("generation succeeds");
        let second = generate_client_accounts("test-seed", 10).expect("generation succeeds");
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seed_names_produce_different_accounts() {
        let first = generate_client_accounts("seed-one", 3).expect("generation succeeds");
        let second = generate_client_accounts("seed-two", 3).expect("generation succeeds");
        assert_ne!(
            first.first().map(|a| a.id),
            second.first().map(|a| a.id)
        );
    }

    #[rstest]
    fn emails_are_unique_within_a_batch() {
        let accounts = generate_client_accounts("test-seed", 50).expect("generation succeeds");
        let emails: HashSet<_> = accounts.iter().map(|a| a.email.clone()).collect();
        assert_eq!(emails.len(), accounts.len());
    }

    #[rstest]
    fn emails_are_lowercase_ascii() {
        let accounts = generate_client_accounts("test-seed", 20).expect("generation succeeds");
        for account in &accounts {
            assert!(
                account
                    .email
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '@'),
                "unexpected character in {}",
                account.email
            );
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn empty_seed_name_is_rejected(#[case] seed_name: &str) {
        let result = generate_client_accounts(seed_name, 3);
        assert_eq!(result, Err(GenerationError::EmptySeedName));
    }

    #[rstest]
    fn oversized_count_is_rejected() {
        let result = generate_client_accounts("test-seed", MAX_CLIENT_ACCOUNTS + 1);
        assert_eq!(
            result,
            Err(GenerationError::TooManyClients {
                requested: MAX_CLIENT_ACCOUNTS + 1,
                max: MAX_CLIENT_ACCOUNTS,
            })
        );
    }

    #[rstest]
    fn seed_name_is_trimmed_before_hashing() {
        let trimmed = generate_client_accounts("test-seed", 3).expect("generation succeeds");
        let padded = generate_client_accounts("  test-seed  ", 3).expect("generation succeeds");
        assert_eq!(trimmed, padded);
    }
}
