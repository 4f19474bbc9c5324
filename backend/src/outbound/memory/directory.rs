//! In-memory user directory backing login, signup, and user administration.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use demo_data::{AccountRole, DemoAccount, GeneratedAccount, PlanSeed};

use crate::domain::auth::{LoginCredentials, SignupRequest};
use crate::domain::ports::{LoginService, UserRepository};
use crate::domain::subscription::{BillingCycle, PlanTier, Subscription, SubscriptionStatus};
use crate::domain::user::{UserProfileUpdate, UserStatus, generated_avatar};
use crate::domain::{EmailAddress, Error, Role, User, UserId};

use super::{StoreLatency, seed_date, seed_timestamp};

/// In-memory user directory seeded from demo account data.
pub struct InMemoryDirectory {
    latency: StoreLatency,
    users: RwLock<Vec<User>>,
}

impl InMemoryDirectory {
    /// Build a directory from the fixed demo accounts plus generated
    /// filler clients.
    pub fn seeded(
        latency: StoreLatency,
        accounts: &[DemoAccount],
        clients: &[GeneratedAccount],
    ) -> Result<Self, Error> {
        let mut users = Vec::with_capacity(accounts.len() + clients.len());
        for account in accounts {
            users.push(demo_user(account)?);
        }
        for client in clients {
            users.push(client_user(client)?);
        }
        Ok(Self {
            latency,
            users: RwLock::new(users),
        })
    }

    /// Empty directory; used by tests that drive signup first.
    #[must_use]
    pub fn empty(latency: StoreLatency) -> Self {
        Self {
            latency,
            users: RwLock::new(Vec::new()),
        }
    }

    /// Resolve a seeded account's id by email without the latency pause.
    ///
    /// Seed-time helper for wiring stores that reference user ids.
    pub async fn seeded_id(&self, email: &str) -> Option<UserId> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.email.as_ref() == email)
            .map(|user| user.id)
    }
}

fn role_from_seed(role: AccountRole) -> Role {
    match role {
        AccountRole::SuperAdmin => Role::SuperAdmin,
        AccountRole::SalesAdmin => Role::SalesAdmin,
        AccountRole::Manufacturer => Role::Manufacturer,
        AccountRole::Distributor => Role::Distributor,
        AccountRole::Client => Role::Client,
        AccountRole::Affiliate => Role::Affiliate,
    }
}

/// The demo client's long-running subscription, matching the dataset the
/// environment has always shipped with.
fn seed_subscription(plan: PlanSeed) -> Subscription {
    let (tier, amount) = match plan {
        PlanSeed::Basic => (PlanTier::Basic, 999),
        PlanSeed::Professional => (PlanTier::Professional, 999),
        PlanSeed::Enterprise => (PlanTier::Enterprise, 9999),
    };
    Subscription {
        id: Uuid::new_v4(),
        plan: tier,
        status: SubscriptionStatus::Active,
        start_date: seed_date(2024, 1, 1),
        end_date: seed_date(2025, 1, 1),
        amount,
        billing_cycle: BillingCycle::Yearly,
        features: [
            "Unlimited Invoices",
            "Inventory Management",
            "GST Reports",
            "Multi-business",
        ]
        .iter()
        .map(|feature| (*feature).to_owned())
        .collect(),
    }
}

fn demo_user(account: &DemoAccount) -> Result<User, Error> {
    let email = EmailAddress::new(account.email)
        .map_err(|err| Error::internal(format!("invalid demo account email: {err}")))?;
    let created_at = seed_timestamp(2024, 1, 1);
    Ok(User {
        id: UserId::random(),
        avatar: Some(generated_avatar(email.as_ref())),
        email,
        name: account.name.to_owned(),
        role: role_from_seed(account.role),
        status: UserStatus::Active,
        phone: Some(account.phone.to_owned()),
        company_name: Some(account.company_name.to_owned()),
        gst_number: account.gst_number.map(str::to_owned),
        referral_code: account.referral_code.map(str::to_owned),
        subscription: account.plan.map(seed_subscription),
        created_at,
        updated_at: created_at,
        last_login_at: None,
    })
}

fn client_user(client: &GeneratedAccount) -> Result<User, Error> {
    let email = EmailAddress::new(&client.email)
        .map_err(|err| Error::internal(format!("invalid generated email: {err}")))?;
    let created_at = seed_timestamp(2024, 1, 1);
    Ok(User {
        id: UserId::new(client.id),
        avatar: Some(generated_avatar(email.as_ref())),
        email,
        name: client.name.clone(),
        role: Role::Client,
        status: UserStatus::Active,
        phone: Some(client.phone.clone()),
        company_name: Some(client.company_name.clone()),
        gst_number: None,
        referral_code: None,
        subscription: None,
        created_at,
        updated_at: created_at,
        last_login_at: None,
    })
}

#[async_trait]
impl LoginService for InMemoryDirectory {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        self.latency.pause().await;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.email == *credentials.email());
        match user {
            Some(user) if credentials.password() == demo_data::DEMO_PASSWORD => {
                user.last_login_at = Some(Utc::now());
                info!(user_id = %user.id, role = user.role.as_str(), "login succeeded");
                Ok(user.clone())
            }
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }

    async fn register(&self, request: SignupRequest) -> Result<User, Error> {
        self.latency.pause().await;
        let now = Utc::now();
        let user = User {
            id: UserId::random(),
            avatar: Some(generated_avatar(request.email.as_ref())),
            email: request.email,
            name: request.name,
            role: request.role.unwrap_or(Role::Client),
            status: UserStatus::Active,
            phone: request.phone,
            company_name: request.company_name,
            gst_number: None,
            referral_code: request.referral_code,
            subscription: None,
            created_at: now,
            updated_at: now,
            last_login_at: Some(now),
        };
        let mut users = self.users.write().await;
        users.push(user.clone());
        info!(user_id = %user.id, "account registered");
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryDirectory {
    async fn list(&self) -> Result<Vec<User>, Error> {
        self.latency.pause().await;
        Ok(self.users.read().await.clone())
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, Error> {
        self.latency.pause().await;
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn update_status(&self, id: UserId, status: UserStatus) -> Result<User, Error> {
        self.latency.pause().await;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found("no such user"))?;
        user.status = status;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_profile(&self, id: UserId, patch: UserProfileUpdate) -> Result<User, Error> {
        self.latency.pause().await;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found("no such user"))?;
        user.apply_profile(patch, Utc::now());
        Ok(user.clone())
    }

    async fn attach_subscription(
        &self,
        id: UserId,
        subscription: Subscription,
    ) -> Result<User, Error> {
        self.latency.pause().await;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found("no such user"))?;
        user.subscription = Some(subscription);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::seeded(StoreLatency::NONE, &demo_data::demo_accounts(), &[])
            .expect("seed data is valid")
    }

    #[rstest]
    #[case("client@billbook.example", demo_data::DEMO_PASSWORD, true)]
    #[case("client@billbook.example", "wrong", false)]
    #[case("stranger@billbook.example", demo_data::DEMO_PASSWORD, false)]
    #[tokio::test]
    async fn login_checks_directory_and_sentinel(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let directory = directory();
        let creds = LoginCredentials::try_from_parts(email, password).expect("credential shape");
        let result = directory.authenticate(&creds).await;
        match (should_succeed, result) {
            (true, Ok(user)) => {
                assert_eq!(user.email.as_ref(), email);
                assert!(user.last_login_at.is_some());
            }
            (false, Err(err)) => assert_eq!(err.code, ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(user)) => panic!("expected failure, got user: {}", user.id),
        }
    }

    #[tokio::test]
    async fn failed_login_leaves_directory_untouched() {
        let directory = directory();
        let before = directory.list().await.expect("list users");
        let creds = LoginCredentials::try_from_parts("client@billbook.example", "wrong")
            .expect("credential shape");
        let _ = directory.authenticate(&creds).await;
        let after = directory.list().await.expect("list users");
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn register_defaults_to_the_client_role() {
        let directory = InMemoryDirectory::empty(StoreLatency::NONE);
        let request = SignupRequest::try_from_parts(
            "New Business",
            "owner@example.com",
            "irrelevant",
            None,
            Some("New Business Ltd".into()),
            None,
            None,
        )
        .expect("valid signup");
        let user = directory.register(request).await.expect("registered");
        assert_eq!(user.role, Role::Client);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.avatar.as_deref().is_some_and(|a| a.contains("owner@example.com")));
        assert_eq!(directory.list().await.expect("list users").len(), 1);
    }

    #[tokio::test]
    async fn register_does_not_enforce_email_uniqueness() {
        let directory = InMemoryDirectory::empty(StoreLatency::NONE);
        for _ in 0..2 {
            let request = SignupRequest::try_from_parts(
                "Duplicate",
                "dup@example.com",
                "pw",
                None,
                None,
                None,
                None,
            )
            .expect("valid signup");
            directory.register(request).await.expect("registered");
        }
        assert_eq!(directory.list().await.expect("list users").len(), 2);
    }

    #[tokio::test]
    async fn status_update_rejects_unknown_ids() {
        let directory = directory();
        let err = directory
            .update_status(UserId::random(), UserStatus::Suspended)
            .await
            .expect_err("unknown id must fail");
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn status_update_is_last_write_wins() {
        let directory = directory();
        let id = directory
            .seeded_id("client@billbook.example")
            .await
            .expect("seeded client");
        directory
            .update_status(id, UserStatus::Suspended)
            .await
            .expect("first write");
        let user = directory
            .update_status(id, UserStatus::Active)
            .await
            .expect("second write");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn the_demo_client_carries_its_subscription() {
        let directory = directory();
        let id = directory
            .seeded_id("client@billbook.example")
            .await
            .expect("seeded client");
        let user = directory.find(id).await.expect("lookup").expect("present");
        let subscription = user.subscription.expect("subscription seeded");
        assert_eq!(subscription.plan, PlanTier::Professional);
        assert_eq!(subscription.amount, 999);
    }
}
