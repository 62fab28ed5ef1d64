//! Users service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        errors::RegistryError,
        users::{
            credential::{Credential, Password},
            data::{NewUser, UserUpdate},
            records::{User, UserRecord, UserUuid},
        },
        validation,
    },
    store::{Collection, Store},
};

/// Users kept in memory, with their password hashes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsersService {
    store: Store<UserRecord>,
}

impl InMemoryUsersService {
    /// Serves the users held in `store`.
    #[must_use]
    pub fn new(store: Store<UserRecord>) -> Self {
        Self { store }
    }
}

fn ensure_unique_email(
    users: &Collection<UserRecord>,
    except: Option<UserUuid>,
    email: &str,
) -> Result<(), RegistryError> {
    if users
        .find_other(except, |user| user.email.eq_ignore_ascii_case(email))
        .is_some()
    {
        return Err(RegistryError::duplicate("email", email));
    }

    Ok(())
}

/// Hashes a supplied password. A missing or blank one yields no credential,
/// which update reads as "keep the current one".
async fn derive_credential(
    password: Option<Password>,
) -> Result<Option<Credential>, RegistryError> {
    match password.filter(|password| !password.is_blank()) {
        Some(password) => Ok(Some(Credential::derive(password).await?)),
        None => Ok(None),
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn list_users(&self) -> Vec<User> {
        self.store.read().await.iter().map(User::from).collect()
    }

    async fn get_user(&self, user: UserUuid) -> Result<User, RegistryError> {
        self.store
            .read()
            .await
            .get(user)
            .map(User::from)
            .ok_or(RegistryError::NotFound)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RegistryError> {
        let username = validation::required("username", &user.username)?;
        let full_name = validation::required("fullName", &user.full_name)?;
        let email = validation::required("email", &user.email)?;

        validation::email("email", &email)?;

        let credential = derive_credential(user.password).await?;

        let mut tx = self.store.begin().await;

        if tx
            .find_other(None, |existing| {
                existing.username.eq_ignore_ascii_case(&username)
            })
            .is_some()
        {
            return Err(RegistryError::duplicate("username", username));
        }

        ensure_unique_email(&tx, None, &email)?;

        let now = Timestamp::now();

        let record = UserRecord {
            uuid: UserUuid::new(),
            username,
            full_name,
            email,
            role: user.role,
            is_active: user.is_active,
            last_login: None,
            created_at: now,
            updated_at: now,
            credential,
        };

        let created = User::from(&record);

        tx.push(record);

        debug!(user_uuid = %created.uuid, username = %created.username, "created user");

        Ok(created)
    }

    async fn update_user(&self, user: UserUuid, update: UserUpdate) -> Result<User, RegistryError> {
        let credential = derive_credential(update.password).await?;

        let mut tx = self.store.begin().await;

        if !tx.contains(user) {
            return Err(RegistryError::NotFound);
        }

        let full_name = update
            .full_name
            .as_deref()
            .map(|name| validation::required("fullName", name))
            .transpose()?;

        let email = update
            .email
            .as_deref()
            .map(|email| validation::required("email", email))
            .transpose()?;

        if let Some(email) = &email {
            validation::email("email", email)?;
            ensure_unique_email(&tx, Some(user), email)?;
        }

        let record = tx.get_mut(user).ok_or(RegistryError::NotFound)?;

        if let Some(full_name) = full_name {
            record.full_name = full_name;
        }

        if let Some(email) = email {
            record.email = email;
        }

        if let Some(role) = update.role {
            record.role = role;
        }

        if let Some(is_active) = update.is_active {
            record.is_active = is_active;
        }

        if credential.is_some() {
            record.credential = credential;
        }

        record.updated_at = Timestamp::now();

        debug!(user_uuid = %user, "updated user");

        Ok(User::from(&*record))
    }

    async fn delete_user(&self, user: UserUuid) -> Result<(), RegistryError> {
        self.store
            .begin()
            .await
            .remove(user)
            .ok_or(RegistryError::NotFound)?;

        debug!(user_uuid = %user, "deleted user");

        Ok(())
    }

    async fn verify_credentials(
        &self,
        username: String,
        password: Password,
    ) -> Result<User, RegistryError> {
        let (uuid, credential) = {
            let users = self.store.read().await;

            let record = users
                .iter()
                .find(|record| record.username.eq_ignore_ascii_case(username.trim()))
                .filter(|record| record.is_active)
                .ok_or(RegistryError::InvalidCredentials)?;

            (record.uuid, record.credential.clone())
        };

        let Some(credential) = credential else {
            return Err(RegistryError::InvalidCredentials);
        };

        if !credential.verify(password).await? {
            return Err(RegistryError::InvalidCredentials);
        }

        let mut tx = self.store.begin().await;

        let record = tx
            .get_mut(uuid)
            .filter(|record| record.is_active)
            .ok_or(RegistryError::InvalidCredentials)?;

        record.last_login = Some(Timestamp::now());

        debug!(user_uuid = %record.uuid, "verified user credentials");

        Ok(User::from(&*record))
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users in creation order.
    async fn list_users(&self) -> Vec<User>;

    /// Retrieves a single user.
    async fn get_user(&self, user: UserUuid) -> Result<User, RegistryError>;

    /// Creates a user; username and email must not be taken.
    async fn create_user(&self, user: NewUser) -> Result<User, RegistryError>;

    /// Applies a partial update. The username never changes.
    async fn update_user(&self, user: UserUuid, update: UserUpdate) -> Result<User, RegistryError>;

    /// Deletes a user.
    async fn delete_user(&self, user: UserUuid) -> Result<(), RegistryError>;

    /// Checks a username/password pair against an active user and records
    /// the login time.
    async fn verify_credentials(
        &self,
        username: String,
        password: Password,
    ) -> Result<User, RegistryError>;
}
