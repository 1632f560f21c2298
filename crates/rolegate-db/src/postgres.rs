use std::collections::HashMap;

use async_trait::async_trait;
use rolegate_models::{NewUser, Role, User, UserAccount, UserStatus};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use crate::directory::Directory;
use crate::error::DirectoryError;

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
    cell_number: String,
    email: String,
    password_hash: String,
    status: UserStatus,
}

impl UserRow {
    fn into_account(self, roles: Vec<Role>) -> UserAccount {
        UserAccount {
            user: User {
                id: self.id,
                full_name: self.full_name,
                cell_number: self.cell_number,
                email: self.email,
                status: self.status,
                roles,
            },
            password_hash: self.password_hash,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRoleRow {
    user_id: Uuid,
    id: Uuid,
    name: String,
}

#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn roles_for_users(
        &self,
        user_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Role>>, DirectoryError> {
        let rows = sqlx::query_as::<_, UserRoleRow>(
            r#"
            SELECT ur.user_id, r.id, r.name
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = ANY($1)
            ORDER BY r.name
            "#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_user: HashMap<Uuid, Vec<Role>> = HashMap::new();
        for row in rows {
            by_user.entry(row.user_id).or_default().push(Role {
                id: row.id,
                name: row.name,
            });
        }
        Ok(by_user)
    }
}

#[async_trait]
impl Directory for PgDirectory {
    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, cell_number, email, password_hash, status
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut roles = self.roles_for_users(&[row.id]).await?;
        let roles = roles.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_account(roles)))
    }

    #[instrument(skip(self))]
    async fn find_users_by_status(&self, status: UserStatus) -> Result<Vec<User>, DirectoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, cell_number, email, password_hash, status
            FROM users
            WHERE status = $1
            ORDER BY email
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut roles = self.roles_for_users(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user_roles = roles.remove(&row.id).unwrap_or_default();
                row.into_account(user_roles).user
            })
            .collect())
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO users (full_name, cell_number, email, password_hash, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new_user.full_name)
        .bind(&new_user.cell_number)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DirectoryError::from_insert(e, &new_user.email))?;

        for role in &new_user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(id)
                .bind(role.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        let mut roles = new_user.roles;
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles.dedup_by(|a, b| a.id == b.id);

        Ok(User {
            id,
            full_name: new_user.full_name,
            cell_number: new_user.cell_number,
            email: new_user.email,
            status: new_user.status,
            roles,
        })
    }

    #[instrument(skip(self))]
    async fn update_user_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<bool, DirectoryError> {
        let result =
            sqlx::query("UPDATE users SET status = $1, updated_at = NOW() WHERE email = $2")
                .bind(status)
                .bind(email)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, DirectoryError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    #[instrument(skip(self))]
    async fn create_role(&self, name: &str) -> Result<Role, DirectoryError> {
        sqlx::query_as::<_, Role>("INSERT INTO roles (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DirectoryError::from_insert(e, name))
    }

    #[instrument(skip(self))]
    async fn list_roles(&self) -> Result<Vec<Role>, DirectoryError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }
}
