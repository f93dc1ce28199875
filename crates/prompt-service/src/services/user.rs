//! User service
//!
//! Account creation, profile maintenance and administrative role changes.

use chrono::Utc;
use prompt_common::{hash_password, validate_password};
use prompt_core::{DomainError, NewUser, PageRequest, UserFilter, UserRole};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    AdminUpdateUserRequest, CreateUserRequest, PaginatedResponse, UpdateUserRequest,
    UserListQuery, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validation::{non_blank, parse_filter, require, require_id};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account; the password is stored as an argon2id hash
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        require(&request.name, "name is required")?;
        require(&request.email, "email is required")?;
        require(&request.username, "username is required")?;
        require(&request.password, "password is required")?;
        validate_password(&request.password)?;

        let request = CreateUserRequest {
            bio: non_blank(request.bio),
            website: non_blank(request.website),
            ..request
        };
        request.validate()?;

        let email = request.email.trim().to_string();
        let username = request.username.trim().to_string();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().username_exists(&username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            name: request.name.trim().to_string(),
            email,
            username,
            role: UserRole::parse_or_default(request.role.trim()),
            bio: request.bio,
            website: request.website,
            ..Default::default()
        };

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;
        info!(user_id = user.id, role = %user.role, "User created");

        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> ServiceResult<UserResponse> {
        require_id(id, "invalid user id")?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        query: UserListQuery,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        let page = PageRequest::new(query.page, query.limit);
        let role: Option<UserRole> = parse_filter(query.role, "invalid role")?;

        let filter = UserFilter {
            role,
            is_active: query.is_active,
            search: query.search,
        }
        .normalized();

        let result = self.ctx.user_repo().find_all(&filter, page).await?;
        Ok(PaginatedResponse::from_page(result, page))
    }

    /// Partial profile update; email and username stay unique
    #[instrument(skip(self, update))]
    pub async fn update_user(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_id(id, "invalid user id")?;
        update.validate()?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        if let Some(email) = update.email.map(|e| e.trim().to_string()) {
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(DomainError::EmailAlreadyExists.into());
                }
                user.email = email;
            }
        }
        if let Some(username) = update.username.map(|u| u.trim().to_string()) {
            if username != user.username {
                if self.ctx.user_repo().username_exists(&username).await? {
                    return Err(DomainError::UsernameAlreadyExists.into());
                }
                user.username = username;
            }
        }

        if let Some(name) = update.name {
            require(&name, "name is required")?;
            user.name = name.trim().to_string();
        }
        if update.bio.is_some() {
            user.bio = non_blank(update.bio);
        }
        if update.website.is_some() {
            user.website = non_blank(update.website);
        }
        if update.avatar.is_some() {
            user.avatar = non_blank(update.avatar);
        }
        if update.location.is_some() {
            user.location = non_blank(update.location);
        }
        if let Some(specialties) = update.specialties {
            user.specialties = specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if update.github_username.is_some() {
            user.github_username = non_blank(update.github_username);
        }
        if update.twitter_username.is_some() {
            user.twitter_username = non_blank(update.twitter_username);
        }
        if update.linkedin_profile.is_some() {
            user.linkedin_profile = non_blank(update.linkedin_profile);
        }
        user.updated_at = Utc::now();

        let user = self.ctx.user_repo().update(&user).await?;
        info!(user_id = id, "User profile updated");

        Ok(user.into())
    }

    /// Change role and/or active flag
    #[instrument(skip(self))]
    pub async fn admin_update_user(
        &self,
        id: i64,
        update: AdminUpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_id(id, "invalid user id")?;
        let role: Option<UserRole> = parse_filter(update.role, "invalid role")?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        if let Some(role) = role {
            user.role = role;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();

        let user = self.ctx.user_repo().update(&user).await?;
        info!(user_id = id, role = %user.role, is_active = user.is_active, "User updated by admin");

        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> ServiceResult<()> {
        require_id(id, "invalid user id")?;

        if self.ctx.user_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("User", id));
        }

        self.ctx.user_repo().delete(id).await?;
        info!(user_id = id, "User deleted");

        Ok(())
    }
}
