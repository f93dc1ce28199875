//! User model -> entity mapper

use prompt_core::{User, UserRole};

use super::decode_string_list;
use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            role: UserRole::parse_or_default(&model.role),
            is_active: model.is_active,
            bio: model.bio,
            website: model.website,
            avatar: model.avatar,
            location: model.location,
            specialties: decode_string_list(&model.specialties),
            github_username: model.github_username,
            twitter_username: model.twitter_username,
            linkedin_profile: model.linkedin_profile,
            prompts_created: model.prompts_created,
            prompts_verified: model.prompts_verified,
            requests_handled: model.requests_handled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
