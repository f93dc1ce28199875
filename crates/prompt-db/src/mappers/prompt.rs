//! Prompt model -> entity mapper

use prompt_core::{Difficulty, Prompt};

use super::decode_string_list;
use crate::models::PromptModel;

impl From<PromptModel> for Prompt {
    fn from(model: PromptModel) -> Self {
        Prompt {
            id: model.id,
            title: model.title,
            description: model.description,
            language: model.language,
            difficulty: Difficulty::parse_or_default(&model.difficulty),
            category: model.category,
            problem_statement: model.problem_statement,
            is_verified: model.is_verified,
            verified_by: model.verified_by,
            verified_at: model.verified_at,
            view_count: model.view_count,
            like_count: model.like_count,
            difficulty_vote: model.difficulty_vote,
            tags: decode_string_list(&model.tags),
            author_id: model.author_id,
            author_name: model.author_name,
            author_email: model.author_email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
