//! Prompt request model -> entity mapper

use prompt_core::{Difficulty, Priority, PromptRequest, RequestStatus};

use crate::models::PromptRequestModel;

impl From<PromptRequestModel> for PromptRequest {
    fn from(model: PromptRequestModel) -> Self {
        PromptRequest {
            id: model.id,
            requester_name: model.requester_name,
            requester_email: model.requester_email,
            requested_title: model.requested_title,
            requested_language: model.requested_language,
            requested_difficulty: Difficulty::parse_or_default(&model.requested_difficulty),
            requested_category: model.requested_category,
            description: model.description,
            specific_requirements: model.specific_requirements,
            use_case: model.use_case,
            preferred_topics: model.preferred_topics,
            status: RequestStatus::parse_or_default(&model.status),
            priority: Priority::parse_or_default(&model.priority),
            assigned_to_id: model.assigned_to_id,
            assigned_by_id: model.assigned_by_id,
            assigned_at: model.assigned_at,
            completed_prompt_id: model.completed_prompt_id,
            completed_at: model.completed_at,
            admin_notes: model.admin_notes,
            response_message: model.response_message,
            is_urgent: model.is_urgent,
            is_rejected: model.is_rejected,
            estimated_hours: model.estimated_hours,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
