use serde::{Deserialize, Serialize};
use validator::Validate;

use scribe_core::services::profile::ProfileUpdate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[validate(length(max = 255))]
    pub avatar_public_id: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: request.name,
            avatar_url: request.avatar_url,
            avatar_public_id: request.avatar_public_id,
        }
    }
}
