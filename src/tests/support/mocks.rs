// mockall doubles for the argument-free content ports.
use async_trait::async_trait;
use mockall::mock;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::profile::application::domain::entities::{About, Profile};
use crate::modules::profile::application::ports::outgoing::{AboutQuery, ProfileQuery};
use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::http::ApiError;

mock! {
    pub ProfileQuery {}

    #[async_trait]
    impl ProfileQuery for ProfileQuery {
        async fn get_profile(&self) -> Result<Profile, ApiError>;
    }
}

mock! {
    pub AboutQuery {}

    #[async_trait]
    impl AboutQuery for AboutQuery {
        async fn get_about(&self) -> Result<About, ApiError>;
    }
}

mock! {
    pub SkillQuery {}

    #[async_trait]
    impl SkillQuery for SkillQuery {
        async fn get_skills(&self) -> Result<SkillsByCategory, ApiError>;
    }
}

mock! {
    pub ExperienceQuery {}

    #[async_trait]
    impl ExperienceQuery for ExperienceQuery {
        async fn get_experiences(&self) -> Result<Vec<Experience>, ApiError>;
    }
}
