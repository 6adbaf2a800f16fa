use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client as DynamoClient};
use std::collections::HashMap;
use tracing::debug;

use crate::{Hemisphere, ProfileError, ProfileResult, ProfileStore, UserProfile};

pub struct DynamoProfileStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoProfileStore {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ProfileStore for DynamoProfileStore {
    async fn put_profile(&self, profile: &UserProfile) -> ProfileResult<()> {
        debug!(
            "Putting profile {} into table {}",
            profile.user_id, self.table_name
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(profile_to_item(profile)))
            .send()
            .await
            .map_err(|e| ProfileError::StoreWriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> ProfileResult<Option<UserProfile>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("user_id", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(|e| ProfileError::StoreReadError(DisplayErrorContext(&e).to_string()))?;

        match result.item {
            Some(item) => Ok(Some(profile_from_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_hemisphere(&self, user_id: &str, hemisphere: Hemisphere) -> ProfileResult<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("user_id", AttributeValue::S(user_id.to_string()))
            .update_expression("SET hemisphere = :h")
            .expression_attribute_values(":h", AttributeValue::S(hemisphere.as_str().to_string()))
            .condition_expression("attribute_exists(user_id)")
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .map(|se| se.is_conditional_check_failed_exception())
                    .unwrap_or(false);
                if not_found {
                    ProfileError::ValidationError(format!("Profile not found: {}", user_id))
                } else {
                    ProfileError::StoreWriteError(DisplayErrorContext(&e).to_string())
                }
            })?;

        Ok(())
    }
}

/// Build the DynamoDB item for a profile
pub fn profile_to_item(profile: &UserProfile) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("user_id".to_string(), AttributeValue::S(profile.user_id.clone()));
    item.insert(
        "hemisphere".to_string(),
        AttributeValue::S(profile.hemisphere.as_str().to_string()),
    );
    item
}

pub fn profile_from_item(item: &HashMap<String, AttributeValue>) -> ProfileResult<UserProfile> {
    let user_id = item
        .get("user_id")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| ProfileError::InternalError("Missing user_id".to_string()))?
        .clone();

    let hemisphere = item
        .get("hemisphere")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| ProfileError::InternalError("Missing hemisphere".to_string()))?
        .parse::<Hemisphere>()
        .map_err(|e| ProfileError::InternalError(format!("Corrupt profile {}: {}", user_id, e)))?;

    Ok(UserProfile {
        user_id,
        hemisphere,
    })
}
