use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use profile_shared::{
    DynamoProfileStore, ProfileConfig, ProfileError, ProfileResult, ProfileStore, UserProfile,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn function_handler(
    store: &dyn ProfileStore,
    event: LambdaEvent<CognitoEventUserPoolsPostConfirmation>,
) -> Result<CognitoEventUserPoolsPostConfirmation, Error> {
    let (payload, _context) = event.into_parts();

    // Any error fails the invocation, which makes Cognito fail the confirmation
    Ok(handle_post_confirmation(store, payload).await?)
}

/// Seed a default profile for the newly confirmed user and hand the event
/// back unchanged.
async fn handle_post_confirmation(
    store: &dyn ProfileStore,
    event: CognitoEventUserPoolsPostConfirmation,
) -> ProfileResult<CognitoEventUserPoolsPostConfirmation> {
    let user_id = match event
        .request
        .user_attributes
        .get("sub")
        .filter(|sub| !sub.is_empty())
    {
        Some(sub) => sub,
        None => {
            error!("No user sub provided.");
            return Err(ProfileError::MissingIdentifierError);
        }
    };

    let profile = UserProfile::new_default(user_id.as_str());

    if let Err(e) = store.put_profile(&profile).await {
        error!("Error writing profile for user {}: {}", profile.user_id, e);
        return Err(e);
    }

    info!("User {} profile created.", profile.user_id);
    Ok(event)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = ProfileConfig::from_env()?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoProfileStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    );
    info!("Seeding profiles into table: {}", store.table_name());

    run(service_fn(|event| function_handler(&store, event))).await
}
