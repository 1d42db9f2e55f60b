// Group and versions served by the operator
pub const CORALOGIX_GROUP: &str = "coralogix.com";
pub const V1ALPHA1_API_VERSION: &str = "coralogix.com/v1alpha1";
pub const V1BETA1_API_VERSION: &str = "coralogix.com/v1beta1";

pub const FINALIZER_NAME: &str = "coralogix.com/finalizer";

// Status conditions
pub const REMOTE_SYNCED_CONDITION: &str = "RemoteSynced";
pub const REASON_REMOTE_CREATED: &str = "RemoteCreatedSuccessfully";
pub const REASON_REMOTE_UPDATED: &str = "RemoteUpdatedSuccessfully";
pub const REASON_REMOTE_SYNC_FAILED: &str = "RemoteSyncFailed";
pub const REASON_VALIDATION_FAILED: &str = "ValidationFailed";
pub const REASON_EXTRACTION_FAILED: &str = "ExtractionFailed";
pub const REASON_REMOTE_DELETION_FAILED: &str = "RemoteDeletionFailed";

// Env vars
pub const CORALOGIX_API_KEY_ENV_VAR: &str = "CORALOGIX_API_KEY";
pub const CORALOGIX_REGION_ENV_VAR: &str = "CORALOGIX_REGION";
pub const CORALOGIX_URL_ENV_VAR: &str = "CORALOGIX_URL";

// Defaults
pub const DEFAULT_WEBHOOK_PORT: u16 = 9443;
pub const DEFAULT_RESYNC_SECONDS: u64 = 600;

// Timing
pub const ERROR_RETRY_DELAY_SECONDS: u64 = 30;
