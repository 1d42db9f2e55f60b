pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_API_KEY: &str = "test-api-key";

pub const TEST_ALERT_NAME: &str = "the-alert";
pub const TEST_ALERT_ID: &str = "alert-1234";
pub const TEST_WEBHOOK_NAME: &str = "the-webhook";
pub const TEST_WEBHOOK_ID: &str = "webhook-5678";
pub const TEST_VIEW_FOLDER_NAME: &str = "the-view-folder";
pub const TEST_VIEW_FOLDER_ID: &str = "folder-42";
pub const TEST_GENERATION: i64 = 3;
