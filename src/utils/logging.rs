use tracing::{debug, error, info, warn};

pub fn log_config_loaded(env: &str, base_url: &str) {
    info!("Configuration loaded for environment: {} - API: {}", env, base_url);
}

pub fn log_command_started(command: &str) {
    debug!("Command started: {}", command);
}

pub fn log_command_finished(command: &str, duration_ms: u128) {
    info!("✅ Command finished: {} - Duration: {}ms", command, duration_ms);
}

pub fn log_custom_field_set(card_id: &str, field_id: &str, value: &str) {
    info!("✏️ Custom field {} set on card {} - Value: {}", field_id, card_id, value);
}

pub fn log_trello_api_error(command: &str, status: Option<u16>, error: &str) {
    error!("Trello API error: {} - Status: {:?} - Error: {}", command, status, error);
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}
