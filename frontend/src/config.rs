use crud_common::config::ApiConfig;

/// Resolves the backend address baked in at build time
/// (`CRUD_API_URL=https://... trunk build`).
pub fn resolve() -> ApiConfig {
    ApiConfig::resolve(option_env!("CRUD_API_URL"))
}
