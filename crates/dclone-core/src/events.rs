use crate::errors::DcloneError;

pub fn log_app_startup() {
    tracing::info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error<E: DcloneError>(error: &E) {
    tracing::error!(
        event = "core.app.error_occurred",
        error_code = error.error_code(),
        user_error = error.is_user_error(),
        error = %error,
    );
}
