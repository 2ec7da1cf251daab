//! # Logging Macros
//!
//! Convenience macros for structured logging with consistent targets and field names.

/// Log an API request with method, path, status and duration.
///
/// # Example
///
/// ```rust
/// use logging::{log_api_request, RequestId};
///
/// let request_id = RequestId::new();
/// log_api_request!(request_id, "GET", "/api/companies", 200, 12);
/// ```
#[macro_export]
macro_rules! log_api_request {
    ($request_id:expr, $method:expr, $path:expr, $status:expr, $duration:expr) => {
        tracing::info!(
            target: "api",
            request_id = %$request_id,
            method = %$method,
            path = %$path,
            status = %$status,
            duration_ms = %$duration,
            "API request"
        )
    };
}

/// Log a denied permission check.
#[macro_export]
macro_rules! log_access_denied {
    ($user_id:expr, $resource:expr, $stage:expr, $policy:expr, $reason:expr) => {
        tracing::debug!(
            target: "access",
            user_id = %$user_id,
            resource = %$resource,
            stage = %$stage,
            policy = %$policy,
            reason = %$reason,
            "Access denied"
        )
    };
}

/// Log an authentication event.
#[macro_export]
macro_rules! log_auth_event {
    ($event:expr, $user_id:expr, $success:expr) => {
        tracing::info!(
            target: "auth",
            event = %$event,
            user_id = %$user_id,
            success = $success,
            "Authentication event"
        )
    };
}

/// Measure and log the duration of a block of code.
///
/// # Example
///
/// ```rust
/// use logging::measure_duration;
///
/// let total = measure_duration!("storage", "upload", { 40 + 2 });
/// assert_eq!(total, 42);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        tracing::debug!(
            target: $target,
            context = %$context,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}
