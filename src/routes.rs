//! REST route templates, path segments and query parameter names

pub const API_VERSION: &str = "v3";

pub const API_CONFIG_ROUTE: &str = "/api/v3/config";
pub const API_PING_ROUTE: &str = "/api/v3/ping";
pub const API_VERSION_ROUTE: &str = "/api/v3/version";
pub const API_SECRET_ROUTE: &str = "/api/v3/secret";

pub const API_DEVICE_ROUTE: &str = "/api/v3/device";
pub const API_ALL_DEVICE_ROUTE: &str = "/api/v3/device/all";

pub const API_INTERVAL_ROUTE: &str = "/api/v3/interval";
pub const API_ALL_INTERVAL_ROUTE: &str = "/api/v3/interval/all";

pub const API_READING_ROUTE: &str = "/api/v3/reading";
pub const API_ALL_READING_ROUTE: &str = "/api/v3/reading/all";
pub const API_READING_COUNT_ROUTE: &str = "/api/v3/reading/count";

pub const API_DEVICE_CALLBACK_ROUTE: &str = "/api/v3/callback/device";
pub const API_DEVICE_VALIDATION_ROUTE: &str = "/api/v3/validate/device";
pub const API_PROFILE_CALLBACK_ROUTE: &str = "/api/v3/callback/profile";
pub const API_WATCHER_CALLBACK_ROUTE: &str = "/api/v3/callback/watcher";
pub const API_SERVICE_CALLBACK_ROUTE: &str = "/api/v3/callback/service";

// Path segments
pub const NAME: &str = "name";
pub const CHECK: &str = "check";
pub const PROFILE: &str = "profile";
pub const SERVICE: &str = "service";
pub const DEVICE: &str = "device";
pub const RESOURCE_NAME: &str = "resourceName";
pub const START: &str = "start";
pub const END: &str = "end";

// Query parameters
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const LABELS: &str = "labels";
pub const RESOURCE_NAMES: &str = "resourceNames";

pub const COMMA_SEPARATOR: &str = ",";

/// Join a route with path segments, percent-encoding each segment
pub fn join_path(route: &str, segments: &[&str]) -> String {
    let mut path = route.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(
            join_path(API_READING_ROUTE, &[DEVICE, NAME, "device", START, "1", END, "10"]),
            "/api/v3/reading/device/name/device/start/1/end/10"
        );
        assert_eq!(join_path(API_DEVICE_ROUTE, &[NAME, "a b"]), "/api/v3/device/name/a%20b");
    }
}
