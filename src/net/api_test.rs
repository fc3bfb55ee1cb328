use super::*;

#[test]
fn app_endpoint_formats_expected_path() {
    assert_eq!(app_endpoint("app-123"), "/api/apps/app-123");
}

#[test]
fn login_path_points_at_auth_flow() {
    assert_eq!(LOGIN_PATH, "/auth/login");
}
