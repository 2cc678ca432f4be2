use crate::Route;

use std::str::FromStr;

#[test]
fn test_route_round_trips_through_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_str(route.path()).unwrap(), route);
    }
}

#[test]
fn given_trailing_slash_when_parse_then_normalized() {
    assert_eq!(Route::from_str("/dashboard/").unwrap(), Route::Overview);
    assert_eq!(Route::from_str("/").unwrap(), Route::Landing);
}

#[test]
fn given_unknown_path_when_parse_then_error() {
    assert!(Route::from_str("/admin").is_err());
    assert!(Route::from_str("").is_err());
}

#[test]
fn test_only_dashboard_routes_are_protected() {
    let protected: Vec<Route> = Route::ALL
        .into_iter()
        .filter(Route::is_protected)
        .collect();

    assert_eq!(
        protected,
        vec![
            Route::Overview,
            Route::Upload,
            Route::Analysis,
            Route::Settings
        ]
    );
    assert!(!Route::anonymous_entry().is_protected());
}

#[test]
fn given_unlisted_dashboard_subpath_when_parse_then_protected_dashboard_route() {
    let route = Route::from_str("/dashboard/charts").unwrap();

    assert_eq!(route, Route::DashboardOther);
    assert!(route.is_protected());
    assert_eq!(Route::from_str("/dashboard/a/b/").unwrap(), Route::DashboardOther);
}

#[test]
fn given_dashboard_lookalike_when_parse_then_error() {
    assert!(Route::from_str("/dashboards").is_err());
    assert!(Route::from_str("/x/dashboard/charts").is_err());
}
