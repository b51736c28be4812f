use std::env;

/// Access policy for the top-N dashboard listings.
///
/// The course and enrollment listings have always been served without a
/// session. `DASHBOARD_REQUIRE_AUTH=true` puts them behind the admin gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    pub require_auth: bool,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            require_auth: env::var("DASHBOARD_REQUIRE_AUTH")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }
}
