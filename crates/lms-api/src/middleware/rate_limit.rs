use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Apply moderate rate limiting to the general API surface
/// 10 requests per second with burst of 20
pub fn apply_general_rate_limit(router: Router) -> Router {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(20)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
        .expect("Failed to build general rate limiter configuration");

    router.layer(GovernorLayer::new(governor_conf))
}
