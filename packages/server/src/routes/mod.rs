use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::episode::upload_episode))
        .layer(handlers::episode::upload_body_limit());

    OpenApiRouter::new()
        .routes(routes!(handlers::episode::list_episodes))
        .routes(routes!(handlers::download::download_episode))
        .merge(upload)
}
