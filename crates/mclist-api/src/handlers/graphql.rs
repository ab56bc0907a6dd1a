//! GraphQL endpoint and the GraphiQL playground

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::cookies::RequestCookies;
use crate::state::AppState;

/// Execute a GraphQL request with the caller's token cookies attached
///
/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request
        .into_inner()
        .data(RequestCookies::from_jar(&jar));

    state.schema().execute(request).await.into()
}

/// GET /graphql (not mounted in production)
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
