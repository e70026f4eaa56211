use async_graphql::{EmptySubscription, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, response::Html};

pub use crate::modules::assignments::adapters::inbound::graphql::{MutationRoot, QueryRoot};
use crate::modules::assignments::adapters::inbound::identity::{AuthenticatedUser, USER_UID_HEADER};
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(uid) = headers
        .get(USER_UID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|uid| !uid.is_empty())
    {
        request = request.data(AuthenticatedUser(uid.to_string()));
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
