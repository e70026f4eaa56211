use async_graphql::{
    Context, ErrorExtensions, ID, InputObject, Json as GqlJson, Object, Result as GqlResult,
    SimpleObject,
};

use crate::modules::assignments::adapters::inbound::identity::AuthenticatedUser;
use crate::modules::assignments::core::assignment::AssignmentId;
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::projection::AssignmentPublic;
use crate::modules::assignments::core::requests::{AssignmentRequest, UpdateAssignmentRequest};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAssignment {
    pub id: Option<ID>,
    pub name: String,
    pub author: String,
    pub description: String,
    pub due_date: i64,
    pub tag: Option<GqlJson<serde_json::Value>>,
    pub reminder_time: Vec<i64>,
}

impl From<AssignmentPublic> for GqlAssignment {
    fn from(v: AssignmentPublic) -> Self {
        Self {
            id: v.id.map(ID),
            name: v.name,
            author: v.author,
            description: v.description,
            due_date: v.due_date,
            tag: v.tag.map(GqlJson),
            reminder_time: v.reminder_time,
        }
    }
}

#[derive(InputObject)]
pub struct CreateAssignmentInput {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub tag_id: String,
    pub reminder_time: Option<Vec<i64>>,
}

impl From<CreateAssignmentInput> for AssignmentRequest {
    fn from(v: CreateAssignmentInput) -> Self {
        Self {
            name: v.name,
            description: v.description.unwrap_or_default(),
            due_date: v.due_date.unwrap_or_default(),
            tag_id: v.tag_id,
            reminder_time: v.reminder_time.unwrap_or_default(),
        }
    }
}

#[derive(InputObject, Default)]
pub struct UpdateAssignmentInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub tag_id: Option<String>,
    pub reminder_time: Option<Vec<i64>>,
}

impl From<UpdateAssignmentInput> for UpdateAssignmentRequest {
    fn from(v: UpdateAssignmentInput) -> Self {
        Self {
            name: v.name,
            description: v.description,
            due_date: v.due_date,
            tag_id: v.tag_id,
            reminder_time: v.reminder_time,
        }
    }
}

fn to_gql_error(err: AssignmentError) -> async_graphql::Error {
    let status = i32::from(err.status_code().as_u16());
    async_graphql::Error::new(err.to_string())
        .extend_with(|_, extensions| extensions.set("status", status))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn assignments(
        &self,
        context: &Context<'_>,
        from_present: Option<bool>,
    ) -> GqlResult<Vec<GqlAssignment>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .assignments
            .get_all_assignments(from_present.unwrap_or(false))
            .await
            .map_err(to_gql_error)?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn assignment(&self, context: &Context<'_>, id: AssignmentId) -> GqlResult<GqlAssignment> {
        let state = context.data_unchecked::<AppState>();
        state
            .assignments
            .get_assignment_by_id(id)
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_assignment(
        &self,
        context: &Context<'_>,
        input: CreateAssignmentInput,
    ) -> GqlResult<GqlAssignment> {
        let state = context.data_unchecked::<AppState>();
        let AuthenticatedUser(author) = context
            .data_opt::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| async_graphql::Error::new("missing authenticated user."))?;

        let request = AssignmentRequest::from(input);
        request.validate().map_err(to_gql_error)?;
        state
            .assignments
            .create_assignment(request.to_assignment(&author))
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }

    async fn update_assignment(
        &self,
        context: &Context<'_>,
        id: AssignmentId,
        input: UpdateAssignmentInput,
    ) -> GqlResult<GqlAssignment> {
        let state = context.data_unchecked::<AppState>();
        let update = UpdateAssignmentRequest::from(input);
        update.validate().map_err(to_gql_error)?;
        state
            .assignments
            .update_assignment(update, id)
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }

    async fn delete_assignment(&self, context: &Context<'_>, id: AssignmentId) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .assignments
            .delete_assignment(id)
            .await
            .map_err(to_gql_error)?;
        Ok(true)
    }
}
