//! JSON handlers for the `people` resource.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rolodex_app::ports::PersonRepository;
use rolodex_domain::error::ValidationError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::{NewPerson, Person};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum PersonResponse {
    Ok(Json<Person>),
}

impl IntoResponse for PersonResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    raw.parse::<PersonId>().map_err(ApiError::from)
}

/// Decode a person payload whatever the declared content type.
///
/// Only syntax and type errors are rejected; absent fields stay empty.
fn decode(body: &Bytes) -> Result<NewPerson, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "rejected person payload");
        ValidationError::MalformedPayload(format!("Invalid JSON body: {err}")).into()
    })
}

/// `POST /people` — store a new person and return it with its assigned id.
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    body: Bytes,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let details = decode(&body)?;
    let created = state.person_service.create_person(details).await?;
    Ok(PersonResponse::Ok(Json(created)))
}

/// `GET /people` — list every person; `[]` when there are none.
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /people/{id}`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let person = state.person_service.get_person(id).await?;
    Ok(PersonResponse::Ok(Json(person)))
}

/// `PUT /people/{id}` — overwrite name and email, echoing the submission.
///
/// The id comes from the path; an `id` in the body is ignored.
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<PersonResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let details = decode(&body)?;
    let person = state.person_service.update_person(id, details).await?;
    Ok(PersonResponse::Ok(Json(person)))
}

/// `DELETE /people/{id}` — always `204` once the statement ran.
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.person_service.delete_person(id).await?;
    Ok(DeleteResponse::NoContent)
}
