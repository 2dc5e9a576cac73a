//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod people;

use axum::Router;
use axum::routing::get;

use rolodex_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the `people` resource sub-router.
///
/// Requests on a known path with an unrouted method get `405`; anything
/// else (including `/people/` with an empty id) falls through to `404`.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/people",
            get(people::list::<PR>).post(people::create::<PR>),
        )
        .route(
            "/people/{id}",
            get(people::get::<PR>)
                .put(people::update::<PR>)
                .delete(people::delete::<PR>),
        )
}
