use axum::{Json, Router, extract::State, http::StatusCode, response::Html, routing::get};
use bakery_service::{
    BakedGoodForm, BakeryForm, BakeryWithBakedGoods, Mutation, NewBakedGood, Query,
};
use entity::{baked_good, bakery};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{ApiError, ApiResult, AppState, EntityId, FormFields};

const BAKERY: &str = "Bakery";
const BAKED_GOOD: &str = "Baked good";

/// Bakery as served over HTTP, its baked goods nested under `baked_goods`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BakeryResponse {
    #[serde(flatten)]
    pub bakery: bakery::Model,
    pub baked_goods: Vec<baked_good::Model>,
}

impl From<BakeryWithBakedGoods> for BakeryResponse {
    fn from((bakery, baked_goods): BakeryWithBakedGoods) -> Self {
        Self {
            bakery,
            baked_goods,
        }
    }
}

/// Success envelope for operations without an entity to return
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/{id}", get(get_bakery).patch(update_bakery))
        .route("/baked_goods", get(list_baked_goods).post(create_baked_good))
        .route("/baked_goods/{id}", get(get_baked_good).delete(delete_baked_good))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

async fn list_bakeries(state: State<AppState>) -> ApiResult<Json<Vec<BakeryResponse>>> {
    let bakeries = Query::find_bakeries(&state.conn).await?;

    Ok(Json(bakeries.into_iter().map(BakeryResponse::from).collect()))
}

async fn get_bakery(state: State<AppState>, id: EntityId) -> ApiResult<Json<BakeryResponse>> {
    let id = id.key(BAKERY)?;
    Query::find_bakery_by_id(&state.conn, id)
        .await?
        .map(|bakery| Json(bakery.into()))
        .ok_or(ApiError::NotFound(BAKERY))
}

async fn update_bakery(
    state: State<AppState>,
    id: EntityId,
    FormFields(form): FormFields<BakeryForm>,
) -> ApiResult<Json<BakeryResponse>> {
    let id = id.key(BAKERY)?;
    let updated = Mutation::update_bakery_by_id(&state.conn, id, form.into())
        .await?
        .ok_or(ApiError::NotFound(BAKERY))?;

    Ok(Json(updated.into()))
}

async fn list_baked_goods(state: State<AppState>) -> ApiResult<Json<Vec<baked_good::Model>>> {
    Ok(Json(Query::find_baked_goods(&state.conn).await?))
}

async fn get_baked_good(
    state: State<AppState>,
    id: EntityId,
) -> ApiResult<Json<baked_good::Model>> {
    let id = id.key(BAKED_GOOD)?;
    Query::find_baked_good_by_id(&state.conn, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(BAKED_GOOD))
}

async fn create_baked_good(
    state: State<AppState>,
    FormFields(form): FormFields<BakedGoodForm>,
) -> ApiResult<(StatusCode, Json<baked_good::Model>)> {
    let form = NewBakedGood::try_from(form)?;
    let baked_good = Mutation::create_baked_good(&state.conn, form).await?;

    tracing::info!(
        id = baked_good.id,
        bakery_id = baked_good.bakery_id,
        "created baked good"
    );
    Ok((StatusCode::CREATED, Json(baked_good)))
}

async fn delete_baked_good(state: State<AppState>, id: EntityId) -> ApiResult<Json<MessageBody>> {
    let id = id.key(BAKED_GOOD)?;
    Mutation::delete_baked_good(&state.conn, id)
        .await?
        .ok_or(ApiError::NotFound(BAKED_GOOD))?;

    tracing::info!(id, "deleted baked good");
    Ok(Json(MessageBody {
        message: "Baked good deleted successfully".to_owned(),
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Resource")
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
