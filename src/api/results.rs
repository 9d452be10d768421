use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{
    position::Position,
    tally::{self, PositionTally},
};
use crate::store::ElectionStore;

pub fn routes() -> Vec<Route> {
    routes![full_results, position_results]
}

/// Operator report: every position's tally from one ballot snapshot.
#[get("/results")]
async fn full_results(store: &State<Box<dyn ElectionStore>>) -> Result<Json<Vec<PositionTally>>> {
    tally::full_tally(store.inner().as_ref()).await.map(Json)
}

#[get("/results/<position>")]
async fn position_results(
    position: Position,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<Json<PositionTally>> {
    tally::position_tally(store.inner().as_ref(), position)
        .await
        .map(Json)
}
