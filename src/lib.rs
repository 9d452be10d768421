#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use crate::store::ElectionStore;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

/// Name of the backing database.
pub(crate) static DATABASE: &str = "council";

/// Assemble the full server: routes, logging, and a store connected from the
/// figment config at ignition time.
pub fn build() -> Rocket<Build> {
    base().attach(config::DatabaseFairing)
}

/// Assemble a rocket over an already-constructed store handle. Embedders
/// (and the test suite) use this to supply their own store.
pub fn rocket_for_store(store: Box<dyn ElectionStore>) -> Rocket<Build> {
    base().manage(store)
}

fn base() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(logging::LoggerFairing)
}
