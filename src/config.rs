use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::store::{ElectionStore, MongoStore};

/// Configuration for the database, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables.
#[derive(Deserialize)]
struct DbConfig {
    // secret
    db_uri: String,
}

/// A fairing that loads the database config, connects, bootstraps the
/// indexes, and places the store handle into managed state for the routes to
/// pick up.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded database config, connecting...");

        let store = match MongoStore::connect(&config.db_uri, crate::DATABASE).await {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };
        info!("...database connection online");

        Ok(rocket.manage(Box::new(store) as Box<dyn ElectionStore>))
    }
}
