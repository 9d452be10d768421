use rocket::Route;

mod auth;
mod candidacy;
mod results;
mod voting;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(auth::routes());
    routes.extend(candidacy::routes());
    routes.extend(voting::routes());
    routes.extend(results::routes());
    routes
}
