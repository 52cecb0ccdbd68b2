pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::{RequireAnonymous, RequireAuth};

/// Mounts the user and task resources. Every route carries exactly one auth
/// gate: registration and login require an anonymous caller, everything else
/// requires an authenticated one. `/tasks/search` is registered ahead of
/// `/tasks/{id}` so the literal segment wins.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("/login")
                    .wrap(RequireAnonymous)
                    .route(web::post().to(users::login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(RequireAuth)
                    .route(web::post().to(users::logout)),
            )
            .service(
                web::resource("")
                    .wrap(RequireAnonymous)
                    .route(web::post().to(users::register)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(RequireAuth)
                    .route(web::put().to(users::update))
                    .route(web::get().to(users::get_profile)),
            ),
    )
    .service(
        web::scope("/tasks")
            .service(
                web::resource("/search")
                    .wrap(RequireAuth)
                    .route(web::get().to(tasks::search)),
            )
            .service(
                web::resource("")
                    .wrap(RequireAuth)
                    .route(web::post().to(tasks::create)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(RequireAuth)
                    .route(web::get().to(tasks::get))
                    .route(web::put().to(tasks::update))
                    .route(web::delete().to(tasks::delete)),
            ),
    );
}
