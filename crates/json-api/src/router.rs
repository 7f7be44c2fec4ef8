//! App Router

use std::path::PathBuf;

use salvo::{Router, serve_static::StaticDir};

use crate::{auth, employees, expenses, healthcheck, items, observability, sales};

/// Routes served without a bearer token.
fn public_router(assets_dir: PathBuf) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("assets/{**path}").get(StaticDir::new([assets_dir])))
}

fn api_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("items")
                .get(items::index::handler)
                .post(items::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(items::update::handler)
                        .delete(items::delete::handler)
                        .push(Router::with_path("decrement").put(items::decrement::handler))
                        .push(Router::with_path("increment").put(items::increment::handler)),
                ),
        )
        .push(
            Router::with_path("sales")
                .get(sales::index::handler)
                .post(sales::create::handler)
                .push(Router::with_path("batch").post(sales::batch::handler)),
        )
        .push(Router::with_path("daily-sales").get(sales::daily::handler))
        .push(
            Router::with_path("expenses")
                .get(expenses::index::handler)
                .post(expenses::create::handler),
        )
        .push(Router::with_path("daily-expenses").get(expenses::daily::handler))
        .push(
            Router::with_path("employees")
                .get(employees::index::handler)
                .post(employees::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(employees::update::handler)
                        .delete(employees::delete::handler),
                ),
        )
}

pub(crate) fn app_router(assets_dir: PathBuf) -> Router {
    Router::new()
        .push(public_router(assets_dir))
        .push(api_router())
}
