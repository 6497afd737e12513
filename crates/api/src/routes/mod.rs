pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{auth, character, inquiry, project, revalidation, settings, upload};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST   /auth/login                     public
/// POST   /auth/logout                    public (idempotent)
/// GET    /auth/session                   public
/// GET    /settings                       public, credential-free view
/// GET    /projects                       public
/// GET    /characters                     public
/// POST   /inquiries                      public contact form
/// GET    /revalidation                   public, path -> epoch map
///
/// GET    /admin/settings                 admin
/// PUT    /admin/settings                 admin, partial update
/// POST   /admin/settings/reset           admin
/// PUT    /admin/settings/credentials     admin
/// POST   /admin/projects                 admin
/// DELETE /admin/projects/{id}            admin
/// PUT    /admin/characters               admin upsert
/// POST   /admin/characters/seed          admin
/// GET    /admin/inquiries                admin
/// DELETE /admin/inquiries/{id}           admin
/// POST   /admin/uploads                  admin multipart
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session))
        .route("/settings", get(settings::get_public))
        .route("/projects", get(project::list))
        .route("/characters", get(character::list))
        .route("/inquiries", post(inquiry::create))
        .route("/revalidation", get(revalidation::snapshot))
        .nest("/admin", admin_routes())
}

/// Admin routes. Each handler takes the `AdminSession` extractor, so the
/// session check happens per-handler rather than as a layer.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(settings::get_admin).put(settings::update))
        .route("/settings/reset", post(settings::reset))
        .route("/settings/credentials", put(settings::update_credentials))
        .route("/projects", post(project::create))
        .route("/projects/{id}", delete(project::delete))
        .route("/characters", put(character::upsert))
        .route("/characters/seed", post(character::seed))
        .route("/inquiries", get(inquiry::list))
        .route("/inquiries/{id}", delete(inquiry::delete))
        .route("/uploads", post(upload::create))
}
