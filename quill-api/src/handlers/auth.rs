use actix_web::{get, post, HttpResponse, Responder};
use quill_types::{CurrentUserResponse, MessageResponse};

// Sign-in lives entirely in the client; these only answer politely.

#[get("/auth/me")]
pub async fn current_user() -> impl Responder {
    HttpResponse::Ok().json(CurrentUserResponse {
        user: None,
        message: "Use Supabase client for authentication".to_string(),
    })
}

#[post("/auth/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Logout handled by Supabase client".to_string(),
    })
}
