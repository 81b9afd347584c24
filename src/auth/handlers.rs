use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{AuthResponse, LoginRequest, Profile, SignupRequest},
    jwt::{AuthClaims, JwtKeys},
    password::{hash_password, verify_password},
    repo::User,
};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

const MIN_PASSWORD_LEN: usize = 8;

fn auth_response(token: String, user: User) -> AuthResponse {
    AuthResponse {
        access_token: token,
        token_type: "bearer",
        email: user.email,
        full_name: user.full_name,
        role: user.role,
    }
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = payload.email.trim();

    if !is_valid_email(email) {
        warn!(%email, "signup with invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < MIN_PASSWORD_LEN {
        warn!("signup password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    if User::find_by_email(&state.db, email).await?.is_some() {
        warn!(%email, "signup with registered email");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, email, &hash, &payload.full_name, payload.role)
        .await
        .map_err(|e| match &e {
            // Concurrent signup can slip past the lookup; the unique index
            // still reports it as a duplicate, not a server fault.
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::DuplicateEmail,
            _ => ApiError::internal(e),
        })?;

    let token = JwtKeys::from_ref(&state).sign(&user)?;

    info!(user_id = %user.id, email = %user.email, role = %user.role, "user signed up");
    Ok(Json(auth_response(token, user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = payload.email.trim();

    // Unknown email and bad password answer identically.
    let user = User::find_by_email(&state.db, email)
        .await?
        .ok_or_else(|| {
            warn!(%email, "login with unknown email");
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).sign(&user)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(auth_response(token, user)))
}

#[instrument(skip(state, claims), fields(user_id = %claims.0.sub))]
pub async fn me(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Profile>, ApiError> {
    let user = User::find_by_id(&state.db, claims.0.sub)
        .await?
        .ok_or(ApiError::Unauthorized("User not found"))?;

    Ok(Json(Profile {
        id: user.id,
        email: user.email,
        full_name: user.full_name,
        role: user.role,
    }))
}
