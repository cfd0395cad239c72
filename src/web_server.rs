use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    serve, Json, Router,
};
use minijinja::{path_loader, Environment};
use serde::Deserialize;
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::RwLock;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::chat::ChatTurn;
use crate::coach::LifeCoach;
use crate::habits::{suggestions_for, HabitStore, CATEGORIES};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    templates: Arc<Environment<'static>>,
    coach: Arc<LifeCoach>,
    habits: Arc<RwLock<HabitStore>>,
}

impl AppState {
    pub fn new(coach: LifeCoach) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader("templates"));
        Self {
            templates: Arc::new(env),
            coach: Arc::new(coach),
            habits: Arc::new(RwLock::new(HabitStore::new())),
        }
    }
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, Html<String>> {
    state
        .templates
        .get_template("index.html")
        .and_then(|tmpl| {
            let context = minijinja::context! {
                title => "GPT-Life: AI Personality Coach",
                categories => CATEGORIES,
            };
            tmpl.render(context)
        })
        .map(Html)
        .map_err(|e| {
            error!("Failed to get or render template: {}", e);
            Html(format!("Internal Server Error: {}", e))
        })
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    history: Vec<ChatTurn>,
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    if req.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "message must not be empty"})),
        );
    }
    let reply = state.coach.advise(&req.message, &req.history).await;
    (StatusCode::OK, Json(json!({ "reply": reply })))
}

#[derive(Deserialize)]
struct AddHabitRequest {
    name: String,
    category: String,
    #[serde(default)]
    description: String,
}

async fn add_habit_handler(
    State(state): State<AppState>,
    Json(req): Json<AddHabitRequest>,
) -> impl IntoResponse {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name must not be empty"})),
        );
    }
    let habit = state
        .habits
        .write()
        .await
        .add(req.name, req.category, req.description);
    info!(id = habit.id, name = %habit.name, "Added habit");
    (StatusCode::CREATED, Json(json!(habit)))
}

#[derive(Deserialize)]
struct ListHabitsQuery {
    category: Option<String>,
}

async fn list_habits_handler(
    State(state): State<AppState>,
    Query(query): Query<ListHabitsQuery>,
) -> impl IntoResponse {
    let store = state.habits.read().await;
    let habits = match query.category.as_deref() {
        Some(category) => store.list_by_category(category),
        None => store.all().to_vec(),
    };
    Json(habits)
}

async fn suggestions_handler(Path(category): Path<String>) -> impl IntoResponse {
    Json(json!({
        "category": category,
        "suggestions": suggestions_for(&category),
    }))
}

#[derive(Deserialize)]
struct ImproveRequest {
    habit: String,
    current_method: String,
}

async fn improve_handler(
    State(state): State<AppState>,
    Json(req): Json<ImproveRequest>,
) -> impl IntoResponse {
    if req.habit.trim().is_empty() || req.current_method.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "habit and current_method must not be empty"})),
        );
    }
    let suggestions = state.coach.improve_habit(&req.habit, &req.current_method).await;
    (StatusCode::OK, Json(json!({ "suggestions": suggestions })))
}

#[derive(Deserialize)]
struct PlanRequest {
    goals: Vec<String>,
}

async fn plan_handler(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> impl IntoResponse {
    let plan = state.coach.generate_daily_plan(&req.goals).await;
    Json(json!({ "plan": plan }))
}

/// Build the application router; split out so tests can drive it in-process.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/habits", post(add_habit_handler).get(list_habits_handler))
        .route("/api/suggestions/:category", get(suggestions_handler))
        .route("/api/improve", post(improve_handler))
        .route("/api/plan", post(plan_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(TraceLayer::new_for_http()) // Add request logging
}

pub async fn start_web_server(host: std::net::IpAddr, port: u16) -> Result<()> {
    let state = AppState::new(LifeCoach::from_env());
    let app = build_router(state);

    let addr = SocketAddr::from((host, port));
    info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to address {}", addr))?;

    serve(listener, app.into_make_service())
        .await
        .context("Web server failed")?;

    Ok(())
}
