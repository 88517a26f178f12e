//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use golf_scheduler_web::{
    generate_schedule, parse_config, schedule_csv, schedule_summary, PairKey, Pairing, Roster,
    Schedule, ScoreResult, EXAMPLE_CONFIG,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a generation job.
type JobId = Uuid;

/// Iteration budget accepted at the API boundary.
const MIN_ITERATIONS: u32 = 100;
const MAX_ITERATIONS: u32 = 10_000;
const DEFAULT_ITERATIONS: u32 = 2_000;

/// Inactivity threshold: jobs not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(2 * 3600);

/// Where a generation job currently stands.
enum JobState {
    Running,
    Completed(Box<Schedule>),
    Failed(String),
}

/// Per-job entry: the parsed roster, current state, and last access time
/// (for auto-cleanup).
struct JobEntry {
    roster: Roster,
    state: JobState,
    progress: f64,
    last_activity: Instant,
}

/// In-memory state: many generation jobs by ID.
type AppState = Data<RwLock<HashMap<JobId, JobEntry>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct GenerateBody {
    config: String,
    iterations: Option<u32>,
}

/// Path segment: job id (e.g. /api/schedules/{id})
#[derive(Deserialize)]
struct JobPath {
    id: JobId,
}

/// One week of a finished schedule, in roster order, for rendering.
#[derive(Serialize)]
struct WeekView {
    week: String,
    aggregate: bool,
    results: Vec<Pairing>,
}

/// A finished schedule plus everything the page needs to render it.
#[derive(Serialize)]
struct ScheduleView {
    weeks: Vec<WeekView>,
    pair_counts: HashMap<PairKey, u32>,
    sit_outs: HashMap<String, u32>,
    score: Option<ScoreResult>,
}

impl ScheduleView {
    fn build(roster: &Roster, schedule: &Schedule) -> Self {
        let weeks = roster
            .weeks
            .iter()
            .map(|week| WeekView {
                week: week.clone(),
                aggregate: roster.aggregate_weeks.contains(week),
                results: schedule.week_results(week).to_vec(),
            })
            .collect();
        Self {
            weeks,
            pair_counts: schedule.pair_counts.clone(),
            sit_outs: schedule.sit_outs.clone(),
            score: schedule.score,
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-scheduler-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The starter configuration text for the editor.
#[get("/api/example-config")]
async fn api_example_config() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(EXAMPLE_CONFIG)
}

/// Start a generation job: parse + validate the config text, then run the
/// search on the blocking pool. Returns the job id; the client polls
/// `GET /api/schedules/{id}` for progress and the result.
#[post("/api/schedules")]
async fn api_create_schedule(state: AppState, body: Json<GenerateBody>) -> HttpResponse {
    let roster = match parse_config(&body.config) {
        Ok(roster) => roster,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let iterations = body
        .iterations
        .unwrap_or(DEFAULT_ITERATIONS)
        .clamp(MIN_ITERATIONS, MAX_ITERATIONS);

    let id = Uuid::new_v4();
    {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        g.insert(
            id,
            JobEntry {
                roster: roster.clone(),
                state: JobState::Running,
                progress: 0.0,
                last_activity: Instant::now(),
            },
        );
    }

    let jobs = state.clone();
    tokio::task::spawn_blocking(move || {
        let mut rng = rand::thread_rng();
        let outcome = generate_schedule(&roster, iterations, &mut rng, |progress| {
            if let Ok(mut g) = jobs.write() {
                if let Some(entry) = g.get_mut(&id) {
                    entry.progress = progress;
                }
            }
        });
        let mut g = match jobs.write() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        // The entry may have been cleaned up if the caller abandoned the job.
        if let Some(entry) = g.get_mut(&id) {
            match outcome {
                Ok(schedule) => {
                    if let Some(result) = schedule.score {
                        log::info!("Job {} finished with score {}", id, result.score);
                    }
                    entry.progress = 100.0;
                    entry.state = JobState::Completed(Box::new(schedule));
                }
                Err(e) => {
                    log::warn!("Job {} failed: {}", id, e);
                    entry.state = JobState::Failed(e.to_string());
                }
            }
        }
    });

    HttpResponse::Ok().json(serde_json::json!({ "id": id, "iterations": iterations }))
}

/// Poll a job: running (with progress), completed (with the schedule), or
/// failed (with a message). Touching it refreshes last_activity.
#[get("/api/schedules/{id}")]
async fn api_get_schedule(state: AppState, path: Path<JobPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such job" })),
    };
    entry.last_activity = Instant::now();
    match &entry.state {
        JobState::Running => HttpResponse::Ok().json(serde_json::json!({
            "status": "running",
            "progress": entry.progress,
        })),
        JobState::Completed(schedule) => HttpResponse::Ok().json(serde_json::json!({
            "status": "completed",
            "progress": 100.0,
            "schedule": ScheduleView::build(&entry.roster, schedule),
        })),
        JobState::Failed(message) => HttpResponse::Ok().json(serde_json::json!({
            "status": "failed",
            "error": message,
        })),
    }
}

/// Download a finished schedule as CSV.
#[get("/api/schedules/{id}/csv")]
async fn api_schedule_csv(state: AppState, path: Path<JobPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such job" })),
    };
    entry.last_activity = Instant::now();
    let schedule = match &entry.state {
        JobState::Completed(schedule) => schedule,
        _ => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Schedule not ready" }))
        }
    };
    match schedule_csv(&entry.roster, schedule) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"schedule.csv\""))
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().body("export error")
        }
    }
}

/// Fetch a finished schedule as clipboard-ready text.
#[get("/api/schedules/{id}/summary")]
async fn api_schedule_summary(state: AppState, path: Path<JobPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such job" })),
    };
    entry.last_activity = Instant::now();
    match &entry.state {
        JobState::Completed(schedule) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(schedule_summary(&entry.roster, schedule)),
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": "Schedule not ready" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<JobId, JobEntry>::new()));

    // Background task: every 30 minutes, remove jobs inactive for 2+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive job(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_example_config)
            .service(api_create_schedule)
            .service(api_get_schedule)
            .service(api_schedule_csv)
            .service(api_schedule_summary)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
