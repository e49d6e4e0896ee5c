use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chirp_api::middleware::JwtAuthMiddleware;
use chirp_api::services::AuthService;
use chirp_api::{db, handlers, Config};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container healthchecks via CLI subcommand: `chirp-api healthcheck`
    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" {
            let port = std::env::var("CHIRP_API_PORT").unwrap_or_else(|_| "8080".to_string());
            let url = format!("http://127.0.0.1:{}/health", port);
            let resp = reqwest::Client::new()
                .get(&url)
                .send()
                .await
                .context("healthcheck request failed")?;
            if resp.status().is_success() {
                return Ok(());
            }
            anyhow::bail!("healthcheck HTTP status: {}", resp.status());
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting chirp-api v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let pool = db::create_pool(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    // Verify database connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;
    tracing::info!("Database pool created and verified");

    // Run database migrations
    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations completed");

    let auth_service = AuthService::new(
        pool.clone(),
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiry_hours,
    );

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let pool_data = web::Data::new(pool);
    let auth_data = web::Data::new(auth_service);
    let jwt_secret = config.auth.jwt_secret.clone();
    let allowed_origins = config.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(pool_data.clone())
            .app_data(auth_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Health check endpoints
            .route("/health", web::get().to(handlers::health_check))
            .route("/health/ready", web::get().to(handlers::readiness_check))
            .route("/health/live", web::get().to(handlers::liveness_check))
            .service(
                web::scope("/api/v1/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            .service(
                web::scope("/api/v1")
                    .wrap(JwtAuthMiddleware::new(&jwt_secret))
                    .service(
                        web::scope("/users")
                            .route("", web::get().to(handlers::list_users))
                            .route("/search", web::get().to(handlers::search_users))
                            .route("/{user_id}", web::get().to(handlers::get_user))
                            .route(
                                "/{user_id}/followers",
                                web::get().to(handlers::list_followers),
                            )
                            .route(
                                "/{user_id}/following",
                                web::get().to(handlers::list_following),
                            )
                            .service(
                                web::resource("/{user_id}/follow")
                                    .route(web::post().to(handlers::follow_user))
                                    .route(web::delete().to(handlers::unfollow_user)),
                            ),
                    )
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            )
                            .route(
                                "/{post_id}/comments",
                                web::post().to(handlers::create_comment),
                            )
                            .service(
                                web::resource("/{post_id}/likes")
                                    .route(web::get().to(handlers::list_post_likes))
                                    .route(web::post().to(handlers::like_post))
                                    .route(web::delete().to(handlers::unlike_post)),
                            ),
                    )
                    .service(
                        web::scope("/comments")
                            .route("/{comment_id}", web::delete().to(handlers::delete_comment))
                            .service(
                                web::resource("/{comment_id}/likes")
                                    .route(web::get().to(handlers::list_comment_likes))
                                    .route(web::post().to(handlers::like_comment))
                                    .route(web::delete().to(handlers::unlike_comment)),
                            ),
                    )
                    .service(
                        web::scope("/feed")
                            .route("/following", web::get().to(handlers::following_feed)),
                    ),
            )
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .workers(4)
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    tokio::select! {
        result = &mut server_task => {
            match result {
                Ok(result) => result.context("HTTP server terminated unexpectedly")?,
                Err(e) => return Err(anyhow::anyhow!("HTTP server task failed: {}", e)),
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            let _ = server_task.await;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
