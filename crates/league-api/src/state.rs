//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use league_auth::{
    AccessPolicy, AuthenticationFilter, Authenticator, CredentialStore, PasswordHasher, TokenCodec,
};
use league_core::config::AppConfig;
use league_database::repositories::{
    MatchRepository, PlayerRepository, SeasonRepository, TeamRepository, UserRepository,
};
use league_service::{
    AdminUserService, MatchService, PlayerService, SeasonService, TeamService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issue and verification
    pub token_codec: Arc<TokenCodec>,
    /// Identity lookups for sign-in and the request filter
    pub credential_store: Arc<dyn CredentialStore>,
    /// Sign-up and sign-in
    pub authenticator: Arc<Authenticator>,
    /// Per-request bearer token authentication
    pub auth_filter: Arc<AuthenticationFilter>,
    /// Route access rules
    pub access_policy: Arc<AccessPolicy>,

    // ── Services ─────────────────────────────────────────────
    /// User records
    pub user_service: Arc<UserService>,
    /// Admin role management
    pub admin_user_service: Arc<AdminUserService>,
    /// Teams
    pub team_service: Arc<TeamService>,
    /// Players
    pub player_service: Arc<PlayerService>,
    /// Seasons
    pub season_service: Arc<SeasonService>,
    /// Matches
    pub match_service: Arc<MatchService>,
}

impl AppState {
    /// Wires repositories, auth components and services.
    ///
    /// The credential store is injected so callers can choose between the
    /// PostgreSQL user table and an in-memory store.
    pub fn new(
        config: AppConfig,
        db_pool: PgPool,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Result<Self, league_core::AppError> {
        // ── Repositories ─────────────────────────────────────────
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let team_repo = Arc::new(TeamRepository::new(db_pool.clone()));
        let player_repo = Arc::new(PlayerRepository::new(db_pool.clone()));
        let season_repo = Arc::new(SeasonRepository::new(db_pool.clone()));
        let match_repo = Arc::new(MatchRepository::new(db_pool.clone()));

        // ── Auth ─────────────────────────────────────────────────
        let token_codec = Arc::new(TokenCodec::new(&config.auth)?);
        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&credential_store),
            Arc::new(PasswordHasher::new()),
            Arc::clone(&token_codec),
        )?);
        let auth_filter = Arc::new(AuthenticationFilter::new(
            Arc::clone(&token_codec),
            Arc::clone(&credential_store),
        ));
        let access_policy = Arc::new(AccessPolicy::league_default());

        // ── Services ─────────────────────────────────────────────
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let admin_user_service = Arc::new(AdminUserService::new(user_repo));
        let team_service = Arc::new(TeamService::new(Arc::clone(&team_repo)));
        let player_service = Arc::new(PlayerService::new(player_repo, Arc::clone(&team_repo)));
        let season_service = Arc::new(SeasonService::new(Arc::clone(&season_repo)));
        let match_service = Arc::new(MatchService::new(match_repo, season_repo, team_repo));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            token_codec,
            credential_store,
            authenticator,
            auth_filter,
            access_policy,
            user_service,
            admin_user_service,
            team_service,
            player_service,
            season_service,
            match_service,
        })
    }
}
