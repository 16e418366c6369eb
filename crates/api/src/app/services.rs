//! Service wiring: repositories, use cases and their command handlers.

use std::sync::Arc;

use hireboard_infra::postgres;
use hireboard_infra::{
    InMemoryOfferRepository, InMemoryRoleRepository, InMemoryUserRepository, PgOfferRepository,
    PgRoleRepository, PgUserRepository,
};
use hireboard_observability::{Logger, TracingLogger};
use hireboard_offers::{CreateOffer, DeleteOffer, GetOffer, OfferRepository};
use hireboard_users::{
    CreateRole, CreateUser, DeleteRole, GetUser, RoleRepository, UserRepository,
};

use crate::config::ApiConfig;

use super::handler::CommandHandler;

/// Repository ports the use cases are built on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub offers: Arc<dyn OfferRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            roles: Arc::new(InMemoryRoleRepository::new()),
            offers: Arc::new(InMemoryOfferRepository::new()),
        }
    }
}

/// One command handler per use case.
pub struct AppServices {
    pub create_user: CommandHandler<CreateUser>,
    pub get_user: CommandHandler<GetUser>,
    pub create_role: CommandHandler<CreateRole>,
    pub delete_role: CommandHandler<DeleteRole>,
    pub create_offer: CommandHandler<CreateOffer>,
    pub get_offer: CommandHandler<GetOffer>,
    pub delete_offer: CommandHandler<DeleteOffer>,
}

impl AppServices {
    pub fn new(repos: Repositories, logger: Arc<dyn Logger>) -> Self {
        let Repositories {
            users,
            roles,
            offers,
        } = repos;

        Self {
            create_user: CommandHandler::new(
                "CreateUser",
                CreateUser::new(users.clone()),
                logger.clone(),
            ),
            get_user: CommandHandler::new("GetUser", GetUser::new(users), logger.clone()),
            create_role: CommandHandler::new(
                "CreateRole",
                CreateRole::new(roles.clone()),
                logger.clone(),
            ),
            delete_role: CommandHandler::new("DeleteRole", DeleteRole::new(roles), logger.clone()),
            create_offer: CommandHandler::new(
                "CreateOffer",
                CreateOffer::new(offers.clone()),
                logger.clone(),
            ),
            get_offer: CommandHandler::new("GetOffer", GetOffer::new(offers.clone()), logger.clone()),
            delete_offer: CommandHandler::new("DeleteOffer", DeleteOffer::new(offers), logger),
        }
    }

    /// Services over fresh in-memory repositories, logging through `tracing`.
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory(), Arc::new(TracingLogger))
    }
}

/// Wire services from configuration: Postgres when a database is configured,
/// in-memory otherwise.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    let repos = match &config.database {
        Some(db) => {
            let pool = postgres::connect(&db.url, db.max_connections).await?;
            postgres::migrate(&pool).await?;
            tracing::info!(max_connections = db.max_connections, "using Postgres repositories");
            Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                roles: Arc::new(PgRoleRepository::new(pool.clone())),
                offers: Arc::new(PgOfferRepository::new(pool)),
            }
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory repositories");
            Repositories::in_memory()
        }
    };

    Ok(AppServices::new(repos, logger))
}
