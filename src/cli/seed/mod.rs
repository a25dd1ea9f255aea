//! Seed command - registers random users for local testing

use clap::Args;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::api::state::UserServiceTrait;
use crate::config::{AppConfig, StorageBackend};
use crate::domain::DomainError;
use crate::infrastructure::logging;
use crate::infrastructure::user::CreateUserRequest;
use crate::util::RandomGenerator;

const SEED_PASSWORD_LENGTH: usize = 12;

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Number of users to create
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Fixed RNG seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Outcome of a seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    /// Users that already existed
    pub skipped: usize,
}

/// Run the seed command
pub async fn run(args: SeedArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    if config.storage.backend == StorageBackend::Memory {
        warn!("Seeding the in-memory store; users vanish when this command exits");
    }

    let service = crate::create_user_service(&config).await?;

    let mut generator = match args.seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::from_entropy(),
    };

    let summary = seed_users(service.as_ref(), &mut generator, args.count).await?;

    info!(
        created = summary.created,
        skipped = summary.skipped,
        "Seeding finished"
    );

    Ok(())
}

/// Register `count` random users, skipping ones that already exist
pub async fn seed_users<R: Rng>(
    service: &dyn UserServiceTrait,
    generator: &mut RandomGenerator<R>,
    count: usize,
) -> Result<SeedSummary, DomainError> {
    let mut summary = SeedSummary::default();

    for _ in 0..count {
        let request = random_user_request(generator);
        let username = request.username.clone();

        match service.create(request).await {
            Ok(_) => {
                debug!(username = %username, "Seeded user");
                summary.created += 1;
            }
            Err(DomainError::Conflict { .. }) => {
                debug!(username = %username, "User already exists, skipping");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

fn random_user_request<R: Rng>(generator: &mut RandomGenerator<R>) -> CreateUserRequest {
    CreateUserRequest {
        username: generator.random_owner(),
        password: generator.random_string(SEED_PASSWORD_LENGTH),
        full_name: generator.random_full_name(),
        email: generator.random_email(),
    }
}
