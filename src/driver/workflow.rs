//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::sync::Arc;

use crate::adapter::auth::StaticAuthService;
use crate::adapter::config::{expand_path, Config};
use crate::adapter::repositories::in_memory_motorcycle_repository::InMemoryMotorcycleRepository;
use crate::adapter::view_models::{InsertMotorcycleViewModel, ListMotorcyclesViewModel};
use crate::application::dto::insert_motorcycle_request::InsertMotorcycleRequest;
use crate::application::dto::insert_motorcycle_response::InsertMotorcycleResponse;
use crate::application::dto::list_motorcycles_request::ListMotorcyclesRequest;
use crate::application::use_cases::insert_motorcycle::InsertMotorcycleInteractor;
use crate::application::use_cases::list_motorcycles::ListMotorcyclesInteractor;

use super::cli::Args;

/// One entry of the requests file
#[derive(Debug, Clone, Deserialize)]
pub struct MotorcycleInput {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
}

/// Result counts of one workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub run_id: String,
    pub requested: usize,
    pub inserted: usize,
    pub failed: usize,
}

/// Load insert requests from a JSON array file
pub fn load_requests(path: &str) -> Result<Vec<MotorcycleInput>> {
    let expanded_path = expand_path(path);
    let content = fs::read_to_string(&expanded_path)
        .with_context(|| format!("Failed to read requests file: {}", expanded_path))?;
    let inputs: Vec<MotorcycleInput> =
        serde_json::from_str(&content).context("Failed to parse requests JSON")?;
    Ok(inputs)
}

/// Motorcycle Workflow
pub struct MotorcycleWorkflow {
    config: Config,
    repository: Arc<InMemoryMotorcycleRepository>,
    insert_interactor: InsertMotorcycleInteractor<InMemoryMotorcycleRepository, StaticAuthService>,
    list_interactor: ListMotorcyclesInteractor<InMemoryMotorcycleRepository, StaticAuthService>,
}

impl MotorcycleWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        // Repository and service implementations
        let repository = Arc::new(InMemoryMotorcycleRepository::new());
        let auth_service = Arc::new(StaticAuthService::from_config(&config));

        // Use Cases construction
        let insert_interactor =
            InsertMotorcycleInteractor::new(repository.clone(), auth_service.clone());
        let list_interactor = ListMotorcyclesInteractor::new(repository.clone(), auth_service);

        Self {
            config,
            repository,
            insert_interactor,
            list_interactor,
        }
    }

    /// Repository shared by the use cases
    pub fn repository(&self) -> Arc<InMemoryMotorcycleRepository> {
        self.repository.clone()
    }

    /// Execute the insert-then-list workflow
    pub async fn execute(&self, args: &Args) -> Result<WorkflowSummary> {
        let run_id = uuid::Uuid::new_v4().to_string();
        info!("Starting motominder run {}", run_id);
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration:");
        println!(
            "  User: {} (authenticated: {})",
            self.config.user_name, self.config.authenticated
        );

        let inputs = load_requests(&args.requests)?;
        println!(
            "✓ Loaded {} insert requests from {}",
            inputs.len(),
            args.requests
        );

        let mut summary = WorkflowSummary {
            run_id,
            requested: inputs.len(),
            inserted: 0,
            failed: 0,
        };

        for input in inputs {
            let request =
                match InsertMotorcycleRequest::new(input.make, input.model, input.year, input.vin)
                {
                    Ok(request) => request,
                    Err(e) => {
                        warn!("Skipping invalid insert request: {}", e);
                        summary.failed += 1;
                        let response = InsertMotorcycleResponse::failure(e);
                        self.print_insert_result(&response)?;
                        continue;
                    }
                };

            if args.dry_run {
                println!(
                    "  Would insert: {} {} {} (VIN {})",
                    request.year(),
                    request.make(),
                    request.model(),
                    request.vin()
                );
                continue;
            }

            let response = self.insert_interactor.handle(&request).await;
            if response.is_success() {
                summary.inserted += 1;
            } else {
                summary.failed += 1;
            }
            self.print_insert_result(&response)?;
        }

        if args.dry_run {
            println!("✓ Dry-run mode (nothing was inserted)");
        } else {
            let response = self
                .list_interactor
                .handle(&ListMotorcyclesRequest::new())
                .await;
            let view_model = ListMotorcyclesViewModel::from_response(&response)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&view_model)
                    .context("Failed to serialize motorcycle list")?
            );
        }

        println!(
            "✓ Run complete: {} inserted, {} failed",
            summary.inserted, summary.failed
        );
        info!(
            "Finished run {}: {} requested, {} inserted, {} failed",
            summary.run_id, summary.requested, summary.inserted, summary.failed
        );

        Ok(summary)
    }

    fn print_insert_result(&self, response: &InsertMotorcycleResponse) -> Result<()> {
        let view_model = InsertMotorcycleViewModel::from_response(response)?;
        println!(
            "{}",
            serde_json::to_string(&view_model).context("Failed to serialize insert result")?
        );
        Ok(())
    }
}
