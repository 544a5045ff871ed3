//! Clinia Financial Engine Simulator
//!
//! Runs a sample commercial budget through the full engine pipeline:
//! pricing, payment plan, anticipation simulation, margin analysis (via the
//! debounced driver), and the margin-gated approval flow.

use chrono::Local;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinia_core::anticipation::AnticipationSimulator;
use clinia_core::approval::{ApprovalFlow, BudgetStatus};
use clinia_core::budget::{BudgetItem, PricingService};
use clinia_core::margin::{AnalysisInput, CostBreakdown, CostSnapshot, MarginDriver, MarginFilter};
use clinia_core::payment::{PaymentConfig, PaymentMethod, PlanCalculator};
use clinia_core::summary::SummaryService;
use clinia_shared::AppConfig;
use clinia_shared::types::{BudgetItemId, ProcedureId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinia=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    let settings = config.financial_settings();
    info!(
        margin_floor = %settings.margin_floor_percent,
        debounce_ms = settings.debounce_ms,
        "engine settings loaded"
    );

    // A sample budget: four veneers and a cleaning.
    let veneer = ProcedureId::new();
    let cleaning = ProcedureId::new();
    let items = vec![
        BudgetItem {
            id: BudgetItemId::new(),
            procedure_id: Some(veneer),
            procedure_name: "Porcelain veneer".to_string(),
            quantity: 4,
            unit_value: Decimal::new(35000, 2),
            category: Some("aesthetics".to_string()),
            sales_rep: None,
        },
        BudgetItem {
            id: BudgetItemId::new(),
            procedure_id: Some(cleaning),
            procedure_name: "Dental cleaning".to_string(),
            quantity: 1,
            unit_value: Decimal::new(18000, 2),
            category: Some("prevention".to_string()),
            sales_rep: None,
        },
    ];

    // Pricing
    let subtotal = PricingService::subtotal(&items);
    let final_total = PricingService::final_total(subtotal, Decimal::new(8000, 2));
    info!(%subtotal, %final_total, "budget priced");

    // Payment plan: credit card over three installments
    let payment = PaymentConfig::new(PaymentMethod::CreditCard, 3, Decimal::ZERO);
    let plan = PlanCalculator::build(final_total, &payment, Local::now().date_naive())?;
    info!(
        installment_value = %plan.installment_value,
        total_fees = %plan.total_fees,
        net_receive = %plan.net_receive,
        "payment plan built"
    );

    // Anticipation simulation
    let anticipation = AnticipationSimulator::simulate(final_total, &payment, &settings, true);
    info!(
        net_receive_24h = %anticipation.net_receive_24h,
        effective_loss = %anticipation.effective_loss_percent,
        viable = anticipation.is_viable(),
        "anticipation simulated"
    );

    // Margin analysis through the debounced driver
    let costs = CostSnapshot::new(settings.cost_per_minute)
        .with_breakdown(
            veneer,
            CostBreakdown::with_overhead_from_minutes(
                Decimal::new(8000, 2),
                Decimal::new(12000, 2),
                20,
                settings.cost_per_minute,
            ),
        )
        .with_breakdown(
            cleaning,
            CostBreakdown::with_overhead_from_minutes(
                Decimal::new(2000, 2),
                Decimal::new(6000, 2),
                30,
                settings.cost_per_minute,
            ),
        );

    let driver = MarginDriver::spawn(settings.clone());
    let mut snapshots = driver.subscribe();
    driver.submit(AnalysisInput {
        items,
        costs,
        filter: MarginFilter::new(),
    });
    snapshots.changed().await?;
    let snapshot = snapshots
        .borrow()
        .clone()
        .expect("driver committed a snapshot");
    let analysis = snapshot.analysis;
    info!(
        margin_percent = %analysis.margin_percent,
        total_profit = %analysis.total_profit,
        low_margin_items = analysis.low_margin_items.len(),
        "margin analysis committed"
    );

    // Approval: thin margin blocks, the manager PIN unlocks it
    let mut flow = ApprovalFlow::new(BudgetStatus::PendingReview);
    let decision = flow.attempt(Some(&analysis), &settings)?;
    if decision.required {
        info!(margin = %decision.margin_percent, "margin below floor, override required");
        flow.supply_pin(&config.security.manager_pin, &config.security.manager_pin)?;
    }
    info!(status = %flow.status(), "approval flow finished");

    // Final view-model
    let summary = SummaryService::build(&plan, &anticipation, Some(&analysis));
    println!("{}", serde_json::to_string_pretty(&summary)?);

    driver.shutdown().await;
    Ok(())
}
