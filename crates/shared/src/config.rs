//! Application configuration management.
//!
//! Clinic-level profile values (margin floor, anticipation fees, the manager
//! override PIN) are loaded here once and handed to the engine as an explicit
//! [`FinancialSettings`] value. Calculators never read ambient state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Financial engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Clinic security store configuration.
    #[serde(default)]
    pub security: SecurityConfig,
}

/// Financial engine tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Minimum acceptable profit margin percentage. Budgets below this floor
    /// require a manager PIN override to approve.
    #[serde(default = "default_margin_floor_percent")]
    pub margin_floor_percent: Decimal,
    /// Effective-loss percentage above which receivables anticipation is
    /// reported as not advisable.
    #[serde(default = "default_anticipation_loss_threshold_percent")]
    pub anticipation_loss_threshold_percent: Decimal,
    /// Card intermediation fee, percent of the anticipated total, charged once.
    #[serde(default = "default_intermediation_fee_percent")]
    pub intermediation_fee_percent: Decimal,
    /// Anticipation fee, percent of the total, charged per installment.
    #[serde(default = "default_anticipation_fee_per_installment_percent")]
    pub anticipation_fee_per_installment_percent: Decimal,
    /// Clinic-wide operating cost per chair minute, used to derive the
    /// operational overhead component of procedure cost breakdowns.
    #[serde(default = "default_cost_per_minute")]
    pub cost_per_minute: Decimal,
    /// Debounce window for margin recomputation, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Clinic security store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Manager override PIN; exactly four ASCII digits. The default is a
    /// placeholder; deployments override it via `CLINIA__SECURITY__MANAGER_PIN`.
    #[serde(default = "default_manager_pin")]
    pub manager_pin: String,
}

fn default_margin_floor_percent() -> Decimal {
    Decimal::new(20, 0)
}

fn default_anticipation_loss_threshold_percent() -> Decimal {
    Decimal::new(10, 0)
}

fn default_intermediation_fee_percent() -> Decimal {
    Decimal::new(35, 1) // 3.5%
}

fn default_anticipation_fee_per_installment_percent() -> Decimal {
    Decimal::new(20, 1) // 2.0%
}

fn default_cost_per_minute() -> Decimal {
    Decimal::new(450, 2) // 4.50 per chair minute
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_manager_pin() -> String {
    "0000".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            margin_floor_percent: default_margin_floor_percent(),
            anticipation_loss_threshold_percent: default_anticipation_loss_threshold_percent(),
            intermediation_fee_percent: default_intermediation_fee_percent(),
            anticipation_fee_per_installment_percent:
                default_anticipation_fee_per_installment_percent(),
            cost_per_minute: default_cost_per_minute(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            manager_pin: default_manager_pin(),
        }
    }
}

/// Engine-facing settings snapshot passed into each calculator call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSettings {
    /// Minimum acceptable profit margin percentage.
    pub margin_floor_percent: Decimal,
    /// Effective-loss percentage above which anticipation is not advisable.
    pub anticipation_loss_threshold_percent: Decimal,
    /// Card intermediation fee percent, charged once.
    pub intermediation_fee_percent: Decimal,
    /// Anticipation fee percent, charged per installment.
    pub anticipation_fee_per_installment_percent: Decimal,
    /// Clinic-wide operating cost per chair minute.
    pub cost_per_minute: Decimal,
    /// Debounce window for margin recomputation, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for FinancialSettings {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for FinancialSettings {
    fn from(engine: &EngineConfig) -> Self {
        Self {
            margin_floor_percent: engine.margin_floor_percent,
            anticipation_loss_threshold_percent: engine.anticipation_loss_threshold_percent,
            intermediation_fee_percent: engine.intermediation_fee_percent,
            anticipation_fee_per_installment_percent: engine
                .anticipation_fee_per_installment_percent,
            cost_per_minute: engine.cost_per_minute,
            debounce_ms: engine.debounce_ms,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CLINIA").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Returns the engine-facing settings snapshot.
    #[must_use]
    pub fn financial_settings(&self) -> FinancialSettings {
        FinancialSettings::from(&self.engine)
    }

    /// Validates loaded values.
    ///
    /// # Errors
    ///
    /// Returns an error if the manager PIN is not exactly four ASCII digits
    /// or any fee percentage is negative.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let pin = &self.security.manager_pin;
        if pin.len() != 4 || !pin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(config::ConfigError::Message(
                "security.manager_pin must be exactly four digits".to_string(),
            ));
        }

        for (name, value) in [
            ("engine.margin_floor_percent", self.engine.margin_floor_percent),
            (
                "engine.anticipation_loss_threshold_percent",
                self.engine.anticipation_loss_threshold_percent,
            ),
            (
                "engine.intermediation_fee_percent",
                self.engine.intermediation_fee_percent,
            ),
            (
                "engine.anticipation_fee_per_installment_percent",
                self.engine.anticipation_fee_per_installment_percent,
            ),
            ("engine.cost_per_minute", self.engine.cost_per_minute),
        ] {
            if value.is_sign_negative() {
                return Err(config::ConfigError::Message(format!(
                    "{name} cannot be negative"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.engine.margin_floor_percent, dec!(20));
        assert_eq!(config.engine.anticipation_loss_threshold_percent, dec!(10));
        assert_eq!(config.engine.intermediation_fee_percent, dec!(3.5));
        assert_eq!(
            config.engine.anticipation_fee_per_installment_percent,
            dec!(2.0)
        );
        assert_eq!(config.engine.debounce_ms, 500);
        assert_eq!(config.security.manager_pin, "0000");
    }

    #[test]
    fn test_financial_settings_mirror_engine_config() {
        let config = AppConfig::default();
        let settings = config.financial_settings();
        assert_eq!(settings.margin_floor_percent, dec!(20));
        assert_eq!(settings.debounce_ms, 500);
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("CLINIA__ENGINE__MARGIN_FLOOR_PERCENT", Some("25")),
                ("CLINIA__SECURITY__MANAGER_PIN", Some("4321")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.engine.margin_floor_percent, dec!(25));
                assert_eq!(config.security.manager_pin, "4321");
            },
        );
    }

    #[rstest]
    #[case("123")]
    #[case("12345")]
    #[case("12a4")]
    #[case("")]
    fn test_validate_rejects_malformed_pin(#[case] pin: &str) {
        let config = AppConfig {
            security: SecurityConfig {
                manager_pin: pin.to_string(),
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        let mut config = AppConfig::default();
        config.engine.intermediation_fee_percent = dec!(-1);
        assert!(config.validate().is_err());
    }
}
