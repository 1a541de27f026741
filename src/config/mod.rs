mod core;
mod loader;
pub mod validation;

pub use self::core::{EmailConfig, OutputConfig, RoiConfig, CONFIG_FILE_NAME, DEFAULT_BRAND};

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config,
};

pub use validation::{validate_config, validate_inputs, ConfigProblem, InputWarning};

/// Contents written by `pallet-roi init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# pallet-roi configuration
#
# Values under [defaults] replace the calculator's starting inputs.
# Command-line flags and --inputs files still take precedence.

[defaults]
manual_capture_time = 300      # seconds per pallet, by hand
automated_capture_time = 5     # seconds per pallet, automated
labor_rate = 22                # $/hour
avg_chargeback_cost = 125      # $ per chargeback
chargeback_incidence = 6       # % of pallets charged back
hours_per_dispute = 2.0
share_contested = 60           # % of chargebacks disputed
dispute_reduction = 65         # % less time per dispute
chargeback_reduction = 75      # % fewer chargebacks
# pallets_per_day = 500
# workdays_per_year = 250
# year1_cost = 15000
# ongoing_cost = 5000

[output]
default_format = "terminal"    # terminal | json | csv | markdown | email
# use_color = true
brand = "vMeasure"

[email]
# recipient_name = "Operations team"
"#;
