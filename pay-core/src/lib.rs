pub mod calculations;
pub mod display;
pub mod models;

pub use calculations::{
    BracketProximity, BracketProximityError, ForecastError, JobComparison, JobOffer,
    MonthlyForecast, OvertimeScenario, OvertimeScenarioError, StateComparison, TakeHomeCalculator,
    TakeHomeError, WeekForecast, YearlyForecast, best_offer, bracket_proximity, compare_jobs,
    compare_states, forecast_monthly, forecast_yearly, overtime_scenario,
};
pub use models::*;
