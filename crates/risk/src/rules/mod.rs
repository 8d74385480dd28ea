//! Built-in rule implementations and the startup composition of the rule set.

pub mod country;
pub mod disposable_domain;
pub mod high_risk_tld;
pub mod numeric_local_part;
pub mod signup_velocity;
pub mod trusted_domain;

pub use country::CountryRule;
pub use disposable_domain::DisposableDomainRule;
pub use high_risk_tld::HighRiskTldRule;
pub use numeric_local_part::NumericLocalPartRule;
pub use signup_velocity::SignupVelocityRule;
pub use trusted_domain::TrustedDomainRule;

use rev_core::config::RulesConfig;

use crate::rule::Rule;

/// Build the rule set described by `cfg`.
///
/// Called once at startup; the returned list is handed to the
/// [`Evaluator`](crate::evaluator::Evaluator) and never changes afterwards.
pub fn from_config(cfg: &RulesConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DisposableDomainRule {
            domains: cfg.disposable_domain.domains.clone(),
            weight: cfg.disposable_domain.weight,
        }),
        Box::new(HighRiskTldRule {
            tlds: cfg.high_risk_tld.tlds.clone(),
            weight: cfg.high_risk_tld.weight,
        }),
        Box::new(NumericLocalPartRule {
            min_digits: cfg.numeric_local_part.min_digits,
            weight: cfg.numeric_local_part.weight,
        }),
        Box::new(CountryRule {
            countries: cfg.country.countries.clone(),
            weight: cfg.country.weight,
        }),
        Box::new(SignupVelocityRule {
            threshold: cfg.signup_velocity.threshold,
            weight_per_signup: cfg.signup_velocity.weight_per_signup,
            cap: cfg.signup_velocity.cap,
        }),
        Box::new(TrustedDomainRule {
            domains: cfg.trusted_domain.domains.clone(),
            credit: cfg.trusted_domain.credit,
        }),
    ]
}
