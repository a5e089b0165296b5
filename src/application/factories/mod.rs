mod output_factory;
mod validator_factory;

pub use output_factory::OutputFactory;
pub use validator_factory::ValidatorFactory;
