pub mod module_filter;
pub mod policy_gate;

pub use module_filter::ModuleFilter;
pub use policy_gate::PolicyGate;
