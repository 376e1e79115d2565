/// Namespace used when no default namespace was configured.
pub const NONE_NAMESPACE: &str = "none";
