pub mod subscriber_resolver;
pub mod subscription_gate;
